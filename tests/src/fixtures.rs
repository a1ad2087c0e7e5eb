use unpaired_core::XorElement;

/// Builds an input where each of `pairs` appears twice and `lone` once.
///
/// The lone value is placed in the middle so it is neither first nor last.
pub fn paired_with<T: XorElement>(lone: T, pairs: &[T]) -> anyhow::Result<Vec<T>> {
    anyhow::ensure!(
        !pairs.contains(&lone),
        "lone value {lone} must not also be paired"
    );

    let mut nums: Vec<T> = Vec::with_capacity(pairs.len() * 2 + 1);
    nums.extend_from_slice(pairs);
    nums.push(lone);
    nums.extend(pairs.iter().rev());

    Ok(nums)
}

/// Removes duplicates while keeping first-appearance order.
pub fn distinct<T: XorElement>(values: &[T]) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}
