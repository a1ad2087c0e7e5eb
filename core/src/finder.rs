//! Lookup of the single unpaired value.
//!
//! The trusted functions assume the input is shaped correctly: every value
//! appears exactly twice except one. They never fail and, given input that
//! breaks the rule, quietly return the XOR of everything. Use
//! [`find_single_checked`] or a strict [`SingleNumberFinder`] when the shape
//! of the input is not guaranteed.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace, warn};
use unpaired_common::config::{FinderConfig, Validation};
use unpaired_common::error::{FinderError, Result};

use crate::element::XorElement;

/// Returns the value that appears once when every other value appears twice.
///
/// An empty slice yields `0`.
///
/// ```
/// assert_eq!(unpaired_core::single_number(&[4, 1, 2, 1, 2]), 4);
/// ```
pub fn single_number(nums: &[i32]) -> i32 {
    find_single(nums)
}

/// [`single_number`] for any supported integer width.
pub fn find_single<T: XorElement>(nums: &[T]) -> T {
    trace!(len = nums.len(), "xor reduction");
    xor_fold(nums)
}

/// XORs every item of `values` into a zeroed accumulator in a single pass.
///
/// Accepts owned values or references, so slices, vectors and arbitrary
/// iterators all work.
pub fn xor_fold<T, I>(values: I) -> T
where
    T: XorElement,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    values
        .into_iter()
        .fold(T::ZERO, |acc, x| acc ^ *x.borrow())
}

/// Validates the pairing rule before answering.
///
/// Counts every value, then walks them in order of first appearance and
/// reports the first one seen too often. Only once every value appears once or
/// twice does it check that exactly one value is unpaired.
pub fn find_single_checked<T: XorElement>(nums: &[T]) -> Result<T> {
    check_pairing(nums).inspect_err(|err| warn!(len = nums.len(), %err, "rejected input"))
}

fn check_pairing<T: XorElement>(nums: &[T]) -> Result<T> {
    if nums.is_empty() {
        return Err(FinderError::EmptyInput);
    }

    let mut counts: HashMap<T, usize> = HashMap::with_capacity(nums.len() / 2 + 1);
    let mut first_seen: Vec<T> = Vec::new();

    for &value in nums {
        match counts.entry(value) {
            Entry::Occupied(mut slot) => *slot.get_mut() += 1,
            Entry::Vacant(slot) => {
                slot.insert(1);
                first_seen.push(value);
            }
        }
    }

    let mut lone: Option<T> = None;
    let mut unpaired: usize = 0;

    for value in first_seen {
        match counts[&value] {
            1 => {
                unpaired += 1;
                lone.get_or_insert(value);
            }
            2 => {}
            count if count % 2 == 1 => return Err(FinderError::odd_multiplicity(value, count)),
            count => return Err(FinderError::excess_pairs(value, count)),
        }
    }

    match (unpaired, lone) {
        (1, Some(value)) => Ok(value),
        (0, _) => Err(FinderError::NoUnpairedValue),
        (count, _) => Err(FinderError::MultipleUnpaired { count }),
    }
}

/// A configured single-number lookup.
///
/// Holds no state between calls; one finder can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleNumberFinder {
    cfg: FinderConfig,
}

impl SingleNumberFinder {
    pub fn new(cfg: FinderConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.cfg
    }

    /// Finds the unpaired value according to the configured [`Validation`].
    ///
    /// With [`Validation::Trusted`] this never returns an error.
    pub fn find<T: XorElement>(&self, nums: &[T]) -> Result<T> {
        let found = match self.cfg.validation {
            Validation::Trusted => find_single(nums),
            Validation::Strict => find_single_checked(nums)?,
        };

        if self.cfg.log_results {
            debug!(len = nums.len(), result = %found, "single value found");
        }

        Ok(found)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
