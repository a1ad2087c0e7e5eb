#![cfg(test)]
use rand::seq::SliceRandom;
use unpaired_common::config::{FinderConfig, Validation};
use unpaired_common::error::FinderError;
use unpaired_common::logging;
use unpaired_core::{SingleNumberFinder, XorAccumulator, find_single_checked, single_number};

use crate::fixtures::paired_with;

#[test]
fn known_scenarios() {
    logging::init_logging();

    assert_eq!(single_number(&[2, 2, 1]), 1);
    assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
    assert_eq!(single_number(&[1]), 1);
    assert_eq!(single_number(&[0, 0, -7]), -7);
}

#[test]
fn empty_input_yields_identity() {
    assert_eq!(single_number(&[]), 0);
}

#[test]
fn shuffled_input_keeps_its_answer() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut nums = paired_with(-42, &[7, 0, i32::MAX, i32::MIN, -1, 13])?;

    for _ in 0..32 {
        nums.shuffle(&mut rng);
        assert_eq!(single_number(&nums), -42, "failed for {nums:?}");
    }

    Ok(())
}

#[test]
fn trusted_and_strict_agree_on_valid_input() -> anyhow::Result<()> {
    logging::init_logging();

    let nums = paired_with(99u64, &[1, 2, 3, u64::MAX])?;
    let trusted = SingleNumberFinder::default();
    let strict = SingleNumberFinder::new(FinderConfig {
        validation: Validation::Strict,
        log_results: true,
    });

    assert_eq!(trusted.find(&nums)?, 99);
    assert_eq!(strict.find(&nums)?, 99);

    Ok(())
}

#[test]
fn strict_finder_surfaces_broken_input() {
    logging::init_logging();

    let strict = SingleNumberFinder::new(FinderConfig::strict());

    let err = strict.find(&[1, 2]).unwrap_err();
    assert_eq!(err, FinderError::MultipleUnpaired { count: 2 });

    // The trusted path hands back the raw XOR instead
    assert_eq!(SingleNumberFinder::default().find(&[1, 2]), Ok(3));
}

#[test]
fn strict_errors_convert_into_anyhow() {
    fn run() -> anyhow::Result<i32> {
        Ok(find_single_checked(&[5, 5, 5])?)
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "value 5 appears 3 times, expected once or twice");
}

#[test]
fn accumulator_matches_slice_lookup_across_chunks() -> anyhow::Result<()> {
    let nums = paired_with(-3i16, &[100, -100, 0, 5])?;

    let mut acc = XorAccumulator::<i16>::new();
    for chunk in nums.chunks(3) {
        acc.extend(chunk);
    }

    assert_eq!(acc.len(), nums.len());
    assert_eq!(acc.finish(), -3);

    Ok(())
}

#[test]
fn fixture_rejects_paired_lone_value() {
    assert!(paired_with(1, &[1, 2]).is_err());
}
