//! Error types for validated single-number lookups.
//!
//! The plain XOR reduction never fails. These errors only come out of the
//! strict path, which counts occurrences before trusting the result.

use thiserror::Error;

/// Result type alias using the workspace's error type.
pub type Result<T> = std::result::Result<T, FinderError>;

/// Ways an input can break the "everything paired except one" rule.
///
/// Offending values are stored already rendered so the enum does not need to
/// be generic over the integer width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    /// Nothing to search
    #[error("input is empty")]
    EmptyInput,

    /// Every value has a partner
    #[error("every value is paired, no single value to return")]
    NoUnpairedValue,

    /// More than one value appears exactly once
    #[error("{count} values appear exactly once, expected one")]
    MultipleUnpaired { count: usize },

    /// A value appears three, five, ... times
    #[error("value {value} appears {count} times, expected once or twice")]
    OddMultiplicity { value: String, count: usize },

    /// A value appears four, six, ... times
    #[error("value {value} appears {count} times, expected exactly twice")]
    ExcessPairs { value: String, count: usize },
}

impl FinderError {
    pub fn odd_multiplicity(value: impl std::fmt::Display, count: usize) -> Self {
        Self::OddMultiplicity {
            value: value.to_string(),
            count,
        }
    }

    pub fn excess_pairs(value: impl std::fmt::Display, count: usize) -> Self {
        Self::ExcessPairs {
            value: value.to_string(),
            count,
        }
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
