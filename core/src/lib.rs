//! # Unpaired Core
//!
//! Finds the one value in a slice where every other value appears exactly twice.
//!
//! The whole crate rests on one observation: XOR is commutative and associative,
//! and `x ^ x == 0`. Folding every element into a zeroed accumulator cancels
//! each pair, leaving only the value without a partner.
//!
//! * **[`finder`]**: the lookup operations, trusted and validated.
//! * **[`accumulator`]**: an incremental form for values that arrive piecewise.
//! * **[`element`]**: the integer widths the finder accepts.

pub mod accumulator;
pub mod element;
pub mod finder;

pub use accumulator::XorAccumulator;
pub use element::XorElement;
pub use finder::{SingleNumberFinder, find_single, find_single_checked, single_number, xor_fold};
