//! Integration scenarios for the `unpaired` workspace.
//!
//! Everything here drives the public API of `unpaired-core` the way a caller
//! would, with configuration from `unpaired-common`.

pub mod fixtures;
