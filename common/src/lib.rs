//! Shared building blocks for the `unpaired` workspace.
//!
//! * **[`config`]**: how a finder should treat its input.
//! * **[`error`]**: the error taxonomy for validated lookups.
//! * **[`logging`]**: the terminal formatter and subscriber setup.

pub mod config;
pub mod error;
pub mod logging;
