/// Controls how much a finder trusts its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Assume every value is paired except one and XOR straight through.
    ///
    /// Never fails. An empty slice yields zero.
    #[default]
    Trusted,
    /// Count occurrences first and reject input that breaks the pairing rule.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FinderConfig {
    /// Input checking performed before the XOR reduction.
    pub validation: Validation,
    /// Emits a debug event with the result of every lookup.
    ///
    /// Has no effect unless a subscriber accepts `debug` for `unpaired_core`.
    pub log_results: bool,
}

impl FinderConfig {
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            ..Self::default()
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
