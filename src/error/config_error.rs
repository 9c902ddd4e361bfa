use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The maximum digit count must be positive.
    #[error("Invalid digit limit: the maximum digit count must be at least 1.")]
    ZeroDigitLimit,
    /// The maximum nesting depth must be positive.
    #[error("Invalid nesting depth: the maximum depth must be at least 1.")]
    ZeroNestingDepth,
}
