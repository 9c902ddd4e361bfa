use thiserror::Error;

/// Result type used by the big-number engine.
pub type NumberResult<T> = Result<T, NumberError>;

/// Represents all errors that arbitrary-precision arithmetic can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The text is not an unsigned decimal number.
    #[error("Invalid numeric literal '{literal}'.")]
    Format {
        /// The rejected text.
        literal: String,
    },
    /// The value has more digits than the configured maximum.
    #[error("Result has {digits} digits, but at most {limit} are allowed.")]
    LimitExceeded {
        /// Number of digits the value would have.
        digits: usize,
        /// The configured maximum.
        limit:  usize,
    },
    /// A subtraction whose result would be negative.
    #[error("{minuend} - {subtrahend} would result in a negative number.")]
    NegativeResult {
        /// The left operand.
        minuend:    String,
        /// The right operand.
        subtrahend: String,
    },
    /// A division or remainder with a zero divisor.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The left operand.
        dividend: String,
    },
}
