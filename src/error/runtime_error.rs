use thiserror::Error;

use crate::error::NumberError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Represents all errors that can occur while reducing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that has no binding.
    #[error("Error: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operation on a sub-expression failed.
    #[error("Error in {expression}: {source}")]
    Arithmetic {
        /// Rendering of the sub-expression being reduced.
        expression: String,
        /// The underlying arithmetic failure.
        source:     NumberError,
    },
}
