/// Arbitrary-precision arithmetic errors.
///
/// Raised by [`BigInt`](crate::bignum::BigInt) construction and arithmetic:
/// malformed literals, values over the digit limit, negative differences and
/// division by zero.
pub mod number_error;
/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of an
/// expression. Parse errors include unknown characters, unexpected tokens,
/// unbalanced parentheses, invalid literals and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing an expression:
/// unknown variables and failed arithmetic on a specific sub-expression.
pub mod runtime_error;
/// Variable binding errors.
pub mod binding_error;
/// Configuration errors.
pub mod config_error;

use thiserror::Error;

pub use binding_error::BindingError;
pub use config_error::ConfigError;
pub use number_error::{NumberError, NumberResult};
pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};

/// Any failure of a complete evaluation, whatever stage it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression could not be reduced to a value.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A variable binding was rejected.
    #[error(transparent)]
    Binding(#[from] BindingError),
    /// A configuration value was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the arithmetic failure behind this error, if there is one.
    ///
    /// Arithmetic failures surface either while reducing (`Runtime`) or while
    /// building a literal or binding (`Parse`, `Binding`).
    #[must_use]
    pub const fn number_error(&self) -> Option<&NumberError> {
        match self {
            Self::Runtime(RuntimeError::Arithmetic { source, .. })
            | Self::Parse(ParseError::InvalidLiteral { source, .. })
            | Self::Binding(BindingError::InvalidValue { source, .. }) => Some(source),
            _ => None,
        }
    }
}
