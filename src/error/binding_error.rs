use thiserror::Error;

use crate::error::NumberError;

/// Errors raised while turning `(name, value)` text pairs into bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Variable names consist of ASCII letters only.
    #[error("Invalid variable name '{name}': only letters a-z and A-Z are allowed.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The value is not an unsigned decimal number within the digit limit.
    #[error("Invalid value for variable '{name}': {source}")]
    InvalidValue {
        /// The variable being bound.
        name:   String,
        /// Why the value was rejected.
        source: NumberError,
    },
    /// The same name was bound twice.
    #[error("Variable '{name}' is bound more than once.")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}
