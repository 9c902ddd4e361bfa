use thiserror::Error;

use crate::error::NumberError;

/// Result type used by the tokenizer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Offsets are byte offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression text was empty or contained only whitespace.
    #[error("Error: The expression is empty.")]
    EmptyExpression,
    /// A character that starts no token.
    #[error("Error at offset {offset}: Unknown token: {token}.")]
    UnknownToken {
        /// The unrecognized text.
        token:  String,
        /// Where the text starts.
        offset: usize,
    },
    /// Found a token that cannot appear at this position.
    #[error("Error at offset {offset}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
    /// A parenthesis without its partner.
    #[error("Error at offset {offset}: Unmatched parenthesis.")]
    UnmatchedParen {
        /// Offset of the parenthesis that has no partner.
        offset: usize,
    },
    /// A numeric literal that cannot be represented.
    #[error("Error at offset {offset}: {source}")]
    InvalidLiteral {
        /// Where the literal starts.
        offset: usize,
        /// Why the literal was rejected.
        source: NumberError,
    },
    /// The expression nests deeper than the configured maximum.
    #[error("Error at offset {offset}: Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:  usize,
        /// Where the limit was crossed.
        offset: usize,
    },
}
