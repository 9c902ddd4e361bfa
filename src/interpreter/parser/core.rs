use crate::{
    ast::Expr,
    config::{Config, DigitLimit},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{binary::parse_binary, unary::parse_primary},
    },
};

/// Cursor over a token stream that always ends with [`TokenKind::End`].
///
/// Besides the position, the stream carries what the parsing functions need
/// from their surroundings: the source text for re-slicing literals, the
/// digit limit for building them, and the current nesting depth.
pub struct TokenStream<'src> {
    source:    &'src str,
    tokens:    Vec<Token>,
    position:  usize,
    depth:     usize,
    max_depth: usize,
    limit:     DigitLimit,
}

impl<'src> TokenStream<'src> {
    /// Wraps `tokens` scanned from `source`.
    ///
    /// An `End` sentinel is appended if `tokens` does not already end with
    /// one.
    #[must_use]
    pub fn new(source: &'src str, mut tokens: Vec<Token>, config: &Config) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::End) {
            tokens.push(Token { kind: TokenKind::End,
                                span: source.len()..source.len(), });
        }
        Self { source,
               tokens,
               position: 0,
               depth: 0,
               max_depth: config.max_depth(),
               limit: config.digit_limit() }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Consumes and returns the next token. The `End` sentinel is never
    /// consumed, so it is returned again on every later call.
    pub fn eat(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    #[must_use]
    pub const fn limit(&self) -> DigitLimit {
        self.limit
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if the new level exceeds the
    /// configured maximum, otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self,
                     offset: usize,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    offset });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Parses a full expression: one primary followed by any operator chain.
///
/// Grammar: `expression := primary (operator primary)*`
///
/// Stops in front of `)` or the end of input without consuming it.
///
/// # Errors
/// Propagates any error from the primary or binary parsers, and
/// [`ParseError::NestingTooDeep`] when the expression is nested too deeply.
pub fn parse_expression(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let offset = stream.peek().span.start;
    stream.nested(offset, |stream| {
              let left = parse_primary(stream)?;
              parse_binary(stream, left, 0)
          })
}

/// Parses `source` into an expression tree.
///
/// The whole input must form one expression: anything left over after it is
/// an error.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if `source` is empty or blank.
/// - [`ParseError::UnknownToken`] for characters outside the language.
/// - [`ParseError::UnexpectedToken`], [`ParseError::UnmatchedParen`] for
///   malformed expressions.
/// - [`ParseError::InvalidLiteral`] for literals over the digit limit.
/// - [`ParseError::NestingTooDeep`] when nesting exceeds the configured
///   depth.
///
/// # Example
/// ```
/// use stepcalc::{config::Config, interpreter::parser::parse};
///
/// let expr = parse("1 + 2 * 3", &Config::default()).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// assert!(parse("(1 + 2", &Config::default()).is_err());
/// ```
#[tracing::instrument(level = "debug", skip(config))]
pub fn parse(source: &str, config: &Config) -> ParseResult<Expr> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = tokenize(source)?;
    let mut stream = TokenStream::new(source, tokens, config);
    let expr = parse_expression(&mut stream)?;

    let rest = stream.peek();
    match rest.kind {
        TokenKind::End => Ok(expr),
        TokenKind::ClosedParen => Err(ParseError::UnmatchedParen { offset: rest.span.start }),
        _ => Err(ParseError::UnexpectedToken { token:  rest.describe(source),
                                               offset: rest.span.start, }),
    }
}
