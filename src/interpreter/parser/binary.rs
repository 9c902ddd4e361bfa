use crate::{
    ast::{BinaryOperator, Expr},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::TokenKind,
        parser::{core::TokenStream, unary::parse_primary},
    },
};

/// Extends `left` with every following operator of precedence at least
/// `min_precedence`, using precedence climbing.
///
/// After each operator and its right-hand primary, any run of operators that
/// binds tighter than that operator is folded into the right-hand side by
/// climbing at `min_precedence + 1`. Operators of equal precedence therefore
/// associate to the left, including `**`: `2 ** 2 ** 3` is `(2 ** 2) ** 3`.
///
/// The climb keeps `min_precedence + 1` as its floor rather than the level
/// of the operator just consumed, so once it has started it also takes in
/// operators of that operator's level: `8 / 2 ** 1 / 2` is
/// `8 / ((2 ** 1) / 2)`.
///
/// The loop stops in front of `)` or the end of input.
///
/// # Parameters
/// - `stream`: Token cursor positioned after `left`.
/// - `left`: The already-parsed left operand.
/// - `min_precedence`: Weakest operator this call may consume.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] if something other than an operator,
///   `)` or the end of input follows an operand.
/// - Any error from parsing the right-hand primaries.
pub fn parse_binary(stream: &mut TokenStream<'_>,
                    mut left: Expr,
                    min_precedence: u8)
                    -> ParseResult<Expr> {
    while let Some(op) = next_operator(stream)?
          && op.precedence() >= min_precedence
    {
        stream.eat();
        let mut right = parse_primary(stream)?;

        while let Some(next) = next_operator(stream)?
              && next.precedence() > op.precedence()
        {
            let offset = stream.peek().span.start;
            right = stream.nested(offset, |stream| {
                              parse_binary(stream, right, min_precedence + 1)
                          })?;
        }

        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Looks at the next token as a binary operator without consuming it.
///
/// Returns `None` at `)` or the end of input, where an expression is
/// complete.
fn next_operator(stream: &TokenStream<'_>) -> ParseResult<Option<BinaryOperator>> {
    let token = stream.peek();
    match token.kind {
        TokenKind::End | TokenKind::ClosedParen => Ok(None),
        kind => match token_to_binary_operator(kind) {
            Some(op) => Ok(Some(op)),
            None => Err(ParseError::UnexpectedToken { token:  token.describe(stream.source()),
                                                      offset: token.span.start, }),
        },
    }
}

/// Maps a token kind to its binary operator.
///
/// # Example
/// ```
/// use stepcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::DoubleStar), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::Modulo), Some(BinaryOperator::Rem));
/// assert_eq!(token_to_binary_operator(TokenKind::Sqrt), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Modulo => Some(BinaryOperator::Rem),
        TokenKind::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        error::ParseError,
        interpreter::parser::parse,
    };

    fn shape(source: &str) -> String {
        parse(source, &Config::default()).unwrap().to_string()
    }

    #[test]
    fn equal_precedence_associates_left() {
        assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(shape("8 / 4 % 3 * 2"), "(((8 / 4) % 3) * 2)");
        assert_eq!(shape("2 ** 2 ** 3"), "((2 ** 2) ** 3)");
    }

    #[test]
    fn tighter_operators_climb_right() {
        assert_eq!(shape("1 + 2 * 3 + 4 * 5"), "((1 + (2 * 3)) + (4 * 5))");
        assert_eq!(shape("2 ** 3 + 5 * 6 - 3"), "(((2 ** 3) + (5 * 6)) - 3)");
        assert_eq!(shape("1 + 2 * 3 ** 2"), "(1 + (2 * (3 ** 2)))");
        assert_eq!(shape("1 + 2 ** 3 * 4"), "(1 + ((2 ** 3) * 4))");
    }

    #[test]
    fn climb_floor_is_one_above_the_minimum() {
        assert_eq!(shape("8 / 2 ** 1 / 2"), "(8 / ((2 ** 1) / 2))");
        assert_eq!(shape("100 % 2 ** 3 % 3"), "(100 % ((2 ** 3) % 3))");
        assert_eq!(shape("1 * 2 ** 3 * 4"), "(1 * ((2 ** 3) * 4))");
        assert_eq!(shape("8 / 2 * 2"), "((8 / 2) * 2)");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(shape("(1 + 2) * (3 + 4 * 5)"), "((1 + 2) * (3 + (4 * 5)))");
        assert_eq!(shape("2 ** (1 + 2)"), "(2 ** (1 + 2))");
        assert_eq!(shape("((7))"), "7");
    }

    #[test]
    fn operand_followed_by_operand_is_rejected() {
        assert_eq!(parse("1 2", &Config::default()),
                   Err(ParseError::UnexpectedToken { token:  "'2'".to_string(),
                                                     offset: 2, }));
        assert!(parse("x y", &Config::default()).is_err());
    }

    #[test]
    fn dangling_operator_is_rejected() {
        assert_eq!(parse("1 +", &Config::default()),
                   Err(ParseError::UnexpectedToken { token:  "end of input".to_string(),
                                                     offset: 3, }));
        assert!(parse("* 2", &Config::default()).is_err());
    }
}
