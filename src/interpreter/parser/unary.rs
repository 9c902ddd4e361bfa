use crate::{
    ast::{Expr, UnaryOperator},
    bignum::BigInt,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::TokenKind,
        parser::core::{TokenStream, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | variable
///              | "(" expression ")"
///              | "sqrt" primary
/// ```
///
/// `sqrt` takes a single primary as its operand, not a whole expression, so
/// `sqrt 4 + 5` is `(sqrt 4) + 5`. Parenthesize to take the root of a sum.
///
/// # Errors
/// - [`ParseError::InvalidLiteral`] if a number has more digits than the
///   configured limit.
/// - [`ParseError::UnmatchedParen`] if a `(` is not closed.
/// - [`ParseError::UnexpectedToken`] for tokens that cannot start an
///   expression.
pub fn parse_primary(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = stream.eat();
    let offset = token.span.start;

    match token.kind {
        TokenKind::Number => {
            BigInt::from_decimal(token.text(stream.source()), stream.limit())
                .map(Expr::numeric)
                .map_err(|source| ParseError::InvalidLiteral { offset, source })
        },
        TokenKind::OpenParen => {
            let expr = parse_expression(stream)?;
            if stream.eat().kind != TokenKind::ClosedParen {
                return Err(ParseError::UnmatchedParen { offset });
            }
            Ok(expr)
        },
        TokenKind::Sqrt => {
            let operand = stream.nested(offset, parse_primary)?;
            Ok(Expr::unary(UnaryOperator::Sqrt, operand))
        },
        TokenKind::Variable => Ok(Expr::variable(token.text(stream.source()))),
        _ => Err(ParseError::UnexpectedToken { token: token.describe(stream.source()),
                                               offset }),
    }
}
