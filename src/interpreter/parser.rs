/// Precedence climbing over binary operators.
///
/// Implements the operator loop: `+ -` bind weakest, then `* / %`, then
/// `**`. Operators of equal precedence associate to the left.
pub mod binary;
/// Token cursor and the parser entry points.
pub mod core;
/// Primary expressions: literals, variables, parenthesized groups and the
/// `sqrt` prefix.
pub mod unary;

pub use self::core::{TokenStream, parse, parse_expression};
