/// The bindings module turns caller-supplied variable text into values.
///
/// Names must be non-empty runs of ASCII letters and values unsigned decimal
/// text within the digit limit. The resulting map stays unchanged while an
/// expression is evaluated.
pub mod bindings;
/// The evaluator module computes values from expression trees.
///
/// It offers both a full recursive evaluation and the stepwise leftmost
/// reduction that rewrites one sub-expression per pass, recording every
/// intermediate form.
///
/// # Responsibilities
/// - Evaluates expression nodes with the big-number operations.
/// - Resolves variables through the bindings.
/// - Reports runtime errors such as a zero divisor or a negative difference,
///   naming the sub-expression that failed.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw source text and produces tokens for numbers,
/// variable names, operators and parentheses, each carrying its byte span.
///
/// # Responsibilities
/// - Converts the input into tokens with source offsets.
/// - Terminates the token list with an end-of-input sentinel.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Binary operators are parsed by precedence climbing; `sqrt` binds only the
/// primary that follows it.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) trees.
/// - Validates the grammar, reporting errors with their offset.
/// - Bounds nesting depth according to the configuration.
pub mod parser;
