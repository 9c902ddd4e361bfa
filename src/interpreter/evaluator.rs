/// Full recursive evaluation and the evaluation context.
///
/// Contains the context (bindings and digit limit) and the evaluator that
/// reduces a whole tree to a value in one call.
pub mod core;

/// Binary operator evaluation.
///
/// Maps each [`BinaryOperator`](crate::ast::BinaryOperator) onto the
/// corresponding big-number operation.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Leftmost reduction: rewrites one reducible node per pass.
pub mod stepwise;

/// Repeats reduction passes until a value remains, recording each form.
pub mod trace;
