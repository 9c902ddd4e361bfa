use crate::{ast::UnaryOperator, bignum::BigInt, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Applies a unary operator to a value.
    ///
    /// `sqrt` is the integer square root, rounded down. It cannot fail.
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &BigInt) -> BigInt {
        match op {
            UnaryOperator::Sqrt => value.sqrt(),
        }
    }
}
