use crate::{
    ast::BinaryOperator,
    bignum::BigInt,
    error::NumberResult,
    interpreter::evaluator::core::Context,
};

impl Context<'_> {
    /// Applies a binary operator to two values.
    ///
    /// `/` is floor division and `%` its remainder; `-` fails instead of going
    /// negative.
    ///
    /// # Errors
    /// Propagates the [`NumberError`](crate::error::NumberError) of the
    /// underlying operation.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{
    ///     ast::BinaryOperator,
    ///     bignum::BigInt,
    ///     config::DigitLimit,
    ///     interpreter::{bindings::Bindings, evaluator::core::Context},
    /// };
    ///
    /// let limit = DigitLimit::default();
    /// let bindings = Bindings::new();
    /// let context = Context::new(&bindings, limit);
    /// let seven = BigInt::from_u64(7, limit).unwrap();
    /// let two = BigInt::from_u64(2, limit).unwrap();
    ///
    /// let r = context.eval_binary(BinaryOperator::Div, &seven, &two).unwrap();
    /// assert_eq!(r.to_string(), "3");
    /// let r = context.eval_binary(BinaryOperator::Pow, &seven, &two).unwrap();
    /// assert_eq!(r.to_string(), "49");
    /// assert!(context.eval_binary(BinaryOperator::Sub, &two, &seven).is_err());
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &BigInt,
                       right: &BigInt)
                       -> NumberResult<BigInt> {
        let limit = self.limit();
        match op {
            BinaryOperator::Add => left.add(right, limit),
            BinaryOperator::Sub => left.sub(right),
            BinaryOperator::Mul => left.mul(right, limit),
            BinaryOperator::Div => left.floordiv(right),
            BinaryOperator::Rem => left.rem(right),
            BinaryOperator::Pow => left.pow(right, limit),
        }
    }
}
