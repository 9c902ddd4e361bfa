use crate::{
    ast::Expr,
    bignum::BigInt,
    config::DigitLimit,
    error::{EvalResult, RuntimeError},
    interpreter::bindings::Bindings,
    util::stack::ensure_sufficient_stack,
};

/// Stores what evaluation needs besides the tree itself.
///
/// A `Context` borrows the variable bindings, which stay unchanged for the
/// whole evaluation, and carries the digit limit every result must respect.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    bindings: &'a Bindings,
    limit:    DigitLimit,
}

impl<'a> Context<'a> {
    #[must_use]
    pub const fn new(bindings: &'a Bindings, limit: DigitLimit) -> Self {
        Self { bindings, limit }
    }

    #[must_use]
    pub const fn limit(&self) -> DigitLimit {
        self.limit
    }

    /// Evaluates an expression tree to its value in one go.
    ///
    /// Binary nodes evaluate both children, then apply the operator; `sqrt`
    /// takes the integer square root of its evaluated operand; variables are
    /// looked up in the bindings.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownVariable`] for a name without a binding.
    /// - [`RuntimeError::Arithmetic`] for a negative difference, a zero
    ///   divisor or a result over the digit limit, naming the
    ///   sub-expression that failed.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{
    ///     config::{Config, DigitLimit},
    ///     interpreter::{bindings::bind, evaluator::core::Context, parser::parse},
    /// };
    ///
    /// let bindings = bind([("x", "4")], DigitLimit::default()).unwrap();
    /// let context = Context::new(&bindings, DigitLimit::default());
    /// let expr = parse("sqrt x * 10 + 1", &Config::default()).unwrap();
    /// assert_eq!(context.eval(&expr).unwrap().to_string(), "21");
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<BigInt> {
        ensure_sufficient_stack(|| match expr {
            Expr::Numeric { value } => Ok(value.clone()),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                Ok(Self::eval_unary(*op, &operand))
            },
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right)
                    .map_err(|source| RuntimeError::Arithmetic { expression: expr.to_string(),
                                                                 source })
            },
        })
    }

    /// Looks up `name` in the bindings.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if `name` is not bound.
    pub fn eval_variable(&self, name: &str) -> EvalResult<BigInt> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
