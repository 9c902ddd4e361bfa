use crate::{
    ast::Expr,
    error::EvalResult,
    interpreter::evaluator::core::Context,
    util::stack::ensure_sufficient_stack,
};

/// Performs one leftmost-reduction pass over an expression tree.
///
/// A pass walks the tree in pre-order, left child first, and replaces the
/// first immediately reducible node (see [`Expr::is_reducible`]) with the
/// literal it evaluates to. Once that has happened every remaining node is
/// copied unchanged.
///
/// A `Solver` is good for one pass only; create a new one for the next.
#[derive(Debug)]
pub struct Solver<'c, 'a> {
    context: &'c Context<'a>,
    reduced: bool,
}

impl<'c, 'a> Solver<'c, 'a> {
    #[must_use]
    pub const fn new(context: &'c Context<'a>) -> Self {
        Self { context,
               reduced: false }
    }

    /// Returns `true` once this pass has rewritten a node.
    #[must_use]
    pub const fn has_reduced(&self) -> bool {
        self.reduced
    }

    /// Rebuilds `expr` with its leftmost reducible node evaluated.
    ///
    /// A tree with nothing left to reduce (a bare literal) is returned as is.
    ///
    /// # Errors
    /// Propagates the [`RuntimeError`](crate::error::RuntimeError) raised
    /// while evaluating the rewritten node.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{
    ///     config::{Config, DigitLimit},
    ///     interpreter::{
    ///         bindings::Bindings,
    ///         evaluator::{core::Context, stepwise::Solver},
    ///         parser::parse,
    ///     },
    /// };
    ///
    /// let bindings = Bindings::new();
    /// let context = Context::new(&bindings, DigitLimit::default());
    /// let expr = parse("1 + 2 + 3 * 4", &Config::default()).unwrap();
    ///
    /// let mut solver = Solver::new(&context);
    /// let next = solver.reduce_leftmost(&expr).unwrap();
    /// assert!(solver.has_reduced());
    /// assert_eq!(next.to_string(), "(3 + (3 * 4))");
    /// ```
    pub fn reduce_leftmost(&mut self, expr: &Expr) -> EvalResult<Expr> {
        ensure_sufficient_stack(|| {
            if self.reduced {
                return Ok(expr.clone());
            }
            if expr.is_reducible() {
                let value = self.context.eval(expr)?;
                self.reduced = true;
                return Ok(Expr::numeric(value));
            }

            match expr {
                Expr::Numeric { .. } | Expr::Variable { .. } => Ok(expr.clone()),
                Expr::Unary { op, operand } => {
                    let operand = self.reduce_leftmost(operand)?;
                    Ok(Expr::unary(*op, operand))
                },
                Expr::Binary { left, op, right } => {
                    let left = self.reduce_leftmost(left)?;
                    let right = self.reduce_leftmost(right)?;
                    Ok(Expr::binary(left, *op, right))
                },
            }
        })
    }
}
