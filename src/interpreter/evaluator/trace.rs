use crate::{
    ast::Expr,
    bignum::BigInt,
    config::DigitLimit,
    error::EvalResult,
    interpreter::{
        bindings::Bindings,
        evaluator::{core::Context, stepwise::Solver},
    },
};

/// Reduces `expr` pass by pass until only a value remains.
///
/// Returns the final value together with the rendering of the initial tree
/// followed by one rendering per pass; the last entry is the bare value.
/// Nothing is returned if any pass fails.
///
/// # Errors
/// Propagates the first [`RuntimeError`](crate::error::RuntimeError) raised by
/// a reduction pass.
///
/// # Example
/// ```
/// use stepcalc::{
///     config::{Config, DigitLimit},
///     interpreter::{bindings::Bindings, evaluator::trace::evaluate_with_trace, parser::parse},
/// };
///
/// let expr = parse("sqrt 9 + sqrt 4", &Config::default()).unwrap();
/// let (value, steps) = evaluate_with_trace(&expr, &Bindings::new(), DigitLimit::default()).unwrap();
///
/// assert_eq!(value.to_string(), "5");
/// assert_eq!(steps, ["(sqrt 9 + sqrt 4)", "(3 + sqrt 4)", "(3 + 2)", "5"]);
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_with_trace(expr: &Expr,
                           bindings: &Bindings,
                           limit: DigitLimit)
                           -> EvalResult<(BigInt, Vec<String>)> {
    let context = Context::new(bindings, limit);
    let mut steps = vec![expr.to_string()];
    let mut current = expr.clone();

    let mut pass = 0_usize;

    loop {
        if let Some(value) = current.as_numeric() {
            return Ok((value.clone(), steps));
        }
        current = Solver::new(&context).reduce_leftmost(&current)?;
        pass += 1;
        let rendered = current.to_string();
        tracing::debug!(pass, step = %rendered, "reduced");
        steps.push(rendered);
    }
}
