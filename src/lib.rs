//! # stepcalc
//!
//! stepcalc evaluates arithmetic expressions over arbitrarily large
//! non-negative integers and shows how it got there: next to the final value
//! it produces a trace with one line per reduction step.
//!
//! ```
//! use stepcalc::{config::Config, get_result, interpreter::bindings::bind};
//!
//! let config = Config::default();
//! let bindings = bind([("x", "2")], config.digit_limit()).unwrap();
//! let evaluation = get_result("3 * x + 1", &bindings, &config).unwrap();
//!
//! assert_eq!(evaluation.value.to_string(), "7");
//! assert_eq!(evaluation.trace_text(), "3 * x + 1\n((3 * x) + 1)\n((3 * 2) + 1)\n(6 + 1)\n7");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    bignum::BigInt,
    config::Config,
    interpreter::{bindings::Bindings, evaluator::trace::evaluate_with_trace},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types. Trees are
/// built by the parser, rebuilt by every reduction pass, and rendered into
/// the fully parenthesised form used in traces.
pub mod ast;
/// Arbitrary-precision unsigned integers.
///
/// Values are stored as decimal digits, least significant first, and every
/// operation checks its result against an explicit digit limit.
///
/// # Responsibilities
/// - Parses and renders decimal text.
/// - Implements addition, subtraction, multiplication, floor division,
///   remainder, exponentiation and integer square root.
/// - Rejects negative results, zero divisors and oversized values.
pub mod bignum;
/// Settings shared by parsing and evaluation.
pub mod config;
/// Provides error types for every stage.
///
/// This module defines the errors raised while building numbers, binding
/// variables, parsing and evaluating, together with the top-level [`Error`]
/// returned by [`get_result`].
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Attaches offsets, operands and failing sub-expressions for context.
pub mod error;
/// Ties together tokenizing, parsing, binding and evaluation.
pub mod interpreter;
/// General helpers used across the crate.
pub mod util;

pub use crate::{error::Error, interpreter::parser::parse};

/// Outcome of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The final value.
    pub value: BigInt,
    /// The source text followed by the rendering of every reduction step,
    /// ending with the bare final value.
    pub trace: Vec<String>,
}

impl Evaluation {
    /// Joins the trace lines with newlines.
    #[must_use]
    pub fn trace_text(&self) -> String {
        self.trace.join("\n")
    }
}

/// Parses `source` and reduces it step by step.
///
/// The first trace line is `source` exactly as given, the second the
/// rendering of the parsed tree, and every further line the tree after one
/// more reduction.
///
/// # Errors
/// Returns [`Error::Parse`] if `source` is not a valid expression and
/// [`Error::Runtime`] if evaluation fails. No partial trace is returned.
///
/// # Examples
/// ```
/// use stepcalc::{config::Config, get_result, interpreter::bindings::Bindings};
///
/// let config = Config::default();
/// let bindings = Bindings::new();
///
/// let evaluation = get_result("5 % 2 + 0", &bindings, &config).unwrap();
/// assert_eq!(evaluation.trace, ["5 % 2 + 0", "((5 % 2) + 0)", "(1 + 0)", "1"]);
///
/// // 'y' is not bound
/// assert!(get_result("y + 1", &bindings, &config).is_err());
/// ```
#[tracing::instrument(level = "debug", skip(bindings, config))]
pub fn get_result(source: &str, bindings: &Bindings, config: &Config) -> Result<Evaluation, Error> {
    let expr = parse(source, config)?;
    let (value, steps) = evaluate_with_trace(&expr, bindings, config.digit_limit())?;

    let mut trace = Vec::with_capacity(steps.len() + 1);
    trace.push(source.to_string());
    trace.extend(steps);

    Ok(Evaluation { value, trace })
}
