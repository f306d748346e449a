//! # fourfn
//!
//! fourfn is a four-function arithmetic evaluator written in Rust.
//! It adds, subtracts, multiplies and divides two `f64` operands, and reports
//! division by zero as a single, uniformly typed error value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
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

use log::{debug, info};

use crate::{
    calculator::{evaluator::evaluate, operator::Operator},
    error::RuntimeError,
};

/// The arithmetic core.
///
/// This module holds the operator table, the operator-name resolver and the
/// evaluator itself. Everything in it is pure: no state is kept between calls.
///
/// # Responsibilities
/// - Defines the `Operator` enum and its symbol and name mappings.
/// - Evaluates an operator applied to two operands.
/// - Reports division by zero as a value, never as a panic.
pub mod calculator;
/// Provides the error types of the crate.
///
/// This module defines the errors for reading textual input and the outcome
/// of evaluations that do not produce a number. Each error implements
/// `Display` with a human readable message and `std::error::Error`.
pub mod error;

/// Evaluates `left operator right`, where `operator` is given as text.
///
/// The operator may be a symbol (`+`, `-`, `*`, `/`) or a name (`add`,
/// `subtract`, `multiply`, `divide`).
///
/// # Errors
/// Returns an error if the operator text is not recognized, or if the
/// evaluation divides by zero.
///
/// # Examples
/// ```
/// use fourfn::calculate;
///
/// assert_eq!(calculate(6.0, "/", 3.0).unwrap(), 2.0);
/// assert_eq!(calculate(6.0, "divide", 3.0).unwrap(), 2.0);
///
/// // Division by zero is reported, not turned into infinity.
/// assert!(calculate(5.0, "/", 0.0).is_err());
///
/// // So is an unknown operator.
/// assert!(calculate(5.0, "modulo", 2.0).is_err());
/// ```
pub fn calculate(left: f64, operator: &str, right: f64) -> Result<f64, Box<dyn std::error::Error>> {
    let op: Operator = operator.parse()?;
    debug!("Evaluating {left} {op} {right} ({})", op.name());

    match evaluate(left, right, op) {
        Ok(value) => Ok(value),
        Err(e @ RuntimeError::DivisionByZero) => {
            info!("Division by zero requested: {left} {op} {right}");
            Err(Box::new(e))
        },
    }
}
