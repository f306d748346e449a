use crate::{calculator::operator::Operator, error::RuntimeError};

/// Result type used by the evaluator.
///
/// Evaluation returns either the computed number or a `RuntimeError`
/// describing why no number exists.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates `left op right`.
///
/// Addition, subtraction and multiplication follow IEEE-754 for every input,
/// including infinities and NaN. Division does too, except that a divisor
/// equal to zero (`0.0` or `-0.0`) yields [`RuntimeError::DivisionByZero`].
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `op`: The operator to apply.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use fourfn::{
///     calculator::{evaluator::evaluate, operator::Operator},
///     error::RuntimeError,
/// };
///
/// assert_eq!(evaluate(6.0, 3.0, Operator::Divide), Ok(2.0));
/// assert_eq!(evaluate(2.0, 3.0, Operator::Multiply), Ok(6.0));
/// assert_eq!(evaluate(5.0, 0.0, Operator::Divide), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(left: f64, right: f64, op: Operator) -> EvalResult<f64> {
    use Operator::{Add, Divide, Multiply, Subtract};

    Ok(match op {
           Add => left + right,
           Subtract => left - right,
           Multiply => left * right,
           Divide => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero);
               }
               left / right
           },
       })
}
