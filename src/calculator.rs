/// The evaluator module applies an operator to two operands.
///
/// It is the whole arithmetic core of the crate: addition, subtraction,
/// multiplication and division over `f64`, with division by zero reported as
/// a [`RuntimeError`](crate::error::RuntimeError) instead of a sentinel value.
pub mod evaluator;
/// The operator module defines the four supported operators.
///
/// It maps operators to and from their symbols (`+ - * /`) and resolves
/// operator names (`add`, `subtract`, `multiply`, `divide`).
///
/// # Responsibilities
/// - Declares the `Operator` enum.
/// - Resolves names and symbols without ever failing on unknown input.
/// - Parses user supplied text (symbol or name) for the command line.
pub mod operator;
