/// Input errors.
///
/// Raised when textual input handed to the crate (an operator given as a
/// symbol or a name) cannot be understood. These happen before any
/// arithmetic takes place.
pub mod input_error;
/// Runtime errors.
///
/// Contains the outcomes of an evaluation that do not produce a number. The
/// only such outcome is division by zero.
pub mod runtime_error;

pub use input_error::InputError;
pub use runtime_error::RuntimeError;
