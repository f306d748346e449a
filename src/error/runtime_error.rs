#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all outcomes of an evaluation that are not a number.
pub enum RuntimeError {
    /// Attempted division by zero (positive or negative).
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Cannot divide by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
