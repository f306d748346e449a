#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading textual input.
pub enum InputError {
    /// The text is neither an operator symbol nor an operator name.
    UnknownOperator {
        /// The text that was supplied.
        text: String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { text } => write!(f,
                                                     "Unknown operator '{text}'. Expected one of + - * / \
                                                      or add, subtract, multiply, divide."),
        }
    }
}

impl std::error::Error for InputError {}
