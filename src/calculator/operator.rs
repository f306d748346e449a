use std::{fmt, str::FromStr};

use crate::error::InputError;

/// Represents one of the four arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use fourfn::calculator::operator::Operator;
    ///
    /// assert_eq!(Operator::Multiply.symbol(), "*");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the name of the operator, as accepted by
    /// [`resolve_operator_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Looks up an operator by its symbol.
    ///
    /// Only the exact symbols `+`, `-`, `*` and `/` are recognized. Anything
    /// else yields `None`.
    ///
    /// # Example
    /// ```
    /// use fourfn::calculator::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InputError;

    /// Parses either a symbol (`+`) or a name (`add`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).or_else(|| resolve_operator_name(s))
                            .ok_or_else(|| InputError::UnknownOperator { text: s.to_string() })
    }
}

/// Resolves an operator name to its operator.
///
/// The lookup is exact: casing and surrounding whitespace are not ignored.
/// Unrecognized names are a normal outcome and yield `None`.
///
/// # Example
/// ```
/// use fourfn::calculator::operator::{Operator, resolve_operator_name};
///
/// assert_eq!(resolve_operator_name("add").map(Operator::symbol), Some("+"));
/// assert_eq!(resolve_operator_name("modulo"), None);
/// ```
#[must_use]
pub fn resolve_operator_name(name: &str) -> Option<Operator> {
    match name {
        "add" => Some(Operator::Add),
        "subtract" => Some(Operator::Subtract),
        "multiply" => Some(Operator::Multiply),
        "divide" => Some(Operator::Divide),
        _ => None,
    }
}
