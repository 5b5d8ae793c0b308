use std::fmt;

/// 1-based position of the argument that failed a shape check.
/// Rendered as an English ordinal, e.g. `1st`, `2nd`, `11th`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub usize);

impl Position {
    /// Every combinator takes the outcome as its first argument.
    pub const FIRST: Position = Position(1);
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(f, "{}{}", n, suffix)
    }
}

/// Shape an operation required of its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Either a success or a failure. Required by the passthrough family.
    Outcome,
    /// A success only. Required by the strict family.
    Success,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Outcome => f.write_str(":ok or :error"),
            Expected::Success => f.write_str(":ok"),
        }
    }
}

/// The only error this crate produces: an argument did not have the
/// shape the called operation needs.
///
/// ```rust
/// use routcome::{unwrap_strict, Outcome, Term};
///
/// let err = unwrap_strict(Term::<i32, &str>::from(Outcome::Failure("boom"))).unwrap_err();
/// assert_eq!(err.to_string(), "1st argument: not an :ok result tuple");
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{position} argument: not an {expected} result tuple")]
pub struct InvalidShape {
    pub position: Position,
    pub expected: Expected,
}

impl InvalidShape {
    pub(crate) fn not_an_outcome() -> Self {
        Self {
            position: Position::FIRST,
            expected: Expected::Outcome,
        }
    }

    pub(crate) fn not_a_success() -> Self {
        Self {
            position: Position::FIRST,
            expected: Expected::Success,
        }
    }
}
