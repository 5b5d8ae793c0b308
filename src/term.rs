//! Lenient and strict combinators over [`Term`], a value that may or may
//! not already be an [`Outcome`].
//!
//! Passthrough (`_or_passthrough`) operations let a failure flow through
//! untouched. Strict (`_strict`) operations treat anything but a success as
//! a programming error and return [`InvalidShape`].

use crate::{error::InvalidShape, outcome::Outcome};

/// Anything that reaches a pipeline boundary: a raw value of type `R`,
/// or an outcome that was already produced upstream.
///
/// Only one level is ever classified. A raw value whose payload happens
/// to contain an outcome is still a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term<T, E, R = T> {
    Value(R),
    Outcome(Outcome<T, E>),
}

impl<T, E, R> From<Outcome<T, E>> for Term<T, E, R> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Term::Outcome(outcome)
    }
}

impl<T, E, R> Term<T, E, R> {
    /// Narrows to an outcome or reports the term as malformed.
    fn into_outcome(self) -> Result<Outcome<T, E>, InvalidShape> {
        match self {
            Term::Outcome(outcome) => Ok(outcome),
            Term::Value(_) => Err(InvalidShape::not_an_outcome()),
        }
    }

    /// Narrows to a success payload or reports the term as malformed.
    fn into_success(self) -> Result<T, InvalidShape> {
        match self {
            Term::Outcome(Outcome::Success(value)) => Ok(value),
            _ => Err(InvalidShape::not_a_success()),
        }
    }
}

/// True iff `term` is a success or a failure.
pub const fn is_outcome<T, E, R>(term: &Term<T, E, R>) -> bool {
    matches!(term, Term::Outcome(_))
}

/// True iff `term` is a success. Never fails.
pub const fn is_success<T, E, R>(term: &Term<T, E, R>) -> bool {
    matches!(term, Term::Outcome(Outcome::Success(_)))
}

/// True iff `term` is a failure. Never fails.
pub const fn is_failure<T, E, R>(term: &Term<T, E, R>) -> bool {
    matches!(term, Term::Outcome(Outcome::Failure(_)))
}

/// Wraps a raw value as a success.
///
/// An existing outcome is returned as is, including a failure, so
/// wrapping never nests one outcome inside another.
///
/// ```rust
/// use routcome::{to_success, Outcome, Term};
///
/// assert_eq!(to_success(Term::<_, ()>::Value(1)), Outcome::Success(1));
/// assert_eq!(to_success(Term::<i32, _>::Outcome(Outcome::Failure("x"))), Outcome::Failure("x"));
/// ```
pub fn to_success<T, E>(term: Term<T, E>) -> Outcome<T, E> {
    match term {
        Term::Value(value) => Outcome::Success(value),
        Term::Outcome(outcome) => outcome,
    }
}

/// Wraps a raw value as a failure. An existing outcome, including a
/// success, is returned as is.
pub fn to_failure<T, E>(term: Term<T, E, E>) -> Outcome<T, E> {
    match term {
        Term::Value(error) => Outcome::Failure(error),
        Term::Outcome(outcome) => outcome,
    }
}

/// Unwraps a success one level. A failure is handed back unchanged, so
/// callers still need to check what they got.
pub fn unwrap_or_passthrough<T, E, R>(term: Term<T, E, R>) -> Result<Term<T, E>, InvalidShape> {
    Ok(match term.into_outcome()? {
        Outcome::Success(value) => Term::Value(value),
        failure => Term::Outcome(failure),
    })
}

/// Unwraps a success. Anything else is an error.
pub fn unwrap_strict<T, E, R>(term: Term<T, E, R>) -> Result<T, InvalidShape> {
    term.into_success()
}

/// Applies `transform` to a success payload and wraps the result as a
/// success again, without flattening it. A failure is returned unchanged
/// and `transform` is not called.
///
/// ```rust
/// use routcome::{map_or_passthrough, Outcome, Term};
///
/// let doubled = map_or_passthrough(Term::<i32, ()>::from(Outcome::Success(2)), |x| x * 2)?;
/// assert_eq!(doubled, Outcome::Success(4));
/// # Ok::<(), routcome::InvalidShape>(())
/// ```
pub fn map_or_passthrough<T, E, R, U, F>(
    term: Term<T, E, R>,
    transform: F,
) -> Result<Outcome<U, E>, InvalidShape>
where
    F: FnOnce(T) -> U,
{
    Ok(match term.into_outcome()? {
        Outcome::Success(value) => Outcome::Success(transform(value)),
        Outcome::Failure(error) => Outcome::Failure(error),
    })
}

/// Applies `transform` to a success payload and wraps the result as a
/// success. Anything else is an error and `transform` is not called.
pub fn map_strict<T, E, R, U, F>(
    term: Term<T, E, R>,
    transform: F,
) -> Result<Outcome<U, E>, InvalidShape>
where
    F: FnOnce(T) -> U,
{
    let value = term.into_success()?;
    Ok(Outcome::Success(transform(value)))
}

/// Applies `transform` to a success payload and returns whatever it
/// produced, unwrapped. `transform` decides the resulting shape, it may
/// return a raw value or an outcome of its own. A failure is returned
/// unchanged.
pub fn flat_map_or_passthrough<T, E, R, U, V, F>(
    term: Term<T, E, R>,
    transform: F,
) -> Result<Term<U, E, V>, InvalidShape>
where
    F: FnOnce(T) -> Term<U, E, V>,
{
    Ok(match term.into_outcome()? {
        Outcome::Success(value) => transform(value),
        Outcome::Failure(error) => Term::Outcome(Outcome::Failure(error)),
    })
}

/// Applies `transform` to a success payload and returns its result
/// directly. Anything else is an error.
pub fn flat_map_strict<T, E, R, U, F>(term: Term<T, E, R>, transform: F) -> Result<U, InvalidShape>
where
    F: FnOnce(T) -> U,
{
    term.into_success().map(transform)
}
