//! Two-variant outcomes for linear data-transformation pipelines.
//!
//! Every stage either keeps processing a value or lets a failure pass
//! through to the end. [`Term`] is what arrives at a boundary (a raw value
//! or an [`Outcome`]), and the free functions in this crate inspect, unwrap
//! and transform it in a lenient (`_or_passthrough`) or strict (`_strict`)
//! flavour.
//!
//! ```rust
//! use routcome::{flat_map_or_passthrough, map_strict, Outcome, Term};
//!
//! let doubled = flat_map_or_passthrough(Term::<i32, &str>::from(Outcome::Success(1)), |x| {
//!     Term::<i32, &str>::Value(x * 2)
//! })?;
//! assert_eq!(doubled, Term::Value(2));
//!
//! let failed = map_strict(Term::<i32, &str>::from(Outcome::Failure("foo")), |x| x + 1);
//! assert!(failed.is_err());
//! # Ok::<(), routcome::InvalidShape>(())
//! ```

pub mod dynamic;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod term;

pub use error::{Expected, InvalidShape, Position};
pub use outcome::Outcome;
pub use term::{
    flat_map_or_passthrough, flat_map_strict, is_failure, is_outcome, is_success,
    map_or_passthrough, map_strict, to_failure, to_success, unwrap_or_passthrough, unwrap_strict,
    Term,
};
