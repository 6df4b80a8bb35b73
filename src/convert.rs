//! Conversion helpers between the host `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to wrap fallible host code into
//! outcomes at the boundary, and to hand aggregated outcomes back to code
//! that speaks `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::result_to_outcome;
//! use outcome_rail::{err, Error};
//!
//! let parsed: Result<i32, Error> = Err(err!("not a number", "numeric", "age"));
//! let outcome = result_to_outcome(parsed);
//! assert!(outcome.is_failure());
//! ```

use crate::outcome::Outcome;
use crate::types::{Error, ErrorCollection};

/// Converts a `Result` carrying a single [`Error`] into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Error;
///
/// let ok: Result<i32, Error> = Ok(42);
/// assert_eq!(result_to_outcome(ok).into_value(), Some(42));
/// ```
#[inline]
pub fn result_to_outcome<T>(result: Result<T, Error>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::of_value(value),
        Err(error) => Outcome::of_error(error),
    }
}

/// Converts an [`Outcome`] into a `Result`: the optional payload on the
/// `Ok` side, the full error collection on the `Err` side.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::of_value(42);
/// assert_eq!(outcome_to_result(outcome), Ok(Some(42)));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<Option<T>, ErrorCollection> {
    outcome.into_result()
}

impl From<Error> for ErrorCollection {
    #[inline]
    fn from(error: Error) -> Self {
        ErrorCollection::of_error(error)
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Outcome::of_error(error)
    }
}

impl<T> From<ErrorCollection> for Outcome<T> {
    #[inline]
    fn from(errors: ErrorCollection) -> Self {
        Outcome::of_errors(errors)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        result_to_outcome(result)
    }
}

impl<T> From<Result<T, ErrorCollection>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, ErrorCollection>) -> Self {
        match result {
            Ok(value) => Outcome::of_value(value),
            Err(errors) => Outcome::of_errors(errors),
        }
    }
}
