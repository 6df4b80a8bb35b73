//! Ergonomic macros for constructing errors and collections.
//!
//! These macros smooth over the positional `Option<&str>` constructors:
//!
//! - [`macro@crate::err`] - Builds an [`Error`](crate::types::Error) from
//!   positional message, key and space parts, wrapping each given part in
//!   `Some`.
//! - [`macro@crate::errors`] - Builds an
//!   [`ErrorCollection`](crate::types::ErrorCollection) literal, preserving
//!   the given order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, errors};
//!
//! let report = errors![
//!     err!("value is required", "required", "user.email"),
//!     err!("value is too short", "min_length", "user.name"),
//! ];
//!
//! assert_eq!(report.len(), 2);
//! ```

/// Builds an [`Error`](crate::types::Error) from positional parts.
///
/// # Syntax
///
/// - `err!()` - An error with no parts set
/// - `err!(message)` - Message only
/// - `err!(message, key)` - Message and key
/// - `err!(message, key, space)` - All three parts
///
/// Parts that need to stay absent while later ones are given (a key-only
/// error, say) use [`Error::of`](crate::types::Error::of) directly.
///
/// # Examples
///
/// ```
/// use outcome_rail::err;
///
/// let e = err!("value is required", "required", "user.email");
/// assert_eq!(e.key(), Some("required"));
///
/// let bare = err!("something went wrong");
/// assert_eq!(bare.space(), None);
/// ```
#[macro_export]
macro_rules! err {
    () => {
        $crate::types::Error::default()
    };
    ($message:expr $(,)?) => {
        $crate::types::Error::of(Some($message), None, None)
    };
    ($message:expr, $key:expr $(,)?) => {
        $crate::types::Error::of(Some($message), Some($key), None)
    };
    ($message:expr, $key:expr, $space:expr $(,)?) => {
        $crate::types::Error::of(Some($message), Some($key), Some($space))
    };
}

/// Builds an [`ErrorCollection`](crate::types::ErrorCollection) from a list
/// of errors, preserving the given order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, errors};
///
/// let empty = errors![];
/// assert!(empty.none());
///
/// let two = errors![err!("a", "k1"), err!("b", "k2")];
/// assert_eq!(two.len(), 2);
/// ```
#[macro_export]
macro_rules! errors {
    () => {
        $crate::types::ErrorCollection::empty()
    };
    ($($error:expr),+ $(,)?) => {
        $crate::types::ErrorCollection::of_errors([$($error),+])
    };
}
