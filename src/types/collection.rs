//! Immutable ordered sequence of domain errors.

use crate::types::alloc_type::Vec;
use crate::types::{Error, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Immutable ordered sequence of [`Error`]s.
///
/// Insertion order is significant and preserved by every transform; none of
/// them reorders. Duplicates are permitted and retained until
/// [`unique`](ErrorCollection::unique) is applied explicitly. Transforms
/// never mutate the receiver, they allocate and return a new collection.
///
/// # Serde Support
///
/// With the `serde` feature, a collection serializes transparently as an
/// ordered sequence of flat error mappings and deserializes from the same
/// shape.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ErrorCollection};
///
/// let report = ErrorCollection::of_error(err!("value is required", "required", "email"))
///     .add(err!("value is too short", "min_length", "name"))
///     .with_prefix("user.");
///
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.first().unwrap().space(), Some("user.email"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    errors: ErrorVec<Error>,
}

impl ErrorCollection {
    /// Creates an empty collection.
    #[inline]
    pub fn empty() -> Self {
        Self {
            errors: ErrorVec::new(),
        }
    }

    /// Creates a collection holding a single error.
    #[inline]
    pub fn of_error(error: Error) -> Self {
        Self {
            errors: smallvec![error],
        }
    }

    /// Creates a collection holding a single error built from its parts.
    #[inline]
    pub fn of_error_msg(message: Option<&str>, key: Option<&str>, space: Option<&str>) -> Self {
        Self::of_error(Error::of(message, key, space))
    }

    /// Creates a collection from an iterator of errors, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ErrorCollection};
    ///
    /// let report = ErrorCollection::of_errors([err!("a", "k1"), err!("b", "k2")]);
    /// assert_eq!(report.len(), 2);
    /// ```
    #[inline]
    pub fn of_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    /// Returns `true` if the collection holds at least one error.
    #[must_use]
    #[inline]
    pub fn any(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if the collection holds no errors.
    #[must_use]
    #[inline]
    pub fn none(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the collection holds no errors.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first error, if any.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// Returns the number of errors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns a restartable iterator over the errors in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Exposes the collection as a plain ordered slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// Copies the errors into a plain `Vec`, in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Error> {
        self.errors.to_vec()
    }

    /// Concatenates two collections: the receiver's errors followed by
    /// `other`'s, in order.
    ///
    /// This is never a set union; duplicate entries are retained unless
    /// [`unique`](ErrorCollection::unique) is applied afterward.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ErrorCollection};
    ///
    /// let a = ErrorCollection::of_error(err!("a", "k1"));
    /// let b = ErrorCollection::of_error(err!("b", "k2"));
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(merged.first().unwrap().key(), Some("k1"));
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        let mut errors = ErrorVec::with_capacity(self.errors.len() + other.errors.len());
        errors.extend(self.errors.iter().cloned());
        errors.extend(other.errors.iter().cloned());
        Self { errors }
    }

    /// Applies `f` to every error, preserving order and length.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Error) -> Error,
    {
        Self {
            errors: self.errors.iter().map(|error| f(error)).collect(),
        }
    }

    /// Keeps the errors satisfying `predicate`, preserving relative order.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Error) -> bool,
    {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|error| predicate(*error))
                .cloned()
                .collect(),
        }
    }

    /// Invokes `f` on each error in insertion order for its side effects and
    /// returns the receiver unchanged, enabling chaining.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Error),
    {
        for error in &self.errors {
            f(error);
        }
        self
    }

    /// Prefixes every error's space, see [`Error::with_prefix`].
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.map(|error| error.with_prefix(prefix))
    }

    /// Prefixes every error's space with a glue string in between, see
    /// [`Error::with_prefix_glue`].
    pub fn with_prefix_glue(&self, prefix: &str, glue: &str) -> Self {
        self.map(|error| error.with_prefix_glue(prefix, glue))
    }

    /// Replaces every error's space, see [`Error::with_space`].
    pub fn with_space(&self, space: Option<&str>) -> Self {
        self.map(|error| error.with_space(space))
    }

    /// Keeps the errors whose space starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, errors};
    ///
    /// let report = errors![
    ///     err!("value is required", "required", "user.email"),
    ///     err!("must be positive", "positive", "order.total"),
    /// ];
    ///
    /// let scoped = report.filter_by_prefix("user.");
    /// assert_eq!(scoped.len(), 1);
    /// assert_eq!(scoped.first().unwrap().key(), Some("required"));
    /// ```
    pub fn filter_by_prefix(&self, prefix: &str) -> Self {
        self.filter(|error| error.has_prefix(prefix))
    }

    /// Keeps the errors whose space equals `space`.
    ///
    /// Passing `None` keeps the errors without any space assigned.
    pub fn filter_by_space(&self, space: Option<&str>) -> Self {
        self.filter(|error| error.has_space(space))
    }

    /// Keeps the errors that have any space assigned.
    pub fn filter_by_any_space(&self) -> Self {
        self.filter(Error::has_any_space)
    }

    /// Deduplicates by identity fingerprint, keeping the first occurrence.
    ///
    /// For each distinct `(key, space)` identity the first error encountered
    /// in iteration order is kept, and the relative order of kept errors is
    /// preserved. `message` does not participate, so two differently worded
    /// errors with the same identity collapse into the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, errors};
    ///
    /// let report = errors![err!("first wording", "required"), err!("second wording", "required")];
    ///
    /// let unique = report.unique();
    /// assert_eq!(unique.len(), 1);
    /// assert_eq!(unique.first().unwrap().message(), Some("first wording"));
    /// ```
    pub fn unique(&self) -> Self {
        let mut seen: Vec<u64> = Vec::with_capacity(self.errors.len());
        let mut errors = ErrorVec::new();
        for error in &self.errors {
            let fingerprint = error.fingerprint();
            if !seen.contains(&fingerprint) {
                seen.push(fingerprint);
                errors.push(error.clone());
            }
        }
        Self { errors }
    }

    /// Appends a single error, returning a new collection.
    pub fn add(&self, error: Error) -> Self {
        self.merge(&Self::of_error(error))
    }

    /// Appends a single error built from its parts, returning a new
    /// collection.
    pub fn add_msg(&self, message: Option<&str>, key: Option<&str>, space: Option<&str>) -> Self {
        self.merge(&Self::of_error_msg(message, key, space))
    }
}

impl FromIterator<Error> for ErrorCollection {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self::of_errors(iter)
    }
}

impl From<Vec<Error>> for ErrorCollection {
    fn from(errors: Vec<Error>) -> Self {
        Self {
            errors: ErrorVec::from_vec(errors),
        }
    }
}

impl IntoIterator for ErrorCollection {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
