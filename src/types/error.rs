//! Immutable descriptor of a single domain failure.

use crate::types::alloc_type::String;
use crate::types::fingerprint;
use core::fmt::{self, Display, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable descriptor of one domain failure: message, key, space.
///
/// * `message` - human-readable wording, descriptive only
/// * `key` - stable machine identifier of the failed rule or kind
/// * `space` - hierarchical namespace locating the failure within a larger
///   structure, e.g. a field path like `user.email`
///
/// Identity is defined solely by `(key, space)`: `PartialEq`, `Hash` and
/// [`fingerprint`](Error::fingerprint) all ignore `message`, so two errors
/// that differ only in wording compare equal and deduplicate as one.
///
/// Instances are constructed once and never mutated; every "modifying"
/// operation returns a new instance and leaves the receiver untouched.
///
/// # Serde Support
///
/// With the `serde` feature, an `Error` serializes as the flat mapping
/// `{message, key, space}` with absent fields as null, and deserializes
/// from the same shape (missing keys read back as absent). The round trip
/// preserves all three fields, not just the identity pair.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let a = Error::of(Some("value is required"), Some("required"), Some("user.email"));
/// let b = Error::of(Some("field must not be empty"), Some("required"), Some("user.email"));
///
/// assert_eq!(a, b);
/// assert_eq!(a.fingerprint(), b.fingerprint());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Error {
    #[cfg_attr(feature = "serde", serde(default))]
    message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    key: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    space: Option<String>,
}

impl Error {
    /// Creates an error from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let keyed_only = Error::of(None, Some("required"), None);
    /// assert_eq!(keyed_only.message(), None);
    /// assert_eq!(keyed_only.key(), Some("required"));
    /// ```
    #[inline]
    pub fn of(message: Option<&str>, key: Option<&str>, space: Option<&str>) -> Self {
        Self {
            message: message.map(String::from),
            key: key.map(String::from),
            space: space.map(String::from),
        }
    }

    /// Returns the human-readable message, if any.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the machine key, if any.
    #[must_use]
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the namespace, if any.
    #[must_use]
    #[inline]
    pub fn space(&self) -> Option<&str> {
        self.space.as_deref()
    }

    /// Returns a copy with `space` replaced; `message` and `key` unchanged.
    pub fn with_space(&self, space: Option<&str>) -> Self {
        Self {
            message: self.message.clone(),
            key: self.key.clone(),
            space: space.map(String::from),
        }
    }

    /// Returns a copy whose space is `prefix` followed by the current space.
    ///
    /// An absent space is treated as the empty string, so the result is
    /// exactly `prefix` when the receiver had none.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let nested = Error::of(None, Some("required"), Some("email")).with_prefix("user.");
    /// assert_eq!(nested.space(), Some("user.email"));
    /// ```
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.with_prefix_glue(prefix, "")
    }

    /// Returns a copy whose space is `prefix + glue + current space`.
    ///
    /// An absent space is treated as the empty string; the glue is kept even
    /// then, so `with_prefix_glue("user", ".")` on a space-less error yields
    /// `user.`.
    pub fn with_prefix_glue(&self, prefix: &str, glue: &str) -> Self {
        let current = self.space.as_deref().unwrap_or("");
        let mut space = String::with_capacity(prefix.len() + glue.len() + current.len());
        space.push_str(prefix);
        space.push_str(glue);
        space.push_str(current);
        Self {
            message: self.message.clone(),
            key: self.key.clone(),
            space: Some(space),
        }
    }

    /// Returns `true` iff the space is present and starts with `prefix`.
    ///
    /// The comparison is byte-exact and case-sensitive. An error without a
    /// space has no prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let e = Error::of(None, Some("required"), Some("user.email"));
    /// assert!(e.has_prefix("user."));
    /// assert!(!e.has_prefix("User."));
    /// assert!(!Error::of(None, Some("k"), None).has_prefix("x"));
    /// ```
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.space
            .as_deref()
            .is_some_and(|space| space.starts_with(prefix))
    }

    /// Returns `true` iff the space field equals `space`.
    ///
    /// Two absent spaces are considered equal.
    #[must_use]
    #[inline]
    pub fn has_space(&self, space: Option<&str>) -> bool {
        self.space.as_deref() == space
    }

    /// Returns `true` iff any namespace is assigned.
    #[must_use]
    #[inline]
    pub fn has_any_space(&self) -> bool {
        self.space.is_some()
    }

    /// Generates a stable digest of this error's identity.
    ///
    /// The digest is a pure function of `(key, space)`; `message` never
    /// participates. Equal identities produce equal fingerprints across
    /// processes and runs, and an absent field never digests like an empty
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let a = Error::of(Some("a"), Some("required"), None);
    /// let b = Error::of(Some("b"), Some("required"), None);
    /// assert_eq!(a.fingerprint(), b.fingerprint());
    /// ```
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hash = fingerprint::FNV_OFFSET;
        fingerprint::hash_field(&mut hash, b"key:", self.key.as_deref());
        fingerprint::hash_field(&mut hash, b"space:", self.space.as_deref());
        hash
    }

    /// Generates a hex string representation of the fingerprint.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        let mut result = String::with_capacity(16);
        let fp = self.fingerprint();
        let _ = write!(result, "{:016x}", fp);
        result
    }
}

/// Identity equality: `key` and `space` pairwise equal, `message` ignored.
impl PartialEq for Error {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.space == other.space
    }
}

impl Eq for Error {}

impl core::hash::Hash for Error {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.space.hash(state);
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(space) = self.space() {
            write!(f, "[{}] ", space)?;
        }
        match (self.message(), self.key()) {
            (Some(message), Some(key)) => write!(f, "{} ({})", message, key),
            (Some(message), None) => f.write_str(message),
            (None, Some(key)) => f.write_str(key),
            (None, None) => f.write_str("unspecified error"),
        }
    }
}

impl core::error::Error for Error {}
