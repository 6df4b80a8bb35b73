//! Error descriptor and ordered error collection.
//!
//! This module provides the two value types every failure report is built
//! from: [`Error`], an immutable descriptor of a single domain failure, and
//! [`ErrorCollection`], an immutable ordered sequence of them.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, ErrorCollection};
//!
//! let errors = ErrorCollection::of_error(
//!     Error::of(Some("value is required"), Some("required"), Some("user.email")),
//! );
//!
//! assert!(errors.any());
//! assert!(errors.first().unwrap().has_prefix("user."));
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;

pub mod collection;
pub mod error;
pub(crate) mod fingerprint;

pub use collection::*;
pub use error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 1 elements to avoid heap allocations
/// in common cases where only a few errors are collected.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
