//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Describing a domain failure
//!
//! ```
//! use outcome_rail::Error;
//!
//! let err = Error::of(Some("value is required"), Some("required"), Some("user.email"));
//!
//! assert!(err.has_prefix("user."));
//! assert_eq!(err.key(), Some("required"));
//! ```
//!
//! ## Collecting every problem at once
//!
//! ```
//! use outcome_rail::{err, ErrorCollection};
//!
//! let report: ErrorCollection = [
//!     err!("value is required", "required", "user.email"),
//!     err!("value is too short", "min_length", "user.name"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(report.filter_by_prefix("user.").len(), 2);
//! ```
//!
//! ## Aggregating outcomes
//!
//! ```
//! use outcome_rail::{err, Outcome};
//!
//! let combined = Outcome::combine([
//!     Outcome::of_value(5),
//!     Outcome::of_error(err!("service unavailable", "unavailable")),
//! ]);
//!
//! assert!(combined.is_failure());
//! assert_eq!(combined.iter_errors().count(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between the host `Result` and [`Outcome`]
pub mod convert;
/// Ergonomic macros for constructing errors and collections
pub mod macros;
/// Outcome type and its aggregation combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error descriptor and ordered error collection
pub mod types;

/// Tracing integration for failed outcomes (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use convert::*;
pub use outcome::Outcome;
pub use types::{Error, ErrorCollection, ErrorVec};

#[cfg(feature = "tracing")]
pub use trace::OutcomeTraceExt;
