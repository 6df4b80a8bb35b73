//! Outcome type and utilities for aggregating multi-error results.
//!
//! This module provides the [`Outcome`] type, an immutable success-or-failure
//! value that carries an optional payload on success and an ordered
//! [`ErrorCollection`](crate::types::ErrorCollection) on failure. It is the
//! return-value counterpart of throwing: callers inspect and branch, nothing
//! is ever raised.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type representing either a success or accumulated errors
//! - Iterator adapters for traversing the payload and the errors
//! - [`Outcome::combine`] for aggregating many outcomes into one
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let success: Outcome<i32> = Outcome::of_value(42);
//! assert!(success.is_success());
//!
//! let combined: Outcome<i32> = [success, Outcome::success()].into_iter().collect();
//! assert_eq!(combined.into_value(), Some(42));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
