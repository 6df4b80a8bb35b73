//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: `err!`, `errors!`
//! - **Types**: `Error`, `ErrorCollection`, `Outcome`
//! - **Conversions**: `result_to_outcome`, `outcome_to_result`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn validate_email(email: &str) -> Outcome<()> {
//!     if email.contains('@') {
//!         Outcome::success()
//!     } else {
//!         Outcome::of_error(err!("invalid email address", "email", "user.email"))
//!     }
//! }
//!
//! assert!(validate_email("a@b").is_success());
//! assert!(validate_email("nope").is_failure());
//! ```

// Macros
pub use crate::{err, errors};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{Error, ErrorCollection, ErrorVec};

// Conversions
pub use crate::convert::{outcome_to_result, result_to_outcome};

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
