//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for surfacing failed outcomes through the
//! `tracing` ecosystem without disturbing the value flow.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.2", features = ["tracing"] }
//! ```

use crate::outcome::Outcome;

/// Extension trait that reports failed outcomes to `tracing` subscribers.
pub trait OutcomeTraceExt: Sized {
    /// Emits a `warn` event when the outcome is a failure, passing the
    /// outcome through unchanged.
    ///
    /// Each attached error is additionally emitted as a `debug` event with
    /// its key and space as fields. Successes pass through silently.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::prelude::*;
    ///
    /// fn save_user(user: &User) -> Outcome<UserId> {
    ///     validate(user).traced("save_user")
    /// }
    /// ```
    fn traced(self, operation: &str) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn traced(self, operation: &str) -> Self {
        self.if_failure(|outcome| {
            tracing::warn!(
                operation,
                error_count = outcome.iter_errors().count(),
                "outcome failed"
            );
            for error in outcome.iter_errors() {
                tracing::debug!(
                    operation,
                    key = error.key(),
                    space = error.space(),
                    "domain error"
                );
            }
        })
    }
}
