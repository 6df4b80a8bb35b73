use crate::types::{Error, ErrorCollection, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable outcome of a domain operation: success with an optional payload,
/// or failure carrying an ordered [`ErrorCollection`].
///
/// The two arms make the construction conventions structural: a success never
/// carries errors and a failure never carries a payload. A failure may carry
/// an *empty* collection ([`failure`](Outcome::failure) is the bare failure
/// signal), so callers must not assume `is_failure()` implies a non-empty
/// collection.
///
/// The payload slot is `Option<T>` owned by this type: `None` is the crate's
/// own absence marker, distinct from any domain-level nullability. Callers
/// that need a nullable payload use `Outcome<Option<U>>`, and a present
/// `Some(None)` payload counts as present everywhere, including the
/// [`combine`](Outcome::combine) value scan.
///
/// No accessor panics; absence is always an explicit `None` or an empty
/// collection.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Outcome};
///
/// fn parse_age(input: &str) -> Outcome<u8> {
///     match input.parse() {
///         Ok(age) => Outcome::of_value(age),
///         Err(_) => Outcome::of_error(err!("age must be a number", "numeric", "user.age")),
///     }
/// }
///
/// assert_eq!(parse_age("33").into_value(), Some(33));
/// assert!(parse_age("abc").is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(Option<T>),
    Failure(ErrorCollection),
}

impl<T> Outcome<T> {
    /// Creates a success without a payload.
    #[inline]
    pub fn success() -> Self {
        Self::Success(None)
    }

    /// Creates a success carrying `value`.
    #[inline]
    pub fn of_value(value: T) -> Self {
        Self::Success(Some(value))
    }

    /// Creates a bare failure with no structured error attached.
    #[inline]
    pub fn failure() -> Self {
        Self::Failure(ErrorCollection::empty())
    }

    /// Creates a failure carrying a single error.
    #[inline]
    pub fn of_error(error: Error) -> Self {
        Self::Failure(ErrorCollection::of_error(error))
    }

    /// Creates a failure carrying the given collection.
    #[inline]
    pub fn of_errors(errors: ErrorCollection) -> Self {
        Self::Failure(errors)
    }

    /// Creates a failure carrying a single error built from its parts.
    #[inline]
    pub fn of_error_msg(message: Option<&str>, key: Option<&str>, space: Option<&str>) -> Self {
        Self::Failure(ErrorCollection::of_error_msg(message, key, space))
    }

    /// Returns `true` for a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload, if this is a success that carries one.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => value.as_ref(),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the payload, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => None,
        }
    }

    /// Returns the attached errors; empty for a success.
    ///
    /// The collection is cloned out of the failure arm; use
    /// [`iter_errors`](Outcome::iter_errors) to borrow instead.
    #[must_use]
    pub fn errors(&self) -> ErrorCollection {
        match self {
            Self::Success(_) => ErrorCollection::empty(),
            Self::Failure(errors) => errors.clone(),
        }
    }

    /// Extracts the attached errors; empty for a success.
    #[must_use]
    pub fn into_errors(self) -> ErrorCollection {
        match self {
            Self::Success(_) => ErrorCollection::empty(),
            Self::Failure(errors) => errors,
        }
    }

    /// Invokes `f` iff this is a success, then returns the receiver
    /// unchanged.
    pub fn if_success<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            f();
        }
        self
    }

    /// Invokes `f` with the receiver iff this is a failure, then returns the
    /// receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let mut seen = 0;
    /// let outcome = Outcome::<i32>::of_error(err!("boom", "exploded"))
    ///     .if_failure(|o| seen = o.iter_errors().count());
    ///
    /// assert_eq!(seen, 1);
    /// assert!(outcome.is_failure());
    /// ```
    pub fn if_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_failure() {
            f(&self);
        }
        self
    }

    /// Invokes `f` with the receiver unconditionally, then returns the
    /// receiver unchanged. For side effects such as logging regardless of
    /// the branch taken.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Transforms the whole outcome.
    ///
    /// Unlike a conventional payload mapper, `f` receives the *entire*
    /// outcome - success or failure - and is fully responsible for branching
    /// and for constructing the replacement. Use
    /// [`map_value`](Outcome::map_value) when only the success payload
    /// should change.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let recovered = Outcome::<i32>::of_error(err!("timed out", "timeout"))
    ///     .transform(|outcome| {
    ///         if outcome.is_failure() {
    ///             Outcome::of_value(0)
    ///         } else {
    ///             outcome
    ///         }
    ///     });
    ///
    /// assert_eq!(recovered.value(), Some(&0));
    /// ```
    pub fn transform<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> Outcome<U>,
    {
        f(self)
    }

    /// Maps the success payload, preserving failures unchanged.
    ///
    /// A success without a payload stays payload-free.
    pub fn map_value<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.map(f)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Converts into the host `Result`: the optional payload on the `Ok`
    /// side, the full error collection on the `Err` side.
    pub fn into_result(self) -> Result<Option<T>, ErrorCollection> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Aggregates many outcomes into one, scanning operands strictly in
    /// order.
    ///
    /// Each operand's errors are appended to the aggregate unconditionally,
    /// and the first *present* payload encountered in scan order is
    /// remembered. The aggregate succeeds iff every operand succeeded:
    ///
    /// * on overall success the remembered payload is returned and the
    ///   aggregated errors are discarded entirely;
    /// * on overall failure the aggregated errors from all operands are
    ///   returned and any remembered payload is discarded.
    ///
    /// A payload-free success does not capture the payload slot - a later
    /// operand's present payload still wins. Combining zero operands yields
    /// a payload-free success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let all_good = Outcome::combine([Outcome::of_value(5), Outcome::success()]);
    /// assert_eq!(all_good.into_value(), Some(5));
    ///
    /// let mixed = Outcome::combine([
    ///     Outcome::of_value(5),
    ///     Outcome::of_error(err!("value is required", "required", "user.email")),
    /// ]);
    /// assert!(mixed.is_failure());
    /// assert_eq!(mixed.value(), None);
    /// assert_eq!(mixed.iter_errors().count(), 1);
    /// ```
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors: ErrorVec<Error> = ErrorVec::new();
        let mut value = None;
        let mut success = true;

        for outcome in outcomes {
            match outcome {
                Self::Success(operand_value) => {
                    if value.is_none() {
                        value = operand_value;
                    }
                }
                Self::Failure(operand_errors) => {
                    errors.extend(operand_errors);
                    success = false;
                }
            }
        }

        if success {
            Self::Success(value)
        } else {
            Self::Failure(ErrorCollection::of_errors(errors))
        }
    }
}

/// Collecting outcomes aggregates them via [`Outcome::combine`].
impl<T> FromIterator<Outcome<T>> for Outcome<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Self::combine(iter)
    }
}
