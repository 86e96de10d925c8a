//! Validation type and the evaluation outcome
//!
//! `Validation` is similar to `Result` but is meant to be read as data: a
//! candidate that fails a specification is an ordinary, expected value, not an
//! error to propagate with `?`. Every evaluation in this crate returns an
//! [`Outcome`], which is `Validation<(), Reason>`.
//!
//! # Examples
//!
//! ```
//! use specifica::{Outcome, Reason, Validation};
//!
//! let ok = Outcome::satisfied();
//! let rejected = Outcome::unsatisfied(Reason::new(1, "not whiskey"));
//!
//! assert!(ok.is_success());
//! assert_eq!(rejected.reason().map(Reason::code), Some(1));
//! assert_eq!(rejected, Validation::Failure(Reason::new(1, "not whiskey")));
//! ```

use crate::Reason;

/// A validation that either succeeds with a value or fails with an error
///
/// Every evaluation produces it as [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with its error
    Failure(E),
}

/// Result of evaluating a specification against one or more candidates.
pub type Outcome = Validation<(), Reason>;

impl<T, E> Validation<T, E> {
    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }
}

impl Validation<(), Reason> {
    /// The candidate satisfied the specification.
    #[inline]
    pub fn satisfied() -> Self {
        Validation::Success(())
    }

    /// The candidate was rejected for `reason`.
    #[inline]
    pub fn unsatisfied(reason: Reason) -> Self {
        Validation::Failure(reason)
    }

    /// Satisfied when `condition` holds, otherwise rejected with the reason built
    /// by `reason`. The reason is only built on rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use specifica::{Outcome, Reason};
    ///
    /// let name = "apple juice";
    /// let outcome = Outcome::satisfied_if(name.contains("juice"), || Reason::new(1, "not a juice"));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn satisfied_if<F>(condition: bool, reason: F) -> Self
    where
        F: FnOnce() -> Reason,
    {
        if condition {
            Validation::Success(())
        } else {
            Validation::Failure(reason())
        }
    }

    /// The rejection reason, if any.
    #[inline]
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Validation::Success(()) => None,
            Validation::Failure(reason) => Some(reason),
        }
    }

    /// Take the rejection reason, if any.
    #[inline]
    pub fn into_reason(self) -> Option<Reason> {
        match self {
            Validation::Success(()) => None,
            Validation::Failure(reason) => Some(reason),
        }
    }
}

impl From<Result<(), Reason>> for Validation<(), Reason> {
    fn from(result: Result<(), Reason>) -> Self {
        match result {
            Ok(()) => Validation::Success(()),
            Err(reason) => Validation::Failure(reason),
        }
    }
}

/// Lets an outcome feed `?` in code that treats rejection as an error.
///
/// ```
/// use specifica::{Reason, Spec};
///
/// fn admit(age: u8) -> Result<(), Reason> {
///     let adult = Spec::rule(|a: &u8| *a >= 18, Reason::new(1, "minor"));
///     adult.is_satisfied_by(&age).into()
/// }
///
/// assert!(admit(30).is_ok());
/// assert_eq!(admit(12).unwrap_err().message(), "minor");
/// ```
impl From<Validation<(), Reason>> for Result<(), Reason> {
    fn from(outcome: Validation<(), Reason>) -> Self {
        match outcome {
            Validation::Success(()) => Ok(()),
            Validation::Failure(reason) => Err(reason),
        }
    }
}
