//! Boolean predicates and rules
//!
//! A [`Predicate`] is the plain yes/no form of a rule. Pairing one with a fixed
//! [`Reason`] gives a [`Rule`], which is a [`Specification`]: the reason is what
//! gets reported every time the predicate rejects a candidate.
//!
//! # Example
//!
//! ```rust
//! use specifica::{Predicate, Reason, Rule, Specification};
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! assert!(is_even.check(&4));
//!
//! let rule = Rule::new(is_even, Reason::new(2, "odd"));
//! assert!(rule.is_satisfied_by(&4).is_success());
//! assert_eq!(rule.is_satisfied_by(&3).reason().map(|r| r.code()), Some(2));
//! ```

use crate::spec::Specification;
use crate::{Outcome, Reason};

/// A composable predicate over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A predicate with the reason reported when it rejects a candidate.
#[derive(Debug, Clone)]
pub struct Rule<P> {
    predicate: P,
    reason: Reason,
}

impl<P> Rule<P> {
    /// Pair `predicate` with the reason reported on rejection.
    pub fn new(predicate: P, reason: Reason) -> Self {
        Rule { predicate, reason }
    }

    /// The reason reported on rejection.
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl<T: ?Sized, P: Predicate<T>> Specification<T> for Rule<P> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> Outcome {
        if self.predicate.check(candidate) {
            Outcome::satisfied()
        } else {
            Outcome::unsatisfied(self.reason.clone())
        }
    }
}
