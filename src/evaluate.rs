//! Evaluating candidates
//!
//! [`satisfies`] checks one candidate; [`all_satisfy`] checks a whole sequence
//! and reports every rejected candidate at once; [`satisfying`] keeps only the
//! candidates that pass. The extension traits give the same operations a
//! subject-first call shape.
//!
//! # Example
//!
//! ```rust
//! use specifica::prelude::*;
//!
//! let not_empty = Spec::rule(|s: &str| !s.is_empty(), Reason::new(1, "empty"));
//!
//! assert!("tea".satisfies(&not_empty).is_success());
//!
//! let names = vec!["tea".to_string(), String::new(), String::new()];
//! let outcome = names.all_satisfy(&not_empty);
//! assert_eq!(outcome.reason().map(Reason::leaf_count), Some(2));
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::{NonEmptyVec, Outcome, Reason, Spec, Validation};

/// Evaluate `candidate` against `spec`.
#[inline]
pub fn satisfies<T: ?Sized>(candidate: &T, spec: &Spec<T>) -> Outcome {
    spec.is_satisfied_by(candidate)
}

/// Evaluate every candidate against `spec`, in order.
///
/// Every candidate is evaluated, even after a rejection. The outcome succeeds
/// when all candidates do (including when there are none); otherwise it fails
/// with an aggregate holding the reason of each rejected candidate, in the
/// order the candidates were given.
///
/// # Example
///
/// ```rust
/// use specifica::{all_satisfy, Reason, Spec};
///
/// let positive = Spec::rule(|n: &i32| *n > 0, Reason::new(1, "not positive"));
///
/// assert!(all_satisfy([1, 2, 3], &positive).is_success());
///
/// let outcome = all_satisfy([1, -2, 3, -4], &positive);
/// let reason = outcome.reason().unwrap();
/// assert_eq!(reason.leaf_count(), 2);
/// assert_eq!(reason.message(), "not positive, not positive");
/// ```
pub fn all_satisfy<I, T>(candidates: I, spec: &Spec<T>) -> Outcome
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    let mut failures = Vec::new();
    #[cfg(feature = "tracing")]
    let mut evaluated = 0usize;

    for candidate in candidates {
        #[cfg(feature = "tracing")]
        {
            evaluated += 1;
        }
        if let Validation::Failure(reason) =
            spec.is_satisfied_by(<I::Item as Borrow<T>>::borrow(&candidate))
        {
            failures.push(reason);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        evaluated,
        rejected = failures.len(),
        "evaluated candidates"
    );

    match NonEmptyVec::from_vec(failures) {
        Some(reasons) => Outcome::unsatisfied(Reason::from_nonempty(reasons)),
        None => Outcome::satisfied(),
    }
}

/// Lazily yield the candidates that satisfy `spec`.
///
/// # Example
///
/// ```rust
/// use specifica::{satisfying, Reason, Spec};
///
/// let even = Spec::rule(|n: &i32| n % 2 == 0, Reason::new(1, "odd"));
/// let evens: Vec<i32> = satisfying(1..=6, &even).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn satisfying<I, T>(candidates: I, spec: &Spec<T>) -> Satisfying<'_, I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    Satisfying {
        iter: candidates.into_iter(),
        spec,
    }
}

/// Iterator over the candidates that satisfy a specification.
///
/// Created by [`satisfying`] and [`AllSatisfyExt::satisfying`].
pub struct Satisfying<'s, I, T: ?Sized> {
    iter: I,
    spec: &'s Spec<T>,
}

impl<I, T> Iterator for Satisfying<'_, I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.iter
            .find(|candidate| spec.check(<I::Item as Borrow<T>>::borrow(candidate)))
    }
}

impl<I, T: ?Sized> fmt::Debug for Satisfying<'_, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfying")
            .field("spec", self.spec)
            .finish_non_exhaustive()
    }
}

/// Subject-first evaluation of a single candidate.
///
/// Implemented for every type.
pub trait SatisfiesExt {
    /// Evaluate `self` against `spec`.
    fn satisfies(&self, spec: &Spec<Self>) -> Outcome {
        spec.is_satisfied_by(self)
    }
}

impl<T: ?Sized> SatisfiesExt for T {}

/// Subject-first evaluation of a sequence of candidates.
///
/// Implemented for every [`IntoIterator`].
pub trait AllSatisfyExt: IntoIterator + Sized {
    /// Evaluate every item against `spec`. See [`all_satisfy`].
    fn all_satisfy<T>(self, spec: &Spec<T>) -> Outcome
    where
        Self::Item: Borrow<T>,
        T: ?Sized,
    {
        all_satisfy(self, spec)
    }

    /// Keep the items that satisfy `spec`. See [`satisfying`].
    fn satisfying<T>(self, spec: &Spec<T>) -> Satisfying<'_, Self::IntoIter, T>
    where
        Self::Item: Borrow<T>,
        T: ?Sized,
    {
        satisfying(self, spec)
    }
}

impl<I: IntoIterator> AllSatisfyExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn positive() -> Spec<i32> {
        Spec::from_fn(|n: &i32| {
            Outcome::satisfied_if(*n > 0, || Reason::new(*n, format!("{} is not positive", n)))
        })
    }

    #[test]
    fn test_satisfies_delegates() {
        assert_eq!(satisfies(&3, &positive()), positive().is_satisfied_by(&3));
        assert_eq!(satisfies(&-3, &positive()), positive().is_satisfied_by(&-3));
        assert!(5i32.satisfies(&positive()).is_success());
    }

    #[test]
    fn test_all_satisfy_collects_every_failure_in_order() {
        let outcome = all_satisfy(vec![-1, 2, -3, 4, -5], &positive());
        let reason = outcome.into_reason().unwrap();
        let codes: Vec<_> = reason.flatten().map(Reason::code).collect();
        assert_eq!(codes, vec![-1, -3, -5]);
        assert_eq!(
            reason.message(),
            "-1 is not positive, -3 is not positive, -5 is not positive"
        );
    }

    #[test]
    fn test_all_satisfy_does_not_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = Spec::from_fn(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::unsatisfied(Reason::new(1, "no"))
        });

        let outcome = all_satisfy([1, 2, 3, 4], &spec);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(outcome.reason().map(Reason::leaf_count), Some(4));
    }

    #[test]
    fn test_all_satisfy_single_failure_is_still_aggregated() {
        let reason = all_satisfy([1, -2], &positive()).into_reason().unwrap();
        assert!(reason.is_aggregate());
        assert_eq!(reason.leaf_count(), 1);
        assert_eq!(reason.message(), "-2 is not positive");
    }

    #[test]
    fn test_all_satisfy_empty_succeeds() {
        assert!(all_satisfy(Vec::<i32>::new(), &positive()).is_success());
        assert!(all_satisfy(Vec::<i32>::new(), &Spec::<i32>::never()).is_success());
    }

    #[test]
    fn test_all_satisfy_by_reference_and_unsized() {
        let words = vec!["tea".to_string(), "".to_string()];
        let not_empty = Spec::rule(|s: &str| !s.is_empty(), Reason::new(1, "empty"));
        assert!(words.iter().map(String::as_str).all_satisfy(&not_empty).is_failure());
        assert!(words[..1].iter().map(String::as_str).all_satisfy(&not_empty).is_success());
        assert!(words.all_satisfy(&not_empty).is_failure());
    }

    #[test]
    fn test_satisfying_filters_lazily() {
        let kept: Vec<i32> = vec![-2, 1, 0, 3].satisfying(&positive()).collect();
        assert_eq!(kept, vec![1, 3]);

        let numbers = [5, -5, 6];
        let kept: Vec<&i32> = satisfying(&numbers, &positive()).collect();
        assert_eq!(kept, vec![&5, &6]);
    }
}
