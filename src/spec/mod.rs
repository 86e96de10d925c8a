//! Specifications and their combinators
//!
//! A [`Spec<T>`] is an immutable tree of rules over candidates of type `T`.
//! Leaves are atomic rules supplied by the caller; inner nodes are the logical
//! combinators `not`, `and`, `or` and the projection that lets a rule written
//! for one type be applied to another.
//!
//! Evaluating a specification never panics on rejection. It returns an
//! [`Outcome`]: success, or failure carrying a [`Reason`].
//!
//! # Evaluation order
//!
//! - `and` evaluates its left operand first and returns a left failure as-is,
//!   without evaluating the right operand.
//! - `or` evaluates its left operand first and returns success as soon as one
//!   side succeeds. When both sides fail the reason is the aggregate of the left
//!   and right reasons, in that order.
//! - `not` succeeds when its operand fails and fails with
//!   [`Reason::unspecified`] when its operand succeeds.
//!
//! # Example
//!
//! ```rust
//! use specifica::{Reason, Spec};
//!
//! let juice = Spec::rule(|name: &str| name.contains("juice"), Reason::new(1, "not a juice"));
//! let apple = Spec::rule(|name: &str| name.contains("apple"), Reason::new(2, "not apple"));
//! let orange = Spec::rule(|name: &str| name.contains("orange"), Reason::new(3, "not orange"));
//!
//! let apple_or_orange_juice = juice & (apple | orange);
//!
//! assert!(apple_or_orange_juice.is_satisfied_by("apple juice").is_success());
//!
//! let outcome = apple_or_orange_juice.is_satisfied_by("blackberry juice");
//! assert_eq!(outcome.reason().unwrap().message(), "not apple, not orange");
//! ```
//!
//! Specifications are cheap to clone (`Arc`-shared), `Send + Sync`, and may be
//! evaluated from many threads at once.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::predicate::Rule;
use crate::{Outcome, Reason, Semigroup, Validation};

mod combinators;
mod ops;

pub use combinators::{
    all_of, always, and, any_of, cast_up, never, not, or, project, try_and, try_not, try_or,
};

/// Something that can judge a candidate of type `T`.
///
/// Implemented by [`Spec<T>`], by [`Rule`], and by any closure
/// `Fn(&T) -> Outcome`. Implementations must not have side effects that change
/// later outcomes, and must be safe to call concurrently.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Evaluate `candidate`.
    fn is_satisfied_by(&self, candidate: &T) -> Outcome;
}

// Blanket impl for closures
impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> Outcome + Send + Sync,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> Outcome {
        self(candidate)
    }
}

/// A composable specification over candidates of type `T`.
///
/// Build leaves with [`Spec::new`], [`Spec::from_fn`] or [`Spec::rule`], and
/// combine them with [`and`](Spec::and), [`or`](Spec::or), [`not`](Spec::not)
/// (or the `&`, `|` and `!` operators).
pub struct Spec<T: ?Sized> {
    node: Arc<Node<T>>,
}

enum Node<T: ?Sized> {
    Always,
    Never,
    Atomic(Box<dyn Specification<T>>),
    Not(Spec<T>),
    // Left-associated chains of `and`/`or`, stored flat. Always two or more.
    All(Vec<Spec<T>>),
    Any(Vec<Spec<T>>),
    Projection(Box<dyn Projection<T>>),
    Named(Cow<'static, str>, Spec<T>),
}

/// A specification over some other candidate type, viewed through `T`.
trait Projection<T: ?Sized>: Send + Sync {
    fn evaluate(&self, candidate: &T) -> Outcome;
    fn operand(&self) -> &dyn fmt::Debug;
}

struct Projected<S: ?Sized, U: ?Sized, F> {
    inner: Spec<S>,
    view: F,
    _candidate: PhantomData<fn(&U)>,
}

impl<S, U, F> Projection<U> for Projected<S, U, F>
where
    S: ?Sized,
    U: ?Sized,
    F: Fn(&U) -> &S + Send + Sync,
{
    #[inline]
    fn evaluate(&self, candidate: &U) -> Outcome {
        self.inner.is_satisfied_by((self.view)(candidate))
    }

    fn operand(&self) -> &dyn fmt::Debug {
        &self.inner
    }
}

impl<T: ?Sized> Spec<T> {
    fn from_node(node: Node<T>) -> Self {
        Spec {
            node: Arc::new(node),
        }
    }

    /// Create an atomic specification from any [`Specification`].
    ///
    /// The specification decides the reason for each rejected candidate.
    pub fn new<S>(spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        Spec::from_node(Node::Atomic(Box::new(spec)))
    }

    /// Create an atomic specification from a closure returning an [`Outcome`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::{Outcome, Reason, Spec};
    ///
    /// let short = Spec::<str>::from_fn(|s| {
    ///     Outcome::satisfied_if(s.len() <= 5, || {
    ///         Reason::new(1, format!("{} characters is too long", s.len()))
    ///     })
    /// });
    ///
    /// assert!(short.check("tea"));
    /// assert_eq!(
    ///     short.is_satisfied_by("lemonade").reason().unwrap().message(),
    ///     "8 characters is too long"
    /// );
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Outcome + Send + Sync + 'static,
    {
        Spec::new(f)
    }

    /// Create an atomic specification from a boolean predicate and the reason
    /// reported whenever it rejects a candidate.
    ///
    /// For a reusable [`Predicate`](crate::Predicate) value, wrap it in a
    /// [`Rule`] and use [`Spec::new`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::{Reason, Spec};
    ///
    /// let positive = Spec::rule(|n: &i32| *n > 0, Reason::new(1, "not positive"));
    /// assert!(positive.check(&3));
    /// assert!(!positive.check(&-3));
    /// ```
    pub fn rule<F>(predicate: F, reason: Reason) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Spec::new(Rule::new(predicate, reason))
    }

    /// A specification every candidate satisfies.
    pub fn always() -> Self {
        Spec::from_node(Node::Always)
    }

    /// A specification no candidate satisfies; rejects with
    /// [`Reason::unspecified`].
    pub fn never() -> Self {
        Spec::from_node(Node::Never)
    }

    /// Invert this specification.
    ///
    /// The result fails with [`Reason::unspecified`] when `self` succeeds.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Spec::from_node(Node::Not(self))
    }

    /// Both specifications must be satisfied. `self` is evaluated first; if it
    /// fails, `other` is not evaluated and the failure is returned unchanged.
    ///
    /// Chains such as `a.and(b).and(c)` are stored flat, so rule sets of any
    /// length evaluate and drop without deep recursion.
    pub fn and(mut self, other: Spec<T>) -> Self {
        if let Some(Node::All(operands)) = Arc::get_mut(&mut self.node) {
            operands.push(other);
            return self;
        }
        Spec::from_node(Node::All(vec![self, other]))
    }

    /// Either specification must be satisfied. `self` is evaluated first; if it
    /// succeeds, `other` is not evaluated. When both fail the reason aggregates
    /// `self`'s reason then `other`'s.
    ///
    /// Chains such as `a.or(b).or(c)` are stored flat; a failing chain still
    /// reports the nested reason `((a, b), c)`.
    pub fn or(mut self, other: Spec<T>) -> Self {
        if let Some(Node::Any(operands)) = Arc::get_mut(&mut self.node) {
            operands.push(other);
            return self;
        }
        Spec::from_node(Node::Any(vec![self, other]))
    }

    /// Reuse this specification for a candidate type that can be viewed as `T`.
    ///
    /// The candidate is handed to this specification through
    /// [`AsRef::as_ref`]; there is no runtime type check and no extra way to
    /// fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::{Reason, Spec};
    ///
    /// trait Drink {
    ///     fn name(&self) -> &str;
    /// }
    ///
    /// struct Whiskey;
    ///
    /// impl Drink for Whiskey {
    ///     fn name(&self) -> &str {
    ///         "whiskey"
    ///     }
    /// }
    ///
    /// impl AsRef<dyn Drink> for Whiskey {
    ///     fn as_ref(&self) -> &(dyn Drink + 'static) {
    ///         self
    ///     }
    /// }
    ///
    /// let is_whiskey =
    ///     Spec::<dyn Drink>::rule(|d| d.name() == "whiskey", Reason::new(1, "not whiskey"));
    ///
    /// let for_whiskey: Spec<Whiskey> = is_whiskey.cast_up();
    /// assert!(for_whiskey.check(&Whiskey));
    /// ```
    pub fn cast_up<U>(self) -> Spec<U>
    where
        T: 'static,
        U: ?Sized + AsRef<T> + 'static,
    {
        self.project(<U as AsRef<T>>::as_ref)
    }

    /// Reuse this specification through an explicit view of the candidate,
    /// typically a field accessor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::{Reason, Spec};
    ///
    /// struct Order {
    ///     customer: String,
    /// }
    ///
    /// let not_blank = Spec::rule(|s: &str| !s.trim().is_empty(), Reason::new(1, "blank"));
    /// let has_customer = not_blank.project(|order: &Order| order.customer.as_str());
    ///
    /// assert!(has_customer.check(&Order { customer: "Ada".into() }));
    /// assert!(!has_customer.check(&Order { customer: " ".into() }));
    /// ```
    pub fn project<U, F>(self, view: F) -> Spec<U>
    where
        T: 'static,
        U: ?Sized + 'static,
        F: Fn(&U) -> &T + Send + Sync + 'static,
    {
        Spec::from_node(Node::Projection(Box::new(Projected {
            inner: self,
            view,
            _candidate: PhantomData,
        })))
    }

    /// Attach a label. The label shows up in `Debug` output and, with the
    /// `tracing` feature, names the span the specification is evaluated in.
    /// It never changes the outcome.
    pub fn named(self, name: impl Into<Cow<'static, str>>) -> Self {
        Spec::from_node(Node::Named(name.into(), self))
    }

    /// The label attached with [`named`](Spec::named), if this node has one.
    pub fn name(&self) -> Option<&str> {
        match &*self.node {
            Node::Named(name, _) => Some(&**name),
            _ => None,
        }
    }

    /// Evaluate `candidate` against this specification.
    pub fn is_satisfied_by(&self, candidate: &T) -> Outcome {
        match &*self.node {
            Node::Always => Outcome::satisfied(),
            Node::Never => Outcome::unsatisfied(Reason::unspecified()),
            Node::Atomic(rule) => rule.is_satisfied_by(candidate),
            Node::Not(operand) => match operand.is_satisfied_by(candidate) {
                Validation::Success(()) => Outcome::unsatisfied(Reason::unspecified()),
                Validation::Failure(_) => Outcome::satisfied(),
            },
            Node::All(operands) => evaluate_all(operands, candidate),
            Node::Any(operands) => evaluate_any(operands, candidate),
            Node::Projection(projection) => projection.evaluate(candidate),
            Node::Named(name, operand) => evaluate_named(name, operand, candidate),
        }
    }

    /// `true` when `candidate` satisfies this specification.
    #[inline]
    pub fn check(&self, candidate: &T) -> bool {
        self.is_satisfied_by(candidate).is_success()
    }
}

fn evaluate_all<T: ?Sized>(operands: &[Spec<T>], candidate: &T) -> Outcome {
    for operand in operands {
        if let failure @ Validation::Failure(_) = operand.is_satisfied_by(candidate) {
            return failure;
        }
    }
    Outcome::satisfied()
}

fn evaluate_any<T: ?Sized>(operands: &[Spec<T>], candidate: &T) -> Outcome {
    let mut rejected: Option<Reason> = None;
    for operand in operands {
        match operand.is_satisfied_by(candidate) {
            Validation::Success(()) => return Outcome::satisfied(),
            Validation::Failure(reason) => {
                rejected = Some(match rejected.take() {
                    Some(earlier) => earlier.combine(reason),
                    None => reason,
                });
            }
        }
    }
    Outcome::unsatisfied(rejected.unwrap_or_else(Reason::unspecified))
}

#[cfg(feature = "tracing")]
fn evaluate_named<T: ?Sized>(name: &str, operand: &Spec<T>, candidate: &T) -> Outcome {
    let span = tracing::trace_span!("spec", name = %name);
    let _entered = span.enter();
    let outcome = operand.is_satisfied_by(candidate);
    if let Validation::Failure(reason) = &outcome {
        tracing::trace!(code = reason.code(), reason = %reason, "specification not satisfied");
    }
    outcome
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn evaluate_named<T: ?Sized>(_name: &str, operand: &Spec<T>, candidate: &T) -> Outcome {
    operand.is_satisfied_by(candidate)
}

impl<T: ?Sized> Specification<T> for Spec<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> Outcome {
        Spec::is_satisfied_by(self, candidate)
    }
}

impl<T: ?Sized> Clone for Spec<T> {
    fn clone(&self) -> Self {
        Spec {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T: ?Sized> Default for Spec<T> {
    fn default() -> Self {
        Spec::always()
    }
}

impl<T: ?Sized> fmt::Debug for Spec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Always => f.write_str("Always"),
            Node::Never => f.write_str("Never"),
            Node::Atomic(_) => f.write_str("Atomic"),
            Node::Not(operand) => f.debug_tuple("Not").field(operand).finish(),
            Node::All(operands) => debug_operands(f, "And", operands),
            Node::Any(operands) => debug_operands(f, "Or", operands),
            Node::Projection(projection) => f
                .debug_tuple("Projection")
                .field(projection.operand())
                .finish(),
            Node::Named(name, operand) => f.debug_tuple(name).field(operand).finish(),
        }
    }
}

fn debug_operands<T: ?Sized>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    operands: &[Spec<T>],
) -> fmt::Result {
    let mut tuple = f.debug_tuple(name);
    for operand in operands {
        tuple.field(operand);
    }
    tuple.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(pass: bool, code: i32, calls: &Arc<AtomicUsize>) -> Spec<i32> {
        let calls = Arc::clone(calls);
        Spec::from_fn(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Outcome::satisfied_if(pass, || Reason::new(code, format!("rule {}", code)))
        })
    }

    fn even() -> Spec<i32> {
        Spec::rule(|n: &i32| n % 2 == 0, Reason::new(1, "odd"))
    }

    fn positive() -> Spec<i32> {
        Spec::rule(|n: &i32| *n > 0, Reason::new(2, "not positive"))
    }

    #[test]
    fn test_atomic_rule() {
        assert!(even().is_satisfied_by(&4).is_success());
        assert_eq!(
            even().is_satisfied_by(&3),
            Outcome::unsatisfied(Reason::new(1, "odd"))
        );
    }

    #[test]
    fn test_atomic_from_specification_impl() {
        let spec = Spec::new(Rule::new(|n: &i32| *n < 10, Reason::new(3, "too big")));
        assert!(spec.check(&9));
        assert!(!spec.check(&10));
    }

    #[test]
    fn test_and_left_failure_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let right_calls = Arc::new(AtomicUsize::new(0));
        let spec = counted(false, 1, &calls).and(counted(true, 2, &right_calls));

        let outcome = spec.is_satisfied_by(&0);
        assert_eq!(outcome.reason().map(Reason::code), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(right_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_returns_right_outcome_verbatim() {
        let spec = positive().and(even());
        assert!(spec.check(&2));
        assert_eq!(
            spec.is_satisfied_by(&3).into_reason(),
            Some(Reason::new(1, "odd"))
        );
    }

    #[test]
    fn test_and_never_aggregates() {
        let spec = even().and(positive());
        let reason = spec.is_satisfied_by(&-3).into_reason().unwrap();
        assert!(!reason.is_aggregate());
        assert_eq!(reason.code(), 1);
    }

    #[test]
    fn test_or_left_success_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spec = even().or(counted(false, 9, &calls));
        assert!(spec.check(&4));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(!spec.check(&5));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or_aggregates_both_failures_in_order() {
        let spec = even().or(positive());
        let reason = spec.is_satisfied_by(&-3).into_reason().unwrap();
        let codes: Vec<_> = reason.flatten().map(Reason::code).collect();
        assert_eq!(codes, vec![1, 2]);
        assert_eq!(reason.message(), "odd, not positive");
    }

    #[test]
    fn test_or_nesting_shapes_the_reason() {
        let calls = Arc::new(AtomicUsize::new(0));
        let a = || counted(false, 1, &calls);
        let b = || counted(false, 2, &calls);
        let c = || counted(false, 3, &calls);

        let left_nested = a().or(b()).or(c()).is_satisfied_by(&0).into_reason().unwrap();
        let right_nested = a().or(b().or(c())).is_satisfied_by(&0).into_reason().unwrap();

        assert_ne!(left_nested, right_nested);
        assert_eq!(left_nested.as_aggregate().unwrap().head().leaf_count(), 2);
        assert_eq!(right_nested.as_aggregate().unwrap().head().leaf_count(), 1);
        assert_eq!(left_nested.message(), right_nested.message());
    }

    #[test]
    fn test_not_inverts() {
        let odd = even().not();
        assert!(odd.check(&3));
        assert_eq!(
            odd.is_satisfied_by(&4).into_reason(),
            Some(Reason::unspecified())
        );
    }

    #[test]
    fn test_always_and_never() {
        assert!(Spec::<str>::always().check("anything"));
        assert_eq!(
            Spec::<str>::never().is_satisfied_by("anything").into_reason(),
            Some(Reason::unspecified())
        );
        assert!(Spec::<i32>::default().check(&0));
    }

    #[test]
    fn test_project_onto_field() {
        struct Point {
            x: i32,
        }
        let x_positive = positive().project(|p: &Point| &p.x);
        assert!(x_positive.check(&Point { x: 1 }));
        assert_eq!(
            x_positive.is_satisfied_by(&Point { x: -1 }).into_reason(),
            Some(Reason::new(2, "not positive"))
        );
    }

    #[test]
    fn test_cast_up_forwards_to_operand() {
        struct Meters(i32);
        impl AsRef<i32> for Meters {
            fn as_ref(&self) -> &i32 {
                &self.0
            }
        }

        let spec: Spec<Meters> = even().cast_up();
        assert!(spec.check(&Meters(2)));
        assert_eq!(
            spec.is_satisfied_by(&Meters(3)),
            even().is_satisfied_by(&3)
        );
    }

    #[test]
    fn test_named_is_transparent() {
        let spec = even().named("even");
        assert_eq!(spec.name(), Some("even"));
        assert_eq!(spec.is_satisfied_by(&3), even().is_satisfied_by(&3));
        assert!(even().name().is_none());
    }

    #[test]
    fn test_debug_renders_tree() {
        let spec = even()
            .named("even")
            .and(positive().named("positive").or(Spec::never()).not());
        assert_eq!(
            format!("{:?}", spec),
            "And(even(Atomic), Not(Or(positive(Atomic), Never)))"
        );

        struct Wrapper(i32);
        impl AsRef<i32> for Wrapper {
            fn as_ref(&self) -> &i32 {
                &self.0
            }
        }
        let cast: Spec<Wrapper> = Spec::<i32>::always().cast_up();
        assert_eq!(format!("{:?}", cast), "Projection(Always)");
        assert_eq!(format!("{:?}", even()), "Atomic");
    }

    #[test]
    fn test_debug_shows_what_a_name_covers() {
        let leaf = even().named("check");
        let composite = even().and(positive()).named("check");
        assert_eq!(format!("{:?}", leaf), "check(Atomic)");
        assert_eq!(format!("{:?}", composite), "check(And(Atomic, Atomic))");
        assert_ne!(format!("{:?}", leaf), format!("{:?}", composite));
    }

    #[test]
    fn test_chains_are_stored_flat() {
        let spec = even().and(positive()).and(Spec::always());
        assert_eq!(format!("{:?}", spec), "And(Atomic, Atomic, Always)");

        let spec = even().or(positive()).or(Spec::never());
        assert_eq!(format!("{:?}", spec), "Or(Atomic, Atomic, Never)");
    }

    #[test]
    fn test_extending_a_shared_chain_leaves_it_untouched() {
        let base = even().and(positive());
        let extended = base.clone().and(Spec::never());

        assert!(base.check(&2));
        assert!(!extended.check(&2));
        assert_eq!(format!("{:?}", base), "And(Atomic, Atomic)");
        assert_eq!(format!("{:?}", extended), "And(And(Atomic, Atomic), Never)");
    }

    #[test]
    fn test_clone_shares_the_tree() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spec = counted(true, 1, &calls);
        let copy = spec.clone();
        assert!(spec.check(&0));
        assert!(copy.check(&0));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_spec_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Spec<i32>>();
        assert_send_sync::<Spec<str>>();
    }

    #[test]
    fn test_concurrent_evaluation() {
        let spec = even().and(positive()).or(Spec::rule(
            |n: &i32| *n == -1,
            Reason::new(3, "not minus one"),
        ));

        std::thread::scope(|scope| {
            for t in 0..4 {
                let spec = spec.clone();
                scope.spawn(move || {
                    for n in -50..50 {
                        let m = n + t;
                        let expected = (m % 2 == 0 && m > 0) || m == -1;
                        assert_eq!(spec.check(&m), expected);
                    }
                });
            }
        });
    }
}
