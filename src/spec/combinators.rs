//! Free-function combinators
//!
//! Each function here mirrors a method on [`Spec`], for call sites that read
//! better prefix-style, plus the folds and fallible builders used when a rule
//! set is assembled at runtime.

use crate::error::Operand;
use crate::{Spec, SpecError};

/// A specification every candidate satisfies.
pub fn always<T: ?Sized>() -> Spec<T> {
    Spec::always()
}

/// A specification no candidate satisfies.
pub fn never<T: ?Sized>() -> Spec<T> {
    Spec::never()
}

/// Invert `spec`. See [`Spec::not`].
pub fn not<T: ?Sized>(spec: Spec<T>) -> Spec<T> {
    spec.not()
}

/// Both must be satisfied, `left` first. See [`Spec::and`].
pub fn and<T: ?Sized>(left: Spec<T>, right: Spec<T>) -> Spec<T> {
    left.and(right)
}

/// Either must be satisfied, `left` first. See [`Spec::or`].
pub fn or<T: ?Sized>(left: Spec<T>, right: Spec<T>) -> Spec<T> {
    left.or(right)
}

/// Reuse a specification over `S` for candidates of type `U`. See
/// [`Spec::cast_up`].
pub fn cast_up<S, U>(spec: Spec<S>) -> Spec<U>
where
    S: ?Sized + 'static,
    U: ?Sized + AsRef<S> + 'static,
{
    spec.cast_up()
}

/// Reuse a specification over `S` through a view of `U`. See
/// [`Spec::project`].
pub fn project<S, U, F>(spec: Spec<S>, view: F) -> Spec<U>
where
    S: ?Sized + 'static,
    U: ?Sized + 'static,
    F: Fn(&U) -> &S + Send + Sync + 'static,
{
    spec.project(view)
}

/// Fold specifications with `and`, left to right.
///
/// An empty input gives [`always`]; a single specification is returned as-is.
///
/// # Example
///
/// ```rust
/// use specifica::{all_of, Reason, Spec};
///
/// let rules: Vec<Spec<i32>> = vec![
///     Spec::rule(|n: &i32| *n > 0, Reason::new(1, "not positive")),
///     Spec::rule(|n: &i32| *n < 100, Reason::new(2, "too large")),
/// ];
/// let in_range = all_of(rules);
/// assert!(in_range.check(&50));
/// assert_eq!(in_range.is_satisfied_by(&500).reason().map(|r| r.code()), Some(2));
///
/// assert!(all_of(Vec::<Spec<i32>>::new()).check(&-1));
/// ```
pub fn all_of<T, I>(specs: I) -> Spec<T>
where
    T: ?Sized,
    I: IntoIterator<Item = Spec<T>>,
{
    specs.into_iter().reduce(Spec::and).unwrap_or_else(Spec::always)
}

/// Fold specifications with `or`, left to right.
///
/// An empty input gives [`never`]; a single specification is returned as-is.
/// When every operand fails, the reason nests as `((r1, r2), r3)`.
pub fn any_of<T, I>(specs: I) -> Spec<T>
where
    T: ?Sized,
    I: IntoIterator<Item = Spec<T>>,
{
    specs.into_iter().reduce(Spec::or).unwrap_or_else(Spec::never)
}

/// [`not`] for an operand that may be missing.
///
/// # Example
///
/// ```rust
/// use specifica::{try_not, Spec, SpecError};
///
/// let missing: Option<Spec<str>> = None;
/// assert!(matches!(try_not(missing), Err(SpecError::NullOperand { .. })));
/// ```
pub fn try_not<T: ?Sized>(spec: Option<Spec<T>>) -> Result<Spec<T>, SpecError> {
    let spec = spec.ok_or_else(|| SpecError::null_operand("not", Operand::Single))?;
    Ok(spec.not())
}

/// [`and`] for operands that may be missing. The left side is checked first.
pub fn try_and<T: ?Sized>(
    left: Option<Spec<T>>,
    right: Option<Spec<T>>,
) -> Result<Spec<T>, SpecError> {
    let left = left.ok_or_else(|| SpecError::null_operand("and", Operand::Left))?;
    let right = right.ok_or_else(|| SpecError::null_operand("and", Operand::Right))?;
    Ok(left.and(right))
}

/// [`or`] for operands that may be missing. The left side is checked first.
pub fn try_or<T: ?Sized>(
    left: Option<Spec<T>>,
    right: Option<Spec<T>>,
) -> Result<Spec<T>, SpecError> {
    let left = left.ok_or_else(|| SpecError::null_operand("or", Operand::Left))?;
    let right = right.ok_or_else(|| SpecError::null_operand("or", Operand::Right))?;
    Ok(left.or(right))
}
