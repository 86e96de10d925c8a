//! Failure reasons
//!
//! A [`Reason`] explains why a candidate did not satisfy a specification. It is
//! either a single reason (an integer code plus a message) or an aggregate: an
//! ordered, non-empty list of reasons, which may themselves be aggregates.
//!
//! Aggregates keep their nesting, so the shape of a failure mirrors the shape of
//! the specification that produced it. Reporting goes through [`Reason::flatten`],
//! which walks the tree and yields the single reasons in encounter order.
//!
//! # Example
//!
//! ```rust
//! use specifica::{Reason, Semigroup};
//!
//! let apple = Reason::new(10, "not apple");
//! let orange = Reason::new(11, "not orange");
//! let both = apple.combine(orange);
//!
//! assert!(both.is_aggregate());
//! assert_eq!(both.message(), "not apple, not orange");
//! assert_eq!(both.flatten().map(Reason::code).collect::<Vec<_>>(), vec![10, 11]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::mem;

use crate::{NonEmptyVec, Semigroup, SpecError};

#[cfg(feature = "serde")]
mod serde_impl;

/// Code carried by reasons that do not say anything more specific.
pub const UNSPECIFIED: i32 = 0;

/// Why a candidate failed a specification.
///
/// Reasons are immutable values. Build single reasons with [`Reason::new`] and
/// aggregates with [`Reason::aggregate`] or [`Semigroup::combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Single {
        code: i32,
        message: Cow<'static, str>,
    },
    Aggregate(Box<NonEmptyVec<Reason>>),
}

impl Reason {
    /// Create a single reason.
    ///
    /// The code is not validated; `0` conventionally means "unspecified".
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::Reason;
    ///
    /// let reason = Reason::new(42, "not whiskey");
    /// assert_eq!(reason.code(), 42);
    /// assert_eq!(reason.message(), "not whiskey");
    /// ```
    pub fn new(code: i32, message: impl Into<Cow<'static, str>>) -> Self {
        Reason {
            kind: Kind::Single {
                code,
                message: message.into(),
            },
        }
    }

    /// The generic reason: code [`UNSPECIFIED`] and an empty message.
    ///
    /// Reported by `not` when its operand succeeds and by `never`.
    pub fn unspecified() -> Self {
        Reason::new(UNSPECIFIED, "")
    }

    /// Create an aggregate from an ordered sequence of reasons.
    ///
    /// Fails with [`SpecError::InvalidAggregate`] when the sequence is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specifica::{Reason, SpecError};
    ///
    /// let reason = Reason::aggregate(vec![
    ///     Reason::new(1, "too cold"),
    ///     Reason::new(2, "too sweet"),
    /// ])?;
    /// assert_eq!(reason.message(), "too cold, too sweet");
    ///
    /// assert_eq!(Reason::aggregate(vec![]), Err(SpecError::InvalidAggregate));
    /// # Ok::<(), SpecError>(())
    /// ```
    pub fn aggregate<I>(reasons: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = Reason>,
    {
        let reasons: Vec<Reason> = reasons.into_iter().collect();
        match NonEmptyVec::from_vec(reasons) {
            Some(reasons) => Ok(Reason::from_nonempty(reasons)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("rejected empty aggregate reason");
                Err(SpecError::InvalidAggregate)
            }
        }
    }

    /// Create an aggregate from reasons already known to be non-empty.
    pub fn from_nonempty(reasons: NonEmptyVec<Reason>) -> Self {
        Reason {
            kind: Kind::Aggregate(Box::new(reasons)),
        }
    }

    /// The code of a single reason, or [`UNSPECIFIED`] for an aggregate.
    pub fn code(&self) -> i32 {
        match &self.kind {
            Kind::Single { code, .. } => *code,
            Kind::Aggregate(_) => UNSPECIFIED,
        }
    }

    /// The human-readable message.
    ///
    /// For an aggregate this is the messages of every flattened leaf joined with
    /// `", "`, rebuilt on each call.
    pub fn message(&self) -> Cow<'_, str> {
        match &self.kind {
            Kind::Single { message, .. } => Cow::Borrowed(message.as_ref()),
            Kind::Aggregate(_) => {
                let mut joined = String::new();
                for (i, leaf) in self.flatten().enumerate() {
                    if i > 0 {
                        joined.push_str(", ");
                    }
                    joined.push_str(&leaf.message());
                }
                Cow::Owned(joined)
            }
        }
    }

    /// Whether this reason aggregates other reasons.
    pub fn is_aggregate(&self) -> bool {
        matches!(self.kind, Kind::Aggregate(_))
    }

    /// The direct children of an aggregate, without flattening.
    pub fn as_aggregate(&self) -> Option<&NonEmptyVec<Reason>> {
        match &self.kind {
            Kind::Aggregate(reasons) => Some(&**reasons),
            Kind::Single { .. } => None,
        }
    }

    /// Iterate over the single reasons in this tree, in encounter order.
    ///
    /// A single reason yields itself.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten { stack: vec![self] }
    }

    /// Number of single reasons in this tree.
    pub fn leaf_count(&self) -> usize {
        self.flatten().count()
    }

    fn take_children(&mut self) -> Option<Box<NonEmptyVec<Reason>>> {
        if !self.is_aggregate() {
            return None;
        }
        let emptied = Kind::Single {
            code: UNSPECIFIED,
            message: Cow::Borrowed(""),
        };
        match mem::replace(&mut self.kind, emptied) {
            Kind::Aggregate(children) => Some(children),
            Kind::Single { .. } => None,
        }
    }
}

// Aggregates nest as deep as the `or` chains that built them; unlink them
// with an explicit stack so dropping never recurses.
impl Drop for Reason {
    fn drop(&mut self) {
        let Some(children) = self.take_children() else {
            return;
        };
        let mut pending: Vec<Reason> = Vec::new();
        pending.extend(*children);
        while let Some(mut reason) = pending.pop() {
            if let Some(children) = reason.take_children() {
                pending.extend(*children);
            }
        }
    }
}

impl Default for Reason {
    fn default() -> Self {
        Reason::unspecified()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

// Semigroup: the aggregate of both, left first
impl Semigroup for Reason {
    fn combine(self, other: Self) -> Self {
        Reason::from_nonempty(NonEmptyVec::new(self, vec![other]))
    }
}

/// Depth-first iterator over the leaves of a [`Reason`].
///
/// Created by [`Reason::flatten`].
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    stack: Vec<&'a Reason>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Reason;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(reason) = self.stack.pop() {
            match &reason.kind {
                Kind::Single { .. } => return Some(reason),
                Kind::Aggregate(children) => {
                    self.stack.extend(children.tail().iter().rev());
                    self.stack.push(children.head());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(reason: &Reason) -> Vec<String> {
        reason.flatten().map(|r| r.message().into_owned()).collect()
    }

    #[test]
    fn test_single_reason() {
        let reason = Reason::new(7, "not a juice");
        assert_eq!(reason.code(), 7);
        assert_eq!(reason.message(), "not a juice");
        assert!(!reason.is_aggregate());
        assert!(reason.as_aggregate().is_none());
        assert_eq!(reason.leaf_count(), 1);
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let reason = Reason::new(-3, String::new());
        assert_eq!(reason.message(), "");
        assert_eq!(reason.code(), -3);
    }

    #[test]
    fn test_unspecified() {
        let reason = Reason::unspecified();
        assert_eq!(reason.code(), UNSPECIFIED);
        assert_eq!(reason.message(), "");
        assert_eq!(Reason::default(), reason);
    }

    #[test]
    fn test_empty_aggregate_is_rejected() {
        assert_eq!(
            Reason::aggregate(std::iter::empty()),
            Err(SpecError::InvalidAggregate)
        );
    }

    #[test]
    fn test_aggregate_message_and_code() {
        let reason =
            Reason::aggregate(vec![Reason::new(1, "a"), Reason::new(2, "b")]).unwrap();
        assert!(reason.is_aggregate());
        assert_eq!(reason.code(), UNSPECIFIED);
        assert_eq!(reason.message(), "a, b");
        assert_eq!(reason.to_string(), "a, b");
        assert_eq!(reason.as_aggregate().map(NonEmptyVec::len), Some(2));
    }

    #[test]
    fn test_single_element_aggregate() {
        let reason = Reason::aggregate(vec![Reason::new(1, "only")]).unwrap();
        assert!(reason.is_aggregate());
        assert_eq!(reason.message(), "only");
    }

    #[test]
    fn test_nested_aggregates_flatten_in_encounter_order() {
        let inner = Reason::new(2, "b").combine(Reason::new(3, "c"));
        let outer = Reason::aggregate(vec![
            Reason::new(1, "a"),
            inner,
            Reason::aggregate(vec![Reason::new(4, "d")]).unwrap(),
        ])
        .unwrap();

        assert_eq!(messages(&outer), vec!["a", "b", "c", "d"]);
        assert_eq!(
            outer.flatten().map(Reason::code).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(outer.message(), "a, b, c, d");
        assert_eq!(outer.leaf_count(), 4);
        // nesting is preserved
        assert_eq!(outer.as_aggregate().map(NonEmptyVec::len), Some(3));
    }

    #[test]
    fn test_message_is_recomputed() {
        let reason = Reason::new(1, "x").combine(Reason::new(2, "y"));
        let first = reason.message().into_owned();
        let second = reason.message().into_owned();
        assert_eq!(first, second);
        assert!(matches!(reason.message(), Cow::Owned(_)));
    }

    #[test]
    fn test_combine_keeps_left_first() {
        let reason = Reason::new(1, "left").combine(Reason::new(2, "right"));
        assert_eq!(messages(&reason), vec!["left", "right"]);
    }

    #[test]
    fn test_deeply_nested_reason_reads_and_drops() {
        let depth = 200_000;
        let mut reason = Reason::new(0, "r0");
        for i in 1..depth {
            reason = reason.combine(Reason::new(i, "r"));
        }

        assert_eq!(reason.leaf_count(), depth as usize);
        assert_eq!(reason.flatten().next().map(Reason::code), Some(0));
        assert_eq!(reason.flatten().last().map(Reason::code), Some(depth - 1));
        assert!(reason.message().starts_with("r0, r, r"));
        drop(reason);

        let mut right_nested = Reason::new(0, "r");
        for i in 1..depth {
            right_nested = Reason::new(i, "r").combine(right_nested);
        }
        assert_eq!(right_nested.leaf_count(), depth as usize);
        drop(right_nested);
    }
}
