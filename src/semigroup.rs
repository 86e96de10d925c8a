//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. In this crate it is
//! how failure reasons accumulate: an `or` whose branches both fail, and a batch
//! evaluation with several rejected candidates, both `combine` reasons instead of
//! keeping only the first one.
//!
//! # Examples
//!
//! ```
//! use specifica::{Reason, Semigroup};
//!
//! let combined = Reason::new(1, "too short").combine(Reason::new(2, "no digits"));
//! assert_eq!(combined.message(), "too short, no digits");
//! ```
//!
//! # Custom Implementations
//!
//! ```
//! use specifica::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct Violations(Vec<String>);
//!
//! impl Semigroup for Violations {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// For [`Reason`](crate::Reason) the law holds up to flattening: both sides
/// flatten to the same leaves in the same order, while the nesting differs.
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use specifica::{Reason, Semigroup};
    ///
    /// let both = Reason::new(1, "warm").combine(Reason::new(2, "flat"));
    /// assert_eq!(both.leaf_count(), 2);
    /// ```
    fn combine(self, other: Self) -> Self;
}
