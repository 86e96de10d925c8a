//! Non-empty vector type
//!
//! `NonEmptyVec<T>` is a vector guaranteed to contain at least one element. Aggregate
//! [`Reason`](crate::Reason)s are stored in one, which is what makes an empty aggregate
//! unrepresentable once construction has succeeded.
//!
//! # Examples
//!
//! ```
//! use specifica::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new("not whiskey", vec!["no ice"]);
//! assert_eq!(nev.head(), &"not whiskey");
//! assert_eq!(nev.tail(), &["no ice"]);
//! assert_eq!(nev.len(), 2);
//! ```

/// A non-empty vector guaranteed to contain at least one element.
///
/// # Example
///
/// ```
/// use specifica::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
/// assert_eq!(nev.head(), &1);
/// assert_eq!(nev.last(), &4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector with a head element and tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use specifica::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2, 3]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get all elements except the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Get the last element (always succeeds).
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}
