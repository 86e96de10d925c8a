//! Operator sugar: `a & b`, `a | b`, `!a`.
//!
//! Implemented for owned specifications and for references, which clone the
//! shared tree.

use std::ops::{BitAnd, BitOr, Not};

use super::Spec;

impl<T: ?Sized> BitAnd for Spec<T> {
    type Output = Spec<T>;

    fn bitand(self, rhs: Spec<T>) -> Spec<T> {
        self.and(rhs)
    }
}

impl<T: ?Sized> BitAnd for &Spec<T> {
    type Output = Spec<T>;

    fn bitand(self, rhs: &Spec<T>) -> Spec<T> {
        self.clone().and(rhs.clone())
    }
}

impl<T: ?Sized> BitOr for Spec<T> {
    type Output = Spec<T>;

    fn bitor(self, rhs: Spec<T>) -> Spec<T> {
        self.or(rhs)
    }
}

impl<T: ?Sized> BitOr for &Spec<T> {
    type Output = Spec<T>;

    fn bitor(self, rhs: &Spec<T>) -> Spec<T> {
        self.clone().or(rhs.clone())
    }
}

impl<T: ?Sized> Not for Spec<T> {
    type Output = Spec<T>;

    fn not(self) -> Spec<T> {
        Spec::not(self)
    }
}

impl<T: ?Sized> Not for &Spec<T> {
    type Output = Spec<T>;

    fn not(self) -> Spec<T> {
        Spec::not(self.clone())
    }
}
