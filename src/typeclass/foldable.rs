//! Foldable type class - reducing a structure to a summary value.
//!
//! `fold_left` visits elements first-to-last, `fold_right` last-to-first.
//! Everything else (`fold_map`, `find`, `exists`, ...) is derived from them.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::{Foldable, Sum};
//!
//! let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
//! assert_eq!(total, Sum::new(6));
//!
//! let digits = vec![1, 2, 3].fold_right(String::new(), |n, acc| format!("{acc}{n}"));
//! assert_eq!(digits, "321");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A structure that can be folded into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element into a monoid and combines the results left to right.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` when the structure holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Collects the elements into a `Vec`, in order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn to_list(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_is_left_associative() {
        let result = vec![1, 2, 3].fold_left(String::new(), |acc, n| format!("({acc}{n})"));
        assert_eq!(result, "(((1)2)3)");
    }

    #[rstest]
    fn vec_fold_right_visits_last_first() {
        let mut order = Vec::new();
        vec![1, 2, 3].fold_right((), |n, ()| order.push(n));
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[rstest]
    fn option_fold_map_of_none_is_identity() {
        let none: Option<i32> = None;
        assert_eq!(none.fold_map(Sum::new), Sum::new(0));
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(vec![1, 4, 6, 9].find(|n| n % 2 == 0), Some(4));
        assert_eq!(vec![1, 3].find(|n| n % 2 == 0), None);
    }

    #[rstest]
    fn exists_and_for_all() {
        let numbers = vec![2, 4, 5];
        assert!(numbers.exists(|n| *n == 5));
        assert!(!numbers.for_all(|n| n % 2 == 0));
        assert!(Vec::<i32>::new().for_all(|_| false));
    }

    #[rstest]
    fn option_length() {
        assert_eq!(Some(1).length(), 1);
        assert_eq!(None::<i32>.length(), 0);
    }
}
