//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::Semigroup;
//!
//! assert_eq!(String::from("finger").combine(String::from("tree")), "fingertree");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type with an associative `combine` operation.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::Semigroup;
///
/// let combined = Some(String::from("a")).combine(None);
/// assert_eq!(combined, Some(String::from("a")));
/// ```
pub trait Semigroup {
    /// Combines two values, consuming both.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero, since a semigroup has no identity element.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");
        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces an iterator with `combine`, returning `None` when it is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left @ Some(_), None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("ab");
        let right = String::from("cd");
        assert_eq!(left.combine_ref(&right), "abcd");
        assert_eq!(left, "ab");
    }

    #[rstest]
    #[case(1, "ab")]
    #[case(3, "ababab")]
    fn string_combine_n(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(String::from("ab").combine_n(count), expected);
    }

    #[rstest]
    #[should_panic(expected = "count > 0")]
    fn combine_n_zero_panics() {
        let _ = String::from("ab").combine_n(0);
    }

    #[rstest]
    fn option_combine_keeps_present_side() {
        assert_eq!(None.combine(Some(Sum::new(2))), Some(Sum::new(2)));
        assert_eq!(Some(Sum::new(1)).combine(Some(Sum::new(2))), Some(Sum::new(3)));
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        assert_eq!(<Sum<i32>>::reduce_all(Vec::new()), None);
        assert_eq!(
            Sum::reduce_all(vec![Sum::new(1), Sum::new(2)]),
            Some(Sum::new(3))
        );
    }
}
