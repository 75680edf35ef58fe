//! Applicative type class - combining independent computations.
//!
//! For multi-element containers the combination is the cartesian product:
//! every element on the left meets every element on the right, left-major.
//! That is why the elements being reused must be `Clone`.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                                  // identity
//! pure(f).apply(pure(x)) == pure(f(x))                    // homomorphism
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::Applicative;
//!
//! let sums = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
//! assert_eq!(sums, vec![11, 21, 12, 22]);
//!
//! assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
//! ```

use super::functor::Functor;

/// A [`Functor`] that can lift values and combine containers.
pub trait Applicative: Functor {
    /// Lifts a single value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines every pair of elements with `function`, left-major.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Applies every contained function to every contained argument.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        B: Clone,
        Self::Inner: FnMut(B) -> Output;

    /// Pairs up the elements of two containers.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self::Inner: Clone,
        B: Clone,
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        B: Clone,
        A: FnMut(B) -> Output,
    {
        match (self, other) {
            (Some(mut function), Some(argument)) => Some(function(argument)),
            _ => None,
        }
    }
}

impl<A> Applicative for Vec<A> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    fn map2<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for left in &self {
            for right in &other {
                result.push(function(left.clone(), right.clone()));
            }
        }
        result
    }

    fn apply<B, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        B: Clone,
        A: FnMut(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for mut function in self {
            for argument in &other {
                result.push(function(argument.clone()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_map2_requires_both() {
        assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
        assert_eq!(Some(1).map2(Some(2), |a, b| a * b), Some(2));
    }

    #[rstest]
    fn vec_product_is_left_major() {
        assert_eq!(
            vec![1, 2].product(vec!['a', 'b']),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }

    #[rstest]
    fn vec_apply_applies_each_function_to_each_argument() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
        assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn pure_then_apply_is_homomorphic() {
        let lifted = <Option<()>>::pure(|n: i32| n + 1);
        assert_eq!(lifted.apply(<Option<()>>::pure(41)), Some(42));
    }
}
