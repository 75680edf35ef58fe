//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                     // left identity
//! m.flat_map(pure) == m                                           // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))   // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::Monad;
//!
//! let halves = Some(8).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halves, Some(4));
//!
//! let expanded = vec![1_usize, 2].flat_map(|n| vec![n; n]);
//! assert_eq!(expanded, vec![1, 2, 2]);
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] whose computations may depend on previous results.
pub trait Monad: Applicative {
    /// Maps every element to a container and concatenates the results in order.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
        Self: Sized,
    {
        self.flat_map(function)
    }

    /// Replaces every element with the whole of `next`.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self::WithType<B>: Clone,
        Self: Sized,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> Monad for Vec<A> {
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}
