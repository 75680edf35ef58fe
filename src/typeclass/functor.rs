//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! The mapping function is `FnMut` because every container in this crate may
//! hold more than one element and calls it once per element, in order.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::Functor;
//!
//! assert_eq!(Some(5).fmap(|n| n * 2), Some(10));
//! assert_eq!(vec![1, 2, 3].fmap(|n| n.to_string()), vec!["1", "2", "3"]);
//! ```

use super::higher::TypeConstructor;

/// A container whose elements can be transformed while keeping its shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to every element by reference.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards every element, keeping only the shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Functor for Vec<T> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
