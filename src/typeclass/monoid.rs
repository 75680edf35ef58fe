//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! M::empty().combine(a) == a
//! a.combine(M::empty()) == a
//! ```
//!
//! A monoid is what "folding with an initial value" needs: the identity is
//! the seed and `combine` is the step.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::{Monoid, Sum};
//!
//! let total = Sum::combine_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]);
//! assert_eq!(total, Sum::new(6));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;

    /// Folds an iterator with `combine`, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self(1 as $numeric)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
