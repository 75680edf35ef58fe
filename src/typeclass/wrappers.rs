//! Numeric wrappers selecting a monoid for the same underlying type.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//!
//! These are what [`Foldable::fold_map`](super::Foldable::fold_map) is usually
//! paired with when summarising a container of numbers.

/// Additive semigroup/monoid wrapper.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Multiplicative semigroup/monoid wrapper.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<u64>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}
