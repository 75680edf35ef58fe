//! Type class traits for functional programming abstractions.
//!
//! These are the generic vocabulary that every container in the crate
//! speaks, [`Sequence`](crate::persistent::Sequence) included:
//!
//! - [`Functor`]: mapping over elements
//! - [`Applicative`]: lifting values and combining containers
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: folding a structure into a summary value
//! - [`Traversable`]: mapping with `Option`/`Result` effects
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support higher-kinded types, so [`TypeConstructor`] uses a
//! Generic Associated Type to name "the same container at another element type".
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::{Foldable, Functor, Monoid, Semigroup, Sum};
//!
//! let doubled = vec![1, 2, 3].fmap(|n| n * 2);
//! assert_eq!(doubled.fold_map(Sum::new), Sum::new(12));
//!
//! assert_eq!(String::empty().combine(String::from("x")), "x");
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
