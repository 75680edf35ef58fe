//! Higher-kinded type emulation.
//!
//! Rust has no native higher-kinded types, so a container such as
//! `Sequence<_>` cannot be abstracted over directly. [`TypeConstructor`]
//! uses a Generic Associated Type to recover the "same container, different
//! element" relationship that `Functor`, `Monad` and friends need.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: &T) -> Option<T::WithType<String>>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Some(Default::default())
//! }
//!
//! let vector: Vec<String> = retype(&vec![1, 2, 3]).unwrap();
//! assert!(vector.is_empty());
//! ```

/// A type of the shape `F<A>` that can be re-instantiated at another element type.
///
/// `Inner` names `A`, and `WithType<B>` names `F<B>`.
pub trait TypeConstructor {
    /// The element type currently held by the container.
    type Inner;

    /// The same container holding `B` instead of `Inner`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
