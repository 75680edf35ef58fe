//! Traversable type class - mapping with effects and collecting the result.
//!
//! Rust cannot abstract over an arbitrary `Applicative` effect here, so the
//! two effects that matter in practice are specialised:
//!
//! - `traverse_option`: stops at the first `None`
//! - `traverse_result`: stops at the first `Err`, returning it
//!
//! Elements are visited first-to-last and the function is not called again
//! after the first failure.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::Traversable;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2]));
//!
//! let failed: Result<Vec<i32>, String> =
//!     vec!["1", "x"].traverse_result(|s| s.parse().map_err(|_| format!("bad: {s}")));
//! assert_eq!(failed, Err(String::from("bad: x")));
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// A structure that can be traversed left to right with an effectful function.
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to each element; `None` if any application is `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies `function` to each element; the first `Err` wins.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a container of `Option`s inside out.
    fn sequence_option<B>(self) -> Option<Self::WithType<B>>
    where
        Self: TypeConstructor<Inner = Option<B>> + Sized,
    {
        self.traverse_option(|element| element)
    }

    /// Turns a container of `Result`s inside out; the first `Err` wins.
    fn sequence_result<B, E>(self) -> Result<Self::WithType<B>, E>
    where
        Self: TypeConstructor<Inner = Result<B, E>> + Sized,
    {
        self.traverse_result(|element| element)
    }

    /// Runs `function` on each element for its effect only.
    fn for_each_result<E, F>(self, mut function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.fold_left(Ok(()), |state, element| state.and_then(|()| function(element)))
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Ok(None),
        }
    }
}

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}
