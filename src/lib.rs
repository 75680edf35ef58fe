//! # fingerseq
//!
//! A persistent sequence built on lazy 2-3 finger trees, together with the
//! small functional vocabulary it is expressed in.
//!
//! ## Overview
//!
//! - **Persistent Sequence**: an immutable indexed deque with amortized O(1)
//!   access at both ends, logarithmic concatenation, and logarithmic indexing
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Semigroup and Monoid, implemented for `Option`, `Vec` and `Sequence`
//! - **Control Structures**: a thread-safe, compute-once deferred value
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Deferred computation
//! - `persistent`: The persistent `Sequence` (enables `typeclass` and `control`)
//! - `serde`: `Serialize`/`Deserialize` for `Sequence`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fingerseq::prelude::*;
//!
//! let numbers: Sequence<i32> = (1..=4).collect();
//! let more = numbers.append(5).prepend(0);
//!
//! assert_eq!(more.length(), 6);
//! assert_eq!(more.get(3), Ok(&3));
//! assert_eq!(more.combine(Sequence::of([6, 7])).last(), Ok(&7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fingerseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;
