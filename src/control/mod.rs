//! Control structures for functional programming.
//!
//! - [`Deferred`]: a thread-safe, compute-once memoizing cell
//! - [`Thunk`]: the zero-argument computation a `Deferred` runs
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::control::Deferred;
//!
//! let deferred = Deferred::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! assert_eq!(*deferred.force(), 42);
//! ```

mod deferred;

pub use deferred::{Deferred, DeferredPoisonedError, Thunk};
