//! Thread-safe deferred computation with memoization.
//!
//! [`Deferred<T, F>`] holds a zero-argument computation and evaluates it the
//! first time [`Deferred::force`] is called. The result is cached; every later
//! `force` returns the same value without re-running the computation.
//!
//! The computation is anything implementing [`Thunk`]. Every `FnOnce() -> T`
//! closure is a thunk, and so is any plain data type that knows how to finish
//! its own work. The latter lets a container store suspended work without
//! boxing a closure, and therefore without requiring `Send + 'static` of the
//! values the closure would have captured.
//!
//! # Concurrency
//!
//! A `Deferred` is `Sync` when `T: Send + Sync` and `F: Send`. Concurrent
//! callers of `force` race to a single evaluation: one of them runs the thunk,
//! the others block until the value is published, and all observe the same
//! value.
//!
//! If the thunk panics, the cell is poisoned and every later `force` panics.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::control::Deferred;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let deferred = Arc::new(Deferred::new(|| (1..=10).sum::<i32>()));
//! assert!(!deferred.is_evaluated());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let deferred = Arc::clone(&deferred);
//!         thread::spawn(move || *deferred.force())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 55);
//! }
//! ```

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A zero-argument computation producing a `T`, run at most once.
pub trait Thunk<T> {
    /// Runs the computation.
    fn evaluate(self) -> T;
}

impl<T, F: FnOnce() -> T> Thunk<T> for F {
    #[inline]
    fn evaluate(self) -> T {
        self()
    }
}

/// Error returned by [`Deferred::into_inner`] when the thunk is gone.
///
/// This happens only after a previous evaluation panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredPoisonedError;

impl fmt::Display for DeferredPoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Deferred: thunk already consumed or poisoned")
    }
}

impl std::error::Error for DeferredPoisonedError {}

/// A lazily evaluated, memoized, thread-safe value.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The thunk producing it (defaults to `fn() -> T`)
///
/// # Examples
///
/// ```rust
/// use fingerseq::control::Deferred;
///
/// let deferred = Deferred::new(|| String::from("computed"));
/// assert_eq!(deferred.get(), None);
/// assert_eq!(deferred.force(), "computed");
/// assert_eq!(deferred.get().map(String::as_str), Some("computed"));
/// ```
pub struct Deferred<T, F = fn() -> T> {
    value: OnceLock<T>,
    thunk: Mutex<Option<F>>,
}

impl<T, F: Thunk<T>> Deferred<T, F> {
    /// Creates a deferred value; `thunk` is not run until [`Deferred::force`].
    #[inline]
    pub fn new(thunk: F) -> Self {
        Self {
            value: OnceLock::new(),
            thunk: Mutex::new(Some(thunk)),
        }
    }

    /// Evaluates the thunk if needed and returns the memoized value.
    ///
    /// # Panics
    ///
    /// Panics if the thunk panics, or if a previous evaluation panicked.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| {
            let thunk = self.thunk.lock().take();
            match thunk {
                Some(thunk) => thunk.evaluate(),
                None => panic!("Deferred instance has been poisoned"),
            }
        })
    }

    /// Consumes the cell and returns its value, evaluating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DeferredPoisonedError`] if a previous evaluation panicked.
    pub fn into_inner(self) -> Result<T, DeferredPoisonedError> {
        let Self { value, thunk } = self;
        match value.into_inner() {
            Some(value) => Ok(value),
            None => thunk
                .into_inner()
                .map(Thunk::evaluate)
                .ok_or(DeferredPoisonedError),
        }
    }
}

impl<T, F> Deferred<T, F> {
    /// Creates an already-evaluated cell.
    #[inline]
    pub fn ready(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            thunk: Mutex::new(None),
        }
    }

    /// Returns the value if it has been computed, without forcing it.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns `true` once the value has been computed.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns `true` if an evaluation panicked and left no value behind.
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none() && self.thunk.lock().is_none()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Deferred<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Deferred").field(value).finish(),
            None => formatter.write_str("Deferred(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    struct Doubling(u32);

    impl Thunk<u32> for Doubling {
        fn evaluate(self) -> u32 {
            self.0 * 2
        }
    }

    #[rstest]
    fn force_runs_thunk_once() {
        let calls = Cell::new(0);
        let deferred = Deferred::new(|| {
            calls.set(calls.get() + 1);
            7
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(*deferred.force(), 7);
        assert_eq!(*deferred.force(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn data_thunks_are_supported() {
        let deferred = Deferred::new(Doubling(21));
        assert_eq!(*deferred.force(), 42);
    }

    #[rstest]
    fn ready_is_already_evaluated() {
        let deferred: Deferred<i32> = Deferred::ready(3);
        assert!(deferred.is_evaluated());
        assert_eq!(deferred.get(), Some(&3));
    }

    #[rstest]
    fn into_inner_evaluates_pending_thunk() {
        let deferred = Deferred::new(|| vec![1, 2]);
        assert_eq!(deferred.into_inner(), Ok(vec![1, 2]));
    }

    #[rstest]
    fn panicking_thunk_poisons_the_cell() {
        let deferred = Deferred::new(|| -> i32 { panic!("boom") });
        let first = catch_unwind(AssertUnwindSafe(|| *deferred.force()));
        assert!(first.is_err());
        assert!(deferred.is_poisoned());

        let second = catch_unwind(AssertUnwindSafe(|| *deferred.force()));
        assert!(second.is_err());
        assert_eq!(deferred.into_inner(), Err(DeferredPoisonedError));
    }

    #[rstest]
    fn debug_shows_pending_state() {
        let deferred = Deferred::new(|| 1);
        assert_eq!(format!("{deferred:?}"), "Deferred(<pending>)");
        let _ = deferred.force();
        assert_eq!(format!("{deferred:?}"), "Deferred(1)");
    }
}
