//! Persistent (immutable) data structures.
//!
//! - [`Sequence`]: an indexed deque backed by a lazy 2-3 finger tree
//!
//! # Structural Sharing
//!
//! Every operation returns a new version and leaves its inputs untouched.
//! Versions share all the structure they have in common, so prepending,
//! appending, concatenating, or updating one element never copies the whole
//! sequence.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::persistent::{MAX_LENGTH, Sequence};
//!
//! let sequence: Sequence<i32> = (0..100).collect();
//! assert_eq!(sequence.get(50), Ok(&50));
//!
//! // Structural sharing: the original sequence is preserved
//! let updated = sequence.update(50, 999).unwrap();
//! assert_eq!(sequence.get(50), Ok(&50));    // Original unchanged
//! assert_eq!(updated.get(50), Ok(&999));    // New version
//!
//! assert_eq!(MAX_LENGTH, (1 << 32) - 16);
//! ```

mod sequence;

pub use sequence::{MAX_LENGTH, Sequence, SequenceError, SequenceIntoIterator, SequenceIterator};
