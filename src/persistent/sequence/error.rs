//! Error type for [`Sequence`](super::Sequence) operations.

use std::fmt;

/// Represents a failed [`Sequence`](super::Sequence) operation.
///
/// `IndexOutOfBounds` and `NoSuchElement` are ordinary, recoverable results.
/// `CapacityExceeded` is only ever returned by the `try_*` operations; the
/// plain variants of those operations panic with the same message, since
/// growing past [`MAX_LENGTH`](super::MAX_LENGTH) is outside the structure's
/// domain.
///
/// # Examples
///
/// ```rust
/// use fingerseq::persistent::{Sequence, SequenceError};
///
/// let sequence: Sequence<i32> = (0..3).collect();
/// assert_eq!(
///     sequence.get(5),
///     Err(SequenceError::IndexOutOfBounds { index: 5, length: 3 })
/// );
/// assert_eq!(
///     format!("{}", Sequence::<i32>::new().head().unwrap_err()),
///     "head: no such element in an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// An index was not below the sequence length.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence at the time of the request.
        length: usize,
    },
    /// An end of an empty sequence was accessed.
    NoSuchElement {
        /// The name of the operation that needed an element.
        operation: &'static str,
    },
    /// The result would hold more than [`MAX_LENGTH`](super::MAX_LENGTH) elements.
    CapacityExceeded {
        /// The length the operation would have produced, saturated at `usize::MAX`.
        requested: usize,
        /// The maximum supported length.
        maximum: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} out of bounds for sequence of length {length}"
            ),
            Self::NoSuchElement { operation } => write!(
                formatter,
                "{operation}: no such element in an empty sequence"
            ),
            Self::CapacityExceeded { requested, maximum } => write!(
                formatter,
                "sequence capacity exceeded: {requested} elements requested, maximum is {maximum}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SequenceError::IndexOutOfBounds { index: 3, length: 2 },
        "index 3 out of bounds for sequence of length 2"
    )]
    #[case(
        SequenceError::NoSuchElement { operation: "last" },
        "last: no such element in an empty sequence"
    )]
    #[case(
        SequenceError::CapacityExceeded { requested: 10, maximum: 8 },
        "sequence capacity exceeded: 10 elements requested, maximum is 8"
    )]
    fn display_messages(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SequenceError::NoSuchElement { operation: "head" });
    }
}
