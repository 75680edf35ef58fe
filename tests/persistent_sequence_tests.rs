//! Scenario tests for Sequence.
//!
//! These tests exercise the public API end to end: construction, the deque
//! protocol, concatenation, capacity limits, and the functional vocabulary.

#![cfg(feature = "persistent")]

use fingerseq::persistent::{MAX_LENGTH, Sequence, SequenceError};
use fingerseq::sequence;
use fingerseq::typeclass::{Foldable, Functor, Monad, Monoid, Semigroup, Traversable};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

/// Builds a sequence of `2^exponent` copies of `0` by repeated self-concatenation.
fn doubled(exponent: u32) -> Sequence<u8> {
    (0..exponent).fold(Sequence::singleton(0), |sequence, _| {
        sequence.append_sequence(&sequence)
    })
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn letters_built_by_append_are_indexable() {
    let letters = ('a'..='z').fold(Sequence::new(), |sequence, letter| sequence.append(letter));
    assert_eq!(letters.length(), 26);
    assert_eq!(letters.get(13), Ok(&'n'));
    assert_eq!(letters.head(), Ok(&'a'));
    assert_eq!(letters.last(), Ok(&'z'));
}

#[rstest]
fn literal_runs_and_collect_agree() {
    let literal = sequence![1, 2, 3, 4, 5, 6, 7, 8];
    let collected: Sequence<i32> = (1..=8).collect();
    assert_eq!(literal, collected);
    assert_eq!(Sequence::<i32>::default(), sequence![]);
}

// =============================================================================
// Deque Protocol
// =============================================================================

#[rstest]
fn draining_from_the_front_returns_every_element() {
    let mut sequence: Sequence<i32> = (0..500).collect();
    let mut drained = Vec::new();
    while let Ok(head) = sequence.head() {
        drained.push(*head);
        sequence = sequence.tail().unwrap();
    }
    assert_eq!(drained, (0..500).collect::<Vec<_>>());
    assert_eq!(
        sequence.tail(),
        Err(SequenceError::NoSuchElement { operation: "tail" })
    );
}

#[rstest]
fn draining_from_the_back_returns_every_element() {
    let mut sequence = (0..500).fold(Sequence::new(), |sequence, value| sequence.prepend(value));
    let mut drained = Vec::new();
    while let Some((rest, last)) = sequence.unsnoc() {
        drained.push(*last);
        sequence = rest;
    }
    assert_eq!(drained, (0..500).collect::<Vec<_>>());
}

#[rstest]
fn alternating_ends_keep_order() {
    let mut sequence = Sequence::new();
    for value in 0..200 {
        sequence = if value % 2 == 0 {
            sequence.append(value)
        } else {
            sequence.prepend(-value)
        };
    }
    let expected: Vec<i32> = (0..200)
        .filter(|value| value % 2 == 1)
        .rev()
        .map(|value| -value)
        .chain((0..200).filter(|value| value % 2 == 0))
        .collect();
    assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), expected);
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(sequence.get(index), Ok(value));
    }
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(0, 1)]
#[case(5, 3)]
#[case(100, 1)]
#[case(1, 100)]
#[case(377, 610)]
fn concatenation_indexes_both_halves(#[case] left_length: usize, #[case] right_length: usize) {
    let left: Sequence<usize> = (0..left_length).collect();
    let right: Sequence<usize> = (left_length..left_length + right_length).collect();
    let joined = left.append_sequence(&right);
    assert_eq!(joined.length(), left_length + right_length);
    for index in 0..joined.length() {
        assert_eq!(joined.get(index), Ok(&index));
    }
    assert_eq!(right.prepend_sequence(&left), joined);
}

#[rstest]
fn split_and_rejoin_restores_the_original() {
    let sequence: Sequence<i32> = (0..100).collect();
    let rejoined = sequence.take(40).append_sequence(&sequence.drop_first(40));
    assert_eq!(rejoined, sequence);
    assert_eq!(sequence.take(40).length(), 40);
    assert_eq!(sequence.drop_first(40).head(), Ok(&40));
}

#[rstest]
fn updates_are_persistent() {
    let original: Sequence<String> = (0..64).map(|n| n.to_string()).collect();
    let updated = original
        .update(10, String::from("ten"))
        .and_then(|sequence| sequence.with_head(String::from("zero")))
        .and_then(|sequence| sequence.with_last(String::from("end")))
        .unwrap();
    assert_eq!(updated.get(10).map(String::as_str), Ok("ten"));
    assert_eq!(updated.head().map(String::as_str), Ok("zero"));
    assert_eq!(updated.last().map(String::as_str), Ok("end"));
    assert_eq!(original.get(10).map(String::as_str), Ok("10"));
    assert_eq!(
        original.update(64, String::new()),
        Err(SequenceError::IndexOutOfBounds {
            index: 64,
            length: 64
        })
    );
}

// =============================================================================
// Capacity
// =============================================================================

#[rstest]
fn concatenating_two_under_half_capacity_sequences_succeeds() {
    let under_half = doubled(31).drop_first(16);
    assert!(under_half.length() * 2 <= MAX_LENGTH);

    let joined = under_half.try_append_sequence(&under_half).unwrap();
    assert_eq!(joined.length(), under_half.length() * 2);
    assert_eq!(joined.last(), Ok(&0));
    assert_eq!(joined.get(joined.length() / 2), Ok(&0));
}

#[rstest]
fn concatenating_two_over_half_capacity_sequences_fails() {
    let over_half = doubled(31);
    assert!(over_half.length() * 2 > MAX_LENGTH);

    let result = over_half.try_append_sequence(&over_half);
    assert_eq!(
        result.unwrap_err(),
        SequenceError::CapacityExceeded {
            requested: over_half.length() * 2,
            maximum: MAX_LENGTH,
        }
    );
    assert_eq!(over_half.length(), 1 << 31);
    assert_eq!(over_half.head(), Ok(&0));
    assert_eq!(
        over_half.try_prepend_sequence(&over_half).map(|joined| joined.length()),
        Err(SequenceError::CapacityExceeded {
            requested: over_half.length() * 2,
            maximum: MAX_LENGTH,
        })
    );
}

#[rstest]
#[should_panic(expected = "sequence capacity exceeded")]
fn plain_concatenation_past_capacity_panics() {
    let over_half = doubled(31);
    let _ = over_half.append_sequence(&over_half);
}

// =============================================================================
// Functional Vocabulary
// =============================================================================

#[rstest]
fn filter_keeps_evens_in_order() {
    let digits: Sequence<i32> = (0..10).collect();
    assert_eq!(digits.filter(|n| n % 2 == 0), sequence![0, 2, 4, 6, 8]);
}

#[rstest]
fn reverse_twice_is_identity() {
    let sequence = sequence![1, 2, 3];
    assert_eq!(sequence.reverse(), sequence![3, 2, 1]);
    assert_eq!(sequence.reverse().reverse(), sequence);
}

#[rstest]
fn unfold_right_returns_what_it_built() {
    let fibonacci = Sequence::unfold_right((0_u64, 1_u64), |(current, next)| {
        (current < 100).then_some((current, (next, current + next)))
    });
    assert_eq!(
        fibonacci,
        sequence![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]
    );
}

#[rstest]
fn type_class_vocabulary_agrees_with_inherent_operations() {
    let sequence: Sequence<i32> = (1..=5).collect();
    assert_eq!(sequence.clone().fmap(|n| n * 3), sequence.map(|n| n * 3));
    assert_eq!(
        sequence.clone().flat_map(|n| sequence![n, -n]),
        sequence.bind(|&n| sequence![n, -n])
    );
    assert_eq!(sequence.clone().fold_left(0, |total, n| total + n), 15);
    assert_eq!(
        Sequence::combine_all([sequence.take(2), Sequence::empty(), sequence.drop_first(2)]),
        sequence
    );
    assert_eq!(
        sequence.clone().traverse_option(|n| (n > 0).then_some(n * 2)),
        Some(sequence.map(|n| n * 2))
    );
    assert_eq!(sequence.clone().combine(Sequence::empty()), sequence);
}

#[rstest]
fn scans_and_zips_compose() {
    let sequence: Sequence<i32> = (1..=4).collect();
    let prefix_sums = sequence.scan_left(0, |total, n| total + n);
    let suffix_sums = sequence.scan_right(0, |n, total| n + total);
    assert_eq!(prefix_sums, sequence![0, 1, 3, 6, 10]);
    assert_eq!(suffix_sums, sequence![10, 9, 7, 4, 0]);

    let totals = prefix_sums.zip_with(&suffix_sums, |left, right| left + right);
    assert!(totals.for_all(|&total| total == 10));

    let (lefts, rights) = sequence.zip(&sequence.reverse()).unzip();
    assert_eq!(lefts, sequence);
    assert_eq!(rights, sequence![4, 3, 2, 1]);
}

// =============================================================================
// Sharing Across Threads
// =============================================================================

#[rstest]
fn concurrent_readers_force_shared_middles_consistently() {
    let shared = Arc::new(
        (0..64).fold(Sequence::new(), |sequence: Sequence<usize>, value| {
            sequence.append_sequence(&(value * 100..value * 100 + 100).collect())
        }),
    );
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..shared.length())
                    .skip(worker)
                    .step_by(8)
                    .all(|index| shared.get(index) == Ok(&index))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(shared.iter().rev().next(), Some(&6_399));
}
