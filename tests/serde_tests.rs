#![cfg(feature = "serde")]

use fingerseq::persistent::Sequence;
use fingerseq::sequence;
use rstest::rstest;

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
fn sequence_serializes_as_json_array() {
    let sequence = sequence![1, 2, 3];
    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[1,2,3]");
}

#[rstest]
fn empty_sequence_serializes_as_empty_array() {
    let sequence: Sequence<i32> = Sequence::new();
    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[]");
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn sequence_deserializes_from_json_array() {
    let sequence: Sequence<String> = serde_json::from_str(r#"["a", "b", "c"]"#).unwrap();
    assert_eq!(sequence, sequence![String::from("a"), String::from("b"), String::from("c")]);
}

#[rstest]
fn deserialization_rejects_non_arrays() {
    let result: Result<Sequence<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(33)]
#[case(1_000)]
fn round_trip_preserves_order(#[case] length: i32) {
    let sequence: Sequence<i32> = (0..length).collect();
    let json = serde_json::to_string(&sequence).unwrap();
    let restored: Sequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, sequence);
}

#[rstest]
fn nested_sequences_round_trip() {
    let nested = sequence![sequence![1, 2], Sequence::new(), sequence![3]];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[],[3]]");
    let restored: Sequence<Sequence<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}
