//! Tests for the equality predicates.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shapecmp_core::{Argument, Error, Shape, Value};
use shapecmp_test::{enumeration_of, init_tracing, ints, iter_of, strings, DrainCounter};

use super::*;

fn all_eq(by_value: bool, args: &mut [Argument]) -> bool {
    all_equals(by_value, None, Some(args)).unwrap()
}

fn same_index(by_value: bool, args: &mut [Argument]) -> bool {
    all_equals_same_index(by_value, None, Some(args)).unwrap()
}

#[test]
fn test_all_equals_single_element_sequences() {
    assert!(all_eq(false, &mut [strings(&["1"]), strings(&["1"])]));
    assert!(!all_eq(false, &mut [strings(&["1"]), strings(&["2"])]));
}

#[test]
fn test_all_equals_null_and_empty_lists() {
    assert!(all_equals(false, None, None).unwrap());
    let err = all_equals(false, None, Some(&mut [])).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(not_all_equals(false, None, Some(&mut [])).is_err());
}

#[test]
fn test_all_equals_is_one_stream() {
    assert!(all_eq(false, &mut [strings(&["a", "a", "a"])]));
    assert!(!all_eq(false, &mut [strings(&["a", "b"])]));
    assert!(all_eq(false, &mut [strings(&["x"])]));
    assert!(all_eq(false, &mut [strings(&["x", "x"]), strings(&["x"])]));
    assert!(!all_eq(false, &mut [strings(&["x", "x"]), strings(&["y"])]));
}

#[test]
fn test_all_equals_empty_argument_keeps_previous() {
    assert!(all_eq(false, &mut [strings(&["x"]), strings(&[]), strings(&["x"])]));
    assert!(!all_eq(false, &mut [strings(&["x"]), strings(&[]), strings(&["y"])]));
}

#[test]
fn test_all_equals_null_element_takes_part() {
    let null_seq = || Argument::sequence([Value::Null]);
    assert!(!all_eq(false, &mut [strings(&["1"]), null_seq()]));
    assert!(!all_eq(false, &mut [null_seq(), strings(&["1"])]));
    assert!(all_eq(false, &mut [null_seq(), null_seq()]));
}

#[test]
fn test_all_equals_opaque_and_null_arguments() {
    assert!(all_eq(false, &mut [Argument::Opaque(Value::Int(1)), ints(&[1])]));
    assert!(!all_eq(false, &mut [Argument::Opaque(Value::Int(1)), ints(&[2])]));
    assert!(all_eq(false, &mut [strings(&["a"]), Argument::Null, strings(&["a"])]));
}

#[test]
fn test_all_equals_mapping_reads_values() {
    let map = Argument::mapping([("a", "x"), ("b", "x")]);
    assert!(all_eq(false, &mut [map, strings(&["x"])]));
    let map = Argument::mapping([("x", "a")]);
    assert!(!all_eq(false, &mut [map, strings(&["x"])]));
}

#[test]
fn test_all_equals_by_value() {
    let mut args = [
        Argument::sequence([1.50]),
        Argument::sequence([Value::Decimal(Decimal::new(15, 1))]),
        strings(&["1.5"]),
    ];
    assert!(all_equals(true, None, Some(&mut args)).unwrap());

    let mut args = [Argument::sequence([1.50]), strings(&["1.5"])];
    assert!(!all_equals(false, None, Some(&mut args)).unwrap());
    let mut args = [Argument::sequence([1.50]), strings(&["1.5"])];
    assert!(not_all_equals(false, None, Some(&mut args)).unwrap());
}

#[test]
fn test_all_equals_decimal_scale_needs_value_mode() {
    let args = || {
        [
            Argument::sequence([Value::Decimal(Decimal::new(150, 2))]),
            Argument::sequence([Value::Decimal(Decimal::new(15, 1))]),
        ]
    };
    assert!(!all_equals(false, None, Some(&mut args())).unwrap());
    assert!(all_equals(true, None, Some(&mut args())).unwrap());
    assert!(!same_index(false, &mut args()));
    assert!(same_index(true, &mut args()));
}

#[test]
fn test_all_equals_signed_zero_needs_value_mode() {
    let args = || [Argument::sequence([0.0]), Argument::sequence([-0.0])];
    assert!(!all_equals(false, None, Some(&mut args())).unwrap());
    assert!(all_equals(true, None, Some(&mut args())).unwrap());
}

#[test]
fn test_all_equals_skips_empty_arguments() {
    init_tracing();
    let mut args = [
        strings(&["1"]),
        iter_of(vec![Value::from("1")]),
        Argument::Null,
        strings(&[]),
        Argument::mapping([("", "1")]),
    ];
    let result = all_equals(false, Some(&mut Argument::size_is_empty), Some(&mut args));
    assert!(result.unwrap());
}

#[test]
fn test_all_equals_skips_all_null_arguments() {
    let mut args = [
        strings(&["1"]),
        iter_of(vec![Value::from("1")]),
        Argument::Null,
        strings(&[]),
        Argument::sequence([Value::Null]),
        Argument::mapping([("", "1")]),
    ];
    let result = all_equals(false, Some(&mut Argument::is_all_empty), Some(&mut args));
    assert!(result.unwrap());
}

#[test]
fn test_all_equals_by_value_across_shapes() {
    let mut args = [
        strings(&["1"]),
        iter_of(vec![Value::from("1")]),
        strings(&[]),
        Argument::sequence([Value::Null]),
        Argument::mapping([("", "1")]),
        enumeration_of(vec![Value::Int(1)]),
    ];
    let result = all_equals(true, Some(&mut Argument::is_all_empty), Some(&mut args));
    assert!(result.unwrap());
}

#[test]
fn test_all_equals_cursor_drained_once() {
    let counter = DrainCounter::new();
    let mut seen = Vec::new();
    let mut skip = |arg: &mut Argument| {
        seen.push(arg.shape());
        arg.is_all_empty()
    };
    let mut args = [counter.cursor(vec![Value::from("1"), Value::from("1")]), strings(&["1"])];
    assert!(all_equals(false, Some(&mut skip), Some(&mut args)).unwrap());
    assert_eq!(seen, vec![Shape::Sequence, Shape::Sequence]);
    assert_eq!(counter.pulled(), 2);
}

#[test]
fn test_skip_sees_materialized_enumeration() {
    let mut seen = Vec::new();
    let mut skip = |arg: &mut Argument| {
        seen.push((arg.shape(), arg.element_count()));
        false
    };
    let mut args = [enumeration_of(vec![Value::Int(4), Value::Int(5)]), ints(&[4, 5])];
    assert!(all_equals_same_index(false, Some(&mut skip), Some(&mut args)).unwrap());
    assert_eq!(seen, vec![(Shape::Sequence, Some(2)), (Shape::Sequence, Some(2))]);
    assert_eq!(args[0].shape(), Shape::Sequence);
}

#[test]
fn test_all_equals_cursor_mismatch_is_seen() {
    let mut args = [iter_of(vec![Value::from("1"), Value::from("2")])];
    let result = all_equals(false, Some(&mut Argument::is_all_empty), Some(&mut args));
    assert!(!result.unwrap());

    let mut args = [strings(&["1"]), enumeration_of(vec![Value::from("2")])];
    assert!(!all_eq(false, &mut args));
}

#[test]
fn test_all_equals_skip_called_once_per_argument() {
    let mut calls = 0;
    let mut skip = |_: &mut Argument| {
        calls += 1;
        false
    };
    let mut args = [strings(&["a"]), strings(&["a"]), strings(&["a"])];
    assert!(all_equals(false, Some(&mut skip), Some(&mut args)).unwrap());
    assert_eq!(calls, 3);
}

#[test]
fn test_same_index_lengths() {
    assert!(same_index(false, &mut [ints(&[1, 2]), ints(&[1, 2])]));
    assert!(!same_index(false, &mut [ints(&[1, 2]), ints(&[1, 2, 3])]));
    assert!(!same_index(false, &mut [ints(&[1, 2]), ints(&[1, 3])]));
    assert!(not_all_equals_same_index(false, None, Some(&mut [ints(&[1]), ints(&[2])])).unwrap());
}

#[test]
fn test_same_index_needs_two_arguments() {
    assert!(all_equals_same_index(false, None, None).unwrap());
    let err = all_equals_same_index(false, None, Some(&mut [ints(&[1])])).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(all_equals_same_index(false, None, Some(&mut [])).is_err());
}

#[test]
fn test_same_index_rejected_call_leaves_cursor_alone() {
    let counter = DrainCounter::new();
    let mut args = [counter.cursor(vec![Value::Int(1)])];
    assert!(all_equals_same_index(false, None, Some(&mut args)).is_err());
    assert_eq!(counter.pulled(), 0);
    assert_eq!(args[0].shape(), Shape::ExternalIterator);
}

#[test]
fn test_same_index_only_compares_positions() {
    // Different elements inside one argument are fine.
    assert!(same_index(false, &mut [ints(&[1, 2, 3]), ints(&[1, 2, 3]), ints(&[1, 2, 3])]));
    assert!(!same_index(false, &mut [ints(&[1, 2, 3]), ints(&[1, 2, 3]), ints(&[1, 2, 4])]));
}

#[test]
fn test_same_index_skip_excludes_from_length_check() {
    let mut skip = |arg: &mut Argument| arg.element_count() == Some(3);
    let mut args = [ints(&[1, 2]), ints(&[1, 2, 3]), ints(&[1, 2])];
    assert!(all_equals_same_index(false, Some(&mut skip), Some(&mut args)).unwrap());
}

#[test]
fn test_same_index_length_mismatch_short_circuits() {
    let mut calls = 0;
    let mut skip = |_: &mut Argument| {
        calls += 1;
        false
    };
    let mut args = [ints(&[1]), ints(&[1, 2]), ints(&[1])];
    assert!(!all_equals_same_index(false, Some(&mut skip), Some(&mut args)).unwrap());
    assert_eq!(calls, 2);
}

#[test]
fn test_same_index_mapping_counts_values() {
    let map = Argument::mapping([("a", 1), ("b", 2)]);
    assert!(same_index(false, &mut [map, ints(&[1, 2])]));
    let map = Argument::mapping([("a", 1)]);
    assert!(!same_index(false, &mut [map, ints(&[1, 2])]));
}

#[test]
fn test_same_index_opaque_and_null_not_counted() {
    let mut args = [
        ints(&[1, 2]),
        Argument::Opaque(Value::Int(5)),
        Argument::Null,
        Argument::array([1, 2]),
    ];
    assert!(same_index(false, &mut args));
}

#[test]
fn test_same_index_cursors_drained_once() {
    let counter = DrainCounter::new();
    let mut args = [
        counter.cursor(vec![Value::Int(1), Value::Int(2)]),
        ints(&[1, 2]),
        enumeration_of(vec![Value::Int(1), Value::Int(2)]),
    ];
    let result = all_equals_same_index(false, Some(&mut Argument::size_is_empty), Some(&mut args));
    assert!(result.unwrap());
    assert_eq!(counter.pulled(), 2);
}

#[test]
fn test_same_index_by_value() {
    let mut args = [Argument::sequence([Value::Float(1.0), Value::Int(2)]), strings(&["1", "2"])];
    assert!(all_equals_same_index(true, None, Some(&mut args)).unwrap());
    let mut args = [Argument::sequence([Value::Float(1.0), Value::Int(2)]), strings(&["1", "2"])];
    assert!(!all_equals_same_index(false, None, Some(&mut args)).unwrap());
}

#[test]
fn test_same_index_null_elements() {
    let seq = || Argument::sequence([Value::Null, Value::Int(1)]);
    assert!(same_index(false, &mut [seq(), seq()]));
    assert!(!same_index(false, &mut [seq(), ints(&[0, 1])]));
}

#[test]
fn test_same_index_everything_skipped() {
    let mut args = [ints(&[1]), ints(&[2, 3])];
    let mut skip = |_: &mut Argument| true;
    assert!(all_equals_same_index(false, Some(&mut skip), Some(&mut args)).unwrap());
}

proptest! {
    #[test]
    fn prop_all_equals_matches_windows(v in prop::collection::vec(0i64..3, 0..8)) {
        let expected = v.windows(2).all(|w| w[0] == w[1]);
        prop_assert_eq!(all_eq(false, &mut [ints(&v)]), expected);
    }

    #[test]
    fn prop_all_equals_split_anywhere(v in prop::collection::vec(0i64..2, 1..8), cut in 0usize..8) {
        let cut = cut.min(v.len());
        let whole = all_eq(false, &mut [ints(&v)]);
        let split = all_eq(false, &mut [ints(&v[..cut]), ints(&v[cut..])]);
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn prop_same_index_matches_slice_equality(
        a in prop::collection::vec(0i64..3, 0..6),
        b in prop::collection::vec(0i64..3, 0..6),
    ) {
        prop_assert_eq!(same_index(false, &mut [ints(&a), ints(&b)]), a == b);
        prop_assert!(same_index(false, &mut [ints(&a), ints(&a)]));
    }
}
