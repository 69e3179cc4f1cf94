#![allow(missing_docs)]

use rencode::codec::{Decoder, List, RencodeError, Target, Value, convert_assign};
use rencode::targets;
use rencode_testkit::fixture_bytes;

#[test]
fn int64_scans_into_int32() {
	let bytes = fixture_bytes("stream.rencode");
	let mut decoder = Decoder::new(&bytes);
	let mut out = 0_i32;
	decoder.scan(&mut targets![&mut out]).expect("42 fits");
	assert_eq!(out, 42);
}

#[test]
fn int64_overflowing_int32_names_both_types() {
	let bytes = fixture_bytes("stream.rencode");
	let mut decoder = Decoder::new(&bytes);
	let (mut first, mut second) = (0_i32, 0_i32);
	let err = decoder.scan(&mut targets![&mut first, &mut second]).expect_err("5e9 overflows");
	assert_eq!(err.element_index(), Some(1));
	match err.root_cause() {
		RencodeError::ConversionOverflow { source_type, dest_type } => {
			assert_eq!(source_type, "int64");
			assert_eq!(dest_type, "int32");
		}
		other => panic!("expected overflow, got {other:?}"),
	}
	assert_eq!((first, second), (42, 0));
}

#[test]
fn stream_fixture_scans_with_matching_types() {
	let bytes = fixture_bytes("stream.rencode");
	let mut decoder = Decoder::new(&bytes);
	let (mut a, mut b, mut c, mut d) = (0_i64, 0_i64, String::new(), 0_f64);
	decoder.scan(&mut targets![&mut a, &mut b, &mut c, &mut d]).expect("all convert");
	assert_eq!((a, b, c.as_str(), d), (42, 5_000_000_000, "hello", 1.5));
}

#[test]
fn record_fixture_scans_nested_values() {
	let bytes = fixture_bytes("record.rencode");
	let value = Decoder::new(&bytes).decode_next().expect("record decodes");
	let Value::List(record) = value else {
		panic!("expected list record");
	};

	let mut id = 0_u32;
	let mut name = Vec::<u8>::new();
	let mut active = false;
	let mut scores = Vec::<i8>::new();
	let mut extra = Value::Nil;
	record
		.scan(&mut targets![&mut id, &mut name, &mut active, &mut scores, &mut extra])
		.expect("record scans");
	assert_eq!(id, 42);
	assert_eq!(name, b"hello");
	assert!(active);
	assert_eq!(scores, vec![1, 2, 3]);
	let dict = extra.as_dict().expect("dict value");
	assert_eq!(dict.get_str("k"), Some(&Value::I8(-1)));
}

#[test]
fn single_string_list_scans_into_bytes() {
	let list = List::from(vec![Value::String("hello".to_owned())]);
	let mut out = Vec::<u8>::new();
	list.scan(&mut targets![&mut out]).expect("string to bytes");
	assert_eq!(out, b"hello".to_vec());
}

#[test]
fn list_scan_length_mismatch_leaves_targets() {
	let list = List::from(vec![Value::I8(1), Value::I8(2)]);
	let (mut a, mut b, mut c) = (String::from("a"), String::from("b"), String::from("c"));
	let err = list.scan(&mut targets![&mut a, &mut b, &mut c]).expect_err("mismatch");
	assert!(matches!(err, RencodeError::LengthMismatch { requested: 3, available: 2 }));
	assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("a", "b", "c"));
}

#[test]
fn shift_past_end_empties_list() {
	let mut list = List::from(vec![Value::Nil, Value::Nil]);
	assert_eq!(list.shift(5), 2);
	assert!(list.is_empty());
}

#[test]
fn read_only_target_is_always_unsettable() {
	let fixed = 0_i32;
	for value in [Value::I32(1), Value::String("x".to_owned()), Value::Nil, Value::F64(2.0)] {
		let err = convert_assign(&value, &mut Target::from(&fixed)).expect_err("read-only");
		assert!(matches!(err, RencodeError::UnsettableTarget { .. }));
	}
}

#[test]
fn truncated_fixture_surfaces_decode_error() {
	let bytes = fixture_bytes("truncated.rencode");
	let mut decoder = Decoder::new(&bytes);
	let (mut a, mut b) = (0_u8, 0_u8);
	let err = decoder.scan(&mut targets![&mut a, &mut b]).expect_err("truncated");
	assert!(matches!(err, RencodeError::UnexpectedEof { at: 2, need: 4, rem: 1 }));
	assert_eq!((a, b), (1, 0));
}
