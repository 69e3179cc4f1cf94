use rencode::codec::{Decoder, List, RencodeError, Target, TypeTag, Value};

use super::{DynSlot, parse_types};
use crate::cmd::test_support::{fixture, run_rencode, run_rencode_json};
use crate::error::CliError;

#[test]
fn parses_nested_slice_types() {
	let tags = parse_types(&["int32".to_owned(), " []int64".to_owned(), "[]uint8".to_owned()]).expect("known types");
	assert_eq!(tags, vec![TypeTag::I32, TypeTag::Slice(Box::new(TypeTag::I64)), TypeTag::Bytes]);
}

#[test]
fn rejects_unknown_types() {
	let err = parse_types(&["int128".to_owned()]).expect_err("unknown");
	assert!(matches!(err, CliError::UnknownType { name } if name == "int128"));
}

#[test]
fn dyn_slots_receive_converted_values() {
	let bytes = [194, 65, 0, 0, 0, 0, 0, 0, 0, 7, 131, b'a', b'b', b'c'];
	let mut slots = vec![DynSlot::new(TypeTag::Slice(Box::new(TypeTag::Any)))];
	{
		let mut targets: Vec<Target<'_>> = slots.iter_mut().map(|slot| Target::Mut(slot)).collect();
		Decoder::new(&bytes).scan(&mut targets).expect("list into []value");
	}
	let expected = Value::List(List::from(vec![Value::I64(7), Value::Bytes(b"abc".to_vec())]));
	assert_eq!(slots[0].value, Some(expected));
}

#[test]
fn dyn_bytes_slot_accepts_uint8_lists() {
	let mut slot = DynSlot::new(TypeTag::Bytes);
	rencode::codec::convert_assign(&Value::List(List::from(vec![Value::U8(1), Value::U8(2)])), &mut Target::Mut(&mut slot)).expect("uint8 list");
	assert_eq!(slot.value, Some(Value::Bytes(vec![1, 2])));
}

#[test]
fn dyn_slot_rejects_mismatched_values() {
	let mut slot = DynSlot::new(TypeTag::I32);
	let err = rencode::codec::Slot::set(&mut slot, Value::Bool(true)).expect_err("bool is not int32");
	assert!(matches!(err, RencodeError::UnsupportedConversion { .. }));
	assert_eq!(slot.value, None);
}

#[test]
fn scan_json_reports_typed_values() {
	let json = run_rencode_json(&["scan", &fixture("stream.rencode"), "--types", "int32,int64,string,float64", "--json"]);
	let values = json["values"].as_array().expect("values array");
	assert_eq!(values.len(), 4);
	assert_eq!(values[0]["type"], "int32");
	assert_eq!(values[0]["value"], 42);
	assert_eq!(values[1]["value"], 5_000_000_000_i64);
	assert_eq!(values[2]["value"], "hello");
	assert_eq!(values[3]["value"], 1.5);
}

#[test]
fn scan_overflow_fails_with_position() {
	let output = run_rencode(&["scan", &fixture("stream.rencode"), "--types", "int32,int32"]);
	assert!(!output.status.success(), "overflow should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("scan element 1"), "{stderr}");
	assert!(stderr.contains("\"int64\" to \"int32\""), "{stderr}");
}

#[test]
fn scan_wrapping_flag_truncates() {
	let json = run_rencode_json(&["scan", &fixture("stream.rencode"), "--types", "int32,int32", "--wrapping", "--json"]);
	assert_eq!(json["values"][1]["value"], 5_000_000_000_i64 as i32);
}
