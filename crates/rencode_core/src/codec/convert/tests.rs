use crate::codec::{Dict, List, RencodeError, ScanOptions, Target, Value, convert, convert_assign, convert_assign_with, convert_with};

fn assign<T: crate::codec::Scan>(source: &Value, slot: &mut T) -> crate::codec::Result<()> {
	convert_assign(source, &mut Target::from(slot))
}

#[test]
fn same_type_is_copied() {
	let mut out = 0_i64;
	assign(&Value::I64(-9), &mut out).expect("direct copy");
	assert_eq!(out, -9);

	let mut text = String::new();
	assign(&Value::String("abc".to_owned()), &mut text).expect("direct copy");
	assert_eq!(text, "abc");

	let mut flag = false;
	assign(&Value::Bool(true), &mut flag).expect("direct copy");
	assert!(flag);
}

#[test]
fn int64_narrows_into_int32() {
	let mut out = 0_i32;
	assign(&Value::I64(42), &mut out).expect("fits");
	assert_eq!(out, 42);
}

#[test]
fn int64_overflowing_int32_is_reported() {
	let mut out = 7_i32;
	let err = assign(&Value::I64(5_000_000_000), &mut out).expect_err("overflows");
	match err {
		RencodeError::ConversionOverflow { source_type, dest_type } => {
			assert_eq!(source_type, "int64");
			assert_eq!(dest_type, "int32");
		}
		other => panic!("expected overflow, got {other:?}"),
	}
	assert_eq!(out, 7, "target untouched on failure");
}

#[test]
fn compat_options_truncate_same_signedness() {
	let mut out = 0_i32;
	convert_assign_with(&Value::I64(5_000_000_000), &mut Target::from(&mut out), &ScanOptions::compat()).expect("wraps");
	assert_eq!(out, 5_000_000_000_i64 as i32);

	let mut small = 0_u8;
	convert_assign_with(&Value::U16(0x1ff), &mut Target::from(&mut small), &ScanOptions::compat()).expect("wraps");
	assert_eq!(small, 0xff);
}

#[test]
fn compat_options_keep_cross_signedness_checked() {
	let mut out = 0_u32;
	let err = convert_assign_with(&Value::I8(-1), &mut Target::from(&mut out), &ScanOptions::compat()).expect_err("negative");
	assert!(matches!(err, RencodeError::ConversionOverflow { .. }));
}

#[test]
fn unsigned_widens() {
	let mut out = 0_u64;
	assign(&Value::U8(200), &mut out).expect("widens");
	assert_eq!(out, 200);
}

#[test]
fn float_narrows_silently() {
	let mut out = 0_f32;
	assign(&Value::F64(0.1), &mut out).expect("narrows");
	assert_eq!(out, 0.1_f32);

	let mut wide = 0_f64;
	assign(&Value::F32(1.5), &mut wide).expect("widens");
	assert_eq!(wide, 1.5);
}

#[test]
fn string_becomes_bytes() {
	let mut out = Vec::<u8>::new();
	assign(&Value::String("hello".to_owned()), &mut out).expect("copies");
	assert_eq!(out, b"hello");
}

#[test]
fn bytes_become_string() {
	let mut out = String::new();
	assign(&Value::Bytes(b"world".to_vec()), &mut out).expect("copies");
	assert_eq!(out, "world");
}

#[test]
fn invalid_utf8_bytes_do_not_become_string() {
	let mut out = String::from("keep");
	let err = assign(&Value::Bytes(vec![0xff, 0xfe]), &mut out).expect_err("not utf-8");
	assert!(matches!(err, RencodeError::InvalidUtf8 { .. }));
	assert_eq!(out, "keep");
}

#[test]
fn list_copies_into_typed_vec() {
	let mut source = List::with_capacity(6);
	for v in [3, 1, 2] {
		source.push(Value::I32(v));
	}
	let mut out = Vec::<i32>::new();
	assign(&Value::List(source.clone()), &mut out).expect("compatible container");
	assert_eq!(out, vec![3, 1, 2]);
	assert_eq!(out.capacity(), source.capacity());
}

#[test]
fn shifted_list_copies_remaining_capacity() {
	let mut source = List::with_capacity(8);
	for v in [5, 6, 7] {
		source.push(Value::I32(v));
	}
	source.shift(1);
	assert_eq!(source.capacity(), 7);

	let mut out = Vec::<i32>::new();
	assign(&Value::List(source.clone()), &mut out).expect("compatible container");
	assert_eq!(out, vec![6, 7]);
	assert_eq!((out.len(), out.capacity()), (source.len(), source.capacity()));
}

#[test]
fn list_elements_are_not_coerced() {
	let source = Value::List(List::from(vec![Value::I8(1), Value::I8(2)]));
	let mut out = vec![9_i32];
	let err = assign(&source, &mut out).expect_err("int8 elements are not int32");
	assert!(matches!(err, RencodeError::UnsupportedConversion { .. }));
	assert_eq!(out, vec![9]);
}

#[test]
fn mixed_list_fills_dynamic_vec() {
	let source = Value::List(List::from(vec![Value::I8(1), Value::Nil, Value::Bool(false)]));
	let mut out = Vec::<Value>::new();
	assign(&source, &mut out).expect("any element");
	assert_eq!(out, vec![Value::I8(1), Value::Nil, Value::Bool(false)]);
}

#[test]
fn list_of_uint8_fills_bytes() {
	let source = Value::List(List::from(vec![Value::U8(104), Value::U8(105)]));
	let out: Vec<u8> = convert(&source).expect("uint8 slice");
	assert_eq!(out, b"hi");
}

#[test]
fn integers_convert_to_float() {
	let mut out = 0_f64;
	assign(&Value::I16(-12), &mut out).expect("int to float");
	assert_eq!(out, -12.0);

	let mut single = 0_f32;
	assign(&Value::U32(7), &mut single).expect("uint to float");
	assert_eq!(single, 7.0);
}

#[test]
fn large_int_into_float32_loses_precision_without_error() {
	let mut out = 0_f32;
	assign(&Value::I32(16_777_217), &mut out).expect("lossy but accepted");
	assert_eq!(out, 16_777_216.0);
}

#[test]
fn fallback_handles_cross_signedness() {
	let mut out = 0_u16;
	assign(&Value::I32(65_535), &mut out).expect("fits");
	assert_eq!(out, 65_535);

	let mut signed = 0_i8;
	let err = assign(&Value::U8(200), &mut signed).expect_err("too large");
	assert!(matches!(
		err,
		RencodeError::ConversionOverflow { ref source_type, ref dest_type } if source_type == "uint8" && dest_type == "int8"
	));
}

#[test]
fn unrelated_types_are_unsupported() {
	let mut out = 0_i32;
	let err = assign(&Value::Bool(true), &mut out).expect_err("bool to int");
	assert!(matches!(err, RencodeError::UnsupportedConversion { .. }));

	let mut text = String::new();
	let err = assign(&Value::Nil, &mut text).expect_err("nil to string");
	assert!(matches!(err, RencodeError::UnsupportedConversion { .. }));

	let mut n = 0_i64;
	let err = assign(&Value::F64(1.0), &mut n).expect_err("float to int");
	assert!(matches!(err, RencodeError::UnsupportedConversion { .. }));
}

#[test]
fn shared_target_is_unsettable() {
	let out = 3_i32;
	for source in [Value::I32(1), Value::I64(2), Value::Nil] {
		let err = convert_assign(&source, &mut Target::from(&out)).expect_err("read-only target");
		match err {
			RencodeError::UnsettableTarget { type_name } => assert_eq!(type_name, "int32"),
			other => panic!("expected unsettable target, got {other:?}"),
		}
	}
	assert_eq!(out, 3);
}

#[test]
fn dynamic_value_accepts_anything() {
	let mut dict = Dict::new();
	dict.insert(Value::String("k".to_owned()), Value::F32(1.0));
	let source = Value::Dict(dict);
	let out: Value = convert(&source).expect("any value");
	assert_eq!(out, source);
}

#[test]
fn convert_with_returns_typed_value() {
	let n: u32 = convert_with(&Value::U64(9), &ScanOptions::default()).expect("fits");
	assert_eq!(n, 9);
}
