use crate::codec::{RencodeError, Result, TypeTag, Value};

#[derive(Clone, Copy)]
enum Wide {
	Signed(i64),
	Unsigned(u64),
}

/// Exact, range-checked conversion between integer types of any signedness.
///
/// Returns [`RencodeError::ConversionOverflow`] when the source does not fit
/// the destination range and [`RencodeError::UnsupportedConversion`] when
/// either side is not an integer.
pub fn convert_integer(source: &Value, dest: &TypeTag) -> Result<Value> {
	let unsupported = || RencodeError::UnsupportedConversion {
		source_type: source.type_tag().name(),
		dest_type: dest.name(),
	};

	let wide = match (source.as_i64(), source.as_u64()) {
		(Some(v), _) => Wide::Signed(v),
		(_, Some(v)) => Wide::Unsigned(v),
		_ => return Err(unsupported()),
	};

	let converted = match dest {
		TypeTag::I8 => fit::<i8>(wide).map(Value::I8),
		TypeTag::I16 => fit::<i16>(wide).map(Value::I16),
		TypeTag::I32 => fit::<i32>(wide).map(Value::I32),
		TypeTag::I64 => fit::<i64>(wide).map(Value::I64),
		TypeTag::U8 => fit::<u8>(wide).map(Value::U8),
		TypeTag::U16 => fit::<u16>(wide).map(Value::U16),
		TypeTag::U32 => fit::<u32>(wide).map(Value::U32),
		TypeTag::U64 => fit::<u64>(wide).map(Value::U64),
		_ => return Err(unsupported()),
	};

	converted.ok_or_else(|| RencodeError::ConversionOverflow {
		source_type: source.type_tag().name(),
		dest_type: dest.name(),
	})
}

fn fit<T: TryFrom<i64> + TryFrom<u64>>(wide: Wide) -> Option<T> {
	match wide {
		Wide::Signed(v) => T::try_from(v).ok(),
		Wide::Unsigned(v) => T::try_from(v).ok(),
	}
}
