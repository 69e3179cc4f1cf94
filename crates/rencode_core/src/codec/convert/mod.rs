use tracing::trace;

use crate::codec::{
	Kind, List, RencodeError, Result, Scan, Target, TypeTag, Value, classify, convert_integer, is_assignable, is_compatible_container,
};

/// Behavior switches for value conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
	/// Truncate same-signedness integer narrowing instead of reporting overflow.
	pub wrapping_integers: bool,
}

impl ScanOptions {
	/// Preset matching the behavior of older rencode scanners, which narrow
	/// same-signedness integers with plain casts.
	pub fn compat() -> Self {
		Self { wrapping_integers: true }
	}
}

/// Assign `source` into `target` with default options.
pub fn convert_assign(source: &Value, target: &mut Target<'_>) -> Result<()> {
	convert_assign_with(source, target, &ScanOptions::default())
}

/// Assign `source` into `target`, converting it to the target type.
///
/// The target is checked for settability first and is written at most once,
/// only after a conversion rule has produced a value.
pub fn convert_assign_with(source: &Value, target: &mut Target<'_>, options: &ScanOptions) -> Result<()> {
	let slot = match target {
		Target::Mut(slot) => slot,
		Target::Shared(slot) => {
			return Err(RencodeError::UnsettableTarget {
				type_name: slot.type_tag().name(),
			});
		}
	};

	let dest = slot.type_tag();
	let value = convert_value(source, &dest, options)?;
	slot.set(value)
}

/// Convert `source` into a fresh `T`.
pub fn convert<T: Scan>(source: &Value) -> Result<T> {
	convert_with(source, &ScanOptions::default())
}

/// Convert `source` into a fresh `T` using `options`.
pub fn convert_with<T: Scan>(source: &Value, options: &ScanOptions) -> Result<T> {
	let dest = T::type_tag();
	let value = convert_value(source, &dest, options)?;
	T::from_value(value).ok_or_else(|| unsupported(&source.type_tag(), &dest))
}

/// Produce a value of type `dest` from `source`.
///
/// Rules are tried in order and the first match wins:
/// direct assignment, signed to signed, unsigned to unsigned, float to float,
/// container copy, string to bytes, bytes to string, integer to float, and
/// finally the exact integer conversion.
pub fn convert_value(source: &Value, dest: &TypeTag, options: &ScanOptions) -> Result<Value> {
	let src_tag = source.type_tag();

	if is_assignable(&src_tag, dest) {
		trace!(rule = "direct", source = %src_tag, dest = %dest);
		return Ok(source.clone());
	}

	let src_kind = classify(&src_tag);
	let dest_kind = classify(dest);

	if src_kind == Kind::Int && dest_kind == Kind::Int {
		trace!(rule = "int", source = %src_tag, dest = %dest, wrapping = options.wrapping_integers);
		if options.wrapping_integers {
			return wrap_integer(source, dest);
		}
		return convert_integer(source, dest);
	}

	if src_kind == Kind::Uint && dest_kind == Kind::Uint {
		trace!(rule = "uint", source = %src_tag, dest = %dest, wrapping = options.wrapping_integers);
		if options.wrapping_integers {
			return wrap_integer(source, dest);
		}
		return convert_integer(source, dest);
	}

	if src_kind == Kind::Float && dest_kind == Kind::Float {
		trace!(rule = "float", source = %src_tag, dest = %dest);
		let v = source.as_f64().ok_or_else(|| unsupported(&src_tag, dest))?;
		return match dest {
			TypeTag::F32 => Ok(Value::F32(v as f32)),
			_ => Ok(Value::F64(v)),
		};
	}

	if is_compatible_container(source, dest) {
		trace!(rule = "container", source = %src_tag, dest = %dest);
		return Ok(Value::List(copy_container(source)));
	}

	if src_kind == Kind::String && dest_kind == Kind::Bytes {
		trace!(rule = "string_to_bytes", source = %src_tag, dest = %dest);
		let text = source.as_str().ok_or_else(|| unsupported(&src_tag, dest))?;
		return Ok(Value::Bytes(text.as_bytes().to_vec()));
	}

	if src_kind == Kind::Bytes && dest_kind == Kind::String {
		trace!(rule = "bytes_to_string", source = %src_tag, dest = %dest);
		let bytes = source.as_bytes().ok_or_else(|| unsupported(&src_tag, dest))?;
		let text = String::from_utf8(bytes.to_vec()).map_err(|_| RencodeError::InvalidUtf8 { dest_type: dest.name() })?;
		return Ok(Value::String(text));
	}

	if src_kind.is_integer() && dest_kind == Kind::Float {
		trace!(rule = "int_to_float", source = %src_tag, dest = %dest);
		return int_to_float(source, dest);
	}

	trace!(rule = "fallback", source = %src_tag, dest = %dest);
	convert_integer(source, dest)
}

fn copy_container(source: &Value) -> List {
	match source {
		Value::List(list) => list.clone(),
		Value::Bytes(bytes) => {
			let mut out = List::with_capacity(bytes.capacity());
			for byte in bytes {
				out.push(Value::U8(*byte));
			}
			out
		}
		_ => List::new(),
	}
}

fn wrap_integer(source: &Value, dest: &TypeTag) -> Result<Value> {
	if let Some(v) = source.as_i64() {
		return match dest {
			TypeTag::I8 => Ok(Value::I8(v as i8)),
			TypeTag::I16 => Ok(Value::I16(v as i16)),
			TypeTag::I32 => Ok(Value::I32(v as i32)),
			TypeTag::I64 => Ok(Value::I64(v)),
			_ => Err(unsupported(&source.type_tag(), dest)),
		};
	}

	if let Some(v) = source.as_u64() {
		return match dest {
			TypeTag::U8 => Ok(Value::U8(v as u8)),
			TypeTag::U16 => Ok(Value::U16(v as u16)),
			TypeTag::U32 => Ok(Value::U32(v as u32)),
			TypeTag::U64 => Ok(Value::U64(v)),
			_ => Err(unsupported(&source.type_tag(), dest)),
		};
	}

	Err(unsupported(&source.type_tag(), dest))
}

// Values past 2^24 (f32) or 2^53 (f64) round to the nearest representable float.
fn int_to_float(source: &Value, dest: &TypeTag) -> Result<Value> {
	let out = match (source.as_i64(), source.as_u64(), dest) {
		(Some(v), _, TypeTag::F32) => Value::F32(v as f32),
		(Some(v), _, TypeTag::F64) => Value::F64(v as f64),
		(_, Some(v), TypeTag::F32) => Value::F32(v as f32),
		(_, Some(v), TypeTag::F64) => Value::F64(v as f64),
		_ => return Err(unsupported(&source.type_tag(), dest)),
	};
	Ok(out)
}

fn unsupported(source: &TypeTag, dest: &TypeTag) -> RencodeError {
	RencodeError::UnsupportedConversion {
		source_type: source.name(),
		dest_type: dest.name(),
	}
}

#[cfg(test)]
mod tests;
