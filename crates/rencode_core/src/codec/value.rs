use std::fmt;

use crate::codec::{Dict, List};

/// Runtime value emitted by rencode decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit nil marker.
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// 8-bit signed integer.
	I8(i8),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// 8-bit unsigned integer.
	U8(u8),
	/// 16-bit unsigned integer.
	U16(u16),
	/// 32-bit unsigned integer.
	U32(u32),
	/// 64-bit unsigned integer.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// UTF-8 text.
	String(String),
	/// Opaque byte payload.
	Bytes(Vec<u8>),
	/// Ordered sequence of values.
	List(List),
	/// Ordered key/value mapping.
	Dict(Dict),
}

impl Value {
	/// Static type of this value.
	pub fn type_tag(&self) -> TypeTag {
		match self {
			Self::Nil => TypeTag::Nil,
			Self::Bool(_) => TypeTag::Bool,
			Self::I8(_) => TypeTag::I8,
			Self::I16(_) => TypeTag::I16,
			Self::I32(_) => TypeTag::I32,
			Self::I64(_) => TypeTag::I64,
			Self::U8(_) => TypeTag::U8,
			Self::U16(_) => TypeTag::U16,
			Self::U32(_) => TypeTag::U32,
			Self::U64(_) => TypeTag::U64,
			Self::F32(_) => TypeTag::F32,
			Self::F64(_) => TypeTag::F64,
			Self::String(_) => TypeTag::String,
			Self::Bytes(_) => TypeTag::Bytes,
			Self::List(_) => TypeTag::List,
			Self::Dict(_) => TypeTag::Dict,
		}
	}

	/// Widen any signed integer variant to `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Self::I8(v) => Some(i64::from(v)),
			Self::I16(v) => Some(i64::from(v)),
			Self::I32(v) => Some(i64::from(v)),
			Self::I64(v) => Some(v),
			_ => None,
		}
	}

	/// Widen any unsigned integer variant to `u64`.
	pub fn as_u64(&self) -> Option<u64> {
		match *self {
			Self::U8(v) => Some(u64::from(v)),
			Self::U16(v) => Some(u64::from(v)),
			Self::U32(v) => Some(u64::from(v)),
			Self::U64(v) => Some(v),
			_ => None,
		}
	}

	/// Widen any float variant to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::F32(v) => Some(f64::from(v)),
			Self::F64(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow text for string values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow raw bytes for byte values.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow the list for list values.
	pub fn as_list(&self) -> Option<&List> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow the mapping for dict values.
	pub fn as_dict(&self) -> Option<&Dict> {
		match self {
			Self::Dict(v) => Some(v),
			_ => None,
		}
	}
}

/// Static type of a decoded value or of a scan destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
	/// Nil marker.
	Nil,
	/// Boolean.
	Bool,
	/// `i8`.
	I8,
	/// `i16`.
	I16,
	/// `i32`.
	I32,
	/// `i64`.
	I64,
	/// `u8`.
	U8,
	/// `u16`.
	U16,
	/// `u32`.
	U32,
	/// `u64`.
	U64,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// Owned UTF-8 string.
	String,
	/// Owned byte vector.
	Bytes,
	/// Decoded heterogeneous list.
	List,
	/// Decoded mapping.
	Dict,
	/// Typed vector with the given element type.
	Slice(Box<TypeTag>),
	/// Dynamic [`Value`] destination accepting any decoded value.
	Any,
}

impl TypeTag {
	/// Stable type name used in error messages.
	pub fn name(&self) -> String {
		match self {
			Self::Slice(elem) => format!("[]{}", elem.name()),
			other => other.scalar_name().to_owned(),
		}
	}

	fn scalar_name(&self) -> &'static str {
		match self {
			Self::Nil => "nil",
			Self::Bool => "bool",
			Self::I8 => "int8",
			Self::I16 => "int16",
			Self::I32 => "int32",
			Self::I64 => "int64",
			Self::U8 => "uint8",
			Self::U16 => "uint16",
			Self::U32 => "uint32",
			Self::U64 => "uint64",
			Self::F32 => "float32",
			Self::F64 => "float64",
			Self::String => "string",
			Self::Bytes => "bytes",
			Self::List => "list",
			Self::Dict => "dict",
			Self::Any => "value",
			Self::Slice(_) => "slice",
		}
	}

	/// Slice type over `elem`; a slice of `u8` is [`TypeTag::Bytes`].
	pub fn slice_of(elem: TypeTag) -> Self {
		match elem {
			Self::U8 => Self::Bytes,
			elem => Self::Slice(Box::new(elem)),
		}
	}

	/// Parse a type name as rendered by [`TypeTag::name`].
	pub fn parse(name: &str) -> Option<Self> {
		if let Some(elem) = name.strip_prefix("[]") {
			return Self::parse(elem).map(Self::slice_of);
		}

		Some(match name {
			"nil" => Self::Nil,
			"bool" => Self::Bool,
			"int8" => Self::I8,
			"int16" => Self::I16,
			"int32" => Self::I32,
			"int64" => Self::I64,
			"uint8" => Self::U8,
			"uint16" => Self::U16,
			"uint32" => Self::U32,
			"uint64" => Self::U64,
			"float32" => Self::F32,
			"float64" => Self::F64,
			"string" => Self::String,
			"bytes" => Self::Bytes,
			"list" => Self::List,
			"dict" => Self::Dict,
			"value" => Self::Any,
			_ => return None,
		})
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name())
	}
}
