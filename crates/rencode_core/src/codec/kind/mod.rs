use crate::codec::{TypeTag, Value};

/// Coarse category of a type, used to pick a conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// Signed integer of any width.
	Int,
	/// Unsigned integer of any width.
	Uint,
	/// Floating point of any width.
	Float,
	/// UTF-8 string.
	String,
	/// Byte sequence.
	Bytes,
	/// Array or slice of values.
	Slice,
	/// Anything else; only direct assignment applies.
	Other,
}

impl Kind {
	/// True for either integer family.
	pub fn is_integer(self) -> bool {
		matches!(self, Self::Int | Self::Uint)
	}
}

/// Classify a type into its conversion kind.
pub fn classify(tag: &TypeTag) -> Kind {
	match tag {
		TypeTag::I8 | TypeTag::I16 | TypeTag::I32 | TypeTag::I64 => Kind::Int,
		TypeTag::U8 | TypeTag::U16 | TypeTag::U32 | TypeTag::U64 => Kind::Uint,
		TypeTag::F32 | TypeTag::F64 => Kind::Float,
		TypeTag::String => Kind::String,
		TypeTag::Bytes => Kind::Bytes,
		TypeTag::List | TypeTag::Slice(_) => Kind::Slice,
		TypeTag::Nil | TypeTag::Bool | TypeTag::Dict | TypeTag::Any => Kind::Other,
	}
}

/// True when a value of type `src` can be stored in `dest` as-is.
pub fn is_assignable(src: &TypeTag, dest: &TypeTag) -> bool {
	matches!(dest, TypeTag::Any) || src == dest
}

/// Element type of a slice destination; bytes are a slice of `uint8`.
pub fn slice_element(dest: &TypeTag) -> Option<TypeTag> {
	match dest {
		TypeTag::Slice(elem) => Some((**elem).clone()),
		TypeTag::Bytes => Some(TypeTag::U8),
		_ => None,
	}
}

/// Decide whether `src` can be copied elementwise into slice type `dest`.
///
/// A decoded list has no declared element type, so every element's own type
/// must be assignable to the destination element type. Elements are never
/// coerced by this check.
pub fn is_compatible_container(src: &Value, dest: &TypeTag) -> bool {
	let Some(dest_elem) = slice_element(dest) else {
		return false;
	};

	match src {
		Value::List(list) => list.iter().all(|item| is_assignable(&item.type_tag(), &dest_elem)),
		Value::Bytes(_) => is_assignable(&TypeTag::U8, &dest_elem),
		_ => false,
	}
}
