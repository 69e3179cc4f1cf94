use crate::codec::{Dict, List, RencodeError, Result, TypeTag, Value};

/// Rust type that can be the destination of a scan.
///
/// `from_value` is an exact extraction: it succeeds only when `value` already
/// has the type reported by `type_tag` (or is accepted element by element for
/// vectors). All coercion happens before it is called.
pub trait Scan: Sized {
	/// Static type of the destination.
	fn type_tag() -> TypeTag;

	/// Extract `Self` from a value of exactly this type.
	fn from_value(value: Value) -> Option<Self>;
}

/// Object-safe view of a scan destination.
pub trait Slot {
	/// Static type of the slot.
	fn type_tag(&self) -> TypeTag;

	/// Overwrite the slot with `value`; leaves it untouched on error.
	fn set(&mut self, value: Value) -> Result<()>;
}

impl<T: Scan> Slot for T {
	fn type_tag(&self) -> TypeTag {
		T::type_tag()
	}

	fn set(&mut self, value: Value) -> Result<()> {
		let source_type = value.type_tag();
		*self = T::from_value(value).ok_or_else(|| RencodeError::UnsupportedConversion {
			source_type: source_type.name(),
			dest_type: T::type_tag().name(),
		})?;
		Ok(())
	}
}

/// Destination handed to the converter.
///
/// Only [`Target::Mut`] can be assigned; a [`Target::Shared`] view is rejected
/// before any conversion rule runs.
pub enum Target<'a> {
	/// Settable slot.
	Mut(&'a mut dyn Slot),
	/// Read-only view of a slot.
	Shared(&'a dyn Slot),
}

impl<'a, T: Scan + 'a> From<&'a mut T> for Target<'a> {
	fn from(slot: &'a mut T) -> Self {
		Self::Mut(slot)
	}
}

impl<'a, T: Scan + 'a> From<&'a T> for Target<'a> {
	fn from(slot: &'a T) -> Self {
		Self::Shared(slot)
	}
}

/// Build an array of [`Target`]s for batch scans.
///
/// ```
/// use rencode::codec::{List, Value};
///
/// let list = List::from(vec![Value::I64(42), Value::String("hi".to_owned())]);
/// let mut count = 0_i32;
/// let mut label = String::new();
/// list.scan(&mut rencode::targets![&mut count, &mut label]).expect("scan succeeds");
/// assert_eq!(count, 42);
/// assert_eq!(label, "hi");
/// ```
#[macro_export]
macro_rules! targets {
	($($target:expr),* $(,)?) => {
		[$($crate::codec::Target::from($target)),*]
	};
}

macro_rules! scan_scalar {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Scan for $ty {
				fn type_tag() -> TypeTag {
					TypeTag::$variant
				}

				fn from_value(value: Value) -> Option<Self> {
					match value {
						Value::$variant(v) => Some(v),
						_ => None,
					}
				}
			}
		)*
	};
}

scan_scalar! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	f32 => F32,
	f64 => F64,
	String => String,
	List => List,
	Dict => Dict,
}

impl Scan for Value {
	fn type_tag() -> TypeTag {
		TypeTag::Any
	}

	fn from_value(value: Value) -> Option<Self> {
		Some(value)
	}
}

impl<T: Scan> Scan for Vec<T> {
	fn type_tag() -> TypeTag {
		TypeTag::slice_of(T::type_tag())
	}

	fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::List(list) => {
				let mut out = Vec::with_capacity(list.capacity());
				for item in list.into_values() {
					out.push(T::from_value(item)?);
				}
				Some(out)
			}
			Value::Bytes(bytes) => {
				let mut out = Vec::with_capacity(bytes.capacity());
				for byte in bytes {
					out.push(T::from_value(Value::U8(byte))?);
				}
				Some(out)
			}
			_ => None,
		}
	}
}
