use tracing::trace;

use crate::codec::bytes::Cursor;
use crate::codec::{Dict, List, RencodeError, Result, ScanOptions, Value};

const CHR_FLOAT64: u8 = 44;
const CHR_LIST: u8 = 59;
const CHR_DICT: u8 = 60;
const CHR_INT: u8 = 61;
const CHR_INT1: u8 = 62;
const CHR_INT2: u8 = 63;
const CHR_INT4: u8 = 64;
const CHR_INT8: u8 = 65;
const CHR_FLOAT32: u8 = 66;
const CHR_TRUE: u8 = 67;
const CHR_FALSE: u8 = 68;
const CHR_NONE: u8 = 69;
const CHR_TERM: u8 = 127;

const INT_POS_FIXED_START: u8 = 0;
const INT_POS_FIXED_COUNT: u8 = 44;
const INT_NEG_FIXED_START: u8 = 70;
const INT_NEG_FIXED_COUNT: u8 = 32;
const INT_NEG_FIXED_END: u8 = INT_NEG_FIXED_START + INT_NEG_FIXED_COUNT;
const DICT_FIXED_START: u8 = 102;
const DICT_FIXED_COUNT: u8 = 25;
const DICT_FIXED_END: u8 = DICT_FIXED_START + DICT_FIXED_COUNT;
const STR_FIXED_START: u8 = 128;
const STR_FIXED_COUNT: u8 = 64;
const LIST_FIXED_START: u8 = STR_FIXED_START + STR_FIXED_COUNT;

/// Runtime limits and behavior switches for rencode decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of lists and dicts.
	pub max_depth: u32,
	/// Maximum number of elements (or entries) in one list or dict.
	pub max_collection_len: usize,
	/// Decode valid UTF-8 string payloads as [`Value::String`] instead of bytes.
	pub utf8_strings: bool,
	/// Conversion options applied by [`Decoder::scan`].
	pub scan: ScanOptions,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 32,
			max_collection_len: 1 << 20,
			utf8_strings: false,
			scan: ScanOptions::default(),
		}
	}
}

impl DecodeOptions {
	/// Preset for payloads whose strings are known to be text.
	pub fn for_text() -> Self {
		Self {
			utf8_strings: true,
			..Self::default()
		}
	}
}

/// Streaming rencode decoder over an in-memory buffer.
pub struct Decoder<'a> {
	cursor: Cursor<'a>,
	options: DecodeOptions,
}

impl<'a> Decoder<'a> {
	/// Create a decoder with default options.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_options(bytes, DecodeOptions::default())
	}

	/// Create a decoder with explicit options.
	pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			options,
		}
	}

	/// Active decode options.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Byte offset of the next value.
	pub fn position(&self) -> usize {
		self.cursor.pos()
	}

	/// Bytes not yet consumed.
	pub fn remaining(&self) -> usize {
		self.cursor.remaining()
	}

	/// True once every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Decode the next top-level value.
	pub fn decode_next(&mut self) -> Result<Value> {
		let at = self.cursor.pos();
		let value = self.decode_value(0)?;
		trace!(at, kind = %value.type_tag(), "decoded value");
		Ok(value)
	}

	/// Decode every remaining top-level value into a list.
	pub fn decode_all(&mut self) -> Result<List> {
		let mut out = List::new();
		while !self.is_empty() {
			out.push(self.decode_next()?);
		}
		Ok(out)
	}

	fn decode_value(&mut self, depth: u32) -> Result<Value> {
		let at = self.cursor.pos();
		let tag = self.cursor.read_u8()?;

		match tag {
			INT_POS_FIXED_START..INT_POS_FIXED_COUNT => Ok(Value::I8((tag - INT_POS_FIXED_START) as i8)),
			CHR_FLOAT64 => Ok(Value::F64(self.cursor.read_f64_be()?)),
			b'0'..=b'9' => self.decode_string(tag, at),
			CHR_LIST => self.decode_terminated_list(depth),
			CHR_DICT => self.decode_terminated_dict(depth),
			CHR_INT => self.decode_big_int(),
			CHR_INT1 => Ok(Value::I8(i8::from_be_bytes(self.cursor.read_array()?))),
			CHR_INT2 => Ok(Value::I16(self.cursor.read_i16_be()?)),
			CHR_INT4 => Ok(Value::I32(self.cursor.read_i32_be()?)),
			CHR_INT8 => Ok(Value::I64(self.cursor.read_i64_be()?)),
			CHR_FLOAT32 => Ok(Value::F32(self.cursor.read_f32_be()?)),
			CHR_TRUE => Ok(Value::Bool(true)),
			CHR_FALSE => Ok(Value::Bool(false)),
			CHR_NONE => Ok(Value::Nil),
			CHR_TERM => Err(RencodeError::InvalidTag { tag, at }),
			INT_NEG_FIXED_START..INT_NEG_FIXED_END => Ok(Value::I8(-1 - (tag - INT_NEG_FIXED_START) as i8)),
			DICT_FIXED_START..DICT_FIXED_END => self.decode_fixed_dict(usize::from(tag - DICT_FIXED_START), depth),
			STR_FIXED_START..LIST_FIXED_START => {
				let bytes = self.cursor.read_exact(usize::from(tag - STR_FIXED_START))?;
				Ok(self.string_value(bytes))
			}
			LIST_FIXED_START..=u8::MAX => self.decode_fixed_list(usize::from(tag - LIST_FIXED_START), depth),
			_ => Err(RencodeError::InvalidTag { tag, at }),
		}
	}

	fn decode_string(&mut self, first_digit: u8, at: usize) -> Result<Value> {
		let rest = self.cursor.read_until(b':')?;
		let mut len = usize::from(first_digit - b'0');
		for digit in rest {
			if !digit.is_ascii_digit() {
				return Err(RencodeError::InvalidLength { at });
			}
			len = len
				.checked_mul(10)
				.and_then(|len| len.checked_add(usize::from(digit - b'0')))
				.ok_or(RencodeError::InvalidLength { at })?;
		}

		let bytes = self.cursor.read_exact(len)?;
		Ok(self.string_value(bytes))
	}

	fn decode_big_int(&mut self) -> Result<Value> {
		let at = self.cursor.pos();
		let raw = self.cursor.read_until(CHR_TERM)?;
		let text = String::from_utf8_lossy(raw);
		let value = text.parse::<i64>().map_err(|_| RencodeError::InvalidBigInt {
			text: text.to_string(),
			at,
		})?;
		Ok(Value::I64(value))
	}

	fn decode_terminated_list(&mut self, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		let mut out = List::new();
		while self.cursor.peek_u8()? != CHR_TERM {
			self.check_len(out.len() + 1)?;
			out.push(self.decode_value(depth + 1)?);
		}
		self.cursor.read_u8()?;
		Ok(Value::List(out))
	}

	fn decode_fixed_list(&mut self, count: usize, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		let mut out = List::with_capacity(count);
		for _ in 0..count {
			out.push(self.decode_value(depth + 1)?);
		}
		Ok(Value::List(out))
	}

	fn decode_terminated_dict(&mut self, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		let mut out = Dict::new();
		while self.cursor.peek_u8()? != CHR_TERM {
			self.check_len(out.len() + 1)?;
			let key = self.decode_value(depth + 1)?;
			let value = self.decode_value(depth + 1)?;
			out.insert(key, value);
		}
		self.cursor.read_u8()?;
		Ok(Value::Dict(out))
	}

	fn decode_fixed_dict(&mut self, count: usize, depth: u32) -> Result<Value> {
		self.enter(depth)?;
		let mut out = Dict::new();
		for _ in 0..count {
			let key = self.decode_value(depth + 1)?;
			let value = self.decode_value(depth + 1)?;
			out.insert(key, value);
		}
		Ok(Value::Dict(out))
	}

	fn enter(&self, depth: u32) -> Result<()> {
		if depth >= self.options.max_depth {
			return Err(RencodeError::DecodeDepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		Ok(())
	}

	fn check_len(&self, count: usize) -> Result<()> {
		if count > self.options.max_collection_len {
			return Err(RencodeError::CollectionTooLarge {
				count,
				max: self.options.max_collection_len,
			});
		}
		Ok(())
	}

	fn string_value(&self, bytes: &[u8]) -> Value {
		if self.options.utf8_strings {
			if let Ok(text) = std::str::from_utf8(bytes) {
				return Value::String(text.to_owned());
			}
		}
		Value::Bytes(bytes.to_vec())
	}
}
