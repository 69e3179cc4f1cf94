use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RencodeError>;

/// Errors produced while decoding rencode data and scanning it into typed slots.
#[derive(Debug, Error)]
pub enum RencodeError {
	/// Destination is a read-only view and cannot be assigned.
	#[error("cannot set value of type {type_name}")]
	UnsettableTarget {
		/// Name of the destination type.
		type_name: String,
	},
	/// List scan asked for more destinations than the list holds.
	#[error("not enough elements in list: requested {requested}, available {available}")]
	LengthMismatch {
		/// Number of destinations passed to the scan.
		requested: usize,
		/// Number of elements left in the list.
		available: usize,
	},
	/// Exact integer conversion would not fit the destination range.
	#[error("conversion from {source_type:?} to {dest_type:?} would overflow integer size")]
	ConversionOverflow {
		/// Type name of the decoded value.
		source_type: String,
		/// Type name of the destination.
		dest_type: String,
	},
	/// No conversion rule covers the source/destination pair.
	#[error("cannot convert {source_type} to {dest_type}")]
	UnsupportedConversion {
		/// Type name of the decoded value.
		source_type: String,
		/// Type name of the destination.
		dest_type: String,
	},
	/// Byte payload is not valid UTF-8 and cannot become a string.
	#[error("bytes are not valid utf-8 for destination {dest_type}")]
	InvalidUtf8 {
		/// Type name of the destination.
		dest_type: String,
	},
	/// Conversion failure for one element of a batch scan.
	#[error("scan element {index}: {source}")]
	ScanElement {
		/// Zero-based position of the failing destination.
		index: usize,
		/// Underlying conversion error.
		#[source]
		source: Box<RencodeError>,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Leading byte does not start any rencode value.
	#[error("invalid rencode tag 0x{tag:02x} at offset {at}")]
	InvalidTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// String length prefix is malformed.
	#[error("invalid string length prefix at offset {at}")]
	InvalidLength {
		/// Byte offset of the length prefix.
		at: usize,
	},
	/// Big integer body is not a decimal that fits in 64 bits.
	#[error("invalid big integer {text:?} at offset {at}")]
	InvalidBigInt {
		/// Raw integer text.
		text: String,
		/// Byte offset of the integer body.
		at: usize,
	},
	/// Nested lists/dicts exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// A single list or dict grew past configured limit.
	#[error("collection too large: count={count}, max={max}")]
	CollectionTooLarge {
		/// Element count reached.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
}

impl RencodeError {
	/// Return the batch position for positional scan errors.
	pub fn element_index(&self) -> Option<usize> {
		match self {
			Self::ScanElement { index, .. } => Some(*index),
			_ => None,
		}
	}

	/// Strip positional wrapping and return the underlying error.
	pub fn root_cause(&self) -> &RencodeError {
		match self {
			Self::ScanElement { source, .. } => source.root_cause(),
			other => other,
		}
	}

	/// True for errors raised by the decoder rather than by conversion.
	pub fn is_decode_error(&self) -> bool {
		matches!(
			self,
			Self::UnexpectedEof { .. }
				| Self::InvalidTag { .. }
				| Self::InvalidLength { .. }
				| Self::InvalidBigInt { .. }
				| Self::DecodeDepthExceeded { .. }
				| Self::CollectionTooLarge { .. }
		)
	}
}
