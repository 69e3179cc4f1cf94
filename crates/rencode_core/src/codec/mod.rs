mod bytes;
mod convert;
mod decode;
mod dict;
mod error;
mod integer;
mod kind;
mod list;
mod scan;
mod target;
mod value;

/// Conversion entry points and options.
pub use convert::{ScanOptions, convert, convert_assign, convert_assign_with, convert_value, convert_with};
/// Streaming decoder and its options.
pub use decode::{DecodeOptions, Decoder};
/// Decoded mapping type.
pub use dict::Dict;
/// Error and result aliases.
pub use error::{RencodeError, Result};
/// Exact integer conversion used as the last conversion rule.
pub use integer::convert_integer;
/// Kind classification and container compatibility.
pub use kind::{Kind, classify, is_assignable, is_compatible_container, slice_element};
/// Front-trimmable decoded list.
pub use list::List;
/// Scan destination traits and handles.
pub use target::{Scan, Slot, Target};
/// Decoded runtime value types.
pub use value::{TypeTag, Value};
