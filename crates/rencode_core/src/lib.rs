//! rencode decoding plus "scan" conversions into statically typed slots.
//!
//! ```
//! use rencode::codec::Decoder;
//!
//! // [42, "hi"] as a fixed list.
//! let bytes = [194, 42, 130, b'h', b'i'];
//! let mut decoder = Decoder::new(&bytes);
//! let list = decoder.decode_next().expect("decodes");
//! let list = list.as_list().expect("is a list");
//!
//! let mut answer = 0_u64;
//! let mut greeting = String::new();
//! list.scan(&mut rencode::targets![&mut answer, &mut greeting]).expect("scans");
//! assert_eq!((answer, greeting.as_str()), (42, "hi"));
//! ```

/// Value model, decoder, conversion rules, and scan entry points.
pub mod codec;
