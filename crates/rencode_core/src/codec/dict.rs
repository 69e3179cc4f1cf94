use std::slice;

use crate::codec::Value;

/// Decoded key/value mapping in wire order.
///
/// Keys are compared by value; duplicate keys are kept as decoded and
/// [`Dict::get`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
	entries: Vec<(Value, Value)>,
}

impl Dict {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Append an entry.
	pub fn insert(&mut self, key: Value, value: Value) {
		self.entries.push((key, value));
	}

	/// Look up the first value stored under `key`.
	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Look up a value by text key, matching both string and byte keys.
	pub fn get_str(&self, key: &str) -> Option<&Value> {
		self.entries
			.iter()
			.find(|(k, _)| match k {
				Value::String(text) => text == key,
				Value::Bytes(bytes) => bytes == key.as_bytes(),
				_ => false,
			})
			.map(|(_, v)| v)
	}

	/// Iterate entries in wire order.
	pub fn iter(&self) -> slice::Iter<'_, (Value, Value)> {
		self.entries.iter()
	}

	/// Iterate keys in wire order.
	pub fn keys(&self) -> impl Iterator<Item = &Value> {
		self.entries.iter().map(|(k, _)| k)
	}

	/// Iterate values in wire order.
	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.entries.iter().map(|(_, v)| v)
	}
}

impl FromIterator<(Value, Value)> for Dict {
	fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Dict {
	type Item = &'a (Value, Value);
	type IntoIter = slice::Iter<'a, (Value, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
