use std::slice;

use crate::codec::Value;

/// Ordered, front-trimmable sequence of decoded values.
///
/// Trimming with [`List::shift`] only moves the front bound; the backing
/// storage is kept, so [`List::capacity`] shrinks together with the length.
#[derive(Debug, Default)]
pub struct List {
	values: Vec<Value>,
	head: usize,
}

impl List {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty list with room for `capacity` values.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
			head: 0,
		}
	}

	/// Number of values still in the list.
	pub fn len(&self) -> usize {
		self.values.len() - self.head
	}

	/// True when no values remain.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Room available from the current front without reallocating.
	pub fn capacity(&self) -> usize {
		self.values.capacity() - self.head
	}

	/// Borrow the remaining values.
	pub fn as_slice(&self) -> &[Value] {
		&self.values[self.head..]
	}

	/// Borrow value at `index` relative to the current front.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.as_slice().get(index)
	}

	/// Iterate remaining values in order.
	pub fn iter(&self) -> slice::Iter<'_, Value> {
		self.as_slice().iter()
	}

	/// Append a value at the back.
	pub fn push(&mut self, value: Value) {
		self.values.push(value);
	}

	/// Consume the list and return the remaining values.
	pub fn into_values(mut self) -> Vec<Value> {
		self.values.drain(..self.head);
		self.values
	}

	/// Remove up to `n` values from the front and return how many were removed.
	pub fn shift(&mut self, n: usize) -> usize {
		let n = n.min(self.len());
		self.head += n;
		n
	}
}

impl Clone for List {
	fn clone(&self) -> Self {
		let mut values = Vec::with_capacity(self.capacity());
		values.extend_from_slice(self.as_slice());
		Self { values, head: 0 }
	}
}

impl PartialEq for List {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl From<Vec<Value>> for List {
	fn from(values: Vec<Value>) -> Self {
		Self { values, head: 0 }
	}
}

impl FromIterator<Value> for List {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::from(iter.into_iter().collect::<Vec<_>>())
	}
}

impl<'a> IntoIterator for &'a List {
	type Item = &'a Value;
	type IntoIter = slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
