use tracing::debug;

use crate::codec::{Decoder, List, RencodeError, Result, ScanOptions, Target, convert_assign_with};

impl Decoder<'_> {
	/// Decode one value per target and assign it, converting where needed.
	///
	/// Stops at the first failure. Decode errors are returned as-is; conversion
	/// errors are wrapped in [`RencodeError::ScanElement`] with the target
	/// position. Targets after the failing one are left untouched.
	pub fn scan(&mut self, targets: &mut [Target<'_>]) -> Result<()> {
		let options = self.options().scan;
		debug!(targets = targets.len(), at = self.position(), "stream scan");

		for (index, target) in targets.iter_mut().enumerate() {
			let value = self.decode_next()?;
			convert_assign_with(&value, target, &options).map_err(|err| element_error(index, err))?;
		}

		Ok(())
	}
}

impl List {
	/// Assign the leading values of the list into `targets` with default options.
	///
	/// Fails with [`RencodeError::LengthMismatch`] before touching any target
	/// when there are more targets than values. The list itself is not trimmed;
	/// call [`List::shift`] to consume scanned values.
	pub fn scan(&self, targets: &mut [Target<'_>]) -> Result<()> {
		self.scan_with(targets, &ScanOptions::default())
	}

	/// Same as [`List::scan`] with explicit conversion options.
	pub fn scan_with(&self, targets: &mut [Target<'_>], options: &ScanOptions) -> Result<()> {
		if targets.len() > self.len() {
			return Err(RencodeError::LengthMismatch {
				requested: targets.len(),
				available: self.len(),
			});
		}

		debug!(targets = targets.len(), len = self.len(), "list scan");
		for (index, (value, target)) in self.iter().zip(targets.iter_mut()).enumerate() {
			convert_assign_with(value, target, options).map_err(|err| element_error(index, err))?;
		}

		Ok(())
	}
}

fn element_error(index: usize, err: RencodeError) -> RencodeError {
	debug!(index, error = %err, "scan element failed");
	RencodeError::ScanElement {
		index,
		source: Box::new(err),
	}
}
