use std::path::PathBuf;

use rencode::codec::{DecodeOptions, Decoder, RencodeError, Scan, ScanOptions, Slot, Target, TypeTag, Value};

use crate::cmd::input;
use crate::cmd::util::{emit_json, render_scalar, value_json};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Comma-separated destination types, e.g. `int32,string,[]int64`.
	#[arg(long, value_delimiter = ',', required = true)]
	pub types: Vec<String>,
	/// Truncate same-signedness integer narrowing instead of failing.
	#[arg(long)]
	pub wrapping: bool,
	/// Decode valid UTF-8 strings as text instead of bytes.
	#[arg(long)]
	pub utf8: bool,
	#[arg(long)]
	pub json: bool,
}

/// Slot whose type is chosen at runtime.
pub(crate) struct DynSlot {
	tag: TypeTag,
	value: Option<Value>,
}

impl DynSlot {
	pub(crate) fn new(tag: TypeTag) -> Self {
		Self { tag, value: None }
	}
}

impl Slot for DynSlot {
	fn type_tag(&self) -> TypeTag {
		self.tag.clone()
	}

	fn set(&mut self, value: Value) -> rencode::codec::Result<()> {
		let source_type = value.type_tag();
		let accepted = match (&self.tag, value) {
			(TypeTag::Any, value) => Some(value),
			(TypeTag::Bytes, value @ Value::List(_)) => Vec::<u8>::from_value(value).map(Value::Bytes),
			(TypeTag::Slice(_), value @ Value::List(_)) => Some(value),
			(tag, value) if value.type_tag() == *tag => Some(value),
			_ => None,
		};

		let value = accepted.ok_or_else(|| RencodeError::UnsupportedConversion {
			source_type: source_type.name(),
			dest_type: self.tag.name(),
		})?;
		self.value = Some(value);
		Ok(())
	}
}

/// Parse `--types` entries into destination tags.
pub(crate) fn parse_types(names: &[String]) -> Result<Vec<TypeTag>> {
	names
		.iter()
		.map(|name| {
			let name = name.trim();
			TypeTag::parse(name).ok_or_else(|| CliError::UnknownType { name: name.to_owned() })
		})
		.collect()
}

/// Scan leading values of a file into runtime-typed destinations.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		types,
		wrapping,
		utf8,
		json,
	} = args;

	let tags = parse_types(&types)?;
	let (_, bytes) = input::load(&path)?;

	let mut options = if utf8 { DecodeOptions::for_text() } else { DecodeOptions::default() };
	options.scan = ScanOptions {
		wrapping_integers: wrapping,
	};

	let mut slots: Vec<DynSlot> = tags.into_iter().map(DynSlot::new).collect();
	{
		let mut targets: Vec<Target<'_>> = slots.iter_mut().map(|slot| Target::Mut(slot)).collect();
		Decoder::with_options(&bytes, options).scan(&mut targets)?;
	}

	if json {
		return emit_json(&ScanJson {
			path: path.display().to_string(),
			values: slots
				.iter()
				.map(|slot| ScanValueJson {
					type_name: slot.tag.name(),
					value: slot.value.as_ref().map_or(serde_json::Value::Null, value_json),
				})
				.collect(),
		});
	}

	println!("path: {}", path.display());
	println!("idx\ttype\tvalue");
	for (idx, slot) in slots.iter().enumerate() {
		let rendered = slot.value.as_ref().map_or_else(|| "-".to_owned(), |value| render_scalar(value, 200));
		println!("{idx}\t{}\t{rendered}", slot.tag);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ScanValueJson {
	#[serde(rename = "type")]
	type_name: String,
	value: serde_json::Value,
}

#[derive(serde::Serialize)]
struct ScanJson {
	path: String,
	values: Vec<ScanValueJson>,
}

#[cfg(test)]
mod tests;
