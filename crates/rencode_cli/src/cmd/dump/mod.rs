use std::fmt::Write as _;
use std::path::PathBuf;

use rencode::codec::{DecodeOptions, Decoder, Value};

use crate::cmd::input;
use crate::cmd::util::{emit_json, render_scalar, value_json};
use crate::error::Result;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists and dicts.
	pub max_items: usize,
	/// Maximum recursive print depth for nested lists/dicts.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 16,
			max_print_depth: 6,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Decode valid UTF-8 strings as text instead of bytes.
	#[arg(long)]
	pub utf8: bool,
	/// Maximum list/dict nesting depth accepted by the decoder.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Stop after this many top-level values.
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print top-level values from a file.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		utf8,
		max_depth,
		limit,
		json,
	} = args;

	let (compression, bytes) = input::load(&path)?;
	let mut options = if utf8 { DecodeOptions::for_text() } else { DecodeOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let mut decoder = Decoder::with_options(&bytes, options);
	let limit = limit.unwrap_or(usize::MAX);
	let mut values = Vec::new();
	while !decoder.is_empty() && values.len() < limit {
		values.push(decoder.decode_next()?);
	}

	if json {
		return emit_json(&DumpJson {
			path: path.display().to_string(),
			compression: compression.as_str(),
			values: values.iter().map(value_json).collect(),
			remaining_bytes: decoder.remaining(),
		});
	}

	println!("path: {}", path.display());
	println!("compression: {}", compression.as_str());
	println!("values: {}", values.len());
	let print_options = PrintOptions::default();
	for (idx, value) in values.iter().enumerate() {
		let mut out = String::new();
		write_value(&mut out, value, 0, 0, print_options);
		print!("[{idx}] {out}");
	}
	if !decoder.is_empty() {
		println!("remaining_bytes: {}", decoder.remaining());
	}

	Ok(())
}

/// Render `value` as indented text, one scalar per line.
pub(crate) fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::List(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "[");
			for item in items.iter().take(options.max_items) {
				let _ = write!(out, "{pad}  ");
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Dict(dict) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{{... {} entries}}", dict.len());
				return;
			}
			let _ = writeln!(out, "{{");
			for (key, item) in dict.iter().take(options.max_items) {
				let _ = write!(out, "{pad}  {} = ", render_scalar(key, options.max_string_len));
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if dict.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more entries", dict.len() - options.max_items);
			}
			let _ = writeln!(out, "{pad}}}");
		}
		scalar => {
			let _ = writeln!(out, "{}", render_scalar(scalar, options.max_string_len));
		}
	}
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	compression: &'static str,
	values: Vec<serde_json::Value>,
	remaining_bytes: usize,
}
