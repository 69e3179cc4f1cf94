use rencode::codec::Value;
use serde::Serialize;

use crate::error::Result;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render a decoded value as JSON.
///
/// Bytes become a string when they are valid UTF-8 and an array of numbers
/// otherwise. Dicts with only text keys become objects; any other dict becomes
/// an array of `[key, value]` pairs.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	use serde_json::Value as Json;

	match value {
		Value::Nil => Json::Null,
		Value::Bool(v) => Json::from(*v),
		Value::I8(v) => Json::from(*v),
		Value::I16(v) => Json::from(*v),
		Value::I32(v) => Json::from(*v),
		Value::I64(v) => Json::from(*v),
		Value::U8(v) => Json::from(*v),
		Value::U16(v) => Json::from(*v),
		Value::U32(v) => Json::from(*v),
		Value::U64(v) => Json::from(*v),
		Value::F32(v) => float_json(f64::from(*v)),
		Value::F64(v) => float_json(*v),
		Value::String(v) => Json::from(v.as_str()),
		Value::Bytes(v) => bytes_json(v),
		Value::List(items) => Json::Array(items.iter().map(value_json).collect()),
		Value::Dict(dict) => {
			let keys: Option<Vec<String>> = dict.keys().map(text_key).collect();
			match keys {
				Some(keys) => Json::Object(keys.into_iter().zip(dict.values().map(value_json)).collect()),
				None => Json::Array(dict.iter().map(|(k, v)| Json::Array(vec![value_json(k), value_json(v)])).collect()),
			}
		}
	}
}

fn float_json(v: f64) -> serde_json::Value {
	serde_json::Number::from_f64(v).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

fn bytes_json(bytes: &[u8]) -> serde_json::Value {
	match std::str::from_utf8(bytes) {
		Ok(text) => serde_json::Value::from(text),
		Err(_) => serde_json::Value::Array(bytes.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
	}
}

fn text_key(key: &Value) -> Option<String> {
	match key {
		Value::String(text) => Some(text.clone()),
		Value::Bytes(bytes) => std::str::from_utf8(bytes).ok().map(str::to_owned),
		_ => None,
	}
}

/// Render a scalar on one line; containers are summarized.
pub(crate) fn render_scalar(value: &Value, max_string_len: usize) -> String {
	match value {
		Value::Nil => "nil".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I8(v) => v.to_string(),
		Value::I16(v) => v.to_string(),
		Value::I32(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U8(v) => v.to_string(),
		Value::U16(v) => v.to_string(),
		Value::U32(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::String(v) => format!("{:?}", truncate(v, max_string_len)),
		Value::Bytes(v) => match std::str::from_utf8(v) {
			Ok(text) => format!("b{:?}", truncate(text, max_string_len)),
			Err(_) => format!("bytes[{}]", v.len()),
		},
		Value::List(items) => format!("list[{}]", items.len()),
		Value::Dict(dict) => format!("dict[{}]", dict.len()),
	}
}

/// Cut `input` to `max_len` characters, marking the cut with `...`.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
