use serde_json::{Map, Value as Json, json};
use unmarshal::marshal::{CodeField, CodeObject, Value};

use crate::cmd::util::hex;

/// Convert a decoded value into a JSON tree.
///
/// Strings and integers map directly. Variants without a JSON counterpart become
/// single-key objects (`{"bytes": "<hex>"}`, `{"long": "<decimal>"}`, `{"const": "Ellipsis"}`).
pub fn value_json(value: &Value) -> Json {
	match value {
		Value::None => Json::Null,
		Value::Bool(flag) => Json::Bool(*flag),
		Value::Int(number) => json!(number),
		Value::Long(number) => json!({ "long": number.to_string() }),
		Value::Float(number) if number.is_finite() => json!(number),
		Value::Float(number) => json!({ "float": number.to_string() }),
		Value::Bytes(bytes) => json!({ "bytes": hex(bytes) }),
		Value::Interned(text) | Value::String(text) => json!(text),
		Value::Ellipsis => json!({ "const": "Ellipsis" }),
		Value::StopIteration => json!({ "const": "StopIteration" }),
		Value::Tuple(items) => Json::Array(items.iter().map(value_json).collect()),
		Value::Code(code) => code_json(code),
	}
}

/// Convert a code object into a JSON object keyed by assembled slot name.
pub fn code_json(code: &CodeObject) -> Json {
	let mut out = Map::new();
	out.insert("type".to_owned(), json!("code"));
	out.insert("layout".to_owned(), json!(code.layout.as_str()));
	for (field, slot) in code.positional_fields() {
		let item = match slot {
			CodeField::Int(number) => json!(number),
			CodeField::Value(value) => value_json(value),
		};
		out.insert(field.to_owned(), item);
	}
	Json::Object(out)
}
