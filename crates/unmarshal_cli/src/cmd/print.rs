use std::fmt::Write;

use unmarshal::marshal::{CodeField, Value};

use crate::cmd::util::hex;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of bytes shown for byte strings.
	pub max_bytes_preview: usize,
	/// Maximum number of elements printed for tuples.
	pub max_tuple_items: usize,
	/// Maximum recursive print depth for nested tuples and code objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_bytes_preview: 32,
			max_tuple_items: 64,
			max_print_depth: 16,
		}
	}
}

/// Render a value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Tuple(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}(... {} items)", items.len());
				return;
			}
			if items.is_empty() {
				let _ = writeln!(out, "{pad}()");
				return;
			}
			let _ = writeln!(out, "{pad}(");
			for item in items.iter().take(options.max_tuple_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_tuple_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_tuple_items);
			}
			let _ = writeln!(out, "{pad})");
		}
		Value::Code(code) => {
			let name = code.name().unwrap_or_default();
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}code {name} {{ ... }}");
				return;
			}
			let _ = writeln!(out, "{pad}code {name} [{}] {{", code.layout.as_str());
			for (field, slot) in code.positional_fields() {
				match slot {
					CodeField::Int(number) => {
						let _ = writeln!(out, "{pad}  {field} = {number}");
					}
					CodeField::Value(item @ (Value::Tuple(_) | Value::Code(_))) => {
						let _ = writeln!(out, "{pad}  {field} =");
						write_value(out, item, indent + 4, depth + 1, options);
					}
					CodeField::Value(item) => {
						let _ = writeln!(out, "{pad}  {field} = {}", scalar(item, options));
					}
				}
			}
			let _ = writeln!(out, "{pad}}}");
		}
		other => {
			let _ = writeln!(out, "{pad}{}", scalar(other, options));
		}
	}
}

fn scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::None => "None".to_owned(),
		Value::Bool(true) => "True".to_owned(),
		Value::Bool(false) => "False".to_owned(),
		Value::Int(number) => number.to_string(),
		Value::Long(number) => format!("{number}L"),
		Value::Float(number) => format!("{number:?}"),
		Value::Bytes(bytes) => {
			let shown = &bytes[..bytes.len().min(options.max_bytes_preview)];
			let more = if bytes.len() > shown.len() { "..." } else { "" };
			format!("bytes[{}] {}{more}", bytes.len(), hex(shown))
		}
		Value::Interned(text) => format!("'{}'", truncate(text, options.max_string_len)),
		Value::String(text) => format!("u'{}'", truncate(text, options.max_string_len)),
		Value::Ellipsis => "Ellipsis".to_owned(),
		Value::StopIteration => "StopIteration".to_owned(),
		Value::Tuple(items) => format!("(... {} items)", items.len()),
		Value::Code(code) => format!("code {}", code.name().unwrap_or_default()),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
