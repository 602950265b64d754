use std::borrow::Cow;

use num_bigint::BigInt;

use crate::marshal::CodeLayout;

/// One decoded marshal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `N`
	None,
	/// `T` / `F`
	Bool(bool),
	/// `i` and `I`, widened to 64 bits.
	Int(i64),
	/// `l`
	Long(BigInt),
	/// `g` and `f`
	Float(f64),
	/// `s`
	Bytes(Vec<u8>),
	/// `t`, or an `R` back-reference to an earlier `t`.
	Interned(Box<str>),
	/// `u`
	String(Box<str>),
	/// `.`
	Ellipsis,
	/// `S`
	StopIteration,
	/// `(`
	Tuple(Vec<Value>),
	/// `c`
	Code(Box<CodeObject>),
}

impl Value {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Long(_) => "long",
			Self::Float(_) => "float",
			Self::Bytes(_) => "bytes",
			Self::Interned(_) => "interned",
			Self::String(_) => "string",
			Self::Ellipsis => "ellipsis",
			Self::StopIteration => "stop_iteration",
			Self::Tuple(_) => "tuple",
			Self::Code(_) => "code",
		}
	}

	/// Text of any string-like value; byte strings are decoded lossily.
	pub fn as_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Interned(text) | Self::String(text) => Some(Cow::Borrowed(text)),
			Self::Bytes(bytes) => Some(String::from_utf8_lossy(bytes)),
			_ => None,
		}
	}

	/// Borrow raw bytes from a byte string.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Borrow a nested code object.
	pub fn as_code(&self) -> Option<&CodeObject> {
		match self {
			Self::Code(code) => Some(code),
			_ => None,
		}
	}
}

/// Code-object fields in wire order, before layout-specific assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct WireCode {
	/// Positional argument count.
	pub arg_count: i32,
	/// Local variable count.
	pub nlocals: i32,
	/// Evaluation stack size hint.
	pub stack_size: i32,
	/// Flags bitmask.
	pub flags: i32,
	/// Instruction bytes.
	pub code: Value,
	/// Constants tuple.
	pub consts: Value,
	/// Referenced names.
	pub names: Value,
	/// Local variable names.
	pub varnames: Value,
	/// Free variable names.
	pub freevars: Value,
	/// Cell variable names.
	pub cellvars: Value,
	/// Source filename.
	pub filename: Value,
	/// Unit name.
	pub name: Value,
	/// First source line.
	pub first_line_no: i32,
	/// Line-number table bytes.
	pub lnotab: Value,
}

/// Compiled unit assembled into a target record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeObject {
	/// Record shape this object was assembled into.
	pub layout: CodeLayout,
	/// Keyword-only argument count; `None` when the layout has no such field.
	pub kw_only_arg_count: Option<i32>,
	/// Positional-only argument count; `None` when the layout has no such field.
	pub pos_only_arg_count: Option<i32>,
	/// Fields as they appeared on the wire.
	pub wire: WireCode,
}

/// One assembled record slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodeField<'a> {
	/// Integer slot.
	Int(i32),
	/// Recursively decoded slot.
	Value(&'a Value),
}

impl CodeObject {
	/// Pack wire fields into `layout`. Slots absent from the wire are synthesized as zero.
	pub fn assemble(layout: CodeLayout, wire: WireCode) -> Self {
		Self {
			layout,
			kw_only_arg_count: layout.has_kw_only_arg_count().then_some(0),
			pos_only_arg_count: layout.has_pos_only_arg_count().then_some(0),
			wire,
		}
	}

	/// Keyword-only argument count, zero when the layout lacks the field.
	pub fn kw_only_arg_count(&self) -> i32 {
		self.kw_only_arg_count.unwrap_or(0)
	}

	/// Unit name, when it decoded to a string-like value.
	pub fn name(&self) -> Option<Cow<'_, str>> {
		self.wire.name.as_text()
	}

	/// Source filename, when it decoded to a string-like value.
	pub fn filename(&self) -> Option<Cow<'_, str>> {
		self.wire.filename.as_text()
	}

	/// Instruction byte length, when the instruction field is a byte string.
	pub fn code_len(&self) -> Option<usize> {
		self.wire.code.as_bytes().map(<[u8]>::len)
	}

	/// Record slots in the target constructor order.
	pub fn positional_fields(&self) -> Vec<(&'static str, CodeField<'_>)> {
		let wire = &self.wire;
		let mut out = Vec::with_capacity(16);
		out.push(("argcount", CodeField::Int(wire.arg_count)));
		if let Some(count) = self.pos_only_arg_count {
			out.push(("posonlyargcount", CodeField::Int(count)));
		}
		if let Some(count) = self.kw_only_arg_count {
			out.push(("kwonlyargcount", CodeField::Int(count)));
		}
		out.extend([
			("nlocals", CodeField::Int(wire.nlocals)),
			("stacksize", CodeField::Int(wire.stack_size)),
			("flags", CodeField::Int(wire.flags)),
			("code", CodeField::Value(&wire.code)),
			("consts", CodeField::Value(&wire.consts)),
			("names", CodeField::Value(&wire.names)),
			("varnames", CodeField::Value(&wire.varnames)),
			("filename", CodeField::Value(&wire.filename)),
			("name", CodeField::Value(&wire.name)),
			("firstlineno", CodeField::Int(wire.first_line_no)),
			("lnotab", CodeField::Value(&wire.lnotab)),
			("freevars", CodeField::Value(&wire.freevars)),
			("cellvars", CodeField::Value(&wire.cellvars)),
		]);
		out
	}

	/// Visit this object and every code object nested in its constants, depth-first.
	///
	/// Each item carries its nesting depth, `0` for `self`.
	pub fn walk_code_objects(&self) -> Vec<(usize, &CodeObject)> {
		let mut out = Vec::new();
		let mut stack = vec![(0_usize, self)];
		while let Some((depth, code)) = stack.pop() {
			out.push((depth, code));

			let mut nested = Vec::new();
			collect_nested_code(&code.wire.consts, &mut nested);
			for child in nested.into_iter().rev() {
				stack.push((depth + 1, child));
			}
		}
		out
	}
}

fn collect_nested_code<'a>(value: &'a Value, out: &mut Vec<&'a CodeObject>) {
	match value {
		Value::Code(code) => out.push(code),
		Value::Tuple(items) => {
			for item in items {
				collect_nested_code(item, out);
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests;
