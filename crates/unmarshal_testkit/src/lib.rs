//! Shared test helpers for workspace crates.
//!
//! [`StreamBuilder`] assembles marshal wire bytes for tests. It is deliberately
//! minimal and unvalidated so tests can also build malformed streams.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Fixed modification time written into generated compiled-file headers.
pub const FIXTURE_MTIME: u32 = 0x5f5e_1000;

/// Builder for raw marshal streams.
#[derive(Debug, Default, Clone)]
pub struct StreamBuilder {
	bytes: Vec<u8>,
}

impl StreamBuilder {
	/// Start an empty stream.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append a bare tag byte.
	pub fn tag(self, tag: u8) -> Self {
		self.raw(&[tag])
	}

	/// Append a little-endian `i16`.
	pub fn i16(self, value: i16) -> Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append a little-endian `i32`.
	pub fn i32(self, value: i32) -> Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append an `i` value.
	pub fn int(self, value: i32) -> Self {
		self.tag(b'i').i32(value)
	}

	/// Append an `I` value.
	pub fn int64(self, value: i64) -> Self {
		self.tag(b'I').raw(&value.to_le_bytes())
	}

	/// Append a `g` value.
	pub fn float(self, value: f64) -> Self {
		self.tag(b'g').raw(&value.to_le_bytes())
	}

	/// Append an `l` value from a signed digit count and base-2^15 digits.
	pub fn long(self, count: i32, digits: &[i16]) -> Self {
		let mut out = self.tag(b'l').i32(count);
		for digit in digits {
			out = out.i16(*digit);
		}
		out
	}

	/// Append an `s` value.
	pub fn bytes(self, payload: &[u8]) -> Self {
		self.tag(b's').i32(payload.len() as i32).raw(payload)
	}

	/// Append a `t` value.
	pub fn interned(self, text: &str) -> Self {
		self.tag(b't').i32(text.len() as i32).raw(text.as_bytes())
	}

	/// Append a `u` value.
	pub fn unicode(self, text: &str) -> Self {
		self.tag(b'u').i32(text.len() as i32).raw(text.as_bytes())
	}

	/// Append an `R` back-reference.
	pub fn string_ref(self, index: i32) -> Self {
		self.tag(b'R').i32(index)
	}

	/// Append a `(` header; the caller appends `count` elements.
	pub fn tuple(self, count: i32) -> Self {
		self.tag(b'(').i32(count)
	}

	/// Append a `c` header with its four leading integer fields.
	pub fn code_header(self, arg_count: i32, nlocals: i32, stack_size: i32, flags: i32) -> Self {
		self.tag(b'c').i32(arg_count).i32(nlocals).i32(stack_size).i32(flags)
	}

	/// Append a complete code object with empty instruction, tuple, and line-table fields.
	pub fn minimal_code(self, filename: &str, name: &str, first_line: i32) -> Self {
		self.code_header(0, 0, 0, 0)
			.bytes(b"")
			.tuple(0)
			.tuple(0)
			.tuple(0)
			.tuple(0)
			.tuple(0)
			.bytes(filename.as_bytes())
			.interned(name)
			.i32(first_line)
			.bytes(b"")
	}

	/// Return the assembled bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}

/// Prefix `body` with a compiled-file header appropriate for `magic`.
pub fn pyc_bytes(magic: u16, body: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(body.len() + 16);
	out.extend_from_slice(&magic.to_le_bytes());
	out.extend_from_slice(b"\r\n");

	let py3 = (3000..=3999).contains(&magic);
	if py3 && magic >= 3390 {
		out.extend_from_slice(&0_u32.to_le_bytes());
	}
	out.extend_from_slice(&FIXTURE_MTIME.to_le_bytes());
	if py3 && magic >= 3190 {
		out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	}

	out.extend_from_slice(body);
	out
}

/// Create a scratch directory removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
	tempfile::tempdir().expect("scratch dir is created")
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture is written");
	path
}

/// Assert a command succeeded and parse its stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
