use crate::marshal::bytes::Cursor;
use crate::marshal::code::read_code_object;
use crate::marshal::collection::read_tuple;
use crate::marshal::numeric::{read_legacy_float, read_long};
use crate::marshal::tag::{Tag, TagClass};
use crate::marshal::{CodeLayout, InternTable, MarshalError, Result, Value};

/// Runtime limits and behavior switches for stream decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive nesting depth.
	pub max_depth: u32,
	/// Record shape code objects are assembled into.
	pub layout: CodeLayout,
	/// Error when bytes remain after the top-level value.
	pub strict_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			layout: CodeLayout::LEGACY,
			strict_trailing: false,
		}
	}
}

impl DecodeOptions {
	/// Default limits with an explicit target layout.
	pub fn for_layout(layout: CodeLayout) -> Self {
		Self {
			layout,
			..Self::default()
		}
	}

	/// Default limits with the layout implied by a target magic number.
	pub fn for_magic(magic: u16) -> Self {
		Self::for_layout(CodeLayout::for_magic(magic))
	}
}

/// Decode one top-level value from `bytes` with a fresh intern table.
pub fn loads(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let (value, consumed) = load_prefix(bytes, opt)?;
	if opt.strict_trailing && consumed < bytes.len() {
		return Err(MarshalError::TrailingBytes {
			at: consumed,
			rem: bytes.len() - consumed,
		});
	}
	Ok(value)
}

/// Decode one top-level value and report how many bytes it consumed.
pub fn load_prefix(bytes: &[u8], opt: &DecodeOptions) -> Result<(Value, usize)> {
	log::debug!("decoding marshal stream: {} bytes, layout={}", bytes.len(), opt.layout.as_str());

	let mut cursor = Cursor::new(bytes);
	let mut interns = InternTable::new();
	let value = load_value(&mut cursor, &mut interns, opt)?;
	Ok((value, cursor.pos()))
}

/// Decode one value at the cursor using a caller-owned intern table.
pub fn load_value(cursor: &mut Cursor<'_>, interns: &mut InternTable, opt: &DecodeOptions) -> Result<Value> {
	load_at_depth(cursor, interns, opt, 0)
}

pub(crate) fn load_at_depth(cursor: &mut Cursor<'_>, interns: &mut InternTable, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(MarshalError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.pos();
	let byte = cursor.read_tag()?;
	let tag = match TagClass::of(byte) {
		TagClass::Supported(tag) => tag,
		TagClass::Unsupported(kind) => return Err(MarshalError::UnsupportedContainer { tag: byte, kind, at }),
		TagClass::Unknown => return Err(MarshalError::UnknownTag { tag: byte, at }),
	};

	let value = match tag {
		Tag::None => Value::None,
		Tag::True => Value::Bool(true),
		Tag::False => Value::Bool(false),
		Tag::Ellipsis => Value::Ellipsis,
		Tag::StopIteration => Value::StopIteration,
		Tag::Int32 => Value::Int(i64::from(cursor.read_i32()?)),
		Tag::Int64 => Value::Int(cursor.read_i64()?),
		Tag::BinaryFloat => Value::Float(cursor.read_f64()?),
		Tag::LegacyFloat => Value::Float(read_legacy_float(cursor)?),
		Tag::Long => Value::Long(read_long(cursor)?),
		Tag::Bytes => Value::Bytes(read_payload(cursor)?.to_vec()),
		Tag::Interned => {
			let text = lossy_ignore(read_payload(cursor)?);
			interns.intern(text.clone());
			Value::Interned(text)
		}
		Tag::Unicode => {
			let payload_at = cursor.pos() + 4;
			let payload = read_payload(cursor)?;
			let text = std::str::from_utf8(payload).map_err(|_| MarshalError::InvalidUtf8 { at: payload_at })?;
			Value::String(text.into())
		}
		Tag::StringRef => {
			let index = cursor.read_i32()?;
			Value::Interned(interns.resolve(index)?.into())
		}
		Tag::Tuple => Value::Tuple(read_tuple(cursor, interns, opt, depth + 1)?),
		Tag::Code => Value::Code(Box::new(read_code_object(cursor, interns, opt, depth + 1)?)),
	};

	Ok(value)
}

fn read_payload<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8]> {
	let len = cursor.read_len("negative string length")?;
	cursor.read_exact(len)
}

/// Decode UTF-8, dropping invalid sequences.
fn lossy_ignore(bytes: &[u8]) -> Box<str> {
	let mut out = String::with_capacity(bytes.len());
	for chunk in bytes.utf8_chunks() {
		out.push_str(chunk.valid());
	}
	out.into_boxed_str()
}
