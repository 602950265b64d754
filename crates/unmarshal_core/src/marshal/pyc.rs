use std::fs;
use std::path::Path;

use crate::marshal::bytes::Cursor;
use crate::marshal::magics::{PY3_FIRST_MAGIC, PY3_LAST_MAGIC, magic_to_int};
use crate::marshal::{CodeObject, DecodeOptions, MarshalError, Result, Value, loads};

const SOURCE_SIZE_FIRST_MAGIC: u16 = 3190;
const FLAGS_WORD_FIRST_MAGIC: u16 = 3390;
const FLAG_HASH_BASED: u32 = 0b01;
const FLAG_CHECK_SOURCE: u32 = 0b10;

/// How a compiled file records the source it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PycValidation {
	/// Source modification time, plus source size on 3.3+.
	Timestamp {
		/// Source modification time (seconds since the epoch, truncated to 32 bits).
		mtime: u32,
		/// Source size in bytes, when recorded.
		source_size: Option<u32>,
	},
	/// Source hash (3.7+ hash-based files).
	Hash {
		/// Raw 8-byte source hash.
		hash: [u8; 8],
		/// Whether the loader is asked to re-check the source.
		check_source: bool,
	},
}

/// Parsed compiled-file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PycHeader {
	/// Version magic number.
	pub magic: u16,
	/// Header length in bytes; the marshalled body starts here.
	pub header_size: usize,
	/// Raw flags word, present on 3.7+.
	pub flags: Option<u32>,
	/// Source validation record.
	pub validation: PycValidation,
}

impl PycHeader {
	/// Header length for files without a source size (1.x, 2.x, 3.0-3.2).
	pub const LEGACY_SIZE: usize = 8;
	/// Header length for files with a source size (3.3-3.6).
	pub const SIZED_SIZE: usize = 12;
	/// Header length for files with a flags word (3.7+).
	pub const FLAGGED_SIZE: usize = 16;

	/// Header length implied by a magic number.
	pub fn size_for_magic(magic: u16) -> usize {
		if !(PY3_FIRST_MAGIC..=PY3_LAST_MAGIC).contains(&magic) {
			Self::LEGACY_SIZE
		} else if magic >= FLAGS_WORD_FIRST_MAGIC {
			Self::FLAGGED_SIZE
		} else if magic >= SOURCE_SIZE_FIRST_MAGIC {
			Self::SIZED_SIZE
		} else {
			Self::LEGACY_SIZE
		}
	}

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let prefix = bytes.get(0..4).ok_or(MarshalError::InvalidHeader)?;
		let magic = magic_to_int([prefix[0], prefix[1], prefix[2], prefix[3]])?;
		let header_size = Self::size_for_magic(magic);
		if bytes.len() < header_size {
			return Err(MarshalError::TruncatedStream {
				at: bytes.len(),
				need: header_size - bytes.len(),
				rem: 0,
			});
		}

		let mut cursor = Cursor::new(&bytes[4..header_size]);
		let flags = if header_size == Self::FLAGGED_SIZE { Some(cursor.read_u32()?) } else { None };

		let validation = match flags {
			Some(word) if word & FLAG_HASH_BASED != 0 => {
				let mut hash = [0_u8; 8];
				hash.copy_from_slice(cursor.read_exact(8)?);
				PycValidation::Hash {
					hash,
					check_source: word & FLAG_CHECK_SOURCE != 0,
				}
			}
			_ => {
				let mtime = cursor.read_u32()?;
				let source_size = if header_size >= Self::SIZED_SIZE { Some(cursor.read_u32()?) } else { None };
				PycValidation::Timestamp { mtime, source_size }
			}
		};

		Ok(Self {
			magic,
			header_size,
			flags,
			validation,
		})
	}
}

/// Compiled file held in memory with its parsed header.
pub struct PycFile {
	/// Parsed file header.
	pub header: PycHeader,
	bytes: Vec<u8>,
}

impl PycFile {
	/// Read and parse a compiled file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		log::debug!("opening compiled file {}", path.display());
		Self::from_bytes(fs::read(path)?)
	}

	/// Parse a compiled file already held in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = PycHeader::parse(&bytes)?;
		Ok(Self { header, bytes })
	}

	/// Return the raw file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Return the marshalled body following the header.
	pub fn body(&self) -> &[u8] {
		&self.bytes[self.header.header_size..]
	}

	/// Decode options targeting the layout implied by this file's own magic.
	pub fn native_options(&self) -> DecodeOptions {
		DecodeOptions::for_magic(self.header.magic)
	}

	/// Decode the body as a single value.
	pub fn decode_value(&self, opt: &DecodeOptions) -> Result<Value> {
		loads(self.body(), opt)
	}

	/// Decode the body and require a top-level code object.
	pub fn decode_code(&self, opt: &DecodeOptions) -> Result<CodeObject> {
		match self.decode_value(opt)? {
			Value::Code(code) => Ok(*code),
			other => Err(MarshalError::ExpectedCodeObject { got: other.kind() }),
		}
	}
}

#[cfg(test)]
mod tests;
