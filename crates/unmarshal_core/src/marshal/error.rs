use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Errors produced while reading and decoding marshalled streams.
///
/// Every variant aborts the current top-level decode. The wire format has no
/// resynchronization point, so no partial value is ever returned with an error.
#[derive(Debug, Error)]
pub enum MarshalError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("truncated stream at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedStream {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte is not part of the supported set.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Raw tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Tag is recognized but its container form is deliberately not decoded.
	#[error("unsupported container {kind} (tag 0x{tag:02x}) at offset {at}")]
	UnsupportedContainer {
		/// Raw tag byte.
		tag: u8,
		/// Container kind label.
		kind: &'static str,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Interned-string back-reference points past the end of the intern table.
	#[error("dangling intern reference {index} (table holds {len} strings)")]
	DanglingReference {
		/// Requested table index.
		index: i32,
		/// Table length when the reference was read.
		len: usize,
	},
	/// Structurally invalid count or length.
	#[error("malformed stream at offset {at}: {reason} ({value})")]
	MalformedStream {
		/// Offset of the offending field.
		at: usize,
		/// Short description of the violated constraint.
		reason: &'static str,
		/// Offending raw value.
		value: i64,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// `u` payload was not valid UTF-8.
	#[error("invalid utf-8 in string payload at offset {at}")]
	InvalidUtf8 {
		/// Offset of the payload start.
		at: usize,
	},
	/// Strict mode found bytes after the top-level value.
	#[error("{rem} trailing bytes after top-level value at offset {at}")]
	TrailingBytes {
		/// Offset where the top-level value ended.
		at: usize,
		/// Unconsumed bytes.
		rem: usize,
	},
	/// Compiled-file header is too short or malformed.
	#[error("invalid compiled-file header")]
	InvalidHeader,
	/// Magic number is not followed by the `\r\n` terminator.
	#[error("magic number not followed by \\r\\n (got {got:?})")]
	BadMagicTerminator {
		/// Bytes found where the terminator was expected.
		got: [u8; 2],
	},
	/// Top-level value of a compiled file was not a code object.
	#[error("expected code object, got {got}")]
	ExpectedCodeObject {
		/// Kind label of the decoded value.
		got: &'static str,
	},
}
