mod bytes;
mod code;
mod collection;
mod decode;
mod error;
mod intern;
mod layout;
/// Version magic numbers and their release lines.
pub mod magics;
mod numeric;
mod pyc;
mod tag;
mod value;

/// Forward-only byte cursor.
pub use bytes::Cursor;
/// Decoding entry points and options.
pub use decode::{DecodeOptions, load_prefix, load_value, loads};
/// Error and result aliases.
pub use error::{MarshalError, Result};
/// Per-decode interned string pool.
pub use intern::InternTable;
/// Target record shapes for code objects.
pub use layout::CodeLayout;
/// Fixed-width and arbitrary-precision numeric payload decoders.
pub use numeric::{LONG_DIGIT_BITS, read_legacy_float, read_long};
/// Compiled-file container types.
pub use pyc::{PycFile, PycHeader, PycValidation};
/// Wire tag classification.
pub use tag::{Tag, TagClass};
/// Decoded value types.
pub use value::{CodeField, CodeObject, Value, WireCode};
