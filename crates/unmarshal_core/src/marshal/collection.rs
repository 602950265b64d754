use crate::marshal::bytes::Cursor;
use crate::marshal::decode::load_at_depth;
use crate::marshal::{DecodeOptions, InternTable, Result, Value};

/// Upper bound on elements reserved up front; longer tuples grow as they decode.
const PREALLOC_ITEMS: usize = 1024;

/// Decode a `(` payload: signed element count, then that many values.
///
/// `depth` is the depth of the elements, not of the tuple itself.
pub(crate) fn read_tuple(cursor: &mut Cursor<'_>, interns: &mut InternTable, opt: &DecodeOptions, depth: u32) -> Result<Vec<Value>> {
	let count = cursor.read_len("negative tuple length")?;

	// Every element needs at least its tag byte.
	let mut items = Vec::with_capacity(count.min(cursor.remaining()).min(PREALLOC_ITEMS));
	for _ in 0..count {
		items.push(load_at_depth(cursor, interns, opt, depth)?);
	}
	Ok(items)
}
