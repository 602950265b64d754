use crate::marshal::bytes::Cursor;
use crate::marshal::decode::load_at_depth;
use crate::marshal::{CodeObject, DecodeOptions, InternTable, Result, WireCode};

/// Decode a `c` payload in fixed wire order and assemble it into `opt.layout`.
pub(crate) fn read_code_object(cursor: &mut Cursor<'_>, interns: &mut InternTable, opt: &DecodeOptions, depth: u32) -> Result<CodeObject> {
	let at = cursor.pos();
	let arg_count = cursor.read_i32()?;
	let nlocals = cursor.read_i32()?;
	let stack_size = cursor.read_i32()?;
	let flags = cursor.read_i32()?;
	let code = load_at_depth(cursor, interns, opt, depth)?;
	let consts = load_at_depth(cursor, interns, opt, depth)?;
	let names = load_at_depth(cursor, interns, opt, depth)?;
	let varnames = load_at_depth(cursor, interns, opt, depth)?;
	let freevars = load_at_depth(cursor, interns, opt, depth)?;
	let cellvars = load_at_depth(cursor, interns, opt, depth)?;
	let filename = load_at_depth(cursor, interns, opt, depth)?;
	let name = load_at_depth(cursor, interns, opt, depth)?;
	let first_line_no = cursor.read_i32()?;
	let lnotab = load_at_depth(cursor, interns, opt, depth)?;

	log::trace!("code object {:?} at offset {at}, layout={}", name.as_text().unwrap_or_default(), opt.layout.as_str());

	let wire = WireCode {
		arg_count,
		nlocals,
		stack_size,
		flags,
		code,
		consts,
		names,
		varnames,
		freevars,
		cellvars,
		filename,
		name,
		first_line_no,
		lnotab,
	};
	Ok(CodeObject::assemble(opt.layout, wire))
}
