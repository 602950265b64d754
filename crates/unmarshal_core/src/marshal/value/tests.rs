use crate::marshal::{CodeField, CodeLayout, CodeObject, Value, WireCode};

fn wire() -> WireCode {
	WireCode {
		arg_count: 2,
		nlocals: 3,
		stack_size: 4,
		flags: 0x43,
		code: Value::Bytes(b"|\x00\x00S".to_vec()),
		consts: Value::Tuple(vec![Value::None]),
		names: Value::Tuple(Vec::new()),
		varnames: Value::Tuple(vec![Value::Interned("a".into()), Value::Interned("b".into())]),
		freevars: Value::Tuple(Vec::new()),
		cellvars: Value::Tuple(Vec::new()),
		filename: Value::Bytes(b"mod.py".to_vec()),
		name: Value::Interned("f".into()),
		first_line_no: 10,
		lnotab: Value::Bytes(Vec::new()),
	}
}

fn slot_names(code: &CodeObject) -> Vec<&'static str> {
	code.positional_fields().into_iter().map(|(name, _)| name).collect()
}

#[test]
fn legacy_assembly_has_fourteen_slots() {
	let code = CodeObject::assemble(CodeLayout::LEGACY, wire());
	assert_eq!(
		slot_names(&code),
		[
			"argcount",
			"nlocals",
			"stacksize",
			"flags",
			"code",
			"consts",
			"names",
			"varnames",
			"filename",
			"name",
			"firstlineno",
			"lnotab",
			"freevars",
			"cellvars"
		]
	);
	assert_eq!(code.kw_only_arg_count, None);
	assert_eq!(code.kw_only_arg_count(), 0);
}

#[test]
fn kw_only_assembly_inserts_synthesized_zero_after_argcount() {
	let code = CodeObject::assemble(CodeLayout::KW_ONLY, wire());
	let fields = code.positional_fields();
	assert_eq!(fields.len(), 15);
	assert_eq!(fields[0], ("argcount", CodeField::Int(2)));
	assert_eq!(fields[1], ("kwonlyargcount", CodeField::Int(0)));
	assert_eq!(fields[2], ("nlocals", CodeField::Int(3)));
	assert_eq!(code.pos_only_arg_count, None);
}

#[test]
fn pos_only_assembly_precedes_kw_only() {
	let code = CodeObject::assemble(CodeLayout::POS_ONLY, wire());
	let names = slot_names(&code);
	assert_eq!(names[..4], ["argcount", "posonlyargcount", "kwonlyargcount", "nlocals"]);
	assert_eq!(names.len(), 16);
}

#[test]
fn text_accessors_accept_bytes_and_strings() {
	let code = CodeObject::assemble(CodeLayout::LEGACY, wire());
	assert_eq!(code.filename().as_deref(), Some("mod.py"));
	assert_eq!(code.name().as_deref(), Some("f"));
	assert_eq!(code.code_len(), Some(4));
	assert_eq!(Value::Int(1).as_text(), None);
}

#[test]
fn walk_finds_code_inside_nested_tuples() {
	let inner = CodeObject::assemble(CodeLayout::LEGACY, wire());
	let mut outer_wire = wire();
	outer_wire.name = Value::Interned("<module>".into());
	outer_wire.consts = Value::Tuple(vec![Value::Int(1), Value::Tuple(vec![Value::Code(Box::new(inner))])]);
	let outer = CodeObject::assemble(CodeLayout::LEGACY, outer_wire);

	let names: Vec<_> = outer
		.walk_code_objects()
		.into_iter()
		.map(|(depth, code)| (depth, code.name().map(|name| name.into_owned())))
		.collect();
	assert_eq!(names, vec![(0, Some("<module>".to_owned())), (1, Some("f".to_owned()))]);
}
