use unmarshal::marshal::{CodeLayout, DecodeOptions, Value, loads};
use unmarshal_testkit::StreamBuilder;

use crate::cmd::print::{PrintOptions, render_value};

#[test]
fn renders_scalars_python_style() {
	let bytes = StreamBuilder::new().tuple(5).tag(b'N').tag(b'T').long(1, &[7]).interned("x").unicode("y").build();
	let value = loads(&bytes, &DecodeOptions::default()).expect("decodes");
	assert_eq!(render_value(&value, PrintOptions::default()), "(\n  None\n  True\n  7L\n  'x'\n  u'y'\n)\n");
}

#[test]
fn truncates_long_tuples_and_strings() {
	let options = PrintOptions {
		max_tuple_items: 2,
		max_string_len: 3,
		..PrintOptions::default()
	};
	let value = Value::Tuple(vec![Value::Interned("abcdef".into()), Value::Int(1), Value::Int(2)]);
	assert_eq!(render_value(&value, options), "(\n  'abc...'\n  1\n  ... 1 more\n)\n");
}

#[test]
fn code_objects_list_slots_in_layout_order() {
	let bytes = StreamBuilder::new().minimal_code("<test>", "<module>", 1).build();
	let value = loads(&bytes, &DecodeOptions::for_layout(CodeLayout::KW_ONLY)).expect("decodes");
	let text = render_value(&value, PrintOptions::default());

	assert!(text.starts_with("code <module> [kw-only] {\n  argcount = 0\n  kwonlyargcount = 0\n  nlocals = 0\n"));
	assert!(text.contains("  consts =\n    ()\n"));
	assert!(text.contains("  filename = bytes[6] 3c746573743e\n"));
	assert!(text.ends_with("}\n"));
}

#[test]
fn depth_limit_collapses_nested_tuples() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let value = Value::Tuple(vec![Value::Tuple(vec![Value::Int(1), Value::Int(2)])]);
	assert_eq!(render_value(&value, options), "(\n  (... 2 items)\n)\n");
}
