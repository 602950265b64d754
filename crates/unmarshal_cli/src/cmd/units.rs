use std::path::PathBuf;

use unmarshal::marshal::{MarshalError, Result, Value, loads};

use crate::cmd::util::{DecodeArgs, Input, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// List the top-level code object and every code object nested in its constants.
pub fn run(args: Args) -> Result<()> {
	let Args { path, decode, json } = args;

	let input = Input::open(&path, decode.raw)?;
	let options = decode.options(&input);
	let root = match loads(input.body(), &options)? {
		Value::Code(code) => code,
		other => return Err(MarshalError::ExpectedCodeObject { got: other.kind() }),
	};

	let units: Vec<UnitJson> = root
		.walk_code_objects()
		.into_iter()
		.map(|(depth, code)| UnitJson {
			depth,
			name: code.name().map(|name| name.into_owned()),
			filename: code.filename().map(|name| name.into_owned()),
			first_line: code.wire.first_line_no,
			arg_count: code.wire.arg_count,
			kw_only_arg_count: code.kw_only_arg_count,
			pos_only_arg_count: code.pos_only_arg_count,
			flags: code.wire.flags,
			code_len: code.code_len(),
		})
		.collect();

	if json {
		emit_json(&UnitsJson {
			path: path.display().to_string(),
			layout: options.layout.as_str(),
			units,
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("layout: {}", options.layout.as_str());
	println!("units: {}", units.len());
	for unit in &units {
		println!(
			"{}{} ({}:{}) args={} flags=0x{:04x} code_len={}",
			"  ".repeat(unit.depth),
			unit.name.as_deref().unwrap_or("?"),
			unit.filename.as_deref().unwrap_or("?"),
			unit.first_line,
			unit.arg_count,
			unit.flags,
			unit.code_len.map_or_else(|| "?".to_owned(), |len| len.to_string()),
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct UnitJson {
	depth: usize,
	name: Option<String>,
	filename: Option<String>,
	first_line: i32,
	arg_count: i32,
	#[serde(skip_serializing_if = "Option::is_none")]
	kw_only_arg_count: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pos_only_arg_count: Option<i32>,
	flags: i32,
	code_len: Option<usize>,
}

#[derive(serde::Serialize)]
struct UnitsJson {
	path: String,
	layout: &'static str,
	units: Vec<UnitJson>,
}
