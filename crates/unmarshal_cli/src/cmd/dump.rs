use std::path::PathBuf;

use unmarshal::marshal::magics::version_label;
use unmarshal::marshal::{Result, loads};

use crate::cmd::json::value_json;
use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{DecodeArgs, Input, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode the whole body and print its value tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		decode,
		max_items,
		json,
	} = args;

	let input = Input::open(&path, decode.raw)?;
	let options = decode.options(&input);
	let value = loads(input.body(), &options)?;

	if json {
		emit_json(&DumpJson {
			path: path.display().to_string(),
			magic: input.magic(),
			layout: options.layout.as_str(),
			value: value_json(&value),
		})?;
		return Ok(());
	}

	let mut print_options = PrintOptions::default();
	if let Some(max_items) = max_items {
		print_options.max_tuple_items = max_items;
	}

	println!("path: {}", path.display());
	match input.magic() {
		Some(magic) => println!("magic: {magic} ({})", version_label(magic)),
		None => println!("magic: none (raw stream)"),
	}
	println!("layout: {}", options.layout.as_str());
	println!("value:");
	print!("{}", render_value(&value, print_options));

	Ok(())
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	magic: Option<u16>,
	layout: &'static str,
	value: serde_json::Value,
}
