use std::path::PathBuf;

use unmarshal::marshal::magics::version_label;
use unmarshal::marshal::{CodeLayout, PycFile, PycValidation, Result};

use crate::cmd::util::{emit_json, hex};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print compiled-file header fields.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = PycFile::open(&path)?;
	let header = file.header;
	let layout = CodeLayout::for_magic(header.magic);

	let (mtime, source_size, source_hash) = match header.validation {
		PycValidation::Timestamp { mtime, source_size } => (Some(mtime), source_size, None),
		PycValidation::Hash { hash, .. } => (None, None, Some(hex(&hash))),
	};

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			magic: header.magic,
			version: version_label(header.magic),
			header_size: header.header_size,
			flags: header.flags,
			mtime,
			source_size,
			source_hash,
			layout: layout.as_str(),
			body_len: file.body().len(),
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("magic: {}", header.magic);
	println!("version: {}", version_label(header.magic));
	println!("header_size: {}", header.header_size);
	if let Some(flags) = header.flags {
		println!("flags: 0x{flags:08x}");
	}
	if let Some(mtime) = mtime {
		println!("mtime: {mtime}");
	}
	if let Some(size) = source_size {
		println!("source_size: {size}");
	}
	if let Some(hash) = &source_hash {
		println!("source_hash: {hash}");
	}
	println!("layout: {}", layout.as_str());
	println!("body_len: {}", file.body().len());

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	magic: u16,
	version: String,
	header_size: usize,
	flags: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	mtime: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	source_size: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	source_hash: Option<String>,
	layout: &'static str,
	body_len: usize,
}
