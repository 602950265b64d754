use std::fs;
use std::path::Path;

use unmarshal::marshal::{CodeLayout, DecodeOptions, PycFile, Result};

/// Parse a `--layout` value through the layout label table.
pub(crate) fn parse_layout(label: &str) -> std::result::Result<CodeLayout, String> {
	CodeLayout::from_label(label).ok_or_else(|| format!("unknown layout '{label}' (expected legacy, kw-only or pos-only)"))
}

/// Decode knobs shared by commands that read a marshalled body.
#[derive(clap::Args)]
pub struct DecodeArgs {
	/// Treat the input as a bare marshal stream with no compiled-file header.
	#[arg(long)]
	pub raw: bool,
	/// Target record layout for code objects.
	#[arg(long, value_parser = parse_layout, conflicts_with = "target_magic")]
	pub layout: Option<CodeLayout>,
	/// Resolve the target layout from a runtime magic number.
	#[arg(long = "target-magic")]
	pub target_magic: Option<u16>,
	/// Maximum nesting depth.
	#[arg(long = "max-depth", default_value_t = DecodeOptions::default().max_depth)]
	pub max_depth: u32,
	/// Fail when bytes remain after the top-level value.
	#[arg(long)]
	pub strict: bool,
}

impl DecodeArgs {
	/// Build decode options. An explicit layout wins over a target magic, which
	/// wins over the file's own magic; bare streams fall back to the legacy layout.
	pub fn options(&self, input: &Input) -> DecodeOptions {
		let layout = match (self.layout, self.target_magic) {
			(Some(layout), _) => layout,
			(None, Some(magic)) => CodeLayout::for_magic(magic),
			(None, None) => input.magic().map_or(CodeLayout::LEGACY, CodeLayout::for_magic),
		};
		log::debug!("target layout {}", layout.as_str());

		DecodeOptions {
			max_depth: self.max_depth,
			layout,
			strict_trailing: self.strict,
		}
	}
}

/// Command input: a compiled file or a bare marshal stream.
pub enum Input {
	/// File with a compiled-file header.
	Pyc(PycFile),
	/// Bare marshal stream.
	Raw(Vec<u8>),
}

impl Input {
	/// Open `path`, parsing a compiled-file header unless `raw` is set.
	pub fn open(path: &Path, raw: bool) -> Result<Self> {
		if raw {
			return Ok(Self::Raw(fs::read(path)?));
		}
		Ok(Self::Pyc(PycFile::open(path)?))
	}

	/// Marshalled body.
	pub fn body(&self) -> &[u8] {
		match self {
			Self::Pyc(file) => file.body(),
			Self::Raw(bytes) => bytes,
		}
	}

	/// Magic number from the header, if any.
	pub fn magic(&self) -> Option<u16> {
		match self {
			Self::Pyc(file) => Some(file.header.magic),
			Self::Raw(_) => None,
		}
	}
}

/// Print a payload as pretty JSON on stdout. Encoding failures surface as IO errors.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}

/// Render bytes as lowercase hex.
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push_str(&format!("{byte:02x}"));
	}
	out
}
