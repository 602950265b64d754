/// Supported wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// `N`
	None,
	/// `T`
	True,
	/// `F`
	False,
	/// `.`
	Ellipsis,
	/// `S`
	StopIteration,
	/// `i`
	Int32,
	/// `I`
	Int64,
	/// `g`
	BinaryFloat,
	/// `f`
	LegacyFloat,
	/// `l`
	Long,
	/// `s`
	Bytes,
	/// `t`
	Interned,
	/// `u`
	Unicode,
	/// `R`
	StringRef,
	/// `(`
	Tuple,
	/// `c`
	Code,
}

/// Classification of one tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
	/// Decodable tag.
	Supported(Tag),
	/// Known tag whose decoding is deliberately absent; carries the kind label.
	Unsupported(&'static str),
	/// Byte outside the format.
	Unknown,
}

impl TagClass {
	/// Classify a raw tag byte.
	pub fn of(byte: u8) -> Self {
		let tag = match byte {
			b'N' => Tag::None,
			b'T' => Tag::True,
			b'F' => Tag::False,
			b'.' => Tag::Ellipsis,
			b'S' => Tag::StopIteration,
			b'i' => Tag::Int32,
			b'I' => Tag::Int64,
			b'g' => Tag::BinaryFloat,
			b'f' => Tag::LegacyFloat,
			b'l' => Tag::Long,
			b's' => Tag::Bytes,
			b't' => Tag::Interned,
			b'u' => Tag::Unicode,
			b'R' => Tag::StringRef,
			b'(' => Tag::Tuple,
			b'c' => Tag::Code,
			b'0' => return Self::Unsupported("null"),
			b'x' => return Self::Unsupported("complex"),
			b'y' => return Self::Unsupported("binary_complex"),
			b'[' => return Self::Unsupported("list"),
			b'{' => return Self::Unsupported("dict"),
			b'<' => return Self::Unsupported("set"),
			b'>' => return Self::Unsupported("frozenset"),
			_ => return Self::Unknown,
		};
		Self::Supported(tag)
	}
}

#[cfg(test)]
mod tests {
	use crate::marshal::tag::{Tag, TagClass};

	#[test]
	fn classifies_every_wire_byte() {
		let mut supported = 0;
		let mut unsupported = 0;
		for byte in 0..=u8::MAX {
			match TagClass::of(byte) {
				TagClass::Supported(_) => supported += 1,
				TagClass::Unsupported(_) => unsupported += 1,
				TagClass::Unknown => {}
			}
		}
		assert_eq!(supported, 16);
		assert_eq!(unsupported, 7);
	}

	#[test]
	fn container_forms_are_recognized_but_unsupported() {
		assert_eq!(TagClass::of(b'['), TagClass::Unsupported("list"));
		assert_eq!(TagClass::of(b'{'), TagClass::Unsupported("dict"));
		assert_eq!(TagClass::of(b'('), TagClass::Supported(Tag::Tuple));
		assert_eq!(TagClass::of(b'?'), TagClass::Unknown);
	}
}
