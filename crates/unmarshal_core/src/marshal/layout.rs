use crate::marshal::magics::{PY3_FIRST_MAGIC, PY3_LAST_MAGIC};

/// First magic number whose code records carry a positional-only argument count.
pub const POS_ONLY_FIRST_MAGIC: u16 = 3410;

/// Capability set describing the code-object record shape of a target runtime.
///
/// The wire field sequence never changes; only the assembled record does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeLayout {
	kw_only_arg_count: bool,
	pos_only_arg_count: bool,
}

impl CodeLayout {
	/// Record shape without keyword-only or positional-only counts.
	pub const LEGACY: Self = Self {
		kw_only_arg_count: false,
		pos_only_arg_count: false,
	};
	/// Record shape with a keyword-only argument count after the argument count.
	pub const KW_ONLY: Self = Self {
		kw_only_arg_count: true,
		pos_only_arg_count: false,
	};
	/// Record shape with positional-only and keyword-only argument counts.
	pub const POS_ONLY: Self = Self {
		kw_only_arg_count: true,
		pos_only_arg_count: true,
	};

	/// Resolve the record shape implied by a target runtime's magic number.
	pub fn for_magic(magic: u16) -> Self {
		if !(PY3_FIRST_MAGIC..=PY3_LAST_MAGIC).contains(&magic) {
			return Self::LEGACY;
		}
		if magic >= POS_ONLY_FIRST_MAGIC { Self::POS_ONLY } else { Self::KW_ONLY }
	}

	/// Whether assembled records include a keyword-only argument count.
	pub fn has_kw_only_arg_count(self) -> bool {
		self.kw_only_arg_count
	}

	/// Whether assembled records include a positional-only argument count.
	pub fn has_pos_only_arg_count(self) -> bool {
		self.pos_only_arg_count
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		if self.pos_only_arg_count {
			"pos-only"
		} else if self.kw_only_arg_count {
			"kw-only"
		} else {
			"legacy"
		}
	}

	/// Parse a label produced by [`CodeLayout::as_str`].
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"legacy" => Some(Self::LEGACY),
			"kw-only" => Some(Self::KW_ONLY),
			"pos-only" => Some(Self::POS_ONLY),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::marshal::CodeLayout;

	#[test]
	fn legacy_magics_resolve_to_legacy_layout() {
		assert_eq!(CodeLayout::for_magic(62211), CodeLayout::LEGACY);
		assert_eq!(CodeLayout::for_magic(20121), CodeLayout::LEGACY);
	}

	#[test]
	fn py3_magics_gain_kw_only_then_pos_only() {
		assert_eq!(CodeLayout::for_magic(3021), CodeLayout::KW_ONLY);
		assert_eq!(CodeLayout::for_magic(3394), CodeLayout::KW_ONLY);
		assert_eq!(CodeLayout::for_magic(3413), CodeLayout::POS_ONLY);
		assert!(CodeLayout::for_magic(3531).has_kw_only_arg_count());
	}

	#[test]
	fn labels_round_trip() {
		for layout in [CodeLayout::LEGACY, CodeLayout::KW_ONLY, CodeLayout::POS_ONLY] {
			assert_eq!(CodeLayout::from_label(layout.as_str()), Some(layout));
		}
		assert_eq!(CodeLayout::from_label("py4"), None);
	}
}
