use crate::marshal::{MarshalError, Result};

/// Append-only pool of strings produced by `t` tags, addressed by `R` back-references.
///
/// One table belongs to exactly one top-level decode. A fresh table per call is
/// the reset; nothing is shared between unrelated decodes.
#[derive(Debug, Default, Clone)]
pub struct InternTable {
	strings: Vec<Box<str>>,
}

impl InternTable {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a freshly decoded interned string.
	pub fn intern(&mut self, value: Box<str>) {
		self.strings.push(value);
	}

	/// Return the string at `index`, failing for negative or out-of-range indices.
	pub fn resolve(&self, index: i32) -> Result<&str> {
		usize::try_from(index)
			.ok()
			.and_then(|idx| self.strings.get(idx))
			.map(|item| &**item)
			.ok_or(MarshalError::DanglingReference {
				index,
				len: self.strings.len(),
			})
	}

	/// Number of interned strings.
	pub fn len(&self) -> usize {
		self.strings.len()
	}

	/// Whether no string has been interned yet.
	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use crate::marshal::{InternTable, MarshalError};

	#[test]
	fn resolves_in_insertion_order() {
		let mut table = InternTable::new();
		table.intern("foo".into());
		table.intern("bar".into());

		assert_eq!(table.resolve(0).expect("first"), "foo");
		assert_eq!(table.resolve(1).expect("second"), "bar");
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn rejects_out_of_range_and_negative_indices() {
		let mut table = InternTable::new();
		assert!(table.is_empty());
		table.intern("foo".into());

		let err = table.resolve(1).expect_err("index past end");
		assert!(matches!(err, MarshalError::DanglingReference { index: 1, len: 1 }));

		let err = table.resolve(-1).expect_err("negative index");
		assert!(matches!(err, MarshalError::DanglingReference { index: -1, len: 1 }));
	}
}
