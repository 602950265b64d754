use crate::marshal::{MarshalError, Result};

/// Lowest magic number used by 3.x runtimes.
pub const PY3_FIRST_MAGIC: u16 = 3000;
/// Highest magic number treated as a 3.x runtime.
pub const PY3_LAST_MAGIC: u16 = 3999;

/// Inclusive magic ranges assigned to each release line, sorted by `(major, minor)`.
const MAGIC_RANGES: &[(u16, u16, (u8, u8))] = &[
	(20121, 20121, (1, 5)),
	(50428, 50428, (1, 6)),
	(50823, 50823, (2, 0)),
	(60202, 60202, (2, 1)),
	(60717, 60717, (2, 2)),
	(62011, 62031, (2, 3)),
	(62041, 62061, (2, 4)),
	(62071, 62131, (2, 5)),
	(62151, 62161, (2, 6)),
	(62171, 62211, (2, 7)),
	(3000, 3131, (3, 0)),
	(3141, 3151, (3, 1)),
	(3160, 3180, (3, 2)),
	(3190, 3230, (3, 3)),
	(3250, 3310, (3, 4)),
	(3320, 3351, (3, 5)),
	(3360, 3379, (3, 6)),
	(3390, 3394, (3, 7)),
	(3400, 3413, (3, 8)),
	(3420, 3425, (3, 9)),
	(3430, 3439, (3, 10)),
	(3450, 3495, (3, 11)),
	(3500, 3531, (3, 12)),
	(3550, 3571, (3, 13)),
];

/// Decode the leading four bytes of a compiled file into a magic number.
///
/// The layout is a little-endian `u16` followed by `\r\n`.
pub fn magic_to_int(bytes: [u8; 4]) -> Result<u16> {
	if bytes[2..4] != *b"\r\n" {
		return Err(MarshalError::BadMagicTerminator { got: [bytes[2], bytes[3]] });
	}
	Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Encode a magic number as the four-byte compiled-file prefix.
pub fn int_to_magic(magic: u16) -> [u8; 4] {
	let [lo, hi] = magic.to_le_bytes();
	[lo, hi, b'\r', b'\n']
}

/// Map a magic number to the `(major, minor)` release line that emitted it.
pub fn version_for_magic(magic: u16) -> Option<(u8, u8)> {
	MAGIC_RANGES
		.iter()
		.find(|(first, last, _)| (*first..=*last).contains(&magic))
		.map(|(_, _, version)| *version)
}

/// Render a magic number's release line, or `unknown`.
pub fn version_label(magic: u16) -> String {
	match version_for_magic(magic) {
		Some((major, minor)) => format!("{major}.{minor}"),
		None => "unknown".to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use crate::marshal::MarshalError;
	use crate::marshal::magics::{int_to_magic, magic_to_int, version_for_magic, version_label};

	#[test]
	fn decodes_magic_prefix() {
		assert_eq!(magic_to_int([0x03, 0xf3, b'\r', b'\n']).expect("2.7 magic"), 62211);
		assert_eq!(magic_to_int(int_to_magic(3413)).expect("3.8 magic"), 3413);
	}

	#[test]
	fn rejects_missing_terminator() {
		let err = magic_to_int([0x03, 0xf3, 0, 0]).expect_err("no terminator");
		assert!(matches!(err, MarshalError::BadMagicTerminator { got: [0, 0] }));
	}

	#[test]
	fn maps_known_release_lines() {
		assert_eq!(version_for_magic(62211), Some((2, 7)));
		assert_eq!(version_for_magic(62161), Some((2, 6)));
		assert_eq!(version_for_magic(3394), Some((3, 7)));
		assert_eq!(version_for_magic(3571), Some((3, 13)));
		assert_eq!(version_for_magic(1), None);
		assert_eq!(version_label(3439), "3.10");
		assert_eq!(version_label(9), "unknown");
	}
}
