use crate::marshal::{Cursor, MarshalError};

#[test]
fn reads_little_endian_fixed_width_values() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&(-2_i16).to_le_bytes());
	bytes.extend_from_slice(&(-70_000_i32).to_le_bytes());
	bytes.extend_from_slice(&(1_i64 << 40).to_le_bytes());
	bytes.extend_from_slice(&2.5_f64.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_i16().expect("i16"), -2);
	assert_eq!(cursor.read_i32().expect("i32"), -70_000);
	assert_eq!(cursor.read_i64().expect("i64"), 1_i64 << 40);
	assert_eq!(cursor.read_f64().expect("f64"), 2.5);
	assert_eq!(cursor.remaining(), 0);
	assert_eq!(cursor.pos(), bytes.len());
}

#[test]
fn short_read_reports_offset_and_does_not_advance() {
	let mut cursor = Cursor::new(&[1, 2, 3]);
	cursor.read_tag().expect("first byte");

	let err = cursor.read_i32().expect_err("only two bytes remain");
	assert!(matches!(err, MarshalError::TruncatedStream { at: 1, need: 4, rem: 2 }));
	assert_eq!(cursor.pos(), 1);
}

#[test]
fn negative_length_prefix_is_malformed() {
	let bytes = (-1_i32).to_le_bytes();
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.read_len("negative string length").expect_err("negative length rejected");
	assert!(matches!(
		err,
		MarshalError::MalformedStream {
			at: 0,
			reason: "negative string length",
			value: -1
		}
	));
}
