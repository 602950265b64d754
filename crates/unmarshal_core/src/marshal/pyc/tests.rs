use unmarshal_testkit::{FIXTURE_MTIME, StreamBuilder, pyc_bytes, scratch_dir, write_fixture};

use crate::marshal::{CodeLayout, MarshalError, PycFile, PycHeader, PycValidation};

fn module_body() -> Vec<u8> {
	StreamBuilder::new().minimal_code("<test>", "<module>", 1).build()
}

#[test]
fn parses_legacy_header() {
	let bytes = pyc_bytes(62211, &module_body());
	let header = PycHeader::parse(&bytes).expect("2.7 header parses");
	assert_eq!(header.magic, 62211);
	assert_eq!(header.header_size, PycHeader::LEGACY_SIZE);
	assert_eq!(header.flags, None);
	assert_eq!(
		header.validation,
		PycValidation::Timestamp {
			mtime: FIXTURE_MTIME,
			source_size: None
		}
	);
}

#[test]
fn header_size_tracks_magic() {
	assert_eq!(PycHeader::size_for_magic(3131), PycHeader::LEGACY_SIZE);
	assert_eq!(PycHeader::size_for_magic(3230), PycHeader::SIZED_SIZE);
	assert_eq!(PycHeader::size_for_magic(3394), PycHeader::FLAGGED_SIZE);
	assert_eq!(PycHeader::size_for_magic(62211), PycHeader::LEGACY_SIZE);
}

#[test]
fn parses_flagged_timestamp_header() {
	let body = module_body();
	let bytes = pyc_bytes(3413, &body);
	let header = PycHeader::parse(&bytes).expect("3.8 header parses");
	assert_eq!(header.header_size, PycHeader::FLAGGED_SIZE);
	assert_eq!(header.flags, Some(0));
	assert_eq!(
		header.validation,
		PycValidation::Timestamp {
			mtime: FIXTURE_MTIME,
			source_size: Some(body.len() as u32)
		}
	);
}

#[test]
fn parses_hash_based_header() {
	let mut bytes = vec![0x55, 0x0d, b'\r', b'\n'];
	bytes.extend_from_slice(&3_u32.to_le_bytes());
	bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
	let header = PycHeader::parse(&bytes).expect("hash-based header parses");
	assert_eq!(header.magic, 3413);
	assert_eq!(
		header.validation,
		PycValidation::Hash {
			hash: [1, 2, 3, 4, 5, 6, 7, 8],
			check_source: true
		}
	);
}

#[test]
fn short_header_is_truncation() {
	let bytes = pyc_bytes(3413, &[]);
	let err = PycHeader::parse(&bytes[..10]).expect_err("short header");
	assert!(matches!(err, MarshalError::TruncatedStream { at: 10, need: 6, rem: 0 }));

	let err = PycHeader::parse(&[0x03]).expect_err("no magic");
	assert!(matches!(err, MarshalError::InvalidHeader));
}

#[test]
fn opens_file_and_decodes_code_with_native_layout() {
	let dir = scratch_dir();
	let path = write_fixture(dir.path(), "module.pyc", &pyc_bytes(62211, &module_body()));

	let file = PycFile::open(&path).expect("fixture opens");
	let opt = file.native_options();
	assert_eq!(opt.layout, CodeLayout::LEGACY);

	let code = file.decode_code(&opt).expect("body decodes");
	assert_eq!(code.name().as_deref(), Some("<module>"));
	assert_eq!(code.layout, CodeLayout::LEGACY);
	assert_eq!(file.body().len() + PycHeader::LEGACY_SIZE, file.bytes().len());
}

#[test]
fn non_code_body_is_rejected() {
	let file = PycFile::from_bytes(pyc_bytes(62211, &StreamBuilder::new().int(3).build())).expect("header parses");
	let err = file.decode_code(&file.native_options()).expect_err("body is an int");
	assert!(matches!(err, MarshalError::ExpectedCodeObject { got: "int" }));
}

#[test]
fn missing_file_is_io_error() {
	let dir = scratch_dir();
	let err = PycFile::open(dir.path().join("absent.pyc")).err().expect("open fails");
	assert!(matches!(err, MarshalError::Io(_)));
}
