use num_bigint::{BigInt, BigUint};

use crate::marshal::bytes::Cursor;
use crate::marshal::{MarshalError, Result};

/// Bits carried by one digit of the arbitrary-precision encoding.
pub const LONG_DIGIT_BITS: usize = 15;

const LONG_DIGIT_BASE: i32 = 1 << LONG_DIGIT_BITS;

/// Decode an `l` payload: signed digit count, then base-2^15 digits, least significant first.
///
/// Digits are nominally in `0..2^15`. A negative digit still contributes its
/// signed value at its position.
pub fn read_long(cursor: &mut Cursor<'_>) -> Result<BigInt> {
	let count = cursor.read_i32()?;
	if count == 0 {
		return Ok(BigInt::default());
	}

	let size = count.unsigned_abs() as usize;
	let at = cursor.pos();
	let need = size.checked_mul(2).ok_or(MarshalError::TruncatedStream {
		at,
		need: usize::MAX,
		rem: cursor.remaining(),
	})?;
	let raw = cursor.read_exact(need)?;
	let digits: Vec<i16> = raw.chunks_exact(2).map(|pair| i16::from_le_bytes([pair[0], pair[1]])).collect();

	// d = low - borrow * 2^15 with low in 0..2^15; the borrow lands one slot up.
	let low = pack_digits(digits.iter().map(|&digit| i32::from(digit).rem_euclid(LONG_DIGIT_BASE) as u32));
	let mut acc = BigInt::from(low);
	if digits.iter().any(|&digit| digit < 0) {
		let borrows = std::iter::once(0).chain(digits.iter().map(|&digit| u32::from(digit < 0)));
		acc -= BigInt::from(pack_digits(borrows));
	}

	if count < 0 {
		acc = -acc;
	}
	Ok(acc)
}

/// Concatenate 15-bit digits, least significant first, into one magnitude.
fn pack_digits(digits: impl Iterator<Item = u32>) -> BigUint {
	let mut words = Vec::with_capacity(digits.size_hint().0 * LONG_DIGIT_BITS / 32 + 1);
	let mut buf = 0_u64;
	let mut bits = 0_usize;
	for digit in digits {
		buf |= u64::from(digit) << bits;
		bits += LONG_DIGIT_BITS;
		if bits >= 32 {
			words.push(buf as u32);
			buf >>= 32;
			bits -= 32;
		}
	}
	if bits > 0 {
		words.push(buf as u32);
	}
	BigUint::new(words)
}

/// Decode an `f` payload: one width byte followed by `width` bytes of ASCII
/// decimal text.
///
/// Every width is text, including eight. Payloads that do not parse as a
/// float fail with `MalformedStream`.
pub fn read_legacy_float(cursor: &mut Cursor<'_>) -> Result<f64> {
	let width = usize::from(cursor.read_tag()?);
	let at = cursor.pos();
	let payload = cursor.read_exact(width)?;

	std::str::from_utf8(payload)
		.ok()
		.and_then(|text| text.trim().parse::<f64>().ok())
		.ok_or(MarshalError::MalformedStream {
			at,
			reason: "unparseable legacy float payload",
			value: width as i64,
		})
}
