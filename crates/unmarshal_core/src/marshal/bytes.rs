use crate::marshal::{MarshalError, Result};

/// Forward-only cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian, matching the marshal wire format.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(MarshalError::TruncatedStream {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a single tag byte.
	pub fn read_tag(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f64`.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read a signed 32-bit length prefix, rejecting negative values.
	pub fn read_len(&mut self, reason: &'static str) -> Result<usize> {
		let at = self.pos;
		let len = self.read_i32()?;
		usize::try_from(len).map_err(|_| MarshalError::MalformedStream {
			at,
			reason,
			value: i64::from(len),
		})
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}
}

#[cfg(test)]
mod tests;
