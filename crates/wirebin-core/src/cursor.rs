// crates/wirebin-core/src/cursor.rs
//
// Read cursor over a caller-owned byte slice.

use crate::error::{CodecError, Result};
use crate::fixed;
use crate::varint;

/// A byte slice paired with a read offset.
///
/// Invariant: `offset <= bytes.len()`. Every read either consumes exactly the
/// bytes of one field or fails and leaves `offset` where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, offset: 0 }
    }

    /// Start reading at `offset`. An offset equal to the length is allowed (empty cursor).
    pub fn at(bytes: &'a [u8], offset: usize) -> Result<Self> {
        if offset > bytes.len() {
            return Err(CodecError::InvalidOffset {
                offset,
                len: bytes.len(),
            });
        }
        Ok(Cursor { bytes, offset })
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    pub fn peek_byte(&self) -> Result<u8> {
        self.bytes
            .get(self.offset)
            .copied()
            .ok_or_else(|| CodecError::out_of_data(1, 0))
    }

    pub fn consume_byte(&mut self) -> Result<u8> {
        let b = self.peek_byte()?;
        self.offset += 1;
        Ok(b)
    }

    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.read_exact(n).map(|_| ())
    }

    /// Take the next `n` bytes, or nothing at all.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::out_of_data(n, remaining));
        }
        let start = self.offset;
        self.offset += n;
        Ok(&self.bytes[start..start + n])
    }

    /// Run a multi-step read; on error the offset is rolled back to where it started.
    pub fn atomic<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.offset;
        let out = f(self);
        if out.is_err() {
            self.offset = start;
        }
        out
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        fixed::read_bool(self.read_exact(1)?)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        self.consume_byte()
    }

    pub fn read_signed_byte(&mut self) -> Result<i8> {
        fixed::read_signed_byte(self.read_exact(1)?)
    }

    pub fn read_short(&mut self) -> Result<u16> {
        fixed::read_short(self.read_exact(2)?)
    }

    pub fn read_signed_short(&mut self) -> Result<i16> {
        fixed::read_signed_short(self.read_exact(2)?)
    }

    pub fn read_l_short(&mut self) -> Result<u16> {
        fixed::read_l_short(self.read_exact(2)?)
    }

    pub fn read_signed_l_short(&mut self) -> Result<i16> {
        fixed::read_signed_l_short(self.read_exact(2)?)
    }

    pub fn read_triad(&mut self) -> Result<u32> {
        fixed::read_triad(self.read_exact(3)?)
    }

    pub fn read_l_triad(&mut self) -> Result<u32> {
        fixed::read_l_triad(self.read_exact(3)?)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        fixed::read_int(self.read_exact(4)?)
    }

    pub fn read_l_int(&mut self) -> Result<i32> {
        fixed::read_l_int(self.read_exact(4)?)
    }

    pub fn read_long(&mut self) -> Result<i64> {
        fixed::read_long(self.read_exact(8)?)
    }

    pub fn read_l_long(&mut self) -> Result<i64> {
        fixed::read_l_long(self.read_exact(8)?)
    }

    pub fn read_float(&mut self) -> Result<f32> {
        fixed::read_float(self.read_exact(4)?)
    }

    pub fn read_l_float(&mut self) -> Result<f32> {
        fixed::read_l_float(self.read_exact(4)?)
    }

    pub fn read_double(&mut self) -> Result<f64> {
        fixed::read_double(self.read_exact(8)?)
    }

    pub fn read_l_double(&mut self) -> Result<f64> {
        fixed::read_l_double(self.read_exact(8)?)
    }

    pub fn read_unsigned_var_int(&mut self) -> Result<u32> {
        varint::read_unsigned_var_int(self)
    }

    pub fn read_var_int(&mut self) -> Result<i32> {
        varint::read_var_int(self)
    }

    pub fn read_unsigned_var_long(&mut self) -> Result<u64> {
        varint::read_unsigned_var_long(self)
    }

    pub fn read_var_long(&mut self) -> Result<i64> {
        varint::read_var_long(self)
    }
}
