// crates/wirebin-core/src/varint/mod.rs
//
// 7-bit group varints (little-endian groups, bit 7 = "more follows"),
// with zigzag mapping for the signed forms.

pub mod var_int;
pub mod var_long;
pub mod var_long_wide;
pub mod wide;
pub mod zigzag;

use crate::cursor::Cursor;
use crate::error::{CodecError, Result};

pub use var_int::{
    encoded_len_var_int, put_unsigned_var_int, put_var_int, read_unsigned_var_int, read_var_int,
    write_unsigned_var_int, write_var_int,
};
pub use var_long::{
    encoded_len_var_long, put_unsigned_var_long, put_var_long, read_unsigned_var_long,
    read_var_long, write_unsigned_var_long, write_var_long,
};
pub use var_long_wide::{
    read_unsigned_var_long_decimal, read_unsigned_var_long_wide, read_var_long_decimal,
    read_var_long_wide, reinterpret_signed, reinterpret_unsigned,
    write_unsigned_var_long_decimal, write_unsigned_var_long_wide, write_var_long_decimal,
    write_var_long_wide,
};
pub use wide::WideInt;
pub use zigzag::{zigzag_decode_32, zigzag_decode_64, zigzag_encode_32, zigzag_encode_64};

pub const MAX_VAR_INT_BYTES: usize = 5;
pub const MAX_VAR_LONG_BYTES: usize = 10;

/// Which variable-length integer a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// Zigzag 32-bit
    VarInt,
    /// Unsigned 32-bit
    UnsignedVarInt,
    /// Zigzag 64-bit
    VarLong,
    /// Unsigned 64-bit
    UnsignedVarLong,
}

impl VarKind {
    /// Upper bound on encoded groups; one more is `MalformedVarInt`.
    pub const fn max_bytes(self) -> usize {
        match self {
            VarKind::VarInt | VarKind::UnsignedVarInt => MAX_VAR_INT_BYTES,
            VarKind::VarLong | VarKind::UnsignedVarLong => MAX_VAR_LONG_BYTES,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, VarKind::VarInt | VarKind::VarLong)
    }

    /// 64-bit kinds, the ones with a wide-integer path.
    pub const fn is_long(self) -> bool {
        matches!(self, VarKind::VarLong | VarKind::UnsignedVarLong)
    }
}

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// Read up to `max_bytes` groups into a u64. Groups past bit 63 are discarded,
/// so callers narrower than 64 bits truncate the result themselves.
fn read_groups(cursor: &mut Cursor<'_>, max_bytes: usize) -> Result<u64> {
    cursor.atomic(|c| {
        let mut value: u64 = 0;
        for i in 0..max_bytes {
            let b = c.consume_byte()?;
            value |= ((b & PAYLOAD_MASK) as u64) << (7 * i);
            if b & CONTINUE_BIT == 0 {
                return Ok(value);
            }
        }
        Err(CodecError::MalformedVarInt { max_bytes })
    })
}

/// Minimal encoding: a continuation byte is only emitted while bits remain.
fn put_groups(mut value: u64, out: &mut Vec<u8>) {
    while value >> 7 != 0 {
        out.push((value as u8 & PAYLOAD_MASK) | CONTINUE_BIT);
        value >>= 7;
    }
    out.push(value as u8);
}

#[inline]
fn groups_needed(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_kind_bounds_match_readers() {
        let too_long = [0xffu8; MAX_VAR_LONG_BYTES + 1];
        for kind in [
            VarKind::VarInt,
            VarKind::UnsignedVarInt,
            VarKind::VarLong,
            VarKind::UnsignedVarLong,
        ] {
            let mut c = Cursor::new(&too_long);
            let err = match kind {
                VarKind::VarInt => read_var_int(&mut c).map(|_| ()),
                VarKind::UnsignedVarInt => read_unsigned_var_int(&mut c).map(|_| ()),
                VarKind::VarLong => read_var_long(&mut c).map(|_| ()),
                VarKind::UnsignedVarLong => read_unsigned_var_long(&mut c).map(|_| ()),
            }
            .unwrap_err();
            assert_eq!(err, CodecError::MalformedVarInt { max_bytes: kind.max_bytes() });
            assert_eq!(c.offset(), 0);
        }
        assert!(VarKind::VarLong.is_signed() && VarKind::VarLong.is_long());
        assert!(!VarKind::UnsignedVarInt.is_signed() && !VarKind::UnsignedVarInt.is_long());
    }
}
