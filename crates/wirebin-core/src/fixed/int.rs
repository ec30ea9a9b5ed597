// crates/wirebin-core/src/fixed/int.rs
//
// Fixed-width integer fields. Unprefixed names are big-endian (network order),
// `l_` names are little-endian.

use crate::error::{CodecError, Result};

pub const TRIAD_MAX: u32 = 0x00FF_FFFF;

/// Copy the first `N` bytes of `bytes`. Longer input is fine; shorter is `OutOfData`.
#[inline]
pub(crate) fn take<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    match bytes.get(..N) {
        Some(head) => {
            let mut out = [0u8; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(CodecError::out_of_data(N, bytes.len())),
    }
}

pub fn read_bool(bytes: &[u8]) -> Result<bool> {
    Ok(take::<1>(bytes)?[0] != 0)
}

pub fn write_bool(value: bool) -> [u8; 1] {
    [value as u8]
}

pub fn read_byte(bytes: &[u8]) -> Result<u8> {
    Ok(take::<1>(bytes)?[0])
}

pub fn read_signed_byte(bytes: &[u8]) -> Result<i8> {
    Ok(take::<1>(bytes)?[0] as i8)
}

pub fn write_byte(value: u8) -> [u8; 1] {
    [value]
}

pub fn read_short(bytes: &[u8]) -> Result<u16> {
    Ok(u16::from_be_bytes(take(bytes)?))
}

pub fn read_signed_short(bytes: &[u8]) -> Result<i16> {
    Ok(i16::from_be_bytes(take(bytes)?))
}

pub fn write_short(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn read_l_short(bytes: &[u8]) -> Result<u16> {
    Ok(u16::from_le_bytes(take(bytes)?))
}

pub fn read_signed_l_short(bytes: &[u8]) -> Result<i16> {
    Ok(i16::from_le_bytes(take(bytes)?))
}

pub fn write_l_short(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Big-endian 24-bit read: widen to a 32-bit value with a zero high byte.
pub fn read_triad(bytes: &[u8]) -> Result<u32> {
    let [a, b, c] = take::<3>(bytes)?;
    Ok(u32::from_be_bytes([0, a, b, c]))
}

/// Big-endian 24-bit write: encode as 32 bits and drop the most significant byte.
pub fn write_triad(value: u32) -> Result<[u8; 3]> {
    check_triad(value)?;
    let [_, a, b, c] = value.to_be_bytes();
    Ok([a, b, c])
}

pub fn read_l_triad(bytes: &[u8]) -> Result<u32> {
    let [a, b, c] = take::<3>(bytes)?;
    Ok(u32::from_le_bytes([a, b, c, 0]))
}

/// Little-endian 24-bit write: the dropped byte is the trailing (most significant) one.
pub fn write_l_triad(value: u32) -> Result<[u8; 3]> {
    check_triad(value)?;
    let [a, b, c, _] = value.to_le_bytes();
    Ok([a, b, c])
}

#[inline]
fn check_triad(value: u32) -> Result<()> {
    if value > TRIAD_MAX {
        return Err(CodecError::EncodingOverflow(format!(
            "triad value 0x{:08x} exceeds 24 bits",
            value
        )));
    }
    Ok(())
}

pub fn read_int(bytes: &[u8]) -> Result<i32> {
    Ok(i32::from_be_bytes(take(bytes)?))
}

pub fn write_int(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn read_l_int(bytes: &[u8]) -> Result<i32> {
    Ok(i32::from_le_bytes(take(bytes)?))
}

pub fn write_l_int(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

pub fn read_long(bytes: &[u8]) -> Result<i64> {
    Ok(i64::from_be_bytes(take(bytes)?))
}

pub fn write_long(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn read_l_long(bytes: &[u8]) -> Result<i64> {
    Ok(i64::from_le_bytes(take(bytes)?))
}

pub fn write_l_long(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}
