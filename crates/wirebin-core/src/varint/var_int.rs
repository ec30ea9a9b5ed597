// crates/wirebin-core/src/varint/var_int.rs
//
// 32-bit varint: at most 5 groups, the last contributing 4 meaningful bits.

use super::{groups_needed, put_groups, read_groups, zigzag, MAX_VAR_INT_BYTES};
use crate::cursor::Cursor;
use crate::error::Result;

pub fn read_unsigned_var_int(cursor: &mut Cursor<'_>) -> Result<u32> {
    Ok(read_groups(cursor, MAX_VAR_INT_BYTES)? as u32)
}

pub fn read_var_int(cursor: &mut Cursor<'_>) -> Result<i32> {
    Ok(zigzag::zigzag_decode_32(read_unsigned_var_int(cursor)?))
}

pub fn put_unsigned_var_int(value: u32, out: &mut Vec<u8>) {
    put_groups(value as u64, out);
}

pub fn put_var_int(value: i32, out: &mut Vec<u8>) {
    put_unsigned_var_int(zigzag::zigzag_encode_32(value), out);
}

pub fn write_unsigned_var_int(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VAR_INT_BYTES);
    put_unsigned_var_int(value, &mut out);
    out
}

pub fn write_var_int(value: i32) -> Vec<u8> {
    write_unsigned_var_int(zigzag::zigzag_encode_32(value))
}

pub fn encoded_len_var_int(value: u32) -> usize {
    groups_needed(value as u64)
}
