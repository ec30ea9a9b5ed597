// crates/wirebin-core/src/varint/var_long.rs
//
// 64-bit varint on native u64/i64: up to 10 groups, the tenth carrying bit 63.

use super::{groups_needed, put_groups, read_groups, zigzag, MAX_VAR_LONG_BYTES};
use crate::cursor::Cursor;
use crate::error::Result;

pub fn read_unsigned_var_long(cursor: &mut Cursor<'_>) -> Result<u64> {
    read_groups(cursor, MAX_VAR_LONG_BYTES)
}

pub fn read_var_long(cursor: &mut Cursor<'_>) -> Result<i64> {
    Ok(zigzag::zigzag_decode_64(read_unsigned_var_long(cursor)?))
}

pub fn put_unsigned_var_long(value: u64, out: &mut Vec<u8>) {
    put_groups(value, out);
}

pub fn put_var_long(value: i64, out: &mut Vec<u8>) {
    put_groups(zigzag::zigzag_encode_64(value), out);
}

pub fn write_unsigned_var_long(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VAR_LONG_BYTES);
    put_unsigned_var_long(value, &mut out);
    out
}

pub fn write_var_long(value: i64) -> Vec<u8> {
    write_unsigned_var_long(zigzag::zigzag_encode_64(value))
}

pub fn encoded_len_var_long(value: u64) -> usize {
    groups_needed(value)
}
