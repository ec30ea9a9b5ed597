// crates/wirebin-core/src/varint/zigzag.rs
//
// 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...

pub const fn zigzag_encode_32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

pub const fn zigzag_encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode_32`], evaluated on 64-bit signed arithmetic.
pub const fn zigzag_decode_32(raw: u32) -> i32 {
    zigzag_decode_64(raw as u64) as i32
}

/// Spread bit 0 across the word, xor, shift arithmetically, then restore bit 63
/// which the arithmetic shift smeared.
pub const fn zigzag_decode_64(raw: u64) -> i64 {
    let raw = raw as i64;
    let temp = (((raw << 63) >> 63) ^ raw) >> 1;
    temp ^ (raw & i64::MIN)
}
