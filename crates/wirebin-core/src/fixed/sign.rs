// crates/wirebin-core/src/fixed/sign.rs
//
// Width narrowing on the native 64-bit integer.
//
// `sign_*` pushes bit W-1 up to bit 63 with a left shift, then arithmetic-shifts
// back down, which is two's-complement sign extension of the low W bits.
// `unsign_*` masks to the low W bits.

#[inline]
const fn sign_bits(value: i64, bits: u32) -> i64 {
    let shift = 64 - bits;
    (value << shift) >> shift
}

#[inline]
const fn unsign_bits(value: i64, bits: u32) -> i64 {
    value & (((1u64 << bits) - 1) as i64)
}

pub const fn sign_byte(value: i64) -> i64 {
    sign_bits(value, 8)
}

pub const fn unsign_byte(value: i64) -> i64 {
    unsign_bits(value, 8)
}

pub const fn sign_short(value: i64) -> i64 {
    sign_bits(value, 16)
}

pub const fn unsign_short(value: i64) -> i64 {
    unsign_bits(value, 16)
}

pub const fn sign_triad(value: i64) -> i64 {
    sign_bits(value, 24)
}

pub const fn unsign_triad(value: i64) -> i64 {
    unsign_bits(value, 24)
}

pub const fn sign_int(value: i64) -> i64 {
    sign_bits(value, 32)
}

pub const fn unsign_int(value: i64) -> i64 {
    unsign_bits(value, 32)
}

/// 64-bit unsign: same bits, read as unsigned.
pub const fn unsign_long(value: i64) -> u64 {
    value as u64
}

pub const fn flip_short_endianness(value: u16) -> u16 {
    value.swap_bytes()
}

pub const fn flip_int_endianness(value: i32) -> i32 {
    value.swap_bytes()
}

pub const fn flip_long_endianness(value: i64) -> i64 {
    value.swap_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extends_low_bits() {
        assert_eq!(sign_byte(0xff), -1);
        assert_eq!(sign_byte(0x7f), 127);
        assert_eq!(sign_byte(0x1_80), -128);
        assert_eq!(sign_short(0x8000), -32768);
        assert_eq!(sign_triad(0x80_0000), -0x80_0000);
        assert_eq!(sign_triad(0x7f_ffff), 0x7f_ffff);
        assert_eq!(sign_int(0xffff_fffe), -2);
        assert_eq!(sign_int(-5), -5);
    }

    #[test]
    fn unsign_masks_low_bits() {
        assert_eq!(unsign_byte(-1), 0xff);
        assert_eq!(unsign_short(-2), 0xfffe);
        assert_eq!(unsign_triad(-1), 0xff_ffff);
        assert_eq!(unsign_int(i32::MIN as i64), 0x8000_0000);
        assert_eq!(unsign_long(-1), u64::MAX);
    }

    #[test]
    fn sign_and_unsign_are_inverse_on_width() {
        for v in [-128i64, -1, 0, 1, 127] {
            assert_eq!(sign_byte(unsign_byte(v)), v);
        }
        for v in [i32::MIN as i64, -1, 0, i32::MAX as i64] {
            assert_eq!(sign_int(unsign_int(v)), v);
        }
    }
}
