// crates/wirebin-core/src/varint/var_long_wide.rs
//
// VarLong over a wide integer type. Groups are peeled off with div/rem by 128
// and put back together with multiply/add, so no intermediate ever relies on
// native 64-bit overflow behaviour. Output is byte-identical to `var_long`.

use std::cmp::Ordering;

use malachite::Integer;

use super::wide::WideInt;
use super::{CONTINUE_BIT, MAX_VAR_LONG_BYTES, PAYLOAD_MASK};
use crate::cursor::Cursor;
use crate::error::{CodecError, Result};

fn two_pow_64<W: WideInt>() -> W {
    W::one().shl_bits(64)
}

fn radix<W: WideInt>() -> W {
    W::from_u64(128)
}

/// Map a value in `i64::MIN..=u64::MAX` onto `0..2^64`: negatives get `2^64` added.
pub fn reinterpret_unsigned<W: WideInt>(value: &W) -> Result<W> {
    if value.compare(&W::from_i64(i64::MIN)) == Ordering::Less
        || value.compare(&W::from_u64(u64::MAX)) == Ordering::Greater
    {
        return Err(CodecError::EncodingOverflow(format!(
            "{} is outside the 64-bit range",
            value.to_decimal()
        )));
    }
    if value.is_negative() {
        Ok(value.plus(&two_pow_64()))
    } else {
        Ok(value.clone())
    }
}

/// Map a value in `0..2^64` into the signed range: anything above `i64::MAX`
/// has `2^64` subtracted.
pub fn reinterpret_signed<W: WideInt>(value: &W) -> W {
    if value.compare(&W::from_i64(i64::MAX)) == Ordering::Greater {
        value.minus(&two_pow_64())
    } else {
        value.clone()
    }
}

/// Accepts `i64::MIN..=u64::MAX`; negative inputs are written as their
/// two's-complement bit pattern, as a native `i64 as u64` would be.
pub fn write_unsigned_var_long_wide<W: WideInt>(value: &W) -> Result<Vec<u8>> {
    let mut rest = reinterpret_unsigned(value)?;
    let radix = radix::<W>();
    let zero = W::zero();
    let mut out = Vec::with_capacity(MAX_VAR_LONG_BYTES);

    for _ in 0..MAX_VAR_LONG_BYTES {
        let (quot, group) = rest.div_rem(&radix);
        let group = group.low_u8().ok_or_else(|| {
            CodecError::EncodingOverflow(format!("group {} out of range", group.to_decimal()))
        })?;
        if quot == zero {
            out.push(group);
            return Ok(out);
        }
        out.push(group | CONTINUE_BIT);
        rest = quot;
    }

    Err(CodecError::EncodingOverflow(format!(
        "{} needs more than {MAX_VAR_LONG_BYTES} groups",
        value.to_decimal()
    )))
}

/// Returns the unsigned value in `0..2^64`. Bits beyond 63 in the tenth group
/// are discarded, matching the native reader.
pub fn read_unsigned_var_long_wide<W: WideInt>(cursor: &mut Cursor<'_>) -> Result<W> {
    cursor.atomic(|c| {
        let radix = radix::<W>();
        let mut value = W::zero();
        let mut place = W::one();

        for _ in 0..MAX_VAR_LONG_BYTES {
            let b = c.consume_byte()?;
            value = value.plus(&W::from_u64((b & PAYLOAD_MASK) as u64).times(&place));
            if b & CONTINUE_BIT == 0 {
                let mask = two_pow_64::<W>().minus(&W::one());
                return Ok(value.bitand(&mask));
            }
            place = place.times(&radix);
        }

        Err(CodecError::MalformedVarInt {
            max_bytes: MAX_VAR_LONG_BYTES,
        })
    })
}

pub fn write_var_long_wide<W: WideInt>(value: &W) -> Result<Vec<u8>> {
    if value.compare(&W::from_i64(i64::MIN)) == Ordering::Less
        || value.compare(&W::from_i64(i64::MAX)) == Ordering::Greater
    {
        return Err(CodecError::EncodingOverflow(format!(
            "{} is outside the signed 64-bit range",
            value.to_decimal()
        )));
    }
    let two = W::from_u64(2);
    let mapped = if value.is_negative() {
        // -v * 2 - 1
        W::zero().minus(value).times(&two).minus(&W::one())
    } else {
        value.times(&two)
    };
    write_unsigned_var_long_wide(&mapped)
}

pub fn read_var_long_wide<W: WideInt>(cursor: &mut Cursor<'_>) -> Result<W> {
    let raw: W = read_unsigned_var_long_wide(cursor)?;
    let (half, odd) = raw.div_rem(&W::from_u64(2));
    if odd == W::zero() {
        Ok(half)
    } else {
        Ok(W::zero().minus(&half).minus(&W::one()))
    }
}

pub fn write_var_long_decimal(text: &str) -> Result<Vec<u8>> {
    write_var_long_wide(&Integer::from_decimal(text)?)
}

pub fn write_unsigned_var_long_decimal(text: &str) -> Result<Vec<u8>> {
    write_unsigned_var_long_wide(&Integer::from_decimal(text)?)
}

pub fn read_var_long_decimal(cursor: &mut Cursor<'_>) -> Result<String> {
    Ok(read_var_long_wide::<Integer>(cursor)?.to_decimal())
}

pub fn read_unsigned_var_long_decimal(cursor: &mut Cursor<'_>) -> Result<String> {
    Ok(read_unsigned_var_long_wide::<Integer>(cursor)?.to_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::varint::{write_unsigned_var_long, write_var_long};

    #[test]
    fn wide_writer_matches_native() {
        for v in [0i64, 1, -1, 150, -150, i64::MIN, i64::MAX] {
            assert_eq!(write_var_long_wide(&(v as i128)).unwrap(), write_var_long(v));
            assert_eq!(
                write_var_long_wide(&Integer::from(v)).unwrap(),
                write_var_long(v)
            );
        }
    }

    #[test]
    fn negative_unsigned_input_is_twos_complement() {
        assert_eq!(
            write_unsigned_var_long_wide(&-1i128).unwrap(),
            write_unsigned_var_long(u64::MAX)
        );
        assert_eq!(
            write_unsigned_var_long_decimal("-2").unwrap(),
            write_unsigned_var_long(u64::MAX - 1)
        );
    }

    #[test]
    fn out_of_range_is_encoding_overflow() {
        let too_big = (u64::MAX as i128) + 1;
        assert!(matches!(
            write_unsigned_var_long_wide(&too_big),
            Err(CodecError::EncodingOverflow(_))
        ));
        assert!(matches!(
            write_var_long_wide(&((i64::MAX as i128) + 1)),
            Err(CodecError::EncodingOverflow(_))
        ));
        assert!(matches!(
            write_var_long_decimal("-9223372036854775809"),
            Err(CodecError::EncodingOverflow(_))
        ));
        assert!(matches!(
            write_var_long_decimal("twelve"),
            Err(CodecError::InvalidNumber(_))
        ));
    }

    #[test]
    fn reinterpret_round_trips() {
        let v: i128 = -5;
        let u = reinterpret_unsigned(&v).unwrap();
        assert_eq!(u, (u64::MAX - 4) as i128);
        assert_eq!(reinterpret_signed(&u), v);
        assert_eq!(reinterpret_signed(&(i64::MAX as i128)), i64::MAX as i128);
    }

    #[test]
    fn decimal_reads() {
        let bytes = write_var_long(i64::MIN);
        let mut c = Cursor::new(&bytes);
        assert_eq!(read_var_long_decimal(&mut c).unwrap(), i64::MIN.to_string());

        let bytes = write_unsigned_var_long(u64::MAX);
        let mut c = Cursor::new(&bytes);
        assert_eq!(read_unsigned_var_long_decimal(&mut c).unwrap(), u64::MAX.to_string());
    }

    #[test]
    fn wide_reader_errors_match_native() {
        let mut c = Cursor::new(&[0xff; 10]);
        assert_eq!(
            read_var_long_wide::<i128>(&mut c).unwrap_err(),
            CodecError::MalformedVarInt { max_bytes: 10 }
        );
        assert_eq!(c.offset(), 0);

        let mut c = Cursor::new(&[0x81, 0x80]);
        assert!(read_unsigned_var_long_wide::<Integer>(&mut c)
            .unwrap_err()
            .is_recoverable());
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn tenth_group_overflow_bits_are_masked() {
        // Ten groups of all-ones: 70 bits on the wire, 64 kept.
        let mut buf = vec![0xffu8; 9];
        buf.push(0x7f);
        let mut c = Cursor::new(&buf);
        assert_eq!(
            read_unsigned_var_long_wide::<i128>(&mut c).unwrap(),
            u64::MAX as i128
        );
        let mut c = Cursor::new(&buf);
        assert_eq!(crate::varint::read_unsigned_var_long(&mut c).unwrap(), u64::MAX);
    }
}
