// crates/wirebin-core/tests/fixed_roundtrip.rs

use wirebin_core::fixed::*;
use wirebin_core::Cursor;

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

#[test]
fn integer_widths_roundtrip_both_orders() {
    let mut seed: u64 = 0x0bad_c0de_dead_beef;

    for _ in 0..4096 {
        let r = lcg_next(&mut seed);

        let b = r as u8;
        assert_eq!(read_byte(&write_byte(b)).unwrap(), b);
        assert_eq!(read_signed_byte(&write_byte(b)).unwrap(), b as i8);

        let s = r as u16;
        assert_eq!(read_short(&write_short(s)).unwrap(), s);
        assert_eq!(read_l_short(&write_l_short(s)).unwrap(), s);
        assert_eq!(read_signed_short(&write_short(s)).unwrap(), s as i16);
        assert_eq!(read_signed_l_short(&write_l_short(s)).unwrap(), s as i16);

        let t = (r as u32) & TRIAD_MAX;
        assert_eq!(read_triad(&write_triad(t).unwrap()).unwrap(), t);
        assert_eq!(read_l_triad(&write_l_triad(t).unwrap()).unwrap(), t);

        let i = r as i32;
        assert_eq!(read_int(&write_int(i)).unwrap(), i);
        assert_eq!(read_l_int(&write_l_int(i)).unwrap(), i);

        let l = r as i64;
        assert_eq!(read_long(&write_long(l)).unwrap(), l);
        assert_eq!(read_l_long(&write_l_long(l)).unwrap(), l);
    }
}

#[test]
fn floats_roundtrip_bit_exact() {
    let mut seed: u64 = 42;
    for _ in 0..1024 {
        let r = lcg_next(&mut seed);
        let f = f32::from_bits(r as u32);
        if !f.is_nan() {
            assert_eq!(read_float(&write_float(f)).unwrap(), f);
            assert_eq!(read_l_float(&write_l_float(f)).unwrap(), f);
        }
        let d = f64::from_bits(r);
        if !d.is_nan() {
            assert_eq!(read_double(&write_double(d)).unwrap(), d);
            assert_eq!(read_l_double(&write_l_double(d)).unwrap(), d);
        }
    }
}

#[test]
fn flip_matches_opposite_byte_order() {
    let mut seed: u64 = 7;
    for _ in 0..1024 {
        let r = lcg_next(&mut seed);

        let s = r as u16;
        assert_eq!(read_short(&write_l_short(s)).unwrap(), flip_short_endianness(s));

        let i = r as i32;
        assert_eq!(read_int(&write_l_int(i)).unwrap(), flip_int_endianness(i));

        let l = r as i64;
        assert_eq!(read_long(&write_l_long(l)).unwrap(), flip_long_endianness(l));
        assert_eq!(flip_long_endianness(flip_long_endianness(l)), l);
    }
}

#[test]
fn triad_golden_bytes() {
    assert_eq!(write_triad(0x010203).unwrap(), [0x01, 0x02, 0x03]);
    assert_eq!(write_l_triad(0x010203).unwrap(), [0x03, 0x02, 0x01]);
    assert_eq!(sign_triad(read_triad(&[0xff, 0xff, 0xfe]).unwrap() as i64), -2);
}

#[test]
fn cursor_reads_a_packed_record() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&write_bool(true));
    buf.extend_from_slice(&write_short(0xbeef));
    buf.extend_from_slice(&write_l_triad(0x00abcd).unwrap());
    buf.extend_from_slice(&write_int(-1));
    buf.extend_from_slice(&write_l_long(1 << 40));
    buf.extend_from_slice(&write_float(0.5));
    buf.extend_from_slice(&write_l_double(-8.0));

    let mut c = Cursor::new(&buf);
    assert!(c.read_bool().unwrap());
    assert_eq!(c.read_short().unwrap(), 0xbeef);
    assert_eq!(c.read_l_triad().unwrap(), 0x00abcd);
    assert_eq!(c.read_int().unwrap(), -1);
    assert_eq!(c.read_l_long().unwrap(), 1 << 40);
    assert_eq!(c.read_float().unwrap(), 0.5);
    assert_eq!(c.read_l_double().unwrap(), -8.0);
    assert!(c.is_eof());

    // Nothing left: a failed read does not move the cursor.
    assert!(c.read_int().is_err());
    assert_eq!(c.offset(), buf.len());
}

#[test]
fn fixed_kind_dispatch_agrees_with_direct_calls() {
    assert_eq!(
        write_fixed(FixedValue::Triad(0x010203), Endian::Little).unwrap(),
        write_l_triad(0x010203).unwrap().to_vec()
    );
    assert_eq!(
        read_fixed(FixedKind::Int, Endian::Big, &[0xff, 0xff, 0xff, 0xfe]).unwrap(),
        FixedValue::Int(-2)
    );
    assert!(read_fixed(FixedKind::Double, Endian::Big, &[0; 7]).is_err());
}
