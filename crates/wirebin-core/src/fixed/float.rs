// crates/wirebin-core/src/fixed/float.rs

use crate::error::Result;
use crate::fixed::int::take;

pub fn read_float(bytes: &[u8]) -> Result<f32> {
    Ok(f32::from_be_bytes(take(bytes)?))
}

pub fn read_l_float(bytes: &[u8]) -> Result<f32> {
    Ok(f32::from_le_bytes(take(bytes)?))
}

/// Big-endian float rounded half away from zero to `digits` decimal places.
pub fn read_rounded_float(bytes: &[u8], digits: u32) -> Result<f64> {
    Ok(round_to(read_float(bytes)? as f64, digits))
}

pub fn read_rounded_l_float(bytes: &[u8], digits: u32) -> Result<f64> {
    Ok(round_to(read_l_float(bytes)? as f64, digits))
}

pub fn write_float(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn write_l_float(value: f32) -> [u8; 4] {
    value.to_le_bytes()
}

pub fn read_double(bytes: &[u8]) -> Result<f64> {
    Ok(f64::from_be_bytes(take(bytes)?))
}

pub fn read_l_double(bytes: &[u8]) -> Result<f64> {
    Ok(f64::from_le_bytes(take(bytes)?))
}

pub fn write_double(value: f64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn write_l_double(value: f64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Round half away from zero at `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    if !scale.is_finite() {
        return value;
    }
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Human-readable float: six decimals with trailing zeros trimmed, keeping at
/// least one fractional digit. Display only; not a wire format.
pub fn print_float(value: f64) -> String {
    print_float_digits(value, 6)
}

/// `print_float` at `digits` decimals instead of six.
pub fn print_float_digits(value: f64, digits: u32) -> String {
    let s = format!("{:.*}", digits as usize, value);
    if !value.is_finite() {
        return s;
    }
    match s.find('.') {
        Some(dot) => {
            let keep = s[dot + 2..].trim_end_matches('0').len();
            s[..dot + 2 + keep].to_string()
        }
        None => format!("{s}.0"),
    }
}
