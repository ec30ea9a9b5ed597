// crates/wirebin-core/src/fixed/mod.rs

pub mod float;
pub mod int;
pub mod sign;

use std::fmt;

use crate::error::{CodecError, Result};

pub use float::*;
pub use int::{
    read_bool, read_byte, read_int, read_l_int, read_l_long, read_l_short, read_l_triad,
    read_long, read_short, read_signed_byte, read_signed_l_short, read_signed_short, read_triad,
    write_bool, write_byte, write_int, write_l_int, write_l_long, write_l_short, write_l_triad,
    write_long, write_short, write_triad, TRIAD_MAX,
};
pub use sign::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Big,
    Little,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedKind {
    Bool,
    Byte,
    Short,
    Triad,
    Int,
    Long,
    Float,
    Double,
}

impl FixedKind {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            FixedKind::Bool | FixedKind::Byte => 1,
            FixedKind::Short => 2,
            FixedKind::Triad => 3,
            FixedKind::Int | FixedKind::Float => 4,
            FixedKind::Long | FixedKind::Double => 8,
        }
    }
}

/// A decoded fixed-width field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixedValue {
    Bool(bool),
    Byte(u8),
    Short(u16),
    Triad(u32),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl FixedValue {
    pub fn kind(&self) -> FixedKind {
        match self {
            FixedValue::Bool(_) => FixedKind::Bool,
            FixedValue::Byte(_) => FixedKind::Byte,
            FixedValue::Short(_) => FixedKind::Short,
            FixedValue::Triad(_) => FixedKind::Triad,
            FixedValue::Int(_) => FixedKind::Int,
            FixedValue::Long(_) => FixedKind::Long,
            FixedValue::Float(_) => FixedKind::Float,
            FixedValue::Double(_) => FixedKind::Double,
        }
    }

    /// Parse decimal text as a value of `kind`. Integer kinds also accept the
    /// signed spelling of their width (`-1` for a short is `0xffff`).
    pub fn parse(kind: FixedKind, text: &str) -> Result<FixedValue> {
        let text = text.trim();
        let bad = || CodecError::InvalidNumber(format!("{text:?} is not a valid {kind:?}"));
        let int = || text.parse::<i128>().map_err(|_| bad());

        let value = match kind {
            FixedKind::Bool => match text {
                "true" | "1" => FixedValue::Bool(true),
                "false" | "0" => FixedValue::Bool(false),
                _ => return Err(bad()),
            },
            FixedKind::Byte => FixedValue::Byte(narrow(int()?, 8, kind)? as u8),
            FixedKind::Short => FixedValue::Short(narrow(int()?, 16, kind)? as u16),
            FixedKind::Triad => FixedValue::Triad(narrow(int()?, 24, kind)? as u32),
            FixedKind::Int => FixedValue::Int(narrow(int()?, 32, kind)? as u32 as i32),
            FixedKind::Long => FixedValue::Long(narrow(int()?, 64, kind)? as u64 as i64),
            FixedKind::Float => {
                let v: f32 = text.parse().map_err(|_| bad())?;
                finite_unless_spelled(v.is_infinite(), text, kind)?;
                FixedValue::Float(v)
            }
            FixedKind::Double => {
                let v: f64 = text.parse().map_err(|_| bad())?;
                finite_unless_spelled(v.is_infinite(), text, kind)?;
                FixedValue::Double(v)
            }
        };
        Ok(value)
    }
}

/// A finite literal that parses to infinity is out of range for the kind.
/// `inf`/`infinity` (any case, optionally signed) are accepted as written.
fn finite_unless_spelled(infinite: bool, text: &str, kind: FixedKind) -> Result<()> {
    if !infinite {
        return Ok(());
    }
    let unsigned = text.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if unsigned == "inf" || unsigned == "infinity" {
        return Ok(());
    }
    Err(CodecError::EncodingOverflow(format!(
        "{text} is out of range for a {kind:?}"
    )))
}

/// Accept anything representable in `bits` as either signed or unsigned; return
/// the low `bits` as an unsigned pattern.
fn narrow(v: i128, bits: u32, kind: FixedKind) -> Result<u128> {
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << bits) - 1;
    if v < min || v > max {
        return Err(CodecError::EncodingOverflow(format!(
            "{v} does not fit a {bits}-bit {kind:?}"
        )));
    }
    Ok((v as u128) & ((1u128 << bits) - 1))
}

impl fmt::Display for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedValue::Bool(v) => write!(f, "{v}"),
            FixedValue::Byte(v) => write!(f, "{v}"),
            FixedValue::Short(v) => write!(f, "{v}"),
            FixedValue::Triad(v) => write!(f, "{v}"),
            FixedValue::Int(v) => write!(f, "{v}"),
            FixedValue::Long(v) => write!(f, "{v}"),
            FixedValue::Float(v) => f.write_str(&print_float(*v as f64)),
            FixedValue::Double(v) => f.write_str(&print_float(*v)),
        }
    }
}

pub fn read_fixed(kind: FixedKind, endian: Endian, bytes: &[u8]) -> Result<FixedValue> {
    use Endian::*;
    let v = match (kind, endian) {
        (FixedKind::Bool, _) => FixedValue::Bool(read_bool(bytes)?),
        (FixedKind::Byte, _) => FixedValue::Byte(read_byte(bytes)?),
        (FixedKind::Short, Big) => FixedValue::Short(read_short(bytes)?),
        (FixedKind::Short, Little) => FixedValue::Short(read_l_short(bytes)?),
        (FixedKind::Triad, Big) => FixedValue::Triad(read_triad(bytes)?),
        (FixedKind::Triad, Little) => FixedValue::Triad(read_l_triad(bytes)?),
        (FixedKind::Int, Big) => FixedValue::Int(read_int(bytes)?),
        (FixedKind::Int, Little) => FixedValue::Int(read_l_int(bytes)?),
        (FixedKind::Long, Big) => FixedValue::Long(read_long(bytes)?),
        (FixedKind::Long, Little) => FixedValue::Long(read_l_long(bytes)?),
        (FixedKind::Float, Big) => FixedValue::Float(read_float(bytes)?),
        (FixedKind::Float, Little) => FixedValue::Float(read_l_float(bytes)?),
        (FixedKind::Double, Big) => FixedValue::Double(read_double(bytes)?),
        (FixedKind::Double, Little) => FixedValue::Double(read_l_double(bytes)?),
    };
    Ok(v)
}

pub fn write_fixed(value: FixedValue, endian: Endian) -> Result<Vec<u8>> {
    use Endian::*;
    let out = match (value, endian) {
        (FixedValue::Bool(v), _) => write_bool(v).to_vec(),
        (FixedValue::Byte(v), _) => write_byte(v).to_vec(),
        (FixedValue::Short(v), Big) => write_short(v).to_vec(),
        (FixedValue::Short(v), Little) => write_l_short(v).to_vec(),
        (FixedValue::Triad(v), Big) => write_triad(v)?.to_vec(),
        (FixedValue::Triad(v), Little) => write_l_triad(v)?.to_vec(),
        (FixedValue::Int(v), Big) => write_int(v).to_vec(),
        (FixedValue::Int(v), Little) => write_l_int(v).to_vec(),
        (FixedValue::Long(v), Big) => write_long(v).to_vec(),
        (FixedValue::Long(v), Little) => write_l_long(v).to_vec(),
        (FixedValue::Float(v), Big) => write_float(v).to_vec(),
        (FixedValue::Float(v), Little) => write_l_float(v).to_vec(),
        (FixedValue::Double(v), Big) => write_double(v).to_vec(),
        (FixedValue::Double(v), Little) => write_l_double(v).to_vec(),
    };
    Ok(out)
}
