// crates/wirebin-cli/src/cmd/fixed.rs

use anyhow::bail;
use clap::{Args, Subcommand, ValueEnum};
use wirebin_core::fixed::{self, Endian, FixedKind, FixedValue};

use crate::io::hex::{format_hex, parse_hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Bool,
    Byte,
    Short,
    Triad,
    Int,
    Long,
    Float,
    Double,
}

impl From<KindArg> for FixedKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Bool => FixedKind::Bool,
            KindArg::Byte => FixedKind::Byte,
            KindArg::Short => FixedKind::Short,
            KindArg::Triad => FixedKind::Triad,
            KindArg::Int => FixedKind::Int,
            KindArg::Long => FixedKind::Long,
            KindArg::Float => FixedKind::Float,
            KindArg::Double => FixedKind::Double,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EndianArg {
    /// Big-endian (network order)
    Be,
    /// Little-endian
    Le,
}

impl From<EndianArg> for Endian {
    fn from(e: EndianArg) -> Self {
        match e {
            EndianArg::Be => Endian::Big,
            EndianArg::Le => Endian::Little,
        }
    }
}

#[derive(Args)]
pub struct FixedArgs {
    #[command(subcommand)]
    pub cmd: FixedCmd,
}

#[derive(Subcommand)]
pub enum FixedCmd {
    /// Encode one value, print hex
    Encode(EncodeArgs),

    /// Decode one value from hex
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,

    #[arg(long, value_enum, default_value_t = EndianArg::Be)]
    pub endian: EndianArg,

    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,

    #[arg(long, value_enum, default_value_t = EndianArg::Be)]
    pub endian: EndianArg,

    /// Round a float to this many decimal digits
    #[arg(long)]
    pub round: Option<u32>,

    pub hex: String,
}

pub fn run(args: FixedArgs) -> anyhow::Result<()> {
    match args.cmd {
        FixedCmd::Encode(a) => {
            let bytes = encode(a.kind.into(), a.endian.into(), &a.value)?;
            println!("{}", format_hex(&bytes));
            Ok(())
        }
        FixedCmd::Decode(a) => {
            let bytes = parse_hex(&a.hex)?;
            println!("{}", decode(a.kind.into(), a.endian.into(), a.round, &bytes)?);
            Ok(())
        }
    }
}

pub fn encode(kind: FixedKind, endian: Endian, text: &str) -> anyhow::Result<Vec<u8>> {
    let value = FixedValue::parse(kind, text)?;
    Ok(fixed::write_fixed(value, endian)?)
}

pub fn decode(
    kind: FixedKind,
    endian: Endian,
    round: Option<u32>,
    bytes: &[u8],
) -> anyhow::Result<String> {
    if bytes.len() > kind.width() {
        bail!(
            "{kind:?} is {} byte(s), got {} byte(s) of input",
            kind.width(),
            bytes.len()
        );
    }
    let text = match (kind, round) {
        (FixedKind::Float, Some(digits)) => {
            let v = match endian {
                Endian::Big => fixed::read_rounded_float(bytes, digits)?,
                Endian::Little => fixed::read_rounded_l_float(bytes, digits)?,
            };
            fixed::print_float_digits(v, digits)
        }
        (FixedKind::Double, Some(digits)) => {
            let v = match endian {
                Endian::Big => fixed::read_double(bytes)?,
                Endian::Little => fixed::read_l_double(bytes)?,
            };
            fixed::print_float_digits(fixed::round_to(v, digits), digits)
        }
        (_, Some(_)) => bail!("--round only applies to float and double"),
        (_, None) => fixed::read_fixed(kind, endian, bytes)?.to_string(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triad_orders() {
        assert_eq!(encode(FixedKind::Triad, Endian::Big, "66051").unwrap(), vec![1, 2, 3]);
        assert_eq!(encode(FixedKind::Triad, Endian::Little, "66051").unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn decode_rounds_floats() {
        let bytes = fixed::write_l_float(1.23456);
        assert_eq!(
            decode(FixedKind::Float, Endian::Little, Some(2), &bytes).unwrap(),
            "1.23"
        );
        assert!(decode(FixedKind::Int, Endian::Big, Some(2), &[0; 4]).is_err());
    }

    #[test]
    fn decode_round_keeps_more_than_six_digits() {
        let bytes = fixed::write_double(0.123456789);
        assert_eq!(
            decode(FixedKind::Double, Endian::Big, Some(8), &bytes).unwrap(),
            "0.12345679"
        );
        let bytes = fixed::write_l_double(-2.5);
        assert_eq!(
            decode(FixedKind::Double, Endian::Little, Some(0), &bytes).unwrap(),
            "-3.0"
        );
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(decode(FixedKind::Short, Endian::Big, None, &[1, 2, 3]).is_err());
        assert!(decode(FixedKind::Short, Endian::Big, None, &[1]).is_err());
        assert_eq!(decode(FixedKind::Short, Endian::Big, None, &[1, 2]).unwrap(), "258");
    }
}
