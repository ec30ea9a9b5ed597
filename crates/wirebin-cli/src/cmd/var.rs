// crates/wirebin-cli/src/cmd/var.rs

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use tracing::{debug, warn};
use wirebin_core::varint::{self, VarKind};
use wirebin_core::{CodecError, Cursor};

use crate::io::hex::{format_hex, parse_hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VarKindArg {
    /// Zigzag 32-bit
    Varint,
    /// Unsigned 32-bit
    Uvarint,
    /// Zigzag 64-bit
    Varlong,
    /// Unsigned 64-bit
    Uvarlong,
}

impl From<VarKindArg> for VarKind {
    fn from(k: VarKindArg) -> Self {
        match k {
            VarKindArg::Varint => VarKind::VarInt,
            VarKindArg::Uvarint => VarKind::UnsignedVarInt,
            VarKindArg::Varlong => VarKind::VarLong,
            VarKindArg::Uvarlong => VarKind::UnsignedVarLong,
        }
    }
}

#[derive(Args)]
pub struct VarArgs {
    #[command(subcommand)]
    pub cmd: VarCmd,
}

#[derive(Subcommand)]
pub enum VarCmd {
    /// Encode one value, print hex
    Encode(EncodeArgs),

    /// Decode back-to-back values from hex
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    #[arg(long, value_enum, default_value_t = VarKindArg::Varint)]
    pub kind: VarKindArg,

    /// Route 64-bit kinds through the arbitrary-precision path
    #[arg(long, default_value_t = false)]
    pub wide: bool,

    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[arg(long, value_enum, default_value_t = VarKindArg::Varint)]
    pub kind: VarKindArg,

    #[arg(long, default_value_t = false)]
    pub wide: bool,

    /// Encoded bytes as hex
    pub hex: String,
}

pub fn run(args: VarArgs) -> anyhow::Result<()> {
    match args.cmd {
        VarCmd::Encode(a) => cmd_encode(a),
        VarCmd::Decode(a) => cmd_decode(a),
    }
}

fn cmd_encode(a: EncodeArgs) -> anyhow::Result<()> {
    let bytes = encode_one(a.kind.into(), a.wide, &a.value)?;
    println!("{}", format_hex(&bytes));
    Ok(())
}

fn cmd_decode(a: DecodeArgs) -> anyhow::Result<()> {
    let bytes = parse_hex(&a.hex)?;
    let summary = decode_all(a.kind.into(), a.wide, &bytes, |offset, len, value| {
        println!("{offset} {len} {value}");
    })?;
    if summary.truncated > 0 {
        println!("truncated {} byte(s) at offset {}", summary.truncated, summary.consumed);
    }
    Ok(())
}

pub fn encode_one(kind: VarKind, wide: bool, text: &str) -> anyhow::Result<Vec<u8>> {
    let text = text.trim();
    let bad = || format!("{text:?} is not a valid {kind:?} value");
    let out = match (kind, wide && kind.is_long()) {
        (VarKind::VarInt, _) => varint::write_var_int(text.parse().with_context(bad)?),
        (VarKind::UnsignedVarInt, _) => {
            varint::write_unsigned_var_int(text.parse().with_context(bad)?)
        }
        (VarKind::VarLong, false) => varint::write_var_long(text.parse().with_context(bad)?),
        (VarKind::UnsignedVarLong, false) => {
            varint::write_unsigned_var_long(text.parse().with_context(bad)?)
        }
        (VarKind::VarLong, true) => varint::write_var_long_decimal(text)?,
        (VarKind::UnsignedVarLong, true) => varint::write_unsigned_var_long_decimal(text)?,
    };
    Ok(out)
}

/// Decode a single value; the cursor only moves on success.
pub fn decode_one(kind: VarKind, wide: bool, c: &mut Cursor<'_>) -> Result<String, CodecError> {
    let s = match (kind, wide && kind.is_long()) {
        (VarKind::VarInt, _) => c.read_var_int()?.to_string(),
        (VarKind::UnsignedVarInt, _) => c.read_unsigned_var_int()?.to_string(),
        (VarKind::VarLong, false) => c.read_var_long()?.to_string(),
        (VarKind::UnsignedVarLong, false) => c.read_unsigned_var_long()?.to_string(),
        (VarKind::VarLong, true) => varint::read_var_long_decimal(c)?,
        (VarKind::UnsignedVarLong, true) => varint::read_unsigned_var_long_decimal(c)?,
    };
    Ok(s)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub values: usize,
    pub consumed: usize,
    pub truncated: usize,
}

/// Decode until the input runs out. A truncated final value is reported in the
/// summary; a malformed one is an error.
pub fn decode_all(
    kind: VarKind,
    wide: bool,
    bytes: &[u8],
    mut emit: impl FnMut(usize, usize, &str),
) -> anyhow::Result<DecodeSummary> {
    let mut c = Cursor::new(bytes);
    let mut summary = DecodeSummary::default();

    while !c.is_eof() {
        let start = c.offset();
        match decode_one(kind, wide, &mut c) {
            Ok(value) => {
                let len = c.offset() - start;
                debug!(offset = start, len, value = %value, "decoded");
                emit(start, len, &value);
                summary.values += 1;
            }
            Err(e) if e.is_recoverable() => {
                warn!(offset = start, remaining = c.remaining(), "input ends mid-value");
                summary.truncated = c.remaining();
                break;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("decoding {kind:?} at offset {start}"));
            }
        }
    }

    summary.consumed = c.offset();
    Ok(summary)
}
