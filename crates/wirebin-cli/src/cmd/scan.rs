// crates/wirebin-cli/src/cmd/scan.rs

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::var::{decode_all, VarKindArg};

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File of back-to-back encoded values
    #[arg(long)]
    pub r#in: String,

    #[arg(long, value_enum, default_value_t = VarKindArg::Varint)]
    pub kind: VarKindArg,

    /// Decode 64-bit kinds through the arbitrary-precision path
    #[arg(long, default_value_t = false)]
    pub wide: bool,

    /// Only print the summary
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in).with_context(|| format!("read {}", args.r#in))?;
    info!(file = %args.r#in, bytes = bytes.len(), kind = ?args.kind, "scan");

    let quiet = args.quiet;
    let summary = decode_all(args.kind.into(), args.wide, &bytes, |offset, len, value| {
        if !quiet {
            println!("{offset} {len} {value}");
        }
    })?;

    eprintln!("--- scan ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("kind            = {:?}", args.kind);
    eprintln!("bytes           = {}", bytes.len());
    eprintln!("values          = {}", summary.values);
    eprintln!("consumed        = {}", summary.consumed);
    eprintln!("truncated_tail  = {}", summary.truncated);
    eprintln!("crc32           = {:08x}", crc32(&bytes));

    Ok(())
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
