// crates/wirebin-cli/src/cmd/flip.rs

use anyhow::Context;
use clap::{Args, ValueEnum};
use wirebin_core::fixed::{flip_int_endianness, flip_long_endianness, flip_short_endianness};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Args, Debug)]
pub struct FlipArgs {
    #[arg(long, value_enum)]
    pub width: Width,

    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

pub fn run(args: FlipArgs) -> anyhow::Result<()> {
    println!("{}", flip(args.width, &args.value)?);
    Ok(())
}

pub fn flip(width: Width, text: &str) -> anyhow::Result<String> {
    let text = text.trim();
    let bad = || format!("{text:?} is not a {width:?} value");
    let out = match width {
        Width::W16 => flip_short_endianness(text.parse().with_context(bad)?).to_string(),
        Width::W32 => flip_int_endianness(text.parse().with_context(bad)?).to_string(),
        Width::W64 => flip_long_endianness(text.parse().with_context(bad)?).to_string(),
    };
    Ok(out)
}
