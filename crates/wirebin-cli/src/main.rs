// crates/wirebin-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "wirebin")]
#[command(about = "Inspect and produce fixed-width and varint wire bytes", long_about = None)]
pub struct Cli {
    /// Debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// VarInt / VarLong encode and decode
    Var(cmd::var::VarArgs),

    /// Fixed-width field encode and decode (byte..double, BE/LE)
    Fixed(cmd::fixed::FixedArgs),

    /// Decode a file of back-to-back varints
    Scan(cmd::scan::ScanArgs),

    /// Swap the byte order of a 16/32/64-bit value
    Flip(cmd::flip::FlipArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.cmd {
        Commands::Var(args) => cmd::var::run(args),
        Commands::Fixed(args) => cmd::fixed::run(args),
        Commands::Scan(args) => cmd::scan::run(args),
        Commands::Flip(args) => cmd::flip::run(args),
    }
}
