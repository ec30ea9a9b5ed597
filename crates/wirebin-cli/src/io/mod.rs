// crates/wirebin-cli/src/io/mod.rs

pub mod hex;
