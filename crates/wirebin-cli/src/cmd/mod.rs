// crates/wirebin-cli/src/cmd/mod.rs

pub mod fixed;
pub mod flip;
pub mod scan;
pub mod var;
