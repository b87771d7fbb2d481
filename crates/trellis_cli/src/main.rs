// SPDX-License-Identifier: MIT OR Apache-2.0
//! `trellis` - geometry node scenes at the command line.
//!
//! A small front end over the Trellis crates:
//! - Scene files on disk (RON)
//! - JSON snapshot export and import
//! - Pull-based node evaluation
//!
//! Logging goes to stderr and is controlled through `RUST_LOG`;
//! command results print to stdout.

mod commands;
mod demo;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();
    if let Err(e) = commands::run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
