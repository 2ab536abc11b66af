//! Digestmap - hash heterogeneous datasets into a keyed JSON digest map.

#![allow(dead_code)]

mod cli;
mod hash;
mod input;
mod logger;
mod record;
mod tracker;
mod utils;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::Cli;
use hash::HashRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // The algorithm name is validated before any input file is opened
    let registry = HashRegistry::new();
    let Some(algorithm) = registry.lookup(&cli.hash) else {
        bail!(
            "invalid hash `{}`. Possible values are {}",
            cli.hash,
            registry.names().join(", ")
        );
    };

    cli::run::run_hash(&cli, algorithm)
}
