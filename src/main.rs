//! assetkey - write version files for content-hashed build outputs.

use anyhow::Result;
use assetkey::cli::{Cli, Commands, collect::run_collect};
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Collect { args } => run_collect(&cli, args),
    }
}
