//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::format::Processor;

/// Map hashed bundle outputs to stable asset keys
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "assetkey.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write version files for a finished build
    #[command(visible_alias = "c")]
    Collect {
        #[command(flatten)]
        args: CollectArgs,
    },
}

/// Arguments of the collect command. Every option overrides the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct CollectArgs {
    /// Build output directory holding `css/` and `js/`
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Read emitted filenames from stdin (one per line) instead of scanning
    #[arg(long)]
    pub stdin: bool,

    /// Write a single merged file instead of css_/js_ files
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub merge: Option<bool>,

    /// Separator between logical name and hash
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Prefix added to every key
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Directory the version files are written to
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out: Option<PathBuf>,

    /// Base name of the version files
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Extension of the version files
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Serialization of the version files
    #[arg(short = 'P', long, value_enum)]
    pub processor: Option<Processor>,

    /// Fail when two files produce the same key
    #[arg(long)]
    pub strict: bool,

    /// Print the files instead of writing them
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
