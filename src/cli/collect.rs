//! `collect` command: map a finished build and write its version files.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::{Cli, CollectArgs};
use crate::config::MapperConfig;
use crate::hook::{BuildHook, HashCollector};
use crate::scan::scan_output_dir;
use crate::utils::path::normalize_path;

/// Run the collect command.
///
/// The config file is looked up from the current directory; the directory
/// holding it becomes the base for `output_path` and mapping values.
pub fn run_collect(cli: &Cli, args: &CollectArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (config, root) = load_config(cli, args, &cwd)?;

    let output_dir = normalize_path(&args.output_dir, &cwd);
    let filenames = if args.stdin {
        read_filenames(io::stdin().lock()).context("Failed to read filenames from stdin")?
    } else {
        scan_output_dir(&output_dir)?
    };
    crate::debug!("collect"; "{} emitted files", filenames.len());

    let collector = HashCollector::new(config, root)?;
    if args.dry {
        let mut stdout = io::stdout().lock();
        for file in collector.preview(&output_dir, &filenames)? {
            writeln!(stdout, "# {}", file.name)?;
            writeln!(stdout, "{}", file.contents)?;
        }
        return Ok(());
    }

    collector.on_build_complete(&output_dir, &filenames)?;
    Ok(())
}

/// Turn on `--verbose` output, then find the config and apply CLI overrides.
fn load_config(cli: &Cli, args: &CollectArgs, cwd: &Path) -> Result<(MapperConfig, PathBuf)> {
    crate::logger::set_verbose(args.verbose);

    let (mut config, root) = MapperConfig::discover(&cli.config, cwd)?;
    config.apply_collect_args(args);
    Ok((config, root))
}

/// One filename per line; blank lines are skipped and `\` becomes `/`.
fn read_filenames(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.replace('\\', "/"));
        }
    }
    Ok(names)
}
