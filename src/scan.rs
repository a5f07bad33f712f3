//! Collect emitted filenames from a build output directory.

use std::fs;
use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use crate::mapper::MapError;
use crate::utils::path::to_slash;

/// List every regular file under `dir` as a `/`-joined relative name.
///
/// Hidden files are included. The result is sorted so that key collisions
/// resolve the same way on every run.
///
/// # Errors
///
/// Returns [`MapError::Io`] when `dir` is missing and [`MapError::Scan`]
/// when one of its entries cannot be read.
pub fn scan_output_dir(dir: &Path) -> Result<Vec<String>, MapError> {
    fs::metadata(dir).map_err(|source| MapError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .skip_hidden(false)
        .parallelism(Parallelism::Serial)
    {
        let entry = entry.map_err(|e| MapError::Scan(dir.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(dir).unwrap_or(&path);
        names.push(to_slash(rel));
    }

    names.sort();
    crate::debug!("scan"; "found {} files under {}", names.len(), dir.display());
    Ok(names)
}
