//! Build pipeline integration.
//!
//! A host pipeline calls [`BuildHook::on_build_complete`] once per finished
//! build. [`HashCollector`] is the stock implementation: it maps the emitted
//! filenames, renders each mapping and writes the version files.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, MapperConfig};
use crate::format::Formatter;
use crate::log;
use crate::mapper::{MapError, RenderedFile, compute_mappings};
use crate::utils::path::{clean_path, normalize_path, relative_path, to_slash};
use crate::writer::{DiskWriter, FileWriter, write_output_set};

/// Callback invoked by a build pipeline after all outputs are emitted.
pub trait BuildHook {
    /// `output_dir` is the build's output root; `filenames` are the emitted
    /// files relative to it, in emission order.
    ///
    /// # Errors
    ///
    /// Any failure aborts the build step; nothing is retried.
    fn on_build_complete(&self, output_dir: &Path, filenames: &[String]) -> Result<(), MapError>;
}

/// Writes version files mapping logical asset keys to hashed outputs.
pub struct HashCollector {
    config: MapperConfig,
    base_dir: PathBuf,
    formatter: Box<dyn Formatter>,
    writer: Box<dyn FileWriter>,
}

impl HashCollector {
    /// Validate `config` and build a collector writing to disk.
    ///
    /// `base_dir` stands in for the working directory: relative output
    /// paths and mapping values are resolved against it. A relative
    /// `base_dir` is anchored at the process working directory first.
    pub fn new(config: MapperConfig, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_dir = base_dir.into();
        let base_dir = std::path::absolute(&base_dir)
            .map(|path| clean_path(&path))
            .map_err(|err| ConfigError::Io(base_dir, err))?;
        Ok(Self {
            formatter: Box::new(config.processor),
            config,
            base_dir,
            writer: Box::new(DiskWriter),
        })
    }

    /// Replace the configured processor with a custom formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replace the disk writer.
    pub fn with_writer(mut self, writer: impl FileWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// `output_dir` as seen from the base directory, `/`-joined.
    pub fn relative_dir(&self, output_dir: &Path) -> String {
        let output_dir = normalize_path(output_dir, &self.base_dir);
        to_slash(&relative_path(&self.base_dir, &output_dir))
    }

    /// Absolute directory the version files are written to.
    pub fn target_dir(&self) -> PathBuf {
        normalize_path(&self.config.output_path, &self.base_dir)
    }

    /// Compute and render the version files without writing them.
    pub fn preview(
        &self,
        output_dir: &Path,
        filenames: &[String],
    ) -> Result<Vec<RenderedFile>, MapError> {
        let relative_dir = self.relative_dir(output_dir);
        let output_set = compute_mappings(filenames, &relative_dir, &self.config)?;
        output_set.render(self.formatter.as_ref())
    }
}

impl BuildHook for HashCollector {
    fn on_build_complete(&self, output_dir: &Path, filenames: &[String]) -> Result<(), MapError> {
        let rendered = self.preview(output_dir, filenames)?;
        let written = write_output_set(self.writer.as_ref(), &self.target_dir(), &rendered)?;

        let names: Vec<_> = written
            .iter()
            .map(|path| relative_path(&self.base_dir, path).display().to_string())
            .collect();
        log!("version"; "version file is generated: {}", names.join(", "));
        Ok(())
    }
}
