//! Mapper configuration and `assetkey.toml` loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # MapperConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key           | Default             | Purpose                                  |
//! |---------------|---------------------|------------------------------------------|
//! | `separator`   | `_`                 | Text between logical name and hash       |
//! | `output_path` | `./server/config`   | Directory the version files go to        |
//! | `merge`       | `false`             | One merged file instead of css_/js_      |
//! | `filename`    | `version`           | Base name of the version files           |
//! | `extension`   | `json`              | Extension of the version files           |
//! | `processor`   | `json`              | `json`, `json-compact` or `toml`         |
//! | `prefix`      | empty               | Prepended to every key                   |
//! | `collisions`  | `overwrite`         | `overwrite` or `reject` duplicate keys   |

pub mod types;
mod util;

pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::CollectArgs;
use crate::format::Processor;
use crate::log;
use crate::mapper::CollisionPolicy;

// ============================================================================
// root configuration
// ============================================================================

/// Options of one mapping run. Immutable once handed to the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Separator between logical name and content hash.
    pub separator: String,

    /// Directory the version files are written to, relative to the base dir.
    pub output_path: PathBuf,

    /// Write one merged file instead of one per category.
    #[serde(alias = "is_merge")]
    pub merge: bool,

    /// Base name of the version files.
    pub filename: String,

    /// Extension of the version files (without the dot).
    pub extension: String,

    /// Serialization of each mapping.
    pub processor: Processor,

    /// Prepended to every key.
    pub prefix: String,

    /// Handling of keys produced by more than one file.
    pub collisions: CollisionPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            separator: "_".into(),
            output_path: PathBuf::from("./server/config"),
            merge: false,
            filename: "version".into(),
            extension: "json".into(),
            processor: Processor::Json,
            prefix: String::new(),
            collisions: CollisionPolicy::Overwrite,
        }
    }
}

impl MapperConfig {
    pub const SEPARATOR: FieldPath = FieldPath::new("separator");
    pub const FILENAME: FieldPath = FieldPath::new("filename");
    pub const EXTENSION: FieldPath = FieldPath::new("extension");

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown keys are reported and ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Locate `config_name` upward from `cwd` and load it.
    ///
    /// Returns the config and the base directory paths resolve against:
    /// the config file's parent, or `cwd` when no file exists.
    pub fn discover(config_name: &Path, cwd: &Path) -> Result<(Self, PathBuf), ConfigError> {
        match find_config_file(config_name, cwd) {
            Some(path) => {
                crate::debug!("config"; "using {}", path.display());
                let config = Self::from_path(&path)?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                Ok((config, root))
            }
            None => {
                crate::debug!("config"; "{} not found, using defaults", config_name.display());
                Ok((Self::default(), cwd.to_path_buf()))
            }
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply collect arguments from CLI. Given flags win over the file.
    pub fn apply_collect_args(&mut self, args: &CollectArgs) {
        Self::update_option(&mut self.merge, args.merge.as_ref());
        Self::update_option(&mut self.separator, args.separator.as_ref());
        Self::update_option(&mut self.prefix, args.prefix.as_ref());
        Self::update_option(&mut self.output_path, args.out.as_ref());
        Self::update_option(&mut self.filename, args.filename.as_ref());
        Self::update_option(&mut self.extension, args.extension.as_ref());
        Self::update_option(&mut self.processor, args.processor.as_ref());
        if args.strict {
            self.collisions = CollisionPolicy::Reject;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check every option, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.separator.is_empty() {
            diag.error_with_hint(
                Self::SEPARATOR,
                "must not be empty",
                "every key would collapse to the prefix; the default is `_`",
            );
        }
        if self.filename.is_empty() {
            diag.error(Self::FILENAME, "must not be empty");
        }
        if self.filename.contains(['/', '\\']) {
            diag.error_with_hint(
                Self::FILENAME,
                "must be a plain file name",
                "set the directory with `output_path`",
            );
        }
        if self.extension.is_empty() {
            diag.error(Self::EXTENSION, "must not be empty");
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}
