//! Map content-hashed bundle outputs to stable asset keys.
//!
//! After a bundler emits `css/app_ab12cd34.css`, the server side only knows
//! the asset as `css/app`. This crate scans the emitted names, derives a key
//! for each (the text before the hash separator, plus an optional prefix)
//! and writes small version files a template layer can read:
//!
//! ```json
//! {
//!   "css/app": "dist/css/app_ab12cd34.css"
//! }
//! ```
//!
//! - [`mapper`]: pure classification and merge logic
//! - [`format`]: mapping serializers
//! - [`writer`]: filesystem port
//! - [`hook`]: build pipeline callback tying the pieces together

pub mod cli;
pub mod config;
pub mod format;
pub mod hook;
pub mod logger;
pub mod mapper;
pub mod scan;
pub mod utils;
pub mod writer;

pub use config::{ConfigError, MapperConfig};
pub use format::{Formatter, Processor};
pub use hook::{BuildHook, HashCollector};
pub use mapper::{
    Category, CategoryMappings, CollisionPolicy, KeyMap, MapError, OutputSet, classify,
    compute_mappings, finalize,
};
pub use writer::{DiskWriter, FileWriter};
