//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Lexical normalization and relative paths (`clean_path`, `relative_path`, `to_slash`)

pub mod fs;

pub use fs::{clean_path, normalize_path, relative_path, to_slash};
