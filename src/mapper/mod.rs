//! Asset key mapping: the pure core of the tool.
//!
//! ```text
//! filenames ──classify──▶ CategoryMappings ──finalize──▶ OutputSet ──render──▶ text
//! ```
//!
//! Nothing here touches the filesystem; [`crate::hook`] wires the result to
//! a writer.

mod category;
mod collect;
mod error;
mod key;
mod keymap;
mod output;

pub use category::Category;
pub use collect::{CategoryMappings, Collision, CollisionPolicy, classify};
pub use error::MapError;
pub use key::{logical_key, substring_before};
pub use keymap::KeyMap;
pub use output::{OutputFile, OutputSet, RenderedFile, finalize};

use crate::config::MapperConfig;

/// Classify `filenames` and lay out the files to emit.
///
/// `relative_dir` is the build output directory as seen from the base
/// directory, joined with `/` (empty when they are the same).
///
/// # Errors
///
/// Only when `config.collisions` is [`CollisionPolicy::Reject`] and two
/// filenames share a key.
pub fn compute_mappings<I, S>(
    filenames: I,
    relative_dir: &str,
    config: &MapperConfig,
) -> Result<OutputSet, MapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mappings = classify(filenames, relative_dir, config)?;
    if !mappings.collisions().is_empty() {
        crate::debug!(
            "collect";
            "{} key(s) replaced by later files",
            mappings.collisions().len()
        );
    }
    Ok(finalize(mappings, config))
}
