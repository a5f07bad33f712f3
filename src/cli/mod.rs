//! Command-line interface module.

mod args;
pub mod collect;

pub use args::{Cli, CollectArgs, Commands};
