//! Utility modules shared across the tool.

pub mod path;
