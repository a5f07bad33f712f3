//! Classify output filenames into per-category mappings.

use serde::{Deserialize, Serialize};

use super::{Category, KeyMap, MapError, key::logical_key};
use crate::config::MapperConfig;

/// What to do when two filenames produce the same key in one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later filename replaces the earlier one.
    #[default]
    Overwrite,
    /// First collision aborts collection with [`MapError::KeyCollision`].
    Reject,
}

/// A key whose path was replaced by a later filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub category: Category,
    pub key: String,
    pub previous: String,
    pub current: String,
}

/// One mapping per category, plus every overwrite seen while building them.
#[derive(Debug, Clone, Default)]
pub struct CategoryMappings {
    css: KeyMap,
    js: KeyMap,
    collisions: Vec<Collision>,
}

impl CategoryMappings {
    /// Build from already collected mappings.
    pub fn from_parts(css: KeyMap, js: KeyMap) -> Self {
        Self {
            css,
            js,
            collisions: Vec::new(),
        }
    }

    pub fn get(&self, category: Category) -> &KeyMap {
        match category {
            Category::Css => &self.css,
            Category::Js => &self.js,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut KeyMap {
        match category {
            Category::Css => &mut self.css,
            Category::Js => &mut self.js,
        }
    }

    pub fn css(&self) -> &KeyMap {
        &self.css
    }

    pub fn js(&self) -> &KeyMap {
        &self.js
    }

    /// Overwrites in input order. Empty when every key was unique.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Union of all categories in [`Category::ALL`] order.
    pub fn merged(&self) -> KeyMap {
        let mut merged = KeyMap::new();
        for category in Category::ALL {
            merged.overlay(self.get(category));
        }
        merged
    }
}

/// Sort `filenames` into css/js mappings.
///
/// Each filename is checked against every category on its own. A match
/// stores `prefix + substring_before(name, separator)` → `relative_dir/name`.
/// Names matching no category are skipped without notice. Input order
/// decides which path survives a key collision: the last one wins.
///
/// Listing the same filename twice is not a collision since the path does
/// not change.
///
/// # Errors
///
/// Only under [`CollisionPolicy::Reject`], on the first collision.
pub fn classify<I, S>(
    filenames: I,
    relative_dir: &str,
    config: &MapperConfig,
) -> Result<CategoryMappings, MapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mappings = CategoryMappings::default();

    for filename in filenames {
        let filename = filename.as_ref();
        for category in Category::ALL {
            if !category.matches(filename) {
                continue;
            }

            let key = logical_key(filename, &config.separator, &config.prefix);
            let path = format!("{relative_dir}/{filename}");

            let Some(previous) = mappings.get_mut(category).insert(key.clone(), path.clone())
            else {
                continue;
            };
            if previous == path {
                continue;
            }

            crate::debug!("collect"; "{} key `{}` now points to {}", category, key, path);
            let collision = Collision {
                category,
                key,
                previous,
                current: path,
            };
            if config.collisions == CollisionPolicy::Reject {
                return Err(MapError::KeyCollision {
                    category: collision.category,
                    key: collision.key,
                    previous: collision.previous,
                    current: collision.current,
                });
            }
            mappings.collisions.push(collision);
        }
    }

    Ok(mappings)
}
