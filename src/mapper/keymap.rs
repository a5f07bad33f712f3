//! Insertion-ordered `key → path` mapping.
//!
//! Backed by `serde_json::Map` with `preserve_order`, so serialized output
//! lists keys in the order they were first seen. Replacing the value of an
//! existing key keeps the key at its original position.

use serde::Serialize;
use serde_json::{Map, Value};

/// Logical key → hashed output path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyMap(Map<String, Value>);

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path for `key`, returning the path it replaced (if any).
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) -> Option<String> {
        match self.0.insert(key.into(), Value::String(path.into())) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(key, path)| (key.as_str(), path.as_str().unwrap_or_default()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Apply every entry of `other` on top of `self`; `other` wins on shared keys.
    pub fn overlay(&mut self, other: &KeyMap) {
        for (key, path) in &other.0 {
            self.0.insert(key.clone(), path.clone());
        }
    }

    /// Raw JSON view, used by the serializing formatters.
    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, path) in iter {
            map.insert(key, path);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_returns_replaced_path() {
        let mut map = KeyMap::new();
        assert_eq!(map.insert("app", "dist/css/app_a.css"), None);
        assert_eq!(
            map.insert("app", "dist/css/app_b.css").as_deref(),
            Some("dist/css/app_a.css")
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("app"), Some("dist/css/app_b.css"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut map = KeyMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_overlay_other_wins_and_appends() {
        let mut base: KeyMap = [("shared", "css"), ("style", "css")].into_iter().collect();
        let top: KeyMap = [("main", "js"), ("shared", "js")].into_iter().collect();
        base.overlay(&top);

        let entries: Vec<_> = base.iter().collect();
        assert_eq!(
            entries,
            [("shared", "js"), ("style", "css"), ("main", "js")]
        );
    }
}
