//! Mapping serialization.
//!
//! A [`Formatter`] turns a [`KeyMap`] into file contents. Built-in choices
//! are selected through [`Processor`]; any `Fn(&KeyMap) -> String` works
//! too, which is how library callers plug in their own layout.

use serde::{Deserialize, Serialize};

use crate::mapper::{KeyMap, MapError};

/// Serialization strategy for a single mapping.
pub trait Formatter {
    /// Render `map` as text.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Format`] when the underlying serializer fails.
    fn format(&self, map: &KeyMap) -> Result<String, MapError>;
}

impl<F> Formatter for F
where
    F: Fn(&KeyMap) -> String,
{
    fn format(&self, map: &KeyMap) -> Result<String, MapError> {
        Ok(self(map))
    }
}

/// Built-in formatters selectable from config and CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Processor {
    /// Pretty JSON, two-space indent.
    #[default]
    Json,
    /// JSON on a single line.
    JsonCompact,
    /// Flat TOML table of quoted keys.
    Toml,
}

impl Formatter for Processor {
    fn format(&self, map: &KeyMap) -> Result<String, MapError> {
        let text = match self {
            Self::Json => serde_json::to_string_pretty(map.as_json())
                .map_err(|e| MapError::Format(e.to_string()))?,
            Self::JsonCompact => serde_json::to_string(map.as_json())
                .map_err(|e| MapError::Format(e.to_string()))?,
            Self::Toml => {
                toml::to_string(map.as_json()).map_err(|e| MapError::Format(e.to_string()))?
            }
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyMap {
        [
            ("css/app", "dist/css/app_ab12.css"),
            ("css/about", "dist/css/about_cd34.css"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_json_pretty_two_space_insertion_order() {
        let text = Processor::Json.format(&sample()).unwrap();
        assert_eq!(
            text,
            "{\n  \"css/app\": \"dist/css/app_ab12.css\",\n  \"css/about\": \"dist/css/about_cd34.css\"\n}"
        );
    }

    #[test]
    fn test_json_empty_map() {
        assert_eq!(Processor::Json.format(&KeyMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_json_compact() {
        let map: KeyMap = [("js/main", "dist/js/main_ff.js")].into_iter().collect();
        assert_eq!(
            Processor::JsonCompact.format(&map).unwrap(),
            r#"{"js/main":"dist/js/main_ff.js"}"#
        );
    }

    #[test]
    fn test_toml_round_trips_through_parser() {
        let text = Processor::Toml.format(&sample()).unwrap();
        let table: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(
            table.get("css/app").and_then(toml::Value::as_str),
            Some("dist/css/app_ab12.css")
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_closure_formatter() {
        let keys_only = |map: &KeyMap| map.keys().collect::<Vec<_>>().join("\n");
        assert_eq!(keys_only.format(&sample()).unwrap(), "css/app\ncss/about");
    }

    #[test]
    fn test_processor_from_config_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            processor: Processor,
        }
        let parsed: Wrapper = toml::from_str(r#"processor = "json-compact""#).unwrap();
        assert_eq!(parsed.processor, Processor::JsonCompact);
    }
}
