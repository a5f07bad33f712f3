//! Turn category mappings into the set of files to emit.

use super::{Category, CategoryMappings, KeyMap, MapError};
use crate::config::MapperConfig;
use crate::format::Formatter;

/// A mapping and the file name it will be written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub mapping: KeyMap,
}

/// A serialized [`OutputFile`], ready for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: String,
    pub contents: String,
}

/// Files produced by one invocation, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSet {
    files: Vec<OutputFile>,
}

impl OutputSet {
    pub fn files(&self) -> &[OutputFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by name.
    pub fn get(&self, name: &str) -> Option<&OutputFile> {
        self.files.iter().find(|file| file.name == name)
    }

    /// Serialize every mapping through `formatter`.
    ///
    /// # Errors
    ///
    /// Returns the first formatter failure.
    pub fn render(&self, formatter: &dyn Formatter) -> Result<Vec<RenderedFile>, MapError> {
        self.files
            .iter()
            .map(|file| {
                Ok(RenderedFile {
                    name: file.name.clone(),
                    contents: formatter.format(&file.mapping)?,
                })
            })
            .collect()
    }
}

/// Decide which files to emit.
///
/// - merge: `<filename>.<extension>` holding css overlaid by js
/// - otherwise: `css_<filename>.<extension>` and `js_<filename>.<extension>`
pub fn finalize(mappings: CategoryMappings, config: &MapperConfig) -> OutputSet {
    let files = if config.merge {
        vec![OutputFile {
            name: format!("{}.{}", config.filename, config.extension),
            mapping: mappings.merged(),
        }]
    } else {
        Category::ALL
            .into_iter()
            .map(|category| OutputFile {
                name: category.output_name(&config.filename, &config.extension),
                mapping: mappings.get(category).clone(),
            })
            .collect()
    };

    OutputSet { files }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Processor;

    fn sample() -> CategoryMappings {
        let css: KeyMap = [("shared", "dist/css/shared_1.css"), ("css/app", "dist/css/app_2.css")]
            .into_iter()
            .collect();
        let js: KeyMap = [("shared", "dist/js/shared_3.js"), ("js/main", "dist/js/main_4.js")]
            .into_iter()
            .collect();
        CategoryMappings::from_parts(css, js)
    }

    #[test]
    fn test_split_files_by_default() {
        let set = finalize(sample(), &MapperConfig::default());
        let names: Vec<_> = set.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["css_version.json", "js_version.json"]);

        let css = &set.get("css_version.json").unwrap().mapping;
        assert_eq!(css.len(), 2);
        assert!(css.keys().all(|k| !k.starts_with("js/")));
        assert_eq!(css.get("shared"), Some("dist/css/shared_1.css"));

        let js = &set.get("js_version.json").unwrap().mapping;
        assert_eq!(js.len(), 2);
        assert_eq!(js.get("shared"), Some("dist/js/shared_3.js"));
    }

    #[test]
    fn test_merge_single_file_js_wins() {
        let config = MapperConfig {
            merge: true,
            ..MapperConfig::default()
        };
        let set = finalize(sample(), &config);
        assert_eq!(set.len(), 1);

        let file = &set.files()[0];
        assert_eq!(file.name, "version.json");
        assert_eq!(file.mapping.len(), 3);
        assert_eq!(file.mapping.get("shared"), Some("dist/js/shared_3.js"));
    }

    #[test]
    fn test_custom_filename_and_extension() {
        let config = MapperConfig {
            filename: "assets".into(),
            extension: "toml".into(),
            ..MapperConfig::default()
        };
        let set = finalize(CategoryMappings::default(), &config);
        assert!(set.get("css_assets.toml").is_some());
        assert!(set.get("js_assets.toml").is_some());
        // empty categories still produce a file
        assert!(set.files().iter().all(|f| f.mapping.is_empty()));
    }

    #[test]
    fn test_render_is_deterministic() {
        let set = finalize(sample(), &MapperConfig::default());
        let first = set.render(&Processor::Json).unwrap();
        let second = set.render(&Processor::Json).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name, "css_version.json");
    }

    #[test]
    fn test_render_with_closure() {
        let set = finalize(sample(), &MapperConfig::default());
        let count = |map: &KeyMap| map.len().to_string();
        let rendered = set.render(&count).unwrap();
        assert_eq!(rendered[0].contents, "2");
    }
}
