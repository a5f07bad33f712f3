//! Output categories selected by top-level directory.

use std::fmt;

/// Category of an emitted file, decided by its leading `<name>/` segment.
///
/// A filename is tested against every category independently, so the
/// same name can land in more than one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Css,
    Js,
}

impl Category {
    /// Application order. When merging, later categories win on shared keys.
    pub const ALL: [Category; 2] = [Category::Css, Category::Js];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Path prefix a filename must start with to belong here.
    pub const fn dir_prefix(self) -> &'static str {
        match self {
            Self::Css => "css/",
            Self::Js => "js/",
        }
    }

    #[inline]
    pub fn matches(self, filename: &str) -> bool {
        filename.starts_with(self.dir_prefix())
    }

    /// File name used for this category when mappings are kept separate.
    ///
    /// `css` + `version` + `json` → `css_version.json`
    pub fn output_name(self, filename: &str, extension: &str) -> String {
        format!("{}_{}.{}", self.name(), filename, extension)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_leading_directory_only() {
        assert!(Category::Css.matches("css/app_ab12.css"));
        assert!(!Category::Css.matches("static/css/app_ab12.css"));
        assert!(!Category::Css.matches("cssx/app.css"));
        assert!(Category::Js.matches("js/main_ff00.js"));
        assert!(!Category::Js.matches("json/data.json"));
        assert!(!Category::Js.matches("img/logo.png"));
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            Category::Css.output_name("version", "json"),
            "css_version.json"
        );
        assert_eq!(Category::Js.output_name("assets", "toml"), "js_assets.toml");
    }

    #[test]
    fn test_all_order() {
        assert_eq!(Category::ALL, [Category::Css, Category::Js]);
        assert_eq!(Category::Js.to_string(), "js");
    }
}
