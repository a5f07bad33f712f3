//! Errors raised while collecting, rendering or writing mappings.

use std::path::PathBuf;
use thiserror::Error;

use super::Category;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error at `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan output directory `{0}`")]
    Scan(PathBuf, #[source] jwalk::Error),

    #[error("failed to format mapping: {0}")]
    Format(String),

    #[error(
        "duplicate {category} key `{key}`: `{current}` would replace `{previous}`"
    )]
    KeyCollision {
        category: Category,
        key: String,
        previous: String,
        current: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_path() {
        let err = MapError::Io {
            path: PathBuf::from("server/config/css_version.json"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("server/config/css_version.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_collision_display() {
        let err = MapError::KeyCollision {
            category: Category::Css,
            key: "css/app".into(),
            previous: "dist/css/app_aaa.css".into(),
            current: "dist/css/app_bbb.css".into(),
        };
        let display = err.to_string();
        assert!(display.contains("css key `css/app`"));
        assert!(display.contains("app_bbb.css"));
    }
}
