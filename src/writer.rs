//! Filesystem writer port and its disk adapter.

use std::fs;
use std::path::{Path, PathBuf};

use crate::mapper::{MapError, RenderedFile};

/// Persists rendered mapping files.
pub trait FileWriter {
    /// Write `contents` to `path`, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Io`] naming the path that failed.
    fn write(&self, path: &Path, contents: &str) -> Result<(), MapError>;
}

/// Writes to the real filesystem, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWriter;

impl FileWriter for DiskWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<(), MapError> {
        let io_err = |source| MapError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, contents).map_err(io_err)
    }
}

/// Write every rendered file into `dir`, stopping at the first failure.
///
/// Returns the written paths in order.
pub fn write_output_set(
    writer: &dyn FileWriter,
    dir: &Path,
    files: &[RenderedFile],
) -> Result<Vec<PathBuf>, MapError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        writer.write(&path, &file.contents)?;
        crate::debug!("version"; "wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::io::{Error, ErrorKind};

    /// Keeps writes in memory.
    #[derive(Default)]
    pub struct MemoryWriter {
        pub files: RefCell<Vec<(PathBuf, String)>>,
    }

    impl FileWriter for MemoryWriter {
        fn write(&self, path: &Path, contents: &str) -> Result<(), MapError> {
            self.files
                .borrow_mut()
                .push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    /// Fails every write with `PermissionDenied`.
    pub struct FailingWriter;

    impl FileWriter for FailingWriter {
        fn write(&self, path: &Path, _contents: &str) -> Result<(), MapError> {
            Err(MapError::Io {
                path: path.to_path_buf(),
                source: Error::new(ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingWriter, MemoryWriter};
    use super::*;
    use tempfile::TempDir;

    fn rendered(name: &str, contents: &str) -> RenderedFile {
        RenderedFile {
            name: name.into(),
            contents: contents.into(),
        }
    }

    #[test]
    fn test_disk_writer_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("server/config/css_version.json");

        DiskWriter.write(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_disk_writer_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(&path, "old contents that are longer").unwrap();

        DiskWriter.write(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_disk_writer_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        // A regular file where a directory is expected.
        let blocker = dir.path().join("server");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config/version.json");

        let err = DiskWriter.write(&path, "{}").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }

    #[test]
    fn test_write_output_set_order() {
        let writer = MemoryWriter::default();
        let files = [rendered("css_version.json", "a"), rendered("js_version.json", "b")];

        let written = write_output_set(&writer, Path::new("/site/server/config"), &files).unwrap();
        assert_eq!(
            written,
            [
                PathBuf::from("/site/server/config/css_version.json"),
                PathBuf::from("/site/server/config/js_version.json"),
            ]
        );
        assert_eq!(writer.files.borrow()[1].1, "b");
    }

    #[test]
    fn test_write_output_set_stops_at_first_failure() {
        let files = [rendered("css_version.json", "a"), rendered("js_version.json", "b")];
        let err = write_output_set(&FailingWriter, Path::new("/ro"), &files).unwrap_err();
        match err {
            MapError::Io { path, .. } => assert!(path.ends_with("css_version.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
