//! Path normalization utilities.
//!
//! - `normalize_path` - make a path absolute against an explicit base
//! - `clean_path` - drop `.` and fold `..` without touching the disk
//! - `relative_path` - path from one directory to another
//! - `to_slash` - `/`-joined string form used inside mapping values

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `base` and clean it lexically.
///
/// An absolute `path` ignores `base`.
///
/// # Example
/// ```ignore
/// normalize_path(Path::new("./server/config"), Path::new("/site"))
///     // -> /site/server/config
/// ```
#[inline]
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    clean_path(&base.join(path))
}

/// Remove `.` components and resolve `..` against preceding normal components.
///
/// Leading `..` on a relative path are kept; `..` above the root is dropped.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Path that leads from directory `from` to `to`.
///
/// Both paths are cleaned first. Equal paths give an empty `PathBuf`.
///
/// # Example
/// ```text
/// from: /site          to: /site/dist     -> dist
/// from: /site/app      to: /site/out      -> ../out
/// from: /site          to: /site          -> (empty)
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = clean_path(from);
    let to = clean_path(to);
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    rel
}

/// Join path components with `/` regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
