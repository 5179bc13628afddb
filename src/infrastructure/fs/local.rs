//! Local File System Operations
//!
//! Directory reset, copying, and sorted listing for the staging directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{BuildError, BuildResult};

/// Remove a directory tree. Returns whether it existed.
pub fn remove_dir_if_exists(path: &Path) -> BuildResult<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BuildError::fs(path, e)),
    }
}

/// Remove a file. Returns whether it existed.
pub fn remove_file_if_exists(path: &Path) -> BuildResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BuildError::fs(path, e)),
    }
}

/// Delete `path` if present and create it again, empty
pub fn reset_dir(path: &Path) -> BuildResult<()> {
    remove_dir_if_exists(path)?;
    fs::create_dir_all(path).map_err(|e| BuildError::fs(path, e))
}

/// Copy one file, creating the destination's parent directories
///
/// A missing source is reported as `MissingAsset`.
pub fn copy_file(from: &Path, to: &Path) -> BuildResult<()> {
    if !from.is_file() {
        return Err(BuildError::MissingAsset {
            path: from.to_path_buf(),
        });
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::fs(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| BuildError::fs(from, e))?;
    Ok(())
}

/// Copy a directory tree. Returns the destination paths of copied files.
pub fn copy_dir_all(from: &Path, to: &Path) -> BuildResult<Vec<PathBuf>> {
    if !from.is_dir() {
        return Err(BuildError::MissingAsset {
            path: from.to_path_buf(),
        });
    }

    fs::create_dir_all(to).map_err(|e| BuildError::fs(to, e))?;
    let mut copied = Vec::new();
    for rel in list_files(from)? {
        let dest = to.join(&rel);
        copy_file(&from.join(&rel), &dest)?;
        copied.push(dest);
    }
    Ok(copied)
}

/// All regular files below `root`, relative to it, sorted by path.
///
/// Hidden files are included and ignore files are not consulted.
pub fn list_files(root: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| BuildError::fs(root, io::Error::other(e.to_string())))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// Lexically drop `.` components and fold `dir/..` pairs, so `./ts-out`,
/// `ts-out`, and `src/../ts-out` compare equal. Symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path with `/` separators, as used in globs and archive entries
pub fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reset_dir_clears_stale_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("build");
        fs::create_dir_all(out.join("old")).unwrap();
        fs::write(out.join("old/stale.js"), "x").unwrap();

        reset_dir(&out).unwrap();

        assert!(out.is_dir());
        assert!(list_files(&out).unwrap().is_empty());
    }

    #[test]
    fn reset_dir_creates_missing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/build");
        reset_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn remove_if_exists_is_non_fatal_when_absent() {
        let dir = tempdir().unwrap();
        assert!(!remove_file_if_exists(&dir.path().join("none.zip")).unwrap());
        assert!(!remove_dir_if_exists(&dir.path().join("none")).unwrap());

        let file = dir.path().join("a.zip");
        fs::write(&file, "z").unwrap();
        assert!(remove_file_if_exists(&file).unwrap());
        assert!(!file.exists());
    }

    #[test]
    fn copy_file_missing_source_is_missing_asset() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("nope.css"), &dir.path().join("out.css")).unwrap_err();
        assert!(matches!(err, BuildError::MissingAsset { .. }));
    }

    #[test]
    fn copy_dir_all_preserves_tree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("_locales");
        fs::create_dir_all(src.join("en")).unwrap();
        fs::create_dir_all(src.join("de")).unwrap();
        fs::write(src.join("en/messages.json"), "{}").unwrap();
        fs::write(src.join("de/messages.json"), "{}").unwrap();

        let dest = dir.path().join("build/_locales");
        let copied = copy_dir_all(&src, &dest).unwrap();

        assert_eq!(copied.len(), 2);
        assert!(dest.join("en/messages.json").is_file());
        assert!(dest.join("de/messages.json").is_file());
    }

    #[test]
    fn list_files_is_sorted_and_includes_hidden() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/z.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from(".hidden"),
                PathBuf::from("a.txt"),
                PathBuf::from("b/z.txt"),
            ]
        );
    }

    #[test]
    fn normalize_and_slash_path() {
        assert_eq!(normalize(Path::new("./ts-out")), PathBuf::from("ts-out"));
        assert_eq!(normalize(Path::new("src/../ts-out")), PathBuf::from("ts-out"));
        assert_eq!(normalize(Path::new("/work/ext/.")), PathBuf::from("/work/ext"));
        assert_eq!(normalize(Path::new("/work/ext/..")), PathBuf::from("/work"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../shared/a.ts")), PathBuf::from("../shared/a.ts"));
        assert_eq!(normalize(Path::new(".")), PathBuf::new());
        assert_eq!(slash_path(Path::new("_locales/en/messages.json")), "_locales/en/messages.json");
        assert_eq!(slash_path(Path::new("./a/b")), "a/b");
    }
}
