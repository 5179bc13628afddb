//! Static asset staging
//!
//! Copies the configured files, directories, and icon matches into the
//! output directory, each under its own file name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::config::AssetsConfig;
use crate::error::{BuildError, BuildResult};

use super::local::{copy_dir_all, copy_file};

/// One copied file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Compile a file-name glob (`*` does not cross `/`)
pub fn file_name_matcher(pattern: &str) -> BuildResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| BuildError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Files directly inside `dir` whose name matches `pattern`, sorted.
///
/// A missing directory yields no matches.
pub fn match_files(dir: &Path, pattern: &str) -> BuildResult<Vec<PathBuf>> {
    let matcher = file_name_matcher(pattern)?;
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(BuildError::fs(dir, e)),
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::fs(dir, e))?;
        let path = entry.path();
        if path.is_file() && matcher.is_match(entry.file_name()) {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches)
}

/// Copy every configured asset from `root` into `output_dir`
pub fn copy_assets(
    root: &Path,
    assets: &AssetsConfig,
    output_dir: &Path,
) -> BuildResult<Vec<CopiedAsset>> {
    let mut copied = Vec::new();

    for file in &assets.files {
        let source = root.join(file);
        let destination = output_dir.join(file_name(&source)?);
        tracing::debug!(source = %source.display(), "copy asset");
        copy_file(&source, &destination)?;
        copied.push(CopiedAsset {
            source,
            destination,
        });
    }

    for dir in &assets.dirs {
        let source = root.join(dir);
        let destination = output_dir.join(file_name(&source)?);
        tracing::debug!(source = %source.display(), "copy asset directory");
        for dest in copy_dir_all(&source, &destination)? {
            let rel = dest.strip_prefix(&destination).unwrap_or(&dest);
            copied.push(CopiedAsset {
                source: source.join(rel),
                destination: dest.clone(),
            });
        }
    }

    for icon in match_files(&root.join(&assets.icon_dir), &assets.icon_glob)? {
        let destination = output_dir.join(file_name(&icon)?);
        copy_file(&icon, &destination)?;
        copied.push(CopiedAsset {
            source: icon,
            destination,
        });
    }

    Ok(copied)
}

fn file_name(path: &Path) -> BuildResult<&std::ffi::OsStr> {
    path.file_name().ok_or_else(|| BuildError::MissingAsset {
        path: path.to_path_buf(),
    })
}
