//! Zip archive writer
//!
//! Packs the contents of a directory at the archive root. Output is
//! deterministic: sorted entries, fixed timestamps and permissions.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::value_objects::ContentHash;
use crate::error::{BuildError, BuildResult};

use super::fs::{list_files, remove_file_if_exists, slash_path};

/// What was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Entry names in archive order
    pub entries: Vec<String>,
    pub digest: ContentHash,
}

/// Replace `archive_path` with a zip of every file below `source_dir`.
///
/// The previous archive is deleted first (absent is fine). The new one is
/// written beside it and renamed into place.
pub fn write_archive(source_dir: &Path, archive_path: &Path) -> BuildResult<ArchiveSummary> {
    remove_file_if_exists(archive_path)?;

    let parent = match archive_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| BuildError::fs(&parent, e))?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| BuildError::fs(&parent, e))?;
    let mut entries = Vec::new();
    {
        let mut writer = ZipWriter::new(temp.as_file_mut());
        for rel in list_files(source_dir)? {
            let name = slash_path(&rel);
            let source = source_dir.join(&rel);
            writer.start_file(name.clone(), options)?;
            let mut file = File::open(&source).map_err(|e| BuildError::fs(&source, e))?;
            io::copy(&mut file, &mut writer).map_err(|e| BuildError::fs(&source, e))?;
            entries.push(name);
        }
        writer.finish()?;
    }

    temp.persist(archive_path)
        .map_err(|e| BuildError::fs(archive_path, e.error))?;

    let bytes = fs::read(archive_path).map_err(|e| BuildError::fs(archive_path, e))?;
    Ok(ArchiveSummary {
        path: archive_path.to_path_buf(),
        entries,
        digest: ContentHash::from_bytes(&bytes),
    })
}
