//! Build Result
//!
//! What a successful build produced.

use std::path::PathBuf;

use crate::domain::value_objects::ContentHash;
use crate::infrastructure::{ArchiveSummary, CopiedAsset};

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Source files resolved from `tsconfig.json`, relative to its directory
    pub source_files: Vec<PathBuf>,
    /// Bundle files, in entry-point order
    pub bundles: Vec<PathBuf>,
    pub assets: Vec<CopiedAsset>,
    pub archive: ArchiveSummary,
}

impl BuildReport {
    pub fn archive_path(&self) -> &PathBuf {
        &self.archive.path
    }

    pub fn digest(&self) -> &ContentHash {
        &self.archive.digest
    }

    /// Entry names inside the archive, sorted
    pub fn archive_entries(&self) -> &[String] {
        &self.archive.entries
    }
}
