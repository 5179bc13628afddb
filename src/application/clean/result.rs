//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Paths that existed and were deleted
    pub deleted: Vec<PathBuf>,
    /// Paths that were already absent
    pub missing: Vec<PathBuf>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one target
    pub fn record(&mut self, path: PathBuf, existed: bool) {
        if existed {
            self.deleted.push(path);
        } else {
            self.missing.push(path);
        }
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_splits_deleted_and_missing() {
        let mut result = CleanResult::new();
        result.record(PathBuf::from("build"), true);
        result.record(PathBuf::from("jsonview.zip"), false);

        assert_eq!(result.deleted, vec![PathBuf::from("build")]);
        assert_eq!(result.missing, vec![PathBuf::from("jsonview.zip")]);
        assert_eq!(result.deleted_count(), 1);
        assert!(!result.is_empty());
    }
}
