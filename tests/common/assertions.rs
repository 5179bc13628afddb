//! Custom assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file exists in the staging directory.
///
/// # Example
/// ```ignore
/// assert_staged!(env, "viewer.js");
/// ```
#[macro_export]
macro_rules! assert_staged {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path("build").join($path);
        assert!(
            full_path.exists(),
            "Expected '{}' in build/, but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files(&$env.project_path("build")).join("\n  ")
        );
    };
}

/// Assert that command output contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "error:");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}', but it doesn't.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}
