//! Output Rendering
//!
//! Plain-text summaries printed after a successful command.

use std::path::Path;

use crate::application::{BuildReport, CleanResult};
use crate::domain::entities::ResolvedProject;
use crate::domain::value_objects::ConfigWarning;

/// Show `path` relative to `root` when it lies below it
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn render_build_summary(report: &BuildReport, root: &Path) -> String {
    format!(
        "Built {} bundle(s) and {} asset(s) from {} source file(s)\nWrote {} ({} entries, {})",
        report.bundles.len(),
        report.assets.len(),
        report.source_files.len(),
        display_path(report.archive_path(), root),
        report.archive_entries().len(),
        report.digest()
    )
}

pub fn render_check_summary(project: &ResolvedProject) -> String {
    format!(
        "Checked {} source file(s): no diagnostics",
        project.source_count()
    )
}

pub fn render_clean_summary(result: &CleanResult, root: &Path) -> String {
    if result.is_empty() {
        return "Nothing to clean".to_string();
    }
    let mut out = String::new();
    for path in &result.deleted {
        out.push_str(&format!("Removed {}\n", display_path(path, root)));
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn render_config_warning(warning: &ConfigWarning) -> String {
    format!("warning: {warning}")
}
