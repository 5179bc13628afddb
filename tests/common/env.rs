//! Test environment for isolated extbuild runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the extbuild binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create temp project"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_extbuild")),
        }
    }

    /// Project populated with the extension fixture
    pub fn with_extension() -> Self {
        let env = Self::new();
        super::fixtures::write_extension(env.root());
        env
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn read(&self, relative: &str) -> Vec<u8> {
        fs::read(self.project_path(relative)).expect("read project file")
    }

    /// Run extbuild from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root(), args)
    }

    /// Run extbuild from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute extbuild");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
