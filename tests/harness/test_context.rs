//! Shared testing harness for `larapress` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI is invoked from.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `larapress` binary within the work directory.
    ///
    /// Toolchain and archive overrides from the caller's environment are cleared.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("larapress").expect("Failed to locate larapress binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("LARAPRESS_ARCHIVE_URL")
            .env_remove("LARAPRESS_PHP")
            .env_remove("LARAPRESS_COMPOSER")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Path to a project directory inside the work directory.
    pub(crate) fn project(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Write an executable shell script under the temp root and return its path.
    #[cfg(unix)]
    pub(crate) fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
        path
    }

    /// Number of temporary archives left in the work directory.
    pub(crate) fn leftover_archives(&self) -> usize {
        fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".zip"))
            .count()
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}
