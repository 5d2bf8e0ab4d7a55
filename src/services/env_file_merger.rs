//! Load, update and publish the environment file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ConfigurationPatch, EnvDocument};

use super::file_writer::write_atomic;

#[derive(Debug, Clone)]
pub struct EnvFileMerger {
    path: PathBuf,
    document: EnvDocument,
}

impl EnvFileMerger {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)
            .map_err(|source| AppError::EnvRead { path: path.to_path_buf(), source })?;
        Ok(Self { path: path.to_path_buf(), document: EnvDocument::new(text) })
    }

    pub fn document(&self) -> &EnvDocument {
        &self.document
    }

    /// See [`EnvDocument::set_key`] for which lines are replaceable.
    pub fn set_key(&mut self, key: &str, value: &str) -> &mut Self {
        if self.document.set_key(key, value) == 0 {
            debug!(key, path = %self.path.display(), "no replaceable line; key left unchanged");
        }
        self
    }

    /// Apply `patch` in order against the evolving text.
    pub fn update_all(&mut self, patch: &ConfigurationPatch) -> &mut Self {
        let rewritten = self.document.update_all(patch);
        debug!(rewritten, keys = patch.len(), path = %self.path.display(), "environment updated");
        self
    }

    /// Write the text back verbatim.
    pub fn publish(&self, path: &Path) -> Result<(), AppError> {
        write_atomic(path, self.document.as_str().as_bytes())
    }

    pub fn publish_in_place(&self) -> Result<(), AppError> {
        self.publish(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn updates_and_publishes_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "# app\nAPP_URL=http://localhost\nDB_PORT=3306\n").unwrap();

        EnvFileMerger::load(&path)
            .unwrap()
            .update_all(
                &ConfigurationPatch::<String>::new()
                    .with("APP_URL", "https://demo.dev")
                    .with("DB_PORT", "5432"),
            )
            .publish_in_place()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# app\nAPP_URL=https://demo.dev\nDB_PORT=3306\n"
        );
    }

    #[test]
    fn missing_file_is_an_env_read_error() {
        let dir = TempDir::new().unwrap();
        let err = EnvFileMerger::load(&dir.path().join(".env")).unwrap_err();
        assert!(matches!(err, AppError::EnvRead { .. }));
    }
}
