use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

/// Writes a fixed set of files instead of reading the archive.
pub struct FakeExtractor {
    files: Vec<(String, String)>,
    failure: Option<String>,
    pub calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeExtractor {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(details: &str) -> Self {
        Self {
            files: Vec::new(),
            failure: Some(details.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArchiveExtractor for FakeExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), AppError> {
        self.calls.lock().unwrap().push((archive.to_path_buf(), destination.to_path_buf()));

        if let Some(details) = &self.failure {
            return Err(AppError::Extract {
                archive: archive.to_path_buf(),
                target: destination.to_path_buf(),
                details: details.clone(),
            });
        }

        for (relative, content) in &self.files {
            let path = destination.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
