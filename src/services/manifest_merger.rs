//! Load, merge and publish the dependency manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::{AppError, ConfigurationPatch, ManifestDocument, ManifestError};

use super::file_writer::write_atomic;

/// Holds a parsed manifest between `load` and `publish`.
///
/// No file handle is kept open; the file is read once and written once.
#[derive(Debug, Clone)]
pub struct ManifestMerger {
    path: PathBuf,
    document: ManifestDocument,
}

impl ManifestMerger {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|e| AppError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let document = ManifestDocument::parse(&text).map_err(|e| parse_error(path, e))?;
        Ok(Self { path: path.to_path_buf(), document })
    }

    pub fn document(&self) -> &ManifestDocument {
        &self.document
    }

    pub fn merge_section(
        &mut self,
        section: &str,
        patch: ConfigurationPatch<Value>,
    ) -> Result<&mut Self, AppError> {
        debug!(section, keys = patch.len(), "merging manifest section");
        self.document.merge_section(section, patch).map_err(|e| parse_error(&self.path, e))?;
        Ok(self)
    }

    pub fn merge_sections(
        &mut self,
        sections: ConfigurationPatch<ConfigurationPatch<Value>>,
    ) -> Result<&mut Self, AppError> {
        for (section, patch) in sections {
            self.merge_section(&section, patch)?;
        }
        Ok(self)
    }

    /// Write the document to `path`, replacing the file atomically.
    ///
    /// The in-memory document is unaffected by a failed write.
    pub fn publish(&self, path: &Path) -> Result<(), AppError> {
        let rendered = self.document.render().map_err(|e| parse_error(path, e))?;
        write_atomic(path, rendered.as_bytes())
    }

    /// Publish back to the file the manifest was loaded from.
    pub fn publish_in_place(&self) -> Result<(), AppError> {
        self.publish(&self.path)
    }
}

fn parse_error(path: &Path, err: ManifestError) -> AppError {
    AppError::ManifestParse { path: path.to_path_buf(), details: err.to_string() }
}
