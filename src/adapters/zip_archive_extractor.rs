//! Zip extraction for downloaded skeleton archives.

use std::fs::{self, File};
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveExtractor;

impl ZipArchiveExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for ZipArchiveExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), AppError> {
        let extract_error = |details: String| AppError::Extract {
            archive: archive.to_path_buf(),
            target: destination.to_path_buf(),
            details,
        };

        if destination.exists() && !destination.is_dir() {
            return Err(extract_error("destination exists and is not a directory".into()));
        }

        let file = File::open(archive).map_err(|e| extract_error(e.to_string()))?;
        let mut zip = ZipArchive::new(file).map_err(|e| extract_error(e.to_string()))?;
        debug!(entries = zip.len(), destination = %destination.display(), "extracting archive");

        fs::create_dir_all(destination).map_err(|e| extract_error(e.to_string()))?;
        zip.extract(destination).map_err(|e| extract_error(e.to_string()))?;
        Ok(())
    }
}
