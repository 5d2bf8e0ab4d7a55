use std::path::Path;

use crate::domain::AppError;

/// Port for unpacking a downloaded archive.
pub trait ArchiveExtractor {
    /// Unpack `archive` into `destination`, creating it if needed.
    ///
    /// Corrupt archives and filesystem faults are reported as `AppError::Extract`.
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), AppError>;
}
