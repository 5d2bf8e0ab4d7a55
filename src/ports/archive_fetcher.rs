//! Release archive download port.

use crate::domain::AppError;

/// Port for retrieving a release archive.
pub trait ArchiveFetcher {
    /// Download the archive at `url`, returning its raw bytes.
    ///
    /// Transport and HTTP status failures are reported as `AppError::Fetch`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}
