//! Fetch, extract and clean up the transient release archive.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::skeleton::ARCHIVE_PREFIX;
use crate::domain::{AppError, InstallerConfig, ReleaseChannel};
use crate::ports::{ArchiveExtractor, ArchiveFetcher};

/// Download the archive published for `channel`. Touches no files.
pub fn fetch(
    fetcher: &dyn ArchiveFetcher,
    config: &InstallerConfig,
    channel: ReleaseChannel,
) -> Result<Vec<u8>, AppError> {
    let url = config.archive_url(channel)?;
    debug!(%url, %channel, "resolved release archive");
    fetcher.fetch(url.as_str())
}

/// Name for the temporary archive, unique per run even within one directory.
pub fn archive_file_name() -> String {
    format!(
        "{}{}_{}.zip",
        ARCHIVE_PREFIX,
        Utc::now().format("%Y%m%d%H%M%S%f"),
        Uuid::new_v4().simple()
    )
}

/// Persist `bytes` under `working_dir` and unpack them into `target`.
///
/// Returns the temporary archive path for later cleanup. On failure the
/// archive is removed, while anything already unpacked into `target` stays.
pub fn extract(
    extractor: &dyn ArchiveExtractor,
    bytes: &[u8],
    working_dir: &Path,
    target: &Path,
) -> Result<PathBuf, AppError> {
    let archive = working_dir.join(archive_file_name());

    if let Err(e) = fs::write(&archive, bytes) {
        return Err(AppError::Extract {
            archive,
            target: target.to_path_buf(),
            details: format!("could not write archive: {}", e),
        });
    }

    if let Err(err) = extractor.extract(&archive, target) {
        clean_up(&archive);
        return Err(err);
    }
    Ok(archive)
}

/// Best-effort removal; failures are only logged.
pub fn clean_up(archive: &Path) {
    if let Err(e) = fs::remove_file(archive) {
        debug!(archive = %archive.display(), error = %e, "could not remove temporary archive");
    }
}
