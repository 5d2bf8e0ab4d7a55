//! Whole-file replacement without partially written results.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::AppError;

/// Write `content` to a temporary file beside `path`, then persist it over `path`.
///
/// The temporary file is removed when any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), AppError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| AppError::write(path, e))?;
    temp.write_all(content).map_err(|e| AppError::write(path, e))?;
    temp.as_file().sync_all().map_err(|e| AppError::write(path, e))?;
    temp.persist(path).map_err(|e| AppError::write(path, e.error))?;
    Ok(())
}
