use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::domain::skeleton::{self, LOCK_FILE, MANIFEST_FILE};
use crate::services::ManifestMerger;

/// Drop the skeleton's lockfile and register the LaraPress packages.
pub fn configure(target: &Path) -> Result<(), AppError> {
    remove_stale_lockfile(&target.join(LOCK_FILE))?;

    let mut merger = ManifestMerger::load(&target.join(MANIFEST_FILE))?;
    merger.merge_sections(skeleton::manifest_patch())?;
    merger.publish_in_place()
}

fn remove_stale_lockfile(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale lockfile");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(AppError::write(path, source)),
    }
}
