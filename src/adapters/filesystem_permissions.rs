use std::fs;
use std::io;
use std::path::Path;

use crate::ports::PermissionSetter;

/// Applies unix modes directly on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemPermissions;

impl PermissionSetter for FilesystemPermissions {
    fn set_mode_recursive(&self, path: &Path, mode: u32) -> io::Result<()> {
        let metadata = fs::symlink_metadata(path)?;
        if metadata.file_type().is_symlink() {
            return Ok(());
        }

        set_mode(path, mode)?;

        if metadata.is_dir() {
            for entry in fs::read_dir(path)? {
                self.set_mode_recursive(&entry?.path(), mode)?;
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
