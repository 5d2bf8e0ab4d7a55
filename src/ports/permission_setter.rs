use std::io;
use std::path::Path;

/// Port for changing filesystem modes.
pub trait PermissionSetter {
    /// Apply `mode` to `path` and, for directories, everything beneath it.
    fn set_mode_recursive(&self, path: &Path, mode: u32) -> io::Result<()>;
}
