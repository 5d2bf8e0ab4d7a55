use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::PermissionSetter;

#[derive(Default)]
pub struct FakePermissions {
    fail: bool,
    pub calls: Mutex<Vec<(PathBuf, u32)>>,
}

impl FakePermissions {
    pub fn failing() -> Self {
        Self { fail: true, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(PathBuf, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PermissionSetter for FakePermissions {
    fn set_mode_recursive(&self, path: &Path, mode: u32) -> io::Result<()> {
        self.calls.lock().unwrap().push((path.to_path_buf(), mode));
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "operation not permitted"));
        }
        Ok(())
    }
}
