use std::path::Path;

use tracing::warn;

use crate::domain::skeleton::{WRITABLE_DIRS, WRITABLE_MODE};
use crate::ports::PermissionSetter;

pub const PERMISSION_WARNING: &str =
    "You should verify that the \"storage\" and \"bootstrap/cache\" directories are writable.";

/// Make the runtime-writable directories group writable.
///
/// Never fails: returns a warning for the user when any directory could not
/// be updated.
pub fn normalize(permissions: &dyn PermissionSetter, target: &Path) -> Option<String> {
    let mut failed = false;
    for dir in WRITABLE_DIRS {
        let path = target.join(dir);
        if let Err(e) = permissions.set_mode_recursive(&path, WRITABLE_MODE) {
            warn!(path = %path.display(), error = %e, "could not update permissions");
            failed = true;
        }
    }
    failed.then(|| PERMISSION_WARNING.to_string())
}
