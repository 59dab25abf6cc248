use std::io::ErrorKind;
use std::path::Path;

use super::targets::Target;
use crate::common::errors::UninstallError;
use crate::common::permissions::{self, Privilege};
use crate::common::safety;

/// Nothing at the path: either it is missing, or some parent component is
/// not a directory (running from inside the checkout, `./ssm` is a file).
fn is_missing(e: &std::io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

/// Remove a file, symlink or directory tree without following symlinks.
/// Returns `Ok(false)` when nothing was there.
pub fn remove_path(path: &Path) -> std::io::Result<bool> {
    let metadata = match path.symlink_metadata() {
        Ok(m) => m,
        Err(e) if is_missing(&e) => return Ok(false),
        Err(e) => return Err(e),
    };

    let result = if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(true),
        // Removed by someone else between the stat and the unlink
        Err(e) if is_missing(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Remove a target, escalating with sudo if its privilege allows.
/// Returns whether anything was removed.
pub fn remove_target(target: &Target) -> Result<bool, UninstallError> {
    let path = target.path.as_path();

    if safety::is_protected(path) {
        return Err(UninstallError::Protected {
            path: path.to_path_buf(),
        });
    }

    match remove_path(path) {
        Ok(removed) => Ok(removed),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => match target.privilege {
            Privilege::Elevated => {
                tracing::debug!("direct removal of {} denied: {}", path.display(), e);
                permissions::elevated_remove(path).map(|()| true)
            }
            Privilege::Normal => Err(UninstallError::PermissionDenied {
                path: path.to_path_buf(),
                hint: permissions::permission_hint(path, target.privilege),
            }),
        },
        Err(e) => Err(UninstallError::io(path, e)),
    }
}
