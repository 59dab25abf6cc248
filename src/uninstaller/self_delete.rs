use std::path::PathBuf;

use crate::common::errors::UninstallError;

/// Delete the running executable.
///
/// Goes through `self_replace`, which unlinks directly on Unix and defers
/// the deletion past process exit on Windows, where a running image cannot
/// be removed.
pub fn remove_self() -> Result<PathBuf, UninstallError> {
    let exe = std::env::current_exe().map_err(UninstallError::SelfRemoval)?;
    tracing::debug!("removing own executable {}", exe.display());
    self_replace::self_delete().map_err(UninstallError::SelfRemoval)?;
    Ok(exe)
}
