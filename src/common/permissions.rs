use serde::Serialize;
use std::path::Path;

use super::errors::UninstallError;

/// Privilege a removal may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    /// Remove as the invoking user only
    Normal,
    /// Fall back to `sudo` when the invoking user is denied
    Elevated,
}

/// Get a helpful message for permission issues
pub fn permission_hint(path: &Path, privilege: Privilege) -> String {
    match privilege {
        Privilege::Elevated => format!(
            "Re-run with sudo, or remove '{}' as root.",
            path.display()
        ),
        Privilege::Normal => format!(
            "Check the ownership of '{}'; it should belong to you.",
            path.display()
        ),
    }
}

/// Remove a path with `sudo rm -rf`. The password prompt, if any, is shown
/// on the terminal mid-run; stdio is inherited so it reaches the user.
#[cfg(unix)]
pub fn elevated_remove(path: &Path) -> Result<(), UninstallError> {
    tracing::info!("escalating removal of {}", path.display());

    let status = std::process::Command::new("sudo")
        .arg("rm")
        .arg("-rf")
        .arg("--")
        .arg(path)
        .status()
        .map_err(|e| UninstallError::Escalation {
            path: path.to_path_buf(),
            message: format!("could not run sudo: {}", e),
        })?;

    if !status.success() {
        return Err(UninstallError::Escalation {
            path: path.to_path_buf(),
            message: match status.code() {
                Some(code) => format!("sudo exited with status {}", code),
                None => "sudo was terminated by a signal".to_string(),
            },
        });
    }

    // `rm -rf` exits 0 even when nothing was removed
    if path.symlink_metadata().is_ok() {
        return Err(UninstallError::Escalation {
            path: path.to_path_buf(),
            message: "path still exists after removal".to_string(),
        });
    }

    Ok(())
}

#[cfg(not(unix))]
pub fn elevated_remove(path: &Path) -> Result<(), UninstallError> {
    Err(UninstallError::PermissionDenied {
        path: path.to_path_buf(),
        hint: "Run the uninstaller from an elevated prompt.".to_string(),
    })
}
