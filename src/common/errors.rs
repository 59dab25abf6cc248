use std::path::PathBuf;

/// Typed errors for uninstall operations.
/// `main` works in `anyhow`; these let the uninstaller say exactly which
/// path failed and why.
#[derive(Debug, thiserror::Error)]
pub enum UninstallError {
    /// No home directory for the invoking user
    #[error("could not determine the home directory")]
    HomeNotFound,

    /// File system operation failed
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied and no way to elevate
    #[error("Permission denied: '{}'. {hint}", .path.display())]
    PermissionDenied { path: PathBuf, hint: String },

    /// Path is on the never-delete list
    #[error("refusing to remove protected path '{}'", .path.display())]
    Protected { path: PathBuf },

    /// `sudo` could not be run or the elevated removal failed
    #[error("elevated removal of '{}' failed: {message}", .path.display())]
    Escalation { path: PathBuf, message: String },

    /// Deleting our own executable failed
    #[error("could not remove the uninstaller executable: {0}")]
    SelfRemoval(#[source] std::io::Error),
}

impl UninstallError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UninstallError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = UninstallError::io(
            "/usr/local/bin/ssm",
            std::io::Error::new(std::io::ErrorKind::Other, "busy"),
        );
        assert_eq!(err.to_string(), "I/O error at '/usr/local/bin/ssm': busy");

        let err = UninstallError::Protected { path: "/usr".into() };
        assert!(err.to_string().contains("'/usr'"));
    }
}
