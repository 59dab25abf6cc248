use std::path::{Path, PathBuf};

use super::errors::UninstallError;

/// Name the launcher is installed under
pub const LAUNCHER_NAME: &str = "ssm";

/// Name of the installed package directory
pub const PACKAGE_DIR_NAME: &str = "ssm_pkg";

/// Application name, used for the per-user config directory
pub const APP_NAME: &str = "ssm";

/// Directory the launcher and package directory are installed into
pub const INSTALL_BIN_DIR: &str = "/usr/local/bin";

/// Source checkout directory, relative to the working directory
pub const REPO_DIR_NAME: &str = "ssm";

/// Files and directories of the source checkout, removed unconditionally.
/// The launcher and package copies are appended after these.
pub const REPO_FILES: &[&str] = &[
    ".git",
    ".gitignore",
    "install.sh",
    "README.md",
    "requirements.txt",
];

/// Where an `ssm` installation lives on this machine.
///
/// All names are fixed at build time; only the roots vary. `resolve()`
/// produces the real layout, `new()` lets callers (and tests) pick the roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub bin_dir: PathBuf,
    pub config_dir: PathBuf,
    pub repo_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(
        bin_dir: impl Into<PathBuf>,
        config_dir: impl Into<PathBuf>,
        repo_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            config_dir: config_dir.into(),
            repo_dir: repo_dir.into(),
        }
    }

    /// Resolve the real layout. The config directory is always
    /// `~/.config/ssm`, even on platforms whose native config dir differs.
    pub fn resolve() -> Result<Self, UninstallError> {
        let home = dirs::home_dir().ok_or(UninstallError::HomeNotFound)?;
        Ok(Self::for_home(&home))
    }

    /// Layout for a given home directory
    pub fn for_home(home: &Path) -> Self {
        Self::new(
            INSTALL_BIN_DIR,
            home.join(".config").join(APP_NAME),
            REPO_DIR_NAME,
        )
    }

    pub fn launcher(&self) -> PathBuf {
        self.bin_dir.join(LAUNCHER_NAME)
    }

    pub fn package_dir(&self) -> PathBuf {
        self.bin_dir.join(PACKAGE_DIR_NAME)
    }

    /// Paths of the source checkout in removal order
    pub fn repo_paths(&self) -> Vec<PathBuf> {
        REPO_FILES
            .iter()
            .chain([LAUNCHER_NAME, PACKAGE_DIR_NAME].iter())
            .map(|name| self.repo_dir.join(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home_layout() {
        let layout = InstallLayout::for_home(Path::new("/home/alice"));
        assert_eq!(layout.launcher(), PathBuf::from("/usr/local/bin/ssm"));
        assert_eq!(layout.package_dir(), PathBuf::from("/usr/local/bin/ssm_pkg"));
        assert_eq!(layout.config_dir, PathBuf::from("/home/alice/.config/ssm"));
        assert_eq!(layout.repo_dir, PathBuf::from("ssm"));
    }

    #[test]
    fn test_repo_paths_order() {
        let layout = InstallLayout::new("/b", "/c", "/r");
        let names: Vec<String> = layout
            .repo_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            [".git", ".gitignore", "install.sh", "README.md", "requirements.txt", "ssm", "ssm_pkg"]
        );
    }
}
