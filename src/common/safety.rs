use std::path::Path;

/// Paths that must NEVER be deleted, whatever the layout resolves to.
const PROTECTED_PATHS: &[&str] = &[
    "/",
    "/bin",
    "/boot",
    "/etc",
    "/home",
    "/lib",
    "/opt",
    "/root",
    "/sbin",
    "/usr",
    "/usr/bin",
    "/usr/local",
    "/usr/local/bin",
    "/var",
    "/Applications",
    "/Library",
    "/System",
    "/Users",
];

/// Paths under home that must never be deleted entirely
const PROTECTED_HOME_DIRS: &[&str] = &["", ".config", ".local", ".ssh", ".gnupg"];

/// Check if a path is protected and should NEVER be deleted
pub fn is_protected(path: &Path) -> bool {
    if path.as_os_str().is_empty() || path == Path::new(".") || path == Path::new("..") {
        return true;
    }

    if PROTECTED_PATHS.iter().any(|p| path == Path::new(p)) {
        return true;
    }

    if let Some(home) = dirs::home_dir() {
        for dir in PROTECTED_HOME_DIRS {
            let protected = if dir.is_empty() {
                home.clone()
            } else {
                home.join(dir)
            };
            if path == protected.as_path() {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_protected() {
        assert!(is_protected(Path::new("/")));
    }

    #[test]
    fn test_install_prefixes_protected() {
        assert!(is_protected(Path::new("/usr")));
        assert!(is_protected(Path::new("/usr/local")));
        assert!(is_protected(Path::new("/usr/local/bin")));
        assert!(is_protected(Path::new("/usr/local/bin/")));
    }

    #[test]
    fn test_empty_and_relative_roots_protected() {
        assert!(is_protected(Path::new("")));
        assert!(is_protected(Path::new(".")));
        assert!(is_protected(Path::new("..")));
    }

    #[test]
    fn test_home_dirs_protected() {
        if let Some(home) = dirs::home_dir() {
            assert!(is_protected(&home));
            assert!(is_protected(&home.join(".config")));
            assert!(is_protected(&home.join(".ssh")));
        }
    }

    #[test]
    fn test_install_targets_not_protected() {
        assert!(!is_protected(Path::new("/usr/local/bin/ssm")));
        assert!(!is_protected(Path::new("/usr/local/bin/ssm_pkg")));
        assert!(!is_protected(Path::new("ssm/.git")));
        if let Some(home) = dirs::home_dir() {
            assert!(!is_protected(&home.join(".config/ssm")));
        }
    }
}
