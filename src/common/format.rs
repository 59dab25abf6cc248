use std::path::Path;

/// Shorten a path under home to `~/...`
pub fn format_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Format a count with the noun pluralized
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path_outside_home() {
        assert_eq!(format_path(Path::new("/usr/local/bin/ssm")), "/usr/local/bin/ssm");
    }

    #[test]
    fn test_format_path_under_home() {
        if let Some(home) = dirs::home_dir() {
            if home != Path::new("/") {
                assert_eq!(format_path(&home.join(".config/ssm")), "~/.config/ssm");
            }
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "path"), "1 path");
        assert_eq!(format_count(3, "path"), "3 paths");
        assert_eq!(format_count(0, "path"), "0 paths");
    }
}
