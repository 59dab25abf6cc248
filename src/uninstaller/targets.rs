use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use crate::common::config::InstallLayout;
use crate::common::permissions::Privilege;

/// What kind of filesystem entry a target is expected to be. Report
/// metadata only: removal goes by what is actually on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    File,
    Directory,
}

/// When a target is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Only when present; presence counts toward "installed"
    IfPresent,
    /// Always attempted; absence is a silent no-op
    Always,
}

/// A single path the uninstaller removes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub label: &'static str,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub kind: TargetKind,
    pub condition: Condition,
    pub privilege: Privilege,
}

impl Target {
    fn primary(label: &'static str, path: PathBuf, kind: TargetKind, privilege: Privilege) -> Self {
        Self {
            label,
            path,
            kind,
            condition: Condition::IfPresent,
            privilege,
        }
    }

    fn repository(label: &'static str, path: PathBuf, kind: TargetKind) -> Self {
        Self {
            label,
            path,
            kind,
            condition: Condition::Always,
            privilege: Privilege::Normal,
        }
    }

    /// Whether anything exists at the path. Symlinks are not followed, so a
    /// dangling launcher link still counts as installed.
    pub fn is_present(&self) -> bool {
        self.path.symlink_metadata().is_ok()
    }
}

/// Paths that are not valid UTF-8 (a non-UTF-8 `$HOME`) are reported lossily
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// The installed artifacts, in removal order: launcher, package directory,
/// config directory.
pub fn primary_targets(layout: &InstallLayout) -> Vec<Target> {
    vec![
        Target::primary("launcher", layout.launcher(), TargetKind::File, Privilege::Elevated),
        Target::primary(
            "package directory",
            layout.package_dir(),
            TargetKind::Directory,
            Privilege::Elevated,
        ),
        Target::primary(
            "config directory",
            layout.config_dir.clone(),
            TargetKind::Directory,
            Privilege::Normal,
        ),
    ]
}

/// The source checkout files, in removal order
pub fn repository_targets(layout: &InstallLayout) -> Vec<Target> {
    let labels: [(&'static str, TargetKind); 7] = [
        ("repo .git", TargetKind::Directory),
        ("repo .gitignore", TargetKind::File),
        ("repo install script", TargetKind::File),
        ("repo readme", TargetKind::File),
        ("repo requirements", TargetKind::File),
        ("repo launcher copy", TargetKind::File),
        ("repo package copy", TargetKind::Directory),
    ];

    layout
        .repo_paths()
        .into_iter()
        .zip(labels)
        .map(|(path, (label, kind))| Target::repository(label, path, kind))
        .collect()
}
