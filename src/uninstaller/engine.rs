use serde::Serialize;

use super::remover;
use super::targets::{self, Condition, Target};
use crate::common::config::InstallLayout;

/// What happened to one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum StepStatus {
    Removed,
    /// Nothing was there
    Absent,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    #[serde(flatten)]
    pub target: Target,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Result of a full removal sequence
#[derive(Debug, Clone, Serialize)]
pub struct UninstallReport {
    pub primary: Vec<StepResult>,
    pub repository: Vec<StepResult>,
}

impl UninstallReport {
    /// Primary targets that were actually removed, in removal order
    pub fn removed_primary(&self) -> impl Iterator<Item = &StepResult> {
        self.primary
            .iter()
            .filter(|s| s.status == StepStatus::Removed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.primary
            .iter()
            .chain(self.repository.iter())
            .filter(|s| matches!(s.status, StepStatus::Failed(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// None of the primary paths existed; nothing was touched
    NotInstalled,
    Uninstalled(UninstallReport),
}

/// What the binary does once the removal sequence is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Nothing was installed; the executable stays
    Nothing,
    /// Everything is gone; the executable is removed next
    RemoveSelf,
    /// Some paths failed; the executable stays so the user can retry
    KeepForRetry { failed: usize },
}

impl Outcome {
    pub fn finish(&self) -> Finish {
        match self {
            Outcome::NotInstalled => Finish::Nothing,
            Outcome::Uninstalled(report) if report.is_clean() => Finish::RemoveSelf,
            Outcome::Uninstalled(report) => Finish::KeepForRetry {
                failed: report.failures().count(),
            },
        }
    }
}

/// Run the uninstall sequence over a layout.
///
/// `IfPresent` targets decide whether anything is installed, and are only
/// removed when present. `Always` targets are attempted unconditionally.
/// Per-path failures are recorded, never propagated, so every path gets its
/// one attempt.
pub fn run(layout: &InstallLayout) -> Outcome {
    let primary = targets::primary_targets(layout);

    let installed = primary
        .iter()
        .any(|t| t.condition == Condition::IfPresent && t.is_present());
    if !installed {
        tracing::info!("no installed paths found");
        return Outcome::NotInstalled;
    }

    let primary = primary.into_iter().map(step).collect();
    let repository = targets::repository_targets(layout)
        .into_iter()
        .map(step)
        .collect();

    Outcome::Uninstalled(UninstallReport {
        primary,
        repository,
    })
}

fn step(target: Target) -> StepResult {
    if target.condition == Condition::IfPresent && !target.is_present() {
        tracing::debug!("{} not present at {}", target.label, target.path.display());
        return StepResult {
            target,
            status: StepStatus::Absent,
        };
    }
    remove(target)
}

fn remove(target: Target) -> StepResult {
    let status = match remover::remove_target(&target) {
        Ok(true) => {
            tracing::info!("removed {} at {}", target.label, target.path.display());
            StepStatus::Removed
        }
        Ok(false) => StepStatus::Absent,
        Err(e) => {
            tracing::warn!("failed to remove {}: {}", target.label, e);
            StepStatus::Failed(e.to_string())
        }
    };
    StepResult { target, status }
}
