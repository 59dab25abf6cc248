use colored::*;

use crate::common::format::{format_count, format_path};
use crate::uninstaller::{Outcome, StepStatus, UninstallReport};

/// Printed when none of the installed paths exist
pub const NOT_INSTALLED_MESSAGE: &str = "ssm does not appear to be installed.";

/// Printed once everything is gone
pub const COMPLETION_MESSAGE: &str = "ssm has been uninstalled.";

/// Print the outcome in human-readable form
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::NotInstalled => println!("{}", NOT_INSTALLED_MESSAGE),
        Outcome::Uninstalled(report) => print_report(report),
    }
}

fn print_report(report: &UninstallReport) {
    for step in report.removed_primary() {
        println!("{} {}", "Removed".green(), format_path(&step.target.path));
    }

    print_failures(report);

    if report.is_clean() {
        println!();
        println!("{} {}", "✓".green(), COMPLETION_MESSAGE.bold());
    } else {
        let failed = report.failures().count();
        eprintln!();
        eprintln!(
            "{} Uninstall incomplete: {} could not be removed.",
            "✗".red(),
            format_count(failed, "path")
        );
    }
}

/// Failures go to stderr in every format except JSON
pub fn print_failures(report: &UninstallReport) {
    for step in report.failures() {
        if let StepStatus::Failed(ref err) = step.status {
            eprintln!(
                "{} Could not remove {} ({}): {}",
                "⚠".yellow(),
                step.target.label,
                format_path(&step.target.path),
                err.dimmed()
            );
        }
    }
}

/// Print the outcome as JSON
pub fn print_outcome_json(outcome: &Outcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
