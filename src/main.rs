use anyhow::{Context, Result};
use clap::Parser;

use ssm_uninstall::cli::args::{Cli, OutputFormat};
use ssm_uninstall::cli::output;
use ssm_uninstall::common::config::InstallLayout;
use ssm_uninstall::common::format::format_count;
use ssm_uninstall::uninstaller::{self, Finish, Outcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("ssm_uninstall=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let layout = InstallLayout::resolve().context("Failed to resolve install locations")?;
    tracing::debug!("resolved layout: {:?}", layout);

    let outcome = uninstaller::run(&layout);

    match cli.format {
        OutputFormat::Human => output::print_outcome(&outcome),
        OutputFormat::Json => {
            // Removals already happened; a report failure must not stop the run
            if let Err(e) = output::print_outcome_json(&outcome) {
                eprintln!("warning: could not print JSON report: {}", e);
            }
        }
        OutputFormat::Quiet => {
            if let Outcome::Uninstalled(ref report) = outcome {
                output::print_failures(report);
            }
        }
    }

    match outcome.finish() {
        Finish::Nothing => Ok(()),
        // Leave the uninstaller in place so the user can retry
        Finish::KeepForRetry { failed } => {
            anyhow::bail!("{} could not be removed", format_count(failed, "path"))
        }
        Finish::RemoveSelf => {
            let exe = uninstaller::remove_self()
                .context("Uninstall finished, but self-removal failed")?;
            tracing::debug!("removed {}", exe.display());
            Ok(())
        }
    }
}
