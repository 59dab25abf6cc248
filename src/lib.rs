//! # ssm-uninstall
//!
//! Removes an installed copy of the `ssm` system monitor from this machine:
//!
//! - **Installed artifacts**: the launcher and package directory under
//!   `/usr/local/bin`, plus the per-user config directory
//! - **Source checkout**: the repository-local files `install.sh` left behind
//! - **Itself**: the uninstaller deletes its own executable as the last step
//!
//! Every removal is checked. Nothing is reported as removed unless it is gone.

pub mod cli;
pub mod common;
pub mod uninstaller;
