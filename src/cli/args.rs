use clap::{Parser, ValueEnum};

/// ssm-uninstall: remove the ssm system monitor from this machine
#[derive(Parser, Debug)]
#[command(
    name = "ssm-uninstall",
    version,
    about = "Remove the ssm system monitor and its support files",
    long_about = "Removes the ssm launcher and package directory from /usr/local/bin,\n\
                  the ~/.config/ssm directory, the files of the ./ssm source checkout,\n\
                  and finally this uninstaller itself.",
    after_help = "EXAMPLES:\n  \
        ssm-uninstall                   Uninstall ssm\n  \
        ssm-uninstall --format json     Report what was removed as JSON\n  \
        ssm-uninstall -v                Show debug diagnostics on stderr"
)]
pub struct Cli {
    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    /// Only warnings and errors
    Quiet,
}
