//! CLI: help, version, and argument parsing into a `Config`.

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::config::Config;
use crate::constants::{DEFAULT_LINES, VERSION};
use crate::error::CheckError;

/// Monitoring check for a string in the last lines of a log file.
#[derive(Debug, Parser)]
#[command(name = "check_string", version = VERSION)]
pub struct Args {
    /// WARNING threshold: number of matching lines (mandatory)
    #[arg(short, long, value_name = "WARNING")]
    pub warning: Option<usize>,

    /// CRITICAL threshold: number of matching lines, >= WARNING (mandatory)
    #[arg(short, long, value_name = "CRITICAL")]
    pub critical: Option<usize>,

    /// Path to the log file (mandatory)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// String to look for, case-sensitive
    #[arg(
        short = 's',
        long = "string",
        value_name = "STRING",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub needle: String,

    /// How many lines from the end of the file to check
    #[arg(
        short,
        long,
        value_name = "LINES",
        default_value_t = DEFAULT_LINES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub lines: u64,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_config(self) -> Result<Config, CheckError> {
        let max_lines = usize::try_from(self.lines)
            .map_err(|_| CheckError::Usage(format!("--lines {} is too large", self.lines)))?;
        Config::new(
            self.warning,
            self.critical,
            self.file,
            self.needle,
            max_lines,
            self.verbose,
        )
    }
}

/// Parse args: exits with 0 for -h/--version; otherwise returns the validated config.
pub fn parse_args(args: &[String]) -> Result<Config, CheckError> {
    match Args::try_parse_from(args) {
        Ok(parsed) => parsed.into_config(),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => Err(CheckError::Usage(usage_message(&err))),
    }
}

/// First line of clap's rendered error, without the `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
