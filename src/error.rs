//! Errors that end a check with UNKNOWN.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CheckError {
    /// One of `--warning`, `--critical`, `--file` was not given.
    MissingOptions,
    /// `--critical` below `--warning`.
    InvalidThresholds,
    /// Malformed command line (bad number, unknown flag, `--lines 0`).
    Usage(String),
    OpenFile {
        path: PathBuf,
        source: io::Error,
    },
}

impl CheckError {
    /// Extra line for stderr on configuration mistakes.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CheckError::MissingOptions
            | CheckError::InvalidThresholds
            | CheckError::Usage(_) => Some("Use --help option to see more information"),
            CheckError::OpenFile { .. } => None,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::MissingOptions => {
                write!(f, "--warning --critical and --file options must be specified.")
            }
            CheckError::InvalidThresholds => write!(
                f,
                "CRITICAL threshold must be greater than or equal to WARNING threshold."
            ),
            CheckError::Usage(msg) => write!(f, "{msg}"),
            CheckError::OpenFile { path, .. } => {
                write!(f, "Unable to open log file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::OpenFile { source, .. } => Some(source),
            _ => None,
        }
    }
}
