//! Validated run configuration, built once from the command line.

use std::path::PathBuf;

use crate::error::CheckError;
use crate::evaluate::Thresholds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub thresholds: Thresholds,
    pub file: PathBuf,
    pub needle: String,
    pub max_lines: usize,
    pub verbosity: u8,
}

impl Config {
    /// `None` means the option was not given; `Some(0)` is a real threshold.
    /// The needle is deliberately not required: an empty needle matches every line.
    pub fn new(
        warning: Option<usize>,
        critical: Option<usize>,
        file: Option<PathBuf>,
        needle: String,
        max_lines: usize,
        verbosity: u8,
    ) -> Result<Self, CheckError> {
        let (Some(warning), Some(critical), Some(file)) = (warning, critical, file) else {
            return Err(CheckError::MissingOptions);
        };
        if critical < warning {
            return Err(CheckError::InvalidThresholds);
        }
        if max_lines == 0 {
            return Err(CheckError::Usage(
                "--lines must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            thresholds: Thresholds { warning, critical },
            file,
            needle,
            max_lines,
            verbosity,
        })
    }
}
