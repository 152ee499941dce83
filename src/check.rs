//! One check run: open the log, read its tail, evaluate, render the plugin line.

use std::fs::File;
use std::io::{Read, Seek};

use color_eyre::eyre::{Result, WrapErr};

use crate::config::Config;
use crate::constants::MAX_LINE_LENGTH;
use crate::error::CheckError;
use crate::evaluate::{Evaluation, evaluate};
use crate::tail::{TailBuffer, read_tail};

/// Runs the check. The file is closed before evaluation starts.
pub fn run(config: &Config) -> Result<Evaluation> {
    let lines = load_tail(config)?;
    let truncated = lines.present().filter(|l| l.is_truncated()).count();
    tracing::info!(
        file = %config.file.display(),
        found = lines.actual_count(),
        requested = lines.requested(),
        truncated,
        "tail loaded"
    );
    let evaluation = evaluate(&lines, &config.needle, config.thresholds);
    tracing::info!(
        matches = evaluation.match_count,
        warning = config.thresholds.warning,
        critical = config.thresholds.critical,
        status = %evaluation.status,
        "evaluated"
    );
    Ok(evaluation)
}

fn load_tail(config: &Config) -> Result<TailBuffer> {
    let mut file = File::open(&config.file).map_err(|source| CheckError::OpenFile {
        path: config.file.clone(),
        source,
    })?;
    read_log_tail(&mut file, config)
}

/// Tail of an already opened log; I/O failures become `Unable to read log file: <path>`.
pub fn read_log_tail<R: Read + Seek>(source: &mut R, config: &Config) -> Result<TailBuffer> {
    read_tail(source, config.max_lines, MAX_LINE_LENGTH)
        .wrap_err_with(|| format!("Unable to read log file: {}", config.file.display()))
}

/// `<STATUS>: Found <n> "<needle>" in the last <lines> lines of <file>`
pub fn render(evaluation: &Evaluation, config: &Config) -> String {
    format!(
        "{}: Found {} \"{}\" in the last {} lines of {}",
        evaluation.status,
        evaluation.match_count,
        config.needle,
        config.max_lines,
        config.file.display()
    )
}
