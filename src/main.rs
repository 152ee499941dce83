//! Monitoring check: count a string in the last lines of a log file.
//!
//! Usage: `check_string -w 1 -c 3 -f /var/log/app.log -s ERROR [-l 30]`
//! Exit code 0/1/2/3 = OK/WARNING/CRITICAL/UNKNOWN; one status line on stdout.

mod check;
mod cli;
mod config;
mod constants;
mod error;
mod evaluate;
mod logging;
mod tail;

use std::env;

use crate::error::CheckError;
use crate::evaluate::Status;

fn main() {
    let args: Vec<String> = env::args().collect();
    let status = install_error_hooks().unwrap_or_else(|| check_status(&args));
    std::process::exit(status.exit_code())
}

/// `Some(Unknown)` when the report hooks cannot be installed.
fn install_error_hooks() -> Option<Status> {
    color_eyre::install()
        .err()
        .map(|report| unknown(&report, None))
}

fn check_status(args: &[String]) -> Status {
    match cli::parse_args(args) {
        Ok(config) => {
            logging::init(config.verbosity);
            match check::run(&config) {
                Ok(evaluation) => {
                    println!("{}", check::render(&evaluation, &config));
                    evaluation.status
                }
                Err(report) => {
                    tracing::debug!("{report:?}");
                    unknown(&report, report.downcast_ref::<CheckError>())
                }
            }
        }
        Err(err) => unknown(&err, Some(&err)),
    }
}

fn unknown(message: &dyn std::fmt::Display, err: Option<&CheckError>) -> Status {
    println!("{}: {}", Status::Unknown, message);
    if let Some(hint) = err.and_then(CheckError::hint) {
        eprintln!("{hint}");
    }
    Status::Unknown
}
