//! Threshold evaluation: count matching lines and map the count to a plugin status.

use std::fmt;

use crate::tail::TailBuffer;

/// Plugin status; the discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Match counts at which the check escalates. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: usize,
    pub critical: usize,
}

impl Thresholds {
    pub fn classify(self, count: usize) -> Status {
        if count >= self.critical {
            Status::Critical
        } else if count >= self.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub status: Status,
    pub match_count: usize,
}

/// Counts present lines containing `needle` (case-sensitive; empty matches every line).
pub fn evaluate(lines: &TailBuffer, needle: &str, thresholds: Thresholds) -> Evaluation {
    let needle = needle.as_bytes();
    let match_count = lines.present().filter(|line| line.contains(needle)).count();
    Evaluation {
        status: thresholds.classify(match_count),
        match_count,
    }
}
