//! Crate-wide constants for line limits, I/O block size and version.

/// Capacity of one line slot, counting the line terminator and the string terminator byte.
pub const MAX_LINE_LENGTH: usize = 300;

/// Trailing lines scanned when `--lines` is not given.
pub const DEFAULT_LINES: u64 = 30;

/// Bytes read per step while scanning backward from the end of the file.
pub const TAIL_BLOCK_SIZE: usize = 8 * 1024; // 8 KiB

/// Version reported by `--version`: git tag when built from a tagged checkout.
pub const VERSION: &str = match option_env!("CHECK_STRING_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
