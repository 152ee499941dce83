//! Tail reader: last N lines of a seekable source, scanned backward from the end.

use std::io::{self, Read, Seek, SeekFrom};

use crate::constants::TAIL_BLOCK_SIZE;

/// One line of the tail, terminator stripped, capped at the slot capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    bytes: Vec<u8>,
    truncated: bool,
}

impl LineRecord {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.as_bytes().windows(needle.len()).any(|w| w == needle)
    }
}

/// `requested` slots; only the trailing `actual_count()` ones hold lines.
#[derive(Debug, Clone, Default)]
pub struct TailBuffer {
    requested: usize,
    lines: Vec<LineRecord>,
}

impl TailBuffer {
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn actual_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the first present slot.
    pub fn first_present(&self) -> usize {
        self.requested - self.lines.len()
    }

    /// `None` for leading absent slots and for indices past the end.
    pub fn slot(&self, index: usize) -> Option<&LineRecord> {
        index
            .checked_sub(self.first_present())
            .and_then(|i| self.lines.get(i))
    }

    /// Present lines, oldest first.
    pub fn present(&self) -> impl Iterator<Item = &LineRecord> + '_ {
        (self.first_present()..self.requested).filter_map(move |i| self.slot(i))
    }
}

/// Reads the last `requested` lines of `source`, each capped at `max_line_length - 1` bytes.
///
/// The final line counts even without a terminator; a terminator as the very last byte
/// closes that line rather than starting an empty one.
pub fn read_tail<R: Read + Seek>(
    source: &mut R,
    requested: usize,
    max_line_length: usize,
) -> io::Result<TailBuffer> {
    let capacity = max_line_length.saturating_sub(1);
    let len = source.seek(SeekFrom::End(0))?;
    if len == 0 || requested == 0 {
        return Ok(TailBuffer {
            requested,
            lines: Vec::new(),
        });
    }

    // (start, end) byte ranges, newest first; `end` excludes the terminator.
    let mut spans: Vec<(u64, u64)> = Vec::with_capacity(requested.min(1024));
    let mut line_end = len;
    let mut pos = len;
    let mut block = vec![0u8; TAIL_BLOCK_SIZE];
    'scan: while pos > 0 {
        let block_start = pos.saturating_sub(TAIL_BLOCK_SIZE as u64);
        let chunk = &mut block[..(pos - block_start) as usize];
        source.seek(SeekFrom::Start(block_start))?;
        source.read_exact(chunk)?;
        for (i, &b) in chunk.iter().enumerate().rev() {
            if b != b'\n' {
                continue;
            }
            let at = block_start + i as u64;
            if at + 1 == len {
                line_end = at;
                continue;
            }
            spans.push((at + 1, line_end));
            line_end = at;
            if spans.len() == requested {
                break 'scan;
            }
        }
        pos = block_start;
    }
    if spans.len() < requested {
        spans.push((0, line_end));
    }
    tracing::trace!(len, found = spans.len(), "backward scan finished");

    let mut lines = Vec::with_capacity(spans.len());
    for &(start, end) in spans.iter().rev() {
        let physical = end - start;
        let take = physical.min(capacity as u64);
        let mut bytes = Vec::with_capacity(take as usize);
        source.seek(SeekFrom::Start(start))?;
        source.by_ref().take(take).read_to_end(&mut bytes)?;
        let truncated = physical > take;
        if truncated {
            tracing::debug!(offset = start, physical, kept = take, "line truncated");
        }
        lines.push(LineRecord { bytes, truncated });
    }
    Ok(TailBuffer { requested, lines })
}
