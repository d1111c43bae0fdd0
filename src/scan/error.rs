use std::io;

use thiserror::Error;

/// Per-item failures inside the scan pipeline.
///
/// Both variants are skip-and-continue at their own granularity: an
/// unreadable file drops that file, an out-of-range hit drops that hit.
/// Fatal conditions (bad scan root, bad config) travel on the anyhow
/// path instead and abort the run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read {path}: {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line} is out of range for {path} ({lines} lines)")]
    LineOutOfRange {
        path: String,
        line: usize,
        lines: usize,
    },
}
