//! Line-oriented signature detection over a single source file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::ScanError;
use super::patterns::{is_test_declaration, match_route_signature};
use crate::signatures::SignatureHit;

fn open_buffered(path: &Path) -> Result<BufReader<File>, ScanError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ScanError::Access {
            path: path.display().to_string(),
            source,
        })
}

fn read_failure(path: &Path, source: std::io::Error) -> ScanError {
    ScanError::Access {
        path: path.display().to_string(),
        source,
    }
}

/// Scan one source file for route-registration signatures.
///
/// Lines are numbered from 1, counting the final line whether or not it
/// ends with a newline. Hits come back in line order, at most one per
/// line; on a line with several patterns the table order decides the
/// kind.
pub fn scan_source_file(path: &Path) -> Result<Vec<SignatureHit>, ScanError> {
    let reader = open_buffered(path)?;
    let mut hits = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| read_failure(path, source))?;
        if let Some(kind) = match_route_signature(&line) {
            hits.push(SignatureHit {
                path: path.display().to_string(),
                line: index + 1,
                kind,
            });
        }
    }

    Ok(hits)
}

/// Decide whether a file is a test file by its content.
///
/// Stops at the first line containing a test declaration.
pub fn is_test_file(path: &Path) -> Result<bool, ScanError> {
    let reader = open_buffered(path)?;

    for line in reader.lines() {
        let line = line.map_err(|source| read_failure(path, source))?;
        if is_test_declaration(&line) {
            return Ok(true);
        }
    }

    Ok(false)
}
