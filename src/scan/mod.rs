//! The scan pipeline: catalog, test-file discard, signature detection,
//! span expansion.
//!
//! Files are independent, so detection and expansion fan out across a
//! rayon pool; collected results keep the catalog's path order, and
//! warnings are printed after each parallel phase so output stays
//! deterministic.

mod detector;
mod error;
mod file_scanner;
mod patterns;
mod span;

pub use detector::{is_test_file, scan_source_file};
pub use error::ScanError;
pub use file_scanner::{CatalogResult, catalog_source_files, validate_root};
pub use patterns::{
    ROUTE_PATTERNS, TEST_DECLARATION_PATTERNS, is_test_declaration, match_route_signature,
};
pub use span::expand_hit_span;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::config::Config;
use crate::signatures::{SignatureHit, SignatureSpan};

/// Everything a single scan run produced.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Detection hits in file order, then line order.
    pub hits: Vec<SignatureHit>,
    /// Expanded spans, one per hit that survived expansion. Empty when
    /// the span stage was skipped.
    pub spans: Vec<SignatureSpan>,
    pub source_files_scanned: usize,
    pub test_files_discarded: usize,
    /// Files dropped because they could not be read.
    pub files_skipped: usize,
    /// Hits dropped because expansion failed (file changed underneath).
    pub hits_skipped: usize,
}

impl ScanOutcome {
    pub fn skipped_total(&self) -> usize {
        self.files_skipped + self.hits_skipped
    }
}

/// Run the full pipeline under `root`.
///
/// Per-file and per-hit failures are warned about (in verbose mode) and
/// skipped; only root validation aborts the run. When `expand` is false
/// the span stage is skipped entirely (hits-only reporting).
pub fn scan_project(
    root: &Path,
    config: &Config,
    expand: bool,
    verbose: bool,
) -> Result<ScanOutcome> {
    let catalog = catalog_source_files(root, config, verbose)?;
    let mut files_skipped = catalog.skipped_count;

    let per_file: Vec<Result<Option<Vec<SignatureHit>>, ScanError>> = catalog
        .files
        .par_iter()
        .map(|path| {
            if config.ignore_test_files && is_test_file(path)? {
                return Ok(None);
            }
            scan_source_file(path).map(Some)
        })
        .collect();

    let mut hits = Vec::new();
    let mut source_files_scanned = 0;
    let mut test_files_discarded = 0;
    for result in per_file {
        match result {
            Ok(Some(file_hits)) => {
                source_files_scanned += 1;
                hits.extend(file_hits);
            }
            Ok(None) => test_files_discarded += 1,
            Err(err) => {
                files_skipped += 1;
                warn_skip(&err, verbose);
            }
        }
    }

    let mut spans = Vec::new();
    let mut hits_skipped = 0;
    if expand {
        let expanded: Vec<Result<SignatureSpan, ScanError>> =
            hits.par_iter().map(expand_hit_span).collect();
        for result in expanded {
            match result {
                Ok(span) => spans.push(span),
                Err(err) => {
                    hits_skipped += 1;
                    warn_skip(&err, verbose);
                }
            }
        }
    }

    Ok(ScanOutcome {
        hits,
        spans,
        source_files_scanned,
        test_files_discarded,
        files_skipped,
        hits_skipped,
    })
}

fn warn_skip(err: &ScanError, verbose: bool) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), err);
    }
}
