//! Signature types produced by the scan pipeline.
//!
//! A hit is a single matched line; a span is the full statement around
//! it, recovered by balancing parentheses. Both are self-contained so a
//! reporter (text, JSON, or a downstream store) needs nothing else to
//! render them.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// What a matched line represents.
///
/// The covered set is Express route registrations, one variant per HTTP
/// verb. The set is open: other signature families (fetch calls,
/// database access) slot in as new variants plus pattern table entries
/// without touching the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureKind {
    RouteGet,
    RoutePost,
    RoutePut,
    RouteDelete,
}

impl SignatureKind {
    /// HTTP verb for human-facing reports.
    pub fn verb(&self) -> &'static str {
        match self {
            SignatureKind::RouteGet => "GET",
            SignatureKind::RoutePost => "POST",
            SignatureKind::RoutePut => "PUT",
            SignatureKind::RouteDelete => "DELETE",
        }
    }

    /// Short rule-style name for machine output.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureKind::RouteGet => "route-get",
            SignatureKind::RoutePost => "route-post",
            SignatureKind::RoutePut => "route-put",
            SignatureKind::RouteDelete => "route-delete",
        }
    }
}

impl std::fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One located occurrence of a signature pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHit {
    pub path: String,
    /// 1-based line number of the matched line.
    pub line: usize,
    pub kind: SignatureKind,
}

/// The full extent of the statement containing a hit.
///
/// `content` is the exact text of the lines `[start_line, end_line]`
/// joined by `\n` - no trimming or re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSpan {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
    /// Lowercase hex SHA-256 of `content`.
    pub checksum: String,
}

impl SignatureSpan {
    pub fn new(
        path: impl Into<String>,
        start_line: usize,
        end_line: usize,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let checksum = hex::encode(Sha256::digest(content.as_bytes()));
        Self {
            path: path.into(),
            start_line,
            end_line,
            content,
            checksum,
        }
    }

    /// Number of lines covered, inclusive.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
