//! Literal line patterns shared by the route detector and the test-file
//! classifier.
//!
//! Matching is plain substring containment - no regex, no word
//! boundaries. The tables are ordered: when a line contains more than
//! one pattern, the first entry wins.

use crate::signatures::SignatureKind;

/// Route-registration patterns, in match-priority order.
pub const ROUTE_PATTERNS: &[(&str, SignatureKind)] = &[
    (".get(", SignatureKind::RouteGet),
    (".post(", SignatureKind::RoutePost),
    (".put(", SignatureKind::RoutePut),
    (".delete(", SignatureKind::RouteDelete),
];

/// Test-declaration patterns marking a file as a test file.
pub const TEST_DECLARATION_PATTERNS: &[&str] = &["it(", "describe("];

/// Match a line against the route table.
///
/// A line never yields more than one kind, even when several patterns
/// occur on it.
pub fn match_route_signature(line: &str) -> Option<SignatureKind> {
    ROUTE_PATTERNS
        .iter()
        .find(|(pattern, _)| line.contains(pattern))
        .map(|&(_, kind)| kind)
}

/// True if the line contains any test-declaration pattern.
pub fn is_test_declaration(line: &str) -> bool {
    TEST_DECLARATION_PATTERNS
        .iter()
        .any(|pattern| line.contains(pattern))
}
