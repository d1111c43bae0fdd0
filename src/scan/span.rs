//! Span expansion: from a single matched line to the enclosing
//! parenthesized statement.

use std::fs;
use std::path::Path;

use super::error::ScanError;
use crate::signatures::{SignatureHit, SignatureSpan};

/// Expand a hit to the statement that contains it.
///
/// The file is re-read at expansion time; a hit whose line no longer
/// exists reports `LineOutOfRange`. From the hit line onward, the first
/// balanced parenthesis group decides the end line. A buffer that never
/// opens a group, or opens one that never closes, degrades to the hit
/// line alone - that is a defined fallback, not an error.
pub fn expand_hit_span(hit: &SignatureHit) -> Result<SignatureSpan, ScanError> {
    let text = fs::read_to_string(Path::new(&hit.path)).map_err(|source| ScanError::Access {
        path: hit.path.clone(),
        source,
    })?;
    let lines: Vec<&str> = text.lines().collect();

    if hit.line == 0 || hit.line > lines.len() {
        return Err(ScanError::LineOutOfRange {
            path: hit.path.clone(),
            line: hit.line,
            lines: lines.len(),
        });
    }

    let tail = lines[hit.line - 1..].join("\n");
    let end_line = match balanced_group_end(&tail) {
        Some(end) => hit.line + newline_count(&tail[..=end]),
        None => hit.line,
    };

    let content = lines[hit.line - 1..end_line].join("\n");
    Ok(SignatureSpan::new(
        hit.path.clone(),
        hit.line,
        end_line,
        content,
    ))
}

/// Byte offset of the `)` closing the first balanced group, if the
/// buffer opens one and closes it.
///
/// Character-level count only: parentheses inside string literals and
/// comments are structural here.
fn balanced_group_end(text: &str) -> Option<usize> {
    let mut depth: usize = 0;

    for (offset, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            // A close before any open is not part of a group.
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    None
}

fn newline_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
