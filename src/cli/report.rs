//! Report formatting and printing utilities.
//!
//! Route spans print in a cargo-style format. Rendering is separate
//! from the scan engine so perimeter can be used as a library, and all
//! render functions take a writer for testability.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::scan::{ROUTE_PATTERNS, ScanOutcome, match_route_signature};
use crate::signatures::{SignatureHit, SignatureSpan};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            print_scan(summary, &mut io::stdout().lock());
            print_skip_warning(result.skipped_count, verbose);
        }
        CommandSummary::Init(summary) => print_init(summary, &mut io::stdout().lock()),
    }
}

/// Print scan results to a custom writer.
pub fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    if summary.json {
        print_scan_json(summary, writer);
    } else {
        print_scan_text(summary, writer);
    }
}

/// Print a warning about skipped files/hits to stderr.
pub fn print_skip_warning(count: usize, verbose: bool) {
    print_skip_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skip warning to a custom writer.
pub fn print_skip_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} item(s) could not be scanned (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_scan_json<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let outcome = &summary.outcome;
    let written = if summary.hits_only {
        serde_json::to_writer_pretty(&mut *writer, &outcome.hits)
    } else {
        serde_json::to_writer_pretty(&mut *writer, &outcome.spans)
    };
    if written.is_ok() {
        let _ = writeln!(writer);
    }
}

fn print_scan_text<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let outcome = &summary.outcome;

    if summary.hits_only {
        for hit in &outcome.hits {
            print_hit(hit, writer);
        }
        if !outcome.hits.is_empty() {
            let _ = writeln!(writer);
        }
    } else {
        // Calculate max line number width for gutter alignment
        let max_line_width = calculate_max_line_width(&outcome.spans);
        for span in &outcome.spans {
            print_span(span, writer, max_line_width);
        }
    }

    print_summary(outcome, writer);
}

fn print_hit<W: Write>(hit: &SignatureHit, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}:{}",
        format!("{:<6}", hit.kind.verb()).bold().green(),
        hit.path,
        hit.line
    );
}

fn print_span<W: Write>(span: &SignatureSpan, writer: &mut W, max_line_width: usize) {
    // The span's first line is the detected line, so re-matching it
    // recovers the verb without widening the span type.
    let kind = match_route_signature(span.content.split('\n').next().unwrap_or(""));
    let verb = kind.map_or("ROUTE", |k| k.verb());
    let rule = kind.map_or("route", |k| k.name());

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "route".bold().green(),
        verb,
        rule.dimmed().cyan()
    );

    // Clickable location: --> path:line
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        span.path,
        span.start_line
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    for (offset, line) in span.content.split('\n').enumerate() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            (span.start_line + offset).to_string().blue(),
            "|".blue(),
            line,
            width = max_line_width
        );
    }
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );

    let _ = writeln!(writer); // Empty line between routes
}

fn print_summary<W: Write>(outcome: &ScanOutcome, writer: &mut W) {
    let scanned = outcome.source_files_scanned;
    let files = if scanned == 1 { "file" } else { "files" };
    let ignored = if outcome.test_files_discarded > 0 {
        format!(
            " ({} test {} ignored)",
            outcome.test_files_discarded,
            if outcome.test_files_discarded == 1 {
                "file"
            } else {
                "files"
            }
        )
    } else {
        String::new()
    };

    let total = outcome.hits.len();
    let msg = if total == 0 {
        format!(
            "Scanned {} source {}{} - no route registrations found",
            scanned, files, ignored
        )
    } else {
        format!(
            "Scanned {} source {}{} - {} route {} ({})",
            scanned,
            files,
            ignored,
            total,
            if total == 1 {
                "registration"
            } else {
                "registrations"
            },
            verb_breakdown(&outcome.hits)
        )
    };

    let skipped = outcome.skipped_total();
    if skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{}, {} item(s) skipped", msg, skipped).yellow()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}

fn verb_breakdown(hits: &[SignatureHit]) -> String {
    ROUTE_PATTERNS
        .iter()
        .filter_map(|&(_, kind)| {
            let count = hits.iter().filter(|h| h.kind == kind).count();
            (count > 0).then(|| format!("{} {}", count, kind.verb()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn calculate_max_line_width(spans: &[SignatureSpan]) -> usize {
    spans
        .iter()
        .map(|s| s.end_line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
