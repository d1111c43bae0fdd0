pub mod init;
pub mod scan;

use crate::scan::ScanOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub outcome: ScanOutcome,
    /// Report hits without spans.
    pub hits_only: bool,
    /// Emit JSON instead of the text report.
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a perimeter command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files or hits skipped because of per-item errors. Non-zero maps
    /// to exit code 1.
    pub skipped_count: usize,
}
