use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// scanner and linter tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed; every file and hit was processed.
    Success,
    /// Scan completed, but some items were skipped on errors.
    Failure,
    /// Command failed outright (bad scan root, config error).
    Error,
}

impl ExitStatus {
    fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
