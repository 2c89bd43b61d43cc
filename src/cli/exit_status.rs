use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, nothing untranslated found
/// - `Failure` (1): Command completed but found untranslated text or unsupported input
/// - `Error` (2): Command failed due to internal error (config error, unreadable file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
