use tracing::warn;

use crate::domain::LineError;

/// Policy for handling rejected lines during a run
///
/// Source failures never reach the policy; they always abort the run.
pub trait ErrorPolicy: Send + Sync {
    /// Handle a rejected line (1-based line number)
    /// Return true to continue processing, false to abort
    fn handle_line_error(&self, line: u64, error: &LineError) -> bool;
}

/// Skip rejected lines and continue (logged as warnings)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_line_error(&self, line: u64, error: &LineError) -> bool {
        warn!(line, %error, "Skipping rejected line");
        true
    }
}

/// Abort on first rejected line
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_line_error(&self, line: u64, error: &LineError) -> bool {
        warn!(line, %error, "Aborting on rejected line");
        false
    }
}

/// Silent error policy - skip rejected lines without logging
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_line_error(&self, _line: u64, _error: &LineError) -> bool {
        true
    }
}
