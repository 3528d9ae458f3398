use thiserror::Error;

use crate::domain::LineError;
use crate::io::IoError;

/// Terminal failures of an aggregation run
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Line source failed after {lines} lines: {source}")]
    Source {
        lines: u64,
        #[source]
        source: IoError,
    },

    #[error("Rejected line {line}: {source}")]
    Rejected {
        line: u64,
        #[source]
        source: LineError,
    },

    #[error("Run cancelled after {lines} lines")]
    Cancelled { lines: u64 },

    #[error("Aggregation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
