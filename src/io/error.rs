use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Line source and report output failures
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV async writing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
