use thiserror::Error;

use crate::engine::EngineError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Io(#[from] IoError),

    #[error("Aggregation failed: {0}")]
    Engine(#[from] EngineError),
}
