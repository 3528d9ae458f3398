//! Prelude module for convenient imports
//!
//! Import everything you need with: `use brc::prelude::*;`

// Domain types
pub use crate::domain::{LineError, Reading, StationStats};

// Storage types
pub use crate::storage::AggregateTable;

// Engine types
pub use crate::engine::{Aggregator, EngineError, RunSummary};

// IO types
pub use crate::io::{IoError, LineSource, Report, ReportFormat, parse_line};

// Streaming types
pub use crate::streaming::{
    AbortOnError, DEFAULT_BATCH_SIZE, ErrorPolicy, Progress, SilentSkip, SkipErrors,
    StreamingDriver,
};

// App types
pub use crate::app::{AppError, CliApp, Config, ErrorMode, init_tracing, run_aggregation};
