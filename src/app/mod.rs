pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

// Re-export commonly used types
pub use cli::CliApp;
pub use config::{Config, ErrorMode};
pub use error::AppError;
pub use logging::init_tracing;
pub use runner::{aggregate, run_aggregation};
