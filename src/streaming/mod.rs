pub mod driver;
pub mod error;

// Re-export commonly used types
pub use driver::{DEFAULT_BATCH_SIZE, Progress, StreamingDriver};
pub use error::{AbortOnError, ErrorPolicy, SilentSkip, SkipErrors};
