pub mod error;
pub mod line_source;
pub mod parse;
pub mod report;

// Re-export commonly used types
pub use error::IoError;
pub use line_source::LineSource;
pub use parse::parse_line;
pub use report::{CsvReport, JsonReport, Report, ReportFormat, TextReport};
