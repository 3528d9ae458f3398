pub mod error;
pub mod reading;
pub mod stats;

// Re-export commonly used types
pub use error::LineError;
pub use reading::{Reading, floor_temperature};
pub use stats::StationStats;
