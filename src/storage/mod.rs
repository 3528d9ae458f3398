pub mod table;

// Re-export commonly used types
pub use table::AggregateTable;
