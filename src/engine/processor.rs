use tracing::trace;

use crate::domain::LineError;
use crate::io::parse_line;
use crate::storage::AggregateTable;

/// Parses raw lines and folds them into an owned table
///
/// One aggregator per execution path: the driver owns one, and each worker
/// batch builds its own before being merged back.
#[derive(Debug, Default)]
pub struct Aggregator {
    table: AggregateTable,
    lines_processed: u64,
    lines_rejected: u64,
}

impl Aggregator {
    /// Create a new aggregator with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single raw line
    ///
    /// Every line counts as processed; rejected lines are also counted
    /// separately and leave the table untouched.
    pub fn process_line(&mut self, line: &str) -> Result<(), LineError> {
        self.lines_processed += 1;

        match parse_line(line) {
            Ok(reading) => {
                self.table.record(reading);
                Ok(())
            }
            Err(e) => {
                trace!(line = self.lines_processed, error = %e, "Line rejected");
                self.lines_rejected += 1;
                Err(e)
            }
        }
    }

    /// Merge another aggregator's table and counters into this one
    pub fn merge(&mut self, other: Aggregator) {
        self.table.merge(other.table);
        self.lines_processed += other.lines_processed;
        self.lines_rejected += other.lines_rejected;
    }

    /// Get reference to the table built so far
    pub fn table(&self) -> &AggregateTable {
        &self.table
    }

    pub fn lines_processed(&self) -> u64 {
        self.lines_processed
    }

    pub fn lines_rejected(&self) -> u64 {
        self.lines_rejected
    }

    /// Finish the run and hand the table off
    pub fn into_summary(self) -> RunSummary {
        RunSummary {
            table: self.table,
            lines_processed: self.lines_processed,
            lines_rejected: self.lines_rejected,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub table: AggregateTable,
    /// All lines pulled from the source, rejected ones included
    pub lines_processed: u64,
    pub lines_rejected: u64,
}

impl RunSummary {
    /// Lines that contributed to the table
    pub fn lines_accepted(&self) -> u64 {
        self.lines_processed - self.lines_rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_line_records_valid_reading() {
        let mut aggregator = Aggregator::new();
        aggregator.process_line("Hamburg;12.0").unwrap();

        let stats = aggregator.table().get("Hamburg").unwrap();
        assert_eq!(stats.sum(), 12);
        assert_eq!(aggregator.lines_processed(), 1);
        assert_eq!(aggregator.lines_rejected(), 0);
    }

    #[test]
    fn process_line_rejects_without_touching_table() {
        let mut aggregator = Aggregator::new();
        aggregator.process_line("Hamburg;12.0").unwrap();
        let before = aggregator.table().clone();

        for line in ["NoSeparatorHere", ";12.3", "City;abc", ""] {
            assert!(aggregator.process_line(line).is_err());
        }

        assert_eq!(aggregator.table(), &before);
        assert_eq!(aggregator.lines_processed(), 5);
        assert_eq!(aggregator.lines_rejected(), 4);
    }

    #[test]
    fn scenario_matches_expected_table() {
        let mut aggregator = Aggregator::new();
        for line in ["Hamburg;12.0", "Hamburg;8.5", "Berlin;-3.2", "Hamburg;-1.0"] {
            aggregator.process_line(line).unwrap();
        }

        let summary = aggregator.into_summary();
        assert_eq!(summary.table.len(), 2);

        let hamburg = summary.table.get("Hamburg").unwrap();
        assert_eq!(
            (hamburg.sum(), hamburg.count(), hamburg.min(), hamburg.max()),
            (19, 3, -1, 12)
        );

        let berlin = summary.table.get("Berlin").unwrap();
        assert_eq!(
            (berlin.sum(), berlin.count(), berlin.min(), berlin.max()),
            (-4, 1, -4, -4)
        );

        assert_eq!(summary.lines_processed, 4);
        assert_eq!(summary.lines_accepted(), 4);
    }

    #[test]
    fn merge_adds_counters_and_tables() {
        let mut left = Aggregator::new();
        left.process_line("Hamburg;12.0").unwrap();
        left.process_line("bad").unwrap_err();

        let mut right = Aggregator::new();
        right.process_line("Hamburg;-1.0").unwrap();

        left.merge(right);

        assert_eq!(left.lines_processed(), 3);
        assert_eq!(left.lines_rejected(), 1);
        assert_eq!(left.table().get("Hamburg").unwrap().count(), 2);
    }

    #[test]
    fn empty_aggregator_summarizes_to_empty_table() {
        let summary = Aggregator::new().into_summary();

        assert!(summary.table.is_empty());
        assert_eq!(summary.lines_processed, 0);
        assert_eq!(summary.lines_rejected, 0);
    }
}
