use std::collections::hash_map;

use rustc_hash::FxHashMap;

use crate::domain::{Reading, StationStats};

/// Per-station accumulators for one run
///
/// Owned by a single driver (or a single worker, for partial tables). Keys are
/// never removed and iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    stations: FxHashMap<String, StationStats>,
}

impl AggregateTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            stations: FxHashMap::default(),
        }
    }

    /// Fold a reading into its station's accumulator
    ///
    /// The station name is only copied the first time the station is seen.
    pub fn record(&mut self, reading: Reading<'_>) {
        match self.stations.get_mut(reading.station()) {
            Some(stats) => stats.record(reading.value()),
            None => {
                self.stations
                    .insert(reading.station().to_owned(), StationStats::new(reading.value()));
            }
        }
    }

    /// Merge a partial table into this one
    pub fn merge(&mut self, other: AggregateTable) {
        for (station, partial) in other.stations {
            match self.stations.entry(station) {
                hash_map::Entry::Occupied(mut e) => e.get_mut().merge(&partial),
                hash_map::Entry::Vacant(e) => {
                    e.insert(partial);
                }
            }
        }
    }

    /// Accumulator for a station, if any reading was recorded
    pub fn get(&self, station: &str) -> Option<&StationStats> {
        self.stations.get(station)
    }

    /// Number of distinct stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationStats)> + '_ {
        self.stations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries sorted by station name
    pub fn sorted(&self) -> Vec<(&str, &StationStats)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
