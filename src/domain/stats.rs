/// Running statistics for one station
///
/// Only constructed from a first value, so `count >= 1` always holds.
/// The sum is `i128`: `u64::MAX` values of magnitude `2^63` cannot wrap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationStats {
    sum: i128,
    count: u64,
    min: i64,
    max: i64,
}

impl StationStats {
    /// Start a new accumulator from its first value
    pub fn new(value: i64) -> Self {
        Self {
            sum: i128::from(value),
            count: 1,
            min: value,
            max: value,
        }
    }

    /// Fold one more value into the accumulator
    pub fn record(&mut self, value: i64) {
        self.sum += i128::from(value);
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Combine with a partial accumulator for the same station
    pub fn merge(&mut self, other: &StationStats) {
        self.sum += other.sum;
        self.count += other.count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn sum(&self) -> i128 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Arithmetic mean of the floored values
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}
