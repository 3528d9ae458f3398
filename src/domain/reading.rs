/// A single parsed measurement borrowed from its raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading<'a> {
    station: &'a str,
    value: i64,
}

impl<'a> Reading<'a> {
    pub fn new(station: &'a str, value: i64) -> Self {
        Self { station, value }
    }

    /// Station name, already trimmed
    pub fn station(&self) -> &'a str {
        self.station
    }

    /// Temperature floored toward negative infinity
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Floor a temperature to an integer, rejecting values with no `i64` floor
pub fn floor_temperature(value: f64) -> Option<i64> {
    // 2^63 as f64; every finite float below it floors into range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !value.is_finite() {
        return None;
    }

    let floored = value.floor();
    if floored < -LIMIT || floored >= LIMIT {
        return None;
    }

    Some(floored as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor_temperature(3.9), Some(3));
        assert_eq!(floor_temperature(-3.1), Some(-4));
        assert_eq!(floor_temperature(-0.5), Some(-1));
        assert_eq!(floor_temperature(5.0), Some(5));
        assert_eq!(floor_temperature(-0.0), Some(0));
    }

    #[test]
    fn floor_rejects_non_finite() {
        assert_eq!(floor_temperature(f64::NAN), None);
        assert_eq!(floor_temperature(f64::INFINITY), None);
        assert_eq!(floor_temperature(f64::NEG_INFINITY), None);
    }

    #[test]
    fn floor_rejects_out_of_range() {
        assert_eq!(floor_temperature(1e19), None);
        assert_eq!(floor_temperature(-1e19), None);
        assert_eq!(floor_temperature(-9_223_372_036_854_775_808.0), Some(i64::MIN));
    }

    #[test]
    fn getters_return_correct_values() {
        let reading = Reading::new("Hamburg", 12);
        assert_eq!(reading.station(), "Hamburg");
        assert_eq!(reading.value(), 12);
    }
}
