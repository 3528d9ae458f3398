#![allow(dead_code)]

use brc::prelude::*;
use futures::stream;
use futures::Stream;

const STATIONS: [&str; 12] = [
    "Abha", "Accra", "Berlin", "Bulawayo", "Hamburg", "Istanbul", "Oslo", "Palermo",
    "São Paulo", "St. John's", "Tokyo", "Washington, D.C.",
];

/// Generate `station;temperature` lines across `num_stations` stations
///
/// Every `malformed_every`-th line is malformed (0 disables malformed lines).
pub fn generate_lines(num_lines: usize, num_stations: usize, malformed_every: usize) -> Vec<String> {
    (0..num_lines)
        .map(|i| {
            if malformed_every != 0 && i % malformed_every == malformed_every - 1 {
                return "NoSeparatorHere".to_string();
            }
            let station = i % num_stations.max(1);
            let base = STATIONS[station % STATIONS.len()];
            let tenths = (i * 7919 % 1999) as i64 - 999;
            format!("{}{};{:.1}", base, station, tenths as f64 / 10.0)
        })
        .collect()
}

/// Same dataset as a newline-separated text blob
pub fn generate_text(num_lines: usize, num_stations: usize, malformed_every: usize) -> String {
    let mut text = generate_lines(num_lines, num_stations, malformed_every).join("\n");
    text.push('\n');
    text
}

/// Wrap pre-generated lines as a line source stream
pub fn line_stream(lines: Vec<String>) -> impl Stream<Item = Result<String, IoError>> {
    stream::iter(lines.into_iter().map(Ok))
}
