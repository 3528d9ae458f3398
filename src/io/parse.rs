use crate::domain::{LineError, Reading, floor_temperature};

/// Parse a raw `station;temperature` line
///
/// Splits on the first `;`, trims both halves and floors the temperature.
/// Rejections are ordinary results; nothing here panics on bad input.
pub fn parse_line(line: &str) -> Result<Reading<'_>, LineError> {
    let Some((station, value)) = line.split_once(';') else {
        return Err(LineError::MalformedLine(line.to_string()));
    };

    let station = station.trim();
    let value = value.trim();
    if station.is_empty() || value.is_empty() {
        return Err(LineError::MalformedLine(line.to_string()));
    }

    let temperature = value
        .parse::<f64>()
        .ok()
        .and_then(floor_temperature)
        .ok_or_else(|| LineError::MalformedValue(value.to_string()))?;

    Ok(Reading::new(station, temperature))
}
