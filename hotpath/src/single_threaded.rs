use brc::prelude::*;

/// Single-threaded hotpath profiling
///
/// Profiles parsing and accumulator updates without the async driver.
/// Shows where time is spent between float parsing, flooring, and table lookups.
///
/// Run with: cargo run --release --bin hotpath_single_threaded --features profiling
#[hotpath::main]
fn main() {
    println!("=== Single-Threaded Hotpath Profile ===");
    println!("Workload: 5M lines across 10K stations, 1% malformed");
    println!();

    let num_lines = 5_000_000;
    let num_stations = 10_000;

    let lines = generate_lines(num_lines, num_stations);

    println!("Starting profiled execution...");
    println!();

    let summary = run_workload(&lines);

    println!();
    println!(
        "Stations: {}, processed: {}, rejected: {}",
        summary.table.len(),
        summary.lines_processed,
        summary.lines_rejected
    );
    println!("Profiling complete. Results above show function-level breakdown.");
}

#[hotpath::measure]
fn generate_lines(num_lines: usize, num_stations: usize) -> Vec<String> {
    (0..num_lines)
        .map(|i| {
            if i % 100 == 99 {
                return "malformed line without separator".to_string();
            }
            let tenths = (i * 7919 % 1999) as i64 - 999;
            format!("Station{};{:.1}", i % num_stations, tenths as f64 / 10.0)
        })
        .collect()
}

#[hotpath::measure]
fn run_workload(lines: &[String]) -> RunSummary {
    let mut aggregator = Aggregator::new();

    for (i, line) in lines.iter().enumerate() {
        process_line(&mut aggregator, line);

        if (i + 1) % 1_000_000 == 0 {
            println!("Processed {} / {} lines", i + 1, lines.len());
        }
    }

    aggregator.into_summary()
}

#[hotpath::measure]
fn process_line(aggregator: &mut Aggregator, line: &str) {
    let _ = aggregator.process_line(line);
}
