use brc::prelude::*;
use futures::stream;
use tokio::runtime::Builder;

/// Multi-worker hotpath profiling
///
/// Profiles the streaming driver fanning batches out to blocking workers and
/// merging their partial tables back.
///
/// Run with: cargo run --release --bin hotpath_multi_worker --features profiling
#[hotpath::main]
fn main() {
    println!("=== Multi-Worker Hotpath Profile ===");
    println!("Workload: 5M lines across 10K stations, 100K-line batches");
    println!();

    let runtime = match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to build runtime: {e}");
            std::process::exit(1);
        }
    };

    for workers in [1, 4, 8] {
        println!("Workers: {workers}");
        match runtime.block_on(run_driver(workers)) {
            Ok(summary) => println!(
                "  stations: {}, processed: {}",
                summary.table.len(),
                summary.lines_processed
            ),
            Err(e) => eprintln!("  run failed: {e}"),
        }
    }

    println!();
    println!("Profiling complete. Results above show function-level breakdown including merge costs.");
}

#[hotpath::measure]
async fn run_driver(workers: usize) -> Result<RunSummary, EngineError> {
    let lines = (0..5_000_000usize).map(|i| {
        let tenths = (i * 7919 % 1999) as i64 - 999;
        Ok::<_, IoError>(format!("Station{};{:.1}", i % 10_000, tenths as f64 / 10.0))
    });

    StreamingDriver::new(SilentSkip)
        .with_batch_size(100_000)
        .with_workers(workers)
        .run(stream::iter(lines))
        .await
}
