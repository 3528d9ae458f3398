mod common;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use brc::prelude::*;
use common::{generate_lines, generate_text, line_stream};
use tokio::runtime::Runtime;

const LINES: usize = 200_000;

/// Benchmark the driver across batch sizes (single worker)
fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_batch_size");
    let runtime = Runtime::new().unwrap();
    group.throughput(Throughput::Elements(LINES as u64));

    for batch_size in [1_000, 10_000, 100_000, DEFAULT_BATCH_SIZE] {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.to_async(&runtime).iter_batched(
                    || generate_lines(LINES, 400, 1_000),
                    |lines| async move {
                        let summary = StreamingDriver::new(SilentSkip)
                            .with_batch_size(batch_size)
                            .run(line_stream(lines))
                            .await
                            .unwrap();
                        black_box(summary);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark worker fan-out with a fixed batch size
fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_workers");
    let runtime = Runtime::new().unwrap();
    group.throughput(Throughput::Elements(LINES as u64));

    for workers in [1, 2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.to_async(&runtime).iter_batched(
                || generate_lines(LINES, 400, 0),
                |lines| async move {
                    let summary = StreamingDriver::new(SilentSkip)
                        .with_batch_size(20_000)
                        .with_workers(workers)
                        .run(line_stream(lines))
                        .await
                        .unwrap();
                    black_box(summary);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the full pipeline: bytes -> lines -> table -> report
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let runtime = Runtime::new().unwrap();
    let text = generate_text(LINES, 400, 0);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for format in [ReportFormat::Text, ReportFormat::Csv, ReportFormat::Json] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{format:?}")),
            &format,
            |b, &format| {
                b.to_async(&runtime).iter(|| async {
                    let summary = StreamingDriver::new(SilentSkip)
                        .run(LineSource::new(text.as_bytes()))
                        .await
                        .unwrap();

                    let mut output = Vec::new();
                    format.write(&summary, &mut output).await.unwrap();
                    black_box(output);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_batch_sizes, bench_workers, bench_full_pipeline);
criterion_main!(benches);
