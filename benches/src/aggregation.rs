mod common;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use brc::prelude::*;
use common::generate_lines;

/// Benchmark line parsing throughput
fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");
    let lines = generate_lines(10_000, 400, 0);
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("valid_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_line(line).ok());
            }
        });
    });

    let malformed = generate_lines(10_000, 400, 2);
    group.bench_function("half_malformed", |b| {
        b.iter(|| {
            for line in &malformed {
                black_box(parse_line(line).ok());
            }
        });
    });

    group.finish();
}

/// Benchmark accumulator updates with different station cardinalities
fn bench_table_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_record");

    for stations in [10, 400, 10_000] {
        let lines = generate_lines(100_000, stations, 0);
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(stations), &lines, |b, lines| {
            b.iter_batched(
                Aggregator::new,
                |mut aggregator| {
                    for line in lines {
                        black_box(aggregator.process_line(line).ok());
                    }
                    aggregator
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark merging partial tables
fn bench_table_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_merge");

    for stations in [400, 10_000] {
        let build = |offset: usize| {
            let mut aggregator = Aggregator::new();
            for line in generate_lines(20_000, stations, 0).iter().skip(offset) {
                let _ = aggregator.process_line(line);
            }
            aggregator.into_summary().table
        };
        let left = build(0);
        let right = build(1);

        group.bench_with_input(
            BenchmarkId::from_parameter(stations),
            &(left, right),
            |b, (left, right)| {
                b.iter_batched(
                    || (left.clone(), right.clone()),
                    |(mut left, right)| {
                        left.merge(right);
                        left
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_table_record, bench_table_merge);
criterion_main!(benches);
