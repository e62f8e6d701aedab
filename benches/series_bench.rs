// ABOUTME: Criterion benchmarks for catalog filtering and activity detail derivation
// ABOUTME: Measures single-pass filtering and full builds over multi-day minute catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

//! Criterion benchmarks for the activity series builder.
//!
//! Catalogs span several days of per-minute samples so that most of the
//! input falls outside the activity window, as it does on a real device.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use cardio_series::{Activity, ActivityBuilder, ActivitySeriesBuilder, MinuteData};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const MINUTES_PER_DAY: i64 = 1440;

fn day_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Shuffled-looking catalog of `days` days of samples, one per minute
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn generate_catalog(days: i64) -> Vec<MinuteData> {
    let total = days * MINUTES_PER_DAY;
    (0..total)
        .map(|i| {
            // Stride through the range so the catalog is not pre-sorted
            let minute = (i * 7919) % total;
            let heart_rate = if minute % 11 == 0 {
                None
            } else {
                Some(60 + (minute % 90) as u32)
            };
            MinuteData::new(
                day_start() + Duration::minutes(minute),
                heart_rate,
                (minute % 130) as u32,
            )
        })
        .collect()
}

/// 45 minute walk on the last catalog day
fn bench_activity(days: i64) -> (Activity, NaiveDate) {
    let start = day_start() + Duration::days(days - 1) + Duration::hours(17);
    let activity = ActivityBuilder::from_duration("bench", "Walk", start, Duration::minutes(45))
        .distance_km(3.6)
        .steps(5400)
        .build();
    (activity, start.date())
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_minutes_for_activity");
    let builder = ActivitySeriesBuilder::new();

    for days in [1_i64, 7, 30] {
        let catalog = generate_catalog(days);
        let (activity, date) = bench_activity(days);
        group.throughput(Throughput::Elements(catalog.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &catalog, |b, catalog| {
            b.iter(|| builder.filter_minutes_for_activity(black_box(&activity), black_box(catalog), date));
        });
    }
    group.finish();
}

fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_activity_detail");
    let builder = ActivitySeriesBuilder::new();

    for days in [1_i64, 7] {
        let catalog = generate_catalog(days);
        let (activity, date) = bench_activity(days);
        group.throughput(Throughput::Elements(catalog.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &catalog, |b, catalog| {
            b.iter(|| builder.build(black_box(&activity), black_box(catalog), date));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filtering, bench_full_build);
criterion_main!(benches);
