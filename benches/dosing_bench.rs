// ABOUTME: Criterion benchmarks for the dosing calculators
// ABOUTME: Measures single conversions, the full protocol planner, and chart generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the dosing calculators.
//!
//! The single-call benchmarks guard against accidental allocation in the
//! hot formulas; the chart group shows where parallel row generation pays
//! off.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use peptide_dosing::{
    calculate_protocol, dose_chart, dose_to_volume_with_syringe, reconstitute, ProtocolInput,
    SyringeClass,
};

/// Chart sizes from a typical reference card up to a stress list
const CHART_SIZES: [usize; 3] = [8, 128, 4096];

#[allow(clippy::cast_precision_loss)]
fn dose_list(count: usize) -> Vec<f64> {
    (1..=count).map(|i| (i as f64) * 25.0).collect()
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("reconstitute", |b| {
        b.iter(|| reconstitute(black_box(5.0), black_box(2.5)));
    });

    group.bench_function("dose_to_volume_with_syringe", |b| {
        b.iter(|| {
            dose_to_volume_with_syringe(
                black_box(250.0),
                black_box(2.0),
                black_box(SyringeClass::ThreeTenthsMl),
            )
        });
    });

    group.finish();
}

fn bench_protocol(c: &mut Criterion) {
    let input = ProtocolInput {
        vial_mg: 5.0,
        diluent_ml: 2.5,
        dose_mcg: 250.0,
        syringe: SyringeClass::OneMl,
        injections_per_day: 1.0,
        price_per_vial: Some(50.0),
        target_days: Some(28.0),
    };

    c.bench_function("calculate_protocol", |b| {
        b.iter(|| calculate_protocol(black_box(&input)));
    });
}

fn bench_dose_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("dose_chart");

    for size in CHART_SIZES {
        let doses = dose_list(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doses, |b, doses| {
            b.iter(|| dose_chart(black_box(2.0), SyringeClass::HalfMl, black_box(doses)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_protocol, bench_dose_chart);
criterion_main!(benches);
