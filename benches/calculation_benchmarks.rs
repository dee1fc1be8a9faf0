//! Performance benchmarks for the work-time engine.
//!
//! This benchmark suite tracks the two computation entry points:
//! - Single interval classification
//! - Payroll aggregation over a day, a month, and a year of records
//! - A 100-staff batch loop, the surrounding service's hot path
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use timecard_engine::calculation::{analyze_interval, calculate_payroll};
use timecard_engine::config::{OvertimeRule, PolicySettings};
use timecard_engine::models::{Attendance, CompensationTerms, TimeOfDay, WorkInterval};

fn policy() -> PolicySettings {
    PolicySettings::default()
}

/// Creates an attendance list of the given size with mixed hours.
fn create_attendances(count: usize) -> Vec<Attendance> {
    let base_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..count)
        .map(|i| Attendance {
            staff_id: "staff_bench_001".to_string(),
            date: base_date + chrono::Days::new(i as u64),
            start_time: TimeOfDay::parse("start_time", "09:00").unwrap(),
            end_time: TimeOfDay::parse("end_time", "18:00").unwrap(),
            work_hours: Decimal::from(if i % 3 == 0 { 10 } else { 8 }),
        })
        .collect()
}

fn hourly_terms() -> CompensationTerms {
    CompensationTerms {
        hourly_rate: Some(Decimal::from(1500)),
        ..CompensationTerms::default()
    }
}

fn bench_interval_analysis(c: &mut Criterion) {
    let policy = policy();
    let fixed_policy = PolicySettings {
        overtime_rule: OvertimeRule::FixedBoundary,
        ..PolicySettings::default()
    };
    let day_shift = WorkInterval::from_strings("2025-02-12", "09:00", "18:00").unwrap();
    let night_shift = WorkInterval::from_strings("2025-02-12", "21:00", "06:00").unwrap();

    let mut group = c.benchmark_group("interval_analysis");
    group.bench_function("day_shift_rolling", |b| {
        b.iter(|| analyze_interval(black_box(&day_shift), black_box(&policy)))
    });
    group.bench_function("overnight_shift_rolling", |b| {
        b.iter(|| analyze_interval(black_box(&night_shift), black_box(&policy)))
    });
    group.bench_function("day_shift_fixed", |b| {
        b.iter(|| analyze_interval(black_box(&day_shift), black_box(&fixed_policy)))
    });
    group.finish();
}

fn bench_interval_parsing(c: &mut Criterion) {
    c.bench_function("interval_from_strings", |b| {
        b.iter(|| {
            WorkInterval::from_strings(
                black_box("2025-02-12"),
                black_box("09:00:00"),
                black_box("18:00:00"),
            )
        })
    });
}

fn bench_payroll_aggregation(c: &mut Criterion) {
    let policy = policy();
    let terms = hourly_terms();

    let mut group = c.benchmark_group("payroll_aggregation");
    for count in [1usize, 22, 310] {
        let attendances = create_attendances(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &attendances,
            |b, attendances| {
                b.iter(|| calculate_payroll(black_box(&terms), black_box(attendances), &policy))
            },
        );
    }
    group.finish();
}

fn bench_staff_batch(c: &mut Criterion) {
    let policy = policy();
    let terms = hourly_terms();
    let month: Vec<Vec<Attendance>> = (0..100).map(|_| create_attendances(22)).collect();

    c.bench_function("payroll_batch_100_staff", |b| {
        b.iter(|| {
            for attendances in &month {
                black_box(calculate_payroll(&terms, attendances, &policy));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_interval_analysis,
    bench_interval_parsing,
    bench_payroll_aggregation,
    bench_staff_batch
);
criterion_main!(benches);
