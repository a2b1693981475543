//! Criterion benchmarks for hot paths in the quilld gamification engine.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - Streak walk over a year of consecutive entry dates
//!   - Timestamp-to-distinct-day collapse
//!   - Catalog diff against full stats

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;

use quilld::gamification::catalog::AchievementCatalog;
use quilld::gamification::evaluator::newly_qualifying;
use quilld::gamification::stats::{current_streak, distinct_days_desc};
use quilld::gamification::UserStats;

fn bench_streak_walk(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let days: Vec<NaiveDate> = (0..365).map(|i| today - Duration::days(i)).collect();

    c.bench_function("current_streak_365_days", |b| {
        b.iter(|| current_streak(black_box(&days), black_box(today)));
    });
}

fn bench_distinct_days(c: &mut Criterion) {
    // Three entries per day for a year, unsorted arrival order.
    let stamps: Vec<_> = (0..365)
        .flat_map(|i| {
            [8, 13, 22].map(|h| {
                Utc.with_ymd_and_hms(2025, 1, 1, h, 30, 0).unwrap() + Duration::days(i)
            })
        })
        .collect();

    c.bench_function("distinct_days_desc_1095_stamps", |b| {
        b.iter(|| distinct_days_desc(black_box(&stamps)));
    });
}

fn bench_evaluator_diff(c: &mut Criterion) {
    let catalog = AchievementCatalog::builtin().unwrap();
    let stats = UserStats {
        total_entries: 400,
        current_streak: 120,
    };
    let earned: HashSet<String> = HashSet::new();

    c.bench_function("newly_qualifying_full_catalog", |b| {
        b.iter(|| newly_qualifying(black_box(&stats), catalog.all(), black_box(&earned)));
    });
}

criterion_group!(
    benches,
    bench_streak_walk,
    bench_distinct_days,
    bench_evaluator_diff
);
criterion_main!(benches);
