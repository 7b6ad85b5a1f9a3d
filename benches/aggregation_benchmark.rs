use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wellness_tracker::models::{Activity, TimeOfDay};
use wellness_tracker::services::insights::{time_of_day_breakdown, weekly_aggregate};

fn build_log(count: usize) -> Vec<Activity> {
    let start = DateTime::<Utc>::from_timestamp(1_705_276_800, 0).expect("valid timestamp");
    (0..count)
        .map(|i| Activity {
            id: i.to_string(),
            name: format!("Activity {}", i),
            duration: 20 + (i % 60) as u32,
            calories: 100 + (i % 500) as u32,
            time_of_day: TimeOfDay::ALL[i % 3],
            date: start + Duration::hours(i as i64 * 7),
        })
        .collect()
}

fn benchmark_weekly_aggregate(c: &mut Criterion) {
    // Typical log size and a large one
    let small = build_log(50);
    let large = build_log(5_000);

    let mut group = c.benchmark_group("weekly_aggregate");

    group.bench_function("50_activities", |b| {
        b.iter(|| weekly_aggregate(black_box(&small)))
    });

    group.bench_function("5000_activities", |b| {
        b.iter(|| weekly_aggregate(black_box(&large)))
    });

    group.bench_function("time_of_day_5000", |b| {
        b.iter(|| time_of_day_breakdown(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_weekly_aggregate);
criterion_main!(benches);
