//! Machine benchmark: measure tick and prefix-slice cost.
//!
//! A tick is bounds checks and a counter bump; it should be low
//! single-digit nanoseconds so the animation cost is all scheduling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use typewheel::{Machine, SegmentText, Timing};

fn cycle_ticks(first: &str, second: &str) -> usize {
    let a = SegmentText::new(first);
    let b = SegmentText::new(second);
    // One frame per grapheme written and deleted, plus the two holds.
    2 * (a.len() + b.len()) + 2
}

fn machine_full_cycle_ascii(c: &mut Criterion) {
    let ticks = cycle_ticks("Ideas of today, ", "investment of tomorrow");
    c.bench_function("machine_cycle_ascii", |bench| {
        bench.iter(|| {
            let mut machine = Machine::new(
                black_box("Ideas of today, "),
                black_box("investment of tomorrow"),
                Timing::uniform(Duration::from_millis(1)),
            );
            for _ in 0..ticks {
                black_box(machine.advance());
            }
        });
    });
}

fn machine_full_cycle_arabic(c: &mut Criterion) {
    let ticks = cycle_ticks("أفـكار اليـوم ", "إستثمار الغـد");
    c.bench_function("machine_cycle_arabic", |bench| {
        bench.iter(|| {
            let mut machine = Machine::new(
                black_box("أفـكار اليـوم "),
                black_box("إستثمار الغـد"),
                Timing::uniform(Duration::from_millis(1)),
            );
            for _ in 0..ticks {
                black_box(machine.advance());
            }
        });
    });
}

fn segment_prefix_slicing(c: &mut Criterion) {
    let segment = SegmentText::new("إستثمار الغـد");
    let len = segment.len();
    c.bench_function("segment_prefix", |bench| {
        bench.iter(|| {
            for n in 0..=len {
                black_box(segment.prefix(black_box(n)));
            }
        });
    });
}

criterion_group!(
    benches,
    machine_full_cycle_ascii,
    machine_full_cycle_arabic,
    segment_prefix_slicing,
);
criterion_main!(benches);
