//! Criterion benchmarks for [`Arrangement`] seat operations.
//!
//! Every assignment rescans the whole hall to count the candidate's domain, so
//! these benches track how that scan grows with the number of seats.
//!
//! Run with:
//! ```bash
//! cargo bench --package seating-core --bench arrangement_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seating_core::{Arrangement, SeatNumber, Student};

const DOMAINS: [&str; 4] = ["CS", "EE", "ME", "CE"];

/// Builds an arrangement of `total` seats with every odd seat occupied,
/// cycling through [`DOMAINS`].
fn half_full_arrangement(total: SeatNumber) -> Arrangement {
    let mut arrangement = Arrangement::new(total, total.unsigned_abs()).expect("valid arrangement");
    for seat in (1..=total).step_by(2) {
        let domain = DOMAINS[seat as usize % DOMAINS.len()];
        arrangement
            .assign_seat(Student::new(format!("student-{seat}"), seat, domain), seat)
            .expect("cap equals seat count, so every assignment fits");
    }
    arrangement
}

fn bench_assign_and_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_and_clear");
    for total in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            let mut arrangement = half_full_arrangement(total);
            b.iter(|| {
                // Seat 2 is always empty in the fixture.
                arrangement
                    .assign_seat(Student::new("bench", 0, "CS"), black_box(2))
                    .expect("seat 2 is free");
                arrangement.clear_seat(black_box(2)).expect("seat 2 exists");
            });
        });
    }
    group.finish();
}

fn bench_domain_cap_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_domain_cap_reached");
    for total in [10, 50, 200] {
        let arrangement = half_full_arrangement(total);
        group.bench_with_input(BenchmarkId::from_parameter(total), &arrangement, |b, arrangement| {
            // An absent domain forces a full scan.
            b.iter(|| arrangement.is_domain_cap_reached(black_box("Philosophy")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assign_and_clear, bench_domain_cap_scan);
criterion_main!(benches);
