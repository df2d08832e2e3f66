//! Benchmark: edge classification and snap target computation.
//!
//! Run with: `cargo bench -p pinp-core --bench classify_bench`
//!
//! Classification runs on every pointer move during a drag, so it must stay
//! far below a frame budget even on a grid sweep.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pinp_core::edge::{DEFAULT_MARGIN, classify, pullout_position, reveal_fraction, snap_target};
use pinp_core::geometry::{Point, Rect, Size};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
const OVERLAY: Size = Size::new(160.0, 90.0);

fn sweep_centers() -> Vec<Point> {
    let mut centers = Vec::with_capacity(64 * 64);
    for ix in 0..64 {
        for iy in 0..64 {
            centers.push(Point::new(
                -100.0 + f64::from(ix) * 10.0,
                -100.0 + f64::from(iy) * 16.0,
            ));
        }
    }
    centers
}

fn bench_classify(c: &mut Criterion) {
    let centers = sweep_centers();
    c.bench_function("classify/grid_4096", |b| {
        b.iter(|| {
            for center in &centers {
                let overlay = Rect::from_center_size(*center, OVERLAY);
                black_box(classify(black_box(&overlay), Some(&CONTAINER)));
            }
        });
    });

    c.bench_function("pullout_and_reveal/grid_4096", |b| {
        b.iter(|| {
            for center in &centers {
                let overlay = Rect::from_center_size(*center, OVERLAY);
                black_box(pullout_position(&overlay, Some(&CONTAINER)));
                black_box(reveal_fraction(&overlay, Some(&CONTAINER), DEFAULT_MARGIN));
            }
        });
    });
}

fn bench_snap(c: &mut Criterion) {
    let centers = sweep_centers();
    c.bench_function("classify_then_snap/grid_4096", |b| {
        b.iter(|| {
            for center in &centers {
                let overlay = Rect::from_center_size(*center, OVERLAY);
                let state = classify(&overlay, Some(&CONTAINER));
                black_box(snap_target(state, OVERLAY, &CONTAINER, *center, DEFAULT_MARGIN));
            }
        });
    });
}

criterion_group!(benches, bench_classify, bench_snap);
criterion_main!(benches);
