// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use waymark_placement::{Side, Snapshot, Space, place, resolve, resolve_with_space};

const VIEWPORT: Size = Size::new(1280.0, 720.0);

/// Low-discrepancy fraction in `[0, 1)` for the `i`th sample.
fn spread(i: usize, step: f64) -> f64 {
    (i as f64 * step).fract()
}

/// Bubbles scattered over and slightly past the viewport, so every cascade
/// branch is taken.
fn gen_bubbles(count: usize, w: f64, h: f64) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let x0 = spread(i, 0.618_033_988_749_895) * (VIEWPORT.width + w) - w;
            let y0 = spread(i, 0.414_213_562_373_095) * (VIEWPORT.height + h) - h;
            Rect::new(x0, y0, x0 + w, y0 + h)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let bubbles = gen_bubbles(10_000, 240.0, 80.0);
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(bubbles.len() as u64));
    for side in Side::REQUESTABLE {
        group.bench_function(side.as_str(), |b| {
            b.iter(|| {
                let mut fallbacks = 0_usize;
                for bubble in &bubbles {
                    if resolve(black_box(*bubble), VIEWPORT, side) != side {
                        fallbacks += 1;
                    }
                }
                black_box(fallbacks)
            });
        });
    }
    group.finish();
}

fn bench_resolve_with_space(c: &mut Criterion) {
    let spaces: Vec<Space> = (0..16_u8).map(Space::from_bits_truncate).collect();
    c.bench_function("resolve_with_space/all_masks", |b| {
        b.iter(|| {
            for space in &spaces {
                for side in Side::REQUESTABLE {
                    black_box(resolve_with_space(black_box(*space), side));
                }
            }
        });
    });
}

fn bench_place(c: &mut Criterion) {
    let snapshots: Vec<Snapshot> = gen_bubbles(1_000, 320.0, 120.0)
        .into_iter()
        .map(|bubble| Snapshot::mounted(bubble, VIEWPORT))
        .collect();
    c.bench_function("place/mounted", |b| {
        b.iter(|| {
            for snapshot in &snapshots {
                black_box(place("bench-tooltip", snapshot, Side::Top));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_resolve_with_space,
    bench_place
);
criterion_main!(benches);
