// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use waymark_feedback::{FeedbackController, Resolution, Transition, compose};

fn transition(i: u64) -> Transition {
    let resolution = if i % 2 == 0 {
        Resolution::success("Saved.")
    } else {
        Resolution::error("Could not save.")
    };
    Transition::new("Saving&hellip;", resolution).with_delay(Duration::from_millis(i % 7))
}

// A burst of supersessions, then a drain of the single surviving timer.
fn bench_trigger_burst(c: &mut Criterion) {
    c.bench_function("feedback/trigger_burst_100", |b| {
        b.iter_batched(
            FeedbackController::default,
            |mut controller| {
                for i in 0..100_u64 {
                    controller.trigger(Duration::from_millis(i), transition(i));
                }
                black_box(controller.poll(Duration::from_secs(1)))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_compose(c: &mut Criterion) {
    c.bench_function("describedby/compose", |b| {
        b.iter(|| {
            for (helper, feedback) in [(false, false), (true, false), (false, true), (true, true)] {
                black_box(compose(
                    black_box(helper),
                    black_box(feedback),
                    "field-feedback",
                    "field-helper",
                ));
            }
        });
    });
}

criterion_group!(benches, bench_trigger_burst, bench_compose);
criterion_main!(benches);
