// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select and radio group feedback.
//!
//! Each option maps to a different outcome. An unknown select value clears
//! the feedback instead of reporting anything. The radio group announces
//! politely.
//!
//! Run:
//! - `cargo run -p waymark_demos --example feedback_choices`

use std::time::Duration;

use waymark_feedback::{FeedbackPhase, Politeness, Resolution, Transition};
use waymark_widgets::{Control, ValueMirror};

const DELAY: Duration = Duration::from_secs(2);

fn subscription(value: &str) -> Resolution {
    match value {
        "special-offers" => {
            Resolution::success("We're going to really hammer you with special offers!")
        }
        "new-releases" => Resolution::error(
            "Uh, oh! Something went wrong updating your newsletter subscription settings.",
        ),
        "upcoming-events" => Resolution::info("Special events are our specialty."),
        _ => Resolution::Clear,
    }
}

fn difficulty(value: &str) -> Resolution {
    match value {
        "difficult" => Resolution::success("Difficulty settings updated successfully."),
        "regular" => Resolution::error(
            "Uh, oh! Something went wrong updating your difficulty settings. Please try again.",
        ),
        _ => Resolution::info(
            "People that chose this setting also benefit from this information.",
        ),
    }
}

fn choose(control: &mut Control, now: &mut Duration, busy: &str, resolution: Resolution) {
    control.act(*now, Transition::new(busy, resolution));
    *now += DELAY;
    control.tick(*now);
    let region = control.live_region();
    let text = if region.hidden {
        "<hidden>"
    } else {
        region.text
    };
    println!("  [{} {}] {text}", region.aria_live(), region.context_class);
}

fn main() {
    env_logger::init();
    let mut now = Duration::ZERO;

    println!("== Select ==");
    let mut select = Control::new("select-menu-5")
        .with_helper_text("We'll only send you emails once a day.");
    for value in ["special-offers", "new-releases", "upcoming-events", ""] {
        choose(
            &mut select,
            &mut now,
            "Updating subscription settings&hellip;",
            subscription(value),
        );
    }
    assert_eq!(select.feedback().phase(), FeedbackPhase::Idle);
    assert_eq!(
        select.described_by().as_deref(),
        Some("select-menu-5-helper")
    );

    println!("== Radio group ==");
    let mut radio = Control::new("radio-group-6").with_politeness(Politeness::Polite);
    let mut selected: ValueMirror<Option<String>> = ValueMirror::new(None);
    for value in ["difficult", "regular", "easy"] {
        selected.edit(Some(value.into()));
        choose(
            &mut radio,
            &mut now,
            "Updating difficulty settings&hellip;",
            difficulty(value),
        );
    }
    assert_eq!(radio.feedback().phase(), FeedbackPhase::Info);
    let (first, last) = (radio.ids().option(1), radio.ids().option(3));
    println!("  option ids: {first} .. {last}");
    println!("  selected: {:?}", selected.value());
}
