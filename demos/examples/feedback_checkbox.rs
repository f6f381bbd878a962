// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox feedback lifecycle.
//!
//! Toggling the box reports "Updating…" immediately and the outcome two
//! seconds later. Checking succeeds; unchecking fails with a support link and
//! sends focus back to the checkbox.
//! Time is simulated so the run is instant.
//!
//! Run:
//! - `cargo run -p waymark_demos --example feedback_checkbox`

use std::time::Duration;

use waymark_feedback::{FeedbackPhase, Resolution, Transition};
use waymark_widgets::{Control, ValueMirror};

const HELP: &str = "Checking this box will remove timers when you are answering questions \
    during training and taking quizzes.";
const SUPPORT: &str = "If you continue to have problems, please \
    <a href=\"mailto:support@example.com\">contact support</a> for assistance.";

fn toggle_transition(checked: bool) -> Transition {
    let resolution = if checked {
        Resolution::success("Timer settings updated successfully.")
    } else {
        Resolution::error(format!(
            "Uh, oh! Something went wrong updating your timer settings. Please try again. {SUPPORT}"
        ))
    };
    Transition::new("Updating timer settings&hellip;", resolution)
}

fn render(control: &Control, checked: bool) {
    let region = control.live_region();
    let text = if region.hidden {
        "<hidden>"
    } else {
        region.text
    };
    println!(
        "  checked={checked} enabled={} describedby={:?} [{} {}] {}",
        control.is_interactive(),
        control.described_by(),
        region.aria_live(),
        region.context_class,
        text
    );
}

fn main() {
    env_logger::init();

    let mut checkbox = Control::new("standalone-checkbox").with_helper_text(HELP);
    let mut value = ValueMirror::new(false);
    let mut now = Duration::ZERO;

    println!("== Initial ==");
    render(&checkbox, *value.value());

    for _ in 0..2 {
        let checked = !*value.value();
        value.edit(checked);
        checkbox.act(now, toggle_transition(checked));
        println!("== Toggled at {now:?} ==");
        render(&checkbox, checked);

        now += Duration::from_secs(2);
        assert!(checkbox.tick(now));
        println!("== Resolved at {now:?} ==");
        render(&checkbox, checked);
        if checkbox.take_focus_request() {
            println!("  focus returns to #{}", checkbox.ids().id());
        }
    }

    assert_eq!(checkbox.feedback().phase(), FeedbackPhase::Error);
    let text = checkbox.feedback().text().unwrap_or_default();
    assert!(text.contains("contact support"));
}
