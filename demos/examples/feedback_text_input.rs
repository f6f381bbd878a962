// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text input feedback on blur.
//!
//! Blur triggers an update only when the value changed. A non-empty value
//! succeeds and an empty one fails. A parent-supplied value then overwrites
//! whatever the user typed.
//!
//! Run:
//! - `cargo run -p waymark_demos --example feedback_text_input`

use std::time::Duration;

use waymark_feedback::{FeedbackPhase, Resolution, Transition};
use waymark_widgets::{Control, ValueMirror};

const DELAY: Duration = Duration::from_secs(2);

fn blur_transition(value: &str) -> Transition {
    let resolution = if value.is_empty() {
        Resolution::error("Uh, oh! Something went wrong. Please try again.")
    } else {
        Resolution::success("Setting updated successfully.")
    };
    Transition::new("Updating setting&hellip;", resolution)
}

struct TextField {
    control: Control,
    value: ValueMirror<String>,
    saved: String,
}

impl TextField {
    fn blur(&mut self, now: Duration) {
        let current = self.value.value().clone();
        if current == self.saved {
            println!("  blur at {now:?}: unchanged, no update");
            return;
        }
        self.control.act(now, blur_transition(&current));
        self.saved = current;
        println!("  blur at {now:?}: {:?}", self.control.feedback().text());
    }
}

fn main() {
    env_logger::init();

    let mut field = TextField {
        control: Control::new("appt-text-input")
            .with_helper_text("Enter a value to simulate a successful update."),
        value: ValueMirror::new(String::new()),
        saved: String::new(),
    };
    let mut now = Duration::ZERO;

    println!("== Edit and blur ==");
    field.blur(now);
    field.value.edit("Ada".into());
    field.blur(now);
    now += DELAY;
    field.control.tick(now);
    println!("  resolved: {:?}", field.control.feedback().message());
    assert_eq!(field.control.feedback().phase(), FeedbackPhase::Success);

    println!("== Clear and blur ==");
    field.value.edit(String::new());
    field.blur(now);
    now += DELAY;
    field.control.tick(now);
    println!("  resolved: {:?}", field.control.feedback().message());
    assert_eq!(field.control.feedback().phase(), FeedbackPhase::Error);

    println!("== External value arrives mid-edit ==");
    field.value.edit("half-typed".into());
    field.value.sync("From the server".into());
    println!("  displayed: {:?}", field.value.value());
    assert_eq!(field.value.value(), "From the server");

    field.control.dispose();
}
