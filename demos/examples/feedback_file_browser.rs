// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File browser feedback, with a host-driven timer.
//!
//! The host owns the timer and resolves with the ticket it got when the busy
//! phase started. A second selection before the first upload finishes makes
//! the first ticket stale, so its late result is dropped.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p waymark_demos --example feedback_file_browser`

use waymark_feedback::{FeedbackPhase, Resolution};
use waymark_widgets::{Control, ProgressBar};

const HELP: &str = "Select a file between 1kb and 100GB to upload.";

fn upload_result(files: &[&str]) -> Resolution {
    if files.is_empty() {
        return Resolution::error("Uh, oh! No file was selected. Please try again.");
    }
    let items: String = files.iter().map(|f| format!("<li>{f}</li>")).collect();
    Resolution::success(format!(
        "<p>Uploaded the following files successfully:</p><ul>{items}</ul>"
    ))
}

fn main() {
    env_logger::init();

    let mut browser = Control::new("browser-5").with_helper_text(HELP);
    let mut progress = ProgressBar::new("browser-5-progress", "Upload", "Files uploading.", 0)
        .expect("0 is a valid percentage");

    let first = browser
        .feedback_mut()
        .begin("Uploading files...")
        .expect("control is enabled");
    progress.announce("Upload started.");

    // The user picks again before the first upload returns.
    let second = browser
        .feedback_mut()
        .begin("Uploading files...")
        .expect("control is enabled");

    let applied = browser
        .feedback_mut()
        .resolve(first, upload_result(&["old.txt"]));
    println!("first upload result applied: {applied}");
    assert!(!applied);

    let applied = browser
        .feedback_mut()
        .resolve(second, upload_result(&["report.pdf", "notes.md"]));
    progress.set_value(100).expect("100 is a valid percentage");
    progress.announce("Upload complete.");
    println!("second upload result applied: {applied}");
    assert!(applied);

    assert_eq!(browser.feedback().phase(), FeedbackPhase::Success);
    println!("{:?}", browser.feedback().message());
    println!(
        "progress {}%: {:?}",
        progress.value(),
        progress.audible_feedback
    );
}
