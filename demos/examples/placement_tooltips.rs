// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement around the viewport.
//!
//! Hovers a tooltip, a definition tooltip, and a progress description placed
//! at different spots in a 1024x768 viewport and prints the class swap the
//! host would apply.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p waymark_demos --example placement_tooltips`

use kurbo::{Rect, Size};
use waymark_placement::{Placement, Side, Snapshot};
use waymark_widgets::{DefinitionTooltip, ProgressBar, Tooltip, Trigger};

const VIEWPORT: Size = Size::new(1024.0, 768.0);

fn describe(label: &str, placement: Option<Placement>) {
    match placement {
        Some(p) => match p.class_swap() {
            Some((old, new)) => println!("  {label}: {old} -> {new}"),
            None => println!("  {label}: stays {}", p.requested.class_name()),
        },
        None => println!("  {label}: not mounted, skipped"),
    }
}

fn main() {
    env_logger::init();

    let forgot = Tooltip::new(
        "forgot-tooltip",
        "Forgot something?",
        "This is some helper text to display in a tooltip",
    )
    .with_trigger(Trigger::Url("https://example.com/reset".into()));

    let corner = Tooltip::new("corner-tooltip", "Help", "Pinned to the corner")
        .with_position(Side::Right);

    let abolish = DefinitionTooltip::new(
        "abolish-tooltip",
        "abolish",
        "When you abolish something, you put an end to it.",
    )
    .with_position(Side::Left);

    let level = ProgressBar::new("level-1", "Level 1", "Lorem ipsum dolor sit amet.", 75)
        .expect("75 is a valid percentage")
        .with_tooltip(Side::Bottom);

    println!("== Hover ==");

    // Plenty of room above the anchor: nothing changes.
    let snapshot = Snapshot::mounted(Rect::new(400.0, 200.0, 640.0, 260.0), VIEWPORT);
    let p = forgot.pointer_enter(&snapshot);
    describe("forgot", p);
    assert_eq!(p.map(|p| p.resolved), Some(Side::Top));

    // Wide bubble in the bottom-right corner: only the top is clear.
    let snapshot = Snapshot::mounted(Rect::new(-20.0, 700.0, 1060.0, 790.0), VIEWPORT);
    let p = corner.pointer_enter(&snapshot);
    describe("corner", p);
    assert_eq!(p.map(|p| p.resolved), Some(Side::Top));

    // Term on the left edge: the definition flips to the right.
    let snapshot = Snapshot::mounted(Rect::new(-180.0, 300.0, 0.5, 380.0), VIEWPORT);
    let p = abolish.pointer_enter(&snapshot);
    describe("abolish", p);
    assert_eq!(p.map(|p| p.resolved), Some(Side::Right));

    // Progress bar at the bottom of the page: description goes above.
    let snapshot = Snapshot::mounted(Rect::new(300.0, 740.0, 700.0, 800.0), VIEWPORT);
    let p = level.pointer_enter(&snapshot);
    describe("level-1", p);
    assert_eq!(p.map(|p| p.resolved), Some(Side::Top));

    // Hover before first paint: reported and skipped.
    let p = forgot.pointer_enter(&Snapshot::unmounted(VIEWPORT));
    describe("forgot (early)", p);
    assert!(p.is_none());
}
