// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side resolution: the fallback cascade and the measured entry point.
//!
//! ## Cascade
//!
//! When the requested side has no room, the remaining sides are tried in a
//! fixed order and the first one with room wins:
//!
//! | requested | fallbacks              |
//! |-----------|------------------------|
//! | `bottom`  | `top`, `left`, `right` |
//! | `left`    | `right`, `top`, `bottom` |
//! | `right`   | `left`, `top`, `bottom` |
//! | `top`     | `bottom`, `left`, `right` |
//!
//! If none has room the result is [`Side::Default`].

use kurbo::{Rect, Size};

use crate::types::{Placement, Side, Space};

/// Source of live layout geometry for a single bubble.
///
/// Implemented by the host. The resolver never queries layout itself; it only
/// consumes what this trait reports at the moment of the call.
pub trait Measure {
    /// Current bounding box of the bubble in viewport coordinates, or `None`
    /// if the bubble has not been mounted yet.
    fn bubble_rect(&self) -> Option<Rect>;
    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// A fixed geometry snapshot, for hosts that measure up front and for tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Bubble bounds, `None` while unmounted.
    pub bubble: Option<Rect>,
    /// Viewport size.
    pub viewport: Size,
}

impl Snapshot {
    /// Snapshot of a mounted bubble.
    pub fn mounted(bubble: Rect, viewport: Size) -> Self {
        Self {
            bubble: Some(bubble),
            viewport,
        }
    }

    /// Snapshot taken before the bubble exists.
    pub fn unmounted(viewport: Size) -> Self {
        Self {
            bubble: None,
            viewport,
        }
    }
}

impl Measure for Snapshot {
    fn bubble_rect(&self) -> Option<Rect> {
        self.bubble
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// Placement input captured on a single hover or focus-enter event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest<'a> {
    /// DOM id of the anchor, used for diagnostics.
    pub anchor_id: &'a str,
    /// Side configured on the widget.
    pub requested: Side,
    /// Bubble bounds in viewport coordinates.
    pub bubble: Rect,
    /// Viewport size.
    pub viewport: Size,
}

impl PlacementRequest<'_> {
    /// Resolve this request.
    pub fn resolve(&self) -> Placement {
        Placement {
            requested: self.requested,
            resolved: resolve(self.bubble, self.viewport, self.requested),
        }
    }
}

/// Candidate order for `requested`, the requested side first.
///
/// `Default` is not a configurable side; it is treated as `Top`.
fn cascade(requested: Side) -> [Side; 4] {
    match requested {
        Side::Bottom => [Side::Bottom, Side::Top, Side::Left, Side::Right],
        Side::Left => [Side::Left, Side::Right, Side::Top, Side::Bottom],
        Side::Right => [Side::Right, Side::Left, Side::Top, Side::Bottom],
        Side::Top | Side::Default => [Side::Top, Side::Bottom, Side::Left, Side::Right],
    }
}

/// Pick the side a bubble should render on.
///
/// Returns `requested` unchanged when it has room, otherwise the first
/// fallback with room, otherwise [`Side::Default`]. Stateless: every call
/// recomputes from the geometry it is given.
///
/// ```
/// use kurbo::{Rect, Size};
/// use waymark_placement::{Side, resolve};
///
/// let viewport = Size::new(1024.0, 768.0);
/// // A bubble hanging off the bottom edge flips above the anchor.
/// let bubble = Rect::new(400.0, 700.0, 600.0, 800.0);
/// assert_eq!(resolve(bubble, viewport, Side::Bottom), Side::Top);
/// ```
pub fn resolve(bubble: Rect, viewport: Size, requested: Side) -> Side {
    resolve_with_space(Space::measure(bubble, viewport), requested)
}

/// [`resolve`] over pre-classified edge space.
pub fn resolve_with_space(space: Space, requested: Side) -> Side {
    cascade(requested)
        .into_iter()
        .find(|side| space.allows(*side))
        .unwrap_or(Side::Default)
}

/// Measure the bubble through `measure` and resolve its side.
///
/// Returns `None` without touching anything when the bubble is not mounted
/// yet. That happens legitimately before first paint, so it is reported with
/// a warning rather than an error; the next hover retries.
pub fn place<M: Measure + ?Sized>(
    anchor_id: &str,
    measure: &M,
    requested: Side,
) -> Option<Placement> {
    let Some(bubble) = measure.bubble_rect() else {
        log::warn!("bubble for `{anchor_id}` is not mounted; skipping placement");
        return None;
    };
    let placement = PlacementRequest {
        anchor_id,
        requested,
        bubble,
        viewport: measure.viewport(),
    }
    .resolve();
    if placement.is_fallback() {
        log::debug!(
            "bubble for `{anchor_id}` moved from {} to {}",
            placement.requested,
            placement.resolved
        );
    }
    Some(placement)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn all_spaces() -> impl Iterator<Item = Space> {
        (0..16_u8).map(Space::from_bits_truncate)
    }

    #[test]
    fn requested_side_with_room_is_kept() {
        for space in all_spaces() {
            for side in Side::REQUESTABLE {
                if space.allows(side) {
                    assert_eq!(resolve_with_space(space, side), side);
                }
            }
        }
    }

    #[test]
    fn no_room_anywhere_falls_back_to_default() {
        for side in Side::REQUESTABLE {
            assert_eq!(resolve_with_space(Space::empty(), side), Side::Default);
        }
        // A bubble larger than the viewport overflows every edge.
        let huge = Rect::new(-10.0, -10.0, 900.0, 700.0);
        assert_eq!(resolve(huge, VIEWPORT, Side::Left), Side::Default);
    }

    #[test]
    fn result_is_always_room_or_default() {
        for space in all_spaces() {
            for side in Side::REQUESTABLE {
                let resolved = resolve_with_space(space, side);
                assert!(resolved == Side::Default || space.allows(resolved));
            }
        }
    }

    #[test]
    fn bottom_prefers_top_first() {
        let space = Space::ABOVE | Space::LEFT | Space::RIGHT;
        assert_eq!(resolve_with_space(space, Side::Bottom), Side::Top);
        assert_eq!(
            resolve_with_space(Space::LEFT | Space::RIGHT, Side::Bottom),
            Side::Left
        );
        assert_eq!(resolve_with_space(Space::RIGHT, Side::Bottom), Side::Right);
    }

    #[test]
    fn left_prefers_right_then_top_then_bottom() {
        assert_eq!(
            resolve_with_space(Space::all() - Space::LEFT, Side::Left),
            Side::Right
        );
        assert_eq!(
            resolve_with_space(Space::ABOVE | Space::BELOW, Side::Left),
            Side::Top
        );
        assert_eq!(resolve_with_space(Space::BELOW, Side::Left), Side::Bottom);
    }

    #[test]
    fn right_prefers_left_then_top_then_bottom() {
        assert_eq!(
            resolve_with_space(Space::all() - Space::RIGHT, Side::Right),
            Side::Left
        );
        assert_eq!(
            resolve_with_space(Space::ABOVE | Space::BELOW, Side::Right),
            Side::Top
        );
        assert_eq!(resolve_with_space(Space::BELOW, Side::Right), Side::Bottom);
    }

    #[test]
    fn top_prefers_bottom_then_left_then_right() {
        assert_eq!(
            resolve_with_space(Space::all() - Space::ABOVE, Side::Top),
            Side::Bottom
        );
        assert_eq!(
            resolve_with_space(Space::LEFT | Space::RIGHT, Side::Top),
            Side::Left
        );
        assert_eq!(resolve_with_space(Space::RIGHT, Side::Top), Side::Right);
    }

    #[test]
    fn default_request_behaves_like_top() {
        for space in all_spaces() {
            assert_eq!(
                resolve_with_space(space, Side::Default),
                resolve_with_space(space, Side::Top)
            );
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let bubble = Rect::new(700.0, 550.0, 820.0, 640.0);
        for side in Side::REQUESTABLE {
            assert_eq!(
                resolve(bubble, VIEWPORT, side),
                resolve(bubble, VIEWPORT, side)
            );
        }
    }

    // Anchor in the bottom-right corner with a bubble as wide as the
    // viewport: only the top edge is clear.
    #[test]
    fn bottom_right_corner_right_request_goes_top() {
        let bubble = Rect::new(-30.0, 560.0, 830.0, 620.0);
        let space = Space::measure(bubble, VIEWPORT);
        assert_eq!(space, Space::ABOVE);
        assert_eq!(resolve(bubble, VIEWPORT, Side::Right), Side::Top);

        // A narrow bubble in the same corner still has room on the left.
        let narrow = Rect::new(760.0, 560.0, 830.0, 620.0);
        assert_eq!(resolve(narrow, VIEWPORT, Side::Right), Side::Left);
    }

    #[test]
    fn place_skips_unmounted_bubble() {
        let snapshot = Snapshot::unmounted(VIEWPORT);
        assert_eq!(place("help", &snapshot, Side::Top), None);
    }

    #[test]
    fn place_reports_requested_and_resolved() {
        let snapshot = Snapshot::mounted(Rect::new(10.0, -20.0, 110.0, 30.0), VIEWPORT);
        let placement = place("help", &snapshot, Side::Top).unwrap();
        assert_eq!(placement.requested, Side::Top);
        assert_eq!(placement.resolved, Side::Bottom);
        assert_eq!(
            placement.class_swap(),
            Some(("tooltip-top", "tooltip-bottom"))
        );
    }

    #[test]
    fn request_resolves_like_free_function() {
        let request = PlacementRequest {
            anchor_id: "term",
            requested: Side::Left,
            bubble: Rect::new(-40.0, 100.0, 60.0, 140.0),
            viewport: VIEWPORT,
        };
        assert_eq!(request.resolve().resolved, Side::Right);
    }
}
