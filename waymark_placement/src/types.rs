// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, per-edge space, and resolved placements.

use core::fmt;
use core::str::FromStr;

use kurbo::{Rect, Size};

/// Pixels of slack at each viewport edge.
///
/// A bubble whose edge sits within this distance of the viewport edge is
/// treated as overflowing. This absorbs sub-pixel rounding so that bubbles
/// flush against an edge are classified consistently.
pub const EDGE_MARGIN: f64 = 1.0;

/// The side of an anchor a bubble renders on.
///
/// [`Side::Default`] is not a side as such: it selects the full-viewport
/// presentation used when no side has room. Widgets are configured with one
/// of the four real sides, conventionally [`Side::Top`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
    /// Full-viewport fallback.
    Default,
}

impl Side {
    /// The four sides a widget may request, in declaration order.
    pub const REQUESTABLE: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Lowercase name, as used in configuration and class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Default => "default",
        }
    }

    /// Presentation class for a bubble on this side (`tooltip-<side>`).
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Top => "tooltip-top",
            Self::Bottom => "tooltip-bottom",
            Self::Left => "tooltip-left",
            Self::Right => "tooltip-right",
            Self::Default => "tooltip-default",
        }
    }

    /// Edge whose free space this side needs, or `None` for [`Side::Default`].
    pub const fn required_space(self) -> Option<Space> {
        match self {
            Self::Top => Some(Space::ABOVE),
            Self::Bottom => Some(Space::BELOW),
            Self::Left => Some(Space::LEFT),
            Self::Right => Some(Space::RIGHT),
            Self::Default => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown side name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown side name; expected one of top, bottom, left, right, default")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "default" => Ok(Self::Default),
            _ => Err(ParseSideError),
        }
    }
}

bitflags::bitflags! {
    /// Viewport edges a bubble currently has room towards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Space: u8 {
        /// The bubble's top edge is clear of the viewport top.
        const ABOVE = 0b0000_0001;
        /// The bubble's bottom edge is clear of the viewport bottom.
        const BELOW = 0b0000_0010;
        /// The bubble's left edge is clear of the viewport left.
        const LEFT  = 0b0000_0100;
        /// The bubble's right edge is clear of the viewport right.
        const RIGHT = 0b0000_1000;
    }
}

impl Space {
    /// Classify each edge of `bubble` against a viewport of `viewport` size.
    ///
    /// `bubble` is in viewport coordinates with the origin at the top-left.
    pub fn measure(bubble: Rect, viewport: Size) -> Self {
        let mut space = Self::empty();
        space.set(Self::ABOVE, bubble.y0 > EDGE_MARGIN);
        space.set(Self::BELOW, bubble.y1 < viewport.height - EDGE_MARGIN);
        space.set(Self::LEFT, bubble.x0 > EDGE_MARGIN);
        space.set(Self::RIGHT, bubble.x1 < viewport.width - EDGE_MARGIN);
        space
    }

    /// Whether a bubble may render on `side` given this space.
    ///
    /// [`Side::Default`] never needs room and is always allowed.
    pub fn allows(self, side: Side) -> bool {
        side.required_space().is_none_or(|edge| self.contains(edge))
    }
}

/// Outcome of a placement: the side the widget asked for and the side chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// Side configured on the widget.
    pub requested: Side,
    /// Side the bubble should render on now.
    pub resolved: Side,
}

impl Placement {
    /// True when the bubble had to move off its requested side.
    pub fn is_fallback(&self) -> bool {
        self.requested != self.resolved
    }

    /// Class replacement to apply to the bubble, as `(old, new)`.
    ///
    /// Returns `None` when the requested side was kept.
    pub fn class_swap(&self) -> Option<(&'static str, &'static str)> {
        self.is_fallback()
            .then(|| (self.requested.class_name(), self.resolved.class_name()))
    }
}
