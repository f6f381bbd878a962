// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Placement: choose the side of an anchor a floating bubble renders on.
//!
//! ## Overview
//!
//! Tooltips, definition bubbles, and progress descriptions are configured with a
//! preferred side. When the bubble would spill past the viewport on that side,
//! this crate picks another side using a fixed per-side priority list, and
//! falls back to a full-viewport presentation ([`Side::Default`]) when no side
//! has room.
//!
//! The resolver is pure. It does not query layout: the host measures the
//! bubble (for example with its bounding client rect) and passes the geometry
//! in, either directly to [`resolve`] or through the [`Measure`] trait with
//! [`place`]. Applying the result, by swapping the `tooltip-<side>` class, is
//! left to the host; see [`Placement::class_swap`].
//!
//! ## Workflow
//!
//! 1) On pointer or focus entry, measure the bubble in its requested position.
//! 2) Call [`place`] (or [`resolve`]) with the configured side.
//! 3) Apply [`Placement::class_swap`] if it returns a replacement.
//!
//! Every call recomputes from scratch; nothing is remembered between hovers.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use waymark_placement::{Side, Snapshot, place};
//!
//! let viewport = Size::new(1280.0, 720.0);
//! // Bubble measured to the right of an anchor near the right edge.
//! let measured = Snapshot::mounted(Rect::new(1200.0, 300.0, 1320.0, 340.0), viewport);
//!
//! let placement = place("forgot-tooltip", &measured, Side::Right).unwrap();
//! assert_eq!(placement.resolved, Side::Left);
//! assert_eq!(placement.class_swap(), Some(("tooltip-right", "tooltip-left")));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`Side`] using lowercase names.
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod types;

pub use resolve::{Measure, PlacementRequest, Snapshot, place, resolve, resolve_with_space};
pub use types::{EDGE_MARGIN, ParseSideError, Placement, Side, Space};
