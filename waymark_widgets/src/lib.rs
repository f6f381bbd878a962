// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Widgets: view models for accessible form widgets.
//!
//! ## Overview
//!
//! These shells sit between a rendering layer and the two Waymark cores:
//!
//! - [`Tooltip`] and [`DefinitionTooltip`] own an anchor/bubble pair and call
//!   [`waymark_placement::place`] on pointer entry.
//! - [`ProgressBar`] validates its percentage and can show its description as
//!   a placed tooltip.
//! - [`Control`] carries the id scheme, helper text, validity, and a
//!   [`waymark_feedback::FeedbackController`], and composes
//!   `aria-describedby`.
//! - [`ValueMirror`] reproduces the one-way sync from an externally supplied
//!   value to the value a control displays.
//! - [`Trigger`] is the single action a tooltip anchor performs.
//!
//! Markup, class composition beyond the side and context classes, and event
//! wiring are left to the host.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use waymark_feedback::{Resolution, Transition};
//! use waymark_widgets::Control;
//!
//! let mut input = Control::new("appt-text-input").with_helper_text("Enter a value.");
//! let saved = Resolution::success("Setting updated successfully.");
//! input.act(Duration::ZERO, Transition::new("Updating setting&hellip;", saved));
//! assert_eq!(
//!     input.described_by().as_deref(),
//!     Some("appt-text-input-feedback appt-text-input-helper"),
//! );
//! input.tick(Duration::from_secs(2));
//! assert_eq!(input.feedback().text(), Some("Setting updated successfully."));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
mod ids;
mod progress;
mod tooltip;
mod trigger;

pub use control::{Control, ValueMirror};
pub use ids::{ControlIds, bubble_id, definition_id};
pub use progress::{MAX_VALUE, MIN_VALUE, ProgressBar, ProgressError};
pub use tooltip::{ButtonType, DefinitionTooltip, Tooltip};
pub use trigger::{Trigger, TriggerElement, TriggerError};
