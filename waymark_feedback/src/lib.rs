// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Feedback: accessible busy/outcome reporting for form controls.
//!
//! ## Overview
//!
//! Interactive controls report a pending operation ("Updating…") and then its
//! outcome through an ARIA live region. This crate owns the sequencing:
//!
//! - [`FeedbackController`]: the per-control state machine
//!   (idle → busy → success/error/info), with stale-resolution protection and
//!   an optional one-shot timer.
//! - [`compose`] / [`DescribedByIds`]: the `aria-describedby` value built from
//!   the presence of feedback text and helper text.
//! - [`LiveRegion`]: what a view layer renders for the feedback element.
//!
//! Rendering is left to the host. The controller never decides whether an
//! operation succeeded; callers pass the busy text and the resolution, and the
//! controller makes sure only the latest one is ever shown.
//!
//! ## Ordering guarantee
//!
//! For one controller, outcome messages are observed in the order their
//! transitions were started, and a superseded transition never renders. A
//! controller holds at most one pending timer.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Politeness`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod describedby;
mod types;

pub use controller::{DEFAULT_DELAY, FeedbackController, Resolution, Ticket, Transition};
pub use describedby::{DescribedByIds, compose};
pub use types::{
    FALLBACK_CONTEXT_CLASS, FeedbackMessage, FeedbackPhase, LIVE_REGION_ROLE, LiveRegion, Outcome,
    Politeness,
};
