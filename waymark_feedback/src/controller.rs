// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-control feedback state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! idle ──begin──▶ busy ──resolve──▶ success | error | info
//!                  ▲                        │
//!                  └─────────begin──────────┘
//! ```
//!
//! Every [`begin`](FeedbackController::begin) issues a fresh [`Ticket`]. Only
//! the newest ticket may resolve the busy phase; anything older is dropped,
//! so an outcome from a superseded operation is never shown after a newer
//! one exists.
//!
//! ## Timers
//!
//! Hosts with their own timers call [`begin`](FeedbackController::begin) and
//! later [`resolve`](FeedbackController::resolve) with the ticket. Hosts
//! without one can use the built-in one-shot timer:
//! [`trigger`](FeedbackController::trigger) arms it on a caller-supplied
//! clock, and [`poll`](FeedbackController::poll) fires it once due. There is
//! at most one pending resolution; arming replaces it.
//!
//! ## Focus
//!
//! An error outcome raises a one-shot focus request. The host reads it with
//! [`take_focus_request`](FeedbackController::take_focus_request) after
//! rendering and moves focus back to the control.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use waymark_feedback::{FeedbackController, FeedbackPhase, Resolution, Transition};
//!
//! let mut feedback = FeedbackController::default();
//! let t = Duration::ZERO;
//! feedback.trigger(t, Transition::new("Saving&hellip;", Resolution::success("Saved.")));
//! assert_eq!(feedback.phase(), FeedbackPhase::Busy);
//! assert!(!feedback.is_interactive());
//!
//! assert!(feedback.poll(t + Duration::from_secs(2)));
//! assert_eq!(feedback.phase(), FeedbackPhase::Success);
//! assert_eq!(feedback.text(), Some("Saved."));
//! ```

use alloc::string::String;
use core::time::Duration;

use crate::types::{
    FALLBACK_CONTEXT_CLASS, FeedbackMessage, FeedbackPhase, LiveRegion, Outcome, Politeness,
};

/// Delay used by [`Transition::new`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Handle for one busy transition.
///
/// Tickets are ordered by issue: a newer ticket always compares greater.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ticket(u64);

/// How a busy transition ends.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Show an outcome message.
    Report {
        /// Terminal outcome.
        outcome: Outcome,
        /// Text to announce.
        text: String,
    },
    /// Remove the feedback text and return to idle.
    Clear,
}

impl Resolution {
    /// Report `outcome` with `text`.
    pub fn report(outcome: Outcome, text: impl Into<String>) -> Self {
        Self::Report {
            outcome,
            text: text.into(),
        }
    }

    /// Report success.
    pub fn success(text: impl Into<String>) -> Self {
        Self::report(Outcome::Success, text)
    }

    /// Report an error.
    pub fn error(text: impl Into<String>) -> Self {
        Self::report(Outcome::Error, text)
    }

    /// Report information.
    pub fn info(text: impl Into<String>) -> Self {
        Self::report(Outcome::Info, text)
    }
}

/// A busy message paired with its delayed resolution.
///
/// The caller decides the resolution up front (for example from the value the
/// user just picked); the controller only sequences the two messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    /// Text shown while busy.
    pub busy_text: String,
    /// What to show once the delay elapses.
    pub resolution: Resolution,
    /// Time between entering busy and resolving.
    pub delay: Duration,
}

impl Transition {
    /// Transition with the [`DEFAULT_DELAY`].
    pub fn new(busy_text: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            busy_text: busy_text.into(),
            resolution,
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug)]
struct Pending {
    ticket: Ticket,
    due: Duration,
    resolution: Resolution,
}

/// Feedback lifecycle of a single control.
///
/// Owned by exactly one widget instance.
#[derive(Clone, Debug, Default)]
pub struct FeedbackController {
    phase: FeedbackPhase,
    text: Option<String>,
    politeness: Politeness,
    disabled: bool,
    disposed: bool,
    generation: u64,
    pending: Option<Pending>,
    focus_requested: bool,
}

impl FeedbackController {
    /// Create an idle controller announcing with `politeness`.
    pub fn new(politeness: Politeness) -> Self {
        Self {
            politeness,
            ..Self::default()
        }
    }

    /// Announcement urgency for this control.
    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    /// Current phase.
    pub fn phase(&self) -> FeedbackPhase {
        self.phase
    }

    /// Current feedback text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// True when there is feedback text to render.
    pub fn has_text(&self) -> bool {
        self.text().is_some()
    }

    /// The message currently shown, if any.
    pub fn message(&self) -> Option<FeedbackMessage<'_>> {
        self.text().map(|text| FeedbackMessage {
            phase: self.phase,
            text,
            politeness: self.politeness,
        })
    }

    /// Mark the host control as disabled. Triggers are ignored while set.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the host control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the control should accept interaction right now.
    ///
    /// False while disabled and for the duration of a busy phase.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.disposed && self.phase != FeedbackPhase::Busy
    }

    /// Enter the busy phase and return the ticket that may end it.
    ///
    /// Any previously issued ticket becomes stale and any armed timer is
    /// cancelled. Returns `None` (and changes nothing) when the control is
    /// disabled or disposed.
    pub fn begin(&mut self, busy_text: impl Into<String>) -> Option<Ticket> {
        if self.disabled || self.disposed {
            log::debug!("ignoring feedback trigger on a disabled or disposed control");
            return None;
        }
        if let Some(old) = self.pending.take() {
            log::debug!("superseding pending feedback {:?}", old.ticket);
        }
        self.generation += 1;
        self.focus_requested = false;
        self.phase = FeedbackPhase::Busy;
        self.text = Some(busy_text.into());
        Some(Ticket(self.generation))
    }

    /// End the busy phase started for `ticket`.
    ///
    /// Returns true if the resolution was applied. Stale tickets, repeated
    /// resolutions, and resolutions after [`dispose`](Self::dispose) are
    /// dropped.
    pub fn resolve(&mut self, ticket: Ticket, resolution: Resolution) -> bool {
        if self.disposed || ticket.0 != self.generation || self.phase != FeedbackPhase::Busy {
            log::debug!("dropping stale feedback resolution {ticket:?}");
            return false;
        }
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending = None;
        }
        match resolution {
            Resolution::Report { outcome, text } => {
                self.focus_requested = outcome == Outcome::Error;
                self.phase = outcome.into();
                self.text = Some(text);
            }
            Resolution::Clear => {
                self.focus_requested = false;
                self.phase = FeedbackPhase::Idle;
                self.text = None;
            }
        }
        true
    }

    /// Enter busy at `now` and arm the one-shot timer for `transition`.
    pub fn trigger(&mut self, now: Duration, transition: Transition) -> Option<Ticket> {
        let Transition {
            busy_text,
            resolution,
            delay,
        } = transition;
        let ticket = self.begin(busy_text)?;
        self.pending = Some(Pending {
            ticket,
            due: now.saturating_add(delay),
            resolution,
        });
        Some(ticket)
    }

    /// When the armed timer is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Fire the armed timer if it is due at `now`.
    ///
    /// Returns true when a resolution was applied.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending.take() {
            Some(p) if p.due <= now => self.resolve(p.ticket, p.resolution),
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Cancel any armed timer and stop accepting resolutions.
    ///
    /// Call when the owning widget goes away. The last message is kept so a
    /// final render stays consistent.
    pub fn dispose(&mut self) {
        if let Some(p) = self.pending.take() {
            log::debug!("cancelled pending feedback {:?} on dispose", p.ticket);
        }
        self.disposed = true;
    }

    /// Take the pending request to move focus back to the control.
    ///
    /// Set when a resolution lands in the error phase, so keyboard and
    /// screen-reader users return to the control that failed. Returns true
    /// at most once per error; a new [`begin`](Self::begin) withdraws an
    /// untaken request.
    pub fn take_focus_request(&mut self) -> bool {
        core::mem::take(&mut self.focus_requested)
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Render data for the live region with DOM id `id`.
    pub fn live_region<'a>(&'a self, id: &'a str) -> LiveRegion<'a> {
        let text = self.text().unwrap_or("");
        LiveRegion {
            id,
            text,
            context_class: self.phase.context_class().unwrap_or(FALLBACK_CONTEXT_CLASS),
            politeness: self.politeness,
            hidden: text.is_empty(),
        }
    }
}
