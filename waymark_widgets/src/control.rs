// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared shell for form controls: ids, helper text, feedback, and value sync.
//!
//! Checkbox, text input, text area, select, radio group, and file browser all
//! share this shape. The element-specific markup belongs to the view layer.

use alloc::string::String;
use core::time::Duration;

use waymark_feedback::{
    FeedbackController, LiveRegion, Politeness, Ticket, Transition, compose,
};

use crate::ids::ControlIds;

/// View model of one form control.
#[derive(Clone, Debug)]
pub struct Control {
    ids: ControlIds,
    helper_text: Option<String>,
    valid: Option<bool>,
    feedback: FeedbackController,
}

impl Control {
    /// Control with DOM id `id`, assertive feedback, and no helper text.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            ids: ControlIds::new(id),
            helper_text: None,
            valid: None,
            feedback: FeedbackController::default(),
        }
    }

    /// Set the helper text. Empty text counts as none.
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into()).filter(|t| !t.is_empty());
        self
    }

    /// Set the feedback urgency.
    pub fn with_politeness(mut self, politeness: Politeness) -> Self {
        let disabled = self.feedback.is_disabled();
        self.feedback = FeedbackController::new(politeness);
        self.feedback.set_disabled(disabled);
        self
    }

    /// Derived ids.
    pub fn ids(&self) -> &ControlIds {
        &self.ids
    }

    /// Helper text, if any.
    pub fn helper_text(&self) -> Option<&str> {
        self.helper_text.as_deref()
    }

    /// Feedback state.
    pub fn feedback(&self) -> &FeedbackController {
        &self.feedback
    }

    /// Feedback state, for hosts driving their own timers.
    pub fn feedback_mut(&mut self) -> &mut FeedbackController {
        &mut self.feedback
    }

    /// Disable or enable the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.feedback.set_disabled(disabled);
    }

    /// Record validity. `None` means not validated.
    pub fn set_valid(&mut self, valid: Option<bool>) {
        self.valid = valid;
    }

    /// True only when the control was validated and failed.
    pub fn is_invalid(&self) -> bool {
        self.valid == Some(false)
    }

    /// Whether the element should accept input: not disabled and not busy.
    pub fn is_interactive(&self) -> bool {
        self.feedback.is_interactive()
    }

    /// `aria-describedby` value; `None` means omit the attribute.
    pub fn described_by(&self) -> Option<String> {
        compose(
            self.helper_text.is_some(),
            self.feedback.has_text(),
            self.ids.feedback(),
            self.ids.helper(),
        )
    }

    /// Render data for the feedback live region.
    pub fn live_region(&self) -> LiveRegion<'_> {
        self.feedback.live_region(self.ids.feedback())
    }

    /// Report a user action at `now`; see [`FeedbackController::trigger`].
    pub fn act(&mut self, now: Duration, transition: Transition) -> Option<Ticket> {
        self.feedback.trigger(now, transition)
    }

    /// Advance the feedback timer to `now`; true when the outcome was applied.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.feedback.poll(now)
    }

    /// Whether the host should move focus back to this control now.
    ///
    /// True once after an outcome lands in the error phase; see
    /// [`FeedbackController::take_focus_request`].
    pub fn take_focus_request(&mut self) -> bool {
        self.feedback.take_focus_request()
    }

    /// Tear down: cancels any pending feedback.
    pub fn dispose(&mut self) {
        self.feedback.dispose();
    }
}

/// A control's local value mirrored from an externally supplied value.
///
/// Sync is one-way. Whenever the external value changes, the local value is
/// overwritten, even if the user is editing it at that moment. Local edits
/// never flow back.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueMirror<T> {
    external: T,
    local: T,
}

impl<T: Clone + PartialEq> ValueMirror<T> {
    /// Start with the external value.
    pub fn new(external: T) -> Self {
        Self {
            local: external.clone(),
            external,
        }
    }

    /// Value to display.
    pub fn value(&self) -> &T {
        &self.local
    }

    /// Record a local edit.
    pub fn edit(&mut self, value: T) {
        self.local = value;
    }

    /// Feed the latest external value.
    ///
    /// Returns true when it differed from the previous external value, in
    /// which case the local value was replaced.
    pub fn sync(&mut self, external: T) -> bool {
        if external == self.external {
            return false;
        }
        self.local = external.clone();
        self.external = external;
        true
    }
}
