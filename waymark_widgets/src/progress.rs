// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress bar shell with an optional description tooltip.
//!
//! Progress changes are not announced. Only `audible_feedback`, set by the
//! host when progress starts or completes, goes through a live region;
//! updating it on every tick would drown out the screen reader.

use alloc::format;
use alloc::string::String;

use waymark_feedback::Politeness;
use waymark_placement::{Measure, Placement, Side, place};

/// Lowest accepted value.
pub const MIN_VALUE: i32 = 0;
/// Highest accepted value.
pub const MAX_VALUE: i32 = 100;

/// Rejected progress value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProgressError {
    /// The value is not a percentage.
    #[error("progress value {0} is outside 0..=100")]
    OutOfRange(i32),
}

/// An accessible progress bar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressBar {
    id: String,
    description_id: String,
    value: u8,
    /// Accessible label, for example "Level 1".
    pub label: String,
    /// Text read after the value; also shown in the tooltip.
    pub description: String,
    /// Side of the description tooltip, if the description is shown as one.
    pub tooltip: Option<Side>,
    /// One-off announcement for start or completion.
    pub audible_feedback: Option<String>,
    /// Urgency of `audible_feedback`.
    pub politeness: Politeness,
}

impl ProgressBar {
    /// Create a progress bar at `value` percent.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        value: i32,
    ) -> Result<Self, ProgressError> {
        let id = id.into();
        Ok(Self {
            description_id: format!("{id}-label"),
            id,
            value: check(value)?,
            label: label.into(),
            description: description.into(),
            tooltip: None,
            audible_feedback: None,
            politeness: Politeness::Assertive,
        })
    }

    /// Show the description as a tooltip on `side`.
    pub fn with_tooltip(mut self, side: Side) -> Self {
        self.tooltip = Some(side);
        self
    }

    /// Set the announcement urgency.
    pub fn with_politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = politeness;
        self
    }

    /// Progress bar id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the description element; the bar's `aria-describedby`.
    pub fn description_id(&self) -> &str {
        &self.description_id
    }

    /// Current value, `aria-valuenow`.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Update the value. On error the previous value is kept.
    pub fn set_value(&mut self, value: i32) -> Result<(), ProgressError> {
        self.value = check(value)?;
        Ok(())
    }

    /// Announce `text` once.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.audible_feedback = Some(text.into()).filter(|t| !t.is_empty());
    }

    /// Class for the description element, when it is a tooltip.
    pub fn description_class(&self) -> Option<&'static str> {
        self.tooltip.map(Side::class_name)
    }

    /// Re-place the description tooltip on pointer entry.
    ///
    /// Returns `None` when the description is not a tooltip.
    pub fn pointer_enter<M: Measure + ?Sized>(&self, measure: &M) -> Option<Placement> {
        place(&self.description_id, measure, self.tooltip?)
    }
}

fn check(value: i32) -> Result<u8, ProgressError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(ProgressError::OutOfRange(value));
    }
    u8::try_from(value).map_err(|_| ProgressError::OutOfRange(value))
}
