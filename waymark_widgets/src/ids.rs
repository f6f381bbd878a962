// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM ids derived from a widget's own id.

use alloc::format;
use alloc::string::String;

/// Ids of a control's satellite elements.
///
/// All ids are derived deterministically from the control's DOM id, so the
/// view layer and the `aria-describedby` composer always agree.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ControlIds {
    id: String,
    feedback: String,
    helper: String,
}

impl ControlIds {
    /// Derive ids for the control with DOM id `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            feedback: format!("{id}-feedback"),
            helper: format!("{id}-helper"),
            id,
        }
    }

    /// The control's own id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the feedback live region.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Id of the helper text element.
    pub fn helper(&self) -> &str {
        &self.helper
    }

    /// Id of a radio option, numbered from 1.
    pub fn option(&self, number: usize) -> String {
        format!("{}-option-{number}", self.id)
    }
}

/// Id of a tooltip bubble for the trigger with id `id`.
pub fn bubble_id(id: &str) -> String {
    format!("{id}-desc")
}

/// Id of the body paragraph inside the tooltip bubble for trigger `id`.
pub fn definition_id(id: &str) -> String {
    format!("{id}-definition")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_ids() {
        let ids = ControlIds::new("appt-text-input");
        assert_eq!(ids.id(), "appt-text-input");
        assert_eq!(ids.feedback(), "appt-text-input-feedback");
        assert_eq!(ids.helper(), "appt-text-input-helper");
        assert_eq!(ids.option(1), "appt-text-input-option-1");
        assert_eq!(bubble_id("forgot-tooltip"), "forgot-tooltip-desc");
        assert_eq!(definition_id("forgot-tooltip"), "forgot-tooltip-definition");
    }
}
