// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feedback phases, outcomes, politeness, and the live-region view.

/// ARIA role of every feedback live region.
pub const LIVE_REGION_ROLE: &str = "alert";

/// Context class used when a region has no phase text yet.
pub const FALLBACK_CONTEXT_CLASS: &str = "error";

/// Where a control is in its feedback lifecycle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FeedbackPhase {
    /// Nothing reported yet.
    #[default]
    Idle,
    /// An operation is pending.
    Busy,
    /// The last operation succeeded.
    Success,
    /// The last operation failed.
    Error,
    /// The last operation finished with information for the user.
    Info,
}

impl FeedbackPhase {
    /// Context class for the feedback element, `None` while idle.
    pub const fn context_class(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Busy => Some("busy"),
            Self::Success => Some("success"),
            Self::Error => Some("error"),
            Self::Info => Some("info"),
        }
    }
}

/// Terminal result of a busy operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Operation finished with a neutral note.
    Info,
}

impl From<Outcome> for FeedbackPhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::Success,
            Outcome::Error => Self::Error,
            Outcome::Info => Self::Info,
        }
    }
}

/// How urgently a screen reader announces feedback.
///
/// Configured once per widget, never per message.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Politeness {
    /// Interrupt the current utterance.
    #[default]
    Assertive,
    /// Wait for the current utterance to finish.
    Polite,
}

impl Politeness {
    /// Value for the `aria-live` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assertive => "assertive",
            Self::Polite => "polite",
        }
    }

    /// `Polite` when `polite` is set, otherwise `Assertive`.
    pub const fn from_polite(polite: bool) -> Self {
        if polite {
            Self::Polite
        } else {
            Self::Assertive
        }
    }
}

/// A message to render into a control's live region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeedbackMessage<'a> {
    /// Phase the message belongs to.
    pub phase: FeedbackPhase,
    /// Message text; may contain limited inline markup.
    pub text: &'a str,
    /// Announcement urgency of the owning widget.
    pub politeness: Politeness,
}

/// Everything a view layer needs to render a control's live region.
///
/// The region is always rendered, even when empty: removing and reinserting
/// the node stops some screen readers from announcing repeated text. Only its
/// visibility follows [`LiveRegion::hidden`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LiveRegion<'a> {
    /// DOM id of the region (`{id}-feedback`).
    pub id: &'a str,
    /// Current text, empty when there is nothing to report.
    pub text: &'a str,
    /// Context class (`busy`, `success`, `error`, `info`).
    pub context_class: &'static str,
    /// Value for `aria-live`.
    pub politeness: Politeness,
    /// True when the region should be visually suppressed.
    pub hidden: bool,
}

impl LiveRegion<'_> {
    /// Value for the `aria-live` attribute.
    pub fn aria_live(&self) -> &'static str {
        self.politeness.as_str()
    }

    /// Value for the `role` attribute.
    pub fn role(&self) -> &'static str {
        LIVE_REGION_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_terminal_phases() {
        assert_eq!(
            FeedbackPhase::from(Outcome::Success),
            FeedbackPhase::Success
        );
        assert_eq!(FeedbackPhase::from(Outcome::Error), FeedbackPhase::Error);
        assert_eq!(FeedbackPhase::from(Outcome::Info), FeedbackPhase::Info);
    }

    #[test]
    fn politeness_defaults_to_assertive() {
        assert_eq!(Politeness::default(), Politeness::Assertive);
        assert_eq!(Politeness::from_polite(true).as_str(), "polite");
        assert_eq!(Politeness::from_polite(false).as_str(), "assertive");
    }

    #[test]
    fn idle_has_no_context_class() {
        assert_eq!(FeedbackPhase::Idle.context_class(), None);
        assert_eq!(FeedbackPhase::Busy.context_class(), Some("busy"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_enums_use_lowercase_names() {
        let p: Politeness = serde_json::from_str("\"polite\"").unwrap();
        assert_eq!(p, Politeness::Polite);
        let o: Outcome = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(o, Outcome::Info);
    }
}
