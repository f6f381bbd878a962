// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `aria-describedby` composition from feedback and helper text.

use alloc::string::String;

/// Ordered ids for an `aria-describedby` attribute.
///
/// The feedback id always comes before the helper id, since screen readers
/// read the list in order and feedback is the more urgent context.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DescribedByIds<'a> {
    feedback: Option<&'a str>,
    helper: Option<&'a str>,
}

impl<'a> DescribedByIds<'a> {
    /// Collect the ids of the sources that are present.
    pub fn new(
        has_helper: bool,
        has_feedback: bool,
        feedback_id: &'a str,
        helper_id: &'a str,
    ) -> Self {
        Self {
            feedback: has_feedback.then_some(feedback_id),
            helper: has_helper.then_some(helper_id),
        }
    }

    /// True when no source is present and the attribute must be omitted.
    pub fn is_empty(&self) -> bool {
        self.feedback.is_none() && self.helper.is_none()
    }

    /// The ids in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.feedback.into_iter().chain(self.helper)
    }

    /// Attribute value, or `None` when the attribute must be omitted.
    ///
    /// Never returns an empty string.
    pub fn to_attribute(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut out = String::new();
        for id in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(id);
        }
        Some(out)
    }
}

/// Build the `aria-describedby` value for a control.
///
/// ```
/// use waymark_feedback::compose;
///
/// assert_eq!(compose(false, false, "f", "h"), None);
/// assert_eq!(compose(true, false, "f", "h").as_deref(), Some("h"));
/// assert_eq!(compose(false, true, "f", "h").as_deref(), Some("f"));
/// assert_eq!(compose(true, true, "f", "h").as_deref(), Some("f h"));
/// ```
pub fn compose(
    has_helper: bool,
    has_feedback: bool,
    feedback_id: &str,
    helper_id: &str,
) -> Option<String> {
    DescribedByIds::new(has_helper, has_feedback, feedback_id, helper_id).to_attribute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn absent_when_no_sources() {
        let ids = DescribedByIds::new(false, false, "name-feedback", "name-helper");
        assert!(ids.is_empty());
        assert_eq!(ids.iter().count(), 0);
        assert_eq!(ids.to_attribute(), None);
    }

    #[test]
    fn feedback_precedes_helper() {
        let ids = DescribedByIds::new(true, true, "name-feedback", "name-helper");
        assert_eq!(
            ids.iter().collect::<Vec<_>>(),
            ["name-feedback", "name-helper"]
        );
        assert_eq!(
            ids.to_attribute().as_deref(),
            Some("name-feedback name-helper")
        );
    }

    #[test]
    fn single_sources_have_no_padding() {
        assert_eq!(
            compose(false, true, "name-feedback", "name-helper").as_deref(),
            Some("name-feedback")
        );
        assert_eq!(
            compose(true, false, "name-feedback", "name-helper").as_deref(),
            Some("name-helper")
        );
    }
}
