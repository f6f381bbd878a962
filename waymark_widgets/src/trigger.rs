// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip triggers: exactly one of route link, URL, click handler, or none.

use alloc::string::String;

/// What activating a tooltip's anchor does.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Trigger {
    /// Navigate to an in-app route.
    Link(String),
    /// Navigate to an external URL.
    Url(String),
    /// Run the host's click handler.
    Click,
    /// Nothing; the anchor only carries the bubble.
    #[default]
    None,
}

/// Element a trigger renders as.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TriggerElement {
    /// Router link component.
    RouterLink,
    /// `<a href>`.
    Anchor,
    /// `<button>`.
    Button,
    /// `<span>`.
    Span,
}

/// Rejected trigger configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TriggerError {
    /// More than one of link, URL, and click handler was supplied.
    #[error("trigger sets more than one of link ({link}), url ({url}), click handler ({click})")]
    Conflicting {
        /// A route link was supplied.
        link: bool,
        /// A URL was supplied.
        url: bool,
        /// A click handler was supplied.
        click: bool,
    },
}

impl Trigger {
    /// Build a trigger from separately supplied options.
    ///
    /// Supplying more than one is an error.
    pub fn from_parts(
        link: Option<String>,
        url: Option<String>,
        click: bool,
    ) -> Result<Self, TriggerError> {
        match (link, url, click) {
            (Some(link), None, false) => Ok(Self::Link(link)),
            (None, Some(url), false) => Ok(Self::Url(url)),
            (None, None, true) => Ok(Self::Click),
            (None, None, false) => Ok(Self::None),
            (link, url, click) => Err(TriggerError::Conflicting {
                link: link.is_some(),
                url: url.is_some(),
                click,
            }),
        }
    }

    /// Like [`from_parts`](Self::from_parts), but resolve conflicts by
    /// precedence instead of failing: link, then URL, then click handler.
    pub fn with_precedence(link: Option<String>, url: Option<String>, click: bool) -> Self {
        let supplied =
            usize::from(link.is_some()) + usize::from(url.is_some()) + usize::from(click);
        if supplied > 1 {
            log::warn!("trigger has {supplied} actions; using link > url > click precedence");
        }
        if let Some(link) = link {
            Self::Link(link)
        } else if let Some(url) = url {
            Self::Url(url)
        } else if click {
            Self::Click
        } else {
            Self::None
        }
    }

    /// Navigation target, if the trigger navigates.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link(target) | Self::Url(target) => Some(target),
            Self::Click | Self::None => None,
        }
    }

    /// Element to render, given what a trigger without an action renders as.
    pub fn element(&self, inert: TriggerElement) -> TriggerElement {
        match self {
            Self::Link(_) => TriggerElement::RouterLink,
            Self::Url(_) => TriggerElement::Anchor,
            Self::Click => TriggerElement::Button,
            Self::None => inert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_option_selects_variant() {
        assert_eq!(
            Trigger::from_parts(Some("/help".into()), None, false),
            Ok(Trigger::Link("/help".into()))
        );
        assert_eq!(
            Trigger::from_parts(None, Some("https://example.com".into()), false),
            Ok(Trigger::Url("https://example.com".into()))
        );
        assert_eq!(Trigger::from_parts(None, None, true), Ok(Trigger::Click));
        assert_eq!(Trigger::from_parts(None, None, false), Ok(Trigger::None));
    }

    #[test]
    fn conflicting_options_are_rejected() {
        assert_eq!(
            Trigger::from_parts(Some("/a".into()), None, true),
            Err(TriggerError::Conflicting {
                link: true,
                url: false,
                click: true
            })
        );
        let conflict = Trigger::from_parts(Some("/a".into()), Some("b".into()), false);
        assert!(conflict.is_err());
    }

    #[test]
    fn precedence_is_link_url_click() {
        assert_eq!(
            Trigger::with_precedence(Some("/a".into()), Some("b".into()), true),
            Trigger::Link("/a".into())
        );
        assert_eq!(
            Trigger::with_precedence(None, Some("b".into()), true),
            Trigger::Url("b".into())
        );
        assert_eq!(Trigger::with_precedence(None, None, true), Trigger::Click);
    }

    #[test]
    fn elements() {
        assert_eq!(
            Trigger::Link("/a".into()).element(TriggerElement::Span),
            TriggerElement::RouterLink
        );
        assert_eq!(
            Trigger::None.element(TriggerElement::Button),
            TriggerElement::Button
        );
        assert_eq!(
            Trigger::None.element(TriggerElement::Span),
            TriggerElement::Span
        );
        assert_eq!(Trigger::Url("u".into()).target(), Some("u"));
        assert_eq!(Trigger::Click.target(), None);
    }
}
