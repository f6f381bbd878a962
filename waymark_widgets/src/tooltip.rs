// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip and definition tooltip shells.
//!
//! Both own an anchor/bubble pair. The bubble starts with the class for its
//! configured side; on pointer entry the host measures the bubble and calls
//! `pointer_enter`, then applies the returned class swap.

use alloc::string::String;

use waymark_placement::{Measure, Placement, Side, place};

use crate::ids::{bubble_id, definition_id};
use crate::trigger::{Trigger, TriggerElement};

/// HTML `type` of a button trigger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ButtonType {
    /// `type="button"`.
    #[default]
    Button,
    /// `type="submit"`.
    Submit,
    /// `type="reset"`.
    Reset,
}

impl ButtonType {
    /// Attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// A text trigger with a tooltip bubble.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tooltip {
    id: String,
    bubble_id: String,
    definition_id: String,
    /// Visible trigger text; also the accessible label.
    pub text: String,
    /// Bubble content.
    pub body: String,
    /// Configured side.
    pub position: Side,
    /// Trigger action.
    pub trigger: Trigger,
    /// Button type used when the trigger renders as a button.
    pub button_type: ButtonType,
}

impl Tooltip {
    /// Tooltip above a button trigger.
    pub fn new(id: impl Into<String>, text: impl Into<String>, body: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            bubble_id: bubble_id(&id),
            definition_id: definition_id(&id),
            id,
            text: text.into(),
            body: body.into(),
            position: Side::Top,
            trigger: Trigger::None,
            button_type: ButtonType::Button,
        }
    }

    /// Set the configured side.
    pub fn with_position(mut self, position: Side) -> Self {
        self.position = position;
        self
    }

    /// Set the trigger action.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the button type.
    pub fn with_button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Trigger id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bubble id; the trigger's `aria-describedby`.
    pub fn bubble_id(&self) -> &str {
        &self.bubble_id
    }

    /// Id of the paragraph holding [`body`](Self::body) inside the bubble.
    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    /// Element the trigger renders as. Tooltips without an action are buttons.
    pub fn trigger_element(&self) -> TriggerElement {
        self.trigger.element(TriggerElement::Button)
    }

    /// Re-place the bubble on pointer or focus entry.
    pub fn pointer_enter<M: Measure + ?Sized>(&self, measure: &M) -> Option<Placement> {
        place(&self.bubble_id, measure, self.position)
    }
}

/// A term with a definition bubble.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefinitionTooltip {
    id: String,
    bubble_id: String,
    /// The term being defined.
    pub term: String,
    /// Definition text.
    pub definition: String,
    /// Optional longer explanation; may contain inline markup.
    pub explanation: Option<String>,
    /// Configured side.
    pub position: Side,
    /// Trigger action.
    pub trigger: Trigger,
}

impl DefinitionTooltip {
    /// Definition above an inert term.
    pub fn new(
        id: impl Into<String>,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            bubble_id: bubble_id(&id),
            id,
            term: term.into(),
            definition: definition.into(),
            explanation: None,
            position: Side::Top,
            trigger: Trigger::None,
        }
    }

    /// Set the explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into()).filter(|e| !e.is_empty());
        self
    }

    /// Set the configured side.
    pub fn with_position(mut self, position: Side) -> Self {
        self.position = position;
        self
    }

    /// Set the trigger action.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Trigger id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bubble id; the trigger's `aria-describedby`.
    pub fn bubble_id(&self) -> &str {
        &self.bubble_id
    }

    /// Element the trigger renders as. Terms without an action are spans.
    pub fn trigger_element(&self) -> TriggerElement {
        self.trigger.element(TriggerElement::Span)
    }

    /// Re-place the bubble on pointer or focus entry.
    pub fn pointer_enter<M: Measure + ?Sized>(&self, measure: &M) -> Option<Placement> {
        place(&self.bubble_id, measure, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Size};
    use waymark_placement::Snapshot;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn tooltip_defaults() {
        let t = Tooltip::new("forgot-tooltip", "Forgot something?", "Helper text");
        assert_eq!(t.bubble_id(), "forgot-tooltip-desc");
        assert_eq!(t.definition_id(), "forgot-tooltip-definition");
        assert_eq!(t.position, Side::Top);
        assert_eq!(t.trigger_element(), TriggerElement::Button);
        assert_eq!(t.button_type.as_str(), "button");
    }

    #[test]
    fn tooltip_keeps_side_with_room() {
        let t = Tooltip::new("t", "text", "body").with_position(Side::Bottom);
        let measured = Snapshot::mounted(Rect::new(100.0, 120.0, 300.0, 180.0), VIEWPORT);
        let placement = t.pointer_enter(&measured).unwrap();
        assert_eq!(placement.resolved, Side::Bottom);
        assert_eq!(placement.class_swap(), None);
    }

    // Wide bubble pinned in the bottom-right corner: only the top is clear.
    #[test]
    fn tooltip_in_bottom_right_corner_moves_up() {
        let t = Tooltip::new("t", "text", "body").with_position(Side::Right);
        let measured = Snapshot::mounted(Rect::new(-40.0, 730.0, 1100.0, 790.0), VIEWPORT);
        let placement = t.pointer_enter(&measured).unwrap();
        assert_eq!(placement.resolved, Side::Top);
        assert_eq!(
            placement.class_swap(),
            Some(("tooltip-right", "tooltip-top"))
        );
    }

    #[test]
    fn unmounted_bubble_is_skipped() {
        let t = Tooltip::new("t", "text", "body");
        assert_eq!(t.pointer_enter(&Snapshot::unmounted(VIEWPORT)), None);
    }

    #[test]
    fn definition_tooltip_renders_span_without_action() {
        let d = DefinitionTooltip::new("abolish-tooltip", "abolish", "to do away with")
            .with_explanation("");
        assert_eq!(d.trigger_element(), TriggerElement::Span);
        assert_eq!(d.bubble_id(), "abolish-tooltip-desc");
        assert_eq!(d.explanation, None);

        let d = d.with_trigger(Trigger::Url("https://example.com".into()));
        assert_eq!(d.trigger_element(), TriggerElement::Anchor);
    }

    #[test]
    fn definition_tooltip_on_left_edge_flips_right() {
        let d = DefinitionTooltip::new("d", "term", "def").with_position(Side::Left);
        let measured = Snapshot::mounted(Rect::new(-150.0, 300.0, 0.0, 360.0), VIEWPORT);
        assert_eq!(d.pointer_enter(&measured).unwrap().resolved, Side::Right);
    }
}
