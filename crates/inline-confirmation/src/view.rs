//! Confirmation View Model
//!
//! Owns the `active` state and the root container, and swaps the content subtree
//! for the prompt subtree when the state changes.

use crate::conditional::{Conditional, SwapParent};
use crate::state::{ConfirmEvent, ConfirmState};

/// Input to [`InlineConfirmView::update`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    pub active: Option<bool>,
}

impl UpdateOptions {
    pub fn active(active: bool) -> Self {
        Self { active: Some(active) }
    }
}

/// Headless view model, generic over the container it mutates
///
/// The container must already hold the content subtree when the view is created;
/// the prompt subtree stays detached until the first activation.
pub struct InlineConfirmView<P: SwapParent> {
    state: ConfirmState,
    connected: bool,
    show_confirm: Conditional<P>,
}

impl<P: SwapParent> InlineConfirmView<P> {
    pub fn new(root: P, prompt: P::Node, content: P::Node) -> Self {
        Self {
            state: ConfirmState::Inactive,
            connected: false,
            show_confirm: Conditional::new(prompt, content, root),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn root(&self) -> &P {
        self.show_confirm.parent()
    }

    /// Apply `options.active` if given, then hand back the root container
    pub fn update(&mut self, options: UpdateOptions) -> &P {
        if let Some(active) = options.active {
            self.set_active(active);
        }
        self.root()
    }

    /// Returns false when `active` already had this value
    pub fn set_active(&mut self, active: bool) -> bool {
        let next = ConfirmState::from_active(active);
        if next == self.state {
            return false;
        }
        log::debug!("[InlineConfirm] {:?} -> {:?}", self.state, next);
        self.state = next;
        self.show_confirm.update(active);
        true
    }

    /// Start reacting to clicks. Returns false when already connected.
    pub fn connect(&mut self) -> bool {
        if self.connected {
            return false;
        }
        self.connected = true;
        true
    }

    /// Stop reacting to clicks. Returns false when nothing was connected.
    pub fn disconnect(&mut self) -> bool {
        if !self.connected {
            return false;
        }
        self.connected = false;
        true
    }

    /// Map a control's `data-event` tag to the choice to report.
    ///
    /// The caller dispatches the notification and then resets `active` through the
    /// host's own setter, so listeners still observe the active state.
    pub fn handle_click(&self, tag: &str) -> Option<ConfirmEvent> {
        if !self.connected {
            return None;
        }
        match tag.parse::<ConfirmEvent>() {
            Ok(event) => {
                log::debug!("[InlineConfirm] choice: {}", event);
                Some(event)
            }
            Err(()) => {
                log::debug!("[InlineConfirm] ignoring click with tag {:?}", tag);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditional::testing::RecordingParent;

    fn make_view() -> InlineConfirmView<RecordingParent> {
        let root = RecordingParent::with_children(&["style", "content"]);
        InlineConfirmView::new(root, "prompt", "content")
    }

    fn visible(view: &InlineConfirmView<RecordingParent>) -> Vec<&'static str> {
        view.root().children()
    }

    /// Simulates the wrapper: dispatch, then reset through the setter
    fn click(view: &mut InlineConfirmView<RecordingParent>, tag: &str) -> Vec<ConfirmEvent> {
        let mut fired = Vec::new();
        if let Some(event) = view.handle_click(tag) {
            fired.push(event);
            view.update(UpdateOptions::active(false));
        }
        fired
    }

    #[test]
    fn test_update_without_options_is_idempotent() {
        let mut view = make_view();
        view.update(UpdateOptions::default());
        view.update(UpdateOptions::default());
        assert!(!view.is_active());
        assert_eq!(view.root().op_count(), 0);
        assert_eq!(visible(&view), vec!["style", "content"]);
    }

    #[test]
    fn test_every_assignment_sequence_matches_last_value() {
        // All sequences of up to 6 assignments
        for len in 1..=6u32 {
            for bits in 0..(1u32 << len) {
                let mut view = make_view();
                for i in 0..len {
                    let active = bits & (1 << i) != 0;
                    view.update(UpdateOptions::active(active));

                    let expected = if active { "prompt" } else { "content" };
                    assert_eq!(visible(&view), vec!["style", expected]);
                    assert_eq!(view.is_active(), active);
                }
            }
        }
    }

    #[test]
    fn test_same_value_is_noop() {
        let mut view = make_view();
        assert!(!view.set_active(false));
        assert_eq!(view.root().op_count(), 0);

        assert!(view.set_active(true));
        let ops = view.root().op_count();
        assert!(!view.set_active(true));
        assert_eq!(view.root().op_count(), ops);
    }

    #[test]
    fn test_yes_click_confirms_and_resets() {
        let mut view = make_view();
        view.connect();
        view.update(UpdateOptions::active(true));

        assert_eq!(click(&mut view, "confirm"), vec![ConfirmEvent::Confirm]);
        assert!(!view.is_active());
        assert_eq!(visible(&view), vec!["style", "content"]);
    }

    #[test]
    fn test_no_click_cancels_and_resets() {
        let mut view = make_view();
        view.connect();
        view.update(UpdateOptions::active(true));

        assert_eq!(click(&mut view, "cancel"), vec![ConfirmEvent::Cancel]);
        assert!(!view.is_active());
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let mut view = make_view();
        view.connect();
        view.update(UpdateOptions::active(true));

        assert!(click(&mut view, "maybe").is_empty());
        assert!(view.is_active());
    }

    #[test]
    fn test_connect_and_disconnect_are_guarded() {
        let mut view = make_view();
        assert!(!view.disconnect());
        assert!(view.connect());
        assert!(!view.connect());
        assert!(view.disconnect());
        assert!(!view.disconnect());
    }

    #[test]
    fn test_disconnected_view_ignores_clicks() {
        let mut view = make_view();
        view.update(UpdateOptions::active(true));
        assert!(click(&mut view, "confirm").is_empty());

        view.connect();
        view.disconnect();
        assert!(click(&mut view, "confirm").is_empty());
        assert!(view.is_active());
    }

    #[test]
    fn test_reconnect_reuses_subtree() {
        let mut view = make_view();
        view.connect();
        view.update(UpdateOptions::active(true));
        view.disconnect();
        view.connect();

        assert_eq!(visible(&view), vec!["style", "prompt"]);
        assert_eq!(click(&mut view, "confirm"), vec![ConfirmEvent::Confirm]);
        assert_eq!(visible(&view), vec!["style", "content"]);
    }
}
