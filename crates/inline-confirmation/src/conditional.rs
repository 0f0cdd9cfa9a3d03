//! Conditional Swap
//!
//! Keeps exactly one of two subtrees attached to a stable parent.

/// Parent container that can host one of the two subtrees
///
/// Implemented for `web_sys::Node` in the `dom` module.
pub trait SwapParent {
    type Node;

    /// Insert `node` directly before `reference` (moving it if already attached)
    fn insert_before(&self, node: &Self::Node, reference: &Self::Node);
    fn append_child(&self, node: &Self::Node);
    fn remove_child(&self, node: &Self::Node);
    /// Whether `node` is a direct child of this parent
    fn has_child(&self, node: &Self::Node) -> bool;
}

/// Two mutually exclusive subtrees under one parent
pub struct Conditional<P: SwapParent> {
    left: P::Node,
    right: P::Node,
    parent: P,
}

impl<P: SwapParent> Conditional<P> {
    pub fn new(left: P::Node, right: P::Node, parent: P) -> Self {
        Self { left, right, parent }
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// Show `left` (true) or `right` (false)
    pub fn update(&self, show_left: bool) {
        if show_left {
            self.swap(&self.left, &self.right);
        } else {
            self.swap(&self.right, &self.left);
        }
    }

    fn swap(&self, show: &P::Node, hide: &P::Node) {
        let hide_attached = self.parent.has_child(hide);
        if !hide_attached && self.parent.has_child(show) {
            return;
        }

        // Insert first so the parent never goes empty
        if hide_attached {
            self.parent.insert_before(show, hide);
            if self.parent.has_child(hide) {
                self.parent.remove_child(hide);
            }
        } else {
            self.parent.append_child(show);
        }
    }
}
