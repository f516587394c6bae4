//! Focus, hover and mouse-capture singletons.
//!
//! Focus order is a pre-order walk of the tree that skips hidden subtrees.
//! `focus_next` / `focus_prev` wrap around at either end.

use tracing::debug;

use super::node::NodeId;
use super::tree::WidgetTree;

impl WidgetTree {
    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Move focus to `node` (or clear it). Returns whether focus changed.
    ///
    /// The previous holder is flagged dirty on its own; the new holder is
    /// marked dirty up to the root. Clearing focus marks the previous holder
    /// dirty up to the root.
    pub fn set_focus(&mut self, node: Option<NodeId>) -> bool {
        let node = node.filter(|&n| self.contains(n));
        let previous = self.ui.focused;
        if previous == node {
            return false;
        }
        self.ui.focused = node;
        match (previous, node) {
            (Some(old), Some(_)) => {
                if let Some(data) = self.get_mut(old) {
                    data.dirty = true;
                }
            }
            (Some(old), None) => self.mark_dirty(old),
            _ => {}
        }
        if let Some(new) = node {
            self.mark_dirty(new);
        }
        debug!(?previous, focused = ?node, "focus changed");
        true
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.ui.focused
    }

    pub fn is_focused(&self, node: NodeId) -> bool {
        self.ui.focused == Some(node)
    }

    /// Focusable, visible nodes under `start` in pre-order. Hidden nodes
    /// hide their whole subtree.
    pub fn collect_focusable(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let Some(data) = self.get(current) else {
                continue;
            };
            if !data.visible {
                continue;
            }
            if data.focusable {
                result.push(current);
            }
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    /// Focus the next focusable node, wrapping to the first.
    pub fn focus_next(&mut self) -> Option<NodeId> {
        self.cycle_focus(true)
    }

    /// Focus the previous focusable node, wrapping to the last.
    pub fn focus_prev(&mut self) -> Option<NodeId> {
        self.cycle_focus(false)
    }

    fn cycle_focus(&mut self, forward: bool) -> Option<NodeId> {
        let order = self.collect_focusable(self.root());
        if order.is_empty() {
            return None;
        }
        let len = order.len();
        let current = self.ui.focused.and_then(|f| order.iter().position(|&n| n == f));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        let next = order[index];
        self.set_focus(Some(next));
        Some(next)
    }

    // -----------------------------------------------------------------------
    // Hover
    // -----------------------------------------------------------------------

    /// Move hover to `node`. Both the old and new holder are repainted.
    pub fn set_hover(&mut self, node: Option<NodeId>) -> bool {
        let node = node.filter(|&n| self.contains(n));
        let previous = self.ui.hovered;
        if previous == node {
            return false;
        }
        self.ui.hovered = node;
        for n in [previous, node].into_iter().flatten() {
            self.mark_dirty(n);
        }
        true
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.ui.hovered
    }

    // -----------------------------------------------------------------------
    // Mouse capture
    // -----------------------------------------------------------------------

    /// Route every mouse event to `node` until released. Replaces any
    /// existing holder.
    pub fn set_mouse_capture(&mut self, node: Option<NodeId>) {
        let node = node.filter(|&n| self.contains(n));
        if self.ui.mouse_capture != node {
            debug!(previous = ?self.ui.mouse_capture, capture = ?node, "mouse capture changed");
            self.ui.mouse_capture = node;
        }
    }

    /// Release capture, but only if `node` holds it.
    pub fn release_mouse_capture(&mut self, node: NodeId) {
        if self.ui.mouse_capture == Some(node) {
            self.set_mouse_capture(None);
        }
    }

    pub fn mouse_capture(&self) -> Option<NodeId> {
        self.ui.mouse_capture
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use crate::dom::{NodeId, WidgetTree};
    use crate::geometry::Rect;
    use crate::render::Buffer;
    use crate::widget::testing_widgets::{Recorder, RecorderLog};

    /// root > [a*, b > [c*, d*], e*] where * is focusable.
    fn focus_tree() -> (WidgetTree, [NodeId; 5]) {
        let log = RecorderLog::default();
        let mut tree = WidgetTree::new(Box::new(Recorder::new("root", &log)));
        tree.mount();
        let root = tree.root();
        let a = tree.add_child(root, Box::new(Recorder::new("a", &log).focusable())).unwrap();
        let b = tree.add_child(root, Box::new(Recorder::new("b", &log))).unwrap();
        let c = tree.add_child(b, Box::new(Recorder::new("c", &log).focusable())).unwrap();
        let d = tree.add_child(b, Box::new(Recorder::new("d", &log).focusable())).unwrap();
        let e = tree.add_child(root, Box::new(Recorder::new("e", &log).focusable())).unwrap();
        (tree, [a, b, c, d, e])
    }

    fn clean(tree: &mut WidgetTree) {
        tree.render(&mut Buffer::new(1, 1), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn collect_is_pre_order() {
        let (tree, [a, _, c, d, e]) = focus_tree();
        assert_eq!(tree.collect_focusable(tree.root()), vec![a, c, d, e]);
    }

    #[test]
    fn hidden_subtree_is_skipped() {
        let (mut tree, [a, b, _, _, e]) = focus_tree();
        tree.get_mut(b).unwrap().visible = false;
        assert_eq!(tree.collect_focusable(tree.root()), vec![a, e]);
    }

    #[test]
    fn next_wraps_around() {
        let (mut tree, [a, _, c, d, e]) = focus_tree();
        assert_eq!(tree.focus_next(), Some(a));
        assert_eq!(tree.focus_next(), Some(c));
        assert_eq!(tree.focus_next(), Some(d));
        assert_eq!(tree.focus_next(), Some(e));
        assert_eq!(tree.focus_next(), Some(a));
    }

    #[test]
    fn prev_starts_at_last_and_wraps() {
        let (mut tree, [a, _, _, _, e]) = focus_tree();
        assert_eq!(tree.focus_prev(), Some(e));
        tree.set_focus(Some(a));
        assert_eq!(tree.focus_prev(), Some(e));
    }

    #[test]
    fn nothing_focusable() {
        let log = RecorderLog::default();
        let mut tree = WidgetTree::new(Box::new(Recorder::new("root", &log)));
        assert_eq!(tree.focus_next(), None);
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn set_focus_is_idempotent() {
        let (mut tree, [a, ..]) = focus_tree();
        assert!(tree.set_focus(Some(a)));
        assert!(!tree.set_focus(Some(a)));
        assert!(tree.is_focused(a));
    }

    #[test]
    fn focus_transfer_dirties_old_without_propagating() {
        let (mut tree, [_, b, c, _, e]) = focus_tree();
        tree.set_focus(Some(c));
        clean(&mut tree);

        tree.set_focus(Some(e));
        assert!(tree.is_dirty(c));
        assert!(!tree.is_dirty(b));
        assert!(tree.is_dirty(e));
        assert!(tree.is_dirty(tree.root()));
    }

    #[test]
    fn blur_repaints_old_holder() {
        let (mut tree, [_, b, c, ..]) = focus_tree();
        tree.set_focus(Some(c));
        clean(&mut tree);
        tree.set_focus(None);
        assert!(tree.is_dirty(c));
        assert!(tree.is_dirty(b));
    }

    #[test]
    fn hover_and_capture_are_singletons() {
        let (mut tree, [a, _, c, ..]) = focus_tree();
        assert!(tree.set_hover(Some(a)));
        assert!(tree.set_hover(Some(c)));
        assert_eq!(tree.hovered(), Some(c));

        tree.set_mouse_capture(Some(a));
        tree.set_mouse_capture(Some(c));
        assert_eq!(tree.mouse_capture(), Some(c));
        tree.release_mouse_capture(a);
        assert_eq!(tree.mouse_capture(), Some(c));
        tree.release_mouse_capture(c);
        assert_eq!(tree.mouse_capture(), None);
    }
}
