//! Contexts handed to widget callbacks.
//!
//! [`WidgetContext`] gives a callback mutable access to the tree around the
//! widget being called (the widget itself is out of its slot for the
//! duration). [`RenderContext`] is the read-only counterpart used while
//! painting.

use crate::dom::{NodeData, NodeId, WidgetTree};
use crate::geometry::Rect;

use super::traits::Widget;

// ---------------------------------------------------------------------------
// WidgetContext
// ---------------------------------------------------------------------------

pub struct WidgetContext<'a> {
    tree: &'a mut WidgetTree,
    node: NodeId,
}

impl<'a> WidgetContext<'a> {
    pub(crate) fn new(tree: &'a mut WidgetTree, node: NodeId) -> Self {
        Self { tree, node }
    }

    /// The node whose widget is being called.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn tree(&self) -> &WidgetTree {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut *self.tree
    }

    pub fn data(&self) -> Option<&NodeData> {
        self.tree.get(self.node)
    }

    pub fn data_mut(&mut self) -> Option<&mut NodeData> {
        self.tree.get_mut(self.node)
    }

    /// Outer rect from the last layout pass.
    pub fn rect(&self) -> Rect {
        self.data().map_or(Rect::EMPTY, |d| d.rect)
    }

    pub fn content_rect(&self) -> Rect {
        self.data().map_or(Rect::EMPTY, NodeData::content_rect)
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.tree.children(self.node).to_vec()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.tree.parent(self.node)
    }

    /// Mark this node (and its ancestors) for repaint.
    pub fn mark_dirty(&mut self) {
        self.tree.mark_dirty(self.node);
    }

    /// Ask for a relayout before the next paint.
    pub fn request_layout(&mut self) {
        self.tree.request_layout();
    }

    /// Route all mouse events to this node until released.
    pub fn capture_mouse(&mut self) {
        self.tree.set_mouse_capture(Some(self.node));
    }

    /// Release mouse capture if this node holds it.
    pub fn release_mouse(&mut self) {
        self.tree.release_mouse_capture(self.node);
    }

    pub fn has_mouse_capture(&self) -> bool {
        self.tree.ui().mouse_capture == Some(self.node)
    }

    pub fn focus(&mut self) {
        self.tree.set_focus(Some(self.node));
    }

    pub fn is_focused(&self) -> bool {
        self.tree.ui().focused == Some(self.node)
    }
}

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

pub struct RenderContext<'a> {
    tree: &'a WidgetTree,
    node: NodeId,
    data: &'a NodeData,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(tree: &'a WidgetTree, node: NodeId, data: &'a NodeData) -> Self {
        Self { tree, node, data }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn tree(&self) -> &'a WidgetTree {
        self.tree
    }

    pub fn data(&self) -> &'a NodeData {
        self.data
    }

    pub fn rect(&self) -> Rect {
        self.data.rect
    }

    pub fn content_rect(&self) -> Rect {
        self.data.content_rect()
    }

    pub fn is_focused(&self) -> bool {
        self.tree.ui().focused == Some(self.node)
    }

    pub fn is_hovered(&self) -> bool {
        self.tree.ui().hovered == Some(self.node)
    }

    pub fn children(&self) -> &'a [NodeId] {
        self.tree.children(self.node)
    }

    /// The widget of a child (or any other node).
    pub fn widget(&self, id: NodeId) -> Option<&'a dyn Widget> {
        self.tree.widget(id)
    }
}
