//! The widget tree: ownership, lifecycle, dirty tracking, layout and paint.
//!
//! All nodes live in a single `SlotMap`. Parent/child relationships are
//! stored in secondary maps, so a parent link is just a key: it can never
//! keep a node alive or dangle into freed memory. Widgets are boxed trait
//! objects stored next to their [`NodeData`]; while one of a widget's own
//! callbacks runs, it is taken out of its slot so the callback can receive
//! `&mut` access to the rest of the tree through a [`WidgetContext`].
//!
//! The tree also owns the [`UiContext`]: the focus, hover and mouse-capture
//! singletons. Keeping them per tree lets independent trees coexist.

use slotmap::{SecondaryMap, SlotMap};
use tracing::{debug, error, trace, warn};

use crate::css::properties::{apply_node_property, PropertyError};
use crate::css::Declarations;
use crate::event::Event;
use crate::geometry::Rect;
use crate::layout::Flex;
use crate::render::{Buffer, Cell, Color};
use crate::widget::context::{RenderContext, WidgetContext};
use crate::widget::lifecycle::{LifecycleEvent, LifecycleLog};
use crate::widget::Widget;

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from structural tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0:?} is not in the tree")]
    NodeNotFound(NodeId),
    #[error("moving {node:?} under {parent:?} would create a cycle")]
    CycleDetected { node: NodeId, parent: NodeId },
    #[error("the root node cannot be removed")]
    RootRemoval,
}

// ---------------------------------------------------------------------------
// UiContext
// ---------------------------------------------------------------------------

/// The at-most-one holders of focus, hover and mouse capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiContext {
    pub focused: Option<NodeId>,
    pub hovered: Option<NodeId>,
    pub mouse_capture: Option<NodeId>,
}

// ---------------------------------------------------------------------------
// Node / Listener
// ---------------------------------------------------------------------------

pub(crate) struct Node {
    pub(crate) data: NodeData,
    /// `None` only while one of the widget's own callbacks is running.
    pub(crate) widget: Option<Box<dyn Widget>>,
}

/// An event handler attached to a node.
pub type Handler = Box<dyn FnMut(&mut WidgetContext<'_>, &mut Event)>;

pub(crate) struct Listener {
    pub(crate) capture: bool,
    pub(crate) handler: Handler,
}

// ---------------------------------------------------------------------------
// WidgetTree
// ---------------------------------------------------------------------------

/// A retained tree of widgets.
pub struct WidgetTree {
    pub(crate) nodes: SlotMap<NodeId, Node>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    pub(crate) listeners: SecondaryMap<NodeId, Vec<Listener>>,
    root: NodeId,
    pub(crate) ui: UiContext,
    lifecycle: LifecycleLog,
    /// Nodes unmounted while their widget was out of its slot. Their
    /// `on_unmount` runs once the widget's own callback returns.
    deferred_unmounts: Vec<NodeId>,
    layout_area: Option<Rect>,
    layout_requested: bool,
    pub(crate) hover_tracking: bool,
    pub(crate) dispatching: bool,
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .field("ui", &self.ui)
            .finish()
    }
}

impl WidgetTree {
    /// Create a tree whose root is `root`. Nothing is mounted until
    /// [`WidgetTree::mount`] is called.
    pub fn new(root: Box<dyn Widget>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root_id = nodes.insert(Node { data: data_for(root.as_ref()), widget: Some(root) });
        let mut children = SecondaryMap::new();
        children.insert(root_id, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            listeners: SecondaryMap::new(),
            root: root_id,
            ui: UiContext::default(),
            lifecycle: LifecycleLog::new(),
            deferred_unmounts: Vec::new(),
            layout_area: None,
            layout_requested: false,
            hover_tracking: true,
            dispatching: false,
        }
    }

    /// Mount the root, composing the whole declared tree.
    pub fn mount(&mut self) {
        self.mount_node(self.root);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id).map(|n| &n.data)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id).map(|n| &mut n.data)
    }

    /// The widget at `id`. `None` while the widget's own callback runs.
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id).and_then(|n| n.widget.as_deref())
    }

    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).and_then(|n| n.widget.as_deref_mut())
    }

    /// Downcast the widget at `id` to a concrete type.
    pub fn widget_as<T: 'static>(&self, id: NodeId) -> Option<&T> {
        self.widget(id).and_then(|w| w.as_any().downcast_ref::<T>())
    }

    pub fn widget_as_mut<T: 'static>(&mut self, id: NodeId) -> Option<&mut T> {
        self.widget_mut(id).and_then(|w| w.as_any_mut().downcast_mut::<T>())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children in declaration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).contains(&ancestor)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|d| d.mounted)
    }

    /// Take the lifecycle events recorded since the last drain.
    pub fn drain_lifecycle(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.drain()
    }

    /// Enable or disable hover tracking on mouse-move dispatch.
    pub fn set_hover_tracking(&mut self, enabled: bool) {
        self.hover_tracking = enabled;
        if !enabled {
            self.set_hover(None);
        }
    }

    // -----------------------------------------------------------------------
    // Widget callbacks
    // -----------------------------------------------------------------------

    /// Run `f` with the widget at `id` taken out of its slot and a context
    /// over the rest of the tree. Returns `None` if the node is gone or its
    /// widget is already on the stack.
    pub(crate) fn with_widget<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut WidgetContext<'_>) -> R,
    ) -> Option<R> {
        let mut widget = self.nodes.get_mut(id)?.widget.take()?;
        let result = {
            let mut ctx = WidgetContext::new(self, id);
            f(widget.as_mut(), &mut ctx)
        };
        if let Some(pos) = self.deferred_unmounts.iter().position(|&n| n == id) {
            self.deferred_unmounts.swap_remove(pos);
            trace!(node = ?id, "running deferred on_unmount");
            widget.on_unmount(&mut WidgetContext::new(self, id));
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(widget);
        }
        Some(result)
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Attach `widget` as the last child of `parent`.
    ///
    /// If `parent` is mounted the child is mounted immediately: its declared
    /// children are composed and attached, then its `on_mount` runs.
    pub fn add_child(&mut self, parent: NodeId, widget: Box<dyn Widget>) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        Ok(self.insert_child(parent, widget))
    }

    fn insert_child(&mut self, parent: NodeId, widget: Box<dyn Widget>) -> NodeId {
        let id = self.nodes.insert(Node { data: data_for(widget.as_ref()), widget: Some(widget) });
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        if self.is_mounted(parent) {
            self.mount_node(id);
        }
        self.mark_dirty(parent);
        self.request_layout();
        id
    }

    /// Remove `id` and its subtree.
    ///
    /// Mounted nodes are unmounted children-first. Focus, hover or mouse
    /// capture held anywhere in the subtree is released.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::RootRemoval);
        }
        if !self.contains(id) {
            return Err(TreeError::NodeNotFound(id));
        }
        self.unmount_node(id);

        let subtree = self.walk_depth_first(id);
        let ui = &mut self.ui;
        for slot in [&mut ui.focused, &mut ui.hovered, &mut ui.mouse_capture] {
            if slot.is_some_and(|held| subtree.contains(&held)) {
                debug!(node = ?slot, "releasing singleton held by removed node");
                *slot = None;
            }
        }

        if let Some(parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
            self.mark_dirty(parent);
        }
        for node in subtree {
            self.children.remove(node);
            self.parent.remove(node);
            self.listeners.remove(node);
            self.nodes.remove(node);
        }
        self.request_layout();
        Ok(())
    }

    /// Move `node` (with its subtree) to the end of `new_parent`'s children.
    ///
    /// Mount state follows the new parent.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) -> Result<(), TreeError> {
        for id in [node, new_parent] {
            if !self.contains(id) {
                return Err(TreeError::NodeNotFound(id));
            }
        }
        if self.is_ancestor_or_self(node, new_parent) {
            error!(?node, parent = ?new_parent, "reparent would create a cycle");
            return Err(TreeError::CycleDetected { node, parent: new_parent });
        }

        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
            self.mark_dirty(old_parent);
        }
        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }

        match (self.is_mounted(new_parent), self.is_mounted(node)) {
            (true, false) => self.mount_node(node),
            (false, true) => self.unmount_node(node),
            _ => {}
        }
        self.mark_dirty(node);
        self.request_layout();
        Ok(())
    }

    fn mount_node(&mut self, id: NodeId) {
        match self.get_mut(id) {
            Some(data) if !data.mounted => data.mounted = true,
            _ => return,
        }

        let declared = self.with_widget(id, |w, _| w.compose()).unwrap_or_default();
        for child in declared {
            self.insert_child(id, child);
        }
        for child in self.children(id).to_vec() {
            self.mount_node(child);
        }

        if self.with_widget(id, |w, ctx| w.on_mount(ctx)).is_none() {
            // Remounted inside its own callback: the pending unmount is void.
            self.deferred_unmounts.retain(|&n| n != id);
        }
        if let Some(data) = self.get(id) {
            debug!(node = ?id, widget = %data.widget_type, "mounted");
            let widget_type = data.widget_type.clone();
            self.lifecycle.record_mount(id, &widget_type);
        }
        self.mark_dirty(id);
    }

    fn unmount_node(&mut self, id: NodeId) {
        if !self.is_mounted(id) {
            return;
        }
        for child in self.children(id).to_vec() {
            self.unmount_node(child);
        }
        if self.with_widget(id, |w, ctx| w.on_unmount(ctx)).is_none() {
            self.deferred_unmounts.push(id);
        }
        if let Some(data) = self.get_mut(id) {
            data.mounted = false;
            debug!(node = ?id, widget = %data.widget_type, "unmounted");
            let widget_type = data.widget_type.clone();
            self.lifecycle.record_unmount(id, &widget_type);
        }
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Attach a handler that runs in the target and bubble phases.
    pub fn on(
        &mut self,
        id: NodeId,
        handler: impl FnMut(&mut WidgetContext<'_>, &mut Event) + 'static,
    ) -> Result<(), TreeError> {
        self.add_listener(id, false, Box::new(handler))
    }

    /// Attach a handler that runs in the capture phase.
    pub fn on_capture(
        &mut self,
        id: NodeId,
        handler: impl FnMut(&mut WidgetContext<'_>, &mut Event) + 'static,
    ) -> Result<(), TreeError> {
        self.add_listener(id, true, Box::new(handler))
    }

    fn add_listener(&mut self, id: NodeId, capture: bool, handler: Handler) -> Result<(), TreeError> {
        let entry = self.listeners.entry(id).ok_or(TreeError::NodeNotFound(id))?;
        entry.or_default().push(Listener { capture, handler });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Dirty tracking
    // -----------------------------------------------------------------------

    /// Mark `id` and every ancestor dirty. Ancestors are visited even when
    /// already dirty.
    pub fn mark_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(data) = self.get_mut(node) {
                data.dirty = true;
            }
            current = self.parent(node);
        }
    }

    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|d| d.dirty)
    }

    /// Whether anything in the tree needs repainting.
    pub fn needs_render(&self) -> bool {
        self.is_dirty(self.root)
    }

    // -----------------------------------------------------------------------
    // Style hook
    // -----------------------------------------------------------------------

    /// Apply declarations to a node.
    ///
    /// Node-level keys are handled here; anything else is offered to the
    /// widget's `apply_style`. Rejected declarations are logged, skipped and
    /// returned. The node is marked dirty and a relayout is requested
    /// regardless.
    pub fn apply_css_style(
        &mut self,
        id: NodeId,
        declarations: &Declarations,
    ) -> Result<Vec<PropertyError>, TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::NodeNotFound(id))?;
        let mut rejected = Vec::new();
        for (property, value) in declarations.iter() {
            let outcome = match apply_node_property(&mut node.data, property, value) {
                Ok(true) => Ok(true),
                Ok(false) => match node.widget.as_mut() {
                    Some(widget) => widget.apply_style(property, value),
                    None => Ok(false),
                },
                Err(e) => Err(e),
            };
            let err = match outcome {
                Ok(true) => continue,
                Ok(false) => PropertyError::UnknownProperty(property.to_owned()),
                Err(e) => e,
            };
            warn!(node = ?id, property, error = %err, "style declaration rejected");
            rejected.push(err);
        }
        self.mark_dirty(id);
        self.request_layout();
        Ok(rejected)
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Ask for a layout pass before the next render.
    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    pub fn layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// Assign `area` to the root and lay out the whole tree top-down.
    pub fn layout(&mut self, area: Rect) {
        trace!(?area, "layout pass");
        self.layout_area = Some(area);
        self.layout_requested = false;
        if let Some(data) = self.get_mut(self.root) {
            data.rect = area;
        }
        self.layout_node(self.root);
        self.mark_dirty(self.root);
    }

    /// Re-run layout over the last area. No-op before the first layout.
    pub fn relayout(&mut self) {
        match self.layout_area {
            Some(area) => self.layout(area),
            None => self.layout_requested = false,
        }
    }

    fn layout_node(&mut self, id: NodeId) {
        let Some(data) = self.get(id) else {
            return;
        };
        let content = data.content_rect();
        let kids = self.children(id).to_vec();
        let items: Vec<_> = kids
            .iter()
            .filter_map(|&k| self.get(k).map(NodeData::layout_item))
            .collect();

        let rects = match self.nodes.get_mut(id).and_then(|n| n.widget.as_mut()) {
            Some(widget) => widget.arrange(content, &items),
            None => Flex::column().arrange(content, &items),
        };
        for (i, kid) in kids.into_iter().enumerate() {
            let rect = rects.get(i).copied().unwrap_or(Rect::new(content.x, content.y, 0, 0));
            if let Some(data) = self.get_mut(kid) {
                data.rect = rect;
            }
            self.layout_node(kid);
        }
    }

    // -----------------------------------------------------------------------
    // Paint
    // -----------------------------------------------------------------------

    /// Children ordered for painting: ascending z-index, then declaration
    /// order.
    pub fn paint_order(&self, id: NodeId) -> Vec<NodeId> {
        let mut kids = self.children(id).to_vec();
        kids.sort_by_key(|&k| self.get(k).map_or(0, |d| d.z_index));
        kids
    }

    /// Paint every visible node into `buf` within `clip`, then clear all
    /// dirty flags.
    pub fn render(&mut self, buf: &mut Buffer, clip: Rect) {
        buf.push_clip(clip);
        self.render_node(self.root, buf);
        buf.pop_clip();
        for node in self.nodes.values_mut() {
            node.data.dirty = false;
        }
    }

    fn render_node(&self, id: NodeId, buf: &mut Buffer) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let data = &node.data;
        if !data.visible {
            return;
        }
        buf.push_clip(data.rect);
        if data.style.bg != Color::Reset {
            buf.fill(data.rect, Cell::blank(data.style));
        }
        let child_clip = match node.widget.as_deref() {
            Some(widget) => {
                let ctx = RenderContext::new(self, id, data);
                widget.render(&ctx, buf);
                widget.clip_children(data.content_rect())
            }
            None => data.content_rect(),
        };
        buf.push_clip(child_clip);
        for child in self.paint_order(id) {
            self.render_node(child, buf);
        }
        buf.pop_clip();
        buf.pop_clip();
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    /// The deepest, top-most visible node containing `(x, y)`, or `None`
    /// when the point is outside the root.
    pub fn find_widget_at(&self, x: i32, y: i32) -> Option<NodeId> {
        self.find_widget_at_from(self.root, x, y)
    }

    /// Hit-test within the subtree rooted at `id`.
    ///
    /// A node is only a candidate if its own rect contains the point;
    /// children are tried in descending paint order and the node itself
    /// wins only if no child claims the point.
    pub fn find_widget_at_from(&self, id: NodeId, x: i32, y: i32) -> Option<NodeId> {
        let data = self.get(id)?;
        if !data.visible || !data.rect.contains(x, y) {
            return None;
        }
        self.paint_order(id)
            .into_iter()
            .rev()
            .find_map(|child| self.find_widget_at_from(child, x, y))
            .or(Some(id))
    }
}

fn data_for(widget: &dyn Widget) -> NodeData {
    let mut data = NodeData::new(widget.widget_type()).focusable(widget.can_focus());
    data.id = widget.id().map(str::to_owned);
    for class in widget.classes() {
        data.add_class(class);
    }
    data
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::StyleValue;
    use crate::layout::Dimension;
    use crate::widget::testing_widgets::{Recorder, RecorderLog};
    use crate::widget::WidgetExt;
    use crate::widgets::Static;

    /// ```text
    ///       root (Recorder "root")
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree(log: &RecorderLog) -> (WidgetTree, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = WidgetTree::new(Box::new(Recorder::new("root", log)));
        tree.mount();
        let root = tree.root();
        let a = tree.add_child(root, Box::new(Recorder::new("a", log))).unwrap();
        let b = tree.add_child(root, Box::new(Recorder::new("b", log))).unwrap();
        let c = tree.add_child(a, Box::new(Recorder::new("c", log))).unwrap();
        let d = tree.add_child(a, Box::new(Recorder::new("d", log))).unwrap();
        (tree, root, a, b, c, d)
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    #[test]
    fn parent_links_match_children() {
        let log = RecorderLog::default();
        let (tree, root, a, b, c, d) = build_tree(&log);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.ancestors(d), vec![a, root]);
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn widget_identity_copied_to_node() {
        let mut tree = WidgetTree::new(Box::new(Static::new("root")));
        let root = tree.root();
        let id = tree
            .add_child(root, Box::new(Static::new("x").with_id("title").add_class("big")))
            .unwrap();
        let data = tree.get(id).unwrap();
        assert_eq!(data.widget_type, "Static");
        assert_eq!(data.id.as_deref(), Some("title"));
        assert!(data.has_class("big"));
        assert!(tree.widget_as::<crate::widget::WidgetBuilder<Static>>(id).is_some());
    }

    #[test]
    fn add_child_to_missing_parent_fails() {
        let log = RecorderLog::default();
        let (mut tree, _, _, b, ..) = build_tree(&log);
        tree.remove(b).unwrap();
        let err = tree.add_child(b, Box::new(Recorder::new("x", &log))).unwrap_err();
        assert_eq!(err, TreeError::NodeNotFound(b));
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn adding_to_mounted_parent_mounts_immediately() {
        let log = RecorderLog::default();
        let (tree, _, a, _, c, _) = build_tree(&log);
        assert!(tree.is_mounted(a));
        assert!(tree.is_mounted(c));
        assert!(log.entries().contains(&"mount c".to_string()));
    }

    #[test]
    fn adding_to_unmounted_parent_defers_mount() {
        let log = RecorderLog::default();
        let mut tree = WidgetTree::new(Box::new(Recorder::new("root", &log)));
        let root = tree.root();
        let a = tree.add_child(root, Box::new(Recorder::new("a", &log))).unwrap();
        assert!(!tree.is_mounted(a));
        assert!(log.entries().is_empty());
        tree.mount();
        assert!(tree.is_mounted(a));
        assert_eq!(log.entries(), vec!["mount a", "mount root"]);
    }

    #[test]
    fn compose_attaches_declared_children_before_on_mount() {
        let log = RecorderLog::default();
        let root = Recorder::new("root", &log)
            .with_children(vec![Recorder::new("x", &log).with_children(vec![Recorder::new("y", &log)])]);
        let mut tree = WidgetTree::new(Box::new(root));
        tree.mount();
        assert_eq!(tree.len(), 3);
        assert_eq!(log.entries(), vec!["mount y", "mount x", "mount root"]);
        let events = tree.drain_lifecycle();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], LifecycleEvent::Mount { .. }));
    }

    #[test]
    fn remove_unmounts_children_first() {
        let log = RecorderLog::default();
        let (mut tree, root, a, b, c, d) = build_tree(&log);
        log.clear();
        tree.remove(a).unwrap();
        assert_eq!(log.entries(), vec!["unmount c", "unmount d", "unmount a"]);
        assert!(!tree.contains(a));
        assert!(!tree.contains(c));
        assert!(!tree.contains(d));
        assert_eq!(tree.children(root), &[b]);
    }

    #[test]
    fn remove_root_is_rejected() {
        let log = RecorderLog::default();
        let (mut tree, root, ..) = build_tree(&log);
        assert_eq!(tree.remove(root), Err(TreeError::RootRemoval));
    }

    #[test]
    fn remove_releases_singletons() {
        let log = RecorderLog::default();
        let (mut tree, _, a, b, c, _) = build_tree(&log);
        tree.ui.focused = Some(c);
        tree.ui.mouse_capture = Some(a);
        tree.ui.hovered = Some(b);
        tree.remove(a).unwrap();
        assert_eq!(tree.ui().focused, None);
        assert_eq!(tree.ui().mouse_capture, None);
        assert_eq!(tree.ui().hovered, Some(b));
    }

    #[test]
    fn reparent_moves_subtree() {
        let log = RecorderLog::default();
        let (mut tree, root, a, b, c, _) = build_tree(&log);
        tree.reparent(c, b).unwrap();
        assert_eq!(tree.parent(c), Some(b));
        assert!(!tree.children(a).contains(&c));
        assert_eq!(tree.ancestors(c), vec![b, root]);
    }

    #[test]
    fn reparent_into_descendant_is_a_cycle() {
        let log = RecorderLog::default();
        let (mut tree, _, a, _, c, _) = build_tree(&log);
        let err = tree.reparent(a, c).unwrap_err();
        assert_eq!(err, TreeError::CycleDetected { node: a, parent: c });
    }

    // -----------------------------------------------------------------------
    // Dirty tracking
    // -----------------------------------------------------------------------

    #[test]
    fn mark_dirty_reaches_root_even_through_dirty_ancestors() {
        let log = RecorderLog::default();
        let (mut tree, root, a, b, c, _) = build_tree(&log);
        tree.render(&mut Buffer::new(1, 1), Rect::new(0, 0, 1, 1));
        assert!(!tree.is_dirty(root));

        tree.get_mut(a).unwrap().dirty = true;
        tree.mark_dirty(c);
        assert!(tree.is_dirty(c));
        assert!(tree.is_dirty(a));
        assert!(tree.is_dirty(root));
        assert!(!tree.is_dirty(b));
        assert!(tree.needs_render());
    }

    // -----------------------------------------------------------------------
    // Style hook
    // -----------------------------------------------------------------------

    #[test]
    fn apply_css_style_sets_fields_and_reports_rejects() {
        let log = RecorderLog::default();
        let (mut tree, root, a, ..) = build_tree(&log);
        tree.render(&mut Buffer::new(1, 1), Rect::new(0, 0, 1, 1));

        let decls = Declarations::new()
            .set("width", "2fr")
            .set("z-index", 3)
            .set("bogus", 1)
            .set("height", StyleValue::Bool(true));
        let rejected = tree.apply_css_style(a, &decls).unwrap();
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0], PropertyError::UnknownProperty("bogus".into()));

        let data = tree.get(a).unwrap();
        assert_eq!(data.constraints.width, Dimension::Fraction(2.0));
        assert_eq!(data.z_index, 3);
        assert!(tree.is_dirty(root));
        assert!(tree.layout_requested());
    }

    // -----------------------------------------------------------------------
    // Layout / hit testing
    // -----------------------------------------------------------------------

    #[test]
    fn default_layout_stacks_children() {
        let log = RecorderLog::default();
        let (mut tree, root, a, b, c, d) = build_tree(&log);
        tree.layout(Rect::new(0, 0, 10, 10));
        assert_eq!(tree.get(root).unwrap().rect, Rect::new(0, 0, 10, 10));
        assert_eq!(tree.get(a).unwrap().rect, Rect::new(0, 0, 10, 5));
        assert_eq!(tree.get(b).unwrap().rect, Rect::new(0, 5, 10, 5));
        assert_eq!(tree.get(c).unwrap().rect, Rect::new(0, 0, 10, 3));
        assert_eq!(tree.get(d).unwrap().rect, Rect::new(0, 3, 10, 2));
        assert!(!tree.layout_requested());
    }

    #[test]
    fn find_widget_at_prefers_higher_z() {
        let log = RecorderLog::default();
        let mut tree = WidgetTree::new(Box::new(Recorder::new("root", &log)));
        let root = tree.root();
        let a = tree.add_child(root, Box::new(Recorder::new("a", &log))).unwrap();
        let b = tree.add_child(root, Box::new(Recorder::new("b", &log))).unwrap();
        tree.layout(Rect::new(0, 0, 20, 20));
        tree.get_mut(a).unwrap().rect = Rect::new(0, 0, 10, 10);
        tree.get_mut(b).unwrap().rect = Rect::new(5, 5, 10, 10);
        tree.get_mut(b).unwrap().z_index = 1;
        assert_eq!(tree.find_widget_at(5, 5), Some(b));

        tree.get_mut(b).unwrap().z_index = 0;
        tree.get_mut(a).unwrap().z_index = 2;
        assert_eq!(tree.find_widget_at(5, 5), Some(a));
        assert_eq!(tree.find_widget_at(19, 19), Some(root));
        assert_eq!(tree.find_widget_at(20, 0), None);
    }

    #[test]
    fn hidden_nodes_are_not_hit() {
        let log = RecorderLog::default();
        let (mut tree, _, a, _, c, _) = build_tree(&log);
        tree.layout(Rect::new(0, 0, 10, 10));
        assert_eq!(tree.find_widget_at(1, 1), Some(c));
        tree.get_mut(c).unwrap().visible = false;
        assert_eq!(tree.find_widget_at(1, 1), Some(a));
    }

    #[test]
    fn render_paints_in_z_order_and_clears_dirty() {
        let mut tree = WidgetTree::new(Box::new(Static::new("")));
        let root = tree.root();
        tree.mount();
        let low = tree.add_child(root, Box::new(Static::new("low"))).unwrap();
        let high = tree.add_child(root, Box::new(Static::new("HI"))).unwrap();
        tree.layout(Rect::new(0, 0, 5, 2));
        tree.get_mut(high).unwrap().rect = Rect::new(0, 0, 5, 1);
        tree.get_mut(high).unwrap().z_index = 1;
        tree.get_mut(low).unwrap().rect = Rect::new(0, 0, 5, 1);

        let mut buf = Buffer::new(5, 2);
        let area = buf.area();
        tree.render(&mut buf, area);
        assert_eq!(buf.to_text(), "HIw\n");
        assert!(!tree.needs_render());
    }
}
