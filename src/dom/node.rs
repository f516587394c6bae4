//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::geometry::{Rect, Spacing};
use crate::layout::{Constraints, LayoutItem};
use crate::render::Style;

new_key_type! {
    /// Unique identifier for a tree node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Per-node state the tree manages on behalf of a widget.
///
/// Identity comes from the widget when it is inserted; geometry is assigned
/// by the layout pass; the box model and flags are usually set through
/// style declarations.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Widget type name (e.g. "Static", "Panel").
    pub widget_type: String,
    /// Optional unique id (`#id` selector).
    pub id: Option<String>,
    /// Classes (`.class` selector).
    pub classes: Vec<String>,
    /// Outer rect, assigned by layout.
    pub rect: Rect,
    pub constraints: Constraints,
    pub margin: Spacing,
    pub padding: Spacing,
    pub visible: bool,
    pub mounted: bool,
    pub focusable: bool,
    /// Needs repainting (self or a descendant).
    pub dirty: bool,
    /// Paint and hit-test order among siblings.
    pub z_index: i32,
    /// Base cell style painted under the widget.
    pub style: Style,
}

impl NodeData {
    /// Create a new `NodeData` with the given widget type and defaults.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            id: None,
            classes: Vec::new(),
            rect: Rect::EMPTY,
            constraints: Constraints::default(),
            margin: Spacing::ZERO,
            padding: Spacing::ZERO,
            visible: true,
            mounted: false,
            focusable: false,
            dirty: true,
            z_index: 0,
            style: Style::DEFAULT,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The rect inside the padding.
    pub fn content_rect(&self) -> Rect {
        self.rect.shrink(self.padding)
    }

    /// What the flex solver needs from this node.
    pub fn layout_item(&self) -> LayoutItem {
        LayoutItem { constraints: self.constraints, margin: self.margin, visible: self.visible }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Dimension;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("Static");
        assert_eq!(data.widget_type, "Static");
        assert!(data.id.is_none());
        assert!(data.visible);
        assert!(!data.mounted);
        assert!(!data.focusable);
        assert!(data.dirty);
        assert_eq!(data.z_index, 0);
    }

    #[test]
    fn builder_dedupes_classes() {
        let data = NodeData::new("Panel").with_id("main").with_class("a").with_class("a");
        assert_eq!(data.id.as_deref(), Some("main"));
        assert_eq!(data.classes, vec!["a".to_string()]);
    }

    #[test]
    fn add_remove_class() {
        let mut data = NodeData::new("X");
        data.add_class("hot");
        data.add_class("hot");
        assert!(data.has_class("hot"));
        data.remove_class("hot");
        assert!(!data.has_class("hot"));
    }

    #[test]
    fn content_rect_respects_padding() {
        let mut data = NodeData::new("X");
        data.rect = Rect::new(0, 0, 10, 6);
        data.padding = Spacing::symmetric(1, 2);
        assert_eq!(data.content_rect(), Rect::new(2, 1, 6, 4));
    }

    #[test]
    fn layout_item_mirrors_box_model() {
        let mut data = NodeData::new("X");
        data.constraints.width = Dimension::Fixed(4);
        data.visible = false;
        let item = data.layout_item();
        assert_eq!(item.constraints.width, Dimension::Fixed(4));
        assert!(!item.visible);
    }
}
