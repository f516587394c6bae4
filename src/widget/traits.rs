//! Widget trait: compose, mount/unmount, arrange, render, events.
//!
//! The `Widget` trait is the core abstraction for every node in the tree.
//! All methods but `widget_type` and the `Any` accessors have defaults, so a
//! leaf widget only implements what it needs. The `WidgetExt` trait adds
//! builder-style convenience methods for attaching ids and classes.

use std::any::Any;

use crate::css::{PropertyError, StyleValue};
use crate::event::Event;
use crate::geometry::Rect;
use crate::layout::{BorderJunctionProvider, Flex, LayoutItem};
use crate::render::Buffer;

use super::context::{RenderContext, WidgetContext};

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Widget is object-safe: the tree stores `Box<dyn Widget>`. Methods that
/// require `Self: Sized` are on the `WidgetExt` extension trait instead.
pub trait Widget {
    /// The type name used by type selectors (e.g. "Static", "Panel").
    fn widget_type(&self) -> &str;

    /// Initial `#id` of the node created for this widget.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Initial classes of the node created for this widget.
    fn classes(&self) -> &[String] {
        &[]
    }

    /// Whether the node starts out focusable.
    fn can_focus(&self) -> bool {
        false
    }

    /// Declared children. Called once, when the widget is mounted; the
    /// returned widgets are attached in order before `on_mount` runs.
    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        Vec::new()
    }

    /// Called after the node and its declared children are mounted.
    fn on_mount(&mut self, _ctx: &mut WidgetContext<'_>) {}

    /// Called after all children have been unmounted.
    fn on_unmount(&mut self, _ctx: &mut WidgetContext<'_>) {}

    /// Place children inside `content` (the node rect minus padding).
    /// Returns one rect per item. Defaults to a vertical flex.
    fn arrange(&mut self, content: Rect, children: &[LayoutItem]) -> Vec<Rect> {
        Flex::column().arrange(content, children)
    }

    /// Paint this widget. Children are painted afterwards by the tree.
    fn render(&self, _ctx: &RenderContext<'_>, _buf: &mut Buffer) {}

    /// The clip applied while painting children.
    fn clip_children(&self, content: Rect) -> Rect {
        content
    }

    /// Capture-phase handler, run while the event travels towards the target.
    fn on_capture(&mut self, _ctx: &mut WidgetContext<'_>, _event: &mut Event) {}

    /// Target- and bubble-phase handler.
    fn on_event(&mut self, _ctx: &mut WidgetContext<'_>, _event: &mut Event) {}

    /// Opt into direct dispatch: events reaching this node are handed to its
    /// subtree children-first instead of continuing down the target path.
    fn direct_dispatch(&self) -> bool {
        false
    }

    /// Accept a style declaration the tree does not handle itself.
    /// `Ok(false)` means the property is unknown.
    fn apply_style(&mut self, _property: &str, _value: &StyleValue) -> Result<bool, PropertyError> {
        Ok(false)
    }

    /// Splitter geometry exposed to an enclosing split container.
    fn border_junction(&self) -> Option<&dyn BorderJunctionProvider> {
        None
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// WidgetExt
// ---------------------------------------------------------------------------

/// Extension trait providing builder-style convenience methods for widgets.
///
/// Automatically implemented for all types that implement `Widget`.
pub trait WidgetExt: Widget {
    /// Wrap this widget with an id.
    fn with_id(self, id: &str) -> WidgetBuilder<Self>
    where
        Self: Sized,
    {
        WidgetBuilder { widget: self, id: Some(id.to_owned()), classes: Vec::new() }
    }

    /// Wrap this widget with a single class.
    fn with_class(self, class: &str) -> WidgetBuilder<Self>
    where
        Self: Sized,
    {
        WidgetBuilder { widget: self, id: None, classes: vec![class.to_owned()] }
    }

    /// Wrap this widget with multiple classes.
    fn with_classes(self, classes: &[&str]) -> WidgetBuilder<Self>
    where
        Self: Sized,
    {
        WidgetBuilder {
            widget: self,
            id: None,
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

impl<T: Widget> WidgetExt for T {}

// ---------------------------------------------------------------------------
// WidgetBuilder
// ---------------------------------------------------------------------------

/// A wrapper around a widget that adds id and class metadata.
///
/// Created by `WidgetExt::with_id`, `with_class`, or `with_classes`.
/// Delegates every other `Widget` method to the inner widget.
#[derive(Debug)]
pub struct WidgetBuilder<W: Widget> {
    pub widget: W,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl<W: Widget> WidgetBuilder<W> {
    /// Set the id (chainable).
    pub fn set_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Add a class (chainable).
    pub fn add_class(mut self, class: &str) -> Self {
        let class = class.to_owned();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple classes (chainable).
    pub fn add_classes(mut self, classes: &[&str]) -> Self {
        for &class in classes {
            self = self.add_class(class);
        }
        self
    }
}

impl<W: Widget + 'static> Widget for WidgetBuilder<W> {
    fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn can_focus(&self) -> bool {
        self.widget.can_focus()
    }

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        self.widget.compose()
    }

    fn on_mount(&mut self, ctx: &mut WidgetContext<'_>) {
        self.widget.on_mount(ctx)
    }

    fn on_unmount(&mut self, ctx: &mut WidgetContext<'_>) {
        self.widget.on_unmount(ctx)
    }

    fn arrange(&mut self, content: Rect, children: &[LayoutItem]) -> Vec<Rect> {
        self.widget.arrange(content, children)
    }

    fn render(&self, ctx: &RenderContext<'_>, buf: &mut Buffer) {
        self.widget.render(ctx, buf)
    }

    fn clip_children(&self, content: Rect) -> Rect {
        self.widget.clip_children(content)
    }

    fn on_capture(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        self.widget.on_capture(ctx, event)
    }

    fn on_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        self.widget.on_event(ctx, event)
    }

    fn direct_dispatch(&self) -> bool {
        self.widget.direct_dispatch()
    }

    fn apply_style(&mut self, property: &str, value: &StyleValue) -> Result<bool, PropertyError> {
        self.widget.apply_style(property, value)
    }

    fn border_junction(&self) -> Option<&dyn BorderJunctionProvider> {
        self.widget.border_junction()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
