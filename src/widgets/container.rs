//! Container widget: a flex box around declared children.
//!
//! The container arranges its children with a [`Flex`] along its direction,
//! inside an optional border. A title, if set, is drawn into the top edge.

use std::any::Any;

use crate::css::properties::{parse_ident, parse_length, PropertyError};
use crate::css::StyleValue;
use crate::geometry::Rect;
use crate::layout::{Align, Direction, Flex, LayoutItem};
use crate::render::{BorderKind, Buffer};
use crate::widget::context::RenderContext;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A layout container that holds child widgets.
///
/// # Examples
///
/// ```ignore
/// use trellis_tui::widgets::{Container, Static};
///
/// let container = Container::row()
///     .gap(1)
///     .with_child(Static::new("Hello"))
///     .with_child(Static::new("World"));
/// ```
pub struct Container {
    children: Vec<Box<dyn Widget>>,
    flex: Flex,
    border: BorderKind,
    title: Option<String>,
}

impl Container {
    /// An empty column container.
    pub fn new() -> Self {
        Self { children: Vec::new(), flex: Flex::column(), border: BorderKind::None, title: None }
    }

    pub fn column() -> Self {
        Self::new()
    }

    pub fn row() -> Self {
        Self { flex: Flex::row(), ..Self::new() }
    }

    /// Add a child widget (builder pattern).
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.flex = self.flex.gap(gap);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.flex = self.flex.align(align);
        self
    }

    pub fn border(mut self, kind: BorderKind) -> Self {
        self.border = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn flex(&self) -> Flex {
        self.flex
    }

    pub fn border_kind(&self) -> BorderKind {
        self.border
    }

    /// Children not yet handed to the tree.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn inner(&self, content: Rect) -> Rect {
        if self.border.is_visible() {
            content.inset(1, 1, 1, 1)
        } else {
            content
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn widget_type(&self) -> &str {
        "Container"
    }

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        std::mem::take(&mut self.children)
    }

    fn arrange(&mut self, content: Rect, children: &[LayoutItem]) -> Vec<Rect> {
        self.flex.arrange(self.inner(content), children)
    }

    fn clip_children(&self, content: Rect) -> Rect {
        self.inner(content)
    }

    fn render(&self, ctx: &RenderContext<'_>, buf: &mut Buffer) {
        let area = ctx.content_rect();
        let style = ctx.data().style;
        buf.draw_rect(area, style, self.border);
        if let (Some(title), true) = (&self.title, self.border.is_visible()) {
            buf.put_str_truncated(area.x.saturating_add(2), area.y, title, area.width - 4, style);
        }
    }

    fn apply_style(&mut self, property: &str, value: &StyleValue) -> Result<bool, PropertyError> {
        match property {
            "layout" => {
                self.flex.direction = match parse_ident(property, value)?.as_str() {
                    "horizontal" | "row" => Direction::Row,
                    "vertical" | "column" => Direction::Column,
                    other => {
                        return Err(PropertyError::invalid(property, format!("unknown layout {other:?}")))
                    }
                }
            }
            "gap" => self.flex = self.flex.gap(parse_length(property, value)?),
            "align" => {
                let name = parse_ident(property, value)?;
                let align = Align::parse(&name)
                    .ok_or_else(|| PropertyError::invalid(property, format!("unknown alignment {name:?}")))?;
                self.flex.align = align;
            }
            "border" => {
                let name = parse_ident(property, value)?;
                self.border = BorderKind::parse(&name)
                    .ok_or_else(|| PropertyError::invalid(property, format!("unknown border {name:?}")))?;
            }
            "border-title" => self.title = Some(value.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
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
