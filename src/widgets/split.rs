//! SplitContainer: two panes separated by a draggable splitter.
//!
//! Geometry and drag state live in [`SplitLayout`]. The widget adds mouse
//! handling (press on the splitter captures the pointer, drag moves it,
//! release fires the resize callback) and paints the border, the splitter
//! and any junctions with orthogonal borderless splits in its panes.

use std::any::Any;

use tracing::debug;

use crate::css::properties::{parse_float, parse_ident, PropertyError};
use crate::css::StyleValue;
use crate::dom::NodeId;
use crate::event::{Event, InputEvent, MouseAction, MouseButton};
use crate::geometry::Rect;
use crate::layout::{BorderJunctionProvider, LayoutItem, SplitDirection, SplitLayout};
use crate::render::{BorderChars, BorderKind, Buffer};
use crate::widget::context::{RenderContext, WidgetContext};
use crate::widget::traits::Widget;

pub type ResizeCallback = Box<dyn FnMut(f32)>;

pub struct SplitContainer {
    layout: SplitLayout,
    border: BorderKind,
    first: Option<Box<dyn Widget>>,
    second: Option<Box<dyn Widget>>,
    has_first: bool,
    has_second: bool,
    on_resize: Option<ResizeCallback>,
}

impl SplitContainer {
    pub fn new(direction: SplitDirection) -> Self {
        Self {
            layout: SplitLayout::new(direction),
            border: BorderKind::Light,
            first: None,
            second: None,
            has_first: false,
            has_second: false,
            on_resize: None,
        }
    }

    /// Panes side by side.
    pub fn horizontal() -> Self {
        Self::new(SplitDirection::Horizontal)
    }

    /// Panes stacked.
    pub fn vertical() -> Self {
        Self::new(SplitDirection::Vertical)
    }

    pub fn first(mut self, widget: impl Widget + 'static) -> Self {
        self.first = Some(Box::new(widget));
        self
    }

    pub fn second(mut self, widget: impl Widget + 'static) -> Self {
        self.second = Some(Box::new(widget));
        self
    }

    pub fn ratio(mut self, ratio: f32) -> Self {
        self.layout.set_ratio(ratio);
        self
    }

    pub fn min_sizes(mut self, first: i32, second: i32) -> Self {
        self.layout = self.layout.min_sizes(first, second);
        self
    }

    pub fn max_first(mut self, max: i32) -> Self {
        self.layout = self.layout.max_first(max);
        self
    }

    pub fn max_second(mut self, max: i32) -> Self {
        self.layout = self.layout.max_second(max);
        self
    }

    /// Border style; [`BorderKind::None`] suppresses the border so an
    /// enclosing split can join this one's splitter to its own lines.
    pub fn border(mut self, kind: BorderKind) -> Self {
        self.set_border(kind);
        self
    }

    /// Called with the final ratio when a drag ends.
    pub fn on_resize(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_resize = Some(Box::new(callback));
        self
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn set_ratio(&mut self, ratio: f32) {
        self.layout.set_ratio(ratio);
    }

    fn set_border(&mut self, kind: BorderKind) {
        self.border = kind;
        self.layout.border = kind.is_visible();
    }

    fn chars(&self) -> BorderChars {
        self.border.chars().unwrap_or(BorderChars::LIGHT)
    }

    /// Which of the node's children fill the first and second pane.
    fn pane_nodes(&self, children: &[NodeId]) -> (Option<NodeId>, Option<NodeId>) {
        let mut iter = children.iter().copied();
        let first = if self.has_first { iter.next() } else { None };
        let second = if self.has_second { iter.next() } else { None };
        (first, second)
    }

    fn handle_mouse(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        let InputEvent::Mouse(m) = &event.input else {
            return;
        };
        match m.action {
            MouseAction::Press if m.button == MouseButton::Left && self.layout.hit_splitter(m.x, m.y) => {
                self.layout.begin_drag();
                ctx.capture_mouse();
            }
            MouseAction::Drag if self.layout.is_dragging() => {
                if self.layout.drag_to(m.x, m.y) {
                    ctx.request_layout();
                    ctx.mark_dirty();
                }
            }
            MouseAction::Release if self.layout.is_dragging() => {
                ctx.release_mouse();
                if let Some(ratio) = self.layout.end_drag() {
                    debug!(node = ?ctx.node(), ratio, "split drag ended");
                    if let Some(callback) = self.on_resize.as_mut() {
                        callback(ratio);
                    }
                }
            }
            _ => return,
        }
        event.stop_propagation();
    }
}

impl Widget for SplitContainer {
    fn widget_type(&self) -> &str {
        "SplitContainer"
    }

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        self.has_first = self.first.is_some();
        self.has_second = self.second.is_some();
        self.first.take().into_iter().chain(self.second.take()).collect()
    }

    fn arrange(&mut self, content: Rect, children: &[LayoutItem]) -> Vec<Rect> {
        self.layout.compute(content);
        let panes: Vec<Rect> = [
            self.has_first.then(|| self.layout.first_rect()),
            self.has_second.then(|| self.layout.second_rect()),
        ]
        .into_iter()
        .flatten()
        .collect();
        (0..children.len())
            .map(|i| panes.get(i).copied().unwrap_or(Rect::new(content.x, content.y, 0, 0)))
            .collect()
    }

    fn render(&self, ctx: &RenderContext<'_>, buf: &mut Buffer) {
        let style = ctx.data().style;
        let chars = self.chars();
        buf.draw_rect(self.layout.outer_rect(), style, self.border);

        let line = self.layout.splitter_rect();
        match self.layout.direction {
            SplitDirection::Horizontal => buf.draw_vline(line.x, line.y, line.height, chars.vertical, style),
            SplitDirection::Vertical => buf.draw_hline(line.x, line.y, line.width, chars.horizontal, style),
        }

        let (first, second) = self.pane_nodes(ctx.children());
        let provider = |node: Option<NodeId>| node.and_then(|n| ctx.widget(n)).and_then(|w| w.border_junction());
        for point in self.layout.junctions(provider(first), provider(second)) {
            buf.set_char(point.x, point.y, point.kind.glyph(&chars), style);
        }
    }

    fn on_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        self.handle_mouse(ctx, event);
    }

    fn apply_style(&mut self, property: &str, value: &StyleValue) -> Result<bool, PropertyError> {
        match property {
            "split-ratio" => self.layout.set_ratio(parse_float(property, value)?),
            "split-direction" => {
                let name = parse_ident(property, value)?;
                self.layout.direction = SplitDirection::parse(&name)
                    .ok_or_else(|| PropertyError::invalid(property, format!("unknown direction {name:?}")))?;
            }
            "border" => {
                let name = parse_ident(property, value)?;
                let kind = BorderKind::parse(&name)
                    .ok_or_else(|| PropertyError::invalid(property, format!("unknown border {name:?}")))?;
                self.set_border(kind);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn border_junction(&self) -> Option<&dyn BorderJunctionProvider> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl BorderJunctionProvider for SplitContainer {
    fn splitter(&self) -> Option<(SplitDirection, i32)> {
        self.layout.splitter()
    }

    fn border_suppressed(&self) -> bool {
        self.layout.border_suppressed()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
