//! Panel widget: a bordered, vertically scrolling viewport.
//!
//! Children are laid out in a column over a virtual area `content_height`
//! rows tall, shifted up by the scroll offset, and clipped to the inner
//! area. When the content overflows, a scrollbar thumb is drawn on the
//! right edge.

use std::any::Any;

use crate::css::properties::{parse_ident, parse_length, PropertyError};
use crate::css::StyleValue;
use crate::event::{Event, InputEvent, Key, MouseAction, Phase};
use crate::geometry::{Rect, Size};
use crate::layout::{Flex, LayoutItem};
use crate::render::{BorderChars, BorderKind, Buffer};
use crate::widget::context::{RenderContext, WidgetContext};
use crate::widget::scroll::{ScrollState, ScrollbarState};
use crate::widget::traits::Widget;

/// Rows moved per wheel tick.
const WHEEL_STEP: i32 = 3;

pub struct Panel {
    children: Vec<Box<dyn Widget>>,
    border: BorderKind,
    title: Option<String>,
    content_height: Option<i32>,
    scroll: ScrollState,
    focusable: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            border: BorderKind::Light,
            title: None,
            content_height: None,
            scroll: ScrollState::default(),
            focusable: false,
        }
    }

    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
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

    /// Height of the scrollable content. Defaults to the viewport height.
    pub fn content_height(mut self, rows: i32) -> Self {
        self.set_content_height(rows);
        self
    }

    /// Accept focus so arrow and page keys scroll the panel.
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    pub fn set_content_height(&mut self, rows: i32) {
        self.content_height = Some(rows.max(0));
        let width = self.scroll.content_size().width;
        self.scroll.set_content_size(Size::new(width, rows.max(0)));
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll.offset().y
    }

    /// Scroll to row `y`, clamped to `[0, content_height - viewport]`.
    pub fn set_scroll_y(&mut self, y: i32) {
        self.scroll.scroll_to(0, y);
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn inner(&self, content: Rect) -> Rect {
        if self.border.is_visible() {
            content.inset(1, 1, 1, 1)
        } else {
            content
        }
    }

    fn scroll_by(&mut self, ctx: &mut WidgetContext<'_>, dy: i32) -> bool {
        let before = self.scroll_y();
        self.scroll.scroll_by(0, dy);
        let moved = self.scroll_y() != before;
        if moved {
            ctx.request_layout();
            ctx.mark_dirty();
        }
        moved
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &str {
        "Panel"
    }

    fn can_focus(&self) -> bool {
        self.focusable
    }

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        std::mem::take(&mut self.children)
    }

    fn arrange(&mut self, content: Rect, children: &[LayoutItem]) -> Vec<Rect> {
        let inner = self.inner(content);
        let height = self.content_height.unwrap_or(inner.height).max(0);
        self.scroll.set_viewport_size(inner.size());
        self.scroll.set_content_size(Size::new(inner.width, height));
        let virtual_area = Rect::new(inner.x, inner.y.saturating_sub(self.scroll_y()), inner.width, height);
        Flex::column().arrange(virtual_area, children)
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

        if !self.scroll.is_scrollable_y() {
            return;
        }
        let inner = self.inner(area);
        let column = if self.border.is_visible() { area.right() } else { inner.right() }.saturating_sub(1);
        let chars = self.border.chars().unwrap_or(BorderChars::LIGHT);
        let (start, len) = ScrollbarState::vertical(&self.scroll).thumb(inner.height);
        buf.draw_vline(column, inner.y, inner.height, chars.vertical, style);
        buf.draw_vline(column, inner.y.saturating_add(start), len, '█', style);
    }

    fn on_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        let viewport = self.scroll.viewport_size().height.max(1);
        let delta = match &event.input {
            InputEvent::Mouse(m) => match m.action {
                MouseAction::ScrollUp => -WHEEL_STEP,
                MouseAction::ScrollDown => WHEEL_STEP,
                _ => return,
            },
            InputEvent::Key(k) if event.phase == Phase::Target => match k.code {
                Key::Up => -1,
                Key::Down => 1,
                Key::PageUp => -viewport,
                Key::PageDown => viewport,
                Key::Home => -self.scroll_y(),
                Key::End => self.scroll.max_scroll().y - self.scroll_y(),
                _ => return,
            },
            _ => return,
        };
        if self.scroll_by(ctx, delta) {
            event.stop_propagation();
        }
    }

    fn apply_style(&mut self, property: &str, value: &StyleValue) -> Result<bool, PropertyError> {
        match property {
            "content-height" => self.set_content_height(parse_length(property, value)?),
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
