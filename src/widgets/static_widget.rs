//! Static widget: displays fixed text content.

use std::any::Any;

use crate::render::Buffer;
use crate::widget::context::RenderContext;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Static
// ---------------------------------------------------------------------------

/// A widget that displays fixed, non-interactive text.
///
/// Lines are split on `'\n'`, truncated to the content width and limited to
/// the content height. The node's base style is used for the glyphs.
///
/// # Examples
///
/// ```ignore
/// let label = Static::new("Hello, world!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Static {
    content: String,
}

impl Static {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text. The caller marks the node dirty.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Widget for Static {
    fn widget_type(&self) -> &str {
        "Static"
    }

    fn render(&self, ctx: &RenderContext<'_>, buf: &mut Buffer) {
        let area = ctx.content_rect();
        if area.is_empty() {
            return;
        }
        let style = ctx.data().style;
        for (row, line) in self.content.split('\n').take(area.height as usize).enumerate() {
            buf.put_str_truncated(area.x, area.y.saturating_add(row as i32), line, area.width, style);
        }
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
