//! Snapshot rendering helpers.
//!
//! Functions that mount a widget in a throwaway tree, paint it and turn the
//! buffer into plain text suitable for snapshot assertions.

use crate::dom::WidgetTree;
use crate::geometry::Rect;
use crate::render::{Buffer, Color};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget tree rooted at `widget` to plain text.
///
/// Each row becomes one line with trailing spaces trimmed. Lines are
/// separated by `'\n'`; the final line has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use trellis_tui::testing::render_to_string;
/// use trellis_tui::widgets::Static;
///
/// let output = render_to_string(Static::new("Hello"), 20, 1);
/// assert_eq!(output, "Hello");
/// ```
pub fn render_to_string(widget: impl Widget + 'static, width: u16, height: u16) -> String {
    render_to_buffer(widget, width, height).to_text()
}

/// Mount, lay out and paint `widget` into a fresh buffer.
pub fn render_to_buffer(widget: impl Widget + 'static, width: u16, height: u16) -> Buffer {
    let mut tree = WidgetTree::new(Box::new(widget));
    tree.mount();
    tree.layout(Rect::new(0, 0, i32::from(width), i32::from(height)));
    let mut buf = Buffer::new(width, height);
    let area = buf.area();
    tree.render(&mut buf, area);
    buf
}

/// Like [`Buffer::to_text`] but marks every cell with a non-default
/// background as `'#'` when it holds a blank, to make fills visible.
pub fn buffer_to_fill_map(buf: &Buffer) -> String {
    (0..i32::from(buf.height()))
        .map(|y| {
            let row: String = (0..i32::from(buf.width()))
                .map(|x| {
                    let cell = buf.get(x, y);
                    if cell.ch == ' ' && cell.style.bg != Color::Reset { '#' } else { cell.ch }
                })
                .collect();
            row.trim_end_matches(' ').to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Declarations;
    use crate::widgets::{Container, Static};

    #[test]
    fn render_static() {
        assert_eq!(render_to_string(Static::new("Hello"), 20, 1), "Hello");
    }

    #[test]
    fn zero_sized_is_empty() {
        assert_eq!(render_to_string(Static::new("Hello"), 0, 0), "");
    }

    #[test]
    fn fill_map_shows_background() {
        let mut tree = WidgetTree::new(Box::new(Container::row()));
        let root = tree.root();
        let child = tree.add_child(root, Box::new(Static::new("x"))).unwrap();
        tree.apply_css_style(child, &Declarations::new().set("background", "red").set("width", 3))
            .unwrap();
        tree.mount();
        tree.layout(Rect::new(0, 0, 5, 1));
        let mut buf = Buffer::new(5, 1);
        let area = buf.area();
        tree.render(&mut buf, area);
        assert_eq!(buffer_to_fill_map(&buf), "x##");
    }
}
