//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) and provides methods to
//! simulate user input (key presses, clicks, drags, wheel, resize, paste),
//! render frames and read them back as text for snapshot testing.

use crate::app::{App, AppConfig};
use crate::dom::{NodeId, WidgetTree};
use crate::event::{
    Event, InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent,
};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// use trellis_tui::testing::Pilot;
/// use trellis_tui::widgets::Static;
///
/// let mut pilot = Pilot::new(Static::new("hi"), 10, 1);
/// assert_eq!(pilot.text(), "hi");
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Mount `root` in an app of the given size.
    pub fn new(root: impl Widget + 'static, width: u16, height: u16) -> Self {
        Self::with_config(root, AppConfig::new().with_size(width, height))
    }

    pub fn with_config(root: impl Widget + 'static, config: AppConfig) -> Self {
        Self { app: App::new(root, config) }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Send any input event.
    pub fn send(&mut self, input: InputEvent) -> Event {
        self.app.handle_input(input)
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> Event {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> Event {
        self.send(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Left-button press and release at `(x, y)`.
    pub fn click(&mut self, x: i32, y: i32) {
        self.send(InputEvent::Mouse(MouseEvent::press(x, y)));
        self.send(InputEvent::Mouse(MouseEvent::release(x, y)));
    }

    /// Press at `from`, drag through to `to`, release at `to`.
    pub fn drag(&mut self, from: (i32, i32), to: (i32, i32)) {
        self.send(InputEvent::Mouse(MouseEvent::press(from.0, from.1)));
        self.send(InputEvent::Mouse(MouseEvent::drag(to.0, to.1)));
        self.send(InputEvent::Mouse(MouseEvent::release(to.0, to.1)));
    }

    pub fn hover(&mut self, x: i32, y: i32) {
        self.send(InputEvent::Mouse(MouseEvent::moved(x, y)));
    }

    /// Wheel at `(x, y)`; positive `ticks` scroll down.
    pub fn scroll(&mut self, x: i32, y: i32, ticks: i32) {
        let action = if ticks < 0 { MouseAction::ScrollUp } else { MouseAction::ScrollDown };
        for _ in 0..ticks.unsigned_abs() {
            self.send(InputEvent::Mouse(MouseEvent::new(x, y, MouseButton::None, action)));
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.send(InputEvent::Resize { width, height });
    }

    pub fn paste(&mut self, text: &str) -> Event {
        self.send(InputEvent::Paste(text.to_owned()))
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn tree(&self) -> &WidgetTree {
        self.app.tree()
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        self.app.tree_mut()
    }

    /// First node matching `selector`.
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.app.tree().query_one(selector)
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.app.tree().focused()
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    // ── Render helpers ───────────────────────────────────────────────

    /// Render the current frame (if dirty) and return it as text.
    pub fn text(&mut self) -> String {
        self.app.render();
        self.app.buffer().to_text()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Container, Panel, Static};

    #[test]
    fn renders_initial_frame() {
        let mut pilot = Pilot::new(Static::new("hello"), 10, 1);
        assert_eq!(pilot.text(), "hello");
        assert_eq!(pilot.app().size(), (10, 1));
    }

    #[test]
    fn resize_reflows() {
        let mut pilot = Pilot::new(
            Container::row().with_child(Static::new("ab")).with_child(Static::new("cd")),
            4,
            1,
        );
        assert_eq!(pilot.text(), "abcd");
        pilot.resize(6, 1);
        assert_eq!(pilot.text(), "ab cd");
    }

    #[test]
    fn wheel_scrolls_panel() {
        let mut pilot = Pilot::new(Panel::new().content_height(20), 10, 6);
        pilot.scroll(3, 3, 2);
        let root = pilot.tree().root();
        assert_eq!(pilot.tree().widget_as::<Panel>(root).unwrap().scroll_y(), 6);
        pilot.scroll(3, 3, -1);
        assert_eq!(pilot.tree().widget_as::<Panel>(root).unwrap().scroll_y(), 3);
    }

    #[test]
    fn ctrl_c_stops_running() {
        let mut pilot = Pilot::new(Static::new(""), 1, 1);
        pilot.type_text("abc");
        assert!(pilot.is_running());
        pilot.press_key_with(Key::Char('c'), Modifiers::CTRL);
        assert!(!pilot.is_running());
    }
}
