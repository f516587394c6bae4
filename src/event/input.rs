//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`], [`MouseEvent`] and supporting types.
//! Crossterm events are converted via `From` impls so the rest of the
//! runtime never depends on crossterm directly.

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// A key the terminal reported that has no mapping here.
    Unknown,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

bitflags! {
    /// Modifier key bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers::empty();
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event: key code, the printable character it produces (if
/// any), and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub ch: Option<char>,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event. `ch` is derived from `code`: a `Char` key without
    /// Ctrl or Alt is printable.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        let ch = match code {
            Key::Char(c) if !modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) => Some(c),
            _ => None,
        };
        Self { code, ch, modifiers }
    }

    /// A key with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Ctrl + `c`.
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::CTRL)
    }
}

// ---------------------------------------------------------------------------
// MouseButton / MouseAction / MouseEvent
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    #[default]
    None,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Press,
    Release,
    Drag,
    Move,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

impl MouseAction {
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            MouseAction::ScrollUp
                | MouseAction::ScrollDown
                | MouseAction::ScrollLeft
                | MouseAction::ScrollRight
        )
    }
}

/// A mouse event in absolute cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    pub action: MouseAction,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(x: i32, y: i32, button: MouseButton, action: MouseAction) -> Self {
        Self { x, y, button, action, modifiers: Modifiers::NONE }
    }

    pub fn press(x: i32, y: i32) -> Self {
        Self::new(x, y, MouseButton::Left, MouseAction::Press)
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::new(x, y, MouseButton::Left, MouseAction::Release)
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self::new(x, y, MouseButton::Left, MouseAction::Drag)
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(x, y, MouseButton::None, MouseAction::Move)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level decoded input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    Paste(String),
    FocusGained,
    FocusLost,
}

impl InputEvent {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Key(_) => "key",
            InputEvent::Mouse(_) => "mouse",
            InputEvent::Resize { .. } => "resize",
            InputEvent::Paste(_) => "paste",
            InputEvent::FocusGained => "focus-gained",
            InputEvent::FocusLost => "focus-lost",
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        InputEvent::Key(key)
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(mouse: MouseEvent) -> Self {
        InputEvent::Mouse(mouse)
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;
    let mut out = Modifiers::NONE;
    if m.contains(KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if m.contains(KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyCode;
        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Insert => Key::Insert,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        };
        KeyEvent::new(code, convert_modifiers(ct.modifiers))
    }
}

fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseButton {
    match b {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;
        let (button, action) = match me.kind {
            MouseEventKind::Down(b) => (convert_mouse_button(b), MouseAction::Press),
            MouseEventKind::Up(b) => (convert_mouse_button(b), MouseAction::Release),
            MouseEventKind::Drag(b) => (convert_mouse_button(b), MouseAction::Drag),
            MouseEventKind::Moved => (MouseButton::None, MouseAction::Move),
            MouseEventKind::ScrollUp => (MouseButton::None, MouseAction::ScrollUp),
            MouseEventKind::ScrollDown => (MouseButton::None, MouseAction::ScrollDown),
            MouseEventKind::ScrollLeft => (MouseButton::None, MouseAction::ScrollLeft),
            MouseEventKind::ScrollRight => (MouseButton::None, MouseAction::ScrollRight),
        };
        MouseEvent {
            x: me.column as i32,
            y: me.row as i32,
            button,
            action,
            modifiers: convert_modifiers(me.modifiers),
        }
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Key(ke) => InputEvent::Key(KeyEvent::from(ke)),
            crossterm::event::Event::Mouse(me) => InputEvent::Mouse(MouseEvent::from(me)),
            crossterm::event::Event::Resize(width, height) => InputEvent::Resize { width, height },
            crossterm::event::Event::FocusGained => InputEvent::FocusGained,
            crossterm::event::Event::FocusLost => InputEvent::FocusLost,
            crossterm::event::Event::Paste(s) => InputEvent::Paste(s),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(Modifiers::NONE.is_empty());
    }

    // ── KeyEvent ─────────────────────────────────────────────────────

    #[test]
    fn printable_char_is_derived() {
        assert_eq!(KeyEvent::plain(Key::Char('a')).ch, Some('a'));
        assert_eq!(KeyEvent::new(Key::Char('A'), Modifiers::SHIFT).ch, Some('A'));
        assert_eq!(KeyEvent::ctrl('c').ch, None);
        assert_eq!(KeyEvent::plain(Key::Enter).ch, None);
    }

    // ── From<crossterm> ──────────────────────────────────────────────

    #[test]
    fn from_crossterm_key() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('c'),
            crossterm::event::KeyModifiers::CONTROL,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::Char('c'));
        assert!(ke.modifiers.contains(Modifiers::CTRL));
        assert_eq!(ke.ch, None);
    }

    #[test]
    fn from_crossterm_unmapped_key() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::CapsLock,
            crossterm::event::KeyModifiers::NONE,
        );
        assert_eq!(KeyEvent::from(ct).code, Key::Unknown);
    }

    #[test]
    fn from_crossterm_mouse_down() {
        let ct = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::SHIFT,
        });
        assert_eq!(
            InputEvent::from(ct),
            InputEvent::Mouse(MouseEvent {
                x: 10,
                y: 5,
                button: MouseButton::Left,
                action: MouseAction::Press,
                modifiers: Modifiers::SHIFT,
            })
        );
    }

    #[test]
    fn from_crossterm_scroll() {
        let ct = crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        let me = MouseEvent::from(ct);
        assert_eq!(me.action, MouseAction::ScrollDown);
        assert!(me.action.is_scroll());
    }

    #[test]
    fn from_crossterm_resize_and_paste() {
        assert_eq!(
            InputEvent::from(crossterm::event::Event::Resize(120, 40)),
            InputEvent::Resize { width: 120, height: 40 }
        );
        assert_eq!(
            InputEvent::from(crossterm::event::Event::Paste("hi".into())),
            InputEvent::Paste("hi".into())
        );
    }

    #[test]
    fn names() {
        assert_eq!(InputEvent::FocusLost.name(), "focus-lost");
        assert_eq!(InputEvent::from(MouseEvent::press(0, 0)).name(), "mouse");
    }
}
