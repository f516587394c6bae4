//! Cell: one character position in the render buffer, with its style.
//!
//! [`Style`] is a small `Copy` value: foreground and background [`Color`]s plus
//! an [`Attrs`] bitset. [`Cell::EMPTY`] is the canonical blank.

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color name (`red`, `light-blue`, `default`) or `#rrggbb` / `#rgb` hex.
    pub fn parse(input: &str) -> Option<Color> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let color = match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "default" | "reset" => Color::Reset,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "dark-gray" | "dark-grey" => Color::DarkGray,
            "light-red" => Color::LightRed,
            "light-green" => Color::LightGreen,
            "light-yellow" => Color::LightYellow,
            "light-blue" => Color::LightBlue,
            "light-magenta" => Color::LightMagenta,
            "light-cyan" => Color::LightCyan,
            "white" => Color::White,
            _ => return None,
        };
        Some(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expand = |c: u8| c * 17;
    match hex.len() {
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            Some(Color::Rgb(
                expand(((v >> 8) & 0xf) as u8),
                expand(((v >> 4) & 0xf) as u8),
                expand((v & 0xf) as u8),
            ))
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Attrs
// ---------------------------------------------------------------------------

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
        const REVERSE = 1 << 5;
    }
}

impl Attrs {
    /// Look up a single attribute by its style name (`bold`, `underline`, ...).
    pub fn from_style_name(name: &str) -> Option<Attrs> {
        match name {
            "bold" => Some(Attrs::BOLD),
            "dim" => Some(Attrs::DIM),
            "italic" => Some(Attrs::ITALIC),
            "underline" => Some(Attrs::UNDERLINE),
            "strike" | "strikethrough" => Some(Attrs::STRIKETHROUGH),
            "reverse" => Some(Attrs::REVERSE),
            "none" => Some(Attrs::empty()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attrs,
}

impl Style {
    /// The default style: terminal colors, no attributes.
    pub const DEFAULT: Style = Style { fg: Color::Reset, bg: Color::Reset, attrs: Attrs::empty() };

    /// Create a new default style.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Add attribute flags (builder).
    pub fn add(mut self, attrs: Attrs) -> Self {
        self.attrs |= attrs;
        self
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// The canonical blank cell: a space in the default style.
    pub const EMPTY: Cell = Cell { ch: ' ', style: Style::DEFAULT };

    /// Create a new styled cell.
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with the given style.
    pub const fn blank(style: Style) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_default() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert_eq!(Cell::EMPTY.ch, ' ');
        assert_eq!(Cell::EMPTY.style, Style::default());
    }

    #[test]
    fn style_builder() {
        let s = Style::new().fg(Color::Red).bg(Color::Blue).add(Attrs::BOLD | Attrs::UNDERLINE);
        assert_eq!(s.fg, Color::Red);
        assert_eq!(s.bg, Color::Blue);
        assert!(s.attrs.contains(Attrs::BOLD));
        assert!(s.attrs.contains(Attrs::UNDERLINE));
        assert!(!s.attrs.contains(Attrs::ITALIC));
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(Color::parse("red"), Some(Color::Red));
        assert_eq!(Color::parse("Light_Blue"), Some(Color::LightBlue));
        assert_eq!(Color::parse("default"), Some(Color::Reset));
        assert_eq!(Color::parse("chartreuse"), None);
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(Color::parse("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(Color::parse("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("#gggggg"), None);
    }

    #[test]
    fn attrs_from_style_name() {
        assert_eq!(Attrs::from_style_name("bold"), Some(Attrs::BOLD));
        assert_eq!(Attrs::from_style_name("strike"), Some(Attrs::STRIKETHROUGH));
        assert_eq!(Attrs::from_style_name("blink"), None);
    }
}
