//! Box-drawing character sets.
//!
//! Each [`BorderKind`] maps to a [`BorderChars`] table with corners, edges,
//! T-junctions and a cross, so split containers can join their divider lines
//! to an enclosing border.

/// Border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderKind {
    #[default]
    None,
    Light,
    Heavy,
    Double,
    Round,
    Ascii,
}

impl BorderKind {
    /// Parse a border kind name as used in style declarations.
    pub fn parse(name: &str) -> Option<BorderKind> {
        match name {
            "none" | "hidden" => Some(BorderKind::None),
            "light" | "thin" | "solid" => Some(BorderKind::Light),
            "heavy" | "thick" => Some(BorderKind::Heavy),
            "double" => Some(BorderKind::Double),
            "round" | "rounded" => Some(BorderKind::Round),
            "ascii" => Some(BorderKind::Ascii),
            _ => None,
        }
    }

    /// The character table for this kind, or `None` for [`BorderKind::None`].
    pub const fn chars(self) -> Option<BorderChars> {
        match self {
            BorderKind::None => None,
            BorderKind::Light => Some(BorderChars::LIGHT),
            BorderKind::Heavy => Some(BorderChars::HEAVY),
            BorderKind::Double => Some(BorderChars::DOUBLE),
            BorderKind::Round => Some(BorderChars::ROUND),
            BorderKind::Ascii => Some(BorderChars::ASCII),
        }
    }

    /// Whether this kind draws anything.
    pub const fn is_visible(self) -> bool {
        !matches!(self, BorderKind::None)
    }
}

/// Glyphs for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// `┬`: a vertical line meeting a horizontal line from below.
    pub tee_down: char,
    /// `┴`: a vertical line meeting a horizontal line from above.
    pub tee_up: char,
    /// `├`: a horizontal line leaving a vertical line to the right.
    pub tee_right: char,
    /// `┤`: a horizontal line leaving a vertical line to the left.
    pub tee_left: char,
    pub cross: char,
}

impl BorderChars {
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        tee_down: '┬',
        tee_up: '┴',
        tee_right: '├',
        tee_left: '┤',
        cross: '┼',
    };

    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        tee_down: '┳',
        tee_up: '┻',
        tee_right: '┣',
        tee_left: '┫',
        cross: '╋',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        tee_down: '╦',
        tee_up: '╩',
        tee_right: '╠',
        tee_left: '╣',
        cross: '╬',
    };

    pub const ROUND: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::LIGHT
    };

    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        tee_down: '+',
        tee_up: '+',
        tee_right: '+',
        tee_left: '+',
        cross: '+',
    };
}
