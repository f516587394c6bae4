//! Core geometry types: Offset, Size, Rect, Spacing.
//!
//! These are the foundational coordinate types used throughout trellis-tui for
//! positioning, sizing, and spacing widgets in the terminal grid. All geometry is
//! integer character cells; every operation is total and clamps rather than fails.

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D displacement or position delta in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x.saturating_add(rhs.x), y: self.y.saturating_add(rhs.y) }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x.saturating_sub(rhs.x), y: self.y.saturating_sub(rhs.y) }
    }
}

impl Neg for Offset {
    type Output = Offset;
    #[inline]
    fn neg(self) -> Offset {
        Offset { x: self.x.saturating_neg(), y: self.y.saturating_neg() }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0, y: 0, width: self.width, height: self.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in terminal cells.
///
/// Width and height may be negative; such a rect is empty, but `right()` and
/// `bottom()` are still computed as `x + width` and `y + height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether this rect covers no cells (`width <= 0 || height <= 0`).
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The right edge (exclusive): `x + width`, saturating at the `i32` range.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge (exclusive): `y + height`, saturating at the `i32` range.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point lies inside `[x, right) x [y, bottom)`.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping rect, or `None` if the overlap is empty.
    ///
    /// Rects that only touch along an edge do not overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        let r = Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1));
        if r.is_empty() {
            None
        } else {
            Some(r)
        }
    }

    /// The smallest rect containing both corners of `self` and `other`.
    ///
    /// Empty operands still contribute their position.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Shrink by the given amounts on each side. Width and height clamp at zero.
    #[inline]
    pub fn inset(self, top: i32, right: i32, bottom: i32, left: i32) -> Rect {
        Rect {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left).saturating_sub(right).max(0),
            height: self.height.saturating_sub(top).saturating_sub(bottom).max(0),
        }
    }

    /// Shrink by a [`Spacing`] (padding).
    #[inline]
    pub fn shrink(self, spacing: Spacing) -> Rect {
        self.inset(spacing.top, spacing.right, spacing.bottom, spacing.left)
    }

    /// Expand outward by a [`Spacing`] (margin).
    #[inline]
    pub const fn grow(self, spacing: Spacing) -> Rect {
        Rect {
            x: self.x.saturating_sub(spacing.left),
            y: self.y.saturating_sub(spacing.top),
            width: self.width.saturating_add(spacing.left).saturating_add(spacing.right),
            height: self.height.saturating_add(spacing.top).saturating_add(spacing.bottom),
        }
    }

    /// Translate the rect by an [`Offset`].
    #[inline]
    pub const fn translate(self, offset: Offset) -> Rect {
        Rect {
            x: self.x.saturating_add(offset.x),
            y: self.y.saturating_add(offset.y),
            width: self.width,
            height: self.height,
        }
    }

    /// Split into `(left, right)` at `offset` columns from the left edge.
    ///
    /// The offset is clamped to `[0, width]`.
    pub fn split_vertical(self, offset: i32) -> (Rect, Rect) {
        let at = offset.clamp(0, self.width.max(0));
        (
            Rect::new(self.x, self.y, at, self.height),
            Rect::new(self.x.saturating_add(at), self.y, self.width.max(0) - at, self.height),
        )
    }

    /// Split into `(top, bottom)` at `offset` rows from the top edge.
    ///
    /// The offset is clamped to `[0, height]`.
    pub fn split_horizontal(self, offset: i32) -> (Rect, Rect) {
        let at = offset.clamp(0, self.height.max(0));
        (
            Rect::new(self.x, self.y, self.width, at),
            Rect::new(self.x, self.y.saturating_add(at), self.width, self.height.max(0) - at),
        )
    }

    /// Iterate every cell position in row-major order.
    ///
    /// Yields nothing for an empty rect.
    pub fn cells(self) -> Cells {
        Cells { rect: self, x: self.x, y: self.y }
    }
}

/// Row-major iterator over the cells of a [`Rect`], created by [`Rect::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    rect: Rect,
    x: i32,
    y: i32,
}

impl Iterator for Cells {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.rect.is_empty() || self.y >= self.rect.bottom() {
            return None;
        }
        let item = (self.x, self.y);
        self.x += 1;
        if self.x >= self.rect.right() {
            self.x = self.rect.x;
            self.y += 1;
        }
        Some(item)
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Symmetric spacing: `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl Add for Spacing {
    type Output = Spacing;
    #[inline]
    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top.saturating_add(rhs.top),
            right: self.right.saturating_add(rhs.right),
            bottom: self.bottom.saturating_add(rhs.bottom),
            left: self.left.saturating_add(rhs.left),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
