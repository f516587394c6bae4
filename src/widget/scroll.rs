//! Scroll state and scrollbar geometry.
//!
//! [`ScrollState`] keeps a scroll offset clamped to
//! `[0, content - viewport]` on each axis and re-clamps whenever either size
//! changes. [`ScrollbarState`] turns it into a thumb position and length in
//! cells for a given track.

use crate::geometry::{Offset, Rect, Size};

// ---------------------------------------------------------------------------
// ScrollState
// ---------------------------------------------------------------------------

/// Scroll position of a viewport over larger content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: Offset,
    content: Size,
    viewport: Size,
}

impl ScrollState {
    pub fn new(content: Size, viewport: Size) -> Self {
        Self { offset: Offset::default(), content, viewport }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// `max(0, content - viewport)` per axis.
    pub fn max_scroll(&self) -> Offset {
        Offset::new(
            (self.content.width - self.viewport.width).max(0),
            (self.content.height - self.viewport.height).max(0),
        )
    }

    /// Scroll to an absolute position, clamped.
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        let max = self.max_scroll();
        self.offset = Offset::new(x.max(0).min(max.x), y.max(0).min(max.y));
    }

    /// Scroll by a delta, clamped.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll_to(self.offset.x.saturating_add(dx), self.offset.y.saturating_add(dy));
    }

    pub fn is_scrollable_y(&self) -> bool {
        self.content.height > self.viewport.height
    }

    pub fn is_scrollable_x(&self) -> bool {
        self.content.width > self.viewport.width
    }

    /// The visible part of the content, in content coordinates.
    pub fn visible(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.viewport.width, self.viewport.height)
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
        self.scroll_to(self.offset.x, self.offset.y);
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.scroll_to(self.offset.x, self.offset.y);
    }
}

// ---------------------------------------------------------------------------
// ScrollbarState
// ---------------------------------------------------------------------------

/// Scrollbar thumb as fractions of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarState {
    /// 0.0 at the start of the track, 1.0 at the end.
    pub position: f32,
    /// Thumb length relative to the track, `viewport / content`.
    pub size: f32,
}

impl ScrollbarState {
    /// The vertical scrollbar for `state`.
    pub fn vertical(state: &ScrollState) -> Self {
        Self::compute(state.content.height, state.viewport.height, state.offset.y)
    }

    /// The horizontal scrollbar for `state`.
    pub fn horizontal(state: &ScrollState) -> Self {
        Self::compute(state.content.width, state.viewport.width, state.offset.x)
    }

    fn compute(content: i32, viewport: i32, offset: i32) -> Self {
        if content <= 0 || viewport <= 0 {
            return Self { position: 0.0, size: 1.0 };
        }
        let size = (viewport as f32 / content as f32).clamp(0.0, 1.0);
        let max = (content - viewport).max(0);
        let position = if max > 0 { offset as f32 / max as f32 } else { 0.0 };
        Self { position: position.clamp(0.0, 1.0), size }
    }

    /// Thumb `(start, length)` in cells along a track of `track` cells.
    /// The thumb is at least one cell long when the track is non-empty.
    pub fn thumb(&self, track: i32) -> (i32, i32) {
        if track <= 0 {
            return (0, 0);
        }
        let len = ((self.size * track as f32).round() as i32).clamp(1, track);
        let start = ((track - len) as f32 * self.position).round() as i32;
        (start.clamp(0, track - len), len)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
