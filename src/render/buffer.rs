//! The render buffer: a 2-D grid of styled cells.
//!
//! Every drawing primitive is total. Reads outside the grid return
//! [`Cell::EMPTY`], writes outside the grid (or outside the active clip) are
//! dropped, so widget render code never has to bounds-check.
//!
//! `diff` compares two frames and produces only the [`CellUpdate`]s needed to
//! transition between them; a terminal driver emits those.

use crate::geometry::Rect;

use super::border::BorderKind;
use super::cell::{Cell, Style};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// A `width x height` grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    /// Scissor stack. Each entry is already intersected with its parent.
    clips: Vec<Rect>,
}

impl Buffer {
    /// Create a blank buffer.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
            clips: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    // -----------------------------------------------------------------------
    // Clipping
    // -----------------------------------------------------------------------

    /// Push a clip rect. The effective clip is the intersection with the
    /// current one, so nested clips only ever narrow.
    pub fn push_clip(&mut self, rect: Rect) {
        let next = self
            .clip()
            .intersect(rect)
            .unwrap_or(Rect::new(rect.x, rect.y, 0, 0));
        self.clips.push(next);
    }

    /// Pop the most recent clip. Popping an empty stack is a no-op.
    pub fn pop_clip(&mut self) {
        self.clips.pop();
    }

    /// The active clip rect (the whole buffer when the stack is empty).
    pub fn clip(&self) -> Rect {
        self.clips.last().copied().unwrap_or_else(|| self.area())
    }

    // -----------------------------------------------------------------------
    // Point access
    // -----------------------------------------------------------------------

    /// The cell at `(x, y)`, or [`Cell::EMPTY`] out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map_or(Cell::EMPTY, |i| self.cells[i])
    }

    /// Write a cell. Out-of-bounds or clipped writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.clip().contains(x, y) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Write a single character with a style.
    pub fn set_char(&mut self, x: i32, y: i32, ch: char, style: Style) {
        self.set(x, y, Cell::new(ch, style));
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Write `text` starting at `(x, y)`, one char per cell. Returns the
    /// number of columns advanced.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            if ch == '\n' {
                break;
            }
            self.set(col, y, Cell::new(ch, style));
            col = col.saturating_add(1);
        }
        col.saturating_sub(x)
    }

    /// Write at most `max_width` chars of `text` starting at `(x, y)`.
    pub fn put_str_truncated(&mut self, x: i32, y: i32, text: &str, max_width: i32, style: Style) {
        for (i, ch) in text.chars().take(max_width.max(0) as usize).enumerate() {
            self.set(x.saturating_add(i as i32), y, Cell::new(ch, style));
        }
    }

    /// Draw a horizontal run of `len` copies of `ch`.
    pub fn draw_hline(&mut self, x: i32, y: i32, len: i32, ch: char, style: Style) {
        for i in 0..len.max(0) {
            self.set(x.saturating_add(i), y, Cell::new(ch, style));
        }
    }

    /// Draw a vertical run of `len` copies of `ch`.
    pub fn draw_vline(&mut self, x: i32, y: i32, len: i32, ch: char, style: Style) {
        for i in 0..len.max(0) {
            self.set(x, y.saturating_add(i), Cell::new(ch, style));
        }
    }

    /// Fill every cell of `rect` with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for (x, y) in rect.cells() {
            self.set(x, y, cell);
        }
    }

    /// Reset every cell to [`Cell::EMPTY`], ignoring the clip.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Draw a box outline.
    ///
    /// Edges are drawn first, then the corners in the order top-left,
    /// top-right, bottom-left, bottom-right. When a box is one cell wide or
    /// tall the corners overlap and the later corner wins, so a 1x1 box is
    /// a single bottom-right glyph.
    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: Style, kind: BorderKind) {
        let Some(chars) = kind.chars() else {
            return;
        };
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.draw_hline(x.saturating_add(1), y, w - 2, chars.horizontal, style);
        self.draw_hline(x.saturating_add(1), bottom, w - 2, chars.horizontal, style);
        self.draw_vline(x, y.saturating_add(1), h - 2, chars.vertical, style);
        self.draw_vline(right, y.saturating_add(1), h - 2, chars.vertical, style);

        self.set_char(x, y, chars.top_left, style);
        self.set_char(right, y, chars.top_right, style);
        self.set_char(x, bottom, chars.bottom_left, style);
        self.set_char(right, bottom, chars.bottom_right, style);
    }

    /// Draw a box around `rect`.
    pub fn draw_rect(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.draw_box(rect.x, rect.y, rect.width, rect.height, style, kind);
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    /// Reallocate to `width x height`, keeping cells valid in both sizes.
    ///
    /// Resizing to the current dimensions leaves the buffer untouched.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        let mut cells = vec![Cell::EMPTY; width as usize * height as usize];
        let keep_w = self.width.min(width) as usize;
        let keep_h = self.height.min(height) as usize;
        for row in 0..keep_h {
            let src = row * self.width as usize;
            let dst = row * width as usize;
            cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
        self.clips.clear();
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Each row as a full-width string.
    pub fn to_grid(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }

    /// The buffer as text: rows joined by `\n`, trailing spaces trimmed.
    pub fn to_text(&self) -> String {
        self.to_grid()
            .iter()
            .map(|row| row.trim_end_matches(' '))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The cells of `self` that differ from `previous`.
    ///
    /// Cells outside the previous frame's bounds are always reported.
    pub fn diff(&self, previous: &Buffer) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let cell = self.get(x, y);
                let stale = x >= previous.width as i32
                    || y >= previous.height as i32
                    || previous.get(x, y) != cell;
                if stale {
                    updates.push(CellUpdate { x: x as u16, y: y as u16, cell });
                }
            }
        }
        updates
    }
}

// ===========================================================================
// Tests
// ===========================================================================
