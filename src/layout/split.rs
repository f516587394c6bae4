//! Two-pane split geometry with a draggable one-cell splitter.
//!
//! [`SplitLayout`] is the state behind a split container: direction, ratio,
//! per-pane min/max sizes, the drag flag and the last computed pane rects.
//! It also works out where an orthogonal nested split's divider meets this
//! one's border or splitter so the renderer can draw T-junctions there.

use crate::geometry::Rect;
use crate::render::BorderChars;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// How the two panes are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Panes side by side; the splitter is a vertical line.
    #[default]
    Horizontal,
    /// Panes stacked; the splitter is a horizontal line.
    Vertical,
}

impl SplitDirection {
    pub fn orthogonal(self) -> Self {
        match self {
            SplitDirection::Horizontal => SplitDirection::Vertical,
            SplitDirection::Vertical => SplitDirection::Horizontal,
        }
    }

    pub fn parse(name: &str) -> Option<SplitDirection> {
        match name {
            "horizontal" | "row" => Some(SplitDirection::Horizontal),
            "vertical" | "column" => Some(SplitDirection::Vertical),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// BorderJunctionProvider
// ---------------------------------------------------------------------------

/// A container whose divider line can join an enclosing container's lines.
pub trait BorderJunctionProvider {
    /// Direction and absolute coordinate of the divider line: a column for
    /// [`SplitDirection::Horizontal`], a row for [`SplitDirection::Vertical`].
    fn splitter(&self) -> Option<(SplitDirection, i32)>;

    /// Whether this container draws no border of its own.
    fn border_suppressed(&self) -> bool;
}

/// Which junction glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunctionKind {
    /// `┬`
    TeeDown,
    /// `┴`
    TeeUp,
    /// `├`
    TeeRight,
    /// `┤`
    TeeLeft,
    /// `┼`
    Cross,
}

impl JunctionKind {
    pub fn glyph(self, chars: &BorderChars) -> char {
        match self {
            JunctionKind::TeeDown => chars.tee_down,
            JunctionKind::TeeUp => chars.tee_up,
            JunctionKind::TeeRight => chars.tee_right,
            JunctionKind::TeeLeft => chars.tee_left,
            JunctionKind::Cross => chars.cross,
        }
    }

    fn merge(self, other: JunctionKind) -> JunctionKind {
        if self == other { self } else { JunctionKind::Cross }
    }
}

/// A junction glyph at an absolute cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionPoint {
    pub x: i32,
    pub y: i32,
    pub kind: JunctionKind,
}

// ---------------------------------------------------------------------------
// SplitLayout
// ---------------------------------------------------------------------------

/// Geometry and drag state of a two-pane split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLayout {
    pub direction: SplitDirection,
    /// Share of the space given to the first pane, `0.0..=1.0`.
    pub ratio: f32,
    pub min_first: i32,
    pub min_second: i32,
    pub max_first: Option<i32>,
    pub max_second: Option<i32>,
    /// Draw a box around the whole container.
    pub border: bool,
    dragging: bool,
    outer: Rect,
    first: Rect,
    second: Rect,
    splitter: i32,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new(SplitDirection::Horizontal)
    }
}

impl SplitLayout {
    pub fn new(direction: SplitDirection) -> Self {
        Self {
            direction,
            ratio: 0.5,
            min_first: 1,
            min_second: 1,
            max_first: None,
            max_second: None,
            border: true,
            dragging: false,
            outer: Rect::EMPTY,
            first: Rect::EMPTY,
            second: Rect::EMPTY,
            splitter: 0,
        }
    }

    pub fn ratio(mut self, ratio: f32) -> Self {
        self.set_ratio(ratio);
        self
    }

    pub fn min_sizes(mut self, first: i32, second: i32) -> Self {
        self.min_first = first.max(0);
        self.min_second = second.max(0);
        self
    }

    pub fn max_first(mut self, max: i32) -> Self {
        self.max_first = Some(max.max(0));
        self
    }

    pub fn max_second(mut self, max: i32) -> Self {
        self.max_second = Some(max.max(0));
        self
    }

    pub fn bordered(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Set the ratio, clamped to `0.0..=1.0`. NaN becomes `0.5`.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = if ratio.is_nan() { 0.5 } else { ratio.clamp(0.0, 1.0) };
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// The area inside the border.
    pub fn inner(&self, outer: Rect) -> Rect {
        if self.border {
            outer.inset(1, 1, 1, 1)
        } else {
            outer.inset(0, 0, 0, 0)
        }
    }

    fn main_span(&self, r: Rect) -> (i32, i32) {
        match self.direction {
            SplitDirection::Horizontal => (r.x, r.width),
            SplitDirection::Vertical => (r.y, r.height),
        }
    }

    /// Space shared by the two panes: the inner main extent minus the
    /// splitter cell.
    pub fn total(&self, inner: Rect) -> i32 {
        self.main_span(inner).1.saturating_sub(1).max(0)
    }

    /// Clamp a first-pane size to the min/max bounds and to `[0, total]`.
    ///
    /// The lower bound is applied before the upper one, so when the
    /// minimums cannot both be met the second pane's floor wins.
    pub fn clamp_first(&self, size: i32, total: i32) -> i32 {
        let mut lo = self.min_first;
        if let Some(max_second) = self.max_second {
            lo = lo.max(total.saturating_sub(max_second));
        }
        let mut hi = total.saturating_sub(self.min_second);
        if let Some(max_first) = self.max_first {
            hi = hi.min(max_first);
        }
        size.max(lo).min(hi).max(0).min(total.max(0))
    }

    /// First-pane size for the current ratio.
    pub fn resolve_first_size(&self, total: i32) -> i32 {
        let wanted = (total as f32 * self.ratio).round() as i32;
        self.clamp_first(wanted, total)
    }

    /// Recompute the pane rects for `outer`.
    pub fn compute(&mut self, outer: Rect) {
        self.outer = outer;
        let inner = self.inner(outer);
        let total = self.total(inner);
        let first = self.resolve_first_size(total);
        self.place(inner, first, total);
    }

    fn place(&mut self, inner: Rect, first: i32, total: i32) {
        let second = (total - first).max(0);
        match self.direction {
            SplitDirection::Horizontal => {
                self.splitter = inner.x.saturating_add(first);
                self.first = Rect::new(inner.x, inner.y, first, inner.height);
                self.second = Rect::new(self.splitter.saturating_add(1), inner.y, second, inner.height);
            }
            SplitDirection::Vertical => {
                self.splitter = inner.y.saturating_add(first);
                self.first = Rect::new(inner.x, inner.y, inner.width, first);
                self.second = Rect::new(inner.x, self.splitter.saturating_add(1), inner.width, second);
            }
        }
    }

    pub fn outer_rect(&self) -> Rect {
        self.outer
    }

    pub fn first_rect(&self) -> Rect {
        self.first
    }

    pub fn second_rect(&self) -> Rect {
        self.second
    }

    /// Absolute column (horizontal split) or row (vertical split) of the
    /// splitter line.
    pub fn splitter_position(&self) -> i32 {
        self.splitter
    }

    /// The one-cell-thick rect covered by the splitter line.
    pub fn splitter_rect(&self) -> Rect {
        let inner = self.inner(self.outer);
        match self.direction {
            SplitDirection::Horizontal => Rect::new(self.splitter, inner.y, 1, inner.height),
            SplitDirection::Vertical => Rect::new(inner.x, self.splitter, inner.width, 1),
        }
    }

    // -----------------------------------------------------------------------
    // Dragging
    // -----------------------------------------------------------------------

    /// Whether `(x, y)` is within one cell of the splitter line.
    pub fn hit_splitter(&self, x: i32, y: i32) -> bool {
        let inner = self.inner(self.outer);
        match self.direction {
            SplitDirection::Horizontal => {
                x.abs_diff(self.splitter) <= 1 && y >= inner.y && y < inner.bottom()
            }
            SplitDirection::Vertical => {
                y.abs_diff(self.splitter) <= 1 && x >= inner.x && x < inner.right()
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Move the splitter to follow the pointer. Returns `true` if the
    /// splitter moved.
    pub fn drag_to(&mut self, x: i32, y: i32) -> bool {
        if !self.dragging {
            return false;
        }
        let inner = self.inner(self.outer);
        let total = self.total(inner);
        let (start, _) = self.main_span(inner);
        let pointer = match self.direction {
            SplitDirection::Horizontal => x,
            SplitDirection::Vertical => y,
        };
        let first = self.clamp_first(pointer.saturating_sub(start), total);
        if total > 0 {
            self.ratio = first as f32 / total as f32;
        }
        let before = self.splitter;
        self.place(inner, first, total);
        before != self.splitter
    }

    /// End the drag, returning the final ratio if a drag was active.
    pub fn end_drag(&mut self) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(self.ratio)
    }

    // -----------------------------------------------------------------------
    // Junctions
    // -----------------------------------------------------------------------

    /// Junction glyphs where orthogonal, borderless nested splits in the
    /// panes meet this container's border and splitter.
    ///
    /// Includes the two ends of this container's own splitter when it is
    /// bordered.
    pub fn junctions(
        &self,
        first: Option<&dyn BorderJunctionProvider>,
        second: Option<&dyn BorderJunctionProvider>,
    ) -> Vec<JunctionPoint> {
        let mut points: Vec<JunctionPoint> = Vec::new();
        let mut add = |x: i32, y: i32, kind: JunctionKind| {
            if let Some(p) = points.iter_mut().find(|p| p.x == x && p.y == y) {
                p.kind = p.kind.merge(kind);
            } else {
                points.push(JunctionPoint { x, y, kind });
            }
        };

        let outer = self.outer;
        let s = self.splitter;

        match self.direction {
            SplitDirection::Horizontal => {
                if self.border {
                    add(s, outer.y, JunctionKind::TeeDown);
                    add(s, outer.bottom().saturating_sub(1), JunctionKind::TeeUp);
                }
                if let Some(row) = self.nested_splitter(first) {
                    if self.border {
                        add(outer.x, row, JunctionKind::TeeRight);
                    }
                    add(s, row, JunctionKind::TeeLeft);
                }
                if let Some(row) = self.nested_splitter(second) {
                    add(s, row, JunctionKind::TeeRight);
                    if self.border {
                        add(outer.right().saturating_sub(1), row, JunctionKind::TeeLeft);
                    }
                }
            }
            SplitDirection::Vertical => {
                if self.border {
                    add(outer.x, s, JunctionKind::TeeRight);
                    add(outer.right().saturating_sub(1), s, JunctionKind::TeeLeft);
                }
                if let Some(col) = self.nested_splitter(first) {
                    if self.border {
                        add(col, outer.y, JunctionKind::TeeDown);
                    }
                    add(col, s, JunctionKind::TeeUp);
                }
                if let Some(col) = self.nested_splitter(second) {
                    add(col, s, JunctionKind::TeeDown);
                    if self.border {
                        add(col, outer.bottom().saturating_sub(1), JunctionKind::TeeUp);
                    }
                }
            }
        }
        points
    }
}

impl SplitLayout {
    fn nested_splitter(&self, pane: Option<&dyn BorderJunctionProvider>) -> Option<i32> {
        let pane = pane.filter(|p| p.border_suppressed())?;
        match pane.splitter() {
            Some((dir, at)) if dir == self.direction.orthogonal() => Some(at),
            _ => None,
        }
    }
}

impl BorderJunctionProvider for SplitLayout {
    fn splitter(&self) -> Option<(SplitDirection, i32)> {
        Some((self.direction, self.splitter))
    }

    fn border_suppressed(&self) -> bool {
        !self.border
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Sizing
    // -----------------------------------------------------------------------

    #[test]
    fn bordered_21_wide_splits_at_column_10() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal).min_sizes(3, 3);
        split.compute(Rect::new(0, 0, 21, 5));
        assert_eq!(split.splitter_position(), 10);
        assert_eq!(split.first_rect(), Rect::new(1, 1, 9, 3));
        assert_eq!(split.second_rect(), Rect::new(11, 1, 9, 3));
    }

    #[test]
    fn ratio_is_clamped_by_minimums() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal)
            .bordered(false)
            .ratio(0.0)
            .min_sizes(4, 6);
        split.compute(Rect::new(0, 0, 31, 1));
        assert_eq!(split.first_rect().width, 4);

        split.set_ratio(1.0);
        split.compute(Rect::new(0, 0, 31, 1));
        assert_eq!(split.first_rect().width, 24);
        assert_eq!(split.second_rect().width, 6);
    }

    #[test]
    fn max_bounds_tighten() {
        let split = SplitLayout::new(SplitDirection::Vertical).ratio(0.9).max_first(10);
        assert_eq!(split.resolve_first_size(40), 10);

        let split = SplitLayout::new(SplitDirection::Vertical).ratio(0.1).max_second(10);
        assert_eq!(split.resolve_first_size(40), 30);
    }

    #[test]
    fn too_small_container_does_not_panic() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal).min_sizes(10, 10);
        for width in -3..25 {
            split.compute(Rect::new(0, 0, width, 3));
            let total = split.total(split.inner(Rect::new(0, 0, width, 3)));
            let first = split.first_rect().width;
            assert!(first >= 0 && first <= total);
            assert!(split.second_rect().width >= 0);
        }
    }

    #[test]
    fn vertical_split_places_rows() {
        let mut split = SplitLayout::new(SplitDirection::Vertical).bordered(false);
        split.compute(Rect::new(0, 0, 10, 11));
        assert_eq!(split.first_rect(), Rect::new(0, 0, 10, 5));
        assert_eq!(split.splitter_position(), 5);
        assert_eq!(split.second_rect(), Rect::new(0, 6, 10, 5));
        assert_eq!(split.splitter_rect(), Rect::new(0, 5, 10, 1));
    }

    #[test]
    fn nan_ratio_resets_to_half() {
        let mut split = SplitLayout::default();
        split.set_ratio(f32::NAN);
        assert_eq!(split.ratio, 0.5);
        split.set_ratio(3.0);
        assert_eq!(split.ratio, 1.0);
    }

    // -----------------------------------------------------------------------
    // Dragging
    // -----------------------------------------------------------------------

    #[test]
    fn hit_test_tolerates_one_cell() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal).min_sizes(3, 3);
        split.compute(Rect::new(0, 0, 21, 5));
        assert!(split.hit_splitter(9, 2));
        assert!(split.hit_splitter(10, 2));
        assert!(split.hit_splitter(11, 2));
        assert!(!split.hit_splitter(12, 2));
        assert!(!split.hit_splitter(10, 0));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal)
            .bordered(false)
            .min_sizes(0, 0);
        split.compute(Rect::new(i32::MAX - 5, 0, 10, 3));
        assert_eq!(split.splitter_position(), i32::MAX);
        assert_eq!(split.second_rect().x, i32::MAX);
        assert!(split.hit_splitter(i32::MAX, 1));
        assert!(!split.hit_splitter(i32::MIN, 1));

        split.begin_drag();
        split.drag_to(i32::MIN, 1);
        assert_eq!(split.first_rect().width, 0);
        assert_eq!(split.splitter_position(), i32::MAX - 5);
    }

    #[test]
    fn drag_updates_ratio_and_clamps() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal)
            .bordered(false)
            .min_sizes(2, 2);
        split.compute(Rect::new(0, 0, 21, 3));
        assert!(!split.drag_to(5, 0));

        split.begin_drag();
        assert!(split.drag_to(5, 0));
        assert_eq!(split.splitter_position(), 5);
        assert!((split.ratio - 0.25).abs() < 1e-6);

        split.drag_to(100, 0);
        assert_eq!(split.splitter_position(), 18);
        split.drag_to(-100, 0);
        assert_eq!(split.splitter_position(), 2);

        assert_eq!(split.end_drag(), Some(0.1));
        assert!(!split.is_dragging());
        assert_eq!(split.end_drag(), None);
    }

    // -----------------------------------------------------------------------
    // Junctions
    // -----------------------------------------------------------------------

    struct Nested(SplitDirection, i32, bool);

    impl BorderJunctionProvider for Nested {
        fn splitter(&self) -> Option<(SplitDirection, i32)> {
            Some((self.0, self.1))
        }
        fn border_suppressed(&self) -> bool {
            !self.2
        }
    }

    #[test]
    fn own_splitter_meets_border() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal);
        split.compute(Rect::new(0, 0, 11, 5));
        let points = split.junctions(None, None);
        assert_eq!(
            points,
            vec![
                JunctionPoint { x: 5, y: 0, kind: JunctionKind::TeeDown },
                JunctionPoint { x: 5, y: 4, kind: JunctionKind::TeeUp },
            ]
        );
    }

    #[test]
    fn nested_orthogonal_split_in_second_pane() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal);
        split.compute(Rect::new(0, 0, 11, 7));
        let nested = Nested(SplitDirection::Vertical, 3, false);
        let points = split.junctions(None, Some(&nested));
        assert!(points.contains(&JunctionPoint { x: 5, y: 3, kind: JunctionKind::TeeRight }));
        assert!(points.contains(&JunctionPoint { x: 10, y: 3, kind: JunctionKind::TeeLeft }));
    }

    #[test]
    fn nested_rows_on_both_sides_cross() {
        let mut split = SplitLayout::new(SplitDirection::Horizontal);
        split.compute(Rect::new(0, 0, 11, 7));
        let left = Nested(SplitDirection::Vertical, 3, false);
        let right = Nested(SplitDirection::Vertical, 3, false);
        let points = split.junctions(Some(&left), Some(&right));
        assert!(points.contains(&JunctionPoint { x: 5, y: 3, kind: JunctionKind::Cross }));
        assert!(points.contains(&JunctionPoint { x: 0, y: 3, kind: JunctionKind::TeeRight }));
    }

    #[test]
    fn bordered_or_parallel_nested_is_ignored() {
        let mut split = SplitLayout::new(SplitDirection::Vertical).bordered(false);
        split.compute(Rect::new(0, 0, 10, 9));
        let bordered = Nested(SplitDirection::Horizontal, 4, true);
        let parallel = Nested(SplitDirection::Vertical, 6, false);
        assert!(split.junctions(Some(&bordered), Some(&parallel)).is_empty());
    }

    #[test]
    fn vertical_parent_with_nested_columns() {
        let mut split = SplitLayout::new(SplitDirection::Vertical);
        split.compute(Rect::new(0, 0, 10, 9));
        let nested = Nested(SplitDirection::Horizontal, 4, false);
        let points = split.junctions(None, Some(&nested));
        let s = split.splitter_position();
        assert!(points.contains(&JunctionPoint { x: 4, y: s, kind: JunctionKind::TeeDown }));
        assert!(points.contains(&JunctionPoint { x: 4, y: 8, kind: JunctionKind::TeeUp }));
    }

    #[test]
    fn junction_glyphs_follow_border_chars() {
        assert_eq!(JunctionKind::TeeDown.glyph(&BorderChars::LIGHT), '┬');
        assert_eq!(JunctionKind::TeeLeft.glyph(&BorderChars::DOUBLE), '╣');
        assert_eq!(JunctionKind::Cross.glyph(&BorderChars::HEAVY), '╋');
    }
}
