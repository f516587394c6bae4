//! Single-axis flexible-box resolution.
//!
//! [`Flex::arrange`] places a list of [`LayoutItem`]s along a row or column:
//!
//! 1. Fixed and percentage sizes are resolved against the main-axis span
//!    minus gaps and margins.
//! 2. The remainder is shared among fraction items in proportion to their
//!    weight. `auto` on the main axis counts as `1fr`.
//! 3. The cross axis is sized and positioned by [`Align`].
//!
//! Every step clamps; an over-full container yields zero-sized items rather
//! than negative ones.

use crate::geometry::{Rect, Spacing};

use super::dimension::{Constraints, Dimension};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Children left to right.
    Row,
    /// Children top to bottom.
    #[default]
    Column,
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

impl Align {
    pub fn parse(name: &str) -> Option<Align> {
        match name {
            "start" | "left" | "top" => Some(Align::Start),
            "center" | "middle" => Some(Align::Center),
            "end" | "right" | "bottom" => Some(Align::End),
            "stretch" => Some(Align::Stretch),
            _ => None,
        }
    }
}

/// What the flex solver needs to know about one child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutItem {
    pub constraints: Constraints,
    pub margin: Spacing,
    pub visible: bool,
}

impl LayoutItem {
    pub fn new(constraints: Constraints) -> Self {
        Self { constraints, margin: Spacing::ZERO, visible: true }
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A flex container description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flex {
    pub direction: Direction,
    pub gap: i32,
    pub align: Align,
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

struct Axis {
    row: bool,
}

impl Axis {
    fn main_dim(&self, c: &Constraints) -> Dimension {
        if self.row { c.width } else { c.height }
    }

    fn cross_dim(&self, c: &Constraints) -> Dimension {
        if self.row { c.height } else { c.width }
    }

    fn constrain_main(&self, c: &Constraints, v: i32) -> i32 {
        if self.row { c.constrain_width(v) } else { c.constrain_height(v) }
    }

    fn constrain_cross(&self, c: &Constraints, v: i32) -> i32 {
        if self.row { c.constrain_height(v) } else { c.constrain_width(v) }
    }

    /// (before, after) margins along the main axis.
    fn main_margin(&self, m: Spacing) -> (i32, i32) {
        if self.row { (m.left, m.right) } else { (m.top, m.bottom) }
    }

    fn cross_margin(&self, m: Spacing) -> (i32, i32) {
        if self.row { (m.top, m.bottom) } else { (m.left, m.right) }
    }

    /// (start, extent) of the area along the main axis.
    fn main_span(&self, r: Rect) -> (i32, i32) {
        if self.row { (r.x, r.width) } else { (r.y, r.height) }
    }

    fn cross_span(&self, r: Rect) -> (i32, i32) {
        if self.row { (r.y, r.height) } else { (r.x, r.width) }
    }

    fn rect(&self, main_pos: i32, main_size: i32, cross_pos: i32, cross_size: i32) -> Rect {
        if self.row {
            Rect::new(main_pos, cross_pos, main_size, cross_size)
        } else {
            Rect::new(cross_pos, main_pos, cross_size, main_size)
        }
    }
}

// ---------------------------------------------------------------------------
// Flex
// ---------------------------------------------------------------------------

impl Flex {
    pub fn row() -> Self {
        Self { direction: Direction::Row, ..Self::default() }
    }

    pub fn column() -> Self {
        Self { direction: Direction::Column, ..Self::default() }
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Compute one rect per item, in item order. Hidden items get a
    /// zero-sized rect at the area origin.
    pub fn arrange(&self, area: Rect, items: &[LayoutItem]) -> Vec<Rect> {
        let axis = Axis { row: self.direction == Direction::Row };
        let (main_start, main_extent) = axis.main_span(area);
        let (cross_start, cross_extent) = axis.cross_span(area);

        let visible = items.iter().filter(|i| i.visible).count() as i32;
        let gaps = self.gap.saturating_mul((visible - 1).max(0));
        let margins: i32 = items
            .iter()
            .filter(|i| i.visible)
            .map(|i| {
                let (a, b) = axis.main_margin(i.margin);
                a.saturating_add(b)
            })
            .fold(0i32, i32::saturating_add);
        let available = main_extent.max(0).saturating_sub(gaps).saturating_sub(margins).max(0);

        // Pass 1: fixed sizes and fraction weights.
        let mut sizes = vec![0i32; items.len()];
        let mut weights = vec![0f32; items.len()];
        let mut fixed_total = 0;
        for (i, item) in items.iter().enumerate() {
            if !item.visible {
                continue;
            }
            match axis.main_dim(&item.constraints) {
                dim @ (Dimension::Fixed(_) | Dimension::Percent(_)) => {
                    let size = axis.constrain_main(&item.constraints, dim.resolve(available, 0.0));
                    sizes[i] = size.max(0);
                    fixed_total = sizes[i].saturating_add(fixed_total);
                }
                Dimension::Auto => weights[i] = 1.0,
                Dimension::Fraction(n) => weights[i] = n.max(0.0),
            }
        }

        // Pass 2: share the remainder with cumulative rounding so the
        // fraction items tile the remaining span exactly.
        let remaining = available.saturating_sub(fixed_total).max(0);
        let total_fr: f32 = weights.iter().sum();
        if total_fr > 0.0 {
            let mut acc = 0.0f32;
            let mut prev_edge = 0;
            for (i, item) in items.iter().enumerate() {
                if !item.visible || !is_flexible(axis.main_dim(&item.constraints)) {
                    continue;
                }
                acc += weights[i];
                let edge = (remaining as f32 * acc / total_fr).round() as i32;
                let share = edge - prev_edge;
                prev_edge = edge;
                sizes[i] = axis.constrain_main(&item.constraints, share).max(0);
            }
        }

        // Pass 3: positions and cross axis.
        let mut cursor = main_start;
        let mut rects = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if !item.visible {
                rects.push(Rect::new(area.x, area.y, 0, 0));
                continue;
            }
            let (before, after) = axis.main_margin(item.margin);
            cursor = cursor.saturating_add(before);
            let main_pos = cursor;
            cursor = cursor.saturating_add(sizes[i]).saturating_add(after).saturating_add(self.gap);

            let (c_before, c_after) = axis.cross_margin(item.margin);
            let cross_avail = cross_extent.saturating_sub(c_before).saturating_sub(c_after).max(0);
            let cross_size = match self.align {
                Align::Stretch => cross_avail,
                _ => match axis.cross_dim(&item.constraints) {
                    dim @ (Dimension::Fixed(_) | Dimension::Percent(_)) => {
                        dim.resolve(cross_avail, 0.0)
                    }
                    Dimension::Auto | Dimension::Fraction(_) => cross_avail,
                },
            };
            let cross_size = axis
                .constrain_cross(&item.constraints, cross_size)
                .min(cross_avail)
                .max(0);
            let slack = cross_avail - cross_size;
            let cross_pos = cross_start.saturating_add(c_before).saturating_add(match self.align {
                Align::Start | Align::Stretch => 0,
                Align::Center => slack / 2,
                Align::End => slack,
            });

            rects.push(axis.rect(main_pos, sizes[i], cross_pos, cross_size));
        }

        tracing::trace!(?area, count = items.len(), "flex arrange");
        rects
    }
}

fn is_flexible(dim: Dimension) -> bool {
    matches!(dim, Dimension::Auto | Dimension::Fraction(_))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: Dimension, height: Dimension) -> LayoutItem {
        LayoutItem::new(Constraints::new(width, height))
    }

    fn widths(rects: &[Rect]) -> Vec<i32> {
        rects.iter().map(|r| r.width).collect()
    }

    // -----------------------------------------------------------------------
    // Main axis
    // -----------------------------------------------------------------------

    #[test]
    fn fixed_then_fractions() {
        let items = [
            item(Dimension::Fixed(10), Dimension::Auto),
            item(Dimension::Fraction(1.0), Dimension::Auto),
            item(Dimension::Fraction(2.0), Dimension::Auto),
        ];
        let rects = Flex::row().arrange(Rect::new(0, 0, 40, 5), &items);
        assert_eq!(widths(&rects), vec![10, 10, 20]);
        assert_eq!(rects[1].x, 10);
        assert_eq!(rects[2].x, 20);
    }

    #[test]
    fn auto_items_tile_exactly() {
        let items = [item(Dimension::Auto, Dimension::Auto); 3];
        let rects = Flex::column().arrange(Rect::new(0, 0, 8, 10), &items);
        let heights: Vec<_> = rects.iter().map(|r| r.height).collect();
        assert_eq!(heights, vec![3, 4, 3]);
        assert_eq!(rects[2].bottom(), 10);
    }

    #[test]
    fn gaps_reduce_available_space() {
        let items = [
            item(Dimension::Fraction(1.0), Dimension::Auto),
            item(Dimension::Fraction(1.0), Dimension::Auto),
        ];
        let rects = Flex::row().gap(2).arrange(Rect::new(0, 0, 12, 1), &items);
        assert_eq!(rects[0], Rect::new(0, 0, 5, 1));
        assert_eq!(rects[1], Rect::new(7, 0, 5, 1));
    }

    #[test]
    fn percent_resolves_against_span_minus_gaps() {
        let items = [
            item(Dimension::Percent(50.0), Dimension::Auto),
            item(Dimension::Fraction(1.0), Dimension::Auto),
        ];
        let rects = Flex::row().gap(2).arrange(Rect::new(0, 0, 22, 1), &items);
        assert_eq!(widths(&rects), vec![10, 10]);
    }

    #[test]
    fn zero_fraction_total_gives_nothing() {
        let items = [
            item(Dimension::Fixed(4), Dimension::Auto),
            item(Dimension::Fraction(0.0), Dimension::Auto),
        ];
        let rects = Flex::row().arrange(Rect::new(0, 0, 20, 1), &items);
        assert_eq!(widths(&rects), vec![4, 0]);
    }

    #[test]
    fn overfull_container_does_not_go_negative() {
        let items = [
            item(Dimension::Fixed(30), Dimension::Auto),
            item(Dimension::Fraction(1.0), Dimension::Auto),
        ];
        let rects = Flex::row().arrange(Rect::new(0, 0, 10, 1), &items);
        assert_eq!(widths(&rects), vec![30, 0]);
    }

    #[test]
    fn min_max_constraints_apply() {
        let mut capped = item(Dimension::Fraction(1.0), Dimension::Auto);
        capped.constraints.max_width = Some(3);
        let mut floored = item(Dimension::Fixed(1), Dimension::Auto);
        floored.constraints.min_width = Some(4);
        let rects = Flex::row().arrange(Rect::new(0, 0, 20, 1), &[capped, floored]);
        assert_eq!(widths(&rects), vec![3, 4]);
    }

    #[test]
    fn margins_offset_items() {
        let items = [
            item(Dimension::Fixed(3), Dimension::Auto).margin(Spacing::new(1, 0, 0, 2)),
            item(Dimension::Fixed(3), Dimension::Auto),
        ];
        let rects = Flex::row().arrange(Rect::new(0, 0, 20, 5), &items);
        assert_eq!(rects[0], Rect::new(2, 1, 3, 4));
        assert_eq!(rects[1].x, 5);
    }

    #[test]
    fn hidden_items_take_no_space() {
        let items = [
            item(Dimension::Auto, Dimension::Auto),
            item(Dimension::Fixed(5), Dimension::Auto).hidden(),
            item(Dimension::Auto, Dimension::Auto),
        ];
        let rects = Flex::row().gap(1).arrange(Rect::new(0, 0, 11, 1), &items);
        assert_eq!(widths(&rects), vec![5, 0, 5]);
        assert_eq!(rects[2].x, 6);
    }

    // -----------------------------------------------------------------------
    // Cross axis
    // -----------------------------------------------------------------------

    #[test]
    fn stretch_fills_cross_axis() {
        let items = [item(Dimension::Auto, Dimension::Fixed(2))];
        let rects = Flex::row().arrange(Rect::new(0, 0, 10, 6), &items);
        assert_eq!(rects[0].height, 6);
    }

    #[test]
    fn cross_alignment_positions() {
        let items = [item(Dimension::Fixed(4), Dimension::Auto)];
        let area = Rect::new(0, 0, 10, 3);
        let start = Flex::column().align(Align::Start).arrange(area, &items);
        let center = Flex::column().align(Align::Center).arrange(area, &items);
        let end = Flex::column().align(Align::End).arrange(area, &items);
        assert_eq!(start[0], Rect::new(0, 0, 4, 3));
        assert_eq!(center[0], Rect::new(3, 0, 4, 3));
        assert_eq!(end[0], Rect::new(6, 0, 4, 3));
    }

    #[test]
    fn cross_size_clamped_to_available() {
        let items = [item(Dimension::Auto, Dimension::Fixed(50))];
        let rects = Flex::row().align(Align::Start).arrange(Rect::new(0, 0, 10, 4), &items);
        assert_eq!(rects[0].height, 4);
    }

    #[test]
    fn extreme_origin_and_sizes_do_not_overflow() {
        let items = [
            item(Dimension::Fixed(i32::MAX), Dimension::Auto).margin(Spacing::new(0, i32::MAX, 0, 1)),
            item(Dimension::Fixed(i32::MAX), Dimension::Auto),
        ];
        let rects = Flex::row().gap(i32::MAX).arrange(Rect::new(i32::MAX - 1, 0, i32::MAX, 2), &items);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].x, i32::MAX);
        assert_eq!(rects[1].x, i32::MAX);
        assert!(rects.iter().all(|r| r.width >= 0));
    }

    #[test]
    fn align_parse() {
        assert_eq!(Align::parse("center"), Some(Align::Center));
        assert_eq!(Align::parse("bottom"), Some(Align::End));
        assert_eq!(Align::parse("diagonal"), None);
    }
}
