//! Sizing units and min/max constraints.
//!
//! A [`Dimension`] is one of `auto`, a fixed cell count, a percentage of the
//! available span, or a fraction (`fr`) of the space left over once fixed
//! siblings are placed. [`Constraints`] pairs a width and height dimension
//! with optional min/max clamps.

use std::fmt;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// A sizing unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Take whatever the container offers.
    #[default]
    Auto,
    /// An exact number of cells.
    Fixed(i32),
    /// Percentage (0-100) of the available span.
    Percent(f32),
    /// Proportional share of the remaining space.
    Fraction(f32),
}

impl Dimension {
    /// Resolve to a length in cells.
    ///
    /// `total_fraction` is the sum of fraction weights among the siblings
    /// sharing `available`; a fraction resolves to zero when it is not
    /// positive.
    pub fn resolve(self, available: i32, total_fraction: f32) -> i32 {
        match self {
            Dimension::Auto => available.max(0),
            Dimension::Fixed(n) => n.max(0),
            Dimension::Percent(p) => {
                ((available.max(0) as f32) * p.clamp(0.0, 100.0) / 100.0).floor() as i32
            }
            Dimension::Fraction(n) => {
                if total_fraction <= 0.0 || n <= 0.0 {
                    0
                } else {
                    ((available.max(0) as f32) * n / total_fraction).floor() as i32
                }
            }
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }

    pub fn is_fraction(self) -> bool {
        matches!(self, Dimension::Fraction(_))
    }

    /// The fraction weight, or zero for non-fraction units.
    pub fn fraction(self) -> f32 {
        match self {
            Dimension::Fraction(n) => n.max(0.0),
            _ => 0.0,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => write!(f, "auto"),
            Dimension::Fixed(n) => write!(f, "{n}"),
            Dimension::Percent(p) => write!(f, "{p}%"),
            Dimension::Fraction(n) => write!(f, "{n}fr"),
        }
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Width/height dimensions with optional min/max clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
}

impl Constraints {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Clamp a resolved width: max first, then min, so min wins a conflict.
    pub fn constrain_width(&self, value: i32) -> i32 {
        clamp_opt(value, self.min_width, self.max_width)
    }

    /// Clamp a resolved height: max first, then min, so min wins a conflict.
    pub fn constrain_height(&self, value: i32) -> i32 {
        clamp_opt(value, self.min_height, self.max_height)
    }
}

fn clamp_opt(value: i32, min: Option<i32>, max: Option<i32>) -> i32 {
    let mut v = value;
    if let Some(max) = max {
        v = v.min(max);
    }
    if let Some(min) = min {
        v = v.max(min);
    }
    v
}

// ===========================================================================
// Tests
// ===========================================================================
