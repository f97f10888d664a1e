//! Core geometry types.
//!
//! Coordinates are integer pixels, matching the platform's drawable bounds.
//! Only text measurements (width and font metrics) are fractional.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A translation in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            dx: self.dx.wrapping_add(rhs.dx),
            dy: self.dy.wrapping_add(rhs.dy),
        }
    }
}

impl Sub for Offset {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            dx: self.dx.wrapping_sub(rhs.dx),
            dy: self.dy.wrapping_sub(rhs.dy),
        }
    }
}

impl Neg for Offset {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            dx: self.dx.wrapping_neg(),
            dy: self.dy.wrapping_neg(),
        }
    }
}

/// An edge-based rectangle: `(left, top, right, bottom)`.
///
/// Inverted rectangles (`right < left` or `bottom < top`) are representable
/// and are produced for negative decoration sizes. They are never
/// normalized. Edge arithmetic wraps on `i32` overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub const fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.wrapping_add(width),
            bottom: top.wrapping_add(height),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Zero-area or inverted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    #[inline]
    pub fn translate(&self, offset: Offset) -> Self {
        Self {
            left: self.left.wrapping_add(offset.dx),
            top: self.top.wrapping_add(offset.dy),
            right: self.right.wrapping_add(offset.dx),
            bottom: self.bottom.wrapping_add(offset.dy),
        }
    }

    /// Half-open containment test, as used for hit-testing.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Smallest rectangle covering both.
    #[inline]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Padding insets of a view, in layout-direction terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Insets {
    pub start: i32,
    pub top: i32,
    pub end: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self {
        start: 0,
        top: 0,
        end: 0,
        bottom: 0,
    };

    pub const fn new(start: i32, top: i32, end: i32, bottom: i32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    /// Uniform insets on all sides.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric insets (horizontal, vertical).
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub fn horizontal(&self) -> i32 {
        self.start.wrapping_add(self.end)
    }

    pub fn vertical(&self) -> i32 {
        self.top.wrapping_add(self.bottom)
    }
}

/// Font metrics of the text paint.
///
/// Follows the platform convention: `ascent` is negative (above the
/// baseline) and `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub const fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    #[inline]
    pub fn text_height(&self) -> f32 {
        self.descent - self.ascent
    }

    #[inline]
    pub fn half_text_height(&self) -> f32 {
        (self.descent - self.ascent) / 2.0
    }
}
