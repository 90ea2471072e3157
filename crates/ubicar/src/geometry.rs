//! Pixel geometry: integer coordinates resolved from sub-pixel layout
//!
//! Layout engines report element geometry as sub-pixel floating-point
//! values. Remote automation ends expose integral pixel coordinates. The
//! types here keep the two spaces apart: `RawRect`/`RawPoint` carry the
//! measurements exactly as reported, `Point`/`Size` carry the rounded
//! result, and [`px`] is the single rounding rule between them.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Round a sub-pixel measurement to whole pixels.
///
/// Halves round away from zero: `10.9` → `11`, `10.1` → `10`, `10.5` → `11`,
/// `-10.5` → `-11`. Every coordinate a resolver returns has passed through
/// this function exactly once.
#[must_use]
pub fn px(value: f64) -> i32 {
    value.round() as i32
}

/// Integer pixel coordinate, viewport- or document-relative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset in pixels
    pub x: i32,
    /// Vertical offset in pixels
    pub y: i32,
}

impl Point {
    /// The `(0, 0)` coordinate
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a sub-pixel coordinate pair into a pixel point
    #[must_use]
    pub fn from_raw(x: f64, y: f64) -> Self {
        Self::new(px(x), px(y))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer element size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// The zero-by-zero size
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Round a sub-pixel extent pair into a pixel size.
    ///
    /// Layout never reports negative extents; anything below zero after
    /// rounding clamps to zero rather than wrapping.
    #[must_use]
    pub fn from_raw(width: f64, height: f64) -> Self {
        Self::new(px(width).max(0) as u32, px(height).max(0) as u32)
    }

    /// Whether either dimension is zero
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Sub-pixel bounding box exactly as the layout engine reports it.
///
/// Edges are document-relative within the owning frame, so the box does
/// not move when that document scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRect {
    /// Left edge in CSS pixels
    pub left: f64,
    /// Top edge in CSS pixels
    pub top: f64,
    /// Border-box width in CSS pixels
    pub width: f64,
    /// Border-box height in CSS pixels
    pub height: f64,
}

impl RawRect {
    /// Create a new raw bounding box
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner rounded to whole pixels
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::from_raw(self.left, self.top)
    }

    /// Extent rounded to whole pixels
    #[must_use]
    pub fn size(&self) -> Size {
        Size::from_raw(self.width, self.height)
    }

    /// The same box shifted by a sub-pixel offset
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// Sub-pixel coordinate pair, used for scroll offsets before rounding
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPoint {
    /// Horizontal offset in CSS pixels
    pub x: f64,
    /// Vertical offset in CSS pixels
    pub y: f64,
}

impl RawPoint {
    /// The `(0.0, 0.0)` offset
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new raw point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to a pixel point
    #[must_use]
    pub fn rounded(&self) -> Point {
        Point::from_raw(self.x, self.y)
    }
}

impl fmt::Display for RawPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rounding_tests {
        use super::*;

        #[test]
        fn test_px_rounds_up_above_half() {
            assert_eq!(px(10.9), 11);
        }

        #[test]
        fn test_px_rounds_down_below_half() {
            assert_eq!(px(10.1), 10);
        }

        #[test]
        fn test_px_rounds_halves_away_from_zero() {
            assert_eq!(px(10.5), 11);
            assert_eq!(px(-10.5), -11);
            assert_eq!(px(0.5), 1);
            assert_eq!(px(-0.5), -1);
        }

        #[test]
        fn test_px_keeps_integral_values() {
            assert_eq!(px(0.0), 0);
            assert_eq!(px(42.0), 42);
            assert_eq!(px(-7.0), -7);
        }

        #[test]
        fn test_px_negative_fractions() {
            assert_eq!(px(-10.1), -10);
            assert_eq!(px(-10.9), -11);
        }
    }

    mod point_tests {
        use super::*;

        #[test]
        fn test_point_new() {
            let p = Point::new(10, 20);
            assert_eq!(p.x, 10);
            assert_eq!(p.y, 20);
        }

        #[test]
        fn test_point_origin() {
            assert_eq!(Point::ORIGIN, Point::new(0, 0));
        }

        #[test]
        fn test_point_from_raw_rounds_each_axis() {
            assert_eq!(Point::from_raw(10.9, 10.1), Point::new(11, 10));
        }

        #[test]
        fn test_point_add() {
            let sum = Point::new(10, 10) + Point::new(15, 15);
            assert_eq!(sum, Point::new(25, 25));
        }

        #[test]
        fn test_point_sub() {
            let diff = Point::new(10, 5010) - Point::new(0, 4000);
            assert_eq!(diff, Point::new(10, 1010));
        }

        #[test]
        fn test_point_display() {
            assert_eq!(Point::new(11, -3).to_string(), "(11, -3)");
        }
    }

    mod size_tests {
        use super::*;

        #[test]
        fn test_size_from_raw_rounds_each_axis() {
            assert_eq!(Size::from_raw(48.7, 49.3), Size::new(49, 49));
        }

        #[test]
        fn test_size_zero_is_empty() {
            assert!(Size::ZERO.is_empty());
            assert!(Size::new(0, 10).is_empty());
            assert!(!Size::new(1, 1).is_empty());
        }

        #[test]
        fn test_size_clamps_negative_extents() {
            assert_eq!(Size::from_raw(-0.4, -3.0), Size::ZERO);
        }

        #[test]
        fn test_size_display() {
            assert_eq!(Size::new(49, 49).to_string(), "49x49");
        }
    }

    mod rect_tests {
        use super::*;

        #[test]
        fn test_rect_origin_rounds() {
            let rect = RawRect::new(10.9, 10.1, 48.7, 49.3);
            assert_eq!(rect.origin(), Point::new(11, 10));
        }

        #[test]
        fn test_rect_size_rounds() {
            let rect = RawRect::new(10.9, 10.1, 48.7, 49.3);
            assert_eq!(rect.size(), Size::new(49, 49));
        }

        #[test]
        fn test_rect_translated_moves_origin_only() {
            let rect = RawRect::new(0.0, 0.0, 100.0, 20.0).translated(0.0, 600.0);
            assert!((rect.top - 600.0).abs() < f64::EPSILON);
            assert!((rect.left).abs() < f64::EPSILON);
            assert!((rect.width - 100.0).abs() < f64::EPSILON);
            assert!((rect.height - 20.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_raw_point_rounded() {
            assert_eq!(RawPoint::new(0.0, 4000.2).rounded(), Point::new(0, 4000));
        }

        #[test]
        fn test_raw_point_zero_rounds_to_origin() {
            assert_eq!(RawPoint::ZERO.rounded(), Point::ORIGIN);
        }
    }

    mod rounding_properties {
        use super::*;
        use proptest::prelude::*;

        /// Textbook round-half-away-from-zero, written with exact
        /// trunc/fraction arithmetic so the reference itself cannot drift.
        fn reference_round(value: f64) -> i32 {
            let whole = value.trunc();
            let frac = value - whole;
            if frac.abs() >= 0.5 {
                (whole + frac.signum()) as i32
            } else {
                whole as i32
            }
        }

        proptest! {
            #[test]
            fn prop_px_is_round_half_away_from_zero(value in -1.0e6f64..1.0e6) {
                prop_assert_eq!(px(value), reference_round(value));
            }

            /// Rounding never moves a measurement by more than half a pixel.
            #[test]
            fn prop_px_error_bounded(value in -1.0e6f64..1.0e6) {
                let delta = (f64::from(px(value)) - value).abs();
                prop_assert!(delta <= 0.5);
            }
        }
    }
}
