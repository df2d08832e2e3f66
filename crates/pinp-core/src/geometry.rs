#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Overlay geometry is continuous, so everything here is `f64`. The y axis
//! grows downward (origin at top-left), matching the host surfaces the
//! overlay lives on.

use std::ops::{Add, AddAssign, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Replace the x coordinate.
    #[inline]
    #[must_use]
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, y: self.y }
    }

    /// Replace the y coordinate.
    #[inline]
    #[must_use]
    pub const fn with_y(self, y: f64) -> Self {
        Self { x: self.x, y }
    }
}

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Zero displacement.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reinterpret this displacement as a point.
    #[inline]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Manhattan length.
    #[inline]
    pub fn manhattan(self) -> f64 {
        self.x.abs() + self.y.abs()
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Vec2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, stored as origin plus size.
///
/// Used both for the overlay frame and for the container it is snapped
/// against. Values are snapshots; nothing here owns layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its min and max corners.
    #[inline]
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Create a rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center_size(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The same rectangle moved so its center lies on `center`.
    #[inline]
    #[must_use]
    pub fn with_center(&self, center: Point) -> Self {
        Self::from_center_size(center, self.size())
    }

    /// Check if every edge of `other` lies within this rectangle (inclusive).
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Size, Vec2};

    #[test]
    fn rect_extents() {
        let rect = Rect::from_corners(380.0, 780.0, 480.0, 880.0);
        assert_eq!(rect.min_x(), 380.0);
        assert_eq!(rect.max_x(), 480.0);
        assert_eq!(rect.mid_x(), 430.0);
        assert_eq!(rect.min_y(), 780.0);
        assert_eq!(rect.max_y(), 880.0);
        assert_eq!(rect.mid_y(), 830.0);
    }

    #[test]
    fn rect_center_round_trips() {
        let rect = Rect::from_center_size(Point::new(50.0, 400.0), Size::new(100.0, 100.0));
        assert_eq!(rect, Rect::new(0.0, 350.0, 100.0, 100.0));
        assert_eq!(rect.center(), Point::new(50.0, 400.0));
    }

    #[test]
    fn with_center_keeps_size() {
        let rect = Rect::new(0.0, 0.0, 120.0, 80.0);
        let moved = rect.with_center(Point::new(-20.0, 400.0));
        assert_eq!(moved.size(), rect.size());
        assert_eq!(moved.center(), Point::new(-20.0, 400.0));
    }

    #[test]
    fn point_vector_arithmetic() {
        let mut p = Point::new(200.0, 400.0);
        p += Vec2::new(30.0, -10.0);
        assert_eq!(p, Point::new(230.0, 390.0));
        assert_eq!(p - Point::new(200.0, 400.0), Vec2::new(30.0, -10.0));
        assert_eq!(Vec2::new(-3.0, 4.0).manhattan(), 7.0);
    }

    #[test]
    fn contains_rect_is_inclusive() {
        let container = Rect::new(0.0, 0.0, 400.0, 800.0);
        assert!(container.contains_rect(&Rect::new(0.0, 0.0, 400.0, 800.0)));
        assert!(!container.contains_rect(&Rect::new(-1.0, 0.0, 100.0, 100.0)));
    }
}
