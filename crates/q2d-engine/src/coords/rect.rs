use core::ops::{Add, Sub};

use super::Point;

/// Axis-aligned rectangle in pixels (top-left origin).
///
/// A non-positive `width` or `height` denotes an empty rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Axis-aligned intersection.
    ///
    /// Never returns negative extents: disjoint rectangles yield a rectangle
    /// positioned at the max of both origins with zero width and/or height.
    #[inline]
    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        Rect::new(x, y, x1.saturating_sub(x).max(0), y1.saturating_sub(y).max(0))
    }

    /// Row indices covered by this rectangle, empty when the rectangle is.
    #[inline]
    pub(crate) fn rows(self) -> core::ops::Range<i32> {
        if self.is_empty() { 0..0 } else { self.y..self.bottom() }
    }

    /// Column indices covered by this rectangle, empty when the rectangle is.
    #[inline]
    pub(crate) fn cols(self) -> core::ops::Range<i32> {
        if self.is_empty() { 0..0 } else { self.x..self.right() }
    }
}

/// Translates the origin; size is unchanged.
impl Add<Point> for Rect {
    type Output = Rect;
    #[inline]
    fn add(self, p: Point) -> Rect {
        let o = self.origin() + p;
        Rect::new(o.x, o.y, self.width, self.height)
    }
}

/// Translates the origin by `-p`; size is unchanged.
impl Sub<Point> for Rect {
    type Output = Rect;
    #[inline]
    fn sub(self, p: Point) -> Rect {
        let o = self.origin() - p;
        Rect::new(o.x, o.y, self.width, self.height)
    }
}
