use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D integer vector in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl Mul<i32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x.saturating_mul(rhs), self.y.saturating_mul(rhs))
    }
}

/// Truncating division, like integer `/`.
///
/// # Panics
/// Panics if `rhs == 0`.
impl Div<i32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: i32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
