//! Integer geometry of the pixel grid.
use core::fmt;

/// A pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A half-open rectangle of pixels, containing `min.x <= x < max.x` and `min.y <= y < max.y`.
///
/// Rectangles built through [`Rect::new`] are well-formed, that is `min` is never greater than
/// `max` in either coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Point {
    /// The point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        min: Point::new(0, 0),
        max: Point::new(0, 0),
    };

    /// The rectangle spanned by two corners, in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Rect {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A rectangle of the given size with its origin at zero.
    pub fn from_size(width: u32, height: u32) -> Self {
        let (x, y) = (clamp(width), clamp(height));
        Rect::new(0, 0, x, y)
    }

    /// The number of columns, zero for an ill-formed rectangle.
    pub fn width(&self) -> u32 {
        span(self.min.x, self.max.x)
    }

    /// The number of rows, zero for an ill-formed rectangle.
    pub fn height(&self) -> u32 {
        span(self.min.y, self.max.y)
    }

    /// Check if the rectangle contains no pixels.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Check if a point lies within the half-open bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && point.x < self.max.x
            && self.min.y <= point.y
            && point.y < self.max.y
    }

    /// The largest rectangle contained in both.
    ///
    /// Returns [`Rect::ZERO`] if the two do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let rect = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };

        if rect.is_empty() {
            Rect::ZERO
        } else {
            rect
        }
    }
}

fn span(min: i32, max: i32) -> u32 {
    (i64::from(max) - i64::from(min)).max(0) as u32
}

fn clamp(dim: u32) -> i32 {
    i32::try_from(dim).unwrap_or(i32::MAX)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
