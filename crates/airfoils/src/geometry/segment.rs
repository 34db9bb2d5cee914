use super::point::{Point, Vector};

/// Finite line from `start` to `end`; endpoints are fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn mid(&self) -> Point {
        self.start + 0.5 * (self.end - self.start)
    }

    /// Vector from `start` to `end`.
    #[inline]
    pub fn delta(&self) -> Vector {
        Vector::between(self.start, self.end)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().magnitude()
    }

    /// New segment with both endpoints rotated about `axis`.
    pub fn rotate(&self, radians: f64, axis: Vector) -> LineSegment {
        LineSegment::new(
            self.start.rotate(radians, axis),
            self.end.rotate(radians, axis),
        )
    }
}
