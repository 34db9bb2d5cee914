use nalgebra::{Matrix3, Vector3};
use std::ops::{Add, Mul, Sub};

/// A position `(x, y, z)`. Equality is exact per component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin `(0, 0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Axis-angle rotation about `axis` (through the origin).
    ///
    /// Uses `R = I + sin θ W + (1 − cos θ) W²` with `W` the cross-product
    /// matrix of the unit axis. A zero angle returns `self` unchanged.
    /// `axis` must be non-zero.
    pub fn rotate(&self, radians: f64, axis: Vector) -> Point {
        if radians == 0.0 {
            return *self;
        }
        let w = axis.unit().to_na().cross_matrix();
        let r = Matrix3::identity() + w * radians.sin() + (w * w) * (1.0 - radians.cos());
        Point::from(r * self.to_na())
    }

    #[inline]
    pub(crate) fn to_na(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Point {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// `lhs - rhs` is the vector pointing from `rhs` to `lhs`.
impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::between(rhs, self)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        self + rhs.to_point()
    }
}

/// A directed difference `end − start`. Stores its components directly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector from `start` to `end`.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(end.x - start.x, end.y - start.y, end.z - start.z)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction (non-finite for the zero vector).
    #[inline]
    pub fn unit(&self) -> Vector {
        (1.0 / self.magnitude()) * *self
    }

    #[inline]
    pub const fn x_unit() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
    #[inline]
    pub const fn y_unit() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
    #[inline]
    pub const fn z_unit() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Same rotation as `Point::rotate`, applied to the vector's components.
    #[inline]
    pub fn rotate(&self, radians: f64, axis: Vector) -> Vector {
        Vector::from(self.to_point().rotate(radians, axis))
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) fn to_na(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Position vector of a point (from the origin).
impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Self {
        Vector::between(Point::zero(), p)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}
