use nalgebra::Complex;

use super::point::Point;
use crate::cfg::INSIDE_WINDING_THRESHOLD;

/// Closed outline in the x/y plane. The last vertex connects back to the
/// first; no closing duplicate is stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Winding-number interior test (z is ignored).
    ///
    /// Sums `ln((p_k − q) / (p_{k−1} − q))` over all edges; the imaginary
    /// parts add up to 2π per turn around `q`. A point on a vertex makes the
    /// sum non-finite and is reported as outside.
    pub fn contains(&self, point: &Point) -> bool {
        let Some(last) = self.points.last() else {
            return false;
        };
        let q = Complex::new(point.x, point.y);
        let mut prev = Complex::new(last.x, last.y) - q;
        let mut winding = Complex::new(0.0, 0.0);
        for p in &self.points {
            let cur = Complex::new(p.x, p.y) - q;
            winding += (cur / prev).ln();
            prev = cur;
        }
        winding.norm() > INSIDE_WINDING_THRESHOLD
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
