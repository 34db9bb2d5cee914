use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{LineSegment, Point, Vector};

/// A straight piece of airfoil surface carrying local flow state.
///
/// Invariants:
/// - Geometry is fixed; only the four flow fields are mutated in place.
/// - `rotated` marks a panel already in the body frame so that
///   `rotated_panel` never rotates twice. It is bookkeeping only and does not
///   take part in equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct Panel {
    segment: LineSegment,
    /// Local flow incidence (angle of attack), radians.
    pub alpha_angle: f64,
    pub coefficient_of_pressure: f64,
    /// Vortex strength.
    pub gamma: f64,
    /// Source strength.
    pub lambda: f64,
    rotated: bool,
}

impl Panel {
    /// Panel from `start` to `end` with all flow fields zero.
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            segment: LineSegment::new(start, end),
            ..Self::default()
        }
    }

    #[inline]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }
    #[inline]
    pub fn start(&self) -> Point {
        self.segment.start()
    }
    #[inline]
    pub fn end(&self) -> Point {
        self.segment.end()
    }
    #[inline]
    pub fn mid(&self) -> Point {
        self.segment.mid()
    }
    #[inline]
    pub fn delta(&self) -> Vector {
        self.segment.delta()
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.segment.length()
    }

    /// Whether this panel is already in the body frame.
    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Angle from +x to the panel direction, in `[0, 2π)`.
    pub fn phi_angle(&self) -> f64 {
        let d = self.delta();
        let angle = d.y.atan2(d.x);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Outward normal angle `phi + π/2`, in `[0, 2π)`.
    #[inline]
    pub fn delta_angle(&self) -> f64 {
        (self.phi_angle() + FRAC_PI_2) % TAU
    }

    /// Angle between the local flow and the panel normal (unwrapped).
    #[inline]
    pub fn beta_angle(&self) -> f64 {
        self.delta_angle() - self.alpha_angle
    }

    #[inline]
    pub fn normal_force_coefficient(&self) -> f64 {
        -self.coefficient_of_pressure * self.length() * self.beta_angle().sin()
    }

    #[inline]
    pub fn axial_force_coefficient(&self) -> f64 {
        -self.coefficient_of_pressure * self.length() * self.beta_angle().cos()
    }

    /// Rotate the geometry about `axis`.
    ///
    /// The result is marked rotated, keeps pressure and strengths, and has
    /// `alpha_angle` reset to zero (the incidence is now in the geometry).
    pub fn rotate(&self, radians: f64, axis: Vector) -> Panel {
        Panel {
            segment: self.segment.rotate(radians, axis),
            alpha_angle: 0.0,
            coefficient_of_pressure: self.coefficient_of_pressure,
            gamma: self.gamma,
            lambda: self.lambda,
            rotated: true,
        }
    }

    /// Body-frame view: rotate by `−alpha` about z unless already rotated.
    pub fn rotated_panel(&self) -> Panel {
        if self.rotated {
            *self
        } else {
            self.rotate(-self.alpha_angle, Vector::z_unit())
        }
    }
}

impl PartialEq for Panel {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment
            && self.alpha_angle == other.alpha_angle
            && self.coefficient_of_pressure == other.coefficient_of_pressure
            && self.gamma == other.gamma
            && self.lambda == other.lambda
    }
}
