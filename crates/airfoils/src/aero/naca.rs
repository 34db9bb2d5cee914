//! NACA 4-digit section generator.
//!
//! Chordwise stations are cosine spaced, `x_i = (1 − cos(iπ/h)) / 2` with
//! `h = point_count / 2`, so points cluster at both edges. The loop starts at
//! the lower trailing edge, runs forward to the leading edge and back along
//! the upper surface, giving `point_count` clockwise panels.

use std::f64::consts::PI;

use super::{AeroError, Airfoil, Panel};
use crate::cfg::{
    NACA_A4_CLOSED_TE, NACA_A4_OPEN_TE, NACA_MAX_CAMBER_PERCENT,
    NACA_MAX_CAMBER_POSITION_PERCENT, NACA_POINT_COUNT, NACA_THICKNESS_PERCENT,
};
use crate::geometry::Point;

/// Parameters of a NACA 4-digit section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Naca4Params {
    /// Panel count; even, in `[20, 200]`.
    pub point_count: usize,
    /// Maximum camber, percent of chord, in `[0, 9.5]`.
    pub max_camber_percent: f64,
    /// Position of maximum camber, percent of chord, in `[0, 90]`.
    pub max_camber_position_percent: f64,
    /// Maximum thickness, percent of chord, in `[1, 40]`.
    pub thickness_percent: f64,
    pub closed_trailing_edge: bool,
    pub angle_of_attack_radians: f64,
}

impl Default for Naca4Params {
    /// NACA 2412 with 100 panels, open trailing edge, zero incidence.
    fn default() -> Self {
        Self {
            point_count: 100,
            max_camber_percent: 2.0,
            max_camber_position_percent: 40.0,
            thickness_percent: 12.0,
            closed_trailing_edge: false,
            angle_of_attack_radians: 0.0,
        }
    }
}

impl Naca4Params {
    /// Parse a designation such as `"2412"` or `"NACA 0012"`.
    ///
    /// Digit 1 is the camber percent, digit 2 the camber position in tenths
    /// of chord, digits 3–4 the thickness percent. The result is validated.
    pub fn from_designation(code: &str, point_count: usize) -> Result<Self, AeroError> {
        let trimmed = code.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AeroError::invalid(format!(
                "NACA designation must be four digits, got {code:?}"
            )));
        }
        let d: Vec<f64> = digits.bytes().map(|b| f64::from(b - b'0')).collect();
        let params = Self {
            point_count,
            max_camber_percent: d[0],
            max_camber_position_percent: d[1] * 10.0,
            thickness_percent: d[2] * 10.0 + d[3],
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every bound; fails before any geometry is built.
    pub fn validate(&self) -> Result<(), AeroError> {
        check_range(
            "max camber percentage",
            self.max_camber_percent,
            NACA_MAX_CAMBER_PERCENT,
        )?;
        check_range(
            "max camber position percentage",
            self.max_camber_position_percent,
            NACA_MAX_CAMBER_POSITION_PERCENT,
        )?;
        check_range(
            "thickness percentage",
            self.thickness_percent,
            NACA_THICKNESS_PERCENT,
        )?;
        let (lo, hi) = NACA_POINT_COUNT;
        if !(lo..=hi).contains(&self.point_count) {
            return Err(AeroError::invalid(format!(
                "point count must be at least {lo} and at most {hi}, got {}",
                self.point_count
            )));
        }
        if self.point_count % 2 != 0 {
            return Err(AeroError::invalid(format!(
                "point count must be even, got {}",
                self.point_count
            )));
        }
        if !self.angle_of_attack_radians.is_finite() {
            return Err(AeroError::invalid("angle of attack must be finite"));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: f64, (lo, hi): (f64, f64)) -> Result<(), AeroError> {
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(AeroError::invalid(format!(
            "{name} must be at least {lo} and at most {hi}, got {value}"
        )))
    }
}

impl Airfoil {
    /// Generate a NACA 4-digit airfoil and set its angle of attack.
    pub fn naca4(params: &Naca4Params) -> Result<Airfoil, AeroError> {
        params.validate()?;

        let half = params.point_count / 2;
        let a4 = if params.closed_trailing_edge {
            NACA_A4_CLOSED_TE
        } else {
            NACA_A4_OPEN_TE
        };
        let m = params.max_camber_percent / 100.0;
        let p = params.max_camber_position_percent / 100.0;
        let t = params.thickness_percent / 100.0;

        let mut upper = Vec::with_capacity(half + 1);
        let mut lower = Vec::with_capacity(half + 1);
        for i in 0..=half {
            let x = (1.0 - (i as f64 * (PI / half as f64)).cos()) / 2.0;
            let (camber, gradient) = if x < p {
                (
                    (m / (p * p)) * (2.0 * p * x - x * x),
                    (2.0 * m / (p * p)) * (p - x),
                )
            } else {
                let q = (1.0 - p) * (1.0 - p);
                (
                    (m / q) * (1.0 - 2.0 * p + 2.0 * p * x - x * x),
                    (2.0 * m / q) * (p - x),
                )
            };
            let thickness = t / 0.2
                * (0.2969 * x.sqrt() + -0.126 * x + -0.3516 * x * x + 0.2843 * x * x * x
                    + a4 * x * x * x * x);
            let theta = gradient.atan();
            upper.push(Point::new(
                x - thickness * theta.sin(),
                camber + thickness * theta.cos(),
                0.0,
            ));
            lower.push(Point::new(
                x + thickness * theta.sin(),
                camber - thickness * theta.cos(),
                0.0,
            ));
        }

        // lower TE -> LE, then upper (LE shared) -> TE
        lower.reverse();
        let points: Vec<Point> = lower.into_iter().chain(upper.into_iter().skip(1)).collect();
        let panels = points.windows(2).map(|w| Panel::new(w[0], w[1])).collect();

        let mut airfoil = Airfoil::new(panels);
        airfoil.set_angle_of_attack(params.angle_of_attack_radians);
        Ok(airfoil)
    }

    /// Positional form of [`Airfoil::naca4`].
    pub fn naca4_airfoil(
        point_count: usize,
        max_camber_percent: f64,
        max_camber_position_percent: f64,
        thickness_percent: f64,
        closed_trailing_edge: bool,
        angle_of_attack_radians: f64,
    ) -> Result<Airfoil, AeroError> {
        Self::naca4(&Naca4Params {
            point_count,
            max_camber_percent,
            max_camber_position_percent,
            thickness_percent,
            closed_trailing_edge,
            angle_of_attack_radians,
        })
    }
}
