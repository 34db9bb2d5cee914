use std::f64::consts::TAU;
use std::ops::{Index, IndexMut};

use super::{AeroError, Panel};
use crate::cfg::QUARTER_CHORD;
use crate::geometry::{Point, Polygon, Vector};

/// Clockwise loop of panels around a unit-chord section.
///
/// Invariants:
/// - Panel count is fixed after construction; per-panel setters must be
///   given exactly one value per panel.
/// - Panels are stored in the flow frame; each carries its own angle of
///   attack, which the force integrals use individually.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Airfoil {
    panels: Vec<Panel>,
}

/// Coefficients of a solved airfoil, ready for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvedSection {
    pub lift: f64,
    pub drag: f64,
    pub moment: f64,
    /// Aerodynamic center in the flow frame.
    pub aerodynamic_center: Point,
    /// Aerodynamic center in the body frame (rotated by `−alpha`).
    pub rotated_aerodynamic_center: Point,
}

impl Airfoil {
    /// Airfoil from panels listed clockwise around the body.
    #[inline]
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    #[inline]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Mutable access to the panels; the count cannot change through a slice.
    #[inline]
    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    #[inline]
    pub fn into_panels(self) -> Vec<Panel> {
        self.panels
    }

    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// Set every panel's angle of attack.
    pub fn set_angle_of_attack(&mut self, radians: f64) {
        for panel in &mut self.panels {
            panel.alpha_angle = radians;
        }
    }

    /// Set vortex strengths by index.
    pub fn set_gammas(&mut self, gammas: &[f64]) -> Result<(), AeroError> {
        self.check_len("gamma", gammas.len())?;
        for (panel, &g) in self.panels.iter_mut().zip(gammas) {
            panel.gamma = g;
        }
        Ok(())
    }

    /// Set source strengths by index.
    pub fn set_lambdas(&mut self, lambdas: &[f64]) -> Result<(), AeroError> {
        self.check_len("lambda", lambdas.len())?;
        for (panel, &l) in self.panels.iter_mut().zip(lambdas) {
            panel.lambda = l;
        }
        Ok(())
    }

    fn check_len(&self, what: &'static str, got: usize) -> Result<(), AeroError> {
        if got != self.panels.len() {
            return Err(AeroError::LengthMismatch {
                what,
                expected: self.panels.len(),
                got,
            });
        }
        Ok(())
    }

    /// `Σ(C_n cos α − C_a sin α)`, each panel with its own α.
    pub fn coefficient_of_lift(&self) -> f64 {
        let mut normal = 0.0;
        let mut axial = 0.0;
        for p in &self.panels {
            normal += p.normal_force_coefficient() * p.alpha_angle.cos();
            axial += p.axial_force_coefficient() * p.alpha_angle.sin();
        }
        normal - axial
    }

    /// `Σ(C_n sin α − C_a cos α)`, each panel with its own α.
    pub fn coefficient_of_drag(&self) -> f64 {
        let mut normal = 0.0;
        let mut axial = 0.0;
        for p in &self.panels {
            normal += p.normal_force_coefficient() * p.alpha_angle.sin();
            axial += p.axial_force_coefficient() * p.alpha_angle.cos();
        }
        normal - axial
    }

    /// Pitching moment about the quarter chord.
    pub fn coefficient_of_moment(&self) -> f64 {
        self.panels
            .iter()
            .map(|p| {
                p.coefficient_of_pressure
                    * (p.mid().x - QUARTER_CHORD)
                    * p.length()
                    * p.phi_angle().cos()
            })
            .fold(0.0, |acc, m| acc + m)
    }

    /// Every panel in the body frame.
    pub fn rotated_panels(&self) -> Vec<Panel> {
        self.panels.iter().map(Panel::rotated_panel).collect()
    }

    /// Body-frame outline (panel start points) for masking field samples.
    pub fn rotated_outline(&self) -> Polygon {
        self.panels
            .iter()
            .map(|p| p.rotated_panel().start())
            .collect()
    }

    /// Aerodynamic center: `x = −C_m / 2π + 1/4`, y on the camber line.
    ///
    /// The camber y is the mean of the upper and lower surface heights at `x`,
    /// each linearly interpolated on the first panel that brackets `x` while
    /// scanning away from the leading edge, starting a fifth of each surface's
    /// panels past the leading-edge index. Panels with no x extent are skipped,
    /// so the interpolation never divides by zero. Requires a reasonably dense,
    /// monotonic-in-x distribution such as the NACA generator produces.
    pub fn aerodynamic_center(&self) -> Result<Point, AeroError> {
        let n = self.panels.len();
        if n < 2 {
            return Err(AeroError::EmptyAirfoil);
        }
        let x = -self.coefficient_of_moment() / TAU + QUARTER_CHORD;

        let mut upper: Option<(Point, Point)> = None;
        let mut lower: Option<(Point, Point)> = None;
        let upper_from = n / 2 + n / 10;
        let lower_from = n / 2 - n / 10;
        for (i, j) in (upper_from..n).zip((0..=lower_from).rev()) {
            if upper.is_some() && lower.is_some() {
                break;
            }
            let top = &self.panels[i];
            if upper.is_none()
                && top.start().x <= x
                && top.end().x >= x
                && top.start().x != top.end().x
            {
                upper = Some((top.start(), top.end()));
            }
            let bottom = &self.panels[j];
            if lower.is_none()
                && bottom.end().x <= x
                && bottom.start().x >= x
                && bottom.start().x != bottom.end().x
            {
                lower = Some((bottom.end(), bottom.start()));
            }
        }
        let (upper, lower) = match (upper, lower) {
            (Some(u), Some(l)) => (u, l),
            _ => return Err(AeroError::NoBracket { x }),
        };

        let y_upper = interpolate_y(upper, x);
        let y_lower = interpolate_y(lower, x);
        Ok(Point::new(x, (y_upper + y_lower) / 2.0, 0.0))
    }

    /// Aerodynamic center rotated by `−alpha` of the first panel.
    pub fn rotated_aerodynamic_center(&self) -> Result<Point, AeroError> {
        let alpha = self.panels.first().ok_or(AeroError::EmptyAirfoil)?.alpha_angle;
        Ok(self.aerodynamic_center()?.rotate(-alpha, Vector::z_unit()))
    }

    /// Lift, drag, moment and aerodynamic center in one pass.
    pub fn summary(&self) -> Result<SolvedSection, AeroError> {
        Ok(SolvedSection {
            lift: self.coefficient_of_lift(),
            drag: self.coefficient_of_drag(),
            moment: self.coefficient_of_moment(),
            aerodynamic_center: self.aerodynamic_center()?,
            rotated_aerodynamic_center: self.rotated_aerodynamic_center()?,
        })
    }
}

/// y on the line through `(less, more)` at `x` (`less.x <= x <= more.x`).
#[inline]
fn interpolate_y((less, more): (Point, Point), x: f64) -> f64 {
    less.y + (x - less.x) * (more.y - less.y) / (more.x - less.x)
}

impl Index<usize> for Airfoil {
    type Output = Panel;
    #[inline]
    fn index(&self, i: usize) -> &Panel {
        &self.panels[i]
    }
}

impl IndexMut<usize> for Airfoil {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Panel {
        &mut self.panels[i]
    }
}

impl<'a> IntoIterator for &'a Airfoil {
    type Item = &'a Panel;
    type IntoIter = std::slice::Iter<'a, Panel>;
    fn into_iter(self) -> Self::IntoIter {
        self.panels.iter()
    }
}

impl From<Vec<Panel>> for Airfoil {
    fn from(panels: Vec<Panel>) -> Self {
        Self::new(panels)
    }
}
