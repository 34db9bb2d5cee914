//! Source-vortex panel method for 2D incompressible potential flow.
//!
//! Model
//! - Each panel carries a uniform source of strength `lambda_j`; all panels
//!   share one uniform vortex strength `gamma`.
//! - Flow tangency at every panel midpoint gives `n` equations; the Kutta
//!   condition (equal tangential velocity on the first and last panel) closes
//!   the `(n+1) × (n+1)` system, solved with `linalg::lower_upper_decomposition`.
//! - Surface speed is freestream-tangential plus source and vortex induced
//!   terms; `Cp = 1 − v²`.
//!
//! Influence integrals
//! - All integrals share the closed form
//!   `c/2 · ln((s² + 2as + b)/b) + (d − ac)/e · (atan((s+a)/e) − atan(a/e))`
//!   where `s` is the source panel length and `a, b, c, d, e` encode the
//!   relative geometry. `e = sqrt(b − a²)` is clamped to 0 when the
//!   discriminant is not positive, which drops the arctangent term.
//! - `I_ij` (normal, source), `J_ij` (tangential, source) and `L_ij`
//!   (tangential, vortex) couple control point `i` to panel `j`; `M_x, M_y`
//!   (source) and `N_x, N_y` (vortex) couple an arbitrary field point to a
//!   panel.
//!
//! Rows of the system and field points are independent, so both loops run on
//! rayon; results do not depend on scheduling.

use std::f64::consts::PI;

use rayon::prelude::*;

use super::{AeroError, Airfoil, Panel};
use crate::geometry::{Point, Vector};
use crate::linalg::{lower_upper_decomposition, Matrix};

#[inline]
fn find_a(p1: Point, p2: Point, phi: f64) -> f64 {
    -(p1.x - p2.x) * phi.cos() - (p1.y - p2.y) * phi.sin()
}

#[inline]
fn find_b(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x) * (p1.x - p2.x) + (p1.y - p2.y) * (p1.y - p2.y)
}

/// `(x1 − x2) cos φ + (y1 − y2) sin φ`: offset along direction `phi`.
#[inline]
fn along(p1: Point, p2: Point, phi: f64) -> f64 {
    (p1.x - p2.x) * phi.cos() + (p1.y - p2.y) * phi.sin()
}

/// `−(x1 − x2) sin φ + (y1 − y2) cos φ`: offset across direction `phi`.
#[inline]
fn across(p1: Point, p2: Point, phi: f64) -> f64 {
    -(p1.x - p2.x) * phi.sin() + (p1.y - p2.y) * phi.cos()
}

#[inline]
fn find_e(a: f64, b: f64) -> f64 {
    if b - a * a > 0.0 {
        (b - a * a).sqrt()
    } else {
        0.0
    }
}

/// With `e == 0` the point lies on the source panel's line, where `d − ac`
/// vanishes as well; only the logarithmic term remains.
#[inline]
fn geometric_integral(a: f64, b: f64, c: f64, d: f64, e: f64, s: f64) -> f64 {
    let log_term = (c / 2.0) * ((s * s + 2.0 * a * s + b) / b).ln();
    if e == 0.0 {
        return log_term;
    }
    log_term + ((d - a * c) / e) * (((s + a) / e).atan() - (a / e).atan())
}

/// `I_ij`: normal velocity at the midpoint of `i` induced by the source on `j`.
pub fn normal_source_integral(i: &Panel, j: &Panel) -> f64 {
    let (mid, start) = (i.mid(), j.start());
    let (phi_i, phi_j) = (i.phi_angle(), j.phi_angle());
    let a = find_a(mid, start, phi_j);
    let b = find_b(mid, start);
    let c = (phi_i - phi_j).sin();
    let d = across(mid, start, phi_i);
    geometric_integral(a, b, c, d, find_e(a, b), j.length())
}

/// `J_ij`: tangential velocity at the midpoint of `i` induced by the source on `j`.
pub fn tangential_source_integral(i: &Panel, j: &Panel) -> f64 {
    let (mid, start) = (i.mid(), j.start());
    let (phi_i, phi_j) = (i.phi_angle(), j.phi_angle());
    let a = find_a(mid, start, phi_j);
    let b = find_b(mid, start);
    let c = -(phi_i - phi_j).cos();
    let d = along(mid, start, phi_i);
    geometric_integral(a, b, c, d, find_e(a, b), j.length())
}

/// `L_ij`: tangential velocity at the midpoint of `i` induced by the vortex on `j`.
pub fn tangential_vortex_integral(i: &Panel, j: &Panel) -> f64 {
    let (mid, start) = (i.mid(), j.start());
    let (phi_i, phi_j) = (i.phi_angle(), j.phi_angle());
    let a = find_a(mid, start, phi_j);
    let b = find_b(mid, start);
    let c = (phi_j - phi_i).sin();
    let d = -across(mid, start, phi_i);
    geometric_integral(a, b, c, d, find_e(a, b), j.length())
}

/// Shared `a, b` terms and panel data for the field-point integrals.
#[inline]
fn field_terms(panel: &Panel, point: Point) -> (Point, f64, f64, f64) {
    let mid = panel.mid();
    let phi = panel.phi_angle();
    (mid, phi, find_a(point, mid, phi), find_b(point, mid))
}

/// `M_x`: x velocity at `point` from a unit source on `panel`.
pub fn source_x_integral(panel: &Panel, point: Point) -> f64 {
    let (mid, phi, a, b) = field_terms(panel, point);
    let c = -phi.cos();
    let d = point.x - mid.x;
    geometric_integral(a, b, c, d, find_e(a, b), panel.length())
}

/// `N_x`: x velocity kernel at `point` for the vortex on `panel`.
pub fn vortex_x_integral(panel: &Panel, point: Point) -> f64 {
    let (mid, phi, a, b) = field_terms(panel, point);
    let c = phi.sin();
    let d = -(point.y - mid.y);
    geometric_integral(a, b, c, d, find_e(a, b), panel.length())
}

/// `M_y`: y velocity at `point` from a unit source on `panel`.
pub fn source_y_integral(panel: &Panel, point: Point) -> f64 {
    let (mid, phi, a, b) = field_terms(panel, point);
    let c = -phi.sin();
    let d = point.y - mid.y;
    geometric_integral(a, b, c, d, find_e(a, b), panel.length())
}

/// `N_y`: y velocity kernel at `point` for the vortex on `panel`.
///
/// Evaluates the same kernel as `M_x`.
pub fn vortex_y_integral(panel: &Panel, point: Point) -> f64 {
    source_x_integral(panel, point)
}

/// `Cp = 1 − v²` for a speed normalised by the freestream.
#[inline]
pub fn pressure_coefficient(velocity: f64) -> f64 {
    1.0 - velocity * velocity
}

/// Solve source strengths, the shared vortex strength and surface pressure
/// coefficients at `angle_of_attack_degrees`.
///
/// Returns a new airfoil with every panel's `alpha_angle`, `lambda`, `gamma`
/// and `coefficient_of_pressure` set; `airfoil` is untouched.
pub fn compute_source_vortex(
    airfoil: &Airfoil,
    angle_of_attack_degrees: f64,
) -> Result<Airfoil, AeroError> {
    if airfoil.is_empty() {
        return Err(AeroError::EmptyAirfoil);
    }
    if !angle_of_attack_degrees.is_finite() {
        return Err(AeroError::invalid("angle of attack must be finite"));
    }
    let mut solved = airfoil.clone();
    solved.set_angle_of_attack(angle_of_attack_degrees * PI / 180.0);
    let count = solved.panel_count();

    let (a, b) = assemble_system(solved.panels());
    let x = lower_upper_decomposition(&a, &b)?;

    let lambdas: Vec<f64> = (0..count).map(|i| x[(i, 0)]).collect();
    let gamma = x[(count, 0)];
    solved.set_lambdas(&lambdas)?;
    solved.set_gammas(&vec![gamma; count])?;
    tracing::debug!(panels = count, gamma, "solved source-vortex system");

    let pressures = surface_pressures(solved.panels());
    for (panel, cp) in solved.panels_mut().iter_mut().zip(pressures) {
        panel.coefficient_of_pressure = cp;
    }
    Ok(solved)
}

/// Tangency rows for every panel plus the Kutta row.
fn assemble_system(panels: &[Panel]) -> (Matrix, Matrix) {
    let count = panels.len();
    let rows: Vec<(Vec<f64>, f64)> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut row = vec![0.0; count + 1];
            let mut sum_k = 0.0;
            for (j, pj) in panels.iter().enumerate() {
                if i == j {
                    row[j] = PI;
                } else {
                    row[j] = normal_source_integral(&panels[i], pj);
                    sum_k += tangential_source_integral(&panels[i], pj);
                }
            }
            row[count] = -sum_k;
            (row, -2.0 * PI * panels[i].beta_angle().cos())
        })
        .collect();

    let mut a = Matrix::zeros(count + 1, count + 1);
    let mut b = Matrix::zeros(count + 1, 1);
    for (i, (row, rhs)) in rows.into_iter().enumerate() {
        for (j, v) in row.into_iter().enumerate() {
            a[(i, j)] = v;
        }
        b[(i, 0)] = rhs;
    }

    let first = &panels[0];
    let last = &panels[count - 1];
    let mut sum_l = 0.0;
    for (i, pi) in panels.iter().enumerate() {
        let mut sum = 0.0;
        if i != 0 {
            sum += tangential_source_integral(first, pi);
            sum_l += tangential_vortex_integral(first, pi);
        }
        if i != count - 1 {
            sum += tangential_source_integral(last, pi);
            sum_l += tangential_vortex_integral(last, pi);
        }
        a[(count, i)] = sum;
    }
    a[(count, count)] = -sum_l + 2.0 * PI;
    b[(count, 0)] = -2.0 * PI * (first.beta_angle().sin() + last.beta_angle().sin());
    (a, b)
}

/// Surface `Cp` per panel from solved strengths.
fn surface_pressures(panels: &[Panel]) -> Vec<f64> {
    panels
        .par_iter()
        .enumerate()
        .map(|(i, pi)| {
            let mut sum_j = 0.0;
            let mut sum_l = 0.0;
            for (j, pj) in panels.iter().enumerate() {
                if i != j {
                    sum_j += pj.lambda * tangential_source_integral(pi, pj);
                    sum_l += tangential_vortex_integral(pi, pj);
                }
            }
            let v = pi.beta_angle().sin() + (1.0 / (2.0 * PI)) * sum_j + pi.gamma / 2.0
                - (pi.gamma / (2.0 * PI)) * sum_l;
            pressure_coefficient(v)
        })
        .collect()
}

/// Velocity and pressure at an arbitrary field point.
///
/// Superposes the unit freestream (at the first panel's angle of attack) with
/// every panel's source and vortex contribution. Returns `(v_x, v_y, Cp)` with
/// `Cp = 1 − |v|²` carried in `z`.
pub fn compute_streamline(panels: &[Panel], point: Point) -> Result<Vector, AeroError> {
    let first = panels.first().ok_or(AeroError::EmptyAirfoil)?;
    let mut lambda_mx = 0.0;
    let mut gamma_nx = 0.0;
    let mut lambda_my = 0.0;
    let mut gamma_ny = 0.0;
    for panel in panels {
        lambda_mx += panel.lambda * source_x_integral(panel, point) / (2.0 * PI);
        gamma_nx += -panel.gamma * vortex_x_integral(panel, point) / (2.0 * PI);
        lambda_my += panel.lambda * source_y_integral(panel, point) / (2.0 * PI);
        gamma_ny += -panel.gamma * vortex_y_integral(panel, point) / (2.0 * PI);
    }
    let vx = first.alpha_angle.cos() + lambda_mx + gamma_nx;
    let vy = first.alpha_angle.sin() + lambda_my + gamma_ny;
    let speed = Vector::new(vx, vy, 0.0).magnitude();
    Ok(Vector::new(vx, vy, pressure_coefficient(speed)))
}

/// [`compute_streamline`] for many points, evaluated in parallel. Output order
/// matches `points`.
pub fn compute_streamlines(panels: &[Panel], points: &[Point]) -> Result<Vec<Vector>, AeroError> {
    if panels.is_empty() {
        return Err(AeroError::EmptyAirfoil);
    }
    points
        .par_iter()
        .map(|&p| compute_streamline(panels, p))
        .collect()
}
