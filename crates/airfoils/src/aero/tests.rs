use std::f64::consts::{FRAC_PI_4, PI, TAU};

use super::panel_methods::*;
use super::*;
use crate::geometry::{Point, Vector};
use proptest::prelude::*;

/// Relative closeness at single-precision resolution, which is what the
/// reference values carry.
fn close(actual: f64, expected: f64) -> bool {
    let scale = expected.abs().max(1.0);
    (actual - expected).abs() <= 1e-6 * scale
}

fn assert_close(actual: f64, expected: f64) {
    assert!(close(actual, expected), "got {actual}, expected {expected}");
}

fn sample_panel() -> Panel {
    Panel::new(Point::new(1.25, 3.75, 0.0), Point::new(3.25, 2.5, 0.0))
}

fn square_airfoil() -> Airfoil {
    let c = [
        Point::new(2.0, 2.0, 0.0),
        Point::new(-2.0, 2.0, 0.0),
        Point::new(-2.0, -2.0, 0.0),
        Point::new(2.0, -2.0, 0.0),
    ];
    let panels = (0..4)
        .map(|i| {
            let mut p = Panel::new(c[i], c[(i + 1) % 4]);
            p.coefficient_of_pressure = (i + 1) as f64;
            p
        })
        .collect();
    Airfoil::new(panels)
}

fn naca_2412_200() -> Airfoil {
    Airfoil::naca4_airfoil(200, 2.0, 40.0, 12.0, false, 0.0).unwrap()
}

// ---- Panel ----

#[test]
fn new_panel_has_zero_flow_state() {
    let p = sample_panel();
    assert_eq!(p.start(), Point::new(1.25, 3.75, 0.0));
    assert_eq!(p.end(), Point::new(3.25, 2.5, 0.0));
    assert_eq!(p.alpha_angle, 0.0);
    assert_eq!(p.coefficient_of_pressure, 0.0);
    assert_eq!(p.gamma, 0.0);
    assert_eq!(p.lambda, 0.0);
    assert!(!p.is_rotated());
}

#[test]
fn panel_angles() {
    let mut p = sample_panel();
    assert_close(p.phi_angle(), 5.724585991836024);
    assert_close(p.delta_angle(), 1.0121970114513346);
    assert_close(p.beta_angle(), 1.0121970114513346);
    p.alpha_angle = FRAC_PI_4;
    assert_close(p.beta_angle(), 0.22679884805388628);
}

#[test]
fn phi_wraps_into_full_turn() {
    // pointing straight down: atan2 gives -π/2
    let p = Panel::new(Point::new(0.0, 1.0, 0.0), Point::new(0.0, 0.0, 0.0));
    assert_close(p.phi_angle(), 1.5 * PI);
    let d = p.delta_angle();
    assert!(d < 1e-12 || TAU - d < 1e-12);
    let q = Panel::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    assert_eq!(q.phi_angle(), 0.0);
}

#[test]
fn force_coefficients() {
    let mut p = sample_panel();
    p.coefficient_of_pressure = 10.0;
    assert_close(p.normal_force_coefficient(), -20.0);
    assert_close(p.axial_force_coefficient(), -12.5);
    p.alpha_angle = FRAC_PI_4;
    assert_close(p.normal_force_coefficient(), -5.3033008588991155);
    assert_close(p.axial_force_coefficient(), -22.98097038856279);
}

#[test]
fn rotated_panel_consumes_incidence() {
    let mut p = sample_panel();
    p.alpha_angle = FRAC_PI_4;
    p.gamma = 1.0;
    p.lambda = 2.0;
    p.coefficient_of_pressure = 10.0;
    let r = p.rotated_panel();
    assert_close(r.start().x, 3.5355339059327373);
    assert_close(r.start().y, 1.7677669529663689);
    assert_eq!(r.start().z, 0.0);
    assert_close(r.end().x, 4.065863991822648);
    assert_close(r.end().y, -0.5303300858899105);
    assert_eq!(r.alpha_angle, 0.0);
    assert_eq!(r.coefficient_of_pressure, 10.0);
    assert_eq!(r.gamma, 1.0);
    assert_eq!(r.lambda, 2.0);
    assert!(r.is_rotated());
}

#[test]
fn rotated_panel_is_idempotent() {
    let mut p = sample_panel();
    p.alpha_angle = FRAC_PI_4;
    let mut once = p.rotated_panel();
    assert!(once.is_rotated());
    assert_eq!(once, once.rotated_panel());
    // a fresh incidence on a body-frame panel must not rotate it again
    once.alpha_angle = 0.3;
    let twice = once.rotated_panel();
    assert!(twice.is_rotated());
    assert_eq!(twice.start(), once.start());
    assert_eq!(twice.end(), once.end());
    assert_eq!(twice.alpha_angle, 0.3);
}

#[test]
fn rotate_about_z_by_ten_radians() {
    let mut p = sample_panel();
    p.alpha_angle = FRAC_PI_4;
    p.gamma = 1.0;
    p.lambda = 2.0;
    p.coefficient_of_pressure = 10.0;
    let r = p.rotate(10.0, Vector::z_unit());
    assert_close(r.start().x, 0.9912397544895715);
    assert_close(r.start().y, -3.8265446226484094);
    assert_close(r.end().x, -1.366929692275046);
    assert_close(r.end().y, -3.8657474330815838);
    assert_eq!(r.alpha_angle, 0.0);
    assert_eq!((r.coefficient_of_pressure, r.gamma, r.lambda), (10.0, 1.0, 2.0));
}

#[test]
fn zero_rotation_keeps_geometry() {
    let p = sample_panel();
    assert_eq!(p.rotate(0.0, Vector::z_unit()), p);
}

// ---- Airfoil ----

#[test]
fn airfoil_setters() {
    let mut a = square_airfoil();
    assert_eq!(a.panel_count(), 4);
    a.set_angle_of_attack(10.0);
    assert!(a.iter().all(|p| p.alpha_angle == 10.0));
    a.set_gammas(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    a.set_lambdas(&[5.0, 6.0, 7.0, 8.0]).unwrap();
    for (i, p) in a.iter().enumerate() {
        assert_eq!(p.gamma, (i + 1) as f64);
        assert_eq!(p.lambda, (i + 5) as f64);
    }
    assert_eq!(a[2].gamma, 3.0);
}

#[test]
fn airfoil_setters_reject_wrong_length() {
    let mut a = square_airfoil();
    let err = a.set_gammas(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        AeroError::LengthMismatch {
            what: "gamma",
            expected: 4,
            got: 3
        }
    );
    assert!(a.set_lambdas(&[0.0; 5]).is_err());
    // untouched on failure
    assert!(a.iter().all(|p| p.gamma == 0.0 && p.lambda == 0.0));
}

#[test]
fn square_coefficients() {
    let mut a = square_airfoil();
    a.set_angle_of_attack(FRAC_PI_4);
    assert_close(a.coefficient_of_lift(), -8.0);
    assert_close(a.coefficient_of_drag(), -8.0);
    assert_close(a.coefficient_of_moment(), -2.0);
}

#[test]
fn square_rotated_panels() {
    let mut a = square_airfoil();
    a.set_angle_of_attack(FRAC_PI_4);
    let r = a.rotated_panels();
    let s = 2.82842712474619;
    let expected = [(s, 0.0), (0.0, s), (-s, 0.0), (0.0, -s)];
    for (p, (x, y)) in r.iter().zip(expected) {
        assert!((p.start().x - x).abs() < 1e-9);
        assert!((p.start().y - y).abs() < 1e-9);
        assert_eq!(p.start().z, 0.0);
    }
    let outline = a.rotated_outline();
    assert_eq!(outline.len(), 4);
    assert!(outline.contains(&Point::zero()));
}

#[test]
fn symmetric_aerodynamic_center() {
    let a = Airfoil::naca4_airfoil(200, 0.0, 0.0, 12.0, false, 0.0).unwrap();
    let c = a.aerodynamic_center().unwrap();
    assert_close(c.x, 0.25);
    assert!(c.y.abs() < 1e-12);
    assert_eq!(c.z, 0.0);
}

#[test]
fn rotated_aerodynamic_center() {
    let mut a = Airfoil::naca4_airfoil(200, 0.0, 0.0, 12.0, false, 0.0).unwrap();
    a.set_angle_of_attack(FRAC_PI_4);
    let c = a.rotated_aerodynamic_center().unwrap();
    assert_close(c.x, 0.17677669529663689);
    assert_close(c.y, -0.17677669529663687);
    assert_eq!(c.z, 0.0);
}

#[test]
fn aerodynamic_center_needs_panels() {
    assert_eq!(
        Airfoil::default().aerodynamic_center(),
        Err(AeroError::EmptyAirfoil)
    );
    assert_eq!(
        Airfoil::default().rotated_aerodynamic_center(),
        Err(AeroError::EmptyAirfoil)
    );
}

#[test]
fn aerodynamic_center_reports_missing_bracket() {
    // four panels around a square: no lower panel in the scan window spans x
    let a = square_airfoil();
    assert!(matches!(
        a.aerodynamic_center(),
        Err(AeroError::NoBracket { .. })
    ));
}

#[test]
fn aerodynamic_center_skips_vertical_bracket() {
    // lower panel 4 is vertical at x = 0.25 and is scanned first
    let pts = [
        (1.0, -0.05),
        (0.7, -0.05),
        (0.4, -0.05),
        (0.1, -0.05),
        (0.25, -0.04),
        (0.25, 0.0),
        (0.1, 0.05),
        (0.4, 0.05),
        (0.7, 0.05),
        (1.0, 0.05),
        (1.0, -0.05),
    ];
    let panels = pts
        .windows(2)
        .map(|w| Panel::new(Point::new(w[0].0, w[0].1, 0.0), Point::new(w[1].0, w[1].1, 0.0)))
        .collect();
    let a = Airfoil::new(panels);
    let c = a.aerodynamic_center().unwrap();
    assert_eq!(c.x, 0.25);
    assert!(c.y.abs() < 1e-12, "y = {}", c.y);
}

// ---- NACA generator ----

#[test]
fn naca_2412_geometry() {
    let a = naca_2412_200();
    assert_eq!(a.panel_count(), 200);
    assert_close(a[0].start().x, 0.99991618604);
    assert_close(a[0].start().y, -0.0012572093);
    assert_eq!(a[100].start(), Point::zero());
    assert_close(a[199].end().x, 1.0000838140);
    assert_close(a[199].end().y, 0.0012572093);
    // closed loop of consecutive panels
    for w in a.panels().windows(2) {
        assert_eq!(w[0].end(), w[1].start());
    }
}

#[test]
fn naca_closed_trailing_edge_meets() {
    let a = Airfoil::naca4_airfoil(100, 0.0, 0.0, 12.0, true, 0.0).unwrap();
    let first = a[0].start();
    let last = a[99].end();
    assert!((first.y - last.y).abs() < 1e-12);
    assert!(first.y.abs() < 1e-4);
}

#[test]
fn naca_sets_angle_of_attack() {
    let a = Airfoil::naca4_airfoil(40, 2.0, 40.0, 12.0, false, 0.1).unwrap();
    assert!(a.iter().all(|p| p.alpha_angle == 0.1));
}

#[test]
fn naca_rejects_out_of_range() {
    let bad = [
        (200, -1.0, 40.0, 12.0),
        (200, 10.0, 40.0, 12.0),
        (200, 2.0, -1.0, 12.0),
        (200, 2.0, 91.0, 12.0),
        (200, 2.0, 40.0, 0.0),
        (200, 2.0, 40.0, 41.0),
        (19, 2.0, 40.0, 12.0),
        (201, 2.0, 40.0, 12.0),
        (101, 2.0, 40.0, 12.0),
    ];
    for (n, m, p, t) in bad {
        let r = Airfoil::naca4_airfoil(n, m, p, t, false, 0.0);
        assert!(
            matches!(r, Err(AeroError::InvalidArgument { .. })),
            "accepted {n} {m} {p} {t}"
        );
    }
    assert!(Airfoil::naca4_airfoil(100, 2.0, 40.0, 12.0, false, f64::NAN).is_err());
}

#[test]
fn naca_designation_parsing() {
    let p = Naca4Params::from_designation("NACA 2412", 120).unwrap();
    assert_eq!(p.max_camber_percent, 2.0);
    assert_eq!(p.max_camber_position_percent, 40.0);
    assert_eq!(p.thickness_percent, 12.0);
    assert_eq!(p.point_count, 120);
    assert_eq!(Naca4Params::from_designation("0012", 100).unwrap().thickness_percent, 12.0);
    assert_eq!(
        Naca4Params::from_designation("naca4415", 100).unwrap().max_camber_percent,
        4.0
    );
    assert!(Naca4Params::from_designation("241", 100).is_err());
    assert!(Naca4Params::from_designation("24a2", 100).is_err());
    // thickness 00 is out of range
    assert!(Naca4Params::from_designation("2400", 100).is_err());
    assert!(Naca4Params::from_designation("2412", 99).is_err());
}

#[test]
fn default_params_build() {
    let params = Naca4Params::default();
    let a = Airfoil::naca4(&params).unwrap();
    assert_eq!(a.panel_count(), params.point_count);
}

// ---- Panel method ----

#[test]
fn source_vortex_naca_2412_regression() {
    let a = naca_2412_200();
    let b = compute_source_vortex(&a, 2.0).unwrap();
    assert_close(b.coefficient_of_lift(), 0.49225303229453155);
    assert_close(b.coefficient_of_drag(), 0.01698688438654304);
    assert_close(b.coefficient_of_moment(), -0.05526644272468364);
    // input untouched
    assert!(a.iter().all(|p| p.lambda == 0.0 && p.coefficient_of_pressure == 0.0));
    // one shared vortex strength
    let g = b[0].gamma;
    assert!(b.iter().all(|p| p.gamma == g));
    assert!(b.iter().all(|p| p.alpha_angle == 2.0 * PI / 180.0));
}

#[test]
fn streamline_regression() {
    let b = compute_source_vortex(&naca_2412_200(), 2.0).unwrap();
    let v = compute_streamline(b.panels(), Point::new(1.0, 1.0, 1.0)).unwrap();
    assert_close(v.x, 1.0336661);
    assert_close(v.y, 0.0094638597);
    assert_close(v.z, -0.06855532416961796);
}

#[test]
fn streamlines_match_single_evaluation() {
    let b = compute_source_vortex(&naca_2412_200(), 4.0).unwrap();
    let pts = [
        Point::new(-0.3, 0.2, 0.0),
        Point::new(0.5, 0.4, 0.0),
        Point::new(1.4, -0.3, 0.0),
    ];
    let many = compute_streamlines(b.panels(), &pts).unwrap();
    for (p, v) in pts.iter().zip(&many) {
        assert_eq!(*v, compute_streamline(b.panels(), *p).unwrap());
    }
}

#[test]
fn symmetric_section_at_zero_incidence_has_no_lift() {
    let a = Airfoil::naca4_airfoil(100, 0.0, 0.0, 12.0, false, 0.0).unwrap();
    let b = compute_source_vortex(&a, 0.0).unwrap();
    assert!(b.coefficient_of_lift().abs() < 1e-6);
    assert!(b[0].gamma.abs() < 1e-6);
}

#[test]
fn lift_grows_with_incidence() {
    let a = Airfoil::naca4_airfoil(100, 2.0, 40.0, 12.0, false, 0.0).unwrap();
    let lifts: Vec<f64> = [0.0, 2.0, 4.0, 6.0]
        .iter()
        .map(|&deg| compute_source_vortex(&a, deg).unwrap().coefficient_of_lift())
        .collect();
    assert!(lifts.windows(2).all(|w| w[1] > w[0]), "{lifts:?}");
}

#[test]
fn solved_summary_is_consistent() {
    let b = compute_source_vortex(&naca_2412_200(), 2.0).unwrap();
    let s = b.summary().unwrap();
    assert_eq!(s.lift, b.coefficient_of_lift());
    assert_eq!(s.moment, b.coefficient_of_moment());
    assert_close(s.aerodynamic_center.x, -s.moment / (2.0 * PI) + 0.25);
    // camber line of a 2412 sits slightly above the chord there
    assert!(s.aerodynamic_center.y > 0.0 && s.aerodynamic_center.y < 0.05);
    let back = s.rotated_aerodynamic_center.rotate(b[0].alpha_angle, Vector::z_unit());
    assert!((back.x - s.aerodynamic_center.x).abs() < 1e-12);
    assert!((back.y - s.aerodynamic_center.y).abs() < 1e-12);
}

#[test]
fn solver_rejects_bad_input() {
    assert_eq!(
        compute_source_vortex(&Airfoil::default(), 2.0),
        Err(AeroError::EmptyAirfoil)
    );
    assert!(matches!(
        compute_source_vortex(&naca_2412_200(), f64::INFINITY),
        Err(AeroError::InvalidArgument { .. })
    ));
    assert_eq!(
        compute_streamline(&[], Point::zero()),
        Err(AeroError::EmptyAirfoil)
    );
    assert_eq!(
        compute_streamlines(&[], &[Point::zero()]),
        Err(AeroError::EmptyAirfoil)
    );
}

#[test]
fn collinear_influence_keeps_only_log_term() {
    // control point on the source panel's own line: b = a², e clamps to 0
    let source = Panel::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    let target = Panel::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 0.0, 0.0));
    assert_eq!(normal_source_integral(&target, &source), 0.0);
    assert_eq!(tangential_vortex_integral(&target, &source), 0.0);
    // ∫₀¹ dξ / (2.5 − ξ) = ln(2.5 / 1.5)
    let j = tangential_source_integral(&target, &source);
    assert!((j - (2.5f64 / 1.5).ln()).abs() < 1e-12, "J = {j}");

    let on_line = Point::new(2.5, 0.0, 0.0);
    let mx = source_x_integral(&source, on_line);
    assert!((mx - 2.0f64.ln()).abs() < 1e-12, "Mx = {mx}");
    assert_eq!(source_y_integral(&source, on_line), 0.0);
}

#[test]
fn field_integrals_decay_far_away() {
    let p = sample_panel();
    let far = Point::new(1.0e4, 1.0e4, 0.0);
    assert!(source_x_integral(&p, far).abs() < 1e-3);
    assert!(source_y_integral(&p, far).abs() < 1e-3);
    assert!(vortex_x_integral(&p, far).abs() < 1e-3);
    assert_eq!(vortex_y_integral(&p, far), source_x_integral(&p, far));
}

#[test]
fn pressure_coefficient_of_freestream_is_zero() {
    assert_eq!(pressure_coefficient(1.0), 0.0);
    assert_eq!(pressure_coefficient(0.0), 1.0);
    assert_eq!(pressure_coefficient(2.0), -3.0);
}

proptest! {
    #[test]
    fn beta_and_force_split_preserve_magnitude(
        x0 in -5.0f64..5.0, y0 in -5.0f64..5.0,
        dx in 0.1f64..3.0, dy in -3.0f64..3.0,
        alpha in -1.0f64..1.0, cp in -5.0f64..5.0,
    ) {
        let mut p = Panel::new(Point::new(x0, y0, 0.0), Point::new(x0 + dx, y0 + dy, 0.0));
        p.alpha_angle = alpha;
        p.coefficient_of_pressure = cp;
        let cn = p.normal_force_coefficient();
        let ca = p.axial_force_coefficient();
        let full = cp.abs() * p.length();
        prop_assert!(((cn * cn + ca * ca).sqrt() - full).abs() < 1e-9 * full.max(1.0));
        prop_assert!((0.0..TAU).contains(&p.phi_angle()));
        prop_assert!((0.0..TAU).contains(&p.delta_angle()));
    }
}
