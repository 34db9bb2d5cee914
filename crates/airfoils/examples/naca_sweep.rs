//! Angle-of-attack sweep for a single NACA 4-digit section.
//!
//! Purpose
//! - Show the end-to-end path: generate the section, solve the source-vortex
//!   system per incidence, read lift/drag/moment and the aerodynamic center.
//! - Give a quick sanity check on lift slope (thin-airfoil theory predicts
//!   roughly 2π per radian).
//!
//! Usage
//!   cargo run -p airfoils --example naca_sweep -- 4412 160

use std::time::Instant;

use airfoils::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let code = args.next().unwrap_or_else(|| "2412".to_string());
    let points: usize = args
        .next()
        .map(|s| s.parse().expect("point count must be an integer"))
        .unwrap_or(100);

    let params = Naca4Params::from_designation(&code, points).expect("valid NACA designation");
    let airfoil = Airfoil::naca4(&params).expect("airfoil generation");
    println!("section=NACA {code} panels={}", airfoil.panel_count());

    let mut lifts = Vec::new();
    for alpha in [-4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0] {
        let start = Instant::now();
        let solved = compute_source_vortex(&airfoil, alpha).expect("solver");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        let s = solved.summary().expect("summary");
        println!(
            "alpha={alpha:>5.1} cl={:.5} cd={:.5} cm={:.5} ac=({:.4}, {:.4}) solve_ms={elapsed:.2}",
            s.lift, s.drag, s.moment, s.aerodynamic_center.x, s.aerodynamic_center.y
        );
        lifts.push((alpha, s.lift));
    }

    let (a0, l0) = lifts[0];
    let (a1, l1) = lifts[lifts.len() - 1];
    let slope = (l1 - l0) / ((a1 - a0) * std::f64::consts::PI / 180.0);
    println!("lift_slope_per_rad={slope:.4} (2pi={:.4})", std::f64::consts::TAU);
}
