//! Airfoil aerodynamics: panels, airfoil aggregates and the panel method.
//!
//! Purpose
//! - Model an airfoil as a clockwise loop of straight `Panel`s carrying flow
//!   state (incidence, pressure coefficient, source/vortex strengths).
//! - Solve the linear-strength-source / constant-vortex panel method for the
//!   strengths and surface pressures (`panel_methods`), then integrate lift,
//!   drag and moment coefficients on the solved `Airfoil`.
//! - Sample the off-body flow on a grid, masking points inside the body
//!   (`field`).
//!
//! Angle conventions (radians)
//! - `phi`: +x axis to the panel direction (start → end), in `[0, 2π)`.
//! - `delta`: `phi + π/2`, the outward normal, in `[0, 2π)`.
//! - `beta`: `delta − alpha`, not wrapped (only its sine/cosine are used).
//!
//! Frames
//! - Panels are stored in the flow frame with the angle of attack held per
//!   panel. `Panel::rotated_panel` and `Airfoil::rotated_panels` give the body
//!   frame view (rotated by `−alpha` about z); the rotation is applied at most
//!   once per panel.

mod airfoil;
mod error;
pub mod field;
mod naca;
mod panel;
pub mod panel_methods;

pub use airfoil::{Airfoil, SolvedSection};
pub use error::AeroError;
pub use naca::Naca4Params;
pub use panel::Panel;

#[cfg(test)]
mod tests;
