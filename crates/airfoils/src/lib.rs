//! 2D potential flow around airfoils via the source-and-vortex panel method.
//!
//! Layout
//! - `geometry`: points, vectors, line segments and the body-mask polygon.
//! - `linalg`: small dense matrix type with a Doolittle LU solve.
//! - `aero`: panels, airfoils (NACA 4-digit generator), the panel-method solver
//!   and off-body flow sampling.
//!
//! Typical use: build an `Airfoil` with `Airfoil::naca4`, solve it with
//! `aero::panel_methods::compute_source_vortex`, then read coefficients off the
//! solved airfoil and sample the surrounding flow with `aero::field`.

pub mod aero;
pub mod cfg;
pub mod geometry;
pub mod linalg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::aero::field::{sample_flow_field, FieldGrid, FieldSample, FlowField};
    pub use crate::aero::panel_methods::{
        compute_source_vortex, compute_streamline, compute_streamlines,
    };
    pub use crate::aero::{AeroError, Airfoil, Naca4Params, Panel, SolvedSection};
    pub use crate::geometry::{LineSegment, Point, Polygon, Vector};
    pub use crate::linalg::{lower_upper_decomposition, LinalgError, Matrix};
}
