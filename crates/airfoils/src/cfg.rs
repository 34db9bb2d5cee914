//! Numeric constants shared across modules.
//!
//! Policy
//! - Defaults are fixed constants; nothing here is tuned at runtime. Callers
//!   that need different grids or airfoils pass parameter structs instead
//!   (`aero::Naca4Params`, `aero::field::FieldGrid`).

/// Chordwise station of the moment reference point (unit chord).
pub const QUARTER_CHORD: f64 = 0.25;

/// Winding-sum magnitude above which a point counts as inside a polygon.
/// A full turn sums to 2π, an outside point to ~0.
pub const INSIDE_WINDING_THRESHOLD: f64 = 1.0;

/// NACA generator bounds (inclusive).
pub const NACA_MAX_CAMBER_PERCENT: (f64, f64) = (0.0, 9.5);
pub const NACA_MAX_CAMBER_POSITION_PERCENT: (f64, f64) = (0.0, 90.0);
pub const NACA_THICKNESS_PERCENT: (f64, f64) = (1.0, 40.0);
pub const NACA_POINT_COUNT: (usize, usize) = (20, 200);

/// Last thickness-polynomial coefficient for an open / closed trailing edge.
pub(crate) const NACA_A4_OPEN_TE: f64 = -0.1015;
pub(crate) const NACA_A4_CLOSED_TE: f64 = -0.1036;
