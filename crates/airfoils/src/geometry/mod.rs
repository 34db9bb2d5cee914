//! Geometric primitives in 3D space (the solver only uses the x/y plane).
//!
//! - `Point`: a position; `Point - Point` yields the `Vector` from rhs to lhs.
//! - `Vector`: a directed difference with magnitude/unit/axis helpers.
//! - `LineSegment`: an immutable start/end pair with derived midpoint, delta,
//!   length and a rotated copy.
//! - `Polygon`: closed outline with a winding-number interior test.
//!
//! Conventions
//! - All values are plain `Copy` data (except `Polygon`, which owns its
//!   vertices); operations return new values and never mutate in place.
//! - Rotations are axis-angle (Rodrigues) about an axis through the origin.

mod point;
mod polygon;
mod segment;

pub use point::{Point, Vector};
pub use polygon::Polygon;
pub use segment::LineSegment;
