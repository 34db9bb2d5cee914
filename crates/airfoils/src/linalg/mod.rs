//! Small dense linear algebra for the panel solver.
//!
//! - `Matrix`: fixed-shape `m × n` grid of reals, zero-initialised, addressed
//!   as `(row, column)`. Shape-sensitive operations validate and return
//!   `LinalgError` instead of panicking.
//! - `lower_upper_decomposition`: Doolittle LU without pivoting, followed by
//!   forward and backward substitution.
//!
//! Assumptions
//! - The LU solve does not pivot. Systems whose leading principal minors
//!   vanish are rejected with `LinalgError::SingularPivot` rather than divided
//!   through. Panel-method systems have a dominant diagonal (π) and never hit
//!   this in practice.

mod lu;
mod matrix;

pub use lu::lower_upper_decomposition;
pub use matrix::Matrix;

use std::fmt;

/// Errors surfaced by matrix construction and arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`; shapes are `(rows, cols)`.
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// The coefficient matrix of a solve is not square.
    NotSquare { rows: usize, cols: usize },
    /// The right-hand side of a solve is not a single column.
    NotColumn { cols: usize },
    /// A zero (or non-finite) pivot appeared at `index` during factorisation.
    SingularPivot { index: usize },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { op, lhs, rhs } => write!(
                f,
                "shape mismatch in {op}: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "coefficient matrix must be square, got {rows}x{cols}")
            }
            Self::NotColumn { cols } => {
                write!(f, "right-hand side must have exactly one column, got {cols}")
            }
            Self::SingularPivot { index } => {
                write!(f, "zero pivot at row {index} (leading principal minor vanishes)")
            }
        }
    }
}

impl std::error::Error for LinalgError {}
