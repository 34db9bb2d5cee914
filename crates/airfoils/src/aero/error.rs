use std::fmt;

use crate::linalg::LinalgError;

/// Errors surfaced by airfoil construction, the solver and post-processing.
#[derive(Clone, Debug, PartialEq)]
pub enum AeroError {
    /// A parameter is outside its documented range.
    InvalidArgument { reason: String },
    /// A per-panel array does not match the panel count.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// The operation needs at least one panel (two for the aerodynamic center).
    EmptyAirfoil,
    /// No upper/lower panel pair brackets the chordwise station `x`.
    NoBracket { x: f64 },
    /// The influence system could not be solved.
    Linalg(LinalgError),
}

impl AeroError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::LengthMismatch {
                what,
                expected,
                got,
            } => write!(
                f,
                "invalid {what} array size: expected {expected} values, got {got}"
            ),
            Self::EmptyAirfoil => write!(f, "airfoil has too few panels"),
            Self::NoBracket { x } => write!(
                f,
                "no upper/lower panel pair brackets x = {x} (panel distribution too sparse)"
            ),
            Self::Linalg(e) => write!(f, "influence system: {e}"),
        }
    }
}

impl std::error::Error for AeroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Linalg(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LinalgError> for AeroError {
    fn from(e: LinalgError) -> Self {
        Self::Linalg(e)
    }
}
