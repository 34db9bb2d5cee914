//! Off-body flow sampling on a regular grid.
//!
//! The solved airfoil is viewed in the body frame (panels rotated by `−alpha`,
//! so the freestream arrives at the body's incidence). Grid points inside the
//! rotated outline are masked; every other point gets a velocity and pressure
//! from `panel_methods::compute_streamline`.

use rayon::prelude::*;

use super::panel_methods::compute_streamline;
use super::{AeroError, Airfoil, Panel};
use crate::geometry::{Point, Polygon, Vector};

/// Regular sampling grid, row-major from `(x_min, y_min)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGrid {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
    pub columns: usize,
    pub rows: usize,
}

impl Default for FieldGrid {
    /// `[-0.5, 1.5) × [-0.5, 0.5)` at 25 × 20 samples around a unit chord.
    fn default() -> Self {
        Self {
            x_min: -0.5,
            y_min: -0.5,
            width: 2.0,
            height: 1.0,
            columns: 25,
            rows: 20,
        }
    }
}

impl FieldGrid {
    pub fn validate(&self) -> Result<(), AeroError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(AeroError::invalid("field grid needs at least one row and column"));
        }
        let extents = [self.x_min, self.y_min, self.width, self.height];
        if !extents.iter().all(|v| v.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return Err(AeroError::invalid(
                "field grid extents must be finite with positive width and height",
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample point at `(row, col)`.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Point {
        let dx = self.width / self.columns as f64;
        let dy = self.height / self.rows as f64;
        Point::new(
            col as f64 * dx + self.x_min,
            row as f64 * dy + self.y_min,
            0.0,
        )
    }

    /// All sample points, row by row.
    pub fn points(&self) -> Vec<Point> {
        (0..self.rows)
            .flat_map(|r| (0..self.columns).map(move |c| self.point(r, c)))
            .collect()
    }
}

/// One grid sample; `velocity` is `None` inside the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    pub point: Point,
    /// `(v_x, v_y, Cp)` as returned by `compute_streamline`.
    pub velocity: Option<Vector>,
}

impl FieldSample {
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.velocity.is_none()
    }

    #[inline]
    pub fn pressure_coefficient(&self) -> Option<f64> {
        self.velocity.map(|v| v.z)
    }
}

/// Sampled flow around a body together with the grid that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    pub grid: FieldGrid,
    pub samples: Vec<FieldSample>,
    /// Body-frame outline used for masking.
    pub outline: Polygon,
}

impl FlowField {
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> Option<&FieldSample> {
        if row >= self.grid.rows || col >= self.grid.columns {
            return None;
        }
        self.samples.get(row * self.grid.columns + col)
    }

    pub fn masked_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_masked()).count()
    }

    /// Lowest pressure coefficient over unmasked samples.
    pub fn min_pressure_coefficient(&self) -> Option<f64> {
        self.samples
            .iter()
            .filter_map(FieldSample::pressure_coefficient)
            .reduce(f64::min)
    }
}

/// Evaluate the flow around a solved airfoil on `grid`.
pub fn sample_flow_field(airfoil: &Airfoil, grid: &FieldGrid) -> Result<FlowField, AeroError> {
    grid.validate()?;
    if airfoil.is_empty() {
        return Err(AeroError::EmptyAirfoil);
    }
    let panels = airfoil.rotated_panels();
    let outline: Polygon = panels.iter().map(Panel::start).collect();

    let samples = grid
        .points()
        .into_par_iter()
        .map(|point| {
            if outline.contains(&point) {
                return Ok(FieldSample {
                    point,
                    velocity: None,
                });
            }
            compute_streamline(&panels, point).map(|v| FieldSample {
                point,
                velocity: Some(v),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let field = FlowField {
        grid: *grid,
        samples,
        outline,
    };
    tracing::debug!(
        samples = field.samples.len(),
        masked = field.masked_count(),
        "sampled flow field"
    );
    Ok(field)
}
