use nalgebra::DMatrix;
use std::ops::{Index, IndexMut, Mul};

use super::LinalgError;
use crate::geometry::Point;

/// Dense `rows × cols` matrix of `f64`.
///
/// Invariants:
/// - Shape is fixed at construction; there is no resize.
/// - Indexing with `(row, col)` panics out of bounds like any slice; the
///   arithmetic methods check shapes and return `LinalgError`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Zero-filled `rows × cols` matrix.
    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::zeros(rows, cols),
        }
    }

    #[inline]
    pub fn identity(size: usize) -> Self {
        Self {
            data: DMatrix::identity(size, size),
        }
    }

    /// Build from row-major values; `values.len()` must equal `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Result<Self, LinalgError> {
        if values.len() != rows * cols {
            return Err(LinalgError::ShapeMismatch {
                op: "from_row_slice",
                lhs: (rows, cols),
                rhs: (values.len(), 1),
            });
        }
        Ok(Self {
            data: DMatrix::from_row_slice(rows, cols, values),
        })
    }

    /// Column vector `[x, y, z]ᵀ`.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self {
            data: DMatrix::from_column_slice(3, 1, &[p.x, p.y, p.z]),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.data.row(i).iter().copied().collect()
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.data.column(j).iter().copied().collect()
    }

    /// Entrywise sum; shapes must match exactly.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::ShapeMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self {
            data: &self.data + &rhs.data,
        })
    }

    #[inline]
    pub fn scale(&self, s: f64) -> Matrix {
        Self {
            data: &self.data * s,
        }
    }

    /// Matrix product `self · rhs`; requires `self.cols() == rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols() != rhs.rows() {
            return Err(LinalgError::ShapeMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self {
            data: &self.data * &rhs.data,
        })
    }

    /// Point from an exactly 3×1 matrix.
    pub fn to_point(&self) -> Result<Point, LinalgError> {
        if self.shape() != (3, 1) {
            return Err(LinalgError::ShapeMismatch {
                op: "to_point",
                lhs: self.shape(),
                rhs: (3, 1),
            });
        }
        Ok(Point::new(
            self.data[(0, 0)],
            self.data[(1, 0)],
            self.data[(2, 0)],
        ))
    }

    /// Solve `self · x = b` with `lower_upper_decomposition`.
    #[inline]
    pub fn solve_lu(&self, b: &Matrix) -> Result<Matrix, LinalgError> {
        super::lower_upper_decomposition(self, b)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &f64 {
        &self.data[idx]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut f64 {
        &mut self.data[idx]
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl From<Point> for Matrix {
    #[inline]
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}
