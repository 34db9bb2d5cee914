use super::{LinalgError, Matrix};

/// Solve `a · x = b` by Doolittle LU factorisation (unit lower triangle, no
/// pivoting), then `L y = b` forward and `U x = y` backward.
///
/// Pre: `a` square, `b` a single column with `a.rows()` rows.
/// Post: `x` as an `n × 1` matrix, or `SingularPivot` if some `u_ii` is
/// exactly zero or non-finite. Small but nonzero pivots are divided through.
pub fn lower_upper_decomposition(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if b.cols() != 1 {
        return Err(LinalgError::NotColumn { cols: b.cols() });
    }
    if a.rows() != b.rows() {
        return Err(LinalgError::ShapeMismatch {
            op: "lower_upper_decomposition",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let order = a.rows();
    // L (strictly below the diagonal) and U (on and above) share storage.
    let mut lu = Matrix::zeros(order, order);
    for i in 0..order {
        for j in i..order {
            let mut sum = 0.0;
            for k in 0..i {
                sum += lu[(i, k)] * lu[(k, j)];
            }
            lu[(i, j)] = a[(i, j)] - sum;
        }
        let pivot = lu[(i, i)];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(LinalgError::SingularPivot { index: i });
        }
        for j in i + 1..order {
            let mut sum = 0.0;
            for k in 0..i {
                sum += lu[(j, k)] * lu[(k, i)];
            }
            lu[(j, i)] = (1.0 / pivot) * (a[(j, i)] - sum);
        }
    }

    let mut y = Matrix::zeros(order, 1);
    for i in 0..order {
        let mut sum = 0.0;
        for k in 0..i {
            sum += lu[(i, k)] * y[(k, 0)];
        }
        y[(i, 0)] = b[(i, 0)] - sum;
    }

    let mut x = Matrix::zeros(order, 1);
    for i in (0..order).rev() {
        let mut sum = 0.0;
        for k in i + 1..order {
            sum += lu[(i, k)] * x[(k, 0)];
        }
        x[(i, 0)] = (1.0 / lu[(i, i)]) * (y[(i, 0)] - sum);
    }
    Ok(x)
}
