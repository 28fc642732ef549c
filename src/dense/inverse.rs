use log::{debug, trace};

use crate::error::{AlgebraError, Result};
use crate::utils::PIVOT_EPSILON;

use super::Matrix;

impl Matrix {
    /// A matrix is invertible when it is square, full rank and its
    /// determinant is at least [`PIVOT_EPSILON`] in magnitude.
    pub fn is_invertible(&self) -> bool {
        if !self.is_full_rank() || !self.is_square() {
            return false;
        }
        matches!(self.determinant(), Ok(det) if det.abs() >= PIVOT_EPSILON)
    }

    /// Returns the inverse of a square, invertible matrix.
    ///
    /// 2x2 matrices use the closed-form adjugate formula; every other size
    /// goes through Gauss-Jordan elimination with partial pivoting.
    /// Non-square input is not invertible and reports [`AlgebraError::Singular`].
    pub fn invert(&self) -> Result<Matrix> {
        if !self.is_invertible() {
            debug!("{}x{} matrix is not invertible", self.nrows, self.ncols);
            return Err(AlgebraError::Singular);
        }
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                op: "inverse",
                rows: self.nrows,
                cols: self.ncols,
            });
        }

        if self.nrows == 2 {
            debug!("inverting 2x2 matrix in closed form");
            return self.invert_2x2();
        }
        debug!(
            "inverting {}x{} matrix by Gauss-Jordan elimination",
            self.nrows, self.ncols
        );
        self.gauss_jordan()
    }

    fn invert_2x2(&self) -> Result<Matrix> {
        let (a, b, c, d) = (self.data[0], self.data[1], self.data[2], self.data[3]);
        let det = a * d - b * c;
        if det.abs() < PIVOT_EPSILON {
            return Err(AlgebraError::Singular);
        }
        let inv_det = 1.0 / det;
        Ok(Matrix {
            data: vec![d * inv_det, -b * inv_det, -c * inv_det, a * inv_det],
            nrows: 2,
            ncols: 2,
        })
    }

    fn gauss_jordan(&self) -> Result<Matrix> {
        let n = self.nrows;
        let mut work = self.clone();
        let mut inverse = Matrix::identity(n);

        for i in 0..n {
            // Largest magnitude at or below the diagonal; ties keep the upper row.
            let mut pivot = i;
            let mut max_val = work[(i, i)].abs();
            for r in i + 1..n {
                let candidate = work[(r, i)].abs();
                if candidate > max_val {
                    max_val = candidate;
                    pivot = r;
                }
            }
            if max_val < PIVOT_EPSILON {
                debug!("no usable pivot in column {}", i);
                return Err(AlgebraError::Singular);
            }

            if pivot != i {
                trace!("column {}: swapping rows {} and {}", i, i, pivot);
                work.swap_rows(i, pivot);
                inverse.swap_rows(i, pivot);
            }

            let pivot_val = work[(i, i)];
            for col in 0..n {
                work[(i, col)] /= pivot_val;
                inverse[(i, col)] /= pivot_val;
            }

            for row in (0..n).filter(|&row| row != i) {
                let factor = work[(row, i)];
                for col in 0..n {
                    work[(row, col)] -= factor * work[(i, col)];
                    inverse[(row, col)] -= factor * inverse[(i, col)];
                }
            }
        }

        Ok(inverse)
    }
}
