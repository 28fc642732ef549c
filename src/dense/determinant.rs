use log::debug;

use crate::error::{AlgebraError, Result};
use crate::utils::PIVOT_EPSILON;

use super::Matrix;

/// Algorithm used by [`Matrix::determinant_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminantMethod {
    /// Recursive cofactor expansion along the first row. Factorial time.
    #[default]
    Laplace,
    /// LU decomposition with partial pivoting. Cubic time.
    Lu,
}

impl Matrix {
    /// Determinant by Laplace expansion.
    ///
    /// The 0x0 matrix has determinant `0.0`.
    pub fn determinant(&self) -> Result<f64> {
        self.determinant_with(DeterminantMethod::Laplace)
    }

    pub fn determinant_with(&self, method: DeterminantMethod) -> Result<f64> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                op: "determinant",
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        debug!(
            "determinant of {}x{} matrix using {:?}",
            self.nrows, self.ncols, method
        );
        Ok(match method {
            DeterminantMethod::Laplace => self.laplace(),
            DeterminantMethod::Lu => self.lu_determinant(),
        })
    }

    /// Copy of the matrix with row `row` and column `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if row >= self.nrows || col >= self.ncols {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let data = self
            .rows()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        }
    }

    // Square input only.
    fn laplace(&self) -> f64 {
        match self.nrows {
            0 => 0.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = 0.0;
                for (col, &v) in self.row(0).iter().enumerate() {
                    let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * v * self.minor_unchecked(0, col).laplace();
                }
                det
            }
        }
    }

    // Square input only.
    fn lu_determinant(&self) -> f64 {
        let n = self.nrows;
        if n == 0 {
            return 0.0;
        }

        let mut lu = self.clone();
        let mut det = 1.0;
        for i in 0..n {
            let pivot = (i..n)
                .max_by(|&a, &b| lu[(a, i)].abs().total_cmp(&lu[(b, i)].abs()))
                .unwrap_or(i);
            if lu[(pivot, i)].abs() < PIVOT_EPSILON {
                return 0.0;
            }
            if pivot != i {
                lu.swap_rows(pivot, i);
                det = -det;
            }

            let p = lu[(i, i)];
            det *= p;
            for r in i + 1..n {
                let factor = lu[(r, i)] / p;
                for c in i..n {
                    lu[(r, c)] -= factor * lu[(i, c)];
                }
            }
        }
        det
    }
}
