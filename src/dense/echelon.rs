use log::trace;

use crate::utils::PIVOT_EPSILON;

use super::Matrix;

impl Matrix {
    /// Row echelon form by Gaussian elimination, without row scaling.
    ///
    /// The pivot of each column is the first entry at or below the current
    /// pivot row whose magnitude exceeds [`PIVOT_EPSILON`]; columns without
    /// one are skipped. `self` is left untouched.
    pub fn to_row_echelon(&self) -> Matrix {
        if self.is_empty() {
            return Matrix::zeros(self.nrows, self.ncols);
        }

        let mut reduced = self.clone();
        let mut row = 0;
        for col in 0..reduced.ncols {
            if row >= reduced.nrows {
                break;
            }

            let Some(pivot_row) =
                (row..reduced.nrows).find(|&r| reduced[(r, col)].abs() > PIVOT_EPSILON)
            else {
                continue;
            };
            if pivot_row != row {
                trace!("column {}: swapping rows {} and {}", col, row, pivot_row);
                reduced.swap_rows(row, pivot_row);
            }

            let pivot = reduced[(row, col)];
            for r in row + 1..reduced.nrows {
                let factor = reduced[(r, col)] / pivot;
                for c in col..reduced.ncols {
                    reduced[(r, c)] -= factor * reduced[(row, c)];
                }
            }
            row += 1;
        }
        reduced
    }

    /// Number of rows of the echelon form holding an entry larger than
    /// [`PIVOT_EPSILON`] in magnitude.
    pub fn rank(&self) -> usize {
        self.to_row_echelon()
            .rows()
            .filter(|r| r.iter().any(|v| v.abs() > PIVOT_EPSILON))
            .count()
    }

    pub fn is_full_rank(&self) -> bool {
        self.rank() == self.nrows.min(self.ncols)
    }
}
