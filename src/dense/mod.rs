//! # Dense matrices
//!
//! [`Matrix`] is a row-major, exclusively owned 2D array of `f64` values. Every
//! operation either reads its operands or returns a freshly allocated matrix;
//! the one exception is [`Matrix::scale`], which hands back the receiver
//! untouched when scaling cannot change it.
//!
//! ## Submodules
//! - [`arithmetic`]: addition, subtraction, scaling, products, transpose, powers and division
//! - [`determinant`]: Laplace (default) and LU determinants, minors
//! - [`echelon`]: row echelon form and rank
//! - [`inverse`]: invertibility checks and Gauss-Jordan inversion

use std::fmt;
use std::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Result};
use crate::utils::ApproxEq;

pub mod arithmetic;
pub mod determinant;
pub mod echelon;
pub mod inverse;

#[cfg(any(feature = "ndarray", feature = "nalgebra"))]
mod interop;

pub use determinant::DeterminantMethod;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Creates an all-zero matrix. Either dimension may be zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Matrix {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Deep-copies rectangular row data.
    ///
    /// An input without rows yields the 0x0 matrix. Every row must have the
    /// length of the first one.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Matrix::zeros(0, 0));
        };
        let ncols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(AlgebraError::RaggedRows {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// Packs `values` row-major into an `nrows` x `ncols` matrix.
    pub fn from_flat(nrows: usize, ncols: usize, values: &[f64]) -> Result<Self> {
        if values.len() != nrows * ncols {
            return Err(AlgebraError::FlatLength {
                rows: nrows,
                cols: ncols,
                found: values.len(),
            });
        }
        Ok(Matrix {
            data: values.to_vec(),
            nrows,
            ncols,
        })
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Matrix::zeros(size, size);
        for k in 0..size {
            m[(k, k)] = 1.0;
        }
        m
    }

    /// Square matrix with `values` on the diagonal and zeros elsewhere.
    pub fn diagonal(values: &[f64]) -> Self {
        let mut m = Matrix::zeros(values.len(), values.len());
        for (k, &v) in values.iter().enumerate() {
            m[(k, k)] = v;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// True when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(self.out_of_bounds(row, col));
        }
        self.data[row * self.ncols + col] = value;
        Ok(())
    }

    /// Row `i` as a slice. Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // `chunks_exact` rejects a zero chunk size, so n x 0 matrices go
        // through an index range instead.
        (0..self.nrows).map(move |i| &self.data[i * self.ncols..(i + 1) * self.ncols])
    }

    /// The backing storage in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Deep copy of the contents as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let ncols = self.ncols;
        let (head, tail) = self.data.split_at_mut(hi * ncols);
        head[lo * ncols..(lo + 1) * ncols].swap_with_slice(&mut tail[..ncols]);
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> AlgebraError {
        AlgebraError::IndexOutOfBounds {
            row,
            col,
            rows: self.nrows,
            cols: self.ncols,
        }
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// All off-diagonal elements are exactly zero.
    ///
    /// Non-square matrices are never diagonal; the 0x0 matrix is.
    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.all_entries(|i, j, v| i == j || v == 0.0)
    }

    /// Diagonal with every diagonal element equal to `scalar`.
    pub fn is_scalar(&self, scalar: f64) -> bool {
        self.is_square()
            && self.all_entries(|i, j, v| if i == j { v == scalar } else { v == 0.0 })
    }

    /// Every diagonal element is exactly zero.
    pub fn is_hollow(&self) -> bool {
        self.is_square() && (0..self.nrows).all(|k| self[(k, k)] == 0.0)
    }

    pub fn is_identity(&self) -> bool {
        self.is_scalar(1.0)
    }

    fn all_entries<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(usize, usize, f64) -> bool,
    {
        self.data.iter().enumerate().all(|(idx, &v)| {
            let (i, j) = (idx / self.ncols, idx % self.ncols);
            pred(i, j, v)
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &mut self.data[row * self.ncols + col]
    }
}

impl fmt::Display for Matrix {
    /// Renders one bracketed row per line with 4-decimal fixed-point entries,
    /// or `[]` for an empty matrix.
    ///
    /// Non-finite entries use Rust's spelling, `inf`, `-inf` and `NaN`, padded
    /// to the same width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }

        f.write_str("[\n")?;
        for (i, row) in self.rows().enumerate() {
            f.write_str("  [")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:8.4}", v)?;
            }
            f.write_str("]")?;
            if i + 1 < self.nrows {
                f.write_str(",\n")?;
            }
        }
        f.write_str("\n]")
    }
}

impl ApproxEq for Matrix {
    fn equals_approx(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape() && self.data[..].equals_approx(&other.data[..], epsilon)
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.to_rows(), vec![vec![0.0; 3], vec![0.0; 3]]);
        assert!(m.is_zero());
        assert!(!m.is_square());
    }

    #[test]
    fn test_from_rows_deep_copies() {
        let mut input = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let m = Matrix::from_rows(&input).unwrap();
        input[0][0] = 42.0;

        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_rows_empty_input() {
        let m = Matrix::from_rows::<Vec<f64>>(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.as_slice().is_empty());
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_rows_with_empty_rows() {
        let m = Matrix::from_rows(&[Vec::<f64>::new(), vec![], vec![]]).unwrap();
        assert_eq!(m.shape(), (3, 0));
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "[]");
        assert_eq!(m.rank(), 0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_from_flat() {
        let m = Matrix::from_flat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        assert_eq!(m.row(1), &[9.0, 10.0]);
        assert_eq!(m[(2, 1)], 12.0);

        let err = Matrix::from_flat(2, 2, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_identity_and_diagonal() {
        let id = Matrix::identity(3);
        assert!(id.is_identity());
        assert!(id.is_diagonal());
        assert!(id.is_scalar(1.0));
        assert!(!id.is_hollow());

        let d = Matrix::diagonal(&[2.0, 2.0]);
        assert!(d.is_scalar(2.0));
        assert!(!d.is_scalar(3.0));
        assert!(!d.is_identity());

        let d = Matrix::diagonal(&[1.0, 5.0, -3.0]);
        assert_eq!(d.to_rows()[2], vec![0.0, 0.0, -3.0]);
        assert!(d.is_diagonal());
        assert!(!d.is_scalar(1.0));
    }

    #[test]
    fn test_predicates_on_empty_matrix() {
        let m = Matrix::zeros(0, 0);
        assert!(m.is_square());
        assert!(m.is_zero());
        assert!(m.is_diagonal());
        assert!(m.is_scalar(7.0));
        assert!(m.is_hollow());
        assert!(m.is_identity());
    }

    #[test]
    fn test_predicates_on_non_square_matrix() {
        let m = Matrix::zeros(2, 3);
        assert!(!m.is_diagonal());
        assert!(!m.is_scalar(0.0));
        assert!(!m.is_hollow());
        assert!(!m.is_identity());
    }

    #[test]
    fn test_hollow() {
        let m = Matrix::from_rows(&[[0.0, 1.0], [2.0, 0.0]]).unwrap();
        assert!(m.is_hollow());
        assert!(!m.is_diagonal());
    }

    #[test]
    fn test_predicates_use_exact_comparison() {
        let m = Matrix::from_rows(&[[1.0, 1e-300], [0.0, 1.0]]).unwrap();
        assert!(!m.is_identity());
        assert!(!m.is_diagonal());
        assert!(!Matrix::from_rows(&[[1e-300]]).unwrap().is_zero());
    }

    #[test]
    fn test_get_and_set() {
        let mut m = Matrix::zeros(4, 4);
        m.set(0, 2, 8.0).unwrap();
        assert_eq!(m.get(0, 2), Some(8.0));
        assert_eq!(m.get(4, 0), None);
        assert_eq!(
            m.set(1, 4, 1.0),
            Err(AlgebraError::IndexOutOfBounds {
                row: 1,
                col: 4,
                rows: 4,
                cols: 4
            })
        );

        m[(3, 3)] = -1.5;
        assert_eq!(m[(3, 3)], -1.5);

        m.row_mut(1).copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(1), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = Matrix::zeros(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_rows_of_column_less_matrix() {
        let m = Matrix::zeros(3, 0);
        assert_eq!(m.rows().len(), 3);
        assert!(m.rows().all(|r| r.is_empty()));
        assert!(m.is_empty());
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        m.swap_rows(2, 0);
        assert_eq!(m.to_rows(), vec![vec![5.0, 6.0], vec![3.0, 4.0], vec![1.0, 2.0]]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[[1.0, -2.5], [3.25159, 40.0]]).unwrap();
        assert_eq!(
            m.to_string(),
            "[\n  [  1.0000,  -2.5000],\n  [  3.2516,  40.0000]\n]"
        );
        assert_eq!(Matrix::zeros(0, 0).to_string(), "[]");
        assert_eq!(Matrix::zeros(2, 0).to_string(), "[]");
    }

    #[test]
    fn test_display_non_finite() {
        let m = Matrix::from_rows(&[[f64::INFINITY, f64::NEG_INFINITY, f64::NAN]]).unwrap();
        assert_eq!(m.to_string(), "[\n  [     inf,     -inf,      NaN]\n]");
    }

    #[test]
    fn test_equals_approx() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.1]]).unwrap();
        assert!(a.equals_approx(&b, 0.2));
        assert!(!a.equals_approx(&b, 0.05));
        assert!(!a.equals_approx(&Matrix::zeros(2, 3), 1.0));

        // the bound is inclusive
        let c = Matrix::from_rows(&[[1.5]]).unwrap();
        let d = Matrix::from_rows(&[[1.0]]).unwrap();
        assert!(c.equals_approx(&d, 0.5));

        assert_abs_diff_eq!(a, b, epsilon = 0.2);
    }
}
