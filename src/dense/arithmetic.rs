use std::borrow::Cow;
use std::ops::{Mul, Neg};

use log::debug;

use crate::error::{AlgebraError, Result};

use super::Matrix;

impl Matrix {
    /// Elementwise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference. Both operands must have the same shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(AlgebraError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiplies every element by `scalar`.
    ///
    /// Scaling by `1.0` or scaling a zero matrix returns `self` borrowed,
    /// without allocating. Callers that need an owned copy regardless can use
    /// `into_owned` or the `*` operator.
    pub fn scale(&self, scalar: f64) -> Cow<'_, Matrix> {
        if scalar == 1.0 || self.is_zero() {
            debug!("scale by {} short-circuited, returning receiver", scalar);
            return Cow::Borrowed(self);
        }
        Cow::Owned(self.map(|v| v * scalar))
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Standard matrix product `self * other`.
    ///
    /// If either operand is a zero matrix the result is a fresh zero matrix
    /// of shape `self.nrows() x other.ncols()` and no products are computed.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols != other.nrows {
            return Err(AlgebraError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut result = Matrix::zeros(self.nrows, other.ncols);
        if self.is_zero() || other.is_zero() {
            return Ok(result);
        }

        for i in 0..self.nrows {
            let lhs = self.row(i);
            for j in 0..other.ncols {
                let mut value = 0.0;
                for (k, &a) in lhs.iter().enumerate() {
                    value += a * other[(k, j)];
                }
                result[(i, j)] = value;
            }
        }
        Ok(result)
    }

    /// Returns the `ncols x nrows` transpose.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeros(self.ncols, self.nrows);
        for (i, row) in self.rows().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                result[(j, i)] = v;
            }
        }
        result
    }

    /// Raises a square matrix to an integer power.
    ///
    /// `0` yields the identity and `1` a copy. Negative powers invert first
    /// and fail with [`AlgebraError::Singular`] when that is impossible. The
    /// power is accumulated by repeated multiplication starting from the
    /// identity.
    pub fn pow(&self, power: i32) -> Result<Matrix> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                op: "power",
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        match power {
            0 => return Ok(Matrix::identity(self.nrows)),
            1 => return Ok(self.clone()),
            _ => {}
        }

        let inverted;
        let base = if power < 0 {
            inverted = self.invert()?;
            &inverted
        } else {
            self
        };

        let mut result = Matrix::identity(self.nrows);
        for _ in 0..power.unsigned_abs() {
            result = result.multiply(base)?;
        }
        Ok(result)
    }

    /// Computes `self * other⁻¹`.
    ///
    /// Fails with [`AlgebraError::Singular`] when `other` is not invertible,
    /// including when it is not square.
    pub fn divide(&self, other: &Matrix) -> Result<Matrix> {
        let inverse = other.invert()?;
        self.multiply(&inverse)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|v| -v)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    /// Always allocates, unlike [`Matrix::scale`].
    fn mul(self, scalar: f64) -> Matrix {
        self.map(|v| v * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ApproxEq;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add_and_sub() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.5, -1.0], &[10.0, 0.0]]);

        assert_eq!(a.add(&b).unwrap(), m(&[&[1.5, 1.0], &[13.0, 4.0]]));
        assert_eq!(a.sub(&b).unwrap(), m(&[&[0.5, 3.0], &[-7.0, 4.0]]));

        let round_trip = a.add(&b).unwrap().sub(&b).unwrap();
        assert!(round_trip.equals_approx(&a, 1e-9));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(2, 3);
        assert_eq!(
            a.add(&b),
            Err(AlgebraError::DimensionMismatch {
                op: "add",
                left: (2, 2),
                right: (2, 3)
            })
        );
        assert!(matches!(
            b.sub(&a),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scale() {
        let a = m(&[&[1.0, -2.0], &[0.0, 4.0]]);
        let scaled = a.scale(2.5);
        assert!(matches!(scaled, Cow::Owned(_)));
        assert_eq!(*scaled, m(&[&[2.5, -5.0], &[0.0, 10.0]]));
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn test_scale_short_circuits() {
        let a = m(&[&[1.0, 2.0]]);
        match a.scale(1.0) {
            Cow::Borrowed(same) => assert!(std::ptr::eq(same, &a)),
            Cow::Owned(_) => panic!("scaling by one should not allocate"),
        }

        let zero = Matrix::zeros(3, 3);
        assert!(matches!(zero.scale(7.0), Cow::Borrowed(_)));
    }

    #[test]
    fn test_mul_operator_always_copies() {
        let a = m(&[&[1.0, 2.0]]);
        assert_eq!(&a * 1.0, a);
        assert_eq!(&a * -3.0, m(&[&[-3.0, -6.0]]));
        assert_eq!(-&a, m(&[&[-1.0, -2.0]]));
    }

    #[test]
    fn test_multiply() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        assert_eq!(
            a.multiply(&b).unwrap(),
            m(&[&[58.0, 64.0], &[139.0, 154.0]])
        );
    }

    #[test]
    fn test_multiply_identity() {
        let a = m(&[&[2.0, -1.0, 0.5], &[0.0, 3.0, 1.0], &[4.0, 4.0, -2.0]]);
        let id = Matrix::identity(3);
        assert_eq!(id.multiply(&a).unwrap(), a);
        assert_eq!(a.multiply(&id).unwrap(), a);
    }

    #[test]
    fn test_multiply_by_zero_matrix() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let zero = Matrix::zeros(2, 4);
        let product = a.multiply(&zero).unwrap();
        assert_eq!(product.shape(), (3, 4));
        assert!(product.is_zero());
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(
            a.multiply(&a),
            Err(AlgebraError::DimensionMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
        assert_eq!(Matrix::zeros(0, 0).transpose().shape(), (0, 0));
        assert_eq!(Matrix::zeros(0, 3).transpose().shape(), (3, 0));
    }

    #[test]
    fn test_pow() {
        let a = m(&[&[1.0, 1.0], &[0.0, 1.0]]);
        assert!(a.pow(0).unwrap().is_identity());
        assert_eq!(a.pow(1).unwrap(), a);
        assert_eq!(a.pow(3).unwrap(), m(&[&[1.0, 3.0], &[0.0, 1.0]]));

        let inv = a.pow(-2).unwrap();
        assert!(inv.equals_approx(&m(&[&[1.0, -2.0], &[0.0, 1.0]]), 1e-12));
    }

    #[test]
    fn test_pow_zero_of_singular_is_identity() {
        let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert!(singular.pow(0).unwrap().is_identity());
        assert_eq!(singular.pow(-1), Err(AlgebraError::Singular));
    }

    #[test]
    fn test_pow_not_square() {
        assert!(matches!(
            Matrix::zeros(2, 3).pow(2),
            Err(AlgebraError::NotSquare { op: "power", .. })
        ));
    }

    #[test]
    fn test_divide() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let q = a.divide(&b).unwrap();
        assert!(q.multiply(&b).unwrap().equals_approx(&a, 1e-9));

        let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(a.divide(&singular), Err(AlgebraError::Singular));

        let zero = Matrix::zeros(3, 3);
        assert_eq!(Matrix::identity(3).divide(&zero), Err(AlgebraError::Singular));
        assert!(matches!(
            Matrix::zeros(2, 3).divide(&b),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_divide_by_non_square_is_singular() {
        assert_eq!(
            Matrix::identity(2).divide(&Matrix::zeros(2, 3)),
            Err(AlgebraError::Singular)
        );
        let tall = m(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        assert_eq!(Matrix::identity(2).divide(&tall), Err(AlgebraError::Singular));
    }
}
