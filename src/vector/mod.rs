//! # Vectors
//!
//! [`Vector`] is a dense `f64` vector whose dimension is its length. Binary
//! operations require equal dimensions and return a new vector; the free
//! functions in [`utils`] cover distances and geometric relations.

use std::fmt;
use std::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Result};
use crate::utils::ApproxEq;

pub mod utils;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn zeros(dim: usize) -> Self {
        Vector {
            data: vec![0.0; dim],
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Vector {
            data: values.to_vec(),
        }
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.data.get(idx).copied()
    }

    pub fn set(&mut self, idx: usize, value: f64) -> Result<()> {
        let dim = self.dim();
        let slot = self
            .data
            .get_mut(idx)
            .ok_or(AlgebraError::IndexOutOfBounds {
                row: idx,
                col: 0,
                rows: dim,
                cols: 1,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    pub fn mul(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    /// Elementwise quotient. Division by a zero component follows IEEE 754.
    pub fn div(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "divide", |a, b| a / b)
    }

    pub(crate) fn check_dims(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(AlgebraError::DimensionMismatch {
                op,
                left: (self.dim(), 1),
                right: (other.dim(), 1),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, op: &'static str, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_dims(other, op)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vector {
        self.data.iter().map(|&v| f(v)).collect()
    }

    pub fn add_scalar(&self, scalar: f64) -> Vector {
        self.map(|v| v + scalar)
    }

    pub fn sub_scalar(&self, scalar: f64) -> Vector {
        self.map(|v| v - scalar)
    }

    pub fn mul_scalar(&self, scalar: f64) -> Vector {
        self.map(|v| v * scalar)
    }

    pub fn div_scalar(&self, scalar: f64) -> Vector {
        self.map(|v| v / scalar)
    }

    /// Euclidean norm. `0.0` for the empty vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Divides every component by the norm.
    ///
    /// No check is made for a zero norm: a zero vector of non-zero dimension
    /// comes back with NaN components.
    pub fn normalize(&self) -> Vector {
        self.div_scalar(self.norm())
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Projection of `self` onto `onto`: `(self · onto / |onto|²) * onto`.
    pub fn project_onto(&self, onto: &Vector) -> Result<Vector> {
        self.check_dims(onto, "project")?;
        let norm = onto.norm();
        if norm == 0.0 {
            return Err(AlgebraError::ZeroVector);
        }
        let dot = utils::dot(self, onto)?;
        Ok(onto.mul_scalar(dot / (norm * norm)))
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector { data }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector {
            data: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        &mut self.data[idx]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.4}", v)?;
        }
        f.write_str("]")
    }
}

impl ApproxEq for Vector {
    fn equals_approx(&self, other: &Vector, epsilon: f64) -> bool {
        self.data[..].equals_approx(&other.data[..], epsilon)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dim() == other.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dim() == other.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
