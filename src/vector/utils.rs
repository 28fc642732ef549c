use crate::error::{AlgebraError, Result};
use crate::utils::VECTOR_EPSILON;

use super::Vector;

/// Euclidean distance between two vectors of equal dimension.
pub fn distance(a: &Vector, b: &Vector) -> Result<f64> {
    a.check_dims(b, "compute distance")?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

/// Whether one vector is a scalar multiple of the other.
///
/// Two empty vectors are colinear, vectors of different dimensions are not,
/// and a zero vector is colinear with anything of its dimension. Otherwise
/// every component ratio must agree within [`VECTOR_EPSILON`].
pub fn are_colinear(a: &Vector, b: &Vector) -> bool {
    if a.dim() == 0 && b.dim() == 0 {
        return true;
    }
    if a.dim() != b.dim() {
        return false;
    }
    if a.is_zero() || b.is_zero() {
        return true;
    }

    let mut reference: Option<f64> = None;
    for (&x, &y) in a.iter().zip(b.iter()) {
        if y.abs() < VECTOR_EPSILON {
            if x.abs() >= VECTOR_EPSILON {
                return false;
            }
            continue;
        }

        let factor = x / y;
        match reference {
            None => reference = Some(factor),
            Some(r) if (r - factor).abs() > VECTOR_EPSILON => return false,
            Some(_) => {}
        }
    }
    true
}

pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
    a.check_dims(b, "compute dot product")?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Linear interpolation `a * (1 - t) + b * t`. Values of `t` outside
/// `[0, 1]` extrapolate.
pub fn lerp(a: &Vector, b: &Vector, t: f64) -> Result<Vector> {
    a.check_dims(b, "interpolate")?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| x * (1.0 - t) + y * t)
        .collect())
}

/// Perp dot product `x1*y2 - y1*x2` of two 2D vectors.
pub fn cross_2d(a: &Vector, b: &Vector) -> Result<f64> {
    a.check_dims(b, "compute cross product")?;
    if a.dim() != 2 {
        return Err(AlgebraError::UnsupportedDimension {
            op: "cross2D",
            expected: 2,
            found: a.dim(),
        });
    }
    Ok(a[0] * b[1] - a[1] * b[0])
}

/// Exact zero dot product. Mismatched dimensions are never orthogonal.
pub fn are_orthogonal(a: &Vector, b: &Vector) -> bool {
    matches!(dot(a, b), Ok(d) if d == 0.0)
}
