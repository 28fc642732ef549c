/// Magnitude below which an entry is treated as zero by row reduction,
/// rank, invertibility checks and inversion.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Tolerance used when comparing component ratios of vectors.
pub const VECTOR_EPSILON: f64 = 1e-9;

/// Approximate equality within an absolute tolerance.
///
/// Two values compare equal when they have the same shape and every pair of
/// corresponding elements differs by at most `epsilon`.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn equals_approx(&self, other: &Rhs, epsilon: f64) -> bool;
}

impl ApproxEq for f64 {
    fn equals_approx(&self, other: &f64, epsilon: f64) -> bool {
        (self - other).abs() <= epsilon
    }
}

impl ApproxEq for [f64] {
    fn equals_approx(&self, other: &[f64], epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.equals_approx(b, epsilon))
    }
}
