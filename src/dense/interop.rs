//! Conversions between [`Matrix`] and the `ndarray` / `nalgebra` dense types.

use super::Matrix;

#[cfg(feature = "ndarray")]
mod ndarray_impl {
    use ndarray::{Array2, ArrayView2};

    use super::Matrix;

    impl From<&Matrix> for Array2<f64> {
        fn from(m: &Matrix) -> Self {
            Array2::from_shape_fn(m.shape(), |(i, j)| m[(i, j)])
        }
    }

    impl From<ArrayView2<'_, f64>> for Matrix {
        /// Copies the view in logical row-major order, whatever its memory layout.
        fn from(view: ArrayView2<'_, f64>) -> Self {
            let (nrows, ncols) = view.dim();
            Matrix {
                data: view.iter().copied().collect(),
                nrows,
                ncols,
            }
        }
    }

    impl From<&Array2<f64>> for Matrix {
        fn from(array: &Array2<f64>) -> Self {
            Matrix::from(array.view())
        }
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impl {
    use nalgebra::DMatrix;

    use super::Matrix;

    impl From<&Matrix> for DMatrix<f64> {
        fn from(m: &Matrix) -> Self {
            DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
        }
    }

    impl From<&DMatrix<f64>> for Matrix {
        fn from(dm: &DMatrix<f64>) -> Self {
            let mut m = Matrix::zeros(dm.nrows(), dm.ncols());
            for i in 0..dm.nrows() {
                for j in 0..dm.ncols() {
                    m[(i, j)] = dm[(i, j)];
                }
            }
            m
        }
    }
}
