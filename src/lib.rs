pub mod dense;
pub mod vector;
mod error;
mod utils;

pub use dense::{DeterminantMethod, Matrix};
pub use error::{AlgebraError, Result};
pub use utils::{ApproxEq, PIVOT_EPSILON, VECTOR_EPSILON};
pub use vector::Vector;
