use thiserror::Error;

/// Errors returned by matrix and vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("inconsistent number of columns in row {row}: expected {expected}, got {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("number of values ({found}) does not match matrix dimensions {rows}x{cols}")]
    FlatLength {
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("cannot {op}: mismatched dimensions {left:?} and {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("cannot compute {op} of a non-square {rows}x{cols} matrix")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("matrix is singular, cannot invert")]
    Singular,

    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cannot project onto the zero vector")]
    ZeroVector,

    #[error("{op} only supports {expected}D vectors, got dimension {found}")]
    UnsupportedDimension {
        op: &'static str,
        expected: usize,
        found: usize,
    },
}

impl AlgebraError {
    /// True for both construction-time shape failures.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            AlgebraError::RaggedRows { .. } | AlgebraError::FlatLength { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
