//! Unified error types for associative sparse matrices
//!
//! This module provides the error taxonomy shared by both matrix containers,
//! the orientation functors and the product kernels.
//!
//! # Design
//!
//! - **`AssocError`**: Top-level enum covering all error cases
//! - **`ShapeMismatchError`**: precondition violations on assign/swap/products
//! - **`IndexError`**: out-of-bounds coordinates on the checked accessors
//! - **`OrientationError`**: a malformed orientation functor (internal inconsistency)
//!
//! Reading an unset element is not an error; it yields the additive identity.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::error::{AssocError, IndexError};
//! use tenrso_assoc::SparseMatrix;
//!
//! let m = SparseMatrix::<f64>::with_shape(2, 2, 0);
//! match m.try_get(5, 0) {
//!     Err(AssocError::Index(IndexError::OutOfBounds { index, shape })) => {
//!         assert_eq!(index, (5, 0));
//!         assert_eq!(shape, (2, 2));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::orientation::Axis;
use thiserror::Error;

/// Top-level error type for all associative matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssocError {
    /// Shape mismatch errors
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatchError),

    /// Index errors
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Malformed orientation functor
    #[error("Orientation error: {0}")]
    Orientation(#[from] OrientationError),
}

/// Shape mismatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("Matrix shape mismatch: expected {}×{}, got {}×{}", expected.0, expected.1, got.0, got.1)]
    Matrix {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Vector-matrix multiplication dimension mismatch: ({v},) × ({m}×{n})")]
    VecMat { v: usize, m: usize, n: usize },

    #[error("Matrix-vector multiplication dimension mismatch: ({m}×{n}) × ({v},)")]
    MatVec { m: usize, n: usize, v: usize },
}

/// Index errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Index out of bounds: index {index:?} exceeds shape {shape:?}")]
    OutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
}

/// Internal inconsistencies reported by a malformed orientation functor
///
/// These are distinct from caller mistakes: they mean the functor plug-in
/// itself breaks its contract. The traversal code panics with these
/// messages; [`check_orientation`](crate::orientation::check_orientation)
/// returns them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    #[error("internal error: orientation reports a neutral stride along {axis} for a {size1}×{size2} matrix")]
    NeutralStride {
        axis: Axis,
        size1: usize,
        size2: usize,
    },

    #[error("internal error: strides along both dimensions must share one sign, got {one1} and {one2}")]
    MixedDirection { one1: isize, one2: isize },

    #[error("internal error: key {key} for ({i}, {j}) decodes to {decoded:?}")]
    NotBijective {
        i: usize,
        j: usize,
        key: usize,
        decoded: (usize, usize),
    },

    #[error("internal error: keys are not monotonic in traversal order at ({i}, {j})")]
    NonMonotonic { i: usize, j: usize },

    #[error("internal error: contiguous stride along {axis} is not honoured at ({i}, {j})")]
    StrideMismatch { axis: Axis, i: usize, j: usize },
}

/// Result type alias for associative matrix operations
pub type AssocResult<T> = Result<T, AssocError>;

// Convenience constructors for common error patterns
impl AssocError {
    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: (usize, usize), shape: (usize, usize)) -> Self {
        AssocError::Index(IndexError::OutOfBounds { index, shape })
    }

    /// Create a matrix shape mismatch error
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        AssocError::ShapeMismatch(ShapeMismatchError::Matrix { expected, got })
    }

    /// Whether the error signals a malformed orientation rather than a caller mistake
    pub fn is_internal(&self) -> bool {
        matches!(self, AssocError::Orientation(_))
    }
}
