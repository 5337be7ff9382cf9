//! # tenrso-assoc
//!
//! Associative sparse matrices for TenRSo.
//!
//! This crate provides:
//! - Orientation functors mapping `(i, j)` to storage keys (row- and column-major)
//! - `SparseMatrix`: one ordered map from linear key to value
//! - `SparseVecOfVec`: an ordered map of per-row (or per-column) ordered maps
//! - Bidirectional cursors walking populated elements in either order, with
//!   nested row/column iteration
//! - Element-wise assignment from any matrix source, dense arrays included
//! - Sparse dot, vector-matrix and matrix-vector products
//!
//! Only stored elements are ever visited; absent elements read as zero.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::{SparseMatrix, SparseTraversal};
//!
//! let mut m = SparseMatrix::<f64>::with_shape(3, 3, 3);
//! m.insert(0, 0, 1.0);
//! m.insert(1, 2, 5.0);
//! m.insert(2, 1, 9.0);
//!
//! let rows: Vec<_> = m.elements(tenrso_assoc::Major::Row).map(|(i, j, &v)| (i, j, v)).collect();
//! assert_eq!(rows, vec![(0, 0, 1.0), (1, 2, 5.0), (2, 1, 9.0)]);
//! ```

#![deny(warnings)]

pub mod assign;
pub mod cursor;
pub mod error;
pub mod find;
pub mod logging;
pub mod matrix;
pub mod orientation;
pub mod prod;
pub mod storage;
pub mod vec_of_vec;

// Re-exports
pub use assign::MatrixSource;
pub use cursor::{ConstCursor, Cursor, Elements, Lines, MutCursor, Span, SparseTraversal};
pub use error::*;
pub use matrix::SparseMatrix;
pub use orientation::{check_orientation, Axis, ColumnMajor, Direction, Major, Orientation, RowMajor};
pub use prod::{prec_prod_vec_mat, prod_mat_vec, prod_vec_mat, sparse_dot};
pub use storage::SparseStorage;
pub use vec_of_vec::SparseVecOfVec;
