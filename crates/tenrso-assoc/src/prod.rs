//! Products of sparse matrices with dense vectors
//!
//! All kernels are built on [`sparse_dot`], a merge-join over two
//! index-sorted `(index, value)` streams: at every step the smaller of the
//! two current indices decides which side advances, and only matching
//! indices contribute.
//!
//! - [`prod_vec_mat`]: `xᵀ · A`, walking `A` column by column
//! - [`prod_mat_vec`]: `A · x`, walking `A` row by row
//! - [`prec_prod_vec_mat`]: `xᵀ · A` accumulated in `f64`
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::prod::prod_vec_mat;
//! use tenrso_assoc::SparseMatrix;
//! use scirs2_core::ndarray_ext::array;
//!
//! let mut m = SparseMatrix::<f64>::with_shape(2, 2, 2);
//! m.insert(0, 0, 2.0);
//! m.insert(1, 1, 3.0);
//!
//! let x = array![1.0, 1.0];
//! let y = prod_vec_mat(&x.view(), &m).unwrap();
//! assert_eq!(y, array![2.0, 3.0]);
//! ```
//!
//! # SciRS2 Integration
//!
//! Vectors are `scirs2_core::ndarray_ext` arrays; numeric bounds come from
//! `scirs2_core::numeric`.

use crate::cursor::SparseTraversal;
use crate::error::{AssocResult, ShapeMismatchError};
use crate::storage::SparseStorage;
use scirs2_core::ndarray_ext::{Array1, ArrayView1};
use scirs2_core::numeric::{Float, Num, NumCast};
use tracing::debug;

/// Merge-join dot product of two index-sorted sparse streams
///
/// # Examples
///
/// ```
/// use tenrso_assoc::prod::sparse_dot;
///
/// let a = vec![(0, 1.0), (2, 2.0), (5, 3.0)];
/// let b = vec![(2, 4.0), (3, 1.0), (5, 2.0)];
/// assert_eq!(sparse_dot(a, b), 14.0);
/// ```
pub fn sparse_dot<T, A, B>(a: A, b: B) -> T
where
    T: Num + Copy,
    A: IntoIterator<Item = (usize, T)>,
    B: IntoIterator<Item = (usize, T)>,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();
    let mut acc = T::zero();

    while let (Some(&(ia, va)), Some(&(ib, vb))) = (a.peek(), b.peek()) {
        let index = ia.min(ib);
        if ia == index && ib == index {
            acc = acc + va * vb;
        }
        if ia == index {
            a.next();
        }
        if ib == index {
            b.next();
        }
    }

    acc
}

/// Dense vector times sparse matrix: `y[j] = Σ_i x[i] · A[i, j]`
///
/// The result has one entry per column.
///
/// `x` is indexed by row and the result by column, so a non-square matrix
/// yields `size2` entries rather than one per row. Use [`prod_mat_vec`] for
/// a row-indexed result.
///
/// # Errors
///
/// Returns `ShapeMismatchError::VecMat` unless `x.len() == m.size1()`.
pub fn prod_vec_mat<T, S>(x: &ArrayView1<T>, m: &S) -> AssocResult<Array1<T>>
where
    T: Num + Copy,
    S: SparseStorage<Value = T>,
{
    if x.len() != m.size1() {
        return Err(ShapeMismatchError::VecMat {
            v: x.len(),
            m: m.size1(),
            n: m.size2(),
        }
        .into());
    }

    let mut y = Array1::<T>::zeros(m.size2());
    let mut touched = 0;
    for (j, column) in m.columns() {
        y[j] = sparse_dot(
            column.map(|(i, _, &v)| (i, v)),
            x.iter().copied().enumerate(),
        );
        touched += 1;
    }
    debug!(columns = touched, len = m.size2(), "vector-matrix product");
    Ok(y)
}

/// Sparse matrix times dense vector: `y[i] = Σ_j A[i, j] · x[j]`
///
/// # Errors
///
/// Returns `ShapeMismatchError::MatVec` unless `x.len() == m.size2()`.
pub fn prod_mat_vec<T, S>(m: &S, x: &ArrayView1<T>) -> AssocResult<Array1<T>>
where
    T: Num + Copy,
    S: SparseStorage<Value = T>,
{
    if x.len() != m.size2() {
        return Err(ShapeMismatchError::MatVec {
            m: m.size1(),
            n: m.size2(),
            v: x.len(),
        }
        .into());
    }

    let mut y = Array1::<T>::zeros(m.size1());
    for (i, row) in m.rows() {
        y[i] = sparse_dot(row.map(|(_, j, &v)| (j, v)), x.iter().copied().enumerate());
    }
    Ok(y)
}

/// [`prod_vec_mat`] with every column sum accumulated in `f64`
///
/// # Errors
///
/// Returns `ShapeMismatchError::VecMat` unless `x.len() == m.size1()`.
pub fn prec_prod_vec_mat<T, S>(x: &ArrayView1<T>, m: &S) -> AssocResult<Array1<T>>
where
    T: Float,
    S: SparseStorage<Value = T>,
{
    if x.len() != m.size1() {
        return Err(ShapeMismatchError::VecMat {
            v: x.len(),
            m: m.size1(),
            n: m.size2(),
        }
        .into());
    }

    let widen = |v: T| v.to_f64().unwrap_or(f64::NAN);
    let mut y = Array1::<T>::zeros(m.size2());
    for (j, column) in m.columns() {
        let sum: f64 = sparse_dot(
            column.map(|(i, _, &v)| (i, widen(v))),
            x.iter().map(|&v| widen(v)).enumerate(),
        );
        y[j] = <T as NumCast>::from(sum).unwrap_or_else(T::nan);
    }
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::ColumnMajor;
    use crate::{AssocError, SparseMatrix, SparseVecOfVec};
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_sparse_dot_disjoint() {
        let a = vec![(0usize, 1i64), (2, 2)];
        let b = vec![(1usize, 5i64), (3, 7)];
        assert_eq!(sparse_dot(a, b), 0);
        assert_eq!(sparse_dot(Vec::<(usize, i64)>::new(), vec![(0, 1)]), 0);
    }

    #[test]
    fn test_prod_vec_mat_diagonal() {
        let mut m = SparseVecOfVec::<f64, ColumnMajor>::with_shape(2, 2, 2);
        m.insert(0, 0, 2.0);
        m.insert(1, 1, 3.0);
        let y = prod_vec_mat(&array![1.0, 1.0].view(), &m).unwrap();
        assert_eq!(y, array![2.0, 3.0]);
    }

    #[test]
    fn test_prod_against_dense() {
        let mut m = SparseMatrix::<f64>::with_shape(3, 4, 0);
        m.insert(0, 1, 2.0);
        m.insert(0, 3, -1.0);
        m.insert(2, 0, 4.0);
        m.insert(2, 3, 0.5);
        let dense = m.to_dense();

        let x = array![1.0, 2.0, 3.0];
        let y = prod_vec_mat(&x.view(), &m).unwrap();
        assert_eq!(y, x.dot(&dense));

        let v = array![1.0, -1.0, 2.0, 4.0];
        let z = prod_mat_vec(&m, &v.view()).unwrap();
        assert_eq!(z, dense.dot(&v));
    }

    #[test]
    fn test_prod_vec_mat_is_column_indexed() {
        let mut m = SparseVecOfVec::<i64>::with_shape(2, 3, 0);
        m.insert(0, 2, 4);
        m.insert(1, 0, 5);

        let y = prod_vec_mat(&array![1, 2].view(), &m).unwrap();
        assert_eq!(y.len(), 3);
        assert_eq!(y, array![10, 0, 4]);

        let z = prod_mat_vec(&m, &array![1, 1, 1].view()).unwrap();
        assert_eq!(z, array![4, 5]);
    }

    #[test]
    fn test_prec_prod_matches() {
        let mut m = SparseMatrix::<f32>::with_shape(2, 3, 0);
        m.insert(0, 2, 1.5);
        m.insert(1, 0, 2.0);
        m.insert(1, 2, 0.25);
        let x = array![2.0f32, 4.0];
        let y = prec_prod_vec_mat(&x.view(), &m).unwrap();
        assert_eq!(y, array![8.0f32, 0.0, 4.0]);
    }

    #[test]
    fn test_prod_shape_mismatch() {
        let m = SparseMatrix::<f64>::with_shape(2, 3, 0);
        let err = prod_vec_mat(&array![1.0, 2.0, 3.0].view(), &m).unwrap_err();
        assert_eq!(
            err,
            AssocError::ShapeMismatch(ShapeMismatchError::VecMat { v: 3, m: 2, n: 3 })
        );
        assert!(prod_mat_vec(&m, &array![1.0, 2.0].view()).is_err());
    }
}
