//! Element-wise assignment
//!
//! [`MatrixSource`] is the contract a matrix-like producer satisfies to be
//! materialised into sparse storage: a shape, a per-element read and an
//! ordered walk over its non-zeros. Both sparse containers and dense
//! `Array2` / `ArrayView2` implement it.
//!
//! Assignment walks the source in the destination's native order, so each
//! insertion lands at the end of the ordered map.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::{ColumnMajor, SparseMatrix, SparseVecOfVec};
//! use scirs2_core::ndarray_ext::array;
//!
//! let dense = array![[1.0, 0.0], [0.0, 2.0]];
//! let a = SparseMatrix::<f64>::from_dense(&dense.view());
//!
//! let mut b = SparseVecOfVec::<f64, ColumnMajor>::with_shape(2, 2, 2);
//! b.assign_from(&a).unwrap();
//! b.plus_assign(&dense).unwrap();
//! assert_eq!(b.get(1, 1), 4.0);
//! assert_eq!(b.nnz(), 2);
//! ```

use crate::cursor::SparseTraversal;
use crate::error::{AssocError, AssocResult};
use crate::orientation::{Major, Orientation};
use crate::storage::SparseStorage;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Zero;
use std::ops::{AddAssign, SubAssign};
use tracing::debug;

/// A matrix-like producer of elements
pub trait MatrixSource {
    type Value;

    /// Non-zero elements as `(i, j, value)`
    type Nonzeros<'a>: Iterator<Item = (usize, usize, Self::Value)>
    where
        Self: 'a;

    fn size1(&self) -> usize;
    fn size2(&self) -> usize;

    fn shape(&self) -> (usize, usize) {
        (self.size1(), self.size2())
    }

    /// Element at `(i, j)`
    fn get(&self, i: usize, j: usize) -> Self::Value;

    /// Non-zero elements in row- or column-major order
    fn nonzeros(&self, order: Major) -> Self::Nonzeros<'_>;
}

/// Adapter cloning the values of a borrowed element walk
pub struct Cloned<I> {
    inner: I,
}

impl<I> Cloned<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, I, T> Iterator for Cloned<I>
where
    I: Iterator<Item = (usize, usize, &'a T)>,
    T: Clone + 'a,
{
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, j, v)| (i, j, v.clone()))
    }
}

/// Non-zero cells of a dense array in row- or column-major order
pub struct DenseNonzeros<'a, T> {
    view: ArrayView2<'a, T>,
    order: Major,
    primary: usize,
    secondary: usize,
}

impl<'a, T> DenseNonzeros<'a, T> {
    fn new(view: ArrayView2<'a, T>, order: Major) -> Self {
        Self {
            view,
            order,
            primary: 0,
            secondary: 0,
        }
    }
}

impl<'a, T: Clone + Zero> Iterator for DenseNonzeros<'a, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        let (primary, secondary) = self.order.extent(self.view.nrows(), self.view.ncols());
        while self.primary < primary {
            while self.secondary < secondary {
                let (i, j) = self.order.coords(self.primary, self.secondary);
                self.secondary += 1;
                let v = &self.view[[i, j]];
                if !v.is_zero() {
                    return Some((i, j, v.clone()));
                }
            }
            self.secondary = 0;
            self.primary += 1;
        }
        None
    }
}

impl<T: Clone + Zero> MatrixSource for Array2<T> {
    type Value = T;
    type Nonzeros<'a>
        = DenseNonzeros<'a, T>
    where
        Self: 'a;

    fn size1(&self) -> usize {
        self.nrows()
    }

    fn size2(&self) -> usize {
        self.ncols()
    }

    fn get(&self, i: usize, j: usize) -> T {
        self[[i, j]].clone()
    }

    fn nonzeros(&self, order: Major) -> Self::Nonzeros<'_> {
        DenseNonzeros::new(self.view(), order)
    }
}

impl<'v, T: Clone + Zero> MatrixSource for ArrayView2<'v, T> {
    type Value = T;
    type Nonzeros<'a>
        = DenseNonzeros<'a, T>
    where
        Self: 'a;

    fn size1(&self) -> usize {
        self.nrows()
    }

    fn size2(&self) -> usize {
        self.ncols()
    }

    fn get(&self, i: usize, j: usize) -> T {
        self[[i, j]].clone()
    }

    fn nonzeros(&self, order: Major) -> Self::Nonzeros<'_> {
        DenseNonzeros::new(self.view(), order)
    }
}

fn check_shape<S, E>(dst: &S, src: &E) -> AssocResult<()>
where
    S: SparseStorage,
    E: MatrixSource,
{
    let expected = (dst.size1(), dst.size2());
    if expected != src.shape() {
        return Err(AssocError::shape_mismatch(expected, src.shape()));
    }
    Ok(())
}

/// Insert every non-zero of `src`, walking it in the destination's order
pub(crate) fn fill<S, E>(dst: &mut S, src: &E) -> usize
where
    S: SparseStorage,
    E: MatrixSource<Value = S::Value>,
{
    let mut inserted = 0;
    for (i, j, v) in src.nonzeros(<S::Orient as Orientation>::MAJOR) {
        if dst.insert_entry(i, j, v) {
            inserted += 1;
        }
    }
    inserted
}

/// Replace the contents of `dst` with the non-zeros of `src`
pub(crate) fn assign<S, E>(dst: &mut S, src: &E) -> AssocResult<()>
where
    S: SparseStorage,
    E: MatrixSource<Value = S::Value>,
{
    check_shape(dst, src)?;
    dst.clear_entries();
    let inserted = fill(dst, src);
    debug!(shape = ?src.shape(), inserted, "assigned sparse matrix");
    Ok(())
}

/// `dst += src`, reading-modifying-writing through the inserting accessor
pub(crate) fn plus_assign<S, E>(dst: &mut S, src: &E) -> AssocResult<()>
where
    S: SparseStorage,
    S::Value: Zero + AddAssign,
    E: MatrixSource<Value = S::Value>,
{
    check_shape(dst, src)?;
    for (i, j, v) in src.nonzeros(<S::Orient as Orientation>::MAJOR) {
        *dst.access_entry(i, j) += v;
    }
    Ok(())
}

/// `dst -= src`
pub(crate) fn minus_assign<S, E>(dst: &mut S, src: &E) -> AssocResult<()>
where
    S: SparseStorage,
    S::Value: Zero + SubAssign,
    E: MatrixSource<Value = S::Value>,
{
    check_shape(dst, src)?;
    for (i, j, v) in src.nonzeros(<S::Orient as Orientation>::MAJOR) {
        *dst.access_entry(i, j) -= v;
    }
    Ok(())
}

pub(crate) fn to_dense<S>(m: &S) -> Array2<S::Value>
where
    S: SparseStorage,
    S::Value: Clone + Zero,
{
    let mut dense = Array2::zeros((m.size1(), m.size2()));
    for (i, j, v) in m.elements(<S::Orient as Orientation>::MAJOR) {
        dense[[i, j]] = v.clone();
    }
    dense
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::ColumnMajor;
    use crate::{SparseMatrix, SparseVecOfVec};
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_dense_nonzeros_order() {
        let dense = array![[0, 1, 2], [3, 0, 4]];
        let rows: Vec<_> = dense.nonzeros(Major::Row).collect();
        assert_eq!(rows, vec![(0, 1, 1), (0, 2, 2), (1, 0, 3), (1, 2, 4)]);
        let cols: Vec<_> = dense.view().nonzeros(Major::Column).collect();
        assert_eq!(cols, vec![(1, 0, 3), (0, 1, 1), (0, 2, 2), (1, 2, 4)]);
    }

    #[test]
    fn test_assign_replaces_contents() {
        let mut src = SparseMatrix::<i32>::with_shape(2, 3, 0);
        src.insert(0, 2, 7);
        src.insert(1, 0, 8);

        let mut dst = SparseVecOfVec::<i32, ColumnMajor>::with_shape(2, 3, 0);
        dst.insert(1, 1, 99);
        dst.assign_from(&src).unwrap();

        assert_eq!(dst.nnz(), 2);
        assert_eq!(dst.get(1, 1), 0);
        assert_eq!(dst.get(0, 2), 7);
        assert_eq!(dst.get(1, 0), 8);
    }

    #[test]
    fn test_assign_shape_mismatch() {
        let src = SparseMatrix::<i32>::with_shape(2, 3, 0);
        let mut dst = SparseMatrix::<i32>::with_shape(3, 2, 0);
        dst.insert(0, 0, 1);
        let err = dst.assign_from(&src).unwrap_err();
        assert_eq!(err, AssocError::shape_mismatch((3, 2), (2, 3)));
        // nothing was touched
        assert_eq!(dst.get(0, 0), 1);
    }

    #[test]
    fn test_plus_minus_assign() {
        let mut m = SparseMatrix::<i32>::with_shape(2, 2, 0);
        m.insert(0, 0, 1);
        let delta = array![[1, 0], [0, 5]];

        m.plus_assign(&delta).unwrap();
        assert_eq!(m.get(0, 0), 2);
        assert_eq!(m.get(1, 1), 5);
        assert_eq!(m.nnz(), 2);

        m.minus_assign(&delta.view()).unwrap();
        assert_eq!(m.get(0, 0), 1);
        // subtraction leaves an explicit zero behind
        assert_eq!(m.get(1, 1), 0);
        assert_eq!(m.nnz(), 2);

        let wrong = array![[1, 2, 3]];
        assert!(m.plus_assign(&wrong).is_err());
    }

    #[test]
    fn test_from_source_between_layouts() {
        let mut a = SparseVecOfVec::<f64>::with_shape(3, 2, 0);
        a.insert(2, 1, 1.5);
        a.insert(0, 0, -1.0);
        let b = SparseMatrix::<f64, ColumnMajor>::from_source(&a, a.nnz());
        assert_eq!(b.nnz(), 2);
        assert_eq!(b.to_dense(), a.to_dense());
        assert_eq!(MatrixSource::get(&b, 2, 1), 1.5);
    }
}
