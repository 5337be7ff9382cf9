//! Flat associative sparse matrix
//!
//! [`SparseMatrix`] keeps every stored element in one ordered map from the
//! orientation's linear key to the value. Lookup and insertion are
//! `O(log k)` in the number of stored elements.
//!
//! # Element access
//!
//! - [`get`](SparseMatrix::get) reads; an absent element yields zero and
//!   nothing is inserted.
//! - [`access`](SparseMatrix::access) returns a mutable reference and
//!   **inserts a zero** when the element is absent. Avoid it on read paths.
//! - [`insert`](SparseMatrix::insert) inserts only if absent and never
//!   overwrites; [`upsert`](SparseMatrix::upsert) replaces.
//!
//! Explicit zeros are stored like any other value.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::{SparseMatrix, SparseTraversal};
//!
//! let mut m = SparseMatrix::<f64>::with_shape(3, 3, 3);
//! m.insert(0, 0, 1.0);
//! m.insert(1, 2, 5.0);
//! *m.access(2, 1) += 9.0;
//!
//! assert_eq!(m.get(0, 1), 0.0);
//! assert_eq!(m.get(2, 1), 9.0);
//! assert_eq!(m.nnz(), 3);
//!
//! // insert never overwrites
//! assert!(!m.insert(1, 2, 7.0));
//! assert_eq!(m.upsert(1, 2, 7.0), Some(5.0));
//! ```
//!
//! Swapping needs two distinct matrices; the borrow checker rejects a
//! self-swap outright:
//!
//! ```compile_fail
//! use tenrso_assoc::SparseMatrix;
//!
//! let mut m = SparseMatrix::<f64>::with_shape(2, 2, 0);
//! m.swap(&mut m).unwrap();
//! ```
//!
//! # SciRS2 Integration
//!
//! Dense conversions use `scirs2_core::ndarray_ext` arrays.

use crate::assign::{self, MatrixSource};
use crate::cursor::{Elements, SparseTraversal};
use crate::error::{AssocError, AssocResult};
use crate::orientation::{Direction, Major, Orientation, RowMajor};
use crate::storage::SparseStorage;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Zero;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::ops::{AddAssign, MulAssign, SubAssign};
use tracing::debug;

/// Sparse matrix stored as one ordered map from linear key to value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct SparseMatrix<T, O: Orientation = RowMajor> {
    size1: usize,
    size2: usize,
    nnz_hint: usize,
    data: BTreeMap<usize, T>,
    orientation: PhantomData<O>,
}

impl<T, O: Orientation> Default for SparseMatrix<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Orientation> SparseMatrix<T, O> {
    /// Empty 0×0 matrix
    pub fn new() -> Self {
        Self::with_shape(0, 0, 0)
    }

    /// Empty `size1 × size2` matrix; `nnz_hint` is advisory
    pub fn with_shape(size1: usize, size2: usize, nnz_hint: usize) -> Self {
        Self {
            size1,
            size2,
            nnz_hint,
            data: BTreeMap::new(),
            orientation: PhantomData,
        }
    }

    /// Re-dimension the matrix. Stored elements are discarded.
    pub fn resize(&mut self, size1: usize, size2: usize, nnz_hint: usize) {
        debug!(
            from = ?(self.size1, self.size2),
            to = ?(size1, size2),
            dropped = self.data.len(),
            "resizing flat sparse matrix"
        );
        self.size1 = size1;
        self.size2 = size2;
        self.nnz_hint = nnz_hint;
        self.data.clear();
    }

    pub fn size1(&self) -> usize {
        self.size1
    }

    pub fn size2(&self) -> usize {
        self.size2
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.size1, self.size2)
    }

    /// Number of stored elements, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn nnz_hint(&self) -> usize {
        self.nnz_hint
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fraction of cells that are stored
    pub fn density(&self) -> f64 {
        let total = self.size1 as f64 * self.size2 as f64;
        if total == 0.0 {
            0.0
        } else {
            self.data.len() as f64 / total
        }
    }

    fn key(&self, i: usize, j: usize) -> usize {
        O::element(i, self.size1, j, self.size2)
    }

    fn check_bounds(&self, i: usize, j: usize) -> AssocResult<()> {
        if i < self.size1 && j < self.size2 {
            Ok(())
        } else {
            Err(AssocError::index_out_of_bounds((i, j), self.shape()))
        }
    }

    fn assert_bounds(&self, i: usize, j: usize) {
        if let Err(e) = self.check_bounds(i, j) {
            panic!("{}", e);
        }
    }

    /// Whether `(i, j)` is stored
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.size1 && j < self.size2 && self.data.contains_key(&self.key(i, j))
    }

    /// Stored element at `(i, j)`, `None` when absent or out of range
    pub fn get_ref(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.size1 && j < self.size2 {
            self.data.get(&self.key(i, j))
        } else {
            None
        }
    }

    /// Mutable element at `(i, j)`, inserting zero if absent
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn access(&mut self, i: usize, j: usize) -> &mut T
    where
        T: Zero,
    {
        self.assert_bounds(i, j);
        let key = self.key(i, j);
        self.data.entry(key).or_insert_with(T::zero)
    }

    /// Insert `value` at `(i, j)` unless an element is already stored there
    ///
    /// Returns `true` if the value was inserted. An existing element is kept
    /// unchanged; use [`upsert`](Self::upsert) to replace it.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn insert(&mut self, i: usize, j: usize, value: T) -> bool {
        self.assert_bounds(i, j);
        let key = self.key(i, j);
        match self.data.entry(key) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Insert or replace, returning the previous element
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn upsert(&mut self, i: usize, j: usize, value: T) -> Option<T> {
        self.assert_bounds(i, j);
        let key = self.key(i, j);
        self.data.insert(key, value)
    }

    /// Remove the element at `(i, j)`
    pub fn remove(&mut self, i: usize, j: usize) -> Option<T> {
        if i < self.size1 && j < self.size2 {
            let key = self.key(i, j);
            self.data.remove(&key)
        } else {
            None
        }
    }

    /// Remove every element; the shape is kept
    pub fn clear(&mut self) {
        debug!(dropped = self.data.len(), "clearing flat sparse matrix");
        self.data.clear();
    }

    /// Exchange contents with another matrix of the same shape
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatchError::Matrix` if the shapes differ.
    pub fn swap(&mut self, other: &mut Self) -> AssocResult<()> {
        if self.shape() != other.shape() {
            return Err(AssocError::shape_mismatch(self.shape(), other.shape()));
        }
        std::mem::swap(&mut self.nnz_hint, &mut other.nnz_hint);
        std::mem::swap(&mut self.data, &mut other.data);
        debug!(shape = ?self.shape(), "swapped flat sparse matrices");
        Ok(())
    }

    /// Stored elements in storage order (row-major for `RowMajor`)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let (size1, size2) = self.shape();
        let ordered: Box<dyn Iterator<Item = (&usize, &T)> + '_> = match O::direction(size1, size2) {
            Direction::Ascending => Box::new(self.data.iter()),
            Direction::Descending => Box::new(self.data.iter().rev()),
        };
        ordered.map(move |(&key, v)| {
            (
                O::index1(key, size1, size2),
                O::index2(key, size1, size2),
                v,
            )
        })
    }

    fn key_direction(&self) -> Direction {
        O::direction(self.size1, self.size2)
    }

    fn next_key(&self, key: usize, inclusive: bool) -> Option<usize> {
        let lower = if inclusive {
            Included(key)
        } else {
            Excluded(key)
        };
        self.data.range((lower, Unbounded)).next().map(|(&k, _)| k)
    }

    fn prev_key(&self, key: usize, inclusive: bool) -> Option<usize> {
        let upper = if inclusive {
            Included(key)
        } else {
            Excluded(key)
        };
        self.data.range((Unbounded, upper)).next_back().map(|(&k, _)| k)
    }
}

impl<T: Clone + Zero, O: Orientation> SparseMatrix<T, O> {
    /// Element at `(i, j)`, zero when absent; never inserts
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.assert_bounds(i, j);
        self.data
            .get(&self.key(i, j))
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// Checked variant of [`get`](Self::get)
    pub fn try_get(&self, i: usize, j: usize) -> AssocResult<T> {
        self.check_bounds(i, j)?;
        Ok(self.data.get(&self.key(i, j)).cloned().unwrap_or_else(T::zero))
    }

    /// Build from `(i, j, value)` triplets; a repeated coordinate keeps its first value
    ///
    /// # Errors
    ///
    /// Returns `IndexError::OutOfBounds` for a coordinate outside the shape.
    pub fn from_triplets<I>(shape: (usize, usize), triplets: I) -> AssocResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut m = Self::with_shape(shape.0, shape.1, 0);
        for (i, j, v) in triplets {
            m.check_bounds(i, j)?;
            m.insert(i, j, v);
        }
        m.nnz_hint = m.nnz();
        Ok(m)
    }

    /// Fill from any matrix source, replacing the current contents
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatchError::Matrix` if the shapes differ.
    pub fn assign_from<E>(&mut self, src: &E) -> AssocResult<()>
    where
        E: MatrixSource<Value = T>,
    {
        assign::assign(self, src)
    }

    /// New matrix with the shape and non-zeros of `src`
    pub fn from_source<E>(src: &E, nnz_hint: usize) -> Self
    where
        E: MatrixSource<Value = T>,
    {
        let mut m = Self::with_shape(src.size1(), src.size2(), nnz_hint);
        assign::fill(&mut m, src);
        m
    }

    /// Dense copy
    pub fn to_dense(&self) -> Array2<T> {
        assign::to_dense(self)
    }

    /// Sparse copy of the non-zero cells of a dense array
    pub fn from_dense(dense: &ArrayView2<T>) -> Self {
        Self::from_source(dense, 0)
    }

    /// `self += src`
    pub fn plus_assign<E>(&mut self, src: &E) -> AssocResult<()>
    where
        E: MatrixSource<Value = T>,
        T: AddAssign,
    {
        assign::plus_assign(self, src)
    }

    /// `self -= src`
    pub fn minus_assign<E>(&mut self, src: &E) -> AssocResult<()>
    where
        E: MatrixSource<Value = T>,
        T: SubAssign,
    {
        assign::minus_assign(self, src)
    }
}

impl<T: Clone + MulAssign, O: Orientation> SparseMatrix<T, O> {
    /// `self *= factor` over the stored elements
    pub fn scale(&mut self, factor: T) {
        for v in self.data.values_mut() {
            *v *= factor.clone();
        }
    }
}

impl<T, O: Orientation> SparseStorage for SparseMatrix<T, O> {
    type Value = T;
    type Orient = O;
    type Pos = usize;

    fn size1(&self) -> usize {
        self.size1
    }

    fn size2(&self) -> usize {
        self.size2
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn locate(&self, i: usize, j: usize) -> Option<usize> {
        let key = self.key(i, j);
        self.data.contains_key(&key).then_some(key)
    }

    fn seek(&self, i: usize, j: usize) -> Option<usize> {
        let key = self.key(i, j);
        match self.key_direction() {
            Direction::Ascending => self.next_key(key, true),
            Direction::Descending => self.prev_key(key, true),
        }
    }

    fn seek_back(&self, i: usize, j: usize) -> Option<usize> {
        let key = self.key(i, j);
        match self.key_direction() {
            Direction::Ascending => self.prev_key(key, false),
            Direction::Descending => self.next_key(key, false),
        }
    }

    fn successor(&self, pos: usize) -> Option<usize> {
        match self.key_direction() {
            Direction::Ascending => self.next_key(pos, false),
            Direction::Descending => self.prev_key(pos, false),
        }
    }

    fn predecessor(&self, pos: usize) -> Option<usize> {
        match self.key_direction() {
            Direction::Ascending => self.prev_key(pos, false),
            Direction::Descending => self.next_key(pos, false),
        }
    }

    fn indices(&self, pos: usize) -> (usize, usize) {
        (
            O::index1(pos, self.size1, self.size2),
            O::index2(pos, self.size1, self.size2),
        )
    }

    fn value(&self, pos: usize) -> &T {
        self.data.get(&pos).expect("stale flat matrix position")
    }

    fn value_mut(&mut self, pos: usize) -> &mut T {
        self.data.get_mut(&pos).expect("stale flat matrix position")
    }

    fn access_entry(&mut self, i: usize, j: usize) -> &mut T
    where
        T: Zero,
    {
        self.access(i, j)
    }

    fn insert_entry(&mut self, i: usize, j: usize, value: T) -> bool {
        self.insert(i, j, value)
    }

    fn clear_entries(&mut self) {
        self.clear();
    }
}

impl<T: Clone, O: Orientation> MatrixSource for SparseMatrix<T, O>
where
    T: Zero,
{
    type Value = T;
    type Nonzeros<'a>
        = assign::Cloned<Elements<'a, Self>>
    where
        Self: 'a;

    fn size1(&self) -> usize {
        self.size1
    }

    fn size2(&self) -> usize {
        self.size2
    }

    fn get(&self, i: usize, j: usize) -> T {
        SparseMatrix::get(self, i, j)
    }

    fn nonzeros(&self, order: Major) -> Self::Nonzeros<'_> {
        assign::Cloned::new(self.elements(order))
    }
}
