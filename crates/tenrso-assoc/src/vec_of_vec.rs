//! Two-level associative sparse matrix
//!
//! [`SparseVecOfVec`] splits every key into a major and a minor part: an
//! outer ordered map selects the row (or column, for column-major
//! orientations) and an inner ordered map holds that line's elements. Many
//! small maps give cheaper per-line walks than one large map, at the cost of
//! a two-hop lookup.
//!
//! An empty bucket is always present at major key `0`. Construction,
//! [`resize`](SparseVecOfVec::resize) and [`clear`](SparseVecOfVec::clear)
//! re-establish it; other buckets are created lazily by
//! [`access`](SparseVecOfVec::access) and [`insert`](SparseVecOfVec::insert)
//! and dropped by [`remove`](SparseVecOfVec::remove) once empty.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::{ColumnMajor, SparseTraversal, SparseVecOfVec};
//!
//! let mut m = SparseVecOfVec::<i64, ColumnMajor>::with_shape(4, 3, 0);
//! m.insert(3, 0, 7);
//! m.insert(0, 2, 1);
//! *m.access(1, 0) -= 2;
//!
//! let column: Vec<_> = m.column(0).unwrap().map(|(i, _, &v)| (i, v)).collect();
//! assert_eq!(column, vec![(1, -2), (3, 7)]);
//! assert_eq!(m.nnz(), 3);
//! ```

use crate::assign::{self, MatrixSource};
use crate::cursor::{Elements, SparseTraversal};
use crate::error::{AssocError, AssocResult};
use crate::orientation::{Direction, Major, Orientation, RowMajor};
use crate::storage::SparseStorage;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Zero;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::ops::Bound::{self, Excluded, Included, Unbounded};
use std::ops::{AddAssign, MulAssign, SubAssign};
use tracing::debug;

type Bucket<T> = BTreeMap<usize, T>;

/// Sparse matrix stored as an ordered map of ordered maps
///
/// Equality compares shape, hint and stored elements; empty buckets are not
/// observable.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "RawVecOfVec<T, O>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseVecOfVec<T, O: Orientation = RowMajor> {
    size1: usize,
    size2: usize,
    nnz_hint: usize,
    data: BTreeMap<usize, Bucket<T>>,
    orientation: PhantomData<O>,
}

/// Serialized form; converted through `From` so the sentinel bucket is restored
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct RawVecOfVec<T, O: Orientation> {
    size1: usize,
    size2: usize,
    nnz_hint: usize,
    data: BTreeMap<usize, Bucket<T>>,
    #[serde(default)]
    orientation: PhantomData<O>,
}

#[cfg(feature = "serde")]
impl<T, O: Orientation> From<RawVecOfVec<T, O>> for SparseVecOfVec<T, O> {
    fn from(raw: RawVecOfVec<T, O>) -> Self {
        let mut data = raw.data;
        data.retain(|&major, bucket| major == 0 || !bucket.is_empty());
        data.entry(0).or_default();
        Self {
            size1: raw.size1,
            size2: raw.size2,
            nnz_hint: raw.nnz_hint,
            data,
            orientation: raw.orientation,
        }
    }
}

impl<T: PartialEq, O: Orientation> PartialEq for SparseVecOfVec<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.nnz_hint == other.nnz_hint
            && self.populated_buckets().eq(other.populated_buckets())
    }
}

impl<T, O: Orientation> Default for SparseVecOfVec<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Orientation> SparseVecOfVec<T, O> {
    /// Empty 0×0 matrix
    pub fn new() -> Self {
        Self::with_shape(0, 0, 0)
    }

    /// Empty `size1 × size2` matrix; `nnz_hint` is advisory
    pub fn with_shape(size1: usize, size2: usize, nnz_hint: usize) -> Self {
        let mut m = Self {
            size1,
            size2,
            nnz_hint,
            data: BTreeMap::new(),
            orientation: PhantomData,
        };
        m.reset_sentinel();
        m
    }

    fn reset_sentinel(&mut self) {
        self.data.clear();
        self.data.insert(0, Bucket::new());
    }

    /// Re-dimension the matrix. Stored elements are discarded.
    pub fn resize(&mut self, size1: usize, size2: usize, nnz_hint: usize) {
        debug!(
            from = ?(self.size1, self.size2),
            to = ?(size1, size2),
            dropped = self.nnz(),
            "resizing two-level sparse matrix"
        );
        self.size1 = size1;
        self.size2 = size2;
        self.nnz_hint = nnz_hint;
        self.reset_sentinel();
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

    /// Number of stored elements, summed over the buckets
    pub fn nnz(&self) -> usize {
        self.data.values().map(BTreeMap::len).sum()
    }

    pub fn nnz_hint(&self) -> usize {
        self.nnz_hint
    }

    pub fn is_empty(&self) -> bool {
        self.data.values().all(BTreeMap::is_empty)
    }

    /// Number of major buckets, the sentinel included
    pub fn bucket_count(&self) -> usize {
        self.data.len()
    }

    pub fn density(&self) -> f64 {
        let total = self.size1 as f64 * self.size2 as f64;
        if total == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / total
        }
    }

    fn split_key(&self, i: usize, j: usize) -> (usize, usize) {
        (
            O::element1(i, self.size1, j, self.size2),
            O::element2(i, self.size1, j, self.size2),
        )
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

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.get_ref(i, j).is_some()
    }

    /// Stored element at `(i, j)`, `None` when absent or out of range
    pub fn get_ref(&self, i: usize, j: usize) -> Option<&T> {
        if i >= self.size1 || j >= self.size2 {
            return None;
        }
        let (major, minor) = self.split_key(i, j);
        self.data.get(&major)?.get(&minor)
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
        let (major, minor) = self.split_key(i, j);
        self.data
            .entry(major)
            .or_default()
            .entry(minor)
            .or_insert_with(T::zero)
    }

    /// Insert `value` at `(i, j)` unless an element is already stored there
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn insert(&mut self, i: usize, j: usize, value: T) -> bool {
        self.assert_bounds(i, j);
        let (major, minor) = self.split_key(i, j);
        match self.data.entry(major).or_default().entry(minor) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Insert or replace, returning the previous element
    pub fn upsert(&mut self, i: usize, j: usize, value: T) -> Option<T> {
        self.assert_bounds(i, j);
        let (major, minor) = self.split_key(i, j);
        self.data.entry(major).or_default().insert(minor, value)
    }

    /// Remove the element at `(i, j)`, dropping its bucket once empty
    pub fn remove(&mut self, i: usize, j: usize) -> Option<T> {
        if i >= self.size1 || j >= self.size2 {
            return None;
        }
        let (major, minor) = self.split_key(i, j);
        let bucket = self.data.get_mut(&major)?;
        let removed = bucket.remove(&minor);
        if bucket.is_empty() && major != 0 {
            self.data.remove(&major);
        }
        removed
    }

    /// Remove every element; the shape is kept
    pub fn clear(&mut self) {
        debug!(buckets = self.data.len(), "clearing two-level sparse matrix");
        self.reset_sentinel();
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
        debug!(shape = ?self.shape(), "swapped two-level sparse matrices");
        Ok(())
    }

    /// Stored elements in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let (size1, size2) = self.shape();
        let descending = O::direction(size1, size2) == Direction::Descending;
        let buckets: Box<dyn Iterator<Item = (&usize, &Bucket<T>)> + '_> = if descending {
            Box::new(self.data.iter().rev())
        } else {
            Box::new(self.data.iter())
        };
        buckets.flat_map(move |(&major, bucket)| {
            let cells: Box<dyn Iterator<Item = (&usize, &T)> + '_> = if descending {
                Box::new(bucket.iter().rev())
            } else {
                Box::new(bucket.iter())
            };
            cells.map(move |(&minor, v)| {
                (
                    O::split_index1(major, minor, size1, size2),
                    O::split_index2(major, minor, size1, size2),
                    v,
                )
            })
        })
    }

    fn populated_buckets(&self) -> impl Iterator<Item = (&usize, &Bucket<T>)> + '_ {
        self.data.iter().filter(|(_, bucket)| !bucket.is_empty())
    }

    fn key_direction(&self) -> Direction {
        O::direction(self.size1, self.size2)
    }

    /// First `(major, minor)` at or after the pair in ascending key order
    fn next_pair(&self, major: usize, minor: usize, inclusive: bool) -> Option<(usize, usize)> {
        let bound: Bound<usize> = if inclusive {
            Included(minor)
        } else {
            Excluded(minor)
        };
        for (&outer, bucket) in self.data.range(major..) {
            let hit = if outer == major {
                bucket.range((bound, Unbounded)).next()
            } else {
                bucket.iter().next()
            };
            if let Some((&inner, _)) = hit {
                return Some((outer, inner));
            }
        }
        None
    }

    /// Last `(major, minor)` at or before the pair in ascending key order
    fn prev_pair(&self, major: usize, minor: usize, inclusive: bool) -> Option<(usize, usize)> {
        let bound: Bound<usize> = if inclusive {
            Included(minor)
        } else {
            Excluded(minor)
        };
        for (&outer, bucket) in self.data.range(..=major).rev() {
            let hit = if outer == major {
                bucket.range((Unbounded, bound)).next_back()
            } else {
                bucket.iter().next_back()
            };
            if let Some((&inner, _)) = hit {
                return Some((outer, inner));
            }
        }
        None
    }
}

impl<T: Clone + Zero, O: Orientation> SparseVecOfVec<T, O> {
    /// Element at `(i, j)`, zero when absent; never inserts
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.assert_bounds(i, j);
        self.get_ref(i, j).cloned().unwrap_or_else(T::zero)
    }

    /// Checked variant of [`get`](Self::get)
    pub fn try_get(&self, i: usize, j: usize) -> AssocResult<T> {
        self.check_bounds(i, j)?;
        Ok(self.get_ref(i, j).cloned().unwrap_or_else(T::zero))
    }

    /// Build from `(i, j, value)` triplets; a repeated coordinate keeps its first value
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

    pub fn to_dense(&self) -> Array2<T> {
        assign::to_dense(self)
    }

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

impl<T: Clone + MulAssign, O: Orientation> SparseVecOfVec<T, O> {
    /// `self *= factor` over the stored elements
    pub fn scale(&mut self, factor: T) {
        for v in self.data.values_mut().flat_map(BTreeMap::values_mut) {
            *v *= factor.clone();
        }
    }
}

impl<T, O: Orientation> SparseStorage for SparseVecOfVec<T, O> {
    type Value = T;
    type Orient = O;
    type Pos = (usize, usize);

    fn size1(&self) -> usize {
        self.size1
    }

    fn size2(&self) -> usize {
        self.size2
    }

    fn nnz(&self) -> usize {
        SparseVecOfVec::nnz(self)
    }

    fn locate(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        let (major, minor) = self.split_key(i, j);
        self.data
            .get(&major)?
            .contains_key(&minor)
            .then_some((major, minor))
    }

    fn seek(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        let (major, minor) = self.split_key(i, j);
        match self.key_direction() {
            Direction::Ascending => self.next_pair(major, minor, true),
            Direction::Descending => self.prev_pair(major, minor, true),
        }
    }

    fn seek_back(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        let (major, minor) = self.split_key(i, j);
        match self.key_direction() {
            Direction::Ascending => self.prev_pair(major, minor, false),
            Direction::Descending => self.next_pair(major, minor, false),
        }
    }

    fn successor(&self, (major, minor): (usize, usize)) -> Option<(usize, usize)> {
        match self.key_direction() {
            Direction::Ascending => self.next_pair(major, minor, false),
            Direction::Descending => self.prev_pair(major, minor, false),
        }
    }

    fn predecessor(&self, (major, minor): (usize, usize)) -> Option<(usize, usize)> {
        match self.key_direction() {
            Direction::Ascending => self.prev_pair(major, minor, false),
            Direction::Descending => self.next_pair(major, minor, false),
        }
    }

    fn indices(&self, (major, minor): (usize, usize)) -> (usize, usize) {
        (
            O::split_index1(major, minor, self.size1, self.size2),
            O::split_index2(major, minor, self.size1, self.size2),
        )
    }

    fn value(&self, (major, minor): (usize, usize)) -> &T {
        self.data
            .get(&major)
            .and_then(|bucket| bucket.get(&minor))
            .expect("stale two-level matrix position")
    }

    fn value_mut(&mut self, (major, minor): (usize, usize)) -> &mut T {
        self.data
            .get_mut(&major)
            .and_then(|bucket| bucket.get_mut(&minor))
            .expect("stale two-level matrix position")
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

impl<T: Clone, O: Orientation> MatrixSource for SparseVecOfVec<T, O>
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
        SparseVecOfVec::get(self, i, j)
    }

    fn nonzeros(&self, order: Major) -> Self::Nonzeros<'_> {
        assign::Cloned::new(self.elements(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::test_support::MirroredRowMajor;
    use crate::orientation::ColumnMajor;

    #[test]
    fn test_sentinel_bucket() {
        let m = SparseVecOfVec::<f64>::new();
        assert_eq!(m.bucket_count(), 1);
        assert!(m.is_empty());

        let mut m = SparseVecOfVec::<f64>::with_shape(3, 3, 0);
        m.insert(2, 2, 1.0);
        assert_eq!(m.bucket_count(), 2);
        m.clear();
        assert_eq!(m.bucket_count(), 1);
        m.insert(1, 0, 1.0);
        m.resize(5, 5, 0);
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.shape(), (5, 5));
    }

    #[test]
    fn test_lazy_buckets() {
        let mut m = SparseVecOfVec::<i32, ColumnMajor>::with_shape(4, 4, 0);
        *m.access(3, 2) = 6;
        assert!(m.insert(0, 2, 1));
        assert!(!m.insert(0, 2, 9));
        // both live in the bucket of column 2
        assert_eq!(m.bucket_count(), 2);
        assert_eq!(m.get(3, 2), 6);
        assert_eq!(m.get(0, 2), 1);
        assert_eq!(m.get(1, 2), 0);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_remove_and_upsert() {
        let mut m = SparseVecOfVec::<i32>::with_shape(2, 2, 0);
        assert_eq!(m.upsert(1, 1, 4), None);
        assert_eq!(m.upsert(1, 1, 5), Some(4));
        assert_eq!(m.remove(1, 1), Some(5));
        assert_eq!(m.remove(1, 1), None);
        assert_eq!(m.remove(0, 0), None);
        assert!(m.is_empty());
    }

    #[test]
    fn test_swap_roundtrip() {
        let mut a = SparseVecOfVec::<i32>::with_shape(3, 3, 0);
        let mut b = SparseVecOfVec::<i32>::with_shape(3, 3, 0);
        a.insert(0, 1, 1);
        b.insert(2, 2, 2);
        let (a0, b0) = (a.clone(), b.clone());

        a.swap(&mut b).unwrap();
        assert_eq!(a, b0);
        assert_eq!(b, a0);
        a.swap(&mut b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        let mut c = SparseVecOfVec::<i32>::with_shape(3, 4, 0);
        assert!(a.swap(&mut c).is_err());
    }

    #[test]
    fn test_iter_descending_orientation() {
        let mut m = SparseVecOfVec::<i32, MirroredRowMajor>::with_shape(3, 3, 0);
        m.insert(2, 0, 3);
        m.insert(0, 1, 1);
        m.insert(0, 2, 2);
        let cells: Vec<_> = m.iter().map(|(i, j, &v)| (i, j, v)).collect();
        assert_eq!(cells, vec![(0, 1, 1), (0, 2, 2), (2, 0, 3)]);
    }

    #[test]
    fn test_storage_positions() {
        let mut m = SparseVecOfVec::<i32>::with_shape(3, 3, 0);
        m.insert(0, 2, 1);
        m.insert(2, 0, 2);
        let first = m.seek(0, 0).unwrap();
        assert_eq!(m.indices(first), (0, 2));
        let second = m.successor(first).unwrap();
        assert_eq!(m.indices(second), (2, 0));
        assert_eq!(m.successor(second), None);
        assert_eq!(m.predecessor(second), Some(first));
        assert_eq!(m.seek_back(0, 2), None);
        assert_eq!(m.seek(1, 0), Some(second));
        assert_eq!(m.locate(1, 1), None);
    }

    #[test]
    fn test_dense_conversion() {
        let mut m = SparseVecOfVec::<f64, ColumnMajor>::with_shape(2, 3, 0);
        m.insert(1, 2, 4.0);
        m.insert(0, 0, 1.5);
        let dense = m.to_dense();
        assert_eq!(dense[[1, 2]], 4.0);
        assert_eq!(dense[[0, 0]], 1.5);
        assert_eq!(dense[[1, 0]], 0.0);

        let back = SparseVecOfVec::<f64, ColumnMajor>::from_dense(&dense.view());
        assert_eq!(back, m);
    }

    #[test]
    fn test_remove_restores_fresh_layout() {
        let fresh = SparseVecOfVec::<i32>::with_shape(3, 3, 0);
        let mut m = fresh.clone();
        m.insert(2, 2, 7);
        assert_eq!(m.bucket_count(), 2);
        assert_eq!(m.remove(2, 2), Some(7));
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m, fresh);

        // the sentinel survives emptying its own line
        m.insert(0, 1, 4);
        m.remove(0, 1);
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m, fresh);
    }

    #[test]
    fn test_equality_ignores_empty_buckets() {
        let mut a = SparseVecOfVec::<i32, ColumnMajor>::with_shape(3, 3, 0);
        let mut b = a.clone();
        a.insert(1, 2, 5);
        b.insert(1, 2, 5);
        b.data.entry(1).or_default();
        assert_eq!(a, b);

        b.upsert(1, 2, 6);
        assert_ne!(a, b);
        assert_ne!(a, SparseVecOfVec::with_shape(3, 4, 0));
    }

    #[test]
    fn test_density_of_large_shape() {
        let mut m = SparseVecOfVec::<f64>::with_shape(usize::MAX, 4, 0);
        assert_eq!(m.density(), 0.0);
        m.insert(usize::MAX - 1, 3, 1.0);
        let density = m.density();
        assert!(density > 0.0 && density < 1e-18);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_restores_sentinel() {
        let json = r#"{"size1":2,"size2":2,"nnz_hint":1,"data":{"1":{"0":5},"0":{}}}"#;
        let m: SparseVecOfVec<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(m.bucket_count(), 2);

        let json = r#"{"size1":2,"size2":2,"nnz_hint":1,"data":{"1":{"0":5}}}"#;
        let m: SparseVecOfVec<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(m.bucket_count(), 2);
        assert!(m.data.contains_key(&0));
        assert_eq!(m.get(1, 0), 5);
        assert_eq!(m.nnz(), 1);

        // stray empty buckets are dropped
        let json = r#"{"size1":3,"size2":2,"nnz_hint":0,"data":{"2":{}}}"#;
        let m: SparseVecOfVec<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m, SparseVecOfVec::with_shape(3, 2, 0));
    }
}
