//! Associative storage seam
//!
//! [`SparseStorage`] is the small set of ordered-map primitives that cursors
//! and the boundary-seeking lookups are written against. Both matrix
//! containers implement it; everything above this layer is generic.
//!
//! Positions are opaque tokens (`Pos`) naming one populated element. The
//! past-the-end position is `None` throughout.
//!
//! "Traversal order" below is the lexicographic order of the orientation's
//! [`MAJOR`](crate::orientation::Orientation::MAJOR) index pair. It equals
//! ascending key order for ascending orientations and descending key order
//! for descending ones; the primitives hide that difference.

use crate::orientation::Orientation;
use scirs2_core::numeric::Zero;
use std::fmt::Debug;

/// Ordered associative storage of a sparse matrix
pub trait SparseStorage {
    /// Element type
    type Value;
    /// Orientation functor the keys are computed with
    type Orient: Orientation;
    /// Position token of one populated element
    type Pos: Copy + Eq + Debug;

    /// Number of rows
    fn size1(&self) -> usize;
    /// Number of columns
    fn size2(&self) -> usize;
    /// Number of stored elements
    fn nnz(&self) -> usize;

    /// Exact lookup of `(i, j)`
    fn locate(&self, i: usize, j: usize) -> Option<Self::Pos>;

    /// First populated position at or after `(i, j)` in traversal order
    ///
    /// `(i, j)` may be a past-the-end coordinate such as `(size1, 0)` or
    /// `(i, size2)`.
    fn seek(&self, i: usize, j: usize) -> Option<Self::Pos>;

    /// Last populated position strictly before `(i, j)` in traversal order
    fn seek_back(&self, i: usize, j: usize) -> Option<Self::Pos>;

    /// Next populated position in traversal order
    fn successor(&self, pos: Self::Pos) -> Option<Self::Pos>;

    /// Previous populated position in traversal order
    fn predecessor(&self, pos: Self::Pos) -> Option<Self::Pos>;

    /// Logical `(i, j)` of a position
    fn indices(&self, pos: Self::Pos) -> (usize, usize);

    /// Value at a position
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not name a stored element.
    fn value(&self, pos: Self::Pos) -> &Self::Value;

    /// Mutable value at a position
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not name a stored element.
    fn value_mut(&mut self, pos: Self::Pos) -> &mut Self::Value;

    /// Lookup-or-insert-zero, returning the element
    fn access_entry(&mut self, i: usize, j: usize) -> &mut Self::Value
    where
        Self::Value: Zero;

    /// Insert if absent; returns whether the element was inserted
    fn insert_entry(&mut self, i: usize, j: usize, value: Self::Value) -> bool;

    /// Remove every element, keeping the shape
    fn clear_entries(&mut self);
}
