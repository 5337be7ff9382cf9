//! Orientation functors
//!
//! An orientation maps a logical `(i, j)` coordinate of a `size1 × size2`
//! matrix to the key the element is stored under, and back again. The flat
//! matrix stores one linear key per element; the two-level matrix stores a
//! `(major, minor)` key pair.
//!
//! Besides the bijection an orientation reports two strides, `one1` and
//! `one2`: the key distance between neighbouring elements along dimension 1
//! (down a column) and dimension 2 (along a row). A stride of `±1` means the
//! neighbours are adjacent in storage and a cursor can take a native storage
//! step; any other non-zero stride forces a re-seek. A stride of `0` is a
//! malformed functor.
//!
//! # Examples
//!
//! ```
//! use tenrso_assoc::orientation::{ColumnMajor, Orientation, RowMajor};
//!
//! // 3×4 matrix, element (1, 2)
//! assert_eq!(RowMajor::element(1, 3, 2, 4), 6);
//! assert_eq!(ColumnMajor::element(1, 3, 2, 4), 7);
//! assert_eq!(RowMajor::index1(6, 3, 4), 1);
//! assert_eq!(RowMajor::index2(6, 3, 4), 2);
//! assert_eq!(RowMajor::one2(3, 4), 1);
//! assert_eq!(ColumnMajor::one2(3, 4), 3);
//! ```

use crate::error::{AssocResult, OrientationError};
use std::fmt;

/// Lexicographic order of stored keys: which index is the major one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Major {
    /// Keys follow `(i, j)` order
    Row,
    /// Keys follow `(j, i)` order
    Column,
}

impl Major {
    /// The other order
    pub fn transpose(self) -> Self {
        match self {
            Major::Row => Major::Column,
            Major::Column => Major::Row,
        }
    }

    /// Logical `(i, j)` of a coordinate given as (primary, secondary) in this order
    #[inline]
    pub fn coords(self, primary: usize, secondary: usize) -> (usize, usize) {
        match self {
            Major::Row => (primary, secondary),
            Major::Column => (secondary, primary),
        }
    }

    /// (primary, secondary) of a logical `(i, j)` in this order
    #[inline]
    pub fn split(self, (i, j): (usize, usize)) -> (usize, usize) {
        match self {
            Major::Row => (i, j),
            Major::Column => (j, i),
        }
    }

    /// Extents of the primary and secondary index for a `size1 × size2` matrix
    #[inline]
    pub fn extent(self, size1: usize, size2: usize) -> (usize, usize) {
        self.split((size1, size2))
    }
}

/// Whether keys grow or shrink along traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Direction implied by a stride; `None` for the neutral stride
    pub fn from_stride(stride: isize) -> Option<Self> {
        match stride.signum() {
            1 => Some(Direction::Ascending),
            -1 => Some(Direction::Descending),
            _ => None,
        }
    }
}

/// Matrix dimension: `One` walks down rows (index1), `Two` along columns (index2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    One,
    Two,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::One => write!(f, "dimension 1"),
            Axis::Two => write!(f, "dimension 2"),
        }
    }
}

/// Mapping between logical coordinates and storage keys
///
/// Implementors are zero-sized markers; every operation is a pure function
/// of the coordinate and the matrix shape.
///
/// # Contract
///
/// - `index1(element(i, s1, j, s2), s1, s2) == i` and likewise for `index2`
///   on `[0, s1) × [0, s2)`; the same holds for the split pair.
/// - Keys are strictly monotonic in [`Self::MAJOR`] lexicographic order,
///   ascending when both strides are positive and descending when both are
///   negative.
/// - Past-the-end coordinates `(s1, 0)` / `(i, s2)` (and `(0, s2)` / `(s1, j)`
///   for column orders) must map to keys that sort after every element of
///   the matrix / line in traversal order.
pub trait Orientation: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Lexicographic order of the keys
    const MAJOR: Major;

    /// Flat key of `(i, j)`
    fn element(i: usize, size1: usize, j: usize, size2: usize) -> usize;
    /// Row index of a flat key
    fn index1(key: usize, size1: usize, size2: usize) -> usize;
    /// Column index of a flat key
    fn index2(key: usize, size1: usize, size2: usize) -> usize;

    /// Key distance between `(i, j)` and `(i + 1, j)`
    fn one1(size1: usize, size2: usize) -> isize;
    /// Key distance between `(i, j)` and `(i, j + 1)`
    fn one2(size1: usize, size2: usize) -> isize;

    /// Major key of `(i, j)` for two-level storage
    fn element1(i: usize, size1: usize, j: usize, size2: usize) -> usize;
    /// Minor key of `(i, j)` for two-level storage
    fn element2(i: usize, size1: usize, j: usize, size2: usize) -> usize;
    /// Row index of a `(major, minor)` pair
    fn split_index1(major: usize, minor: usize, size1: usize, size2: usize) -> usize;
    /// Column index of a `(major, minor)` pair
    fn split_index2(major: usize, minor: usize, size1: usize, size2: usize) -> usize;

    /// Stride along one dimension
    fn stride(axis: Axis, size1: usize, size2: usize) -> isize {
        match axis {
            Axis::One => Self::one1(size1, size2),
            Axis::Two => Self::one2(size1, size2),
        }
    }

    /// Whether neighbours along `axis` are adjacent in storage
    fn is_contiguous(axis: Axis, size1: usize, size2: usize) -> bool {
        Self::stride(axis, size1, size2).abs() == 1
    }

    /// Direction of the stored keys along traversal order
    ///
    /// # Panics
    ///
    /// Panics if the stride along the minor dimension is zero, which means
    /// the functor is malformed.
    fn direction(size1: usize, size2: usize) -> Direction {
        let axis = match Self::MAJOR {
            Major::Row => Axis::Two,
            Major::Column => Axis::One,
        };
        let stride = Self::stride(axis, size1, size2);
        Direction::from_stride(stride).unwrap_or_else(|| {
            panic!(
                "{}",
                OrientationError::NeutralStride {
                    axis,
                    size1,
                    size2
                }
            )
        })
    }
}

/// Row-major keys: `i * size2 + j`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMajor;

impl Orientation for RowMajor {
    const MAJOR: Major = Major::Row;

    #[inline]
    fn element(i: usize, _size1: usize, j: usize, size2: usize) -> usize {
        i * size2 + j
    }

    #[inline]
    fn index1(key: usize, _size1: usize, size2: usize) -> usize {
        key / size2
    }

    #[inline]
    fn index2(key: usize, _size1: usize, size2: usize) -> usize {
        key % size2
    }

    #[inline]
    fn one1(_size1: usize, size2: usize) -> isize {
        size2 as isize
    }

    #[inline]
    fn one2(_size1: usize, _size2: usize) -> isize {
        1
    }

    #[inline]
    fn element1(i: usize, _size1: usize, _j: usize, _size2: usize) -> usize {
        i
    }

    #[inline]
    fn element2(_i: usize, _size1: usize, j: usize, _size2: usize) -> usize {
        j
    }

    #[inline]
    fn split_index1(major: usize, _minor: usize, _size1: usize, _size2: usize) -> usize {
        major
    }

    #[inline]
    fn split_index2(_major: usize, minor: usize, _size1: usize, _size2: usize) -> usize {
        minor
    }
}

/// Column-major keys: `j * size1 + i`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMajor;

impl Orientation for ColumnMajor {
    const MAJOR: Major = Major::Column;

    #[inline]
    fn element(i: usize, size1: usize, j: usize, _size2: usize) -> usize {
        j * size1 + i
    }

    #[inline]
    fn index1(key: usize, size1: usize, _size2: usize) -> usize {
        key % size1
    }

    #[inline]
    fn index2(key: usize, size1: usize, _size2: usize) -> usize {
        key / size1
    }

    #[inline]
    fn one1(_size1: usize, _size2: usize) -> isize {
        1
    }

    #[inline]
    fn one2(size1: usize, _size2: usize) -> isize {
        size1 as isize
    }

    #[inline]
    fn element1(_i: usize, _size1: usize, j: usize, _size2: usize) -> usize {
        j
    }

    #[inline]
    fn element2(i: usize, _size1: usize, _j: usize, _size2: usize) -> usize {
        i
    }

    #[inline]
    fn split_index1(_major: usize, minor: usize, _size1: usize, _size2: usize) -> usize {
        minor
    }

    #[inline]
    fn split_index2(major: usize, _minor: usize, _size1: usize, _size2: usize) -> usize {
        major
    }
}

/// Verify an orientation functor over a `size1 × size2` shape
///
/// Checks the stride signs, the flat and split bijections, strict key
/// monotonicity in traversal order, and that a claimed contiguous stride
/// really separates neighbours by one key. Runs in `O(size1 · size2)`.
///
/// # Examples
///
/// ```
/// use tenrso_assoc::orientation::{check_orientation, ColumnMajor, RowMajor};
///
/// assert!(check_orientation::<RowMajor>(4, 7).is_ok());
/// assert!(check_orientation::<ColumnMajor>(7, 4).is_ok());
/// ```
pub fn check_orientation<O: Orientation>(size1: usize, size2: usize) -> AssocResult<()> {
    if size1 == 0 || size2 == 0 {
        return Ok(());
    }

    let one1 = O::one1(size1, size2);
    let one2 = O::one2(size1, size2);
    for (axis, stride) in [(Axis::One, one1), (Axis::Two, one2)] {
        if stride == 0 {
            return Err(OrientationError::NeutralStride {
                axis,
                size1,
                size2,
            }
            .into());
        }
    }
    if one1.signum() != one2.signum() {
        return Err(OrientationError::MixedDirection { one1, one2 }.into());
    }
    let descending = one1 < 0;

    let (primary, secondary) = O::MAJOR.extent(size1, size2);
    let mut previous: Option<(usize, (usize, usize))> = None;
    for p in 0..primary {
        for q in 0..secondary {
            let (i, j) = O::MAJOR.coords(p, q);
            let key = O::element(i, size1, j, size2);
            let decoded = (O::index1(key, size1, size2), O::index2(key, size1, size2));
            if decoded != (i, j) {
                return Err(OrientationError::NotBijective { i, j, key, decoded }.into());
            }

            let pair = (
                O::element1(i, size1, j, size2),
                O::element2(i, size1, j, size2),
            );
            let decoded = (
                O::split_index1(pair.0, pair.1, size1, size2),
                O::split_index2(pair.0, pair.1, size1, size2),
            );
            if decoded != (i, j) {
                return Err(OrientationError::NotBijective { i, j, key, decoded }.into());
            }

            if let Some((prev_key, prev_pair)) = previous {
                let monotonic = if descending {
                    key < prev_key && pair < prev_pair
                } else {
                    key > prev_key && pair > prev_pair
                };
                if !monotonic {
                    return Err(OrientationError::NonMonotonic { i, j }.into());
                }
            }
            previous = Some((key, pair));

            if one1.abs() == 1 && i + 1 < size1 {
                let next = O::element(i + 1, size1, j, size2);
                if next as isize - key as isize != one1 {
                    return Err(OrientationError::StrideMismatch {
                        axis: Axis::One,
                        i,
                        j,
                    }
                    .into());
                }
            }
            if one2.abs() == 1 && j + 1 < size2 {
                let next = O::element(i, size1, j + 1, size2);
                if next as isize - key as isize != one2 {
                    return Err(OrientationError::StrideMismatch {
                        axis: Axis::Two,
                        i,
                        j,
                    }
                    .into());
                }
            }
        }
    }

    Ok(())
}
