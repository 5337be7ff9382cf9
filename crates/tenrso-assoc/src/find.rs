//! Boundary-seeking lookups
//!
//! `find1(i, j)` returns the populated `(i', j')` with `i' >= i` and
//! `j' >= j` that comes first in row-major order; `find2(i, j)` does the same
//! in column-major order. Together with their backward and line-confined
//! counterparts they are the only way cursors move when a native storage
//! step is not available.
//!
//! Every search is expressed in a *requested* order (row- or column-major)
//! over (primary, secondary) coordinates:
//!
//! - When the requested order is the storage's native order, a bound search
//!   lands on the first element at or after `(p, q)`. If its secondary index
//!   is short of `q` the search landed on a later line; restart from that
//!   line. The primary index strictly increases, so the loop terminates.
//! - Otherwise the storage lines run across the requested ones. Each
//!   populated native line is bound-searched and the lexicographic minimum
//!   is kept; native line numbers strictly increase.
//!
//! Zero-sized matrices and past-the-end requests short-circuit to `None`
//! without consulting the orientation.

use crate::error::OrientationError;
use crate::orientation::{Axis, Major, Orientation};
use crate::storage::SparseStorage;

/// First populated position at or after `(i, j)` in row-major order
///
/// # Panics
///
/// Panics if the orientation reports a neutral stride along dimension 1.
pub fn find1<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    if is_degenerate(s) {
        return None;
    }
    require_stride::<S>(s, Axis::One);
    first_at_or_after(s, Major::Row, i, j)
}

/// First populated position at or after `(i, j)` in column-major order
///
/// # Panics
///
/// Panics if the orientation reports a neutral stride along dimension 2.
pub fn find2<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    if is_degenerate(s) {
        return None;
    }
    require_stride::<S>(s, Axis::Two);
    first_at_or_after(s, Major::Column, j, i)
}

/// First element of the last populated row before `i` that has an element in a column `>= j`
///
/// This is the position a row cursor anchored at column `j` occupies one
/// step before row `i`.
pub fn rfind1<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    if is_degenerate(s) {
        return None;
    }
    last_head_before(s, Major::Row, i, j)
}

/// Column-major counterpart of [`rfind1`]
pub fn rfind2<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    if is_degenerate(s) {
        return None;
    }
    last_head_before(s, Major::Column, j, i)
}

/// First element of row `i` in a column `>= j`
pub fn seek_in_row<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    first_on_line(s, Major::Row, i, j)
}

/// First element of column `j` in a row `>= i`
pub fn seek_in_column<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    first_on_line(s, Major::Column, j, i)
}

/// Last element of row `i` in a column `< j`
pub fn rseek_in_row<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    last_on_line_before(s, Major::Row, i, j)
}

/// Last element of column `j` in a row `< i`
pub fn rseek_in_column<S: SparseStorage>(s: &S, i: usize, j: usize) -> Option<S::Pos> {
    last_on_line_before(s, Major::Column, j, i)
}

fn is_degenerate<S: SparseStorage>(s: &S) -> bool {
    s.size1() == 0 || s.size2() == 0
}

fn require_stride<S: SparseStorage>(s: &S, axis: Axis) {
    let (size1, size2) = (s.size1(), s.size2());
    if <S::Orient as Orientation>::stride(axis, size1, size2) == 0 {
        panic!(
            "{}",
            OrientationError::NeutralStride {
                axis,
                size1,
                size2
            }
        );
    }
}

#[inline]
fn primary_of<S: SparseStorage>(s: &S, order: Major, pos: S::Pos) -> usize {
    order.split(s.indices(pos)).0
}

fn seek_at<S: SparseStorage>(s: &S, order: Major, p: usize, q: usize) -> Option<S::Pos> {
    let (i, j) = order.coords(p, q);
    s.seek(i, j)
}

fn seek_back_at<S: SparseStorage>(s: &S, order: Major, p: usize, q: usize) -> Option<S::Pos> {
    let (i, j) = order.coords(p, q);
    s.seek_back(i, j)
}

/// Lexicographically smallest populated `(p', q')` in `order` with `p' >= p`, `q' >= q`
pub(crate) fn first_at_or_after<S: SparseStorage>(
    s: &S,
    order: Major,
    p: usize,
    q: usize,
) -> Option<S::Pos> {
    let (primary, secondary) = order.extent(s.size1(), s.size2());
    if p >= primary || q >= secondary {
        return None;
    }

    if order == <S::Orient as Orientation>::MAJOR {
        let mut p = p;
        loop {
            let pos = seek_at(s, order, p, q)?;
            let (pp, qq) = order.split(s.indices(pos));
            if qq >= q {
                return Some(pos);
            }
            // landed on a later line short of q
            p = pp;
        }
    }

    // native lines are indexed by q
    let mut best: Option<(S::Pos, (usize, usize))> = None;
    let mut line = q;
    while line < secondary {
        let Some(pos) = seek_at(s, order, p, line) else {
            break;
        };
        let (pp, qq) = order.split(s.indices(pos));
        if qq != line {
            line = qq;
            continue;
        }
        if best.map_or(true, |(_, key)| (pp, qq) < key) {
            best = Some((pos, (pp, qq)));
        }
        if pp == p {
            break;
        }
        line += 1;
    }
    best.map(|(pos, _)| pos)
}

/// Greatest populated primary index `< p` in `order`
fn last_line_before<S: SparseStorage>(s: &S, order: Major, p: usize) -> Option<usize> {
    if p == 0 {
        return None;
    }

    if order == <S::Orient as Orientation>::MAJOR {
        return seek_back_at(s, order, p, 0).map(|pos| primary_of(s, order, pos));
    }

    let (_, secondary) = order.extent(s.size1(), s.size2());
    let mut best: Option<usize> = None;
    let mut line = 0;
    while line < secondary {
        let Some(pos) = seek_at(s, order, 0, line) else {
            break;
        };
        line = order.split(s.indices(pos)).1;
        if let Some(back) = seek_back_at(s, order, p, line) {
            let (pp, qq) = order.split(s.indices(back));
            if qq == line && best.map_or(true, |b| pp > b) {
                best = Some(pp);
                if pp + 1 == p {
                    break;
                }
            }
        }
        line += 1;
    }
    best
}

/// Head (first element with secondary `>= q`) of the last such line before `p`
pub(crate) fn last_head_before<S: SparseStorage>(
    s: &S,
    order: Major,
    p: usize,
    q: usize,
) -> Option<S::Pos> {
    let (primary, secondary) = order.extent(s.size1(), s.size2());
    if q >= secondary {
        return None;
    }
    let mut p = p.min(primary);
    loop {
        let prev = last_line_before(s, order, p)?;
        if let Some(head) = first_on_line(s, order, prev, q) {
            return Some(head);
        }
        p = prev;
    }
}

/// First populated `(p, q')` with `q' >= q`
pub(crate) fn first_on_line<S: SparseStorage>(
    s: &S,
    order: Major,
    p: usize,
    q: usize,
) -> Option<S::Pos> {
    first_at_or_after(s, order, p, q).filter(|&pos| primary_of(s, order, pos) == p)
}

/// Last populated `(p, q')` with `q' < q`
pub(crate) fn last_on_line_before<S: SparseStorage>(
    s: &S,
    order: Major,
    p: usize,
    q: usize,
) -> Option<S::Pos> {
    let (primary, secondary) = order.extent(s.size1(), s.size2());
    if p >= primary || q == 0 {
        return None;
    }
    let q = q.min(secondary);

    if order == <S::Orient as Orientation>::MAJOR {
        return seek_back_at(s, order, p, q).filter(|&pos| primary_of(s, order, pos) == p);
    }

    // step down through the populated native lines below q
    let mut line = q;
    loop {
        let pos = seek_back_at(s, order, 0, line)?;
        line = order.split(s.indices(pos)).1;
        let (i, j) = order.coords(p, line);
        if let Some(hit) = s.locate(i, j) {
            return Some(hit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::test_support::{MirroredRowMajor, PaddedRowMajor};
    use crate::orientation::{ColumnMajor, RowMajor};
    use crate::{SparseMatrix, SparseVecOfVec};

    const CELLS: [(usize, usize); 6] = [(0, 3), (1, 1), (1, 4), (3, 0), (3, 2), (4, 4)];

    fn populated<S: SparseStorage>(s: &S, pos: Option<S::Pos>) -> Option<(usize, usize)> {
        pos.map(|p| s.indices(p))
    }

    fn expected(order: Major, i: usize, j: usize) -> Option<(usize, usize)> {
        CELLS
            .iter()
            .copied()
            .filter(|&(a, b)| a >= i && b >= j)
            .min_by_key(|&cell| order.split(cell))
    }

    fn check_find<S: SparseStorage>(s: &S) {
        for i in 0..=5 {
            for j in 0..=5 {
                assert_eq!(
                    populated(s, find1(s, i, j)),
                    expected(Major::Row, i, j),
                    "find1({}, {})",
                    i,
                    j
                );
                assert_eq!(
                    populated(s, find2(s, i, j)),
                    expected(Major::Column, i, j),
                    "find2({}, {})",
                    i,
                    j
                );
            }
        }
    }

    fn flat<O: Orientation>() -> SparseMatrix<f64, O> {
        let mut m = SparseMatrix::with_shape(5, 5, CELLS.len());
        for (n, &(i, j)) in CELLS.iter().enumerate() {
            m.insert(i, j, n as f64 + 1.0);
        }
        m
    }

    fn nested<O: Orientation>() -> SparseVecOfVec<f64, O> {
        let mut m = SparseVecOfVec::with_shape(5, 5, CELLS.len());
        for (n, &(i, j)) in CELLS.iter().enumerate() {
            m.insert(i, j, n as f64 + 1.0);
        }
        m
    }

    #[test]
    fn test_find_flat_orientations() {
        check_find(&flat::<RowMajor>());
        check_find(&flat::<ColumnMajor>());
        check_find(&flat::<MirroredRowMajor>());
        check_find(&flat::<PaddedRowMajor>());
    }

    #[test]
    fn test_find_two_level_orientations() {
        check_find(&nested::<RowMajor>());
        check_find(&nested::<ColumnMajor>());
        check_find(&nested::<MirroredRowMajor>());
        check_find(&nested::<PaddedRowMajor>());
    }

    #[test]
    fn test_find_skips_short_rows() {
        // row 1 ends at column 4, row 3 has nothing at or after column 3
        let m = flat::<RowMajor>();
        assert_eq!(populated(&m, find1(&m, 1, 3)), Some((1, 4)));
        assert_eq!(populated(&m, find1(&m, 2, 3)), Some((4, 4)));
        assert_eq!(populated(&m, find1(&m, 5, 0)), None);
    }

    #[test]
    fn test_rfind() {
        let m = flat::<ColumnMajor>();
        // populated rows: 0, 1, 3, 4
        assert_eq!(populated(&m, rfind1(&m, 5, 0)), Some((4, 4)));
        assert_eq!(populated(&m, rfind1(&m, 4, 0)), Some((3, 0)));
        assert_eq!(populated(&m, rfind1(&m, 3, 0)), Some((1, 1)));
        assert_eq!(populated(&m, rfind1(&m, 1, 0)), Some((0, 3)));
        assert_eq!(populated(&m, rfind1(&m, 0, 0)), None);
        // anchored at column 3, row 3 has no element and is skipped
        assert_eq!(populated(&m, rfind1(&m, 4, 3)), Some((1, 4)));
        // populated columns: 0, 1, 2, 3, 4
        assert_eq!(populated(&m, rfind2(&m, 0, 5)), Some((1, 4)));
        assert_eq!(populated(&m, rfind2(&m, 2, 5)), Some((4, 4)));
    }

    #[test]
    fn test_line_confined() {
        let m = nested::<RowMajor>();
        assert_eq!(populated(&m, seek_in_row(&m, 1, 2)), Some((1, 4)));
        assert_eq!(populated(&m, seek_in_row(&m, 1, 5)), None);
        assert_eq!(populated(&m, seek_in_row(&m, 2, 0)), None);
        assert_eq!(populated(&m, rseek_in_row(&m, 1, 4)), Some((1, 1)));
        assert_eq!(populated(&m, rseek_in_row(&m, 1, 1)), None);
        assert_eq!(populated(&m, seek_in_column(&m, 0, 4)), Some((1, 4)));
        assert_eq!(populated(&m, rseek_in_column(&m, 4, 4)), Some((1, 4)));
        assert_eq!(populated(&m, rseek_in_column(&m, 5, 4)), Some((4, 4)));
        assert_eq!(populated(&m, rseek_in_column(&m, 1, 4)), None);
    }

    #[test]
    fn test_zero_sized_short_circuits() {
        let m = SparseMatrix::<f64>::with_shape(0, 4, 0);
        assert!(find1(&m, 0, 0).is_none());
        assert!(find2(&m, 0, 0).is_none());
        assert!(rfind1(&m, 0, 0).is_none());
    }

    /// Row-major keys whose functor reports no movement along dimension 1
    #[derive(Debug, Clone, Copy, Default)]
    struct Collapsed;

    impl Orientation for Collapsed {
        const MAJOR: Major = Major::Row;
        fn element(i: usize, _: usize, j: usize, size2: usize) -> usize {
            i * size2 + j
        }
        fn index1(key: usize, _: usize, size2: usize) -> usize {
            key / size2
        }
        fn index2(key: usize, _: usize, size2: usize) -> usize {
            key % size2
        }
        fn one1(_: usize, _: usize) -> isize {
            0
        }
        fn one2(_: usize, _: usize) -> isize {
            1
        }
        fn element1(i: usize, _: usize, _: usize, _: usize) -> usize {
            i
        }
        fn element2(_: usize, _: usize, j: usize, _: usize) -> usize {
            j
        }
        fn split_index1(major: usize, _: usize, _: usize, _: usize) -> usize {
            major
        }
        fn split_index2(_: usize, minor: usize, _: usize, _: usize) -> usize {
            minor
        }
    }

    #[test]
    #[should_panic(expected = "neutral stride along dimension 1 for a 3×3 matrix")]
    fn test_neutral_stride_panics_in_begin1() {
        use crate::SparseTraversal;

        let mut m = SparseMatrix::<f64, Collapsed>::with_shape(3, 3, 0);
        m.insert(1, 1, 2.0);
        let _ = m.begin1();
    }

    #[test]
    #[should_panic(expected = "neutral stride")]
    fn test_neutral_stride_panics_in_find1() {
        let m = SparseVecOfVec::<f64, Collapsed>::with_shape(3, 3, 0);
        let _ = find1(&m, 0, 0);
    }

    #[test]
    fn test_neutral_stride_spares_other_dimension_and_empty_shapes() {
        let mut m = SparseMatrix::<f64, Collapsed>::with_shape(3, 3, 0);
        m.insert(2, 1, 2.0);
        assert_eq!(populated(&m, find2(&m, 0, 0)), Some((2, 1)));

        let empty = SparseMatrix::<f64, Collapsed>::with_shape(0, 3, 0);
        assert!(find1(&empty, 0, 0).is_none());
    }
}
