//! Bidirectional cursors over populated elements
//!
//! A [`Cursor`] walks the populated elements of a matrix along one
//! dimension. There is one cursor type for both dimensions and both
//! mutabilities: the dimension is the [`Axis`] field and the mutability is
//! the reference type `R` (`&S` or `&mut S`).
//!
//! - `begin1()` / `end1()` / `find1()` give an *unconfined* dimension-1
//!   cursor that stops once per populated row, at the row's first element.
//!   `begin2()` / `end2()` / `find2()` do the same over columns.
//! - `begin()` / `end()` on any cursor spawn the orthogonal cursor
//!   *confined* to the line through the current element: a row cursor yields
//!   a column-wise walk over that row and vice versa. This is the nested
//!   iteration contract.
//! - `advance()` / `retreat()` move one step. A confined cursor whose
//!   orientation stride is contiguous (`±1`) takes the native storage step;
//!   every other move re-seeks through the boundary-seeking lookups.
//!
//! The borrow checker enforces the lifetime rules: a cursor cannot outlive
//! its matrix, and the matrix cannot be resized or cleared while a cursor
//! borrows it.
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
//! let mut visited = Vec::new();
//! let mut rows = m.begin1();
//! while rows != m.end1() {
//!     let mut it = rows.begin();
//!     while it != rows.end() {
//!         visited.push((it.index1(), it.index2(), *it.value()));
//!         it.advance();
//!     }
//!     rows.advance();
//! }
//! assert_eq!(visited, vec![(0, 0, 1.0), (1, 2, 5.0), (2, 1, 9.0)]);
//!
//! // The same walk in column-major order through the iterator adapters
//! let by_column: Vec<_> = m
//!     .columns()
//!     .flat_map(|(_, column)| column.map(|(i, j, &v)| (i, j, v)))
//!     .collect();
//! assert_eq!(by_column, vec![(0, 0, 1.0), (2, 1, 9.0), (1, 2, 5.0)]);
//! ```

use crate::find;
use crate::orientation::{Axis, Major, Orientation};
use crate::storage::SparseStorage;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::ptr;
use tracing::trace;

/// Position over the populated elements of a matrix along one dimension
pub struct Cursor<R>
where
    R: Deref,
    R::Target: SparseStorage,
{
    matrix: R,
    axis: Axis,
    /// Row (for `Axis::Two`) or column (for `Axis::One`) the cursor is confined to
    line: Option<usize>,
    /// Lower bound on the other index for unconfined cursors
    anchor: usize,
    pos: Option<<R::Target as SparseStorage>::Pos>,
}

/// Cursor over a shared matrix
pub type ConstCursor<'a, S> = Cursor<&'a S>;

/// Cursor over an exclusively borrowed matrix
pub type MutCursor<'a, S> = Cursor<&'a mut S>;

impl<R, S> Cursor<R>
where
    R: Deref<Target = S>,
    S: SparseStorage,
{
    pub(crate) fn unconfined(matrix: R, axis: Axis, anchor: usize, pos: Option<S::Pos>) -> Self {
        Self {
            matrix,
            axis,
            line: None,
            anchor,
            pos,
        }
    }

    pub(crate) fn confined(matrix: R, axis: Axis, line: usize, pos: Option<S::Pos>) -> Self {
        Self {
            matrix,
            axis,
            line: Some(line),
            anchor: 0,
            pos,
        }
    }

    /// Dimension the cursor moves along
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The row or column a nested cursor is confined to
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Whether the cursor is past the end
    pub fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// Storage position, `None` past the end
    pub fn position(&self) -> Option<S::Pos> {
        self.pos
    }

    /// Logical `(i, j)`, `None` past the end
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.pos.map(|pos| self.matrix.indices(pos))
    }

    /// Row index of the current element
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn index1(&self) -> usize {
        self.matrix.indices(self.current()).0
    }

    /// Column index of the current element
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn index2(&self) -> usize {
        self.matrix.indices(self.current()).1
    }

    /// Value of the current element
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn value<'s>(&'s self) -> &'s S::Value
    where
        S: 's,
    {
        let pos = self.current();
        debug_assert!(self.in_bounds(pos), "cursor decodes outside the matrix");
        self.matrix.value(pos)
    }

    /// Step forward
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn advance(&mut self) {
        let pos = self.current();
        let m = &*self.matrix;
        let (i, j) = m.indices(pos);
        let (size1, size2) = (m.size1(), m.size2());

        self.pos = match (self.axis, self.line) {
            (Axis::One, None) => find::find1(m, i + 1, self.anchor),
            (Axis::Two, None) => find::find2(m, self.anchor, j + 1),
            (Axis::One, Some(column)) => {
                if <S::Orient as Orientation>::is_contiguous(Axis::One, size1, size2) {
                    m.successor(pos).filter(|&next| m.indices(next).1 == column)
                } else {
                    trace!(axis = %self.axis, column, "non-contiguous stride, re-seeking");
                    find::seek_in_column(m, i + 1, column)
                }
            }
            (Axis::Two, Some(row)) => {
                if <S::Orient as Orientation>::is_contiguous(Axis::Two, size1, size2) {
                    m.successor(pos).filter(|&next| m.indices(next).0 == row)
                } else {
                    trace!(axis = %self.axis, row, "non-contiguous stride, re-seeking");
                    find::seek_in_row(m, row, j + 1)
                }
            }
        };
    }

    /// Step backward; from the end this lands on the last element
    ///
    /// # Panics
    ///
    /// Panics if there is no element before the cursor.
    pub fn retreat(&mut self) {
        let m = &*self.matrix;
        let (size1, size2) = (m.size1(), m.size2());
        let current = self.pos.map(|pos| (pos, m.indices(pos)));

        let prev = match (self.axis, self.line) {
            (Axis::One, None) => {
                let from = current.map_or(size1, |(_, (i, _))| i);
                find::rfind1(m, from, self.anchor)
            }
            (Axis::Two, None) => {
                let from = current.map_or(size2, |(_, (_, j))| j);
                find::rfind2(m, self.anchor, from)
            }
            (Axis::One, Some(column)) => match current {
                Some((pos, _)) if <S::Orient as Orientation>::is_contiguous(Axis::One, size1, size2) => m
                    .predecessor(pos)
                    .filter(|&prev| m.indices(prev).1 == column),
                _ => {
                    let from = current.map_or(size1, |(_, (i, _))| i);
                    find::rseek_in_column(m, from, column)
                }
            },
            (Axis::Two, Some(row)) => match current {
                Some((pos, _)) if <S::Orient as Orientation>::is_contiguous(Axis::Two, size1, size2) => m
                    .predecessor(pos)
                    .filter(|&prev| m.indices(prev).0 == row),
                _ => {
                    let from = current.map_or(size2, |(_, (_, j))| j);
                    find::rseek_in_row(m, row, from)
                }
            },
        };

        match prev {
            Some(pos) => self.pos = Some(pos),
            None => panic!("retreated a cursor past its first element"),
        }
    }

    fn current(&self) -> S::Pos {
        match self.pos {
            Some(pos) => pos,
            None => panic!("dereferenced a past-the-end cursor"),
        }
    }

    fn in_bounds(&self, pos: S::Pos) -> bool {
        let (i, j) = self.matrix.indices(pos);
        i < self.matrix.size1() && j < self.matrix.size2()
    }

    /// Axis and line of the orthogonal cursor through the current element
    fn orthogonal(&self) -> (Axis, usize) {
        let (i, j) = self.matrix.indices(self.current());
        match self.axis {
            Axis::One => (Axis::Two, i),
            Axis::Two => (Axis::One, j),
        }
    }
}

fn line_head<S: SparseStorage>(m: &S, axis: Axis, line: usize) -> Option<S::Pos> {
    match axis {
        Axis::Two => find::seek_in_row(m, line, 0),
        Axis::One => find::seek_in_column(m, 0, line),
    }
}

impl<'a, S: SparseStorage> Cursor<&'a S> {
    /// First element of the orthogonal line through the current element
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn begin(&self) -> Cursor<&'a S> {
        let (axis, line) = self.orthogonal();
        Cursor::confined(self.matrix, axis, line, line_head(self.matrix, axis, line))
    }

    /// Past-the-end of the orthogonal line through the current element
    pub fn end(&self) -> Cursor<&'a S> {
        let (axis, line) = self.orthogonal();
        Cursor::confined(self.matrix, axis, line, None)
    }

    /// `(i, j, value)` of the current element, borrowed from the matrix
    pub fn item(&self) -> (usize, usize, &'a S::Value) {
        let pos = self.current();
        let (i, j) = self.matrix.indices(pos);
        (i, j, self.matrix.value(pos))
    }

    /// Iterator over `[self, end)`
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another matrix.
    pub fn to(self, end: Cursor<&'a S>) -> Span<'a, S> {
        assert!(
            ptr::eq(self.matrix, end.matrix),
            "cursor range spans two matrices"
        );
        Span {
            front: self,
            back: end,
        }
    }
}

impl<'a, S: SparseStorage> Cursor<&'a mut S> {
    /// Mutable value of the current element
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn value_mut(&mut self) -> &mut S::Value {
        let pos = self.current();
        debug_assert!(self.in_bounds(pos), "cursor decodes outside the matrix");
        self.matrix.value_mut(pos)
    }

    /// Mutable cursor at the first element of the orthogonal line
    pub fn begin(&mut self) -> Cursor<&mut S> {
        let (axis, line) = self.orthogonal();
        let head = line_head(&*self.matrix, axis, line);
        Cursor::confined(&mut *self.matrix, axis, line, head)
    }

    /// Mutable past-the-end cursor of the orthogonal line
    pub fn end(&mut self) -> Cursor<&mut S> {
        let (axis, line) = self.orthogonal();
        Cursor::confined(&mut *self.matrix, axis, line, None)
    }

    /// Read-only view of this cursor
    pub fn as_const(&self) -> Cursor<&S> {
        Cursor {
            matrix: &*self.matrix,
            axis: self.axis,
            line: self.line,
            anchor: self.anchor,
            pos: self.pos,
        }
    }
}

impl<'a, S: SparseStorage> Clone for Cursor<&'a S> {
    fn clone(&self) -> Self {
        Cursor {
            matrix: self.matrix,
            axis: self.axis,
            line: self.line,
            anchor: self.anchor,
            pos: self.pos,
        }
    }
}

impl<R, S> PartialEq for Cursor<R>
where
    R: Deref<Target = S>,
    S: SparseStorage,
{
    /// # Panics
    ///
    /// Panics if the cursors belong to different matrices.
    fn eq(&self, other: &Self) -> bool {
        assert!(
            ptr::eq(&*self.matrix, &*other.matrix),
            "compared cursors over different matrices"
        );
        self.pos == other.pos
    }
}

impl<R, S> fmt::Debug for Cursor<R>
where
    R: Deref<Target = S>,
    S: SparseStorage,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("axis", &self.axis)
            .field("line", &self.line)
            .field("anchor", &self.anchor)
            .field("pos", &self.pos)
            .finish()
    }
}

// ============================================================================
// Iterator adapters
// ============================================================================

/// Double-ended iterator over a cursor range, yielding `(i, j, &value)`
pub struct Span<'a, S: SparseStorage> {
    front: Cursor<&'a S>,
    back: Cursor<&'a S>,
}

impl<'a, S: SparseStorage> Iterator for Span<'a, S> {
    type Item = (usize, usize, &'a S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.pos == self.back.pos {
            return None;
        }
        let item = self.front.item();
        self.front.advance();
        Some(item)
    }
}

impl<'a, S: SparseStorage> DoubleEndedIterator for Span<'a, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.pos == self.back.pos {
            return None;
        }
        self.back.retreat();
        Some(self.back.item())
    }
}

impl<'a, S: SparseStorage> FusedIterator for Span<'a, S> {}

/// Iterator over populated rows or columns, yielding `(index, line)`
pub struct Lines<'a, S: SparseStorage> {
    cursor: Cursor<&'a S>,
}

impl<'a, S: SparseStorage> Iterator for Lines<'a, S> {
    type Item = (usize, Span<'a, S>);

    fn next(&mut self) -> Option<Self::Item> {
        let (i, j) = self.cursor.indices()?;
        let index = match self.cursor.axis {
            Axis::One => i,
            Axis::Two => j,
        };
        let line = self.cursor.begin().to(self.cursor.end());
        self.cursor.advance();
        Some((index, line))
    }
}

impl<'a, S: SparseStorage> FusedIterator for Lines<'a, S> {}

/// All populated elements in row- or column-major order
pub struct Elements<'a, S: SparseStorage> {
    lines: Lines<'a, S>,
    current: Option<Span<'a, S>>,
}

impl<'a, S: SparseStorage> Iterator for Elements<'a, S> {
    type Item = (usize, usize, &'a S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let (_, line) = self.lines.next()?;
            self.current = Some(line);
        }
    }
}

impl<'a, S: SparseStorage> FusedIterator for Elements<'a, S> {}

// ============================================================================
// Entry points
// ============================================================================

/// Cursor entry points, available on every [`SparseStorage`]
pub trait SparseTraversal: SparseStorage + Sized {
    /// Row cursor at the first populated row at or after `i` with an element in a column `>= j`
    fn find1(&self, i: usize, j: usize) -> Cursor<&Self> {
        Cursor::unconfined(self, Axis::One, j, find::find1(self, i, j))
    }

    /// Column cursor at the first populated column at or after `j` with an element in a row `>= i`
    fn find2(&self, i: usize, j: usize) -> Cursor<&Self> {
        Cursor::unconfined(self, Axis::Two, i, find::find2(self, i, j))
    }

    fn begin1(&self) -> Cursor<&Self> {
        self.find1(0, 0)
    }

    fn end1(&self) -> Cursor<&Self> {
        self.find1(self.size1(), 0)
    }

    fn begin2(&self) -> Cursor<&Self> {
        self.find2(0, 0)
    }

    fn end2(&self) -> Cursor<&Self> {
        self.find2(0, self.size2())
    }

    fn find1_mut(&mut self, i: usize, j: usize) -> Cursor<&mut Self> {
        let pos = find::find1(self, i, j);
        Cursor::unconfined(self, Axis::One, j, pos)
    }

    fn find2_mut(&mut self, i: usize, j: usize) -> Cursor<&mut Self> {
        let pos = find::find2(self, i, j);
        Cursor::unconfined(self, Axis::Two, i, pos)
    }

    fn begin1_mut(&mut self) -> Cursor<&mut Self> {
        self.find1_mut(0, 0)
    }

    fn end1_mut(&mut self) -> Cursor<&mut Self> {
        let size1 = self.size1();
        self.find1_mut(size1, 0)
    }

    fn begin2_mut(&mut self) -> Cursor<&mut Self> {
        self.find2_mut(0, 0)
    }

    fn end2_mut(&mut self) -> Cursor<&mut Self> {
        let size2 = self.size2();
        self.find2_mut(0, size2)
    }

    /// Populated rows, each with its elements in column order
    fn rows(&self) -> Lines<'_, Self> {
        Lines {
            cursor: self.begin1(),
        }
    }

    /// Populated columns, each with its elements in row order
    fn columns(&self) -> Lines<'_, Self> {
        Lines {
            cursor: self.begin2(),
        }
    }

    /// Elements of row `i`, `None` if `i` is out of range
    fn row(&self, i: usize) -> Option<Span<'_, Self>> {
        (i < self.size1()).then(|| {
            let head = line_head(self, Axis::Two, i);
            Cursor::confined(self, Axis::Two, i, head).to(Cursor::confined(self, Axis::Two, i, None))
        })
    }

    /// Elements of column `j`, `None` if `j` is out of range
    fn column(&self, j: usize) -> Option<Span<'_, Self>> {
        (j < self.size2()).then(|| {
            let head = line_head(self, Axis::One, j);
            Cursor::confined(self, Axis::One, j, head).to(Cursor::confined(self, Axis::One, j, None))
        })
    }

    /// All elements in the given order
    fn elements(&self, order: Major) -> Elements<'_, Self> {
        let lines = match order {
            Major::Row => self.rows(),
            Major::Column => self.columns(),
        };
        Elements {
            lines,
            current: None,
        }
    }
}

impl<S: SparseStorage> SparseTraversal for S {}
