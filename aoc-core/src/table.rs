//! Generic two-dimensional table with incremental row construction.
//!
//! Puzzle inputs are almost always rectangular character or number grids, so
//! this container is built one row at a time while streaming the input, and
//! discovers its own width from usage: the first row's length is locked in as
//! the table width the moment a second row is started (or when the table is
//! explicitly finalized). Every later row must match that width exactly.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::TableError;

/// A rectangular matrix of values, built incrementally row by row.
///
/// The width is not declared up front; it is fixed retroactively when the
/// second row is started, or explicitly by [`finalize_row`](Table::finalize_row).
/// A table that only ever holds one row and is never finalized keeps a column
/// count of zero.
///
/// Construction methods return `&mut Self` so calls can be chained:
///
/// ```
/// use aoc_core::Table;
///
/// let mut table = Table::new();
/// table
///     .new_row()?
///     .add_element('a')?
///     .add_element('b')?
///     .new_row()?
///     .add_element('c')?
///     .add_element('d')?
///     .finalize_row()?;
///
/// assert_eq!(table.num_rows(), 2);
/// assert_eq!(table.num_columns(), 2);
/// assert_eq!(table[(1, 0)], 'b');
/// # Ok::<(), aoc_core::TableError>(())
/// ```
///
/// Indices are signed throughout so neighbor probes in grid walks can go
/// negative without a cast dance; [`get`](Table::get) and
/// [`is_in_bounds`](Table::is_in_bounds) simply report such probes as outside
/// the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    rows: Vec<Vec<T>>,
    width: Option<usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Creates an empty table with no rows and no fixed width.
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            width: None,
        }
    }

    /// Number of rows added so far, including the open row.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, zero until the width has been fixed.
    pub fn num_columns(&self) -> usize {
        self.width.unwrap_or(0)
    }

    /// Starts a new row, which becomes the open row that
    /// [`add_element`](Table::add_element) appends to.
    ///
    /// Starting the second row locks the first row's length in as the table
    /// width. From the third row on, the previously open row is validated
    /// against that width before the new row is opened.
    pub fn new_row(&mut self) -> Result<&mut Self, TableError> {
        match self.rows.len() {
            0 => {}
            // First row complete, lock in the width
            1 => self.width = Some(self.rows[0].len()),
            _ => {
                if self.rows.last().map(Vec::len) != self.width {
                    return Err(TableError::inconsistent("Inconsistent row width"));
                }
            }
        }
        self.rows.push(Vec::with_capacity(self.num_columns()));
        Ok(self)
    }

    /// Appends one element to the open row.
    ///
    /// Fails if no row has been started, or if the open row already holds a
    /// full width's worth of elements.
    pub fn add_element(&mut self, element: T) -> Result<&mut Self, TableError> {
        let width = self.width;
        let Some(open) = self.rows.last_mut() else {
            return Err(TableError::inconsistent("No rows exist yet"));
        };
        if width.is_some_and(|w| open.len() == w) {
            return Err(TableError::inconsistent("Row is full"));
        }
        open.push(element);
        Ok(self)
    }

    /// Validates the last row once construction is complete.
    ///
    /// Width fixing normally only fires when the *next* row is started, so
    /// without this call the final row's length is never checked. On a
    /// single-row table this locks the width in instead. Calling it again on
    /// an already-valid table is a no-op.
    pub fn finalize_row(&mut self) -> Result<&mut Self, TableError> {
        match self.rows.len() {
            0 => {}
            1 => self.width = Some(self.rows[0].len()),
            _ => {
                if self.rows.last().map(Vec::len) != self.width {
                    return Err(TableError::inconsistent("Inconsistent last row width"));
                }
            }
        }
        Ok(self)
    }

    /// Whether `(column, row)` lies within `[0, columns) × [0, rows)`.
    pub fn is_in_bounds(&self, column: isize, row: isize) -> bool {
        column >= 0
            && row >= 0
            && (column as usize) < self.num_columns()
            && (row as usize) < self.num_rows()
    }

    /// Bounds-checked element access; the error names the failing axis.
    pub fn element_at(&self, column: isize, row: isize) -> Result<&T, TableError> {
        self.check_bounds(column, row)?;
        Ok(&self.rows[row as usize][column as usize])
    }

    /// Bounds-tolerant access: `None` for anything outside the table,
    /// including the tail of an open row still shorter than the fixed width.
    pub fn get(&self, column: isize, row: isize) -> Option<&T> {
        if !self.is_in_bounds(column, row) {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(column as usize))
    }

    /// Bounds-checked in-place replacement of a single element.
    pub fn set(&mut self, column: isize, row: isize, value: T) -> Result<&mut Self, TableError> {
        self.check_bounds(column, row)?;
        self.rows[row as usize][column as usize] = value;
        Ok(self)
    }

    /// Iterates over the rows in order, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    fn check_bounds(&self, column: isize, row: isize) -> Result<(), TableError> {
        if row < 0 || row as usize >= self.num_rows() {
            return Err(TableError::inconsistent(format!(
                "Row index out of bounds {row}"
            )));
        }
        // The open row may legally be shorter than the fixed width, so the
        // column check goes against the actual row as well
        if column < 0
            || column as usize >= self.num_columns()
            || column as usize >= self.rows[row as usize].len()
        {
            return Err(TableError::inconsistent(format!(
                "Column index out of bounds {column}"
            )));
        }
        Ok(())
    }
}

/// Panicking sugar over [`element_at`](Table::element_at), indexed as
/// `(column, row)`. Intended for use after construction has fully succeeded.
impl<T> Index<(isize, isize)> for Table<T> {
    type Output = T;

    fn index(&self, (column, row): (isize, isize)) -> &T {
        match self.element_at(column, row) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(isize, isize)> for Table<T> {
    fn index_mut(&mut self, (column, row): (isize, isize)) -> &mut T {
        if let Err(e) = self.check_bounds(column, row) {
            panic!("{e}");
        }
        &mut self.rows[row as usize][column as usize]
    }
}

/// Debug render: each row's elements concatenated with no separator, one row
/// per line.
impl<T: fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for element in row {
                write!(f, "{element}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
