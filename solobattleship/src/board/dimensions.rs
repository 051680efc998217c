// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{borrow::Borrow, ops::RangeInclusive};

/// Number of rows on the standard board.
pub const STANDARD_ROWS: usize = 10;
/// Number of columns on the standard board.
pub const STANDARD_COLS: usize = 10;

/// The coordinates of a cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row of the cell, labelled with a letter.
    pub row: usize,
    /// Column of the cell, labelled with a number.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Rectangular board dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows. Bounds [`Coordinate::row`].
    rows: usize,
    /// Number of columns. Bounds [`Coordinate::col`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if `rows * cols` exceeds `usize::max_value()` or if either is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => {
                if rows == 0 || cols == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", rows, cols);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        rows,
                        cols,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns `None` if `rows * cols` exceeds `usize::max_value()` or if either is 0.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        c.row < self.rows && c.col < self.cols
    }

    /// Convert a coordinate to a linear index.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Convert a coordinate to a linear index.
    /// Panics if the coordinate is out of bounds.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Get back a coordinate from a linearized index.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.cols,
            col: idx % self.cols,
        }
    }

    /// Iterate the block of cells within one step of `coord`, diagonals and `coord`
    /// itself included. The block is clamped to the board rather than wrapping.
    pub fn neighborhood(&self, coord: Coordinate) -> Neighborhood {
        let rows = coord.row.saturating_sub(1)..=coord.row.saturating_add(1).min(self.rows - 1);
        let cols = coord.col.saturating_sub(1)..=coord.col.saturating_add(1).min(self.cols - 1);
        // An off-board coordinate has no neighborhood.
        let row = if self.contains(coord) {
            *rows.start()
        } else {
            rows.end() + 1
        };
        Neighborhood {
            rows,
            cols: cols.clone(),
            row,
            col: *cols.start(),
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }
}

impl Default for Dimensions {
    /// Construct the standard 10x10 board.
    fn default() -> Self {
        Self {
            rows: STANDARD_ROWS,
            cols: STANDARD_COLS,
        }
    }
}

/// Iterator over the clamped 3x3 block around a coordinate.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    rows: RangeInclusive<usize>,
    cols: RangeInclusive<usize>,
    row: usize,
    col: usize,
}

impl Iterator for Neighborhood {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.row > *self.rows.end() {
            return None;
        }
        let coord = Coordinate::new(self.row, self.col);
        if self.col < *self.cols.end() {
            self.col += 1;
        } else {
            self.col = *self.cols.start();
            self.row += 1;
        }
        Some(coord)
    }
}
