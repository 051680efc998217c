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

//! Cell storage for the board.

use std::{
    borrow::Borrow,
    fmt,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions};

/// Content of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing here, and nobody has shot here.
    Empty,
    /// An undamaged part of a ship.
    Ship,
    /// A part of a ship that has been shot.
    Hit,
    /// Open water that has been shot.
    Miss,
}

impl CellState {
    /// The symbol used when rendering this cell.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '-',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'O',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}

/// Fixed-size grid of [`CellState`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Construct an all-[`Empty`][CellState::Empty] grid with the given dimensions.
    pub fn new(dim: Dimensions) -> Self {
        let cells = vec![CellState::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get the state of the cell at the given [`Coordinate`], or `None` if it is off the
    /// board.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Set the cell at the given coordinate. Panics if the coordinate is out of bounds.
    pub fn set<B: Borrow<Coordinate>>(&mut self, coord: B, state: CellState) {
        self[coord] = state;
    }

    /// Reset every cell to [`Empty`][CellState::Empty].
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = CellState::Empty;
        }
    }

    /// Count the cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Returns true if a ship cell lies within one step of `coord`, including `coord`
    /// itself.
    pub fn has_ship_near(&self, coord: Coordinate) -> bool {
        self.dim
            .neighborhood(coord)
            .any(|n| self[n] == CellState::Ship)
    }

    /// Take an independent copy of this grid. If `hide_ships` is set, undamaged ship
    /// cells read as empty water in the copy.
    pub fn snapshot(&self, hide_ships: bool) -> Grid {
        let mut copy = self.clone();
        if hide_ships {
            for cell in copy.cells.iter_mut() {
                if *cell == CellState::Ship {
                    *cell = CellState::Empty;
                }
            }
        }
        copy
    }

    /// Get an iterator over the rows of this grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.dim.cols())
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = CellState;

    fn index(&self, coord: B) -> &Self::Output {
        &self.cells[self.dim.linearize(coord.borrow())]
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &mut self.cells[idx]
    }
}

impl fmt::Display for Grid {
    /// One line per row, one symbol per cell.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
