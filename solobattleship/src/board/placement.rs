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

//! Random placement of ships onto a grid.
//!
//! Every ship is placed independently: pick an orientation and an anchor at random, check
//! that no cell of the ship touches another ship (diagonals included), and try again on
//! failure. The engine gives up once a single ship has used up its attempts.
use log::{debug, warn};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::{
    board::{CellState, Coordinate, Dimensions, Grid},
    ships::{Fleet, Ship},
};

/// Number of random placements tried for one ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// Direction a ship extends from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Extends towards higher columns.
    Horizontal,
    /// Extends towards higher rows.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A candidate position for a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// First cell of the ship.
    pub anchor: Coordinate,
    /// Direction from the anchor.
    pub orientation: Orientation,
    /// Number of cells.
    pub size: usize,
}

impl Placement {
    /// Construct a placement.
    pub fn new(anchor: Coordinate, orientation: Orientation, size: usize) -> Self {
        Self {
            anchor,
            orientation,
            size,
        }
    }

    /// Get an iterator over the cells this placement covers, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Placement {
            anchor,
            orientation,
            size,
        } = *self;
        (0..size).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col + i),
            Orientation::Vertical => Coordinate::new(anchor.row + i, anchor.col),
        })
    }
}

/// Error returned when the engine ran out of attempts before placing every ship. The
/// ships placed before the failure stay on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("only {placed} of {requested} ships could be placed")]
pub struct PlacementIncomplete {
    requested: usize,
    placed: usize,
}

impl PlacementIncomplete {
    pub(crate) fn new(requested: usize, placed: usize) -> Self {
        Self { requested, placed }
    }

    /// Number of ships asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of ships actually on the board.
    pub fn placed(&self) -> usize {
        self.placed
    }
}

/// Pick a random orientation and an anchor from which a ship of `size` stays on the
/// board. Returns `None` if a ship of that size cannot fit either way.
pub fn random_placement<R: Rng + ?Sized>(
    dim: &Dimensions,
    size: usize,
    rng: &mut R,
) -> Option<Placement> {
    let orientation: Orientation = rng.gen();
    let (max_row, max_col) = match orientation {
        Orientation::Horizontal => (dim.rows(), (dim.cols() + 1).checked_sub(size)?),
        Orientation::Vertical => ((dim.rows() + 1).checked_sub(size)?, dim.cols()),
    };
    if max_row == 0 || max_col == 0 {
        return None;
    }
    let anchor = Coordinate::new(rng.gen_range(0, max_row), rng.gen_range(0, max_col));
    Some(Placement::new(anchor, orientation, size))
}

/// Check that every cell of the placement is on the board and clear of other ships by
/// at least one cell.
pub fn can_place(grid: &Grid, placement: &Placement) -> bool {
    let dim = grid.dimensions();
    placement
        .cells()
        .all(|coord| dim.contains(coord) && !grid.has_ship_near(coord))
}

/// Try up to `max_attempts` random placements for a ship of `size`, returning the first
/// one that fits.
fn find_placement<R: Rng + ?Sized>(
    grid: &Grid,
    size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    for attempt in 1..=max_attempts {
        match random_placement(grid.dimensions(), size, rng) {
            Some(candidate) if can_place(grid, &candidate) => return Some(candidate),
            Some(candidate) => debug!("attempt {} rejected {:?}", attempt, candidate),
            // Does not fit the board in this orientation.
            None => {}
        }
    }
    None
}

/// Mark the placement on the grid and register a ship of its size, at full health, with
/// the fleet. The caller must have checked the placement with [`can_place`].
fn place(grid: &mut Grid, fleet: &mut Fleet, placement: &Placement) {
    let cells: Vec<_> = placement.cells().collect();
    for &coord in &cells {
        grid.set(coord, CellState::Ship);
    }
    let handle = fleet.add(Ship::new(placement.size), cells);
    debug!("placed ship {:?} at {:?}", handle, placement);
}

/// Place each ship at a random position, trying at most `max_attempts` positions per
/// ship. Only the size of each ship is used; every ship placed starts undamaged. Ships are
/// placed in order; if one cannot be placed the rest are abandoned and
/// [`PlacementIncomplete`] reports how many made it onto the board.
pub fn place_all<R, I>(
    grid: &mut Grid,
    fleet: &mut Fleet,
    ships: I,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(), PlacementIncomplete>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Ship>,
    I::IntoIter: ExactSizeIterator,
{
    let ships = ships.into_iter();
    let requested = ships.len();
    let mut placed = 0;
    for ship in ships {
        match find_placement(grid, ship.size(), max_attempts, rng) {
            Some(placement) => {
                place(grid, fleet, &placement);
                placed += 1;
            }
            None => {
                warn!(
                    "gave up on ship of size {} after {} attempts, {} of {} placed",
                    ship.size(),
                    max_attempts,
                    placed,
                    requested
                );
                return Err(PlacementIncomplete::new(requested, placed));
            }
        }
    }
    Ok(())
}
