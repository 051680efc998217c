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

//! A single play-through: fill the board, then shoot until every ship is sunk.
use log::{info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{
        placement::{self, PlacementIncomplete, MAX_PLACEMENT_ATTEMPTS},
        CellState, Coordinate, Dimensions, Grid,
    },
    config::GameConfig,
    ships::{Fleet, Ship},
};

pub use self::errors::{CannotShootReason, ShotError};

mod errors;

/// Counters describing the progress of a game.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Statistics {
    shots_fired: usize,
    initial_ships: usize,
    sunk_ships: usize,
}

impl Statistics {
    /// Number of shots fired at the board, repeats included.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Number of ships on the board when the game started.
    pub fn initial_ships(&self) -> usize {
        self.initial_ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.initial_ships - self.sunk_ships
    }
}

/// Outcome of a successfully-fired shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing new was hit. Shots at a cell that was already shot land here too.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// A ship was hit and sunk.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shot hit a ship.
    pub fn hit(self) -> bool {
        self != ShotOutcome::Miss
    }

    /// Whether the shot sank a ship.
    pub fn sunk(self) -> bool {
        self == ShotOutcome::Sunk
    }
}

/// A single-player game session.
#[derive(Debug)]
pub struct Game {
    /// Cells of the board.
    grid: Grid,

    /// Placed ships, indexed by the cells they cover.
    fleet: Fleet,

    stats: Statistics,

    /// Random placements to try per ship.
    max_attempts: usize,

    /// Set once the board has been filled.
    initialized: bool,
}

impl Game {
    /// Construct an unfilled game on the standard 10x10 board.
    pub fn new() -> Self {
        Self::with_dimensions(Dimensions::default())
    }

    /// Construct an unfilled game on a board of the given size.
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            fleet: Fleet::new(),
            stats: Statistics::default(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            initialized: false,
        }
    }

    /// Construct an unfilled game using the board size and attempt budget of `config`.
    /// The fleet is not placed until [`fill_board`][Game::fill_board] is called.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            ..Self::with_dimensions(config.dimensions)
        }
    }

    /// Get the [`Dimensions`] of the board.
    pub fn dimensions(&self) -> &Dimensions {
        self.grid.dimensions()
    }

    /// Whether the board has been filled.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the statistics of this game.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Get the registry of placed ships.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Randomly place the given ships on a cleared board, seeding a fresh random source
    /// from the operating system. See [`fill_board_with_rng`][Game::fill_board_with_rng].
    pub fn fill_board(&mut self, ships: Vec<Ship>) -> Result<(), PlacementIncomplete> {
        let mut rng = StdRng::from_entropy();
        self.fill_board_with_rng(ships, &mut rng)
    }

    /// Randomly place the given ships on a cleared board using `rng`. Only the size of
    /// each ship matters; every ship starts the game undamaged.
    ///
    /// The game is ready to play afterwards even if placement ran out of attempts. In
    /// that case the returned [`PlacementIncomplete`] says how many ships made it onto
    /// the board, and the game counts only those ships.
    pub fn fill_board_with_rng<R: Rng + ?Sized>(
        &mut self,
        ships: Vec<Ship>,
        rng: &mut R,
    ) -> Result<(), PlacementIncomplete> {
        self.grid.clear();
        self.fleet.clear();
        self.stats = Statistics {
            initial_ships: ships.len(),
            ..Statistics::default()
        };
        self.initialized = true;

        let result = placement::place_all(
            &mut self.grid,
            &mut self.fleet,
            ships,
            self.max_attempts,
            rng,
        );
        if let Err(err) = result {
            self.stats.initial_ships = err.placed();
        }
        info!(
            "board filled with {} ships covering {} cells",
            self.fleet.len(),
            self.grid.count(CellState::Ship)
        );
        result
    }

    /// Fire at the given cell.
    ///
    /// Fails without counting the shot if the board has not been filled or the cell is
    /// off the board. Otherwise the shot is counted, and shooting a cell that was already
    /// shot is reported as a [`Miss`][ShotOutcome::Miss].
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.initialized {
            return Err(ShotError::new(CannotShootReason::NotInitialized, coord));
        }
        let cell = match self.grid.get_mut(coord) {
            Some(cell) => cell,
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
        };
        self.stats.shots_fired += 1;

        let outcome = match *cell {
            CellState::Ship => {
                *cell = CellState::Hit;
                // Every ship cell on the grid is registered with the fleet.
                let sunk = self
                    .fleet
                    .ship_at_mut(coord)
                    .map_or(false, |ship| ship.hit());
                if sunk {
                    self.stats.sunk_ships += 1;
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            CellState::Empty => {
                *cell = CellState::Miss;
                ShotOutcome::Miss
            }
            CellState::Hit | CellState::Miss => ShotOutcome::Miss,
        };
        trace!("shot {} -> {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Returns true while the board is filled and at least one ship is afloat.
    pub fn playable(&self) -> bool {
        self.initialized && self.stats.sunk_ships < self.stats.initial_ships
    }

    /// Get an independent copy of the board. If `hide_ships` is set, undamaged ship cells
    /// read as empty water.
    pub fn board(&self, hide_ships: bool) -> Grid {
        self.grid.snapshot(hide_ships)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
