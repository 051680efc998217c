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

//! Single-player Battleship.
//!
//! A [`Game`] owns a square board which [`Game::fill_board`] seeds with randomly placed
//! ships, keeping a one-cell buffer between any two ships. The player then fires at
//! coordinates, usually produced by [`parse_coordinate`] from labels like `B5`, until
//! every ship is sunk.
//!
//! ```
//! use solobattleship::{parse_coordinate, Game, Ship};
//!
//! let mut game = Game::new();
//! game.fill_board(vec![Ship::new(5), Ship::new(4)]).unwrap();
//! while game.playable() {
//!     for coord in game.dimensions().iter_coordinates().flatten() {
//!         game.shot(coord).unwrap();
//!     }
//! }
//! assert_eq!(game.stats().sunk_ships(), 2);
//! assert_eq!(parse_coordinate("A10").unwrap().col, 9);
//! ```

pub mod board;
pub mod codec;
pub mod config;
pub mod game;
pub mod ships;

pub use crate::{
    board::{
        placement::{Orientation, Placement, PlacementIncomplete, MAX_PLACEMENT_ATTEMPTS},
        CellState, Coordinate, Dimensions, Grid,
    },
    codec::{parse_coordinate, FormatMismatch},
    config::{ConfigError, GameConfig},
    game::{CannotShootReason, Game, ShotError, ShotOutcome, Statistics},
    ships::{Fleet, Ship, ShipHandle},
};
