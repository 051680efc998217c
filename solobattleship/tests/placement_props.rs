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
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use solobattleship::{CellState, Coordinate, Dimensions, Game, Ship};

/// Chebyshev distance between two cells.
fn distance(a: Coordinate, b: Coordinate) -> usize {
    let dr = if a.row > b.row { a.row - b.row } else { b.row - a.row };
    let dc = if a.col > b.col { a.col - b.col } else { b.col - a.col };
    dr.max(dc)
}

fn filled_game(seed: u64, sizes: &[usize]) -> (Game, Result<(), solobattleship::PlacementIncomplete>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let ships = sizes.iter().map(|&size| Ship::new(size)).collect();
    let result = game.fill_board_with_rng(ships, &mut rng);
    (game, result)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Cells of different ships never touch, not even diagonally.
    #[test]
    fn ships_keep_their_distance(seed in any::<u64>()) {
        let (game, _) = filled_game(seed, &[5, 4, 3, 3, 2]);
        let fleet = game.fleet();
        let ships: Vec<_> = fleet.iter().map(|(handle, _)| handle).collect();
        for (i, &a) in ships.iter().enumerate() {
            for &b in &ships[i + 1..] {
                for &ca in fleet.cells(a) {
                    for &cb in fleet.cells(b) {
                        prop_assert!(distance(ca, cb) > 1, "{:?} touches {:?}", ca, cb);
                    }
                }
            }
        }
    }

    /// Each ship lies on a straight, contiguous run of cells inside the board.
    #[test]
    fn ships_are_straight_runs(seed in any::<u64>()) {
        let (game, _) = filled_game(seed, &[5, 4, 3, 3, 2]);
        let dim = *game.dimensions();
        let fleet = game.fleet();
        for (handle, ship) in fleet.iter() {
            let cells = fleet.cells(handle);
            prop_assert_eq!(cells.len(), ship.size());
            prop_assert!(cells.iter().all(|&c| dim.contains(c)));
            let same_row = cells.iter().all(|c| c.row == cells[0].row);
            let same_col = cells.iter().all(|c| c.col == cells[0].col);
            prop_assert!(same_row || same_col);
            for pair in cells.windows(2) {
                prop_assert_eq!(distance(pair[0], pair[1]), 1);
            }
        }
    }

    /// The grid and the registry agree on which cells hold ships.
    #[test]
    fn grid_matches_registry(seed in any::<u64>()) {
        let (game, result) = filled_game(seed, &[5, 4, 4]);
        let board = game.board(false);
        let expected: usize = game.fleet().iter().map(|(_, ship)| ship.size()).sum();
        prop_assert_eq!(board.count(CellState::Ship), expected);
        if result.is_ok() {
            prop_assert_eq!(expected, 13);
        }
        for coord in game.dimensions().iter_coordinates().flatten() {
            let registered = game.fleet().ship_at(coord).is_some();
            prop_assert_eq!(board[coord] == CellState::Ship, registered);
        }
    }

    /// Shooting every cell once sinks every ship, and the counters add up.
    #[test]
    fn sweeping_the_board_sinks_everything(seed in any::<u64>(), rows in 5usize..=10, cols in 5usize..=10) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::with_dimensions(Dimensions::new(rows, cols));
        let _ = game.fill_board_with_rng(vec![Ship::new(3), Ship::new(2), Ship::new(1)], &mut rng);
        let ships = game.stats().initial_ships();

        let mut hits = 0;
        let mut sunk = 0;
        for coord in game.dimensions().iter_coordinates().flatten() {
            let outcome = game.shot(coord).unwrap();
            hits += outcome.hit() as usize;
            sunk += outcome.sunk() as usize;
        }

        prop_assert_eq!(sunk, ships);
        prop_assert_eq!(game.stats().sunk_ships(), ships);
        prop_assert_eq!(game.stats().shots_fired(), rows * cols);
        prop_assert_eq!(hits, game.board(false).count(CellState::Hit));
        prop_assert!(!game.playable());
        prop_assert_eq!(game.board(true).count(CellState::Ship), 0);
    }
}
