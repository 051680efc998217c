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

//! Ships and the registry that maps board cells to the ship occupying them.
use std::collections::HashMap;

use crate::board::Coordinate;

/// A linear ship with a fixed size and a health counter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    size: usize,
    health: usize,
}

impl Ship {
    /// Construct a ship of the given size at full health. Panics if size is 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0);
        Self { size, health: size }
    }

    /// Number of cells this ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of undamaged cells left.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.health == 0
    }

    /// Damage the ship by one cell. Returns true if this hit sank it. Hitting a ship that
    /// is already sunk changes nothing and returns false.
    pub fn hit(&mut self) -> bool {
        if self.sunk() {
            return false;
        }
        self.health -= 1;
        self.sunk()
    }
}

/// Handle to a ship stored in a [`Fleet`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipHandle(usize);

impl ShipHandle {
    /// Position of the ship in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A placed ship together with the cells it covers.
#[derive(Debug)]
struct FleetEntry {
    ship: Ship,
    cells: Vec<Coordinate>,
}

/// Registry of placed ships. Every cell a ship covers maps to the same [`ShipHandle`], so
/// damage taken at any of them lands on a single health counter.
#[derive(Debug, Default)]
pub struct Fleet {
    /// Ships in placement order.
    ships: Vec<FleetEntry>,

    /// Owner of each occupied cell.
    cells: HashMap<Coordinate, ShipHandle>,
}

impl Fleet {
    /// Construct an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ship covering the given cells and return its handle. Only the placement
    /// engine adds ships, after checking that none of the cells is taken.
    pub(crate) fn add(&mut self, ship: Ship, cells: Vec<Coordinate>) -> ShipHandle {
        debug_assert_eq!(ship.size(), cells.len());
        let handle = ShipHandle(self.ships.len());
        for &coord in &cells {
            let previous = self.cells.insert(coord, handle);
            debug_assert!(previous.is_none(), "{:?} registered twice", coord);
        }
        self.ships.push(FleetEntry { ship, cells });
        handle
    }

    /// Remove every ship.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.cells.clear();
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if no ships have been placed.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the handle of the ship covering `coord`, if any.
    pub fn handle_at(&self, coord: Coordinate) -> Option<ShipHandle> {
        self.cells.get(&coord).copied()
    }

    /// Get the ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.handle_at(coord).map(|handle| &self.ships[handle.0].ship)
    }

    /// Mutably get the ship covering `coord`, if any.
    pub fn ship_at_mut(&mut self, coord: Coordinate) -> Option<&mut Ship> {
        let handle = self.handle_at(coord)?;
        Some(&mut self.ships[handle.0].ship)
    }

    /// Get the ship with the given handle.
    pub fn get(&self, handle: ShipHandle) -> Option<&Ship> {
        self.ships.get(handle.0).map(|entry| &entry.ship)
    }

    /// Get the cells covered by the ship with the given handle.
    pub fn cells(&self, handle: ShipHandle) -> &[Coordinate] {
        self.ships
            .get(handle.0)
            .map_or(&[][..], |entry| &entry.cells[..])
    }

    /// Get an iterator over all ships and their handles.
    pub fn iter(&self) -> impl Iterator<Item = (ShipHandle, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, entry)| (ShipHandle(i), &entry.ship))
    }

    /// Number of ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|entry| entry.ship.sunk()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_has_full_health() {
        for size in 1..=5 {
            let ship = Ship::new(size);
            assert_eq!(ship.size(), size);
            assert_eq!(ship.health(), size);
            assert!(!ship.sunk());
        }
    }

    #[test]
    #[should_panic]
    fn zero_sized_ship_panics() {
        Ship::new(0);
    }

    #[test]
    fn last_hit_sinks() {
        let mut ship = Ship::new(3);
        assert!(!ship.hit());
        assert!(!ship.hit());
        assert!(ship.hit());
        assert!(ship.sunk());
        assert_eq!(ship.health(), 0);
    }

    #[test]
    fn hitting_a_sunk_ship_changes_nothing() {
        let mut ship = Ship::new(1);
        assert!(ship.hit());
        assert!(!ship.hit());
        assert_eq!(ship.health(), 0);
    }

    #[test]
    fn cells_share_one_ship() {
        let mut fleet = Fleet::new();
        let cells = vec![Coordinate::new(2, 3), Coordinate::new(2, 4)];
        let handle = fleet.add(Ship::new(2), cells.clone());

        assert_eq!(fleet.handle_at(cells[0]), Some(handle));
        assert_eq!(fleet.handle_at(cells[1]), Some(handle));
        assert_eq!(fleet.handle_at(Coordinate::new(2, 5)), None);

        assert!(!fleet.ship_at_mut(cells[1]).unwrap().hit());
        assert!(fleet.ship_at_mut(cells[0]).unwrap().hit());
        assert!(fleet.get(handle).unwrap().sunk());
        assert_eq!(fleet.sunk_count(), 1);
        assert_eq!(fleet.cells(handle), &cells[..]);
    }

    #[test]
    fn clear_forgets_ships() {
        let mut fleet = Fleet::new();
        fleet.add(Ship::new(1), vec![Coordinate::new(0, 0)]);
        assert_eq!(fleet.len(), 1);
        fleet.clear();
        assert!(fleet.is_empty());
        assert!(fleet.ship_at(Coordinate::new(0, 0)).is_none());
    }
}
