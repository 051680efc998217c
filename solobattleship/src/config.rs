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

//! Game settings.
use thiserror::Error;

use crate::{
    board::{placement::MAX_PLACEMENT_ATTEMPTS, Dimensions, STANDARD_COLS, STANDARD_ROWS},
    ships::Ship,
};

/// Ship sizes used when nothing else is configured.
pub const STANDARD_FLEET: [usize; 3] = [5, 4, 4];

/// Reason why a configuration was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// No ships were requested.
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,

    /// A ship size was not a positive number.
    #[error("invalid ship size {0:?}")]
    InvalidShipSize(String),

    /// A ship is longer than the board in both directions.
    #[error("a ship of size {size} does not fit on a {rows}x{cols} board")]
    ShipTooLarge {
        size: usize,
        rows: usize,
        cols: usize,
    },

    /// The board has more rows or columns than labels can address.
    #[error("boards larger than {max_rows}x{max_cols} cannot be labelled")]
    BoardTooLarge { max_rows: usize, max_cols: usize },
}

/// Settings for a [`Game`][crate::Game].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Size of the board.
    pub dimensions: Dimensions,
    /// Sizes of the ships to place, in placement order.
    pub fleet: Vec<usize>,
    /// Random placements to try per ship before giving up.
    pub max_attempts: usize,
}

impl GameConfig {
    /// Build the ships described by [`fleet`][GameConfig::fleet].
    pub fn ships(&self) -> Vec<Ship> {
        self.fleet.iter().map(|&size| Ship::new(size)).collect()
    }

    /// Check that the fleet is non-empty, that every ship fits the board, and that every
    /// cell can be named by a label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rows = self.dimensions.rows();
        let cols = self.dimensions.cols();
        if rows > STANDARD_ROWS || cols > STANDARD_COLS {
            return Err(ConfigError::BoardTooLarge {
                max_rows: STANDARD_ROWS,
                max_cols: STANDARD_COLS,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for &size in &self.fleet {
            if size == 0 {
                return Err(ConfigError::InvalidShipSize(size.to_string()));
            }
            if size > rows.max(cols) {
                return Err(ConfigError::ShipTooLarge { size, rows, cols });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            fleet: STANDARD_FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Parse a comma-separated list of ship sizes such as `5,4,3`.
pub fn parse_fleet(text: &str) -> Result<Vec<usize>, ConfigError> {
    let fleet = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ConfigError::InvalidShipSize(part.to_owned())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if fleet.is_empty() {
        Err(ConfigError::EmptyFleet)
    } else {
        Ok(fleet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_game() {
        let config = GameConfig::default();
        assert_eq!(config.dimensions, Dimensions::new(10, 10));
        assert_eq!(config.fleet, vec![5, 4, 4]);
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.validate(), Ok(()));
        let sizes: Vec<_> = config.ships().iter().map(Ship::size).collect();
        assert_eq!(sizes, vec![5, 4, 4]);
    }

    #[test]
    fn fleet_parsing() {
        assert_eq!(parse_fleet("5,4,3"), Ok(vec![5, 4, 3]));
        assert_eq!(parse_fleet(" 2 , 1 "), Ok(vec![2, 1]));
        assert_eq!(parse_fleet(""), Err(ConfigError::EmptyFleet));
        assert_eq!(
            parse_fleet("3,0"),
            Err(ConfigError::InvalidShipSize("0".to_owned()))
        );
        assert_eq!(
            parse_fleet("3,x"),
            Err(ConfigError::InvalidShipSize("x".to_owned()))
        );
    }

    #[test]
    fn oversized_ship_is_rejected() {
        let config = GameConfig {
            dimensions: Dimensions::new(4, 6),
            fleet: vec![6, 7],
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ShipTooLarge {
                size: 7,
                rows: 4,
                cols: 6
            })
        );
    }

    #[test]
    fn oversized_board_is_rejected() {
        let config = GameConfig {
            dimensions: Dimensions::new(11, 10),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));
    }
}
