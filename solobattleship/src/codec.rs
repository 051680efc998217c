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

//! Conversion between cell labels like `B5` and [`Coordinate`]s.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;

/// Pattern a label must match: a row letter and a one-based column number.
pub const LABEL_PATTERN: &str = "^[A-J](10|[1-9])$";

/// Matcher for [`LABEL_PATTERN`].
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(LABEL_PATTERN).unwrap());

/// Error returned when a label does not match [`LABEL_PATTERN`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{input:?} doesn't match the pattern {}", LABEL_PATTERN)]
pub struct FormatMismatch {
    input: String,
}

impl FormatMismatch {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Extract the text that failed to parse.
    pub fn into_input(self) -> String {
        self.input
    }
}

/// Parse a label such as `A1` or `J10` into a zero-based [`Coordinate`]. The letter picks
/// the row and the number the column. Matching is case-sensitive, so callers taking free
/// text should uppercase it first.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, FormatMismatch> {
    if !LABEL.is_match(text) {
        return Err(FormatMismatch {
            input: text.to_owned(),
        });
    }
    let row = usize::from(text.as_bytes()[0] - b'A');
    // The pattern guarantees the remainder is a number from 1 to 10.
    let col = text[1..].parse::<usize>().map_err(|_| FormatMismatch {
        input: text.to_owned(),
    })?;
    Ok(Coordinate::new(row, col - 1))
}

impl FromStr for Coordinate {
    type Err = FormatMismatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

impl fmt::Display for Coordinate {
    /// Writes the label of the coordinate, e.g. `B5` for row 1, column 4. Rows past `Z`
    /// fall back to the row number.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", char::from(b'A' + self.row as u8), self.col + 1)
        } else {
            write!(f, "{}:{}", self.row, self.col + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_zero_based_coordinates() {
        let data = [
            ("A1", (0, 0)),
            ("A10", (0, 9)),
            ("J1", (9, 0)),
            ("J10", (9, 9)),
            ("B5", (1, 4)),
            ("C6", (2, 5)),
            ("D7", (3, 6)),
            ("E8", (4, 7)),
        ];
        for &(label, expected) in data.iter() {
            assert_eq!(parse_coordinate(label), Ok(Coordinate::from(expected)), "{}", label);
        }
    }

    #[test]
    fn malformed_labels_are_rejected() {
        for &label in ["A0", "A11", "K1", "a1", "", "A", "1A", " A1", "A1 ", "A01", "AA1"].iter()
        {
            let err = parse_coordinate(label).unwrap_err();
            assert_eq!(err.input(), label);
        }
    }

    #[test]
    fn mismatch_hands_back_the_rejected_text() {
        let err = parse_coordinate("K12").unwrap_err();
        assert_eq!(err.clone().into_input(), err.input());
        assert_eq!(err.into_input(), "K12");
    }

    #[test]
    fn mismatch_message_names_input_and_pattern() {
        let err = parse_coordinate("Z9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"Z9\" doesn't match the pattern ^[A-J](10|[1-9])$"
        );
    }

    #[test]
    fn from_str_delegates() {
        assert_eq!("B5".parse::<Coordinate>(), Ok(Coordinate::new(1, 4)));
        assert!("B0".parse::<Coordinate>().is_err());
    }

    #[test]
    fn display_writes_label() {
        for &label in ["A1", "B5", "J10", "E8"].iter() {
            assert_eq!(parse_coordinate(label).unwrap().to_string(), label);
        }
    }
}
