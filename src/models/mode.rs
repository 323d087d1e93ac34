//! The seven diatonic modes and their bidirectional interval tables
//!
//! Each mode is described by 15 signed interval codes: the seven degrees
//! below the tonic (down to the octave below), the tonic itself, and the
//! seven degrees above it (up to the octave). The tonic `P1` always sits at
//! index 7. The lower half spells the descending scale as it is sung
//! downward, so it is not simply the upper half mirrored.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::interval::IntervalCode;
use crate::models::pitch::Letter;

/// Length of every mode table (7 below + tonic + 7 above)
pub const MODE_TABLE_LEN: usize = 15;

/// Index of the tonic inside a mode table
pub const TONIC_POSITION: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

const MODE_CODES: [(Mode, [&str; MODE_TABLE_LEN]); 7] = [
    (
        Mode::Ionian,
        [
            "-P8", "-m7", "-m6", "-P5", "-P4", "-m3", "-m2",
            "P1", "M2", "M3", "P4", "P5", "M6", "M7", "P8",
        ],
    ),
    (
        Mode::Dorian,
        [
            "-P8", "-m7", "-M6", "-P5", "-P4", "-m3", "-M2",
            "P1", "M2", "m3", "P4", "P5", "M6", "m7", "P8",
        ],
    ),
    (
        Mode::Phrygian,
        [
            "-P8", "-M7", "-M6", "-P5", "-P4", "-M3", "-M2",
            "P1", "m2", "m3", "P4", "P5", "m6", "m7", "P8",
        ],
    ),
    (
        Mode::Lydian,
        [
            "-P8", "-m7", "-m6", "-d5", "-P4", "-m3", "-m2",
            "P1", "M2", "M3", "A4", "P5", "M6", "M7", "P8",
        ],
    ),
    (
        Mode::Mixolydian,
        [
            "-P8", "-m7", "-m6", "-P5", "-P4", "-m3", "-M2",
            "P1", "M2", "M3", "P4", "P5", "M6", "m7", "P8",
        ],
    ),
    (
        Mode::Aeolian,
        [
            "-P8", "-m7", "-M6", "-P5", "-P4", "-M3", "-M2",
            "P1", "M2", "m3", "P4", "P5", "m6", "m7", "P8",
        ],
    ),
    (
        Mode::Locrian,
        [
            "-P8", "-M7", "-M6", "-P5", "-A4", "-M3", "-M2",
            "P1", "m2", "m3", "P4", "d5", "m6", "m7", "P8",
        ],
    ),
];

static MODE_TABLES: Lazy<HashMap<Mode, [IntervalCode; MODE_TABLE_LEN]>> = Lazy::new(|| {
    MODE_CODES
        .iter()
        .map(|(mode, codes)| {
            let parsed = codes.map(|code| {
                code.parse::<IntervalCode>()
                    .expect("mode tables contain only valid interval codes")
            });
            (*mode, parsed)
        })
        .collect()
});

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// The full 15-code bidirectional table
    pub fn intervals(self) -> &'static [IntervalCode; MODE_TABLE_LEN] {
        &MODE_TABLES[&self]
    }

    /// The eight codes walked from the tonic in `direction`, tonic first
    pub fn traversal(self, direction: Direction) -> Vec<IntervalCode> {
        let table = self.intervals();
        match direction {
            Direction::Up => table[TONIC_POSITION..].to_vec(),
            Direction::Down => table[..=TONIC_POSITION].iter().rev().copied().collect(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::UnsupportedMode(s.to_string()))
    }
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "ascending" => Ok(Direction::Up),
            "down" | "descending" => Ok(Direction::Down),
            _ => Err(TheoryError::UnsupportedDirection(s.to_string())),
        }
    }
}

/// Tonic, mode and traversal direction of one scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeSpec {
    pub root: Letter,
    pub mode: Mode,
    pub direction: Direction,
}

impl ModeSpec {
    pub fn new(root: Letter, mode: Mode, direction: Direction) -> Self {
        Self {
            root,
            mode,
            direction,
        }
    }

    /// `"Dorian up"` style key, as used by the mode lookup table
    pub fn label(&self) -> String {
        format!("{} {}", self.mode, self.direction)
    }
}

impl fmt::Display for ModeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.root, self.mode, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_symmetric_in_shape() {
        for mode in Mode::ALL {
            let table = mode.intervals();
            assert_eq!(table.len() % 2, 1);
            assert!(table[TONIC_POSITION].is_unison(), "{} tonic", mode);
            assert_eq!(table[0].semitones(), -12);
            assert_eq!(table[MODE_TABLE_LEN - 1].semitones(), 12);
            for pair in table.windows(2) {
                assert!(pair[0].semitones() < pair[1].semitones(), "{} not ascending", mode);
            }
        }
    }

    #[test]
    fn test_ionian_upper_half() {
        let steps: Vec<i32> = Mode::Ionian
            .traversal(Direction::Up)
            .iter()
            .map(|code| code.semitones())
            .collect();
        assert_eq!(steps, vec![0, 2, 4, 5, 7, 9, 11, 12]);
    }

    #[test]
    fn test_down_traversal_starts_at_tonic() {
        let steps: Vec<i32> = Mode::Dorian
            .traversal(Direction::Down)
            .iter()
            .map(|code| code.semitones())
            .collect();
        assert_eq!(steps, vec![0, -2, -3, -5, -7, -9, -10, -12]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("lydian".parse::<Mode>().unwrap(), Mode::Lydian);
        assert_eq!(
            "Hypodorian".parse::<Mode>(),
            Err(TheoryError::UnsupportedMode("Hypodorian".to_string()))
        );
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
