//! Pitch space: the 12-letter alphabet, notes and octave arithmetic
//!
//! The alphabet uses invented letters so that note names never collide with
//! Western note names:
//!
//! ```text
//! K  T  D  N  M  F  J  G  R  L  P  B
//! 0  1  2  3  4  5  6  7  8  9  10 11
//! ```
//!
//! K D M F G L B sit on white keys, T N J R P on black keys. A note is a
//! letter plus an integer octave; its absolute pitch index is
//! `letter_index + octave * 12`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::TheoryError;

/// Semitones per octave
pub const KEYS_PER_OCTAVE: i32 = 12;

/// White keys per octave
pub const WHITE_KEYS_PER_OCTAVE: i32 = 7;

/// Octaves accepted from callers; pitch indices stay far from `i32` limits
pub const OCTAVE_RANGE: RangeInclusive<i32> = -10..=10;

/// `octave` unchanged if it lies in [`OCTAVE_RANGE`]
pub fn check_octave(octave: i32) -> Result<i32, TheoryError> {
    if OCTAVE_RANGE.contains(&octave) {
        Ok(octave)
    } else {
        Err(TheoryError::OctaveOutOfRange(octave))
    }
}

/// One of the 12 pitch-class letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    K,
    T,
    D,
    N,
    M,
    F,
    J,
    G,
    R,
    L,
    P,
    B,
}

/// Whether a letter sits on a white or a black key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColour {
    White,
    Black,
}

impl Letter {
    /// The alphabet in pitch order
    pub const ALL: [Letter; 12] = [
        Letter::K,
        Letter::T,
        Letter::D,
        Letter::N,
        Letter::M,
        Letter::F,
        Letter::J,
        Letter::G,
        Letter::R,
        Letter::L,
        Letter::P,
        Letter::B,
    ];

    pub const WHITE_KEYS: [Letter; 7] = [
        Letter::K,
        Letter::D,
        Letter::M,
        Letter::F,
        Letter::G,
        Letter::L,
        Letter::B,
    ];

    pub const BLACK_KEYS: [Letter; 5] = [Letter::T, Letter::N, Letter::J, Letter::R, Letter::P];

    /// Position in the alphabet (0-11)
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Letter at `index` modulo 12 (negative indices wrap)
    pub fn from_index(index: i32) -> Letter {
        Letter::ALL[index.rem_euclid(KEYS_PER_OCTAVE) as usize]
    }

    pub fn symbol(self) -> char {
        match self {
            Letter::K => 'K',
            Letter::T => 'T',
            Letter::D => 'D',
            Letter::N => 'N',
            Letter::M => 'M',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::G => 'G',
            Letter::R => 'R',
            Letter::L => 'L',
            Letter::P => 'P',
            Letter::B => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Letter, TheoryError> {
        Letter::ALL
            .iter()
            .copied()
            .find(|letter| letter.symbol() == symbol.to_ascii_uppercase())
            .ok_or_else(|| TheoryError::InvalidLetter(symbol.to_string()))
    }

    pub fn key_colour(self) -> KeyColour {
        match self {
            Letter::T | Letter::N | Letter::J | Letter::R | Letter::P => KeyColour::Black,
            _ => KeyColour::White,
        }
    }

    pub fn is_black(self) -> bool {
        self.key_colour() == KeyColour::Black
    }

    /// The black key immediately above a white key, if there is one
    pub fn black_key_above(self) -> Option<Letter> {
        match self {
            Letter::K => Some(Letter::T),
            Letter::D => Some(Letter::N),
            Letter::F => Some(Letter::J),
            Letter::G => Some(Letter::R),
            Letter::L => Some(Letter::P),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Letter {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Letter::from_symbol(symbol),
            _ => Err(TheoryError::InvalidLetter(s.to_string())),
        }
    }
}

/// Absolute pitch index of `letter` in `octave`
pub fn note_index(letter: Letter, octave: i32) -> i32 {
    letter.index() + octave * KEYS_PER_OCTAVE
}

/// Split an absolute pitch index into letter and octave (floor division)
pub fn letter_and_octave_of(index: i32) -> (Letter, i32) {
    (
        Letter::from_index(index),
        index.div_euclid(KEYS_PER_OCTAVE),
    )
}

/// Drop every index by one octave when all of them sit at least an octave
/// above `floor`.
pub fn rebase_window(indices: &[i32], floor: i32) -> Vec<i32> {
    if !indices.is_empty() && indices.iter().all(|&i| i >= floor + KEYS_PER_OCTAVE) {
        indices.iter().map(|&i| i - KEYS_PER_OCTAVE).collect()
    } else {
        indices.to_vec()
    }
}

/// A letter in a specific octave, written `K0`, `B-1`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Note {
    pub letter: Letter,
    pub octave: i32,
}

impl Note {
    pub fn new(letter: Letter, octave: i32) -> Self {
        Self { letter, octave }
    }

    pub fn from_index(index: i32) -> Self {
        let (letter, octave) = letter_and_octave_of(index);
        Self { letter, octave }
    }

    /// Absolute pitch index
    pub fn index(&self) -> i32 {
        note_index(self.letter, self.octave)
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        let letter = Letter::from_symbol(symbol)?;
        let octave = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| TheoryError::InvalidNote(s.to_string()))?;
        Ok(Note::new(letter, check_octave(octave)?))
    }
}

impl From<Note> for String {
    fn from(note: Note) -> String {
        note.to_string()
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
