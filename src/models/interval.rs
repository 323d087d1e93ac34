//! Interval classes, interval codes and their syllables
//!
//! An interval class is a semitone distance reduced to one octave, with the
//! octave itself kept as a thirteenth class. Each class carries an ascending
//! and a descending syllable; the mnemonic for a pair of notes is built from
//! the letters plus one of these syllables.
//!
//! Interval codes (`P1`, `-m3`, `A4`, ...) are the signed, quality-spelled
//! form used by the mode tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use palette::Srgb;

use crate::models::colour::{srgb8, Colour};
use crate::models::pitch::KEYS_PER_OCTAVE;

/// Suffix syllable attached to the root letter of every mnemonic
pub const ROOT_SUFFIX: &str = "u";

/// The 13 interval classes from unison to octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntervalClass {
    P1,
    #[serde(rename = "m2")]
    Min2,
    #[serde(rename = "M2")]
    Maj2,
    #[serde(rename = "m3")]
    Min3,
    #[serde(rename = "M3")]
    Maj3,
    P4,
    Tritone,
    P5,
    #[serde(rename = "m6")]
    Min6,
    #[serde(rename = "M6")]
    Maj6,
    #[serde(rename = "m7")]
    Min7,
    #[serde(rename = "M7")]
    Maj7,
    Octave,
}

impl IntervalClass {
    pub const ALL: [IntervalClass; 13] = [
        IntervalClass::P1,
        IntervalClass::Min2,
        IntervalClass::Maj2,
        IntervalClass::Min3,
        IntervalClass::Maj3,
        IntervalClass::P4,
        IntervalClass::Tritone,
        IntervalClass::P5,
        IntervalClass::Min6,
        IntervalClass::Maj6,
        IntervalClass::Min7,
        IntervalClass::Maj7,
        IntervalClass::Octave,
    ];

    /// Size in semitones (0-12)
    pub fn semitones(self) -> i32 {
        self as i32
    }

    /// Reduce a signed semitone offset to its class.
    ///
    /// Zero is a unison; any other multiple of 12 is an octave.
    pub fn from_semitones(semitones: i32) -> IntervalClass {
        let reduced = semitones.rem_euclid(KEYS_PER_OCTAVE);
        if reduced == 0 && semitones != 0 {
            IntervalClass::Octave
        } else {
            IntervalClass::ALL[reduced as usize]
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IntervalClass::P1 => "P1",
            IntervalClass::Min2 => "m2",
            IntervalClass::Maj2 => "M2",
            IntervalClass::Min3 => "m3",
            IntervalClass::Maj3 => "M3",
            IntervalClass::P4 => "P4",
            IntervalClass::Tritone => "Tritone",
            IntervalClass::P5 => "P5",
            IntervalClass::Min6 => "m6",
            IntervalClass::Maj6 => "M6",
            IntervalClass::Min7 => "m7",
            IntervalClass::Maj7 => "M7",
            IntervalClass::Octave => "Octave",
        }
    }

    /// Syllable used when the interval is sung upward
    pub fn ascending_syllable(self) -> &'static str {
        match self {
            IntervalClass::P1 => "u",
            IntervalClass::Min2 | IntervalClass::Min3
            | IntervalClass::Min6 | IntervalClass::Min7 => "i",
            IntervalClass::Maj2 | IntervalClass::Maj3
            | IntervalClass::Maj6 | IntervalClass::Maj7 => "a",
            IntervalClass::P4 | IntervalClass::P5 => "u",
            IntervalClass::Tritone => "ya",
            IntervalClass::Octave => "uu",
        }
    }

    /// Syllable used when the interval is sung downward
    pub fn descending_syllable(self) -> &'static str {
        match self {
            IntervalClass::P1 => "u",
            IntervalClass::Min2 | IntervalClass::Min3
            | IntervalClass::Min6 | IntervalClass::Min7 => "e",
            IntervalClass::Maj2 | IntervalClass::Maj3
            | IntervalClass::Maj6 | IntervalClass::Maj7 => "o",
            IntervalClass::P4 | IntervalClass::P5 => "y",
            IntervalClass::Tritone => "yo",
            IntervalClass::Octave => "y",
        }
    }

    pub fn syllable(self, ascending: bool) -> &'static str {
        if ascending {
            self.ascending_syllable()
        } else {
            self.descending_syllable()
        }
    }

    /// Sargam label of the scale degree this interval lands on above Sa.
    /// Lowercase marks komal (flat), `M` is tivra Ma.
    pub fn sargam(self) -> &'static str {
        match self {
            IntervalClass::P1 => "S",
            IntervalClass::Min2 => "r",
            IntervalClass::Maj2 => "R",
            IntervalClass::Min3 => "g",
            IntervalClass::Maj3 => "G",
            IntervalClass::P4 => "m",
            IntervalClass::Tritone => "M",
            IntervalClass::P5 => "P",
            IntervalClass::Min6 => "d",
            IntervalClass::Maj6 => "D",
            IntervalClass::Min7 => "n",
            IntervalClass::Maj7 => "N",
            IntervalClass::Octave => "S'",
        }
    }
}

impl fmt::Display for IntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const PERFECT_HUE: Colour = srgb8!(Srgb::new(0x99, 0x99, 0x00));
const MINOR_HUE: Colour = srgb8!(Srgb::new(0x00, 0x3F, 0x7B));
const MAJOR_HUE: Colour = srgb8!(Srgb::new(0x00, 0xA4, 0x1B));
const DIMINISHED_HUE: Colour = srgb8!(Srgb::new(0x89, 0x89, 0x89));
const AUGMENTED_HUE: Colour = srgb8!(Srgb::new(0x54, 0x00, 0x00));

/// Quality letter of an interval code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalQuality {
    Perfect,
    Minor,
    Major,
    Diminished,
    Augmented,
}

impl IntervalQuality {
    pub fn symbol(self) -> char {
        match self {
            IntervalQuality::Perfect => 'P',
            IntervalQuality::Minor => 'm',
            IntervalQuality::Major => 'M',
            IntervalQuality::Diminished => 'd',
            IntervalQuality::Augmented => 'A',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<IntervalQuality> {
        match symbol {
            'P' => Some(IntervalQuality::Perfect),
            'm' => Some(IntervalQuality::Minor),
            'M' => Some(IntervalQuality::Major),
            'd' => Some(IntervalQuality::Diminished),
            'A' => Some(IntervalQuality::Augmented),
            _ => None,
        }
    }

    /// Base hue for scale notes of this quality
    pub const fn hue(self) -> Colour {
        match self {
            IntervalQuality::Perfect => PERFECT_HUE,
            IntervalQuality::Minor => MINOR_HUE,
            IntervalQuality::Major => MAJOR_HUE,
            IntervalQuality::Diminished => DIMINISHED_HUE,
            IntervalQuality::Augmented => AUGMENTED_HUE,
        }
    }
}

/// A signed, quality-spelled interval such as `-m3` or `A4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IntervalCode {
    pub descending: bool,
    pub quality: IntervalQuality,
    /// Diatonic number, 1 (unison) to 8 (octave)
    pub number: u8,
}

impl IntervalCode {
    pub fn new(
        descending: bool,
        quality: IntervalQuality,
        number: u8,
    ) -> Result<Self, TheoryError> {
        let code = Self {
            descending,
            quality,
            number,
        };
        match code.magnitude() {
            Some(_) => Ok(code),
            None => Err(TheoryError::InvalidIntervalCode(code.to_string())),
        }
    }

    /// Unsigned size in semitones, `None` for spellings that do not exist
    fn magnitude(&self) -> Option<i32> {
        use IntervalQuality::*;
        let semitones = match (self.quality, self.number) {
            (Perfect, 1) => 0,
            (Minor, 2) => 1,
            (Major, 2) => 2,
            (Minor, 3) => 3,
            (Major, 3) => 4,
            (Diminished, 4) => 5,
            (Perfect, 4) => 5,
            (Augmented, 4) => 6,
            (Diminished, 5) => 6,
            (Perfect, 5) => 7,
            (Augmented, 5) => 8,
            (Minor, 6) => 8,
            (Major, 6) => 9,
            (Minor, 7) => 10,
            (Major, 7) => 11,
            (Perfect, 8) => 12,
            _ => return None,
        };
        Some(semitones)
    }

    /// Signed size in semitones; negative for descending codes
    pub fn semitones(&self) -> i32 {
        let magnitude = self.magnitude().unwrap_or(0);
        if self.descending {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Interval class of the unsigned size. A4 and d5 fold into Tritone,
    /// P8 stays an Octave.
    pub fn class(&self) -> IntervalClass {
        IntervalClass::ALL[self.magnitude().unwrap_or(0) as usize]
    }

    /// Syllable from the ascending or descending table, chosen by sign
    pub fn syllable(&self) -> &'static str {
        self.class().syllable(!self.descending)
    }

    pub fn is_unison(&self) -> bool {
        self.magnitude() == Some(0)
    }

    pub fn is_octave(&self) -> bool {
        self.magnitude() == Some(KEYS_PER_OCTAVE)
    }
}

impl fmt::Display for IntervalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.descending { "-" } else { "" };
        write!(f, "{}{}{}", sign, self.quality.symbol(), self.number)
    }
}

impl FromStr for IntervalCode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidIntervalCode(s.to_string());
        let trimmed = s.trim();
        let (descending, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut chars = rest.chars();
        let quality = chars
            .next()
            .and_then(IntervalQuality::from_symbol)
            .ok_or_else(invalid)?;
        let number = chars.as_str().parse::<u8>().map_err(|_| invalid())?;
        IntervalCode::new(descending, quality, number).map_err(|_| invalid())
    }
}

impl From<IntervalCode> for String {
    fn from(code: IntervalCode) -> String {
        code.to_string()
    }
}

impl TryFrom<String> for IntervalCode {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
