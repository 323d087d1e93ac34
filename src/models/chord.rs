//! Triad qualities, inversions and the per-quality profile table
//!
//! Everything that varies by quality (semitone set, which syllable and
//! colour the third and fifth take, whether inversions are supported) lives
//! in a single [`QualityProfile`], so adding a quality means adding one
//! match arm rather than touching several parallel tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::colour::Colour;
use crate::models::pitch::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    Root,
    First,
    Second,
}

/// Which chord member a tone is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneRole {
    Root,
    Third,
    Fifth,
}

/// Harmonic flavour of a non-root chord tone; selects syllable and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneKind {
    Minor,
    Major,
    Perfect,
    Augmented,
    Diminished,
}

/// Syllable of the root tone in every position
pub const ROOT_SYLLABLE: &str = "u";

/// Colour of the root tone in every position
pub const ROOT_COLOUR: Colour = Colour::LIGHTYELLOW;

impl ToneKind {
    pub fn syllable(self, ascending: bool) -> &'static str {
        match (self, ascending) {
            (ToneKind::Minor, true) => "i",
            (ToneKind::Minor, false) => "e",
            (ToneKind::Major, true) => "a",
            (ToneKind::Major, false) => "o",
            (ToneKind::Perfect, true) => "u",
            (ToneKind::Perfect, false) => "y",
            (ToneKind::Augmented, true) => "i",
            (ToneKind::Augmented, false) => "e",
            (ToneKind::Diminished, true) => "ya",
            (ToneKind::Diminished, false) => "yo",
        }
    }

    /// Palette entry; ascending and descending share a hue per kind
    pub fn colour(self, ascending: bool) -> Colour {
        match (self, ascending) {
            (ToneKind::Minor, _) => Colour::LIGHTBLUE,
            (ToneKind::Major, _) => Colour::LIGHTGREEN,
            (ToneKind::Perfect, _) => Colour::LIGHTYELLOW,
            (ToneKind::Augmented, _) => Colour::LIGHTSALMON,
            (ToneKind::Diminished, _) => Colour::PLUM,
        }
    }
}

/// Static description of one chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityProfile {
    /// Semitones above the root for root, third and fifth
    pub intervals: [i32; 3],
    pub third: ToneKind,
    pub fifth: ToneKind,
    /// Whether the inversion rotation yields a coherent voicing
    pub supports_inversion: bool,
}

const MAJOR: QualityProfile = QualityProfile {
    intervals: [0, 4, 7],
    third: ToneKind::Major,
    fifth: ToneKind::Perfect,
    supports_inversion: true,
};

const MINOR: QualityProfile = QualityProfile {
    intervals: [0, 3, 7],
    third: ToneKind::Minor,
    fifth: ToneKind::Perfect,
    supports_inversion: true,
};

// The augmented fifth is enharmonic with a minor sixth, so lowering it an
// octave for the second inversion does not give a distinct voicing.
const AUGMENTED: QualityProfile = QualityProfile {
    intervals: [0, 4, 8],
    third: ToneKind::Major,
    fifth: ToneKind::Augmented,
    supports_inversion: false,
};

const DIMINISHED: QualityProfile = QualityProfile {
    intervals: [0, 3, 6],
    third: ToneKind::Minor,
    fifth: ToneKind::Diminished,
    supports_inversion: true,
};

impl ChordQuality {
    pub const ALL: [ChordQuality; 4] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Augmented,
        ChordQuality::Diminished,
    ];

    pub fn profile(self) -> &'static QualityProfile {
        match self {
            ChordQuality::Major => &MAJOR,
            ChordQuality::Minor => &MINOR,
            ChordQuality::Augmented => &AUGMENTED,
            ChordQuality::Diminished => &DIMINISHED,
        }
    }

    pub fn supports_inversion(self) -> bool {
        self.profile().supports_inversion
    }

    pub fn third_interval(self) -> i32 {
        self.profile().intervals[1]
    }

    pub fn fifth_interval(self) -> i32 {
        self.profile().intervals[2]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Diminished => "diminished",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" | "maj" => Ok(ChordQuality::Major),
            "minor" | "min" => Ok(ChordQuality::Minor),
            "augmented" | "aug" => Ok(ChordQuality::Augmented),
            "diminished" | "dim" => Ok(ChordQuality::Diminished),
            _ => Err(TheoryError::UnsupportedQuality(s.to_string())),
        }
    }
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    pub fn as_str(self) -> &'static str {
        match self {
            Inversion::Root => "root",
            Inversion::First => "first inversion",
            Inversion::Second => "second inversion",
        }
    }

    /// File-name friendly form
    pub fn slug(self) -> &'static str {
        match self {
            Inversion::Root => "root",
            Inversion::First => "first-inversion",
            Inversion::Second => "second-inversion",
        }
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Inversion {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "root" | "root position" | "0" => Ok(Inversion::Root),
            "first" | "first inversion" | "1" => Ok(Inversion::First),
            "second" | "second inversion" | "2" => Ok(Inversion::Second),
            _ => Err(TheoryError::UnsupportedInversion(s.to_string())),
        }
    }
}

/// Root letter, quality and inversion of one triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSpec {
    pub root: Letter,
    pub quality: ChordQuality,
    pub inversion: Inversion,
}

impl ChordSpec {
    pub fn new(root: Letter, quality: ChordQuality, inversion: Inversion) -> Self {
        Self {
            root,
            quality,
            inversion,
        }
    }

    /// Every (root, quality, inversion) combination, root-major order
    pub fn all() -> Vec<ChordSpec> {
        Letter::ALL
            .iter()
            .flat_map(|&root| {
                Inversion::ALL.iter().flat_map(move |&inversion| {
                    ChordQuality::ALL
                        .iter()
                        .map(move |&quality| ChordSpec::new(root, quality, inversion))
                })
            })
            .collect()
    }

    /// `"major first inversion"` style label
    pub fn label(&self) -> String {
        format!("{} {}", self.quality, self.inversion)
    }
}

impl fmt::Display for ChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.root, self.quality, self.inversion)
    }
}
