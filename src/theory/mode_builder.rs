//! Mode traversal: notes, syllables and colours for one octave of a mode
//!
//! The upper half of a mode table is walked for `Up`, the lower half for
//! `Down`; both start on the tonic. Each note is coloured twice:
//!
//! - melodically, with a hue per interval quality shaded by its distance
//!   from the tonic,
//! - by direction, where only the tonic and octave stand out and every
//!   other degree shares one accent hue.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::TheoryError;
use crate::models::colour::Colour;
use crate::models::interval::{IntervalCode, IntervalQuality};
use crate::models::mode::{Direction, Mode, ModeSpec};
use crate::models::pitch::{check_octave, Letter, Note, KEYS_PER_OCTAVE};

/// Colour of the tonic and octave in the direction palette
pub const TONIC_COLOUR: Colour = IntervalQuality::Perfect.hue();

/// Colour of every other degree in the direction palette, before shading
pub const ACCENT_COLOUR: Colour = IntervalQuality::Minor.hue();

/// Syllables per display word
const CHUNK_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTone {
    pub note: Note,
    pub interval: IntervalCode,
    pub syllable: String,
    pub colour: Colour,
    pub direction_colour: Colour,
}

/// One octave of a mode, tonic first, in traversal order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScale {
    pub spec: ModeSpec,
    pub tones: Vec<ScaleTone>,
}

impl ResolvedScale {
    pub fn notes(&self) -> Vec<Note> {
        self.tones.iter().map(|tone| tone.note).collect()
    }

    pub fn syllables(&self) -> Vec<String> {
        self.tones.iter().map(|tone| tone.syllable.clone()).collect()
    }

    /// Syllables grouped into 4-syllable words, e.g. `["KuDaMaFu", "GuLaBaKuu"]`
    pub fn syllable_chunks(&self) -> Vec<String> {
        self.tones
            .chunks(CHUNK_SIZE)
            .map(|chunk| chunk.iter().map(|tone| tone.syllable.as_str()).collect())
            .collect()
    }

    pub fn colour_map(&self) -> BTreeMap<Note, Colour> {
        self.tones.iter().map(|tone| (tone.note, tone.colour)).collect()
    }

    pub fn direction_colour_map(&self) -> BTreeMap<Note, Colour> {
        self.tones
            .iter()
            .map(|tone| (tone.note, tone.direction_colour))
            .collect()
    }
}

/// Melodic colour for a degree: quality hue shaded by signed distance
pub fn interval_colour(code: &IntervalCode) -> Colour {
    code.quality.hue().shade_for_distance(code.semitones())
}

/// Direction colour for a degree
pub fn direction_colour(code: &IntervalCode) -> Colour {
    if code.is_unison() || code.is_octave() {
        TONIC_COLOUR
    } else {
        ACCENT_COLOUR.shade_for_distance(code.semitones())
    }
}

/// Walk `mode` from `root` in `direction`, with the tonic in `base_octave`
pub fn build_mode(
    root: Letter,
    mode: Mode,
    direction: Direction,
    base_octave: i32,
) -> Result<ResolvedScale, TheoryError> {
    let spec = ModeSpec::new(root, mode, direction);
    let tonic = root.index() + check_octave(base_octave)? * KEYS_PER_OCTAVE;

    let tones: Vec<ScaleTone> = mode
        .traversal(direction)
        .into_iter()
        .map(|code| {
            let note = Note::from_index(tonic + code.semitones());
            ScaleTone {
                note,
                interval: code,
                syllable: format!("{}{}", note.letter, code.syllable()),
                colour: interval_colour(&code),
                direction_colour: direction_colour(&code),
            }
        })
        .collect();

    let scale = ResolvedScale { spec, tones };
    log::debug!("Resolved {} -> {}", spec, scale.syllable_chunks().join(" "));
    Ok(scale)
}
