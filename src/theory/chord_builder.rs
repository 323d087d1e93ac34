//! Triad construction with inversions, syllables and colours
//!
//! A chord is built in four steps:
//!
//! 1. stack the quality's semitone set on the root,
//! 2. apply the inversion (raise the root, or lower the fifth and lift the
//!    whole triad an octave) and rotate the tones into bass-first order,
//! 3. drop the triad an octave if it sits wholly above the first octave,
//! 4. label each tone with a syllable and colour. The root always takes
//!    [`ROOT_SYLLABLE`]; the third and fifth take the ascending form of their
//!    kind when they lie above the root in this voicing, the descending form
//!    when they lie below it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::TheoryError;
use crate::models::chord::{
    ChordQuality, ChordSpec, Inversion, ToneRole, ROOT_COLOUR, ROOT_SYLLABLE,
};
use crate::models::colour::Colour;
use crate::models::pitch::{check_octave, rebase_window, Letter, Note, KEYS_PER_OCTAVE};

/// How the three resolved tones are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteOrder {
    /// Bass first, as voiced by the inversion
    #[default]
    Inversion,
    /// Sorted by position in the alphabet, ignoring octave
    PitchClass,
}

/// What to do when a quality does not support the requested inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InversionPolicy {
    /// Return `TheoryError::InversionUnsupported`
    Fail,
    /// Produce no chord
    Skip,
    /// Apply the same rotation as every other quality
    #[default]
    Attempt,
}

/// Switches for the chord builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordOptions {
    pub note_order: NoteOrder,
    pub unsupported_inversion: InversionPolicy,
    pub with_syllables: bool,
    pub with_colours: bool,
}

impl Default for ChordOptions {
    fn default() -> Self {
        Self {
            note_order: NoteOrder::default(),
            unsupported_inversion: InversionPolicy::default(),
            with_syllables: true,
            with_colours: true,
        }
    }
}

/// One resolved chord member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordTone {
    pub note: Note,
    pub role: ToneRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
}

/// A triad ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedChord {
    pub spec: ChordSpec,
    pub tones: Vec<ChordTone>,
}

impl ResolvedChord {
    pub fn notes(&self) -> Vec<Note> {
        self.tones.iter().map(|tone| tone.note).collect()
    }

    /// Letters joined with their syllables, e.g. `KuMaGu`
    pub fn syllables(&self) -> String {
        self.tones
            .iter()
            .filter_map(|tone| {
                tone.syllable
                    .as_ref()
                    .map(|syllable| format!("{}{}", tone.note.letter, syllable))
            })
            .collect()
    }

    pub fn colour_map(&self) -> BTreeMap<Note, Colour> {
        self.tones
            .iter()
            .filter_map(|tone| tone.colour.map(|colour| (tone.note, colour)))
            .collect()
    }

    pub fn pitch_classes(&self) -> BTreeSet<Letter> {
        self.tones.iter().map(|tone| tone.note.letter).collect()
    }
}

/// Parameterised chord builder
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordBuilder {
    options: ChordOptions,
}

/// Raw tone before labelling: pitch index, member, whether it lies above the root
type RawTone = (i32, ToneRole, bool);

impl ChordBuilder {
    pub fn new(options: ChordOptions) -> Self {
        Self { options }
    }

    /// Resolve `spec` with its lowest octave at `base_octave`.
    ///
    /// Returns `Ok(None)` only when the quality cannot be inverted and the
    /// policy is [`InversionPolicy::Skip`].
    pub fn build(
        &self,
        spec: ChordSpec,
        base_octave: i32,
    ) -> Result<Option<ResolvedChord>, TheoryError> {
        let base_octave = check_octave(base_octave)?;
        if spec.inversion != Inversion::Root && !spec.quality.supports_inversion() {
            match self.options.unsupported_inversion {
                InversionPolicy::Fail => {
                    return Err(TheoryError::InversionUnsupported {
                        root: spec.root.to_string(),
                        quality: spec.quality.to_string(),
                        inversion: spec.inversion.to_string(),
                    });
                }
                InversionPolicy::Skip => {
                    log::info!("Skipping {}: inversion not supported", spec);
                    return Ok(None);
                }
                InversionPolicy::Attempt => {}
            }
        }

        let raw = voice(spec);
        let indices: Vec<i32> = raw.iter().map(|&(index, _, _)| index).collect();
        let indices = rebase_window(&indices, 0);

        let profile = spec.quality.profile();
        let mut tones: Vec<ChordTone> = raw
            .iter()
            .zip(indices)
            .map(|(&(_, role, ascending), index)| {
                let (syllable, colour) = match role {
                    ToneRole::Root => (ROOT_SYLLABLE, ROOT_COLOUR),
                    ToneRole::Third => (
                        profile.third.syllable(ascending),
                        profile.third.colour(ascending),
                    ),
                    ToneRole::Fifth => (
                        profile.fifth.syllable(ascending),
                        profile.fifth.colour(ascending),
                    ),
                };
                ChordTone {
                    note: Note::from_index(index + base_octave * KEYS_PER_OCTAVE),
                    role,
                    syllable: self.options.with_syllables.then(|| syllable.to_string()),
                    colour: self.options.with_colours.then_some(colour),
                }
            })
            .collect();

        if self.options.note_order == NoteOrder::PitchClass {
            tones.sort_by_key(|tone| tone.note.letter.index());
        }

        let chord = ResolvedChord { spec, tones };
        log::debug!("Resolved {} -> {:?}", spec, chord.notes());
        Ok(Some(chord))
    }
}

/// Stack, invert and rotate the triad, bass first. Indices are relative to
/// octave 0 and not yet rebased.
fn voice(spec: ChordSpec) -> [RawTone; 3] {
    let [root_offset, third_offset, fifth_offset] = spec.quality.profile().intervals;
    let root = spec.root.index() + root_offset;
    let third = spec.root.index() + third_offset;
    let fifth = spec.root.index() + fifth_offset;

    match spec.inversion {
        Inversion::Root => [
            (root, ToneRole::Root, true),
            (third, ToneRole::Third, true),
            (fifth, ToneRole::Fifth, true),
        ],
        Inversion::First => [
            (third, ToneRole::Third, false),
            (fifth, ToneRole::Fifth, false),
            (root + KEYS_PER_OCTAVE, ToneRole::Root, true),
        ],
        Inversion::Second => {
            let lift = KEYS_PER_OCTAVE;
            [
                (fifth - KEYS_PER_OCTAVE + lift, ToneRole::Fifth, false),
                (root + lift, ToneRole::Root, true),
                (third + lift, ToneRole::Third, true),
            ]
        }
    }
}

/// Build one chord with default options (inversions attempted for every quality)
pub fn build_chord(
    root: Letter,
    quality: ChordQuality,
    inversion: Inversion,
    base_octave: i32,
) -> Result<ResolvedChord, TheoryError> {
    let spec = ChordSpec::new(root, quality, inversion);
    ChordBuilder::default()
        .build(spec, base_octave)?
        .ok_or_else(|| TheoryError::InversionUnsupported {
            root: root.to_string(),
            quality: quality.to_string(),
            inversion: inversion.to_string(),
        })
}
