//! Window placement for keyboard and piano-roll diagrams
//!
//! Both diagrams show a fixed number of octaves and shift the window so the
//! highlighted notes sit in the middle of it.

use std::ops::RangeInclusive;

use crate::error::OutputError;
use crate::models::pitch::{Note, KEYS_PER_OCTAVE, WHITE_KEYS_PER_OCTAVE};

/// Octaves a diagram window may span
pub const WINDOW_OCTAVES: RangeInclusive<i32> = 1..=10;

/// Semitones in a window of `octaves` octaves
pub fn window_keys(octaves: i32) -> Result<i32, OutputError> {
    if WINDOW_OCTAVES.contains(&octaves) {
        Ok(octaves * KEYS_PER_OCTAVE)
    } else {
        Err(OutputError::WindowOutOfRange(octaves))
    }
}

/// Offset that, added to a pitch index, centres the note span in a window of
/// `total_keys` semitones: `total_keys/2 - span/2 - min_index`.
///
/// Returns `None` for an empty note list.
pub fn centre_offset(notes: &[Note], total_keys: i32) -> Option<i32> {
    let lowest = notes.iter().map(Note::index).min()?;
    let highest = notes.iter().map(Note::index).max()?;
    let span = highest - lowest;
    Some(total_keys / 2 - span / 2 - lowest)
}

/// White-key equivalent of a semitone offset, rounded half to even
pub fn white_key_offset(semitone_offset: i32) -> i32 {
    let scaled =
        semitone_offset as f64 / KEYS_PER_OCTAVE as f64 * WHITE_KEYS_PER_OCTAVE as f64;
    scaled.round_ties_even() as i32
}
