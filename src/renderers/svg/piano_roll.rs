//! Piano-roll diagram
//!
//! One row per semitone, lowest pitch at the bottom. Rows for black keys
//! are shaded; each note is a short bar in its row.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{write_svg, SvgCanvas};
use crate::error::OutputError;
use crate::models::colour::Colour;
use crate::models::pitch::{Letter, Note};
use crate::renderers::layout::{centre_offset, window_keys};

/// Visible width in roll units
const ROLL_WIDTH: f64 = 5.0;
const NOTE_START: f64 = 1.0;
const NOTE_LENGTH: f64 = 3.0;

/// Default fill for a note with no colour of its own
pub const NOTE_COLOUR: Colour = Colour::PINK;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PianoRollLayout {
    pub octaves: i32,
    /// Pixels per horizontal roll unit
    pub unit: f64,
    /// Pixels per semitone row
    pub row_height: f64,
}

impl Default for PianoRollLayout {
    fn default() -> Self {
        Self {
            octaves: 2,
            unit: 60.0,
            row_height: 12.0,
        }
    }
}

/// Render a piano roll with one bar per note in `notes`
pub fn piano_roll_svg(
    notes: &[Note],
    colours: Option<&BTreeMap<Note, Colour>>,
    layout: &PianoRollLayout,
) -> Result<String, OutputError> {
    let total_keys = window_keys(layout.octaves)?;
    let start = centre_offset(notes, total_keys)
        .ok_or_else(|| OutputError::EmptyNoteSet("piano roll".to_string()))?;
    let width = ROLL_WIDTH * layout.unit;
    let row_y = |row: i32| (total_keys - 1 - row) as f64 * layout.row_height;

    let mut canvas = SvgCanvas::new(width, total_keys as f64 * layout.row_height);

    for index in -start..total_keys - start {
        let background = if Letter::from_index(index).is_black() {
            Colour::WHITESMOKE
        } else {
            Colour::WHITE
        };
        canvas.rect(
            0.0,
            row_y(index + start),
            width,
            layout.row_height,
            background,
            Some(Colour::WHITESMOKE),
        );
    }

    for note in notes {
        let row = note.index() + start;
        if !(0..total_keys).contains(&row) {
            log::debug!("{} falls outside the piano-roll window", note);
            continue;
        }
        let fill = colours
            .and_then(|map| map.get(note).copied())
            .unwrap_or(NOTE_COLOUR);
        canvas.rect(
            NOTE_START * layout.unit,
            row_y(row),
            NOTE_LENGTH * layout.unit,
            layout.row_height,
            fill,
            Some(Colour::WHITESMOKE),
        );
    }

    Ok(canvas.finish())
}

/// Render a piano roll into `dir/file_name`
pub fn render_piano_roll(
    dir: &Path,
    file_name: &str,
    notes: &[Note],
    colours: Option<&BTreeMap<Note, Colour>>,
    layout: &PianoRollLayout,
) -> Result<PathBuf, OutputError> {
    let svg = piano_roll_svg(notes, colours, layout).map_err(|e| match e {
        OutputError::EmptyNoteSet(_) => OutputError::EmptyNoteSet(file_name.to_string()),
        other => other,
    })?;
    write_svg(dir, file_name, &svg)
}
