//! Piano keyboard diagram
//!
//! The window spans `octaves` octaves of white keys and is shifted so the
//! highlighted notes sit in its middle. Coordinates are in key units
//! (white key 1 x 3, black key 0.6 x 1.7) scaled by `unit` pixels.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{write_svg, SvgCanvas};
use crate::error::OutputError;
use crate::models::colour::Colour;
use crate::models::pitch::{Letter, Note, WHITE_KEYS_PER_OCTAVE};
use crate::renderers::layout::{centre_offset, white_key_offset, window_keys};

const WHITE_KEY_HEIGHT: f64 = 3.0;
const BLACK_KEY_OFFSET: f64 = 0.7;
const BLACK_KEY_WIDTH: f64 = 0.6;
const BLACK_KEY_HEIGHT: f64 = 1.7;

/// Default fill for a highlighted white key with no colour of its own
pub const HIGHLIGHT_WHITE: Colour = Colour::LIGHTCORAL;
/// Default fill for a highlighted black key with no colour of its own
pub const HIGHLIGHT_BLACK: Colour = Colour::DARKRED;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardLayout {
    pub octaves: i32,
    /// Pixels per white-key width
    pub unit: f64,
}

impl KeyboardLayout {
    pub fn with_octaves(octaves: i32) -> Self {
        Self {
            octaves,
            ..Self::default()
        }
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            octaves: 2,
            unit: 24.0,
        }
    }
}

fn key_fill(
    note: Note,
    notes: &[Note],
    colours: Option<&BTreeMap<Note, Colour>>,
    idle: Colour,
    highlight: Colour,
) -> Colour {
    if !notes.contains(&note) {
        return idle;
    }
    colours
        .and_then(|map| map.get(&note).copied())
        .unwrap_or(highlight)
}

/// Render a keyboard with `notes` highlighted, coloured from `colours`
/// where present and with the default highlight otherwise.
pub fn keyboard_svg(
    notes: &[Note],
    colours: Option<&BTreeMap<Note, Colour>>,
    layout: &KeyboardLayout,
) -> Result<String, OutputError> {
    let total_keys = window_keys(layout.octaves)?;
    let total_white_keys = layout.octaves * WHITE_KEYS_PER_OCTAVE;
    let start = centre_offset(notes, total_keys)
        .ok_or_else(|| OutputError::EmptyNoteSet("keyboard".to_string()))?;
    let start_white = white_key_offset(start);
    let unit = layout.unit;

    let mut canvas = SvgCanvas::new(total_white_keys as f64 * unit, WHITE_KEY_HEIGHT * unit);
    let visible = -start_white..total_white_keys - start_white;

    // White keys first so the black keys overlap them
    for i in visible.clone() {
        let letter = Letter::WHITE_KEYS[i.rem_euclid(WHITE_KEYS_PER_OCTAVE) as usize];
        let note = Note::new(letter, i.div_euclid(WHITE_KEYS_PER_OCTAVE));
        let fill = key_fill(note, notes, colours, Colour::WHITE, HIGHLIGHT_WHITE);
        let x = (i + start_white) as f64 * unit;
        canvas.rect(x, 0.0, unit, WHITE_KEY_HEIGHT * unit, fill, Some(Colour::BLACK));
    }

    for i in visible {
        let white = Letter::WHITE_KEYS[i.rem_euclid(WHITE_KEYS_PER_OCTAVE) as usize];
        let Some(black) = white.black_key_above() else {
            continue;
        };
        let note = Note::new(black, i.div_euclid(WHITE_KEYS_PER_OCTAVE));
        let fill = key_fill(note, notes, colours, Colour::BLACK, HIGHLIGHT_BLACK);
        let x = ((i + start_white) as f64 + BLACK_KEY_OFFSET) * unit;
        canvas.rect(
            x,
            0.0,
            BLACK_KEY_WIDTH * unit,
            BLACK_KEY_HEIGHT * unit,
            fill,
            Some(Colour::BLACK),
        );
    }

    Ok(canvas.finish())
}

/// Render a keyboard into `dir/file_name`
pub fn render_keyboard(
    dir: &Path,
    file_name: &str,
    notes: &[Note],
    colours: Option<&BTreeMap<Note, Colour>>,
    layout: &KeyboardLayout,
) -> Result<PathBuf, OutputError> {
    let svg = keyboard_svg(notes, colours, layout).map_err(|e| match e {
        OutputError::EmptyNoteSet(_) => OutputError::EmptyNoteSet(file_name.to_string()),
        other => other,
    })?;
    write_svg(dir, file_name, &svg)
}
