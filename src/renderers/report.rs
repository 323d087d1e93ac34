//! Delimited report rows for generated artifacts
//!
//! Every artifact batch produces one table: a fixed header and one row per
//! chord, mode or interval. Image cells point at the rendered SVG files and
//! are written as `<img src="...">` so the table can be imported straight
//! into a flash-card deck.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::OutputError;
use crate::theory::{IntervalName, ResolvedChord, ResolvedScale};

pub const CHORD_HEADERS: [&str; 7] = [
    "Syllables",
    "mnemonic",
    "Keyboard",
    "Pianoroll",
    "TypeAndQuality",
    "KeyboardColoured",
    "PianorollColoured",
];

pub const MODE_HEADERS: [&str; 5] = [
    "ModeAndDirection",
    "KeyboardPicture",
    "SongToPractice",
    "Syllables",
    "KeyboardPictureNoColours",
];

pub const INTERVAL_HEADERS: [&str; 4] = ["Ascending", "Descending", "Interval", "Sargam"];

/// One report cell: plain text or a reference to a rendered image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    Image(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn image(path: impl AsRef<Path>) -> Self {
        Cell::Image(path.as_ref().display().to_string())
    }

    /// Delimited-file form; images become `<img src="...">`
    pub fn to_field(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Image(src) => format!("<img src=\"{}\">", src),
        }
    }
}

/// Image files rendered for one chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordImages {
    pub keyboard: String,
    pub piano_roll: String,
    pub keyboard_coloured: String,
    pub piano_roll_coloured: String,
}

/// Image files rendered for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeImages {
    pub keyboard: String,
    pub keyboard_plain: String,
}

/// A titled table with a fixed header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn chords() -> Self {
        Self::new("Chords", &CHORD_HEADERS)
    }

    pub fn modes() -> Self {
        Self::new("Modes", &MODE_HEADERS)
    }

    pub fn intervals() -> Self {
        Self::new("Intervals", &INTERVAL_HEADERS)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    /// Chord row; `mnemonic` comes from the chord lookup table when one is loaded
    pub fn push_chord(&mut self, chord: &ResolvedChord, mnemonic: &str, images: &ChordImages) {
        self.push(vec![
            Cell::text(chord.syllables()),
            Cell::text(mnemonic),
            Cell::image(&images.keyboard),
            Cell::image(&images.piano_roll),
            Cell::text(chord.spec.label()),
            Cell::image(&images.keyboard_coloured),
            Cell::image(&images.piano_roll_coloured),
        ]);
    }

    /// Mode row; `song` comes from the mode lookup table when one is loaded
    pub fn push_mode(&mut self, scale: &ResolvedScale, song: &str, images: &ModeImages) {
        self.push(vec![
            Cell::text(scale.spec.to_string()),
            Cell::image(&images.keyboard),
            Cell::text(song),
            Cell::text(scale.syllable_chunks().join(" ")),
            Cell::image(&images.keyboard_plain),
        ]);
    }

    pub fn push_interval(&mut self, name: &IntervalName) {
        self.push(vec![
            Cell::text(&name.ascending),
            Cell::text(&name.descending),
            Cell::text(name.class_name()),
            Cell::text(name.sargam()),
        ]);
    }
}

/// Writes a `Report` as tab-separated text, fields unquoted
pub struct TsvReport;

impl TsvReport {
    pub fn write_to<W: Write>(report: &Report, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);
        out.write_record(&report.headers)?;
        for row in &report.rows {
            out.write_record(row.iter().map(Cell::to_field))?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_string(report: &Report) -> Result<String, OutputError> {
        let mut buffer = Vec::new();
        Self::write_to(report, &mut buffer).map_err(|e| OutputError::csv("<memory>", e))?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn write(report: &Report, path: &Path) -> Result<(), OutputError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
        Self::write_to(report, file).map_err(|e| OutputError::csv(path, e))?;
        log::info!("Wrote {} rows to {}", report.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChordQuality, Inversion, Letter};
    use crate::theory::{build_chord, name_interval};

    #[test]
    fn test_chord_row() {
        let chord = build_chord(Letter::K, ChordQuality::Major, Inversion::Root, 0).unwrap();
        let images = ChordImages {
            keyboard: "k.svg".to_string(),
            piano_roll: "p.svg".to_string(),
            keyboard_coloured: "kc.svg".to_string(),
            piano_roll_coloured: "pc.svg".to_string(),
        };
        let mut report = Report::chords();
        report.push_chord(&chord, "Cool Mule Goo", &images);
        let text = TsvReport::to_string(&report).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CHORD_HEADERS.join("\t"));
        let fields: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(
            fields,
            vec![
                "KuMaGu",
                "Cool Mule Goo",
                r#"<img src="k.svg">"#,
                r#"<img src="p.svg">"#,
                "major root",
                r#"<img src="kc.svg">"#,
                r#"<img src="pc.svg">"#,
            ]
        );
    }

    #[test]
    fn test_interval_rows() {
        let mut report = Report::intervals();
        report.push_interval(&name_interval(Letter::K, Letter::M, 4).unwrap());
        let text = TsvReport::to_string(&report).unwrap();
        assert_eq!(text, "Ascending\tDescending\tInterval\tSargam\nKuMa\tMuKo\tM3\tG\n");
    }

    #[test]
    fn test_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("intervals.tsv");
        let mut report = Report::intervals();
        report.push_interval(&name_interval(Letter::D, Letter::G, 5).unwrap());
        TsvReport::write(&report, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
