//! Keyed lookup tables read from headerless tab-separated files
//!
//! Each row is keyed by its first column; a later row with the same key
//! replaces an earlier one. Short rows are padded with empty fields and
//! long rows truncated, both with a warning.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::error::OutputError;

pub const CHORD_FIELDS: [&str; 7] = [
    "Syllables",
    "Mnemonic",
    "Keyboard",
    "Pianoroll",
    "TypeAndQuality",
    "KeyboardColoured",
    "PianorollColoured",
];

pub const MODE_FIELDS: [&str; 5] = [
    "ModeAndDirection",
    "KeyboardPicture",
    "SongToPractice",
    "Syllables",
    "KeyboardPictureNoColours",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvTable {
    fields: Vec<String>,
    rows: BTreeMap<String, Vec<String>>,
}

impl TsvTable {
    pub fn empty(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            rows: BTreeMap::new(),
        }
    }

    /// Read rows from `reader`, naming columns with `fields`
    pub fn from_reader<R: Read>(reader: R, fields: &[&str]) -> Result<Self, csv::Error> {
        let mut table = Self::empty(fields);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);

        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let mut values: Vec<String> = record.iter().map(str::to_string).collect();
            if values.iter().all(|v| v.is_empty()) {
                continue;
            }
            if values.len() != fields.len() {
                log::warn!(
                    "Row {} has {} fields, expected {}",
                    line + 1,
                    values.len(),
                    fields.len()
                );
                values.resize(fields.len(), String::new());
            }
            table.rows.insert(values[0].clone(), values);
        }
        Ok(table)
    }

    pub fn load(path: &Path, fields: &[&str]) -> Result<Self, OutputError> {
        let file = std::fs::File::open(path).map_err(|e| OutputError::io(path, e))?;
        let table = Self::from_reader(file, fields).map_err(|e| OutputError::csv(path, e))?;
        log::info!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn chord_table(path: &Path) -> Result<Self, OutputError> {
        Self::load(path, &CHORD_FIELDS)
    }

    pub fn mode_table(path: &Path) -> Result<Self, OutputError> {
        Self::load(path, &MODE_FIELDS)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whole row for `key` as field name -> value
    pub fn get(&self, key: &str) -> Option<BTreeMap<&str, &str>> {
        let values = self.rows.get(key)?;
        Some(
            self.fields
                .iter()
                .map(String::as_str)
                .zip(values.iter().map(String::as_str))
                .collect(),
        )
    }

    /// Single field of the row for `key`
    pub fn field(&self, key: &str, field: &str) -> Option<&str> {
        let column = self.fields.iter().position(|f| f == field)?;
        self.rows.get(key).map(|values| values[column].as_str())
    }
}
