//! Generator configuration loaded from YAML
//!
//! Every field has a default, so an empty file (or no file) gives the
//! standard batch. Command-line flags override individual fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::models::pitch::{check_octave, Letter};
use crate::renderers::layout::window_keys;
use crate::theory::{ChordOptions, InversionPolicy, IntervalTableOptions, NoteOrder};

/// Which palette colours the main mode keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePalette {
    /// Hue per interval quality, shaded by distance from the tonic
    #[default]
    Interval,
    /// Tonic and octave highlighted, every other degree in one accent hue
    Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    /// Octave of chord roots
    pub base_octave: i32,
    /// Octave of mode tonics
    pub scale_base_octave: i32,
    pub chord_keyboard_octaves: i32,
    pub scale_keyboard_octaves: i32,
    pub piano_roll_octaves: i32,
    pub note_order: NoteOrder,
    pub unsupported_inversion: InversionPolicy,
    pub scale_palette: ScalePalette,
    pub include_tritone: bool,
    pub include_octave: bool,
    /// Headerless TSV supplying chord mnemonics
    pub chord_lookup: Option<PathBuf>,
    /// Headerless TSV supplying songs to practise each mode with
    pub mode_lookup: Option<PathBuf>,
    /// Restrict the batch to these roots; all twelve when absent
    pub roots: Option<Vec<Letter>>,
    pub html: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            base_octave: 0,
            scale_base_octave: 1,
            chord_keyboard_octaves: 2,
            scale_keyboard_octaves: 3,
            piano_roll_octaves: 2,
            note_order: NoteOrder::default(),
            unsupported_inversion: InversionPolicy::default(),
            scale_palette: ScalePalette::default(),
            include_tritone: true,
            include_octave: false,
            chord_lookup: None,
            mode_lookup: None,
            roots: None,
            html: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml(content: &str) -> Result<Self, OutputError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject octaves and diagram windows the builders and renderers refuse
    pub fn validate(&self) -> Result<(), OutputError> {
        check_octave(self.base_octave)?;
        check_octave(self.scale_base_octave)?;
        for octaves in [
            self.chord_keyboard_octaves,
            self.scale_keyboard_octaves,
            self.piano_roll_octaves,
        ] {
            window_keys(octaves)?;
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, OutputError> {
        let content = std::fs::read_to_string(path).map_err(|e| OutputError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn roots(&self) -> Vec<Letter> {
        match &self.roots {
            Some(roots) if !roots.is_empty() => roots.clone(),
            _ => Letter::ALL.to_vec(),
        }
    }

    pub fn chord_options(&self) -> ChordOptions {
        ChordOptions {
            note_order: self.note_order,
            unsupported_inversion: self.unsupported_inversion,
            ..ChordOptions::default()
        }
    }

    pub fn interval_options(&self) -> IntervalTableOptions {
        IntervalTableOptions {
            include_tritone: self.include_tritone,
            include_octave: self.include_octave,
        }
    }
}
