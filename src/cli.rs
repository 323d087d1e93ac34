//! Command-line interface for the syllable-keys generator

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use syllable_keys::config::{GeneratorConfig, ScalePalette};
use syllable_keys::models::pitch::check_octave;
use syllable_keys::models::{ChordQuality, Direction, Inversion, Letter, Mode};
use syllable_keys::theory::{InversionPolicy, NoteOrder};

/// Generate chord, mode and interval flash cards with keyboard diagrams
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file; every field is optional
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for diagrams and reports
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Limit the batch to these roots (e.g. `K,G,L`)
    #[arg(long, global = true, value_delimiter = ',')]
    pub roots: Vec<Letter>,

    /// Skip the HTML preview next to each report
    #[arg(long, global = true)]
    pub no_html: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every triad with its four diagrams and write the chord report
    Chords(ChordsCommand),

    /// Render every mode in both directions and write the mode report
    Modes(ModesCommand),

    /// Write the interval mnemonic report
    Intervals(IntervalsCommand),

    /// Run all three batches
    All,

    /// Print one resolved chord, scale or interval as JSON
    #[command(subcommand)]
    Show(ShowCommand),
}

#[derive(Args, Debug)]
pub struct ChordsCommand {
    /// Octave of the chord roots (-10 to 10)
    #[arg(long, value_parser = parse_octave, allow_negative_numbers = true)]
    pub base_octave: Option<i32>,

    /// What to do with inversions of augmented chords
    #[arg(long)]
    pub inversion_policy: Option<PolicyArg>,

    /// Order of the three notes in each chord
    #[arg(long)]
    pub note_order: Option<NoteOrderArg>,
}

#[derive(Args, Debug)]
pub struct ModesCommand {
    /// Octave of the tonic (-10 to 10)
    #[arg(long, value_parser = parse_octave, allow_negative_numbers = true)]
    pub base_octave: Option<i32>,

    /// Palette of the coloured keyboard
    #[arg(long)]
    pub palette: Option<PaletteArg>,
}

#[derive(Args, Debug)]
pub struct IntervalsCommand {
    /// Leave the tritone out
    #[arg(long)]
    pub no_tritone: bool,

    /// Add the octave
    #[arg(long)]
    pub octave: bool,
}

#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    Chord {
        root: Letter,
        quality: ChordQuality,
        #[arg(default_value = "root")]
        inversion: Inversion,
        #[arg(
            long,
            default_value_t = 0,
            value_parser = parse_octave,
            allow_negative_numbers = true
        )]
        base_octave: i32,
    },
    Mode {
        root: Letter,
        mode: Mode,
        #[arg(default_value = "up")]
        direction: Direction,
        #[arg(
            long,
            default_value_t = 1,
            value_parser = parse_octave,
            allow_negative_numbers = true
        )]
        base_octave: i32,
    },
    Interval {
        root: Letter,
        other: Letter,
        #[arg(allow_negative_numbers = true)]
        semitones: i32,
    },
}

fn parse_octave(value: &str) -> Result<i32, String> {
    let octave = value.parse::<i32>().map_err(|e| e.to_string())?;
    check_octave(octave).map_err(|e| e.to_string())
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    Fail,
    Skip,
    Attempt,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum NoteOrderArg {
    Inversion,
    PitchClass,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PaletteArg {
    Interval,
    Direction,
}

impl From<PolicyArg> for InversionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fail => InversionPolicy::Fail,
            PolicyArg::Skip => InversionPolicy::Skip,
            PolicyArg::Attempt => InversionPolicy::Attempt,
        }
    }
}

impl From<NoteOrderArg> for NoteOrder {
    fn from(arg: NoteOrderArg) -> Self {
        match arg {
            NoteOrderArg::Inversion => NoteOrder::Inversion,
            NoteOrderArg::PitchClass => NoteOrder::PitchClass,
        }
    }
}

impl From<PaletteArg> for ScalePalette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Interval => ScalePalette::Interval,
            PaletteArg::Direction => ScalePalette::Direction,
        }
    }
}

impl Cli {
    /// Apply the global flags on top of `config`
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if !self.roots.is_empty() {
            config.roots = Some(self.roots.clone());
        }
        if self.no_html {
            config.html = false;
        }
    }
}

impl ChordsCommand {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(octave) = self.base_octave {
            config.base_octave = octave;
        }
        if let Some(policy) = self.inversion_policy {
            config.unsupported_inversion = policy.into();
        }
        if let Some(order) = self.note_order {
            config.note_order = order.into();
        }
    }
}

impl ModesCommand {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(octave) = self.base_octave {
            config.scale_base_octave = octave;
        }
        if let Some(palette) = self.palette {
            config.scale_palette = palette.into();
        }
    }
}

impl IntervalsCommand {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if self.no_tritone {
            config.include_tritone = false;
        }
        if self.octave {
            config.include_octave = true;
        }
    }
}
