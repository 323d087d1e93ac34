//! Batch generation of diagrams and reports
//!
//! Each batch walks its grid (roots x inversions x qualities, roots x modes
//! x directions, or roots x interval classes), renders the diagrams for
//! every entry and writes one report row per entry.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{GeneratorConfig, ScalePalette};
use crate::error::OutputError;
use crate::lookup::{TsvTable, CHORD_FIELDS, MODE_FIELDS};
use crate::models::chord::ChordSpec;
use crate::models::mode::{Direction, Mode};
use crate::models::pitch::Letter;
use crate::renderers::html::write_html;
use crate::renderers::report::{ChordImages, ModeImages, Report, TsvReport};
use crate::renderers::svg::{
    render_keyboard, render_piano_roll, KeyboardLayout, PianoRollLayout,
};
use crate::theory::{build_mode, interval_table, ChordBuilder, ResolvedChord};

pub const CHORD_DIR: &str = "chords";
pub const SCALE_DIR: &str = "scales";

/// What a batch produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Images and report files written
    pub artifacts: usize,
    /// Entries left out by the inversion policy
    pub skipped: usize,
    pub report: PathBuf,
}

fn load_lookup(path: Option<&Path>, fields: &[&str]) -> Result<TsvTable, OutputError> {
    match path {
        Some(path) => TsvTable::load(path, fields),
        None => Ok(TsvTable::empty(fields)),
    }
}

/// Write `{stem}.tsv` and, when enabled, `{stem}.html` into the output
/// directory. The TSV keeps bare image names for flash-card import; the HTML
/// points into `image_dir` so the page shows the diagrams.
fn write_reports(
    report: &Report,
    config: &GeneratorConfig,
    stem: &str,
    image_dir: Option<&str>,
) -> Result<(PathBuf, usize), OutputError> {
    let tsv = config.output_dir.join(format!("{}.tsv", stem));
    TsvReport::write(report, &tsv)?;
    if config.html {
        let html = config.output_dir.join(format!("{}.html", stem));
        write_html(report, image_dir, &html)?;
        return Ok((tsv, 2));
    }
    Ok((tsv, 1))
}

/// `{root}-{syllables}-{quality}-{inversion}-{kind}.svg`
pub fn chord_file_name(chord: &ResolvedChord, kind: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}.svg",
        chord.spec.root,
        chord.syllables(),
        chord.spec.quality,
        chord.spec.inversion.slug(),
        kind
    )
}

/// `scales-{mode}-{direction}-{root}[-plain].svg`
pub fn scale_file_name(mode: Mode, direction: Direction, root: Letter, plain: bool) -> String {
    format!(
        "scales-{}-{}-{}{}.svg",
        mode,
        direction,
        root,
        if plain { "-plain" } else { "" }
    )
}

fn render_chord(
    chord: &ResolvedChord,
    dir: &Path,
    config: &GeneratorConfig,
) -> Result<ChordImages, OutputError> {
    let keyboard = KeyboardLayout::with_octaves(config.chord_keyboard_octaves);
    let roll = PianoRollLayout {
        octaves: config.piano_roll_octaves,
        ..PianoRollLayout::default()
    };
    let notes = chord.notes();
    let colours = chord.colour_map();
    let images = ChordImages {
        keyboard: chord_file_name(chord, "keyboard"),
        piano_roll: chord_file_name(chord, "pianoroll"),
        keyboard_coloured: chord_file_name(chord, "keyboard-coloured"),
        piano_roll_coloured: chord_file_name(chord, "pianoroll-coloured"),
    };
    render_keyboard(dir, &images.keyboard, &notes, None, &keyboard)?;
    render_piano_roll(dir, &images.piano_roll, &notes, None, &roll)?;
    render_keyboard(dir, &images.keyboard_coloured, &notes, Some(&colours), &keyboard)?;
    render_piano_roll(dir, &images.piano_roll_coloured, &notes, Some(&colours), &roll)?;
    Ok(images)
}

/// Four diagrams per chord plus `chords.tsv` (and `chords.html`). Rows run
/// root by root, inversion by inversion, every quality within an inversion.
pub fn generate_chords(config: &GeneratorConfig) -> Result<GenerationSummary, OutputError> {
    let lookup = load_lookup(config.chord_lookup.as_deref(), &CHORD_FIELDS)?;
    let builder = ChordBuilder::new(config.chord_options());
    let dir = config.output_dir.join(CHORD_DIR);
    let roots = config.roots();
    let mut report = Report::chords();
    let mut summary = GenerationSummary::default();

    for spec in ChordSpec::all().into_iter().filter(|spec| roots.contains(&spec.root)) {
        let Some(chord) = builder.build(spec, config.base_octave)? else {
            summary.skipped += 1;
            continue;
        };
        let images = render_chord(&chord, &dir, config)?;
        summary.artifacts += 4;
        let syllables = chord.syllables();
        let mnemonic = lookup.field(&syllables, "Mnemonic").unwrap_or_default();
        report.push_chord(&chord, mnemonic, &images);
    }

    let (path, written) = write_reports(&report, config, "chords", Some(CHORD_DIR))?;
    summary.artifacts += written;
    summary.report = path;
    log::info!(
        "Generated {} chords ({} artifacts, {} skipped)",
        report.len(),
        summary.artifacts,
        summary.skipped
    );
    Ok(summary)
}

/// Two keyboards per mode and direction plus `modes.tsv` (and `modes.html`)
pub fn generate_modes(config: &GeneratorConfig) -> Result<GenerationSummary, OutputError> {
    let lookup = load_lookup(config.mode_lookup.as_deref(), &MODE_FIELDS)?;
    let layout = KeyboardLayout::with_octaves(config.scale_keyboard_octaves);
    let dir = config.output_dir.join(SCALE_DIR);
    let mut report = Report::modes();
    let mut summary = GenerationSummary::default();

    for root in config.roots() {
        for mode in Mode::ALL {
            for direction in Direction::ALL {
                let scale = build_mode(root, mode, direction, config.scale_base_octave)?;
                let notes = scale.notes();
                let colours = match config.scale_palette {
                    ScalePalette::Interval => scale.colour_map(),
                    ScalePalette::Direction => scale.direction_colour_map(),
                };
                let images = ModeImages {
                    keyboard: scale_file_name(mode, direction, root, false),
                    keyboard_plain: scale_file_name(mode, direction, root, true),
                };
                render_keyboard(&dir, &images.keyboard, &notes, Some(&colours), &layout)?;
                render_keyboard(&dir, &images.keyboard_plain, &notes, None, &layout)?;
                summary.artifacts += 2;

                let song = lookup
                    .field(&scale.spec.to_string(), "SongToPractice")
                    .or_else(|| lookup.field(&scale.spec.label(), "SongToPractice"))
                    .unwrap_or_default();
                report.push_mode(&scale, song, &images);
            }
        }
    }

    let (path, written) = write_reports(&report, config, "modes", Some(SCALE_DIR))?;
    summary.artifacts += written;
    summary.report = path;
    log::info!("Generated {} scales ({} artifacts)", report.len(), summary.artifacts);
    Ok(summary)
}

/// `intervals.tsv` (and `intervals.html`) with both mnemonics per root and class
pub fn generate_intervals(config: &GeneratorConfig) -> Result<GenerationSummary, OutputError> {
    let roots = config.roots();
    let mut report = Report::intervals();
    for name in interval_table(&config.interval_options())
        .iter()
        .filter(|name| roots.contains(&name.root))
    {
        report.push_interval(name);
    }

    let (path, artifacts) = write_reports(&report, config, "intervals", None)?;
    log::info!("Generated {} interval rows", report.len());
    Ok(GenerationSummary {
        artifacts,
        skipped: 0,
        report: path,
    })
}
