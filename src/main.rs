//! syllable-keys CLI binary

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

mod cli;
use cli::{Cli, Commands, ShowCommand};

use syllable_keys::config::GeneratorConfig;
use syllable_keys::generate::{
    generate_chords, generate_intervals, generate_modes, GenerationSummary,
};
use syllable_keys::models::ChordSpec;
use syllable_keys::theory::{build_mode, name_interval, ChordBuilder};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    cli.apply(&mut config);

    match &cli.command {
        Commands::Chords(cmd) => {
            cmd.apply(&mut config);
            info!("Generating chords into {}", config.output_dir.display());
            report(generate_chords(&config).context("Chord generation failed")?);
        }
        Commands::Modes(cmd) => {
            cmd.apply(&mut config);
            info!("Generating modes into {}", config.output_dir.display());
            report(generate_modes(&config).context("Mode generation failed")?);
        }
        Commands::Intervals(cmd) => {
            cmd.apply(&mut config);
            info!("Generating intervals into {}", config.output_dir.display());
            report(generate_intervals(&config).context("Interval generation failed")?);
        }
        Commands::All => {
            info!("Generating all batches into {}", config.output_dir.display());
            report(generate_chords(&config).context("Chord generation failed")?);
            report(generate_modes(&config).context("Mode generation failed")?);
            report(generate_intervals(&config).context("Interval generation failed")?);
        }
        Commands::Show(target) => show(target, &config)?,
    }
    Ok(())
}

fn report(summary: GenerationSummary) {
    println!(
        "{}: {} artifacts, {} skipped",
        summary.report.display(),
        summary.artifacts,
        summary.skipped
    );
}

fn show(target: &ShowCommand, config: &GeneratorConfig) -> Result<()> {
    let json = match *target {
        ShowCommand::Chord {
            root,
            quality,
            inversion,
            base_octave,
        } => {
            let spec = ChordSpec::new(root, quality, inversion);
            match ChordBuilder::new(config.chord_options()).build(spec, base_octave)? {
                Some(chord) => serde_json::to_string_pretty(&chord)?,
                None => {
                    println!("{} skipped: inversion not supported", spec);
                    return Ok(());
                }
            }
        }
        ShowCommand::Mode {
            root,
            mode,
            direction,
            base_octave,
        } => serde_json::to_string_pretty(&build_mode(root, mode, direction, base_octave)?)?,
        ShowCommand::Interval {
            root,
            other,
            semitones,
        } => serde_json::to_string_pretty(&name_interval(root, other, semitones)?)?,
    };
    println!("{}", json);
    Ok(())
}
