//! Note-set builders
//!
//! Pure functions from (root, quality/mode, inversion/direction) to resolved
//! notes with syllables and colours. Nothing here touches the filesystem.

pub mod chord_builder;
pub mod interval_namer;
pub mod mode_builder;

pub use chord_builder::{
    build_chord, ChordBuilder, ChordOptions, ChordTone, InversionPolicy, NoteOrder, ResolvedChord,
};
pub use interval_namer::{
    interval_table, name_interval, name_interval_between, IntervalName, IntervalTableOptions,
};
pub use mode_builder::{build_mode, ResolvedScale, ScaleTone};
