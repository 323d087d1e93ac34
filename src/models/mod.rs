//! Models for the syllable note-set generator
//!
//! This module contains the pitch alphabet, colours, interval classes,
//! chord qualities and modes shared by the builders and renderers.

pub mod chord;
pub mod colour;
pub mod interval;
pub mod mode;
pub mod pitch;

// Re-export commonly used types
pub use chord::{ChordQuality, ChordSpec, Inversion, QualityProfile, ToneKind, ToneRole};
pub use colour::Colour;
pub use interval::{IntervalClass, IntervalCode, IntervalQuality};
pub use mode::{Direction, Mode, ModeSpec};
pub use pitch::{KeyColour, Letter, Note};
