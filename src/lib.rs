//! Syllable note sets for ear training
//!
//! Builds triads, modes and two-note intervals over a 12-letter pitch
//! alphabet (`K T D N M F J G R L P B`), names every tone with a sung
//! syllable that encodes its interval from the root, and renders keyboard
//! and piano-roll diagrams plus tab-separated flash-card reports.
//!
//! ```
//! use syllable_keys::models::{ChordQuality, Inversion, Letter};
//! use syllable_keys::theory::build_chord;
//!
//! let chord = build_chord(Letter::K, ChordQuality::Major, Inversion::Root, 0).unwrap();
//! assert_eq!(chord.syllables(), "KuMaGu");
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod lookup;
pub mod models;
pub mod renderers;
pub mod theory;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{OutputError, TheoryError};
pub use models::{ChordQuality, ChordSpec, Direction, Inversion, Letter, Mode, ModeSpec, Note};
pub use theory::{build_chord, build_mode, name_interval, ResolvedChord, ResolvedScale};
