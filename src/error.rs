//! Error types for note-set construction and artifact output
//!
//! `TheoryError` covers the pure builders (bad letters, unknown qualities,
//! mismatched intervals). `OutputError` covers the sinks that write images,
//! tables and config files, and wraps `TheoryError` for the batch driver.

use thiserror::Error;

/// Errors raised while resolving notes, chords, modes and intervals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Symbol is not one of the 12 alphabet letters
    #[error("Invalid letter: '{0}'. Expected one of: K, T, D, N, M, F, J, G, R, L, P, B")]
    InvalidLetter(String),

    /// Note string is not `{letter}{octave}`
    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    /// Octave outside the supported `-10..=10`
    #[error("Octave {0} is out of range; expected -10 to 10")]
    OctaveOutOfRange(i32),

    #[error("Unsupported chord quality: '{0}'")]
    UnsupportedQuality(String),

    #[error("Unsupported mode: '{0}'")]
    UnsupportedMode(String),

    #[error("Unsupported inversion: '{0}'")]
    UnsupportedInversion(String),

    #[error("Unsupported direction: '{0}'")]
    UnsupportedDirection(String),

    /// Interval code such as `-m3` or `A4` could not be read
    #[error("Invalid interval code: '{0}'")]
    InvalidIntervalCode(String),

    /// Quality does not support the requested inversion and the caller asked to fail
    #[error("{quality} chord on {root} does not support {inversion}")]
    InversionUnsupported {
        root: String,
        quality: String,
        inversion: String,
    },

    /// The second letter is not `semitones` above the root
    #[error("{other} is not {semitones} semitones from {root}")]
    IntervalMismatch {
        root: String,
        other: String,
        semitones: i32,
    },
}

/// Errors raised by renderers, lookup tables, reports and configuration
#[derive(Debug, Error)]
pub enum OutputError {
    /// A render call received no notes to draw
    #[error("Cannot render '{0}': note list is empty")]
    EmptyNoteSet(String),

    #[error(transparent)]
    Theory(#[from] TheoryError),

    /// Diagram window outside `1..=10` octaves
    #[error("Diagram window of {0} octaves is out of range; expected 1 to 10")]
    WindowOutOfRange(i32),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Table error on '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),
}

impl OutputError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        OutputError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: impl AsRef<std::path::Path>, source: csv::Error) -> Self {
        OutputError::Csv {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = TheoryError::InvalidLetter("X".to_string());
        assert!(err.to_string().contains("'X'"));

        let err = TheoryError::InversionUnsupported {
            root: "K".to_string(),
            quality: "augmented".to_string(),
            inversion: "second inversion".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "augmented chord on K does not support second inversion"
        );
    }

    #[test]
    fn test_theory_error_converts() {
        let err: OutputError = TheoryError::UnsupportedMode("ionianx".to_string()).into();
        assert!(matches!(err, OutputError::Theory(_)));
        assert_eq!(err.to_string(), "Unsupported mode: 'ionianx'");
    }
}
