//! Two-note interval mnemonics
//!
//! The ascending mnemonic reads root-then-other: `{root}u{other}{up}`.
//! The descending one reads other-then-root: `{other}u{root}{down}`. For
//! example a major third from K to M gives `KuMa` and `MuKo`.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::interval::{IntervalClass, ROOT_SUFFIX};
use crate::models::pitch::{Letter, Note, KEYS_PER_OCTAVE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalName {
    pub root: Letter,
    pub other: Letter,
    pub class: IntervalClass,
    pub ascending: String,
    pub descending: String,
}

impl IntervalName {
    pub fn class_name(&self) -> &'static str {
        self.class.name()
    }

    pub fn sargam(&self) -> &'static str {
        self.class.sargam()
    }
}

/// Which classes the interval table emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalTableOptions {
    pub include_tritone: bool,
    pub include_octave: bool,
}

impl Default for IntervalTableOptions {
    fn default() -> Self {
        Self {
            include_tritone: true,
            include_octave: false,
        }
    }
}

fn mnemonics(root: Letter, other: Letter, class: IntervalClass) -> IntervalName {
    IntervalName {
        root,
        other,
        class,
        ascending: format!("{}{}{}{}", root, ROOT_SUFFIX, other, class.ascending_syllable()),
        descending: format!("{}{}{}{}", other, ROOT_SUFFIX, root, class.descending_syllable()),
    }
}

/// Name the interval from `root` up `semitones` to `other`.
///
/// `other` must be the letter `semitones` above `root`; a non-zero multiple
/// of 12 names an octave.
pub fn name_interval(
    root: Letter,
    other: Letter,
    semitones: i32,
) -> Result<IntervalName, TheoryError> {
    if Letter::from_index(root.index() + semitones) != other {
        return Err(TheoryError::IntervalMismatch {
            root: root.to_string(),
            other: other.to_string(),
            semitones,
        });
    }
    Ok(mnemonics(root, other, IntervalClass::from_semitones(semitones)))
}

/// Name the interval between two absolute notes, `a` taken as the root
pub fn name_interval_between(a: Note, b: Note) -> IntervalName {
    let semitones = b.index() - a.index();
    mnemonics(a.letter, b.letter, IntervalClass::from_semitones(semitones))
}

/// Every root against every non-unison class, root-major order
pub fn interval_table(options: &IntervalTableOptions) -> Vec<IntervalName> {
    let classes: Vec<IntervalClass> = IntervalClass::ALL
        .iter()
        .copied()
        .filter(|&class| class != IntervalClass::P1)
        .filter(|&class| options.include_tritone || class != IntervalClass::Tritone)
        .filter(|&class| options.include_octave || class != IntervalClass::Octave)
        .collect();

    Letter::ALL
        .iter()
        .flat_map(|&root| {
            classes.iter().map(move |&class| {
                let other = Letter::from_index(root.index() + class.semitones() % KEYS_PER_OCTAVE);
                mnemonics(root, other, class)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_third() {
        let name = name_interval(Letter::K, Letter::M, 4).unwrap();
        assert_eq!(name.ascending, "KuMa");
        assert_eq!(name.descending, "MuKo");
        assert_eq!(name.class_name(), "M3");
    }

    #[test]
    fn test_tritone_and_octave() {
        let tritone = name_interval(Letter::K, Letter::J, 6).unwrap();
        assert_eq!(tritone.ascending, "KuJya");
        assert_eq!(tritone.descending, "JuKyo");

        let octave = name_interval(Letter::D, Letter::D, 12).unwrap();
        assert_eq!(octave.class, IntervalClass::Octave);
        assert_eq!(octave.ascending, "DuDuu");

        let unison = name_interval(Letter::D, Letter::D, 0).unwrap();
        assert_eq!(unison.class, IntervalClass::P1);
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            name_interval(Letter::K, Letter::N, 4),
            Err(TheoryError::IntervalMismatch {
                root: "K".to_string(),
                other: "N".to_string(),
                semitones: 4,
            })
        );
    }

    #[test]
    fn test_reversed_direction_complements_class() {
        // K up to G is a fifth; G down to K is the same interval, G up to K a fourth
        let up = name_interval(Letter::K, Letter::G, 7).unwrap();
        let back = name_interval(Letter::G, Letter::K, -7).unwrap();
        assert_eq!(up.class, IntervalClass::P5);
        assert_eq!(back.class, IntervalClass::P4);
        assert_eq!(
            IntervalClass::from_semitones(7).semitones() + back.class.semitones(),
            12
        );
    }

    #[test]
    fn test_between_notes() {
        let name = name_interval_between("K0".parse().unwrap(), "K1".parse().unwrap());
        assert_eq!(name.class, IntervalClass::Octave);
        let name = name_interval_between("B0".parse().unwrap(), "T1".parse().unwrap());
        assert_eq!(name.class, IntervalClass::Maj2);
        assert_eq!(name.ascending, "BuTa");
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(interval_table(&IntervalTableOptions::default()).len(), 12 * 11);
        let no_tritone = IntervalTableOptions {
            include_tritone: false,
            include_octave: false,
        };
        let rows = interval_table(&no_tritone);
        assert_eq!(rows.len(), 12 * 10);
        assert!(rows.iter().all(|row| row.class != IntervalClass::Tritone));

        let with_octave = IntervalTableOptions {
            include_tritone: true,
            include_octave: true,
        };
        let rows = interval_table(&with_octave);
        assert_eq!(rows.len(), 12 * 12);
        assert!(rows
            .iter()
            .filter(|row| row.class == IntervalClass::Octave)
            .all(|row| row.root == row.other));
    }
}
