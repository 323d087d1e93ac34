/// Properties of mode traversals and interval mnemonics
///
/// Up walks from the tonic to the octave above, Down from the tonic to the
/// octave below; both visit the same seven pitch classes.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use syllable_keys::models::mode::{MODE_TABLE_LEN, TONIC_POSITION};
    use syllable_keys::models::{Direction, IntervalClass, Letter, Mode, Note};
    use syllable_keys::theory::{
        build_mode, interval_table, name_interval, IntervalTableOptions,
    };

    #[test]
    fn test_tables_have_tonic_at_midpoint() {
        for mode in Mode::ALL {
            let table = mode.intervals();
            assert_eq!(table.len(), MODE_TABLE_LEN);
            assert!(table[TONIC_POSITION].is_unison());
            assert!(table[0].is_octave() && table[0].descending);
            let top = table[MODE_TABLE_LEN - 1];
            assert!(top.is_octave() && !top.descending);
        }
    }

    #[test]
    fn test_traversals_span_one_octave() {
        for root in Letter::ALL {
            for mode in Mode::ALL {
                let tonic = Note::new(root, 1).index();
                let indices = |direction| -> Vec<i32> {
                    let scale = build_mode(root, mode, direction, 1).unwrap();
                    scale.notes().iter().map(|n| n.index()).collect()
                };
                let up = indices(Direction::Up);
                let down = indices(Direction::Down);

                assert!(up.windows(2).all(|w| w[0] < w[1]));
                assert!(down.windows(2).all(|w| w[0] > w[1]));
                assert_eq!((up[0], up[7]), (tonic, tonic + 12));
                assert_eq!((down[0], down[7]), (tonic, tonic - 12));
            }
        }
    }

    #[test]
    fn test_both_directions_share_pitch_classes() {
        for mode in Mode::ALL {
            let classes = |direction| -> BTreeSet<Letter> {
                build_mode(Letter::N, mode, direction, 1)
                    .unwrap()
                    .notes()
                    .iter()
                    .map(|n| n.letter)
                    .collect()
            };
            assert_eq!(classes(Direction::Up), classes(Direction::Down), "{}", mode);
            assert_eq!(classes(Direction::Up).len(), 7);
        }
    }

    #[test]
    fn test_dorian_syllables() {
        let up = build_mode(Letter::D, Mode::Dorian, Direction::Up, 1).unwrap();
        assert_eq!(up.syllable_chunks(), vec!["DuMaFiGu", "LuBaKiDuu"]);
    }

    #[test]
    fn test_interval_table_is_consistent_with_namer() {
        for row in interval_table(&IntervalTableOptions::default()) {
            let named = name_interval(row.root, row.other, row.class.semitones()).unwrap();
            assert_eq!(named, row);
            assert_ne!(row.class, IntervalClass::P1);
        }
    }
}
