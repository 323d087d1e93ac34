/// Properties of resolved triads across the whole root x quality x inversion grid
///
/// - every chord holds exactly the root, third and fifth pitch classes,
/// - notes are bass-first and strictly rising,
/// - the lowest note always sits in the base octave,
/// - inversions reuse the same letters and put the right member in the bass.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use syllable_keys::models::{ChordQuality, ChordSpec, Inversion, Letter, ToneRole};
    use syllable_keys::theory::{build_chord, ChordBuilder, ChordOptions, InversionPolicy};

    fn expected_classes(root: Letter, quality: ChordQuality) -> BTreeSet<Letter> {
        [0, quality.third_interval(), quality.fifth_interval()]
            .iter()
            .map(|offset| Letter::from_index(root.index() + offset))
            .collect()
    }

    #[test]
    fn test_pitch_classes_for_every_chord() {
        for spec in ChordSpec::all() {
            let chord = build_chord(spec.root, spec.quality, spec.inversion, 0).unwrap();
            assert_eq!(
                chord.pitch_classes(),
                expected_classes(spec.root, spec.quality),
                "{}",
                spec
            );
        }
    }

    #[test]
    fn test_notes_rise_from_the_base_octave() {
        for base_octave in [0, 2] {
            for spec in ChordSpec::all() {
                let chord =
                    build_chord(spec.root, spec.quality, spec.inversion, base_octave).unwrap();
                let indices: Vec<i32> = chord.notes().iter().map(|n| n.index()).collect();
                assert!(indices.windows(2).all(|w| w[0] < w[1]), "{} {:?}", spec, indices);
                let lowest = indices[0] - base_octave * 12;
                assert!((0..12).contains(&lowest), "{} lowest {}", spec, lowest);
            }
        }
    }

    #[test]
    fn test_bass_member_follows_inversion() {
        for spec in ChordSpec::all() {
            let chord = build_chord(spec.root, spec.quality, spec.inversion, 0).unwrap();
            let expected = match spec.inversion {
                Inversion::Root => ToneRole::Root,
                Inversion::First => ToneRole::Third,
                Inversion::Second => ToneRole::Fifth,
            };
            assert_eq!(chord.tones[0].role, expected, "{}", spec);
        }
    }

    #[test]
    fn test_root_syllable_is_always_u() {
        for spec in ChordSpec::all() {
            let chord = build_chord(spec.root, spec.quality, spec.inversion, 0).unwrap();
            let root = chord.tones.iter().find(|t| t.role == ToneRole::Root).unwrap();
            assert_eq!(root.syllable.as_deref(), Some("u"), "{}", spec);
        }
    }

    #[test]
    fn test_worked_examples() {
        let names = |root, quality, inversion| -> Vec<String> {
            build_chord(root, quality, inversion, 0)
                .unwrap()
                .notes()
                .iter()
                .map(|n| n.to_string())
                .collect()
        };
        assert_eq!(names(Letter::K, ChordQuality::Major, Inversion::Root), ["K0", "M0", "G0"]);
        assert_eq!(names(Letter::K, ChordQuality::Minor, Inversion::Root), ["K0", "N0", "G0"]);
        assert_eq!(names(Letter::K, ChordQuality::Major, Inversion::First), ["M0", "G0", "K1"]);
        assert_eq!(names(Letter::K, ChordQuality::Major, Inversion::Second), ["G0", "K1", "M1"]);
    }

    #[test]
    fn test_skip_policy_drops_augmented_inversions() {
        let builder = ChordBuilder::new(ChordOptions {
            unsupported_inversion: InversionPolicy::Skip,
            ..ChordOptions::default()
        });
        let mut skipped = 0;
        for spec in ChordSpec::all() {
            match builder.build(spec, 0).unwrap() {
                Some(_) => {}
                None => {
                    assert_eq!(spec.quality, ChordQuality::Augmented);
                    assert_ne!(spec.inversion, Inversion::Root);
                    skipped += 1;
                }
            }
        }
        assert_eq!(skipped, 24);
    }

    #[test]
    fn test_fail_policy_names_the_chord() {
        let builder = ChordBuilder::new(ChordOptions {
            unsupported_inversion: InversionPolicy::Fail,
            ..ChordOptions::default()
        });
        let spec = ChordSpec::new(Letter::D, ChordQuality::Augmented, Inversion::First);
        let err = builder.build(spec, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "augmented chord on D does not support first inversion"
        );
    }
}
