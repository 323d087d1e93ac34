/// Rendering resolved chords and scales to SVG files

#[cfg(test)]
mod tests {
    use syllable_keys::models::{ChordQuality, Direction, Inversion, Letter, Mode};
    use syllable_keys::renderers::{
        render_keyboard, render_piano_roll, KeyboardLayout, PianoRollLayout,
    };
    use syllable_keys::theory::{build_chord, build_mode};
    use syllable_keys::OutputError;

    #[test]
    fn test_coloured_chord_keyboard() {
        let dir = tempfile::tempdir().unwrap();
        let chord = build_chord(Letter::K, ChordQuality::Minor, Inversion::Root, 0).unwrap();
        let path = render_keyboard(
            &dir.path().join("chords"),
            "k-minor.svg",
            &chord.notes(),
            Some(&chord.colour_map()),
            &KeyboardLayout::default(),
        )
        .unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        // Root in light yellow, minor third in light blue, fifth in light yellow
        assert_eq!(svg.matches(r##"fill="#ffffe0""##).count(), 2);
        assert_eq!(svg.matches(r##"fill="#add8e6""##).count(), 1);
    }

    #[test]
    fn test_scale_keyboard_highlights_eight_keys() {
        let dir = tempfile::tempdir().unwrap();
        let scale = build_mode(Letter::K, Mode::Ionian, Direction::Up, 1).unwrap();
        let path = render_keyboard(
            dir.path(),
            "ionian.svg",
            &scale.notes(),
            None,
            &KeyboardLayout::with_octaves(3),
        )
        .unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert_eq!(svg.matches(r##"fill="#f08080""##).count(), 8);
    }

    #[test]
    fn test_piano_roll_one_bar_per_note() {
        let dir = tempfile::tempdir().unwrap();
        let chord =
            build_chord(Letter::B, ChordQuality::Diminished, Inversion::Second, 0).unwrap();
        let layout = PianoRollLayout::default();
        let path =
            render_piano_roll(dir.path(), "roll.svg", &chord.notes(), None, &layout).unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert_eq!(svg.matches(r##"fill="#ffc0cb""##).count(), 3);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let layout = KeyboardLayout::default();
        let err = render_keyboard(dir.path(), "none.svg", &[], None, &layout).unwrap_err();
        assert!(matches!(err, OutputError::EmptyNoteSet(ref name) if name == "none.svg"));
    }
}
