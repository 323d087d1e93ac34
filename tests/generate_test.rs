/// End-to-end batches into a temporary output directory

#[cfg(test)]
mod tests {
    use std::fs;
    use syllable_keys::config::GeneratorConfig;
    use syllable_keys::generate::{
        generate_chords, generate_intervals, generate_modes, CHORD_DIR, SCALE_DIR,
    };
    use syllable_keys::models::Letter;
    use syllable_keys::theory::InversionPolicy;

    fn image_sources(html: &str) -> Vec<&str> {
        html.split("src=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    fn config_in(dir: &std::path::Path) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.to_path_buf(),
            roots: Some(vec![Letter::K]),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_chord_batch() {
        let dir = tempfile::tempdir().unwrap();
        let lookup = dir.path().join("data.txt");
        fs::write(&lookup, "KuMaGu\tCool Mule Goo\n").unwrap();
        let config = GeneratorConfig {
            chord_lookup: Some(lookup),
            ..config_in(dir.path())
        };

        let summary = generate_chords(&config).unwrap();
        // 12 chords x 4 diagrams, plus the TSV and HTML reports
        assert_eq!(summary.artifacts, 12 * 4 + 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(fs::read_dir(dir.path().join(CHORD_DIR)).unwrap().count(), 48);
        let coloured = "K-KuMaGu-major-root-keyboard-coloured.svg";
        assert!(dir.path().join(CHORD_DIR).join(coloured).exists());

        let report = fs::read_to_string(&summary.report).unwrap();
        assert_eq!(report.lines().count(), 13);
        assert!(report
            .lines()
            .any(|line| line.starts_with("KuMaGu\tCool Mule Goo\t<img src=")));
        assert!(dir.path().join("chords.html").exists());
    }

    #[test]
    fn test_chord_batch_with_skip_policy() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            unsupported_inversion: InversionPolicy::Skip,
            html: false,
            ..config_in(dir.path())
        };
        let summary = generate_chords(&config).unwrap();
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.artifacts, 10 * 4 + 1);
    }

    #[test]
    fn test_mode_batch() {
        let dir = tempfile::tempdir().unwrap();
        let lookup = dir.path().join("modes.txt");
        fs::write(&lookup, "K Dorian up\t\tScarborough Fair\n").unwrap();
        let config = GeneratorConfig {
            mode_lookup: Some(lookup),
            ..config_in(dir.path())
        };

        let summary = generate_modes(&config).unwrap();
        assert_eq!(summary.artifacts, 7 * 2 * 2 + 2);
        assert!(dir.path().join(SCALE_DIR).join("scales-Dorian-up-K.svg").exists());
        assert!(dir.path().join(SCALE_DIR).join("scales-Dorian-up-K-plain.svg").exists());

        let report = fs::read_to_string(&summary.report).unwrap();
        let dorian = report.lines().find(|line| line.starts_with("K Dorian up\t")).unwrap();
        assert!(dorian.contains("\tScarborough Fair\tKuDaNiFu GuLaPiKuu\t"));
    }

    #[test]
    fn test_interval_batch() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            roots: None,
            html: false,
            ..config_in(dir.path())
        };
        let summary = generate_intervals(&config).unwrap();
        assert_eq!(summary.artifacts, 1);
        let report = fs::read_to_string(&summary.report).unwrap();
        assert_eq!(report.lines().count(), 1 + 12 * 11);
        assert!(report.contains("KuMa\tMuKo\tM3\tG\n"));
    }

    #[test]
    fn test_chord_rows_run_inversion_by_inversion() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            html: false,
            ..config_in(dir.path())
        };
        let summary = generate_chords(&config).unwrap();
        let report = fs::read_to_string(&summary.report).unwrap();
        let labels: Vec<&str> = report
            .lines()
            .skip(1)
            .filter_map(|line| line.split('\t').nth(4))
            .collect();
        assert_eq!(
            &labels[..5],
            [
                "major root",
                "minor root",
                "augmented root",
                "diminished root",
                "major first inversion",
            ]
        );
        assert_eq!(labels[11], "diminished second inversion");
    }

    #[test]
    fn test_html_images_resolve_from_the_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        generate_chords(&config).unwrap();
        generate_modes(&config).unwrap();

        for (page, expected) in [("chords.html", 12 * 4), ("modes.html", 7 * 2 * 2)] {
            let html = fs::read_to_string(dir.path().join(page)).unwrap();
            let sources = image_sources(&html);
            assert_eq!(sources.len(), expected, "{}", page);
            for src in sources {
                assert!(dir.path().join(src).is_file(), "{} -> {}", page, src);
            }
        }

        // The TSV keeps bare names for flash-card import
        let tsv = fs::read_to_string(dir.path().join("modes.tsv")).unwrap();
        assert!(tsv.contains("<img src=\"scales-Dorian-up-K.svg\">"));
    }

    #[test]
    fn test_mode_lookup_falls_back_to_mode_and_direction() {
        let dir = tempfile::tempdir().unwrap();
        let lookup = dir.path().join("modes.txt");
        fs::write(
            &lookup,
            "Dorian up\t\tSo What\nG Dorian up\t\tScarborough Fair\n",
        )
        .unwrap();
        let config = GeneratorConfig {
            mode_lookup: Some(lookup),
            roots: Some(vec![Letter::K, Letter::G]),
            html: false,
            ..config_in(dir.path())
        };

        let summary = generate_modes(&config).unwrap();
        let report = fs::read_to_string(&summary.report).unwrap();
        let song = |key: &str| -> String {
            let row = report.lines().find(|line| line.starts_with(key)).unwrap();
            row.split('\t').nth(2).unwrap().to_string()
        };
        assert_eq!(song("K Dorian up\t"), "So What");
        assert_eq!(song("G Dorian up\t"), "Scarborough Fair");
        assert_eq!(song("K Dorian down\t"), "");
    }
}
