//! End-to-end scenarios across backends, tables and the generator

#[cfg(test)]
mod backend_scenarios {
    use crate::fakebackend::FakeBackend;
    use crate::fonts::collection::{dejavu_serif_collection, Style, Weight};
    use crate::generator::emit;
    use crate::generator::record::{KernRecord, MetricRecord};
    use crate::tex::{Backend, Font};
    use std::path::PathBuf;

    fn testdata(file: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(file)
    }

    #[test]
    fn test_extended_symbols_are_served() {
        let backend = FakeBackend::new();
        let font = Font::new("default", 10.0, "regular");
        let m = backend.metrics("\\varnothing", &font, 72.0, true).unwrap();
        assert_eq!(m.advance, 8.7109375);
        assert_eq!((m.xmin, m.xmax), (0.75, 7.953125));

        for symbol in ["\\leftharpoondown", "\\oiint", "\\twoheadrightarrow", "\\hbar"] {
            for font in [&font, &Font::new("it", 12.0, "it")] {
                assert!(backend.metrics(symbol, font, 72.0, false).is_ok(), "{symbol}");
            }
        }
        // No DejaVu Sans glyph, so not part of the table.
        assert!(backend.metrics("\\amalg", &font, 72.0, true).is_err());
    }

    #[test]
    fn test_metrics_match_recorded_oracle_output() {
        let records: Vec<MetricRecord> =
            emit::read_json(&testdata(emit::METRICS_JSON_FILE)).unwrap();
        let record = records
            .iter()
            .find(|r| {
                r.symbol == "A"
                    && !r.math
                    && r.font_name == "default"
                    && r.font_type == "rm"
                    && r.size == 12.0
            })
            .expect("A in default/rm at 12pt is recorded");

        let backend = FakeBackend::new();
        let font = Font::new("default", 12.0, "rm");
        let m = backend.metrics("A", &font, 72.0, false).unwrap();
        assert_eq!(m, record.metrics);
        assert_eq!(m.advance, 8.208984375);
        assert_eq!((m.xmin, m.xmax), (0.09375, 8.109375));
        assert_eq!((m.ymin, m.ymax, m.iceberg), (0.0, 8.75, 8.75));
    }

    #[test]
    fn test_kerning_recorded_in_both_directions() {
        let records: Vec<KernRecord> = emit::read_json(&testdata(emit::KERNS_JSON_FILE)).unwrap();
        let backend = FakeBackend::new();

        for r in records.iter().filter(|r| r.sym1 == "A" && r.sym2 == "V") {
            let font = r.font();
            let forward = backend.kern(&font, "A", &font, "V", 72.0).unwrap();
            let backward = backend.kern(&font, "V", &font, "A", 72.0).unwrap();
            assert_eq!(forward, r.kern);
            assert!(records
                .iter()
                .any(|o| o.font() == font && o.sym1 == "V" && o.sym2 == "A" && o.kern == backward));
        }
    }

    #[test]
    fn test_serif_collection_has_four_styles() {
        let coll = dejavu_serif_collection().unwrap();
        assert_eq!(coll.len(), 4);
        assert!(coll.iter().all(|f| f.font.typeface == "DejaVuSerif"));
        assert!(coll
            .iter()
            .any(|f| f.font.weight == Weight::Bold && f.font.style == Style::Italic));
    }

    #[test]
    fn test_underline_thickness_for_every_table_font() {
        let backend = FakeBackend::new();
        let fonts: Vec<Font> = backend.database().fonts().cloned().collect();
        assert!(!fonts.is_empty());
        for font in fonts {
            assert!(backend.underline_thickness(&font, 72.0).unwrap() > 0.0);
        }
    }
}

#[cfg(test)]
mod table_tests {
    use crate::fakebackend::{glyph_entries, kern_entries, Database, FakeBackend};
    use crate::fonts::Fonts;
    use crate::generator::{self, plan::Plan};
    use crate::tex::Backend;
    use crate::ttf::{Canvas, FontBackend};
    use std::path::PathBuf;

    #[test]
    fn test_every_entry_is_well_formed() {
        for entry in glyph_entries() {
            assert!(entry.metrics.is_finite(), "{}", entry.symbol);
            assert!(entry.metrics.has_valid_ink_box(), "{}", entry.symbol);
            assert!(entry.metrics.advance >= 0.0, "{}", entry.symbol);
        }
        assert!(kern_entries().iter().all(|k| k.kern.is_finite()));
    }

    #[test]
    fn test_table_covers_the_plan() {
        let plan = Plan::dejavu_sans();
        let db = Database::builtin();
        assert_eq!(db.metrics_len(), plan.metric_keys().len());
        assert_eq!(db.kerns_len(), plan.kern_keys().len());
        assert!(plan.metric_keys().iter().all(|k| db.metrics(k).is_some()));
        assert!(plan.kern_keys().iter().all(|k| db.kern(k).is_some()));
    }

    #[test]
    fn test_json_records_match_compiled_table() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata");
        let records = generator::load_testdata(&Plan::dejavu_sans(), &dir).unwrap();
        let from_json = Database::from_records(&records.metrics, &records.kerns).unwrap();

        let builtin = Database::builtin();
        for r in &records.metrics {
            assert_eq!(builtin.metrics(&r.key()), Some(r.metrics), "{:?}", r.key());
        }
        for r in &records.kerns {
            assert_eq!(builtin.kern(&r.key()), Some(r.kern), "{:?}", r.key());
        }
        assert_eq!(from_json.metrics_len(), builtin.metrics_len());
    }

    #[test]
    fn test_fake_backend_agrees_with_font_backend() {
        let real = FontBackend::new(Fonts::dejavu_sans().unwrap(), Canvas::new());
        let fake = FakeBackend::new();
        let plan = Plan::dejavu_sans();

        for key in plan.metric_keys().iter().step_by(7) {
            assert_eq!(
                real.metrics(&key.symbol, &key.font, 72.0, key.math).unwrap(),
                fake.metrics(&key.symbol, &key.font, 72.0, key.math).unwrap(),
                "{key:?}"
            );
        }
        for key in plan.kern_keys() {
            assert_eq!(
                real.kern(&key.font, &key.sym1, &key.font, &key.sym2, 72.0).unwrap(),
                fake.kern(&key.font, &key.sym1, &key.font, &key.sym2, 72.0).unwrap(),
                "{key:?}"
            );
        }
    }
}

#[cfg(test)]
mod generator_tests {
    use crate::core::cli::{CliArgs, OracleKind, Settings};
    use crate::core::generate;
    use crate::generator::emit;
    use crate::generator::plan::Plan;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;

    fn committed() -> Settings {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let mut settings = CliArgs::parse_from(["mtex", "--check"]).settings(None);
        settings.out_dir = root.join("src").join("fakebackend");
        settings.testdata_dir = root.join("testdata");
        settings
    }

    #[test]
    fn test_committed_tables_are_up_to_date() {
        let checked = generate(&Plan::dejavu_sans(), &committed()).unwrap();
        assert_eq!(checked.len(), 4);
    }

    #[test]
    fn test_from_json_reproduces_committed_tables() {
        let mut settings = committed();
        settings.from_json = true;
        let checked = generate(&Plan::dejavu_sans(), &settings).unwrap();
        assert_eq!(checked.len(), 2);
    }

    #[test]
    fn test_check_mode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = committed();
        settings.out_dir = dir.path().join("out");
        settings.write_testdata = false;

        let err = generate(&Plan::dejavu_sans(), &settings).unwrap_err();
        assert!(err.to_string().contains("out of date"));
        assert!(!settings.out_dir.exists());
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = committed();
        settings.check = false;
        settings.out_dir = dir.path().join("out");
        settings.testdata_dir = dir.path().join("testdata");

        let written = generate(&Plan::dejavu_sans(), &settings).unwrap();
        let first: Vec<String> = written
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        generate(&Plan::dejavu_sans(), &settings).unwrap();
        let second: Vec<String> = written
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(first, second);

        let committed_fonts = committed().out_dir.join(emit::FONTS_GEN_FILE);
        assert_eq!(first[0], fs::read_to_string(committed_fonts).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_oracle_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = committed();
        settings.check = false;
        settings.oracle = OracleKind::Matplotlib;
        settings.out_dir = dir.path().join("out");
        settings.testdata_dir = dir.path().join("testdata");

        for python in ["false", "true"] {
            settings.python = python.to_string();
            let err = generate(&Plan::dejavu_sans(), &settings).unwrap_err();
            assert!(format!("{err:#}").contains("matplotlib"));
            assert!(!settings.out_dir.exists());
            assert!(!settings.testdata_dir.exists());
        }
    }
}
