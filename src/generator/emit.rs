//! Rendering and writing of the generated files
//!
//! Every output is rendered to a string first. [`write_all`] then stages
//! each file next to its target and renames the staged files into place
//! only after all of them were written, so a failed write leaves the
//! existing files untouched.

use super::record::{KernRecord, MetricRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const FONTS_GEN_FILE: &str = "fonts_gen.rs";
pub const KERNS_GEN_FILE: &str = "kerns_gen.rs";
pub const METRICS_JSON_FILE: &str = "metrics-dejavu-sans.json";
pub const KERNS_JSON_FILE: &str = "kerns-dejavu-sans.json";

const HEADER: &str =
    "// Autogenerated by mtex from embedded DejaVu Sans measurements. DO NOT EDIT.\n\n";

/// One file the generator produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub path: PathBuf,
    pub contents: String,
}

/// Source of the static metrics table.
///
/// Strings and floats use their `Debug` form, which is a valid Rust literal
/// and the shortest text that reads back to the same value.
pub fn render_fonts_gen(records: &[MetricRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("use super::{glyph, GlyphEntry};\nuse crate::tex::Metrics;\n\n");
    out.push_str("pub(super) static GLYPHS: &[GlyphEntry] = &[\n");
    for r in records {
        let m = &r.metrics;
        let _ = writeln!(
            out,
            "    glyph({:?}, {}, {:?}, {:?}, {:?}, Metrics::new({:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {})),",
            r.symbol,
            r.math,
            r.font_name,
            r.size,
            r.font_type,
            m.advance,
            m.height,
            m.width,
            m.xmin,
            m.xmax,
            m.ymin,
            m.ymax,
            m.iceberg,
            m.slanted,
        );
    }
    out.push_str("];\n");
    out
}

/// Source of the static kerning table.
pub fn render_kerns_gen(records: &[KernRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("use super::{kern, KernEntry};\n\n");
    out.push_str("pub(super) static KERNS: &[KernEntry] = &[\n");
    for r in records {
        let _ = writeln!(
            out,
            "    kern({:?}, {:?}, {:?}, {:?}, {:?}, {:?}),",
            r.font_name, r.size, r.font_type, r.sym1, r.sym2, r.kern,
        );
    }
    out.push_str("];\n");
    out
}

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize records")?;
    json.push('\n');
    Ok(json)
}

/// Reads interchange records written by an earlier run.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Writes every output. Nothing is renamed into place until every file
/// has been staged.
pub fn write_all(outputs: &[Output]) -> Result<()> {
    let mut staged = Vec::with_capacity(outputs.len());
    for output in outputs {
        staged.push(stage(output)?);
    }

    for (file, output) in staged.into_iter().zip(outputs) {
        file.persist(&output.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", output.path.display()))?;
        info!("Wrote {}", output.path.display());
    }
    Ok(())
}

fn stage(output: &Output) -> Result<NamedTempFile> {
    let parent = match output.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create {}", parent.display()))?;

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to stage {}", output.path.display()))?;
    file.write_all(output.contents.as_bytes())
        .with_context(|| format!("Failed to write {}", output.path.display()))?;
    if let Ok(existing) = fs::metadata(&output.path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", output.path.display()))?;
    }
    debug!("Staged {}", output.path.display());
    Ok(file)
}

/// Paths of the outputs whose file on disk differs from what was rendered.
pub fn stale(outputs: &[Output]) -> Vec<PathBuf> {
    outputs
        .iter()
        .filter(|output| {
            fs::read_to_string(&output.path)
                .map(|existing| existing != output.contents)
                .unwrap_or(true)
        })
        .map(|output| output.path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::Metrics;

    fn metric_record() -> MetricRecord {
        MetricRecord {
            font_name: "default".into(),
            font_type: "rm".into(),
            math: false,
            size: 12.0,
            symbol: "A".into(),
            metrics: Metrics::new(
                8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false,
            ),
        }
    }

    #[test]
    fn test_fonts_gen_line_format() {
        let source = render_fonts_gen(&[metric_record()]);
        assert!(source.starts_with("// Autogenerated by mtex"));
        assert!(source.contains(
            "    glyph(\"A\", false, \"default\", 12.0, \"rm\", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),\n"
        ));
        assert!(source.ends_with("];\n"));
    }

    #[test]
    fn test_kerns_gen_escapes_control_words() {
        let record = KernRecord {
            font_name: "it".into(),
            font_type: "it".into(),
            size: 12.0,
            sym1: "\\sum".into(),
            sym2: "é".into(),
            kern: -1.0,
        };
        let source = render_kerns_gen(&[record]);
        assert!(source.contains("    kern(\"it\", 12.0, \"it\", \"\\\\sum\", \"é\", -1.0),\n"));
    }

    #[test]
    fn test_json_field_order() {
        let json = render_json(&[metric_record()]).unwrap();
        let font_name = json.find("\"font_name\"").unwrap();
        let symbol = json.find("\"symbol\"").unwrap();
        let slanted = json.find("\"slanted\"").unwrap();
        assert!(font_name < symbol && symbol < slanted);
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn test_write_and_check() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = vec![Output {
            path: dir.path().join("nested").join(KERNS_GEN_FILE),
            contents: render_kerns_gen(&[]),
        }];
        assert_eq!(stale(&outputs), vec![outputs[0].path.clone()]);

        write_all(&outputs).unwrap();
        assert!(stale(&outputs).is_empty());

        fs::write(&outputs[0].path, "changed").unwrap();
        assert_eq!(stale(&outputs).len(), 1);
    }

    #[test]
    fn test_failed_write_leaves_targets_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join(FONTS_GEN_FILE);
        fs::write(&first, "old").unwrap();
        // A file where a directory is needed makes the second output fail.
        fs::write(dir.path().join("blocker"), "").unwrap();

        let outputs = vec![
            Output {
                path: first.clone(),
                contents: "new".into(),
            },
            Output {
                path: dir.path().join("blocker").join(KERNS_GEN_FILE),
                contents: render_kerns_gen(&[]),
            },
        ];
        assert!(write_all(&outputs).is_err());
        assert_eq!(fs::read_to_string(&first).unwrap(), "old");

        let mut left: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        left.sort();
        assert_eq!(left, ["blocker", FONTS_GEN_FILE]);
    }
}
