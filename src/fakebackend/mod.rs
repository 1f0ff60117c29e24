//! Deterministic [`Backend`] for tests
//!
//! Serves glyph metrics and kerning from a table generated offline by the
//! `mtex` binary, so that layout tests get the same numbers on every
//! machine without loading a font. Draw calls are recorded instead of
//! rendered.

mod fonts_gen;
mod kerns_gen;

use crate::generator::record::{KernRecord, MetricRecord};
use crate::tex::{
    default_underline_thickness, Backend, BackendError, Font, FontMetricKey, KernKey, Metrics,
};
use anyhow::{bail, Result};
use kurbo::Rect;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// One row of the generated metrics table.
pub struct GlyphEntry {
    pub symbol: &'static str,
    pub math: bool,
    pub font_name: &'static str,
    pub size: f64,
    pub font_type: &'static str,
    pub metrics: Metrics,
}

pub(crate) const fn glyph(
    symbol: &'static str,
    math: bool,
    font_name: &'static str,
    size: f64,
    font_type: &'static str,
    metrics: Metrics,
) -> GlyphEntry {
    GlyphEntry {
        symbol,
        math,
        font_name,
        size,
        font_type,
        metrics,
    }
}

/// One row of the generated kerning table.
pub struct KernEntry {
    pub font_name: &'static str,
    pub size: f64,
    pub font_type: &'static str,
    pub sym1: &'static str,
    pub sym2: &'static str,
    pub kern: f64,
}

pub(crate) const fn kern(
    font_name: &'static str,
    size: f64,
    font_type: &'static str,
    sym1: &'static str,
    sym2: &'static str,
    kern: f64,
) -> KernEntry {
    KernEntry {
        font_name,
        size,
        font_type,
        sym1,
        sym2,
        kern,
    }
}

/// Rows of the compiled-in metrics table, in generation order.
pub fn glyph_entries() -> &'static [GlyphEntry] {
    fonts_gen::GLYPHS
}

/// Rows of the compiled-in kerning table, in generation order.
pub fn kern_entries() -> &'static [KernEntry] {
    kerns_gen::KERNS
}

static BUILTIN: LazyLock<Database> = LazyLock::new(|| {
    let db = Database::from_entries(glyph_entries(), kern_entries());
    tracing::debug!(
        "Loaded {} glyph metrics and {} kerning pairs",
        db.metrics.len(),
        db.kerns.len()
    );
    db
});

/// Read-only metrics and kerning lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Database {
    metrics: HashMap<FontMetricKey, Metrics>,
    kerns: HashMap<KernKey, f64>,
    fonts: HashSet<Font>,
}

impl Database {
    /// The table compiled into the crate, built on first use.
    pub fn builtin() -> &'static Database {
        &BUILTIN
    }

    fn from_entries(glyphs: &[GlyphEntry], kerns: &[KernEntry]) -> Self {
        let mut db = Self::default();
        for entry in glyphs {
            let font = Font::new(entry.font_name, entry.size, entry.font_type);
            db.fonts.insert(font.clone());
            db.metrics
                .insert(FontMetricKey::new(entry.symbol, entry.math, font), entry.metrics);
        }
        for entry in kerns {
            let font = Font::new(entry.font_name, entry.size, entry.font_type);
            db.fonts.insert(font.clone());
            db.kerns
                .insert(KernKey::new(font, entry.sym1, entry.sym2), entry.kern);
        }
        db
    }

    /// Builds the tables from interchange records. A key present twice is
    /// an error.
    pub fn from_records(metrics: &[MetricRecord], kerns: &[KernRecord]) -> Result<Self> {
        let mut db = Self::default();
        for record in metrics {
            let key = record.key();
            db.fonts.insert(key.font.clone());
            if db.metrics.insert(key, record.metrics).is_some() {
                bail!(
                    "duplicate metrics for {:?} (math={}) in font {}",
                    record.symbol,
                    record.math,
                    record.font()
                );
            }
        }
        for record in kerns {
            let key = record.key();
            db.fonts.insert(key.font.clone());
            if db.kerns.insert(key, record.kern).is_some() {
                bail!(
                    "duplicate kerning for {:?} followed by {:?} in font {}",
                    record.sym1,
                    record.sym2,
                    record.font()
                );
            }
        }
        Ok(db)
    }

    pub fn metrics(&self, key: &FontMetricKey) -> Option<Metrics> {
        self.metrics.get(key).copied()
    }

    pub fn kern(&self, key: &KernKey) -> Option<f64> {
        self.kerns.get(key).copied()
    }

    pub fn has_font(&self, font: &Font) -> bool {
        self.fonts.contains(font)
    }

    pub fn fonts(&self) -> impl Iterator<Item = &Font> {
        self.fonts.iter()
    }

    pub fn metrics_len(&self) -> usize {
        self.metrics.len()
    }

    pub fn kerns_len(&self) -> usize {
        self.kerns.len()
    }
}

/// A draw request received by a [`FakeBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Glyph {
        x: f64,
        y: f64,
        font: Font,
        symbol: String,
        dpi: f64,
    },
    Rect(Rect),
}

/// Backend answering from a [`Database`].
///
/// Metrics and kerning are stored at 72 dpi and returned as is whatever dpi
/// is asked for.
#[derive(Debug, Clone)]
pub struct FakeBackend<'a> {
    db: &'a Database,
    calls: Vec<DrawCall>,
}

impl FakeBackend<'static> {
    /// Backend over the compiled-in table.
    pub fn new() -> Self {
        Self::with_database(Database::builtin())
    }
}

impl Default for FakeBackend<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FakeBackend<'a> {
    pub fn with_database(db: &'a Database) -> Self {
        Self {
            db,
            calls: Vec::new(),
        }
    }

    pub fn database(&self) -> &'a Database {
        self.db
    }

    /// Draw calls received so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Backend for FakeBackend<'_> {
    fn render_glyph(
        &mut self,
        x: f64,
        y: f64,
        font: &Font,
        symbol: &str,
        dpi: f64,
    ) -> Result<(), BackendError> {
        self.calls.push(DrawCall::Glyph {
            x,
            y,
            font: font.clone(),
            symbol: symbol.to_string(),
            dpi,
        });
        Ok(())
    }

    fn render_rect_filled(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.calls.push(DrawCall::Rect(Rect::new(x1, y1, x2, y2)));
    }

    fn kern(
        &self,
        font1: &Font,
        sym1: &str,
        font2: &Font,
        sym2: &str,
        _dpi: f64,
    ) -> Result<f64, BackendError> {
        if font1 != font2 {
            return Ok(0.0);
        }

        let key = KernKey::new(font1.clone(), sym1, sym2);
        self.db.kern(&key).ok_or(BackendError::MissingKern {
            font: key.font,
            sym1: key.sym1,
            sym2: key.sym2,
        })
    }

    fn metrics(
        &self,
        symbol: &str,
        font: &Font,
        _dpi: f64,
        math: bool,
    ) -> Result<Metrics, BackendError> {
        let key = FontMetricKey::new(symbol, math, font.clone());
        self.db.metrics(&key).ok_or(BackendError::MissingMetrics {
            symbol: key.symbol,
            math,
            font: key.font,
        })
    }

    fn underline_thickness(&self, font: &Font, dpi: f64) -> Result<f64, BackendError> {
        if !self.db.has_font(font) {
            return Err(BackendError::UnknownFont(font.clone()));
        }
        Ok(default_underline_thickness(font.size, dpi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rm() -> Font {
        Font::new("default", 12.0, "rm")
    }

    #[test]
    fn test_builtin_table_has_no_duplicate_keys() {
        let db = Database::builtin();
        assert_eq!(db.metrics_len(), glyph_entries().len());
        assert_eq!(db.kerns_len(), kern_entries().len());
        assert_eq!(db.fonts().count(), 6);
    }

    #[test]
    fn test_metrics_lookup() {
        let backend = FakeBackend::new();
        let m = backend.metrics("A", &rm(), 72.0, false).unwrap();
        assert_eq!(m.advance, 8.208984375);
        assert_eq!(m.iceberg, 8.75);
        assert!(!m.slanted);

        // Stored at 72 dpi, returned unchanged.
        assert_eq!(backend.metrics("A", &rm(), 300.0, false).unwrap(), m);
    }

    #[test]
    fn test_missing_metrics_is_an_error() {
        let backend = FakeBackend::new();
        let err = backend
            .metrics("A", &Font::new("default", 11.0, "rm"), 72.0, false)
            .unwrap_err();
        assert_eq!(
            err,
            BackendError::MissingMetrics {
                symbol: "A".into(),
                math: false,
                font: Font::new("default", 11.0, "rm"),
            }
        );
        assert!(backend.metrics("\\nosuchsymbol", &rm(), 72.0, true).is_err());
    }

    #[test]
    fn test_kerning_both_directions() {
        let backend = FakeBackend::new();
        let font = Font::new("default", 12.0, "regular");
        assert_eq!(backend.kern(&font, "A", &font, "V", 72.0).unwrap(), -1.0);
        assert_eq!(backend.kern(&font, "V", &font, "A", 72.0).unwrap(), -1.0);
        assert_eq!(backend.kern(&font, "V", &font, "é", 72.0).unwrap(), -1.0);
        assert_eq!(backend.kern(&font, "é", &font, "V", 72.0).unwrap(), 0.0);
    }

    #[test]
    fn test_kerning_miss_and_cross_font() {
        let backend = FakeBackend::new();
        let font = rm();
        assert!(matches!(
            backend.kern(&font, "Q", &font, "Z", 72.0),
            Err(BackendError::MissingKern { .. })
        ));
        // Pairs are only recorded at 12pt.
        let small = Font::new("default", 10.0, "rm");
        assert!(backend.kern(&small, "A", &small, "V", 72.0).is_err());

        let it = Font::new("it", 12.0, "it");
        assert_eq!(backend.kern(&font, "A", &it, "V", 72.0).unwrap(), 0.0);
    }

    #[test]
    fn test_underline_thickness() {
        let backend = FakeBackend::new();
        assert_eq!(backend.underline_thickness(&rm(), 72.0).unwrap(), 0.75);
        assert_eq!(backend.underline_thickness(&rm(), 144.0).unwrap(), 1.5);
        assert!(matches!(
            backend.underline_thickness(&Font::new("bf", 12.0, "bf"), 72.0),
            Err(BackendError::UnknownFont(_))
        ));
    }

    #[test]
    fn test_draw_calls_are_recorded() {
        let mut backend = FakeBackend::new();
        backend.render_glyph(1.0, 2.0, &rm(), "A", 72.0).unwrap();
        backend.render_rect_filled(0.0, 0.0, 4.0, 0.5);
        assert_eq!(
            backend.take_calls(),
            vec![
                DrawCall::Glyph {
                    x: 1.0,
                    y: 2.0,
                    font: rm(),
                    symbol: "A".into(),
                    dpi: 72.0,
                },
                DrawCall::Rect(Rect::new(0.0, 0.0, 4.0, 0.5)),
            ]
        );
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let record = KernRecord {
            font_name: "default".into(),
            font_type: "rm".into(),
            size: 12.0,
            sym1: "A".into(),
            sym2: "V".into(),
            kern: -1.0,
        };
        let err = Database::from_records(&[], &[record.clone(), record]).unwrap_err();
        assert!(err.to_string().contains("duplicate kerning"));
    }

    #[test]
    fn test_from_records_rejects_duplicate_metrics() {
        let record = MetricRecord {
            font_name: "it".into(),
            font_type: "it".into(),
            math: true,
            size: 10.0,
            symbol: "\\oiint".into(),
            metrics: Metrics::new(1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, false),
        };
        let mut text = record.clone();
        text.math = false;
        let db = Database::from_records(&[record.clone(), text], &[]).unwrap();
        assert_eq!(db.metrics_len(), 2);

        let err = Database::from_records(&[record.clone(), record], &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate metrics for \"\\\\oiint\" (math=true) in font it/it@10"
        );
    }
}
