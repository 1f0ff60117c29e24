//! Font-driven [`Backend`]
//!
//! Answers metric and kerning queries from the parsed faces of a [`Fonts`]
//! collection and draws glyph outlines onto a [`Surface`]. This is the
//! backend the generated tables of [`FakeBackend`](crate::fakebackend::FakeBackend)
//! are measured with, so every value here must stay reproducible.

mod surface;

pub use surface::{Canvas, Mark, Surface};

use crate::fonts::{FontStyle, Fonts};
use crate::symbols;
use crate::tex::{default_underline_thickness, Backend, BackendError, Font, Metrics};
use kurbo::{BezPath, Point, Rect};
use ttf_parser::{Face, GlyphId, LineMetrics, OutlineBuilder};

/// A symbol resolved to a glyph of one face.
struct ResolvedGlyph<'a> {
    style: FontStyle,
    face: &'a Face<'static>,
    id: GlyphId,
    slanted: bool,
}

/// Device pixels per font unit.
fn scale_for(face: &Face<'_>, size: f64, dpi: f64) -> f64 {
    size * dpi / (72.0 * f64::from(face.units_per_em()))
}

/// Rounds to the 1/64 pixel grid of 26.6 fixed point.
fn round_26_6(v: f64) -> f64 {
    ((v * 64.0) + 0.5).floor() / 64.0
}

pub struct FontBackend<S: Surface> {
    fonts: Fonts,
    surface: S,
}

impl<S: Surface> FontBackend<S> {
    pub fn new(fonts: Fonts, surface: S) -> Self {
        Self { fonts, surface }
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn resolve(
        &self,
        font: &Font,
        symbol: &str,
        math: bool,
    ) -> Result<ResolvedGlyph<'_>, BackendError> {
        let requested = FontStyle::from_font_name(&font.name)
            .ok_or_else(|| BackendError::UnknownFont(font.clone()))?;
        let ch = symbols::unicode_for(symbol, math)
            .ok_or_else(|| BackendError::UnknownSymbol(symbol.to_string()))?;

        let style = if requested.is_italic() && !symbols::italicizes(ch) {
            requested.upright()
        } else {
            requested
        };

        let face = self.fonts.face(style);
        let id = face.glyph_index(ch).ok_or_else(|| BackendError::GlyphNotFound {
            symbol: symbol.to_string(),
            font: font.clone(),
        })?;

        Ok(ResolvedGlyph {
            style,
            face,
            id,
            slanted: style.is_italic() || symbols::is_slanted_symbol(symbol),
        })
    }
}

impl<S: Surface> Backend for FontBackend<S> {
    fn render_glyph(
        &mut self,
        x: f64,
        y: f64,
        font: &Font,
        symbol: &str,
        dpi: f64,
    ) -> Result<(), BackendError> {
        let glyph = self.resolve(font, symbol, true)?;
        let mut pen = OutlinePen {
            path: BezPath::new(),
            origin: Point::new(x, y),
            scale: scale_for(glyph.face, font.size, dpi),
        };
        // Blank glyphs such as the space have no outline to draw.
        if glyph.face.outline_glyph(glyph.id, &mut pen).is_none() {
            return Ok(());
        }

        self.surface.fill_path(&pen.path);
        Ok(())
    }

    fn render_rect_filled(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.surface.fill_rect(Rect::new(x1, y1, x2, y2));
    }

    fn kern(
        &self,
        font1: &Font,
        sym1: &str,
        font2: &Font,
        sym2: &str,
        dpi: f64,
    ) -> Result<f64, BackendError> {
        if font1 != font2 {
            return Ok(0.0);
        }

        let left = self.resolve(font1, sym1, true)?;
        let right = self.resolve(font2, sym2, true)?;
        if left.style != right.style {
            return Ok(0.0);
        }

        let Some(table) = left.face.tables().kern else {
            return Ok(0.0);
        };
        let value = table
            .subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.has_cross_stream)
            .find_map(|subtable| subtable.glyphs_kerning(left.id, right.id));

        Ok(match value {
            Some(units) => {
                let scale = scale_for(left.face, font1.size, dpi);
                (f64::from(units) * scale + 0.5).floor()
            }
            None => 0.0,
        })
    }

    fn metrics(
        &self,
        symbol: &str,
        font: &Font,
        dpi: f64,
        math: bool,
    ) -> Result<Metrics, BackendError> {
        let glyph = self.resolve(font, symbol, math)?;
        let scale = scale_for(glyph.face, font.size, dpi);

        let advance = f64::from(glyph.face.glyph_hor_advance(glyph.id).unwrap_or(0)) * scale;
        let (xmin, ymin, xmax, ymax) = match glyph.face.glyph_bounding_box(glyph.id) {
            Some(bbox) => (
                round_26_6(f64::from(bbox.x_min) * scale),
                round_26_6(f64::from(bbox.y_min) * scale),
                round_26_6(f64::from(bbox.x_max) * scale),
                round_26_6(f64::from(bbox.y_max) * scale),
            ),
            None => (0.0, 0.0, 0.0, 0.0),
        };

        Ok(Metrics {
            advance,
            height: ymax - ymin,
            width: xmax - xmin,
            xmin,
            xmax,
            ymin,
            ymax,
            iceberg: ymax,
            slanted: glyph.slanted,
        })
    }

    fn underline_thickness(&self, font: &Font, dpi: f64) -> Result<f64, BackendError> {
        let style = FontStyle::from_font_name(&font.name)
            .ok_or_else(|| BackendError::UnknownFont(font.clone()))?;
        let face = self.fonts.face(style);
        Ok(underline_from(
            face.underline_metrics(),
            scale_for(face, font.size, dpi),
            font.size,
            dpi,
        ))
    }
}

/// Thickness of the `post` underline, or the size-based default when the
/// face has none.
fn underline_from(line: Option<LineMetrics>, scale: f64, size: f64, dpi: f64) -> f64 {
    match line {
        Some(line) if line.thickness > 0 => f64::from(line.thickness) * scale,
        _ => default_underline_thickness(size, dpi),
    }
}

/// Collects a glyph outline into device space: scaled, flipped so y grows
/// downwards, and moved to the glyph origin.
struct OutlinePen {
    path: BezPath,
    origin: Point,
    scale: f64,
}

impl OutlinePen {
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.origin.x + f64::from(x) * self.scale,
            self.origin.y - f64::from(y) * self.scale,
        )
    }
}

impl OutlineBuilder for OutlinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (p1, p) = (self.map(x1, y1), self.map(x, y));
        self.path.quad_to(p1, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (p1, p2, p) = (self.map(x1, y1), self.map(x2, y2), self.map(x, y));
        self.path.curve_to(p1, p2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    fn backend() -> FontBackend<Canvas> {
        let fonts = Fonts::dejavu_sans().expect("embedded DejaVu Sans should parse");
        FontBackend::new(fonts, Canvas::new())
    }

    #[test]
    fn test_metrics_of_capital_a() {
        let m = backend()
            .metrics("A", &Font::new("default", 12.0, "rm"), 72.0, false)
            .unwrap();
        assert_eq!(
            m,
            Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)
        );
    }

    #[test]
    fn test_dpi_scales_metrics() {
        let b = backend();
        let font = Font::new("default", 12.0, "rm");
        let at_72 = b.metrics("A", &font, 72.0, false).unwrap();
        let at_144 = b.metrics("A", &font, 144.0, false).unwrap();
        assert_eq!(at_144.advance, at_72.advance * 2.0);
        assert!((at_144.ymax - at_72.ymax * 2.0).abs() <= 1.0 / 64.0);
    }

    #[test]
    fn test_italic_falls_back_for_non_letters() {
        let b = backend();
        let it = Font::new("it", 12.0, "it");
        assert!(b.metrics("a", &it, 72.0, false).unwrap().slanted);
        assert!(!b.metrics("\\Sigma", &it, 72.0, true).unwrap().slanted);
        assert!(!b.metrics("1", &it, 72.0, true).unwrap().slanted);

        let rm = Font::new("default", 12.0, "rm");
        assert!(b.metrics("\\int", &rm, 72.0, false).unwrap().slanted);
    }

    #[test]
    fn test_space_has_advance_but_no_ink() {
        let m = backend()
            .metrics(" ", &Font::new("default", 12.0, "rm"), 72.0, false)
            .unwrap();
        assert!(m.advance > 0.0);
        assert_eq!((m.width, m.height), (0.0, 0.0));
    }

    #[test]
    fn test_kerning_is_directional() {
        let b = backend();
        let font = Font::new("default", 12.0, "regular");
        assert_eq!(b.kern(&font, "A", &font, "V", 72.0).unwrap(), -1.0);
        assert_eq!(b.kern(&font, "V", &font, "A", 72.0).unwrap(), -1.0);
        assert_eq!(b.kern(&font, "V", &font, "é", 72.0).unwrap(), -1.0);
        assert_eq!(b.kern(&font, "é", &font, "V", 72.0).unwrap(), 0.0);
    }

    #[test]
    fn test_no_kerning_across_fonts() {
        let b = backend();
        let rm = Font::new("default", 12.0, "rm");
        let it = Font::new("it", 12.0, "it");
        assert_eq!(b.kern(&rm, "A", &it, "V", 72.0).unwrap(), 0.0);
    }

    #[test]
    fn test_lookup_errors() {
        let b = backend();
        let cal = Font::new("cal", 12.0, "cal");
        assert!(matches!(
            b.metrics("A", &cal, 72.0, false),
            Err(BackendError::UnknownFont(_))
        ));

        let rm = Font::new("default", 12.0, "rm");
        assert!(matches!(
            b.metrics("\\nosuchsymbol", &rm, 72.0, false),
            Err(BackendError::UnknownSymbol(_))
        ));
        assert!(matches!(
            b.metrics("\u{10FFFD}", &rm, 72.0, false),
            Err(BackendError::GlyphNotFound { .. })
        ));
    }

    #[test]
    fn test_underline_thickness_from_post_table() {
        let b = backend();
        // DejaVu Sans sets a 90 unit underline on a 2048 unit em.
        let t = b
            .underline_thickness(&Font::new("default", 12.0, "rm"), 72.0)
            .unwrap();
        assert_eq!(t, 90.0 * 12.0 / 2048.0);
    }

    #[test]
    fn test_underline_falls_back_without_post_thickness() {
        let fallback = default_underline_thickness(12.0, 144.0);
        assert_eq!(underline_from(None, 1.0, 12.0, 144.0), fallback);
        let flat = LineMetrics {
            position: -130,
            thickness: 0,
        };
        assert_eq!(underline_from(Some(flat), 1.0, 12.0, 144.0), fallback);

        let line = LineMetrics {
            position: -130,
            thickness: 90,
        };
        assert_eq!(underline_from(Some(line), 0.5, 12.0, 144.0), 45.0);
    }

    #[test]
    fn test_rendered_glyph_matches_ink_box() {
        let mut b = backend();
        let font = Font::new("default", 12.0, "rm");
        let m = b.metrics("A", &font, 72.0, false).unwrap();
        b.render_glyph(100.0, 50.0, &font, "A", 72.0).unwrap();
        b.render_glyph(110.0, 50.0, &font, " ", 72.0).unwrap();
        b.render_rect_filled(0.0, 0.0, 10.0, 1.0);

        let canvas = b.into_surface();
        assert_eq!(canvas.marks.len(), 2);
        let Mark::Path(path) = &canvas.marks[0] else {
            panic!("expected a glyph outline first");
        };
        let bbox = path.bounding_box();
        assert!((bbox.x0 - (100.0 + m.xmin)).abs() < 1.0 / 32.0);
        assert!((bbox.y0 - (50.0 - m.ymax)).abs() < 1.0 / 32.0);
        assert!((bbox.y1 - (50.0 - m.ymin)).abs() < 1.0 / 32.0);
        assert_eq!(canvas.marks[1], Mark::Rect(Rect::new(0.0, 0.0, 10.0, 1.0)));
    }
}
