//! Named font faces for a text-shaping subsystem
//!
//! A shaper registers faces under a typeface name and tells the styles of a
//! family apart by weight and style attributes. Embedded file names such as
//! `DejaVuSerif-BoldItalic` are therefore reduced to their family part
//! (`DejaVuSerif`) and the style moves into the [`FaceDescriptor`].

use super::{EmbeddedFont, FamilyAssets, FontError, FontStyle, DEJAVU_SANS, DEJAVU_SERIF};
use harfrust::{Direction, FontRef, ShaperData, ShaperInstance, UnicodeBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Normal,
    Italic,
}

/// How a face is registered with the shaper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FaceDescriptor {
    pub typeface: String,
    pub weight: Weight,
    pub style: Style,
}

impl FaceDescriptor {
    pub fn new(weight: Weight, style: Style) -> Self {
        Self {
            typeface: String::new(),
            weight,
            style,
        }
    }
}

impl From<FontStyle> for FaceDescriptor {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Regular => Self::new(Weight::Normal, Style::Normal),
            FontStyle::Italic => Self::new(Weight::Normal, Style::Italic),
            FontStyle::Bold => Self::new(Weight::Bold, Style::Normal),
            FontStyle::BoldItalic => Self::new(Weight::Bold, Style::Italic),
        }
    }
}

/// A face ready to be handed to the shaper.
#[derive(Clone)]
pub struct FontFace {
    pub font: FaceDescriptor,
    pub face: FontRef<'static>,
}

impl FontFace {
    /// Total advance of `text` after shaping, in font units.
    pub fn advance_units(&self, text: &str) -> i32 {
        let shaper_data = ShaperData::new(&self.face);
        let shaper_instance =
            ShaperInstance::from_variations(&self.face, &[] as &[harfrust::Variation]);
        let shaper = shaper_data
            .shaper(&self.face)
            .instance(Some(&shaper_instance))
            .build();

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(Direction::LeftToRight);
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum()
    }
}

/// Base family of a compound font name: `LatinModern-Bold` → `LatinModern`.
pub fn typeface_name(name: &str) -> &str {
    match name.find('-') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Open `raw` for shaping and register it as `name` with the weight and
/// style of `font`.
pub fn register_font(
    mut font: FaceDescriptor,
    name: &str,
    raw: &'static [u8],
) -> Result<FontFace, FontError> {
    let face = FontRef::from_index(raw, 0).map_err(|e| FontError::Shaping {
        name: name.to_string(),
        reason: format!("{e:?}"),
    })?;

    font.typeface = typeface_name(name).to_string();
    Ok(FontFace { font, face })
}

/// The four styles of `assets`: regular, bold, italic, bold italic.
pub fn family_collection(assets: &FamilyAssets) -> Result<Vec<FontFace>, FontError> {
    [
        FontStyle::Regular,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ]
    .into_iter()
    .map(|style| {
        let EmbeddedFont { name, data } = assets.get(style);
        register_font(style.into(), name, data)
    })
    .collect()
}

pub fn dejavu_sans_collection() -> Result<Vec<FontFace>, FontError> {
    family_collection(&DEJAVU_SANS)
}

pub fn dejavu_serif_collection() -> Result<Vec<FontFace>, FontError> {
    family_collection(&DEJAVU_SERIF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeface_name_drops_style_suffix() {
        assert_eq!(typeface_name("LatinModern-Bold"), "LatinModern");
        assert_eq!(typeface_name("LatinModern-BoldItalic"), "LatinModern");
        assert_eq!(typeface_name("Liberation"), "Liberation");
        assert_eq!(typeface_name("DejaVuSerif-Italic"), "DejaVuSerif");
    }

    #[test]
    fn test_serif_collection_keeps_style_attributes() {
        let coll = dejavu_serif_collection().expect("embedded DejaVu Serif should open");
        assert_eq!(coll.len(), 4);
        assert!(coll.iter().all(|f| f.font.typeface == "DejaVuSerif"));

        let styles: Vec<_> = coll.iter().map(|f| (f.font.weight, f.font.style)).collect();
        assert_eq!(
            styles,
            vec![
                (Weight::Normal, Style::Normal),
                (Weight::Bold, Style::Normal),
                (Weight::Normal, Style::Italic),
                (Weight::Bold, Style::Italic),
            ]
        );
    }

    #[test]
    fn test_shaped_advance_matches_hmtx() {
        let coll = dejavu_sans_collection().expect("embedded DejaVu Sans should open");
        // DejaVu Sans advances `A` by 1401 units.
        assert_eq!(coll[0].advance_units("A"), 1401);
    }

    #[test]
    fn test_register_rejects_garbage() {
        let result = register_font(FaceDescriptor::default(), "Garbage-Regular", b"garbage");
        assert!(matches!(result, Err(FontError::Shaping { .. })));
    }
}
