//! Embedded fonts
//!
//! The font files are compiled into the binary, so loading them can only
//! fail if the build itself is broken. Two families ship with four styles
//! each:
//!
//! - DejaVu Sans, the family the metrics tables are measured from
//! - DejaVu Serif
//!
//! [`Fonts`] holds the parsed faces a [`FontBackend`](crate::ttf::FontBackend)
//! draws with; [`collection`] builds the named faces handed to a text shaper.

pub mod collection;

use thiserror::Error;
use tracing::debug;
use ttf_parser::{Face, FaceParsingError};

// Embed the font files at compile time
pub const DEJAVU_SANS_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
pub const DEJAVU_SANS_OBLIQUE_BYTES: &[u8] =
    include_bytes!("../../assets/fonts/DejaVuSans-Oblique.ttf");
pub const DEJAVU_SANS_BOLD_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
pub const DEJAVU_SANS_BOLD_OBLIQUE_BYTES: &[u8] =
    include_bytes!("../../assets/fonts/DejaVuSans-BoldOblique.ttf");

pub const DEJAVU_SERIF_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif.ttf");
pub const DEJAVU_SERIF_ITALIC_BYTES: &[u8] =
    include_bytes!("../../assets/fonts/DejaVuSerif-Italic.ttf");
pub const DEJAVU_SERIF_BOLD_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif-Bold.ttf");
pub const DEJAVU_SERIF_BOLD_ITALIC_BYTES: &[u8] =
    include_bytes!("../../assets/fonts/DejaVuSerif-BoldItalic.ttf");

/// An embedded font file that failed to load.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("could not parse embedded font {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: FaceParsingError,
    },

    #[error("could not open embedded font {name} for shaping: {reason}")]
    Shaping { name: String, reason: String },
}

/// Style axis of a font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Italic,
    Bold,
    BoldItalic,
}

impl FontStyle {
    /// Style selected by a font role name, as used in [`Font::name`](crate::tex::Font).
    pub fn from_font_name(name: &str) -> Option<Self> {
        match name {
            "default" | "rm" | "regular" => Some(Self::Regular),
            "it" => Some(Self::Italic),
            "bf" => Some(Self::Bold),
            "bfit" => Some(Self::BoldItalic),
            _ => None,
        }
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// The same weight without the italic.
    pub fn upright(self) -> Self {
        match self {
            Self::Italic => Self::Regular,
            Self::BoldItalic => Self::Bold,
            other => other,
        }
    }
}

/// One embedded font file.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFont {
    /// File stem, e.g. `DejaVuSerif-Bold`.
    pub name: &'static str,
    pub data: &'static [u8],
}

/// Embedded font files for the four styles of one family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyAssets {
    pub family: &'static str,
    pub regular: EmbeddedFont,
    pub italic: EmbeddedFont,
    pub bold: EmbeddedFont,
    pub bold_italic: EmbeddedFont,
}

pub const DEJAVU_SANS: FamilyAssets = FamilyAssets {
    family: "DejaVuSans",
    regular: EmbeddedFont {
        name: "DejaVuSans",
        data: DEJAVU_SANS_BYTES,
    },
    italic: EmbeddedFont {
        name: "DejaVuSans-Oblique",
        data: DEJAVU_SANS_OBLIQUE_BYTES,
    },
    bold: EmbeddedFont {
        name: "DejaVuSans-Bold",
        data: DEJAVU_SANS_BOLD_BYTES,
    },
    bold_italic: EmbeddedFont {
        name: "DejaVuSans-BoldOblique",
        data: DEJAVU_SANS_BOLD_OBLIQUE_BYTES,
    },
};

pub const DEJAVU_SERIF: FamilyAssets = FamilyAssets {
    family: "DejaVuSerif",
    regular: EmbeddedFont {
        name: "DejaVuSerif",
        data: DEJAVU_SERIF_BYTES,
    },
    italic: EmbeddedFont {
        name: "DejaVuSerif-Italic",
        data: DEJAVU_SERIF_ITALIC_BYTES,
    },
    bold: EmbeddedFont {
        name: "DejaVuSerif-Bold",
        data: DEJAVU_SERIF_BOLD_BYTES,
    },
    bold_italic: EmbeddedFont {
        name: "DejaVuSerif-BoldItalic",
        data: DEJAVU_SERIF_BOLD_ITALIC_BYTES,
    },
};

impl FamilyAssets {
    pub fn get(&self, style: FontStyle) -> EmbeddedFont {
        match style {
            FontStyle::Regular => self.regular,
            FontStyle::Italic => self.italic,
            FontStyle::Bold => self.bold,
            FontStyle::BoldItalic => self.bold_italic,
        }
    }
}

/// Parsed faces of one family, by style.
#[derive(Clone)]
pub struct Fonts {
    pub family: &'static str,
    pub default: Face<'static>,
    pub rm: Face<'static>,
    pub it: Face<'static>,
    pub bf: Face<'static>,
    pub bfit: Face<'static>,
}

impl Fonts {
    /// Parse the four styles of `assets`. The regular face doubles as the
    /// default one.
    pub fn load(assets: &FamilyAssets) -> Result<Self, FontError> {
        let rm = parse(assets.regular)?;
        let it = parse(assets.italic)?;
        let bf = parse(assets.bold)?;
        let bfit = parse(assets.bold_italic)?;

        debug!("✅ Embedded {} fonts ready", assets.family);
        Ok(Self {
            family: assets.family,
            default: rm.clone(),
            rm,
            it,
            bf,
            bfit,
        })
    }

    pub fn dejavu_sans() -> Result<Self, FontError> {
        Self::load(&DEJAVU_SANS)
    }

    pub fn dejavu_serif() -> Result<Self, FontError> {
        Self::load(&DEJAVU_SERIF)
    }

    pub fn face(&self, style: FontStyle) -> &Face<'static> {
        match style {
            FontStyle::Regular => &self.rm,
            FontStyle::Italic => &self.it,
            FontStyle::Bold => &self.bf,
            FontStyle::BoldItalic => &self.bfit,
        }
    }
}

fn parse(font: EmbeddedFont) -> Result<Face<'static>, FontError> {
    Face::parse(font.data, 0).map_err(|source| FontError::Parse {
        name: font.name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_font_name() {
        assert_eq!(FontStyle::from_font_name("default"), Some(FontStyle::Regular));
        assert_eq!(FontStyle::from_font_name("rm"), Some(FontStyle::Regular));
        assert_eq!(FontStyle::from_font_name("it"), Some(FontStyle::Italic));
        assert_eq!(FontStyle::from_font_name("bf"), Some(FontStyle::Bold));
        assert_eq!(FontStyle::from_font_name("bfit"), Some(FontStyle::BoldItalic));
        assert_eq!(FontStyle::from_font_name("cal"), None);
        assert_eq!(FontStyle::BoldItalic.upright(), FontStyle::Bold);
    }

    #[test]
    fn test_dejavu_sans_loads_four_styles() {
        let fonts = Fonts::dejavu_sans().expect("embedded DejaVu Sans should parse");
        assert_eq!(fonts.face(FontStyle::Regular).units_per_em(), 2048);
        assert!(!fonts.rm.is_italic());
        assert!(fonts.it.is_italic());
        assert!(fonts.bf.is_bold());
        assert!(fonts.bfit.is_bold() && fonts.bfit.is_italic());
        assert!(fonts.default.glyph_index('A').is_some());
    }

    #[test]
    fn test_dejavu_serif_loads_four_styles() {
        let fonts = Fonts::dejavu_serif().expect("embedded DejaVu Serif should parse");
        assert_eq!(fonts.family, "DejaVuSerif");
        assert_eq!(fonts.face(FontStyle::Regular).units_per_em(), 2048);
        assert!(!fonts.rm.is_italic() && !fonts.rm.is_bold());
        assert!(fonts.it.is_italic() && !fonts.it.is_bold());
        assert!(fonts.bf.is_bold() && !fonts.bf.is_italic());
        assert!(fonts.bfit.is_bold() && fonts.bfit.is_italic());
        assert!(fonts.default.glyph_index('A').is_some());
    }

    #[test]
    fn test_corrupt_font_is_an_error() {
        let broken = FamilyAssets {
            regular: EmbeddedFont {
                name: "Broken-Regular",
                data: b"not a font",
            },
            ..DEJAVU_SERIF
        };
        let err = Fonts::load(&broken)
            .err()
            .expect("garbage bytes must not parse");
        assert!(err.to_string().contains("Broken-Regular"));
    }
}
