//! Glyph measurements

use serde::{Deserialize, Serialize};

/// Geometry of one glyph instance, in device pixels at the requested dpi
/// (points at 72 dpi).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Advance distance of the glyph.
    pub advance: f64,
    /// Height of the ink rectangle.
    pub height: f64,
    /// Width of the ink rectangle.
    pub width: f64,

    // Ink rectangle of the glyph, relative to its origin.
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,

    /// Distance from the baseline to the top of the glyph.
    /// This is TeX's definition of "height".
    pub iceberg: f64,

    /// Whether the glyph is slanted.
    pub slanted: bool,
}

impl Metrics {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        advance: f64,
        height: f64,
        width: f64,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        iceberg: f64,
        slanted: bool,
    ) -> Self {
        Self {
            advance,
            height,
            width,
            xmin,
            xmax,
            ymin,
            ymax,
            iceberg,
            slanted,
        }
    }

    /// Whether the ink rectangle is well formed.
    pub fn has_valid_ink_box(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.advance,
            self.height,
            self.width,
            self.xmin,
            self.xmax,
            self.ymin,
            self.ymax,
            self.iceberg,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
