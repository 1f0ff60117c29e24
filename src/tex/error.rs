use super::Font;
use thiserror::Error;

/// Errors reported by [`Backend`](super::Backend) implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The generated table has no metrics for this glyph.
    #[error("no metrics recorded for {symbol:?} (math={math}) in font {font}")]
    MissingMetrics {
        symbol: String,
        math: bool,
        font: Font,
    },

    /// The generated table has no kerning for this ordered pair.
    #[error("no kerning recorded for {sym1:?} followed by {sym2:?} in font {font}")]
    MissingKern {
        font: Font,
        sym1: String,
        sym2: String,
    },

    #[error("unknown font {0}")]
    UnknownFont(Font),

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),

    #[error("font {font} has no glyph for {symbol:?}")]
    GlyphNotFound { symbol: String, font: Font },
}
