//! Rendering backend contract
//!
//! A layout engine positions boxes by asking a [`Backend`] for glyph
//! metrics, kerning and line thickness, and draws through the same backend.
//! It never knows which implementation answers: the font-driven
//! [`FontBackend`](crate::ttf::FontBackend) in production, or the table-driven
//! [`FakeBackend`](crate::fakebackend::FakeBackend) in tests.

pub mod error;
pub mod font;
pub mod metrics;

pub use error::BackendError;
pub use font::{Font, FontMetricKey, KernKey};
pub use metrics::Metrics;

/// Interface used by a layout engine to measure and render math expressions.
pub trait Backend {
    /// Renders the glyph for `symbol` at the reference point `(x, y)`.
    fn render_glyph(
        &mut self,
        x: f64,
        y: f64,
        font: &Font,
        symbol: &str,
        dpi: f64,
    ) -> Result<(), BackendError>;

    /// Draws a filled rectangle from `(x1, y1)` to `(x2, y2)`.
    fn render_rect_filled(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Returns the kerning distance to apply between `sym1` in `font1`
    /// immediately followed by `sym2` in `font2`.
    fn kern(
        &self,
        font1: &Font,
        sym1: &str,
        font2: &Font,
        sym2: &str,
        dpi: f64,
    ) -> Result<f64, BackendError>;

    /// Returns the metrics of `symbol`. `math` selects the math-mode variant.
    fn metrics(
        &self,
        symbol: &str,
        font: &Font,
        dpi: f64,
        math: bool,
    ) -> Result<Metrics, BackendError>;

    /// Returns the line thickness that matches the given font.
    ///
    /// It is used as a base unit for drawing lines such as in a fraction or
    /// radical.
    fn underline_thickness(&self, font: &Font, dpi: f64) -> Result<f64, BackendError>;
}

/// Line thickness derived from the font size alone.
///
/// Font-provided underline metrics are too unreliable across families to be
/// used for rules, so backends share this formula as a base or fallback.
pub fn default_underline_thickness(size: f64, dpi: f64) -> f64 {
    ((0.75 / 12.0) * size * dpi) / 72.0
}
