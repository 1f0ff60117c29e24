//! mtex
//!
//! The rendering side of a math typesetter: the [`tex::Backend`] contract a
//! layout engine measures and draws through, a font-driven backend over the
//! embedded DejaVu fonts, and a deterministic backend serving tables
//! generated offline by the `mtex` binary.
pub mod core;
pub mod fakebackend;
pub mod fonts;
pub mod generator;
pub mod logging;
pub mod symbols;
#[cfg(test)]
mod tests;
pub mod tex;
pub mod ttf;
