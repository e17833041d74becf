//! Sprite glyph rasterization.
//!
//! Each character is drawn in white onto its own transparent square canvas.
//! Uppercase letters fill 70% of the canvas height at a reduced size, everything
//! else 50%, and all glyphs share a baseline 80% down the canvas so a row of
//! sprites lines up like set text.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use glyphsheet_charset::CharacterSpec;
//! use glyphsheet_rasterizer::{GlyphRasterizer, OutlineFont};
//!
//! let font = OutlineFont::open("Roboto-Regular.ttf", 64.0).unwrap();
//! let rasterizer = GlyphRasterizer::new(128);
//! for spec in CharacterSpec::derive_all("Ab1!") {
//!     rasterizer.render_to(&font, &spec, Path::new("output")).unwrap();
//! }
//! ```

mod error;
mod font;
pub mod layout;
mod render;

pub use error::{Error, Error as RasterizationError, Result};
pub use font::{FontMetrics, InkBounds, OutlineFont, ScaledOutline, ScaledTypeface, Typeface};
pub use render::{GlyphImage, GlyphRasterizer};
