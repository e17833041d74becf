//! Generation pipeline: font loading, rendering, mapping, and housekeeping.

mod check;
mod clean;
mod font;
mod generate;

pub use check::{FontCheck, check_font, check_font_with};
pub use clean::clean;
pub use font::LoadedFont;
pub use generate::{RunReport, SkippedGlyph, generate, generate_with_font};
