//! Glyph sizing and placement on the canvas.
//!
//! All float-to-pixel conversions go through [`to_pixels`], which truncates
//! toward zero.

use glyphsheet_charset::Category;

use crate::font::{FontMetrics, InkBounds};

/// Uppercase glyph height as a fraction of the canvas.
pub const UPPERCASE_HEIGHT_RATIO: f32 = 0.70;

/// Additional size factor applied to uppercase glyphs.
pub const UPPERCASE_FONT_SCALE: f32 = 0.70;

/// Height of every other glyph as a fraction of the canvas.
pub const DEFAULT_HEIGHT_RATIO: f32 = 0.50;

/// Baseline position from the top, as a fraction of the canvas.
pub const BASELINE_RATIO: f32 = 0.80;

/// Convert a float pixel quantity to whole pixels.
pub fn to_pixels(value: f32) -> i32 {
    value.trunc() as i32
}

/// Target height and extra size factor for a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub target_height: f32,
    pub font_scale: f32,
}

impl Sizing {
    pub fn for_category(category: Category, canvas_size: u32) -> Self {
        let canvas = canvas_size as f32;
        match category {
            Category::UppercaseLetter => Self {
                target_height: canvas * UPPERCASE_HEIGHT_RATIO,
                font_scale: UPPERCASE_FONT_SCALE,
            },
            // Descenders share the lowercase height and hang below the baseline.
            Category::Descender | Category::Other => {
                Self { target_height: canvas * DEFAULT_HEIGHT_RATIO, font_scale: 1.0 }
            }
        }
    }
}

/// Size and vertical position of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub em_scale: f32,
    pub font_scale: f32,
    /// Pixels per em of the derived font instance.
    pub scaled_size: i32,
    pub baseline: i32,
    /// Top of the draw origin (ascender line).
    pub origin_y: i32,
}

impl Placement {
    pub fn compute(category: Category, canvas_size: u32, metrics: &FontMetrics) -> Self {
        let sizing = Sizing::for_category(category, canvas_size);
        let em_scale = sizing.target_height / metrics.em_size;
        let scaled_size = to_pixels(metrics.em_size * em_scale * sizing.font_scale);
        let baseline = to_pixels(canvas_size as f32 * BASELINE_RATIO);

        // Only uppercase scales its ascent by the font scale.
        let ascent = match category {
            Category::UppercaseLetter => metrics.ascent * em_scale * sizing.font_scale,
            Category::Descender | Category::Other => metrics.ascent * em_scale,
        };

        Self {
            em_scale,
            font_scale: sizing.font_scale,
            scaled_size,
            baseline,
            origin_y: baseline - to_pixels(ascent),
        }
    }
}

/// Left edge of the draw origin that centers the ink box horizontally.
pub fn centered_origin_x(canvas_size: u32, ink: &InkBounds) -> i32 {
    (canvas_size as i32 - ink.width()).div_euclid(2) - ink.left
}
