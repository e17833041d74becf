//! Outline font access.
//!
//! [`Typeface`] and [`ScaledTypeface`] are the only font operations the renderer
//! needs: global metrics at the nominal size, and per-character ink bounds and
//! drawing at a derived size. [`OutlineFont`] implements them with `ab_glyph`.

use std::{fs::read, path::Path};

use ab_glyph::{Font, FontVec, Glyph, PxScale, PxScaleFont, ScaleFont, point};
use image::{Rgba, RgbaImage};

use crate::error::Result;

/// Opaque white ink; coverage goes into the alpha channel.
const INK: [u8; 3] = [255, 255, 255];

/// Vertical font metrics in pixels at the nominal em size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Nominal em size in pixels.
    pub em_size: f32,
    pub ascent: f32,
    /// Distance below the baseline, as a non-negative magnitude.
    pub descent: f32,
}

/// Whole-pixel ink bounding box of a glyph.
///
/// Coordinates are relative to a pen at (0, 0) with the ascender line at y = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InkBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A loaded font that can derive instances at a pixel size.
pub trait Typeface {
    type Scaled<'a>: ScaledTypeface
    where
        Self: 'a;

    fn metrics(&self) -> FontMetrics;

    /// Derive an instance at `px_per_em`, or `None` if the font cannot.
    fn scaled(&self, px_per_em: u32) -> Option<Self::Scaled<'_>>;
}

/// A font instance at a fixed pixel size.
pub trait ScaledTypeface {
    fn ink_bounds(&self, ch: char) -> InkBounds;

    /// Draw `ch` with its ascender line at `origin`, clipped to the canvas.
    fn draw(&self, ch: char, origin: (i32, i32), canvas: &mut RgbaImage);
}

/// An outline font loaded at a nominal em size.
pub struct OutlineFont {
    font: FontVec,
    em_size: f32,
}

impl OutlineFont {
    pub fn from_vec(data: Vec<u8>, em_size: f32) -> Result<Self> {
        Ok(Self { font: FontVec::try_from_vec(data)?, em_size })
    }

    pub fn open(path: impl AsRef<Path>, em_size: f32) -> Result<Self> {
        Self::from_vec(read(path)?, em_size)
    }

    /// ab_glyph scales by line height; convert from pixels per em.
    fn px_scale(&self, px_per_em: f32) -> Option<PxScale> {
        let units_per_em = self.font.units_per_em()?;
        Some(PxScale::from(px_per_em * self.font.height_unscaled() / units_per_em))
    }

    fn units_to_px(&self, units: f32) -> f32 {
        self.font.units_per_em().map_or(0.0, |upem| units * self.em_size / upem)
    }
}

impl Typeface for OutlineFont {
    type Scaled<'a> = ScaledOutline<'a>;

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            em_size: self.em_size,
            ascent: self.units_to_px(self.font.ascent_unscaled()),
            descent: self.units_to_px(self.font.descent_unscaled()).abs(),
        }
    }

    fn scaled(&self, px_per_em: u32) -> Option<ScaledOutline<'_>> {
        if px_per_em == 0 {
            return None;
        }
        let scale = self.px_scale(px_per_em as f32)?;
        Some(ScaledOutline { font: self.font.as_scaled(scale) })
    }
}

/// [`OutlineFont`] at a derived pixel size.
pub struct ScaledOutline<'a> {
    font: PxScaleFont<&'a FontVec>,
}

impl ScaledOutline<'_> {
    fn glyph_at(&self, ch: char, x: f32, y: f32) -> Glyph {
        let mut glyph = self.font.scaled_glyph(ch);
        glyph.position = point(x, y + self.font.ascent());
        glyph
    }
}

impl ScaledTypeface for ScaledOutline<'_> {
    fn ink_bounds(&self, ch: char) -> InkBounds {
        let Some(outlined) = self.font.outline_glyph(self.glyph_at(ch, 0.0, 0.0)) else {
            return InkBounds::default();
        };
        let bounds = outlined.px_bounds();
        InkBounds {
            left: bounds.min.x.floor() as i32,
            top: bounds.min.y.floor() as i32,
            right: bounds.max.x.ceil() as i32,
            bottom: bounds.max.y.ceil() as i32,
        }
    }

    fn draw(&self, ch: char, origin: (i32, i32), canvas: &mut RgbaImage) {
        let glyph = self.glyph_at(ch, origin.0 as f32, origin.1 as f32);
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };
        let bounds = outlined.px_bounds();
        let (width, height) = canvas.dimensions();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i32 + gx as i32;
            let y = bounds.min.y as i32 + gy as i32;
            if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            let [r, g, b] = INK;
            canvas.put_pixel(x as u32, y as u32, Rgba([r, g, b, alpha]));
        });
    }
}
