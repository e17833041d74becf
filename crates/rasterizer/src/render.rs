use std::path::{Path, PathBuf};

use glyphsheet_charset::CharacterSpec;
use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::{
    error::{Error, Result},
    font::{ScaledTypeface, Typeface},
    layout::{Placement, centered_origin_x},
};

/// A rendered character and the name it is saved under.
#[derive(Debug, Clone)]
pub struct GlyphImage {
    /// File stem, e.g. `custom_font_U_A`.
    pub name: String,
    pub image: RgbaImage,
}

impl GlyphImage {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    /// Write the image as PNG into `dir`, replacing any previous file.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        self.image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| Error::Image { path: path.clone(), source })?;
        Ok(path)
    }
}

/// Renders characters into square transparent canvases.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRasterizer {
    canvas_size: u32,
}

impl GlyphRasterizer {
    pub fn new(canvas_size: u32) -> Self {
        Self { canvas_size }
    }

    /// Render one character.
    ///
    /// Space never touches the font and always yields an empty canvas.
    pub fn render<T: Typeface>(&self, font: &T, spec: &CharacterSpec) -> Result<GlyphImage> {
        let size = self.canvas_size;
        let mut image = RgbaImage::new(size, size);
        let name = spec.file_stem();

        if spec.is_space() {
            return Ok(GlyphImage { name, image });
        }

        let metrics = font.metrics();
        let placement = Placement::compute(spec.category(), size, &metrics);
        let scaled_size = u32::try_from(placement.scaled_size).unwrap_or(0);
        let scaled = font.scaled(scaled_size).ok_or_else(|| Error::InvalidFont {
            ch: spec.ch,
            reason: format!("cannot derive a {}px instance", placement.scaled_size),
        })?;

        let ink = scaled.ink_bounds(spec.ch);
        let x = centered_origin_x(size, &ink);
        let y = placement.origin_y;
        debug!(
            "'{}' {}: scale {:.2}, size {}px, ink {}x{}, origin ({x}, {y})",
            spec.ch,
            spec.role,
            placement.em_scale,
            placement.scaled_size,
            ink.width(),
            ink.height()
        );

        scaled.draw(spec.ch, (x, y), &mut image);
        Ok(GlyphImage { name, image })
    }

    /// Render one character and save it into `dir`.
    pub fn render_to<T: Typeface>(
        &self,
        font: &T,
        spec: &CharacterSpec,
        dir: &Path,
    ) -> Result<PathBuf> {
        self.render(font, spec)?.save(dir)
    }
}
