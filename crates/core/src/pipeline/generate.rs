use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use glyphsheet_charset::{CharacterSpec, missing_symbol_names};
use glyphsheet_rasterizer::{GlyphRasterizer, RasterizationError, Typeface};
use log::{debug, warn};

use crate::{
    config::{GlyphErrorPolicy, RunConfig},
    io::ensure_dir,
    mapping::write_mapping,
    pipeline::font::LoadedFont,
};

/// A character left out of the run under [`GlyphErrorPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct SkippedGlyph {
    pub spec: CharacterSpec,
    pub reason: String,
}

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub font_name: String,
    pub images: Vec<PathBuf>,
    pub skipped: Vec<SkippedGlyph>,
    pub mapping_path: PathBuf,
    pub mapping: String,
}

/// Run the whole pipeline: load the font, render every character, write the mapping.
pub fn generate(config: &RunConfig) -> Result<RunReport> {
    ensure_dir(&config.output_folder)?;
    let font = LoadedFont::load(config)?;
    generate_with_font(config, font)
}

/// Render and map with an already loaded font.
///
/// The font (and any temporary file behind it) is released once the last
/// character is rendered, whether or not rendering succeeded.
pub fn generate_with_font(config: &RunConfig, font: LoadedFont) -> Result<RunReport> {
    ensure_dir(&config.output_folder)?;

    let missing = missing_symbol_names(&config.characters);
    if !missing.is_empty() {
        warn!("No symbolic name for {missing:?}; image names fall back to the raw character");
    }

    let font_name = font.name().to_string();
    println!(
        "Rendering {} characters with {font_name} into {}",
        config.characters.chars().count(),
        config.output_folder.display()
    );
    let start = Instant::now();
    let rendered = render_all(config, font.outline());
    drop(font);
    let (images, skipped) = rendered?;
    println!("  ✓ {} images ({:.2}s)", images.len(), start.elapsed().as_secs_f64());

    let mapping =
        write_mapping(&config.mapping_path, &config.characters, &config.output_reference())?;
    println!("  ✓ Mapping written to {}", config.mapping_path.display());

    Ok(RunReport { font_name, images, skipped, mapping_path: config.mapping_path.clone(), mapping })
}

fn render_all<T: Typeface>(
    config: &RunConfig,
    font: &T,
) -> Result<(Vec<PathBuf>, Vec<SkippedGlyph>)> {
    let rasterizer = GlyphRasterizer::new(config.image_size);
    let mut images = Vec::new();
    let mut skipped = Vec::new();

    for spec in CharacterSpec::derive_all(&config.characters) {
        match rasterizer.render_to(font, &spec, &config.output_folder) {
            Ok(path) => {
                debug!("Generated image for '{}': {}", spec.ch, path.display());
                images.push(path);
            }
            Err(err @ RasterizationError::InvalidFont { .. })
                if config.glyph_errors == GlyphErrorPolicy::Skip =>
            {
                warn!("Skipping '{}' ({}): {err}", spec.ch, spec.role);
                skipped.push(SkippedGlyph { spec, reason: err.to_string() });
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to render '{}' ({})", spec.ch, spec.role));
            }
        }
    }

    Ok((images, skipped))
}
