use std::path::Path;

use anyhow::{Context, Result};
use glyphsheet_font_fetch::{AcquiredFont, Fetch, FontAcquirer, FontFamily, HttpClient};
use glyphsheet_rasterizer::OutlineFont;
use log::{info, warn};

use crate::config::{FontSource, RunConfig};

/// The font a run renders with.
///
/// Holds the converted temporary font file, if any, until the run is over;
/// dropping this value deletes it.
pub struct LoadedFont {
    outline: OutlineFont,
    name: String,
    _converted: Option<AcquiredFont>,
}

impl LoadedFont {
    /// Load the configured font, falling back to `fallback_font` if acquisition
    /// fails and one is configured.
    pub fn load(config: &RunConfig) -> Result<Self> {
        match &config.font {
            FontSource::File(path) => Self::from_file(path, config.font_size),
            FontSource::Family(input) => {
                let client = HttpClient::new().context("Failed to create HTTP client")?;
                Self::acquire_or_fallback(&client, input, config)
            }
        }
    }

    /// Acquire a family through `fetcher`, honoring the configured fallback.
    pub fn acquire_or_fallback<F: Fetch + Clone>(
        fetcher: F,
        input: &str,
        config: &RunConfig,
    ) -> Result<Self> {
        match Self::acquire(fetcher, input, config.font_size) {
            Ok(font) => Ok(font),
            Err(err) => match &config.fallback_font {
                Some(fallback) => {
                    warn!("Error loading font: {err:#}");
                    warn!("Using fallback font {} instead", fallback.display());
                    Self::from_file(fallback, config.font_size)
                }
                None => Err(err),
            },
        }
    }

    /// Download and load a family from the font service.
    pub fn acquire<F: Fetch + Clone>(fetcher: F, input: &str, font_size: u32) -> Result<Self> {
        let family = FontFamily::parse(input);
        let converted = FontAcquirer::new(fetcher)
            .acquire_family(&family)
            .with_context(|| format!("Failed to acquire font '{family}'"))?;
        let data = converted.read().context("Failed to read converted font")?;
        let outline = OutlineFont::from_vec(data, font_size as f32)
            .with_context(|| format!("Failed to load converted font '{family}'"))?;
        let name = converted.family().unwrap_or(family.name()).to_string();
        info!("Loaded {name} at {font_size}px");
        Ok(Self { outline, name, _converted: Some(converted) })
    }

    pub fn from_file(path: &Path, font_size: u32) -> Result<Self> {
        let outline = OutlineFont::open(path, font_size as f32)
            .with_context(|| format!("Failed to load font: {}", path.display()))?;
        let name = path
            .file_stem()
            .map_or_else(|| "local_font".to_string(), |s| s.to_string_lossy().into_owned());
        info!("Loaded {name} from {}", path.display());
        Ok(Self { outline, name, _converted: None })
    }

    pub fn outline(&self) -> &OutlineFont {
        &self.outline
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
