//! Run configuration.
//!
//! Settings come in layers: built-in defaults, then an optional JSON file, then
//! command-line flags. Each layer is a [`Settings`] with every field optional;
//! [`RunConfig::resolve`] fills the gaps with defaults and validates the result.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Default font family.
pub const DEFAULT_FONT_NAME: &str = "Roboto";

/// Default nominal font size (pixels per em).
pub const DEFAULT_FONT_SIZE: u32 = 64;

/// Default canvas edge length in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 128;

/// Default output directory.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output";

/// Default character set.
pub const DEFAULT_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?/\\ ";

/// Default location of the mapping file.
pub const DEFAULT_MAPPING_PATH: &str = "character_mapping.txt";

/// Where the font comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A family name or specimen URL on the font service.
    Family(String),
    /// A local TrueType/OpenType file.
    File(PathBuf),
}

/// What to do when a single character cannot be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphErrorPolicy {
    #[default]
    Abort,
    Skip,
}

/// One configuration layer. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub font_name: Option<String>,
    pub font_file: Option<PathBuf>,
    pub font_size: Option<u32>,
    pub image_size: Option<u32>,
    pub output_folder: Option<PathBuf>,
    pub characters: Option<String>,
    pub mapping_path: Option<PathBuf>,
    pub fallback_font: Option<PathBuf>,
    pub skip_invalid_glyphs: Option<bool>,
}

impl Settings {
    /// Read a JSON settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Layer `overrides` on top of `self`.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            font_name: overrides.font_name.or(self.font_name),
            font_file: overrides.font_file.or(self.font_file),
            font_size: overrides.font_size.or(self.font_size),
            image_size: overrides.image_size.or(self.image_size),
            output_folder: overrides.output_folder.or(self.output_folder),
            characters: overrides.characters.or(self.characters),
            mapping_path: overrides.mapping_path.or(self.mapping_path),
            fallback_font: overrides.fallback_font.or(self.fallback_font),
            skip_invalid_glyphs: overrides.skip_invalid_glyphs.or(self.skip_invalid_glyphs),
        }
    }
}

/// Fully resolved configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub font: FontSource,
    pub font_size: u32,
    pub image_size: u32,
    pub output_folder: PathBuf,
    pub characters: String,
    pub mapping_path: PathBuf,
    /// Font loaded when acquisition fails. Without one, acquisition errors abort the run.
    pub fallback_font: Option<PathBuf>,
    pub glyph_errors: GlyphErrorPolicy,
}

impl RunConfig {
    /// Fill unset fields with defaults and validate.
    ///
    /// A local font file takes precedence over a family name.
    pub fn resolve(settings: Settings) -> Result<Self> {
        let font = match (settings.font_file, settings.font_name) {
            (Some(path), _) => FontSource::File(path),
            (None, Some(name)) if !name.trim().is_empty() => FontSource::Family(name),
            (None, Some(_)) => bail!("Font name is empty"),
            (None, None) => FontSource::Family(DEFAULT_FONT_NAME.to_string()),
        };

        let font_size = settings.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let image_size = settings.image_size.unwrap_or(DEFAULT_IMAGE_SIZE);
        if font_size == 0 {
            bail!("Font size must be greater than zero");
        }
        if image_size == 0 {
            bail!("Image size must be greater than zero");
        }

        let characters = settings.characters.unwrap_or_else(|| DEFAULT_CHARACTERS.to_string());
        if characters.is_empty() {
            bail!("Character set is empty");
        }

        Ok(Self {
            font,
            font_size,
            image_size,
            output_folder: settings
                .output_folder
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FOLDER)),
            characters,
            mapping_path: settings
                .mapping_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_PATH)),
            fallback_font: settings.fallback_font,
            glyph_errors: if settings.skip_invalid_glyphs.unwrap_or(false) {
                GlyphErrorPolicy::Skip
            } else {
                GlyphErrorPolicy::Abort
            },
        })
    }

    /// Reference prefix used in the mapping table.
    pub fn output_reference(&self) -> String {
        self.output_folder.display().to_string()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            font: FontSource::Family(DEFAULT_FONT_NAME.to_string()),
            font_size: DEFAULT_FONT_SIZE,
            image_size: DEFAULT_IMAGE_SIZE,
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            characters: DEFAULT_CHARACTERS.to_string(),
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            fallback_font: None,
            glyph_errors: GlyphErrorPolicy::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::resolve(Settings::default()).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.font, FontSource::Family("Roboto".to_string()));
        assert!(config.characters.ends_with("/\\ "));
    }

    #[test]
    fn test_flags_override_file() {
        let file = Settings {
            font_name: Some("Lobster".into()),
            image_size: Some(64),
            characters: Some("abc".into()),
            ..Default::default()
        };
        let flags = Settings { image_size: Some(256), ..Default::default() };

        let config = RunConfig::resolve(file.merge(flags)).unwrap();

        assert_eq!(config.font, FontSource::Family("Lobster".into()));
        assert_eq!(config.image_size, 256);
        assert_eq!(config.characters, "abc");
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_font_file_wins_over_name() {
        let settings = Settings {
            font_name: Some("Roboto".into()),
            font_file: Some("local.ttf".into()),
            ..Default::default()
        };
        let config = RunConfig::resolve(settings).unwrap();
        assert_eq!(config.font, FontSource::File("local.ttf".into()));
    }

    #[test]
    fn test_rejects_invalid_values() {
        for settings in [
            Settings { image_size: Some(0), ..Default::default() },
            Settings { font_size: Some(0), ..Default::default() },
            Settings { characters: Some(String::new()), ..Default::default() },
            Settings { font_name: Some("  ".into()), ..Default::default() },
        ] {
            assert!(RunConfig::resolve(settings).is_err());
        }
    }

    #[test]
    fn test_skip_invalid_glyphs() {
        let settings = Settings { skip_invalid_glyphs: Some(true), ..Default::default() };
        assert_eq!(RunConfig::resolve(settings).unwrap().glyph_errors, GlyphErrorPolicy::Skip);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        write(
            &path,
            r#"{
                "font_name": "Open Sans",
                "font_size": 48,
                "image_size": 96,
                "output_folder": "sprites",
                "characters": "Ab1!"
            }"#,
        )
        .unwrap();

        let config = RunConfig::resolve(Settings::load(&path).unwrap()).unwrap();

        assert_eq!(config.font, FontSource::Family("Open Sans".into()));
        assert_eq!(config.font_size, 48);
        assert_eq!(config.image_size, 96);
        assert_eq!(config.output_reference(), "sprites");
        assert_eq!(config.characters, "Ab1!");
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        write(&path, r#"{"font": "Roboto"}"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }
}
