use anyhow::{Context, Result};
use glyphsheet_font_fetch::{Fetch, FontFamily, HttpClient, StyleSheetResolver};

/// Outcome of looking a family up on the font service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCheck {
    pub family: FontFamily,
    pub exists: bool,
}

impl FontCheck {
    pub fn message(&self) -> String {
        if self.exists {
            format!("✓ Font '{}' is valid", self.family)
        } else {
            format!("✗ Font '{}' not found on Google Fonts", self.family)
        }
    }
}

/// Check whether a family name or specimen URL names a known family.
pub fn check_font(input: &str) -> Result<FontCheck> {
    let client = HttpClient::new().context("Failed to create HTTP client")?;
    check_font_with(&client, input)
}

pub fn check_font_with<F: Fetch>(fetcher: F, input: &str) -> Result<FontCheck> {
    let family = FontFamily::parse(input);
    let exists = StyleSheetResolver::new(fetcher)
        .exists(&family)
        .with_context(|| format!("Failed to look up font '{family}'"))?;
    Ok(FontCheck { family, exists })
}
