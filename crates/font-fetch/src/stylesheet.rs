//! Style sheet lookup and font asset URL extraction.

use log::{debug, info};

use crate::{
    error::{Error, Result},
    family::FontFamily,
    http::Fetch,
};

/// Marker of a binary font reference in a style sheet line.
const ASSET_MARKER: &str = ".woff2";

/// Opening token of a URL reference.
const URL_OPEN: &str = "url(";

/// Comment the font service places before the basic latin `@font-face` block.
pub const LATIN_SUBSET_MARKER: &str = "/* latin */";

/// Location of a downloadable font asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAssetLocation {
    pub url: String,
}

/// Resolves a font family to the URL of its binary font asset.
pub struct StyleSheetResolver<F> {
    fetcher: F,
}

impl<F: Fetch> StyleSheetResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch the family's style sheet and pick its font asset URL.
    pub fn resolve(&self, family: &FontFamily) -> Result<FontAssetLocation> {
        let url = family.css_url();
        info!("Requesting font: {family}");
        debug!("URL: {url}");

        let response =
            self.fetcher.get(&url).map_err(|source| Error::Request { url: url.clone(), source })?;
        if !response.status.is_success() {
            return Err(Error::HttpFailure { url, status: response.status });
        }

        let css = response.text();
        debug!("CSS response:\n{css}");

        let asset_url = select_asset_url(&css)
            .ok_or_else(|| Error::NoAssetFound { family: family.name().to_string() })?;
        info!("Font URL: {asset_url}");
        Ok(FontAssetLocation { url: asset_url })
    }

    /// Whether the font service knows the family.
    pub fn exists(&self, family: &FontFamily) -> Result<bool> {
        let url = family.lookup_url();
        let response = self.fetcher.get(&url).map_err(|source| Error::Request { url, source })?;
        Ok(response.status.is_success())
    }
}

/// Pick the font asset URL from a style sheet.
///
/// The first asset line in the latin block wins; without one, the first asset
/// line in the document is used.
pub fn select_asset_url(css: &str) -> Option<String> {
    let candidates: Vec<&str> = css.split('\n').filter(|line| is_asset_line(line)).collect();

    candidates
        .iter()
        .find(|line| is_latin_tagged(css, line))
        .or_else(|| candidates.first())
        .and_then(|line| extract_url(line))
}

/// Latin block detection: the document text before the line's first occurrence
/// mentions the latin subset marker.
pub fn is_latin_tagged(document: &str, line: &str) -> bool {
    document
        .find(line)
        .is_some_and(|pos| document[..pos].contains(LATIN_SUBSET_MARKER))
}

fn is_asset_line(line: &str) -> bool {
    line.contains(ASSET_MARKER) && line.contains(URL_OPEN)
}

/// Text inside `url(...)`, with one pair of surrounding quotes removed.
fn extract_url(line: &str) -> Option<String> {
    let start = line.find(URL_OPEN)? + URL_OPEN.len();
    let rest = &line[start..];
    let raw = rest.find(')').map_or(rest, |end| &rest[..end]);
    Some(strip_quotes(raw).to_string())
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
