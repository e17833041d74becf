//! Font asset download and conversion.

use std::{env::temp_dir, fs::read, io::Write, path::Path};

use glyphsheet_font_woff2::{family_name, to_sfnt};
use log::{debug, info};
use tempfile::{Builder, TempPath};

use crate::{
    error::{Error, Result},
    family::FontFamily,
    http::Fetch,
    stylesheet::{FontAssetLocation, StyleSheetResolver},
};

/// A converted outline font on disk.
///
/// The file is deleted when this value is dropped; deletion errors are ignored.
#[derive(Debug)]
pub struct AcquiredFont {
    path: TempPath,
    family: Option<String>,
}

impl AcquiredFont {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Family name recorded in the converted font, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(read(&self.path)?)
    }
}

/// Downloads font assets and converts them to loadable sfnt files.
pub struct FontAssetConverter<F> {
    fetcher: F,
}

impl<F: Fetch> FontAssetConverter<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Download the asset and convert it to a temporary TrueType file.
    pub fn acquire(&self, location: &FontAssetLocation) -> Result<AcquiredFont> {
        let url = &location.url;
        let response =
            self.fetcher.get(url).map_err(|source| Error::Request { url: url.clone(), source })?;
        if !response.status.is_success() {
            return Err(Error::DownloadFailed { url: url.clone(), status: response.status });
        }
        info!("Downloaded font asset ({} bytes)", response.body.len());

        convert_to_temp(&response.body)
    }
}

/// Persist container bytes to a temporary file, convert them, and write the
/// result to a second temporary file in the system temp directory.
pub fn convert_to_temp(container: &[u8]) -> Result<AcquiredFont> {
    convert_to_temp_in(container, &temp_dir())
}

/// Same as [`convert_to_temp`], with both temporary files created in `dir`.
///
/// The container file is removed on every path out of this function.
pub fn convert_to_temp_in(container: &[u8], dir: &Path) -> Result<AcquiredFont> {
    let mut woff2_file =
        Builder::new().prefix("glyphsheet-").suffix(".woff2").tempfile_in(dir)?;
    woff2_file.write_all(container)?;
    woff2_file.flush()?;
    debug!("Saved container to {}", woff2_file.path().display());

    let sfnt = to_sfnt(&read(woff2_file.path())?)?;
    drop(woff2_file);

    let mut ttf_file = Builder::new().prefix("glyphsheet-").suffix(".ttf").tempfile_in(dir)?;
    ttf_file.write_all(&sfnt)?;
    ttf_file.flush()?;

    let family = family_name(&sfnt);
    let path = ttf_file.into_temp_path();
    info!(
        "Converted to TTF: {} ({} bytes, family {})",
        path.display(),
        sfnt.len(),
        family.as_deref().unwrap_or("unknown")
    );
    Ok(AcquiredFont { path, family })
}

/// Resolves a family and acquires its converted font in one step.
pub struct FontAcquirer<F> {
    resolver: StyleSheetResolver<F>,
    converter: FontAssetConverter<F>,
}

impl<F: Fetch + Clone> FontAcquirer<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            resolver: StyleSheetResolver::new(fetcher.clone()),
            converter: FontAssetConverter::new(fetcher),
        }
    }
}

impl<F: Fetch> FontAcquirer<F> {
    pub fn acquire_family(&self, family: &FontFamily) -> Result<AcquiredFont> {
        let location = self.resolver.resolve(family)?;
        self.converter.acquire(&location)
    }
}
