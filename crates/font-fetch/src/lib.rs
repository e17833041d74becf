//! Font acquisition from the Google Fonts CSS service.
//!
//! A family name is turned into a style sheet request, the style sheet is
//! searched for a WOFF2 asset (preferring the latin subset), and the asset is
//! downloaded and converted into a temporary TrueType file.
//!
//! # Example
//!
//! ```no_run
//! use glyphsheet_font_fetch::{FontAcquirer, FontFamily, HttpClient};
//!
//! let acquirer = FontAcquirer::new(HttpClient::new().unwrap());
//! let font = acquirer.acquire_family(&FontFamily::new("Roboto")).unwrap();
//! println!("{}", font.path().display());
//! ```

mod asset;
mod error;
mod family;
mod http;
mod stylesheet;

pub use asset::{
    AcquiredFont, FontAcquirer, FontAssetConverter, convert_to_temp, convert_to_temp_in,
};
pub use error::{Error, Error as AcquisitionError, Result};
pub use family::{CSS_API_URL, FontFamily};
pub use http::{Fetch, HttpClient, HttpResponse, browser_headers};
pub use reqwest::{Error as HttpError, StatusCode};
pub use stylesheet::{
    FontAssetLocation, LATIN_SUBSET_MARKER, StyleSheetResolver, is_latin_tagged, select_asset_url,
};
