//! Error types for font acquisition.

use std::{io, result};

use reqwest::StatusCode;

/// Errors that can occur while acquiring a font from the web.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP {status} fetching style sheet {url}")]
    HttpFailure { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no font asset URL found in style sheet for '{family}'")]
    NoAssetFound { family: String },

    #[error("HTTP {status} downloading font asset {url}")]
    DownloadFailed { url: String, status: StatusCode },

    #[error("failed to convert font asset: {0}")]
    ConversionFailed(#[from] glyphsheet_font_woff2::Error),

    #[error("temporary font file error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
