//! Error types for glyph rasterization.

use std::{io, path::PathBuf, result};

/// Errors that can occur while loading a font or rendering a glyph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load font: {0}")]
    Load(#[from] ab_glyph::InvalidFont),

    #[error("font cannot render '{ch}': {reason}")]
    InvalidFont { ch: char, reason: String },

    #[error("failed to write image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read font file: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
