//! Web font container conversion.
//!
//! Web font services hand out WOFF2 containers, which outline renderers cannot
//! load directly. This crate turns such a container back into a plain sfnt
//! (TrueType/OpenType) binary and checks that the result parses.
//!
//! # Example
//!
//! ```no_run
//! use glyphsheet_font_woff2::to_sfnt;
//!
//! let woff2_data: &[u8] = &[];
//! let ttf_data = to_sfnt(woff2_data).unwrap();
//! ```

use std::result;

use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider};

/// WOFF2 container signature.
pub const WOFF2_MAGIC: [u8; 4] = *b"wOF2";

/// sfnt versions accepted without conversion.
const SFNT_MAGICS: &[[u8; 4]] = &[[0x00, 0x01, 0x00, 0x00], *b"OTTO", *b"true"];

/// Name ID of the font family name.
const NAME_ID_FAMILY: u16 = 1;

/// Errors that can occur while converting a font container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("font data is too short to identify ({0} bytes)")]
    TooShort(usize),

    #[error("unrecognized font container signature {0:02x?}")]
    UnknownFormat([u8; 4]),

    #[error("failed to decode WOFF2 container: {0}")]
    Decode(String),

    #[error("converted font does not parse: {0}")]
    Parse(#[from] ReadError),
}

pub type Result<T> = result::Result<T, Error>;

/// Container format of a font binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Woff2,
    Sfnt,
}

/// Identify the container format from the leading signature.
pub fn sniff(data: &[u8]) -> Result<Container> {
    let signature: [u8; 4] = data
        .get(..4)
        .and_then(|head| head.try_into().ok())
        .ok_or(Error::TooShort(data.len()))?;

    if signature == WOFF2_MAGIC {
        Ok(Container::Woff2)
    } else if SFNT_MAGICS.contains(&signature) {
        Ok(Container::Sfnt)
    } else {
        Err(Error::UnknownFormat(signature))
    }
}

/// Convert font data to a directly loadable sfnt binary.
///
/// WOFF2 containers are decoded; sfnt data is passed through unchanged. In both
/// cases the result is parsed once to make sure a renderer can load it.
pub fn to_sfnt(data: &[u8]) -> Result<Vec<u8>> {
    let sfnt = match sniff(data)? {
        Container::Woff2 => {
            let mut input = data;
            woff2::decode::convert_woff2_to_ttf(&mut input)
                .map_err(|e| Error::Decode(format!("{e:?}")))?
        }
        Container::Sfnt => data.to_vec(),
    };

    let font = FontRef::new(&sfnt)?;
    debug!(
        "Converted {} bytes to {} byte sfnt ({} tables)",
        data.len(),
        sfnt.len(),
        font.table_directory.num_tables()
    );
    Ok(sfnt)
}

/// Read the family name (name ID 1) from sfnt data, if present.
pub fn family_name(data: &[u8]) -> Option<String> {
    let font = FontRef::new(data).ok()?;
    let name = font.name().ok()?;
    name.name_record()
        .iter()
        .filter(|record| record.name_id().to_u16() == NAME_ID_FAMILY)
        .find_map(|record| record.string(name.string_data()).ok())
        .map(|s| s.chars().collect())
}
