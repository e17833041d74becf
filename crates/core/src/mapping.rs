//! Character-to-image lookup table.
//!
//! The table is a case dispatch on the input character:
//!
//! ```text
//! (InChar : char).ToImage():texture=
//!     case(InChar):
//!         'a' => output.custom_font_L_a
//!         'A' => output.custom_font_U_A
//!         _ => output.custom_font_S_space
//! ```

use std::{fmt, fs::write, path::Path};

use anyhow::{Context, Result};
use glyphsheet_charset::{CharacterSpec, IMAGE_PREFIX, Role};

use crate::io::ensure_parent_dir;

pub const MAPPING_HEADER: &str = "(InChar : char).ToImage():texture=";
const CASE_LINE: &str = "    case(InChar):";
const ENTRY_INDENT: &str = "        ";

/// One `'<char>' => <reference>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub ch: char,
    pub role: Role,
    pub reference: String,
}

/// Ordered mapping entries plus the wildcard default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    default_reference: String,
}

impl MappingTable {
    /// Build the table for `characters`, referencing images under `output_reference`.
    ///
    /// Alphabetic characters get a lowercase entry followed by an uppercase one.
    /// The default always points at the space image, whether or not space is in
    /// the set.
    pub fn new(characters: &str, output_reference: &str) -> Self {
        let entries = CharacterSpec::derive_all(characters)
            .into_iter()
            .map(|spec| MappingEntry {
                ch: spec.ch,
                role: spec.role,
                reference: format!("{output_reference}.{}", spec.file_stem()),
            })
            .collect();

        Self {
            entries,
            default_reference: format!("{output_reference}.{IMAGE_PREFIX}S_space"),
        }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{MAPPING_HEADER}")?;
        writeln!(f, "{CASE_LINE}")?;
        for entry in &self.entries {
            writeln!(f, "{ENTRY_INDENT}'{}' => {}", entry.ch, entry.reference)?;
        }
        writeln!(f, "{ENTRY_INDENT}_ => {}", self.default_reference)
    }
}

/// Render the mapping text for `characters`.
pub fn emit(characters: &str, output_reference: &str) -> String {
    MappingTable::new(characters, output_reference).to_string()
}

/// Write the mapping text to `path`, replacing any previous content.
pub fn write_mapping(path: &Path, characters: &str, output_reference: &str) -> Result<String> {
    let text = emit(characters, output_reference);
    ensure_parent_dir(path)?;
    write(path, &text)
        .with_context(|| format!("Failed to write mapping: {}", path.display()))?;
    Ok(text)
}
