//! Glyphsheet core - turns a typeface into per-character sprite images and a
//! lookup table.

pub mod config;
pub mod io;
pub mod mapping;
pub mod pipeline;

pub use config::{FontSource, GlyphErrorPolicy, RunConfig, Settings};
pub use glyphsheet_charset::{CharacterSpec, Role};
pub use mapping::{MappingTable, emit, write_mapping};
pub use pipeline::{
    FontCheck, LoadedFont, RunReport, check_font, check_font_with, clean, generate,
    generate_with_font,
};
