//! Glyphsheet CLI library.

pub mod cli;
