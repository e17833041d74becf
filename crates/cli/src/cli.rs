//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use glyphsheet_core::{
    RunConfig, Settings, check_font, clean,
    config::{DEFAULT_CHARACTERS, DEFAULT_MAPPING_PATH, DEFAULT_OUTPUT_FOLDER},
    emit, generate,
};

#[derive(Parser)]
#[command(name = "glyphsheet")]
#[command(about = "Render a typeface into per-character sprite images and a character mapping")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Generation settings. Flags override values from `--config`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Google Fonts family name or specimen URL
    #[arg(long)]
    pub font_name: Option<String>,
    /// Local .ttf/.otf file, used instead of --font-name
    #[arg(long)]
    pub font_file: Option<PathBuf>,
    /// Nominal font size in pixels per em
    #[arg(long)]
    pub font_size: Option<u32>,
    /// Edge length of each square image in pixels
    #[arg(long)]
    pub image_size: Option<u32>,
    #[arg(short, long)]
    pub output_folder: Option<PathBuf>,
    #[arg(long)]
    pub characters: Option<String>,
    #[arg(long)]
    pub mapping_path: Option<PathBuf>,
    /// Font file to use when the font cannot be acquired
    #[arg(long)]
    pub fallback_font: Option<PathBuf>,
    /// Skip characters the font cannot render instead of aborting
    #[arg(long)]
    pub skip_invalid_glyphs: bool,
}

impl GenerateArgs {
    /// Layer the flags over the config file, if any.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let flags = Settings {
            font_name: self.font_name.clone(),
            font_file: self.font_file.clone(),
            font_size: self.font_size,
            image_size: self.image_size,
            output_folder: self.output_folder.clone(),
            characters: self.characters.clone(),
            mapping_path: self.mapping_path.clone(),
            fallback_font: self.fallback_font.clone(),
            skip_invalid_glyphs: self.skip_invalid_glyphs.then_some(true),
        };
        Ok(file.merge(flags))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate glyph images and the character mapping
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Check that a font family exists on Google Fonts
    Check {
        /// Family name or specimen URL
        font: String,
    },
    /// Print the character mapping without rendering
    Mapping {
        #[arg(long, default_value = DEFAULT_CHARACTERS)]
        characters: String,
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FOLDER)]
        output_folder: String,
    },
    /// Remove generated images and the mapping file
    Clean {
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FOLDER)]
        output_folder: PathBuf,
        #[arg(long, default_value = DEFAULT_MAPPING_PATH)]
        mapping_path: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { args } => {
                let config = RunConfig::resolve(args.settings()?)?;
                info!("Configuration: {config:?}");
                let report = generate(&config)?;
                println!(
                    "Success! Generated {} images for '{}'.",
                    report.images.len(),
                    report.font_name
                );
                if !report.skipped.is_empty() {
                    println!("Skipped {} characters:", report.skipped.len());
                    for skipped in &report.skipped {
                        let spec = &skipped.spec;
                        println!("  '{}' ({}): {}", spec.ch, spec.role, skipped.reason);
                    }
                }
            }
            Commands::Check { font } => {
                println!("{}", check_font(&font)?.message());
            }
            Commands::Mapping { characters, output_folder } => {
                print!("{}", emit(&characters, &output_folder));
            }
            Commands::Clean { output_folder, mapping_path } => {
                clean(&output_folder, &mapping_path)?;
            }
        }
        Ok(())
    }
}
