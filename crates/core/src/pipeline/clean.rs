use std::{fs::remove_file, path::Path};

use anyhow::{Context, Result};

use crate::io::generated_images;

/// Remove generated glyph images and the mapping file.
///
/// Other files in the output folder are left alone. Returns the number of
/// files removed.
pub fn clean(output_folder: &Path, mapping_path: &Path) -> Result<usize> {
    let mut removed = 0;

    if output_folder.exists() {
        for image in generated_images(output_folder)? {
            remove_file(&image)
                .with_context(|| format!("Failed to remove {}", image.display()))?;
            removed += 1;
        }
        println!("Removed {removed} images from {}", output_folder.display());
    } else {
        println!("Skipped {} (not found)", output_folder.display());
    }

    if mapping_path.exists() {
        remove_file(mapping_path)
            .with_context(|| format!("Failed to remove {}", mapping_path.display()))?;
        println!("Removed {}", mapping_path.display());
        removed += 1;
    } else {
        println!("Skipped {} (not found)", mapping_path.display());
    }

    println!("Cleaned {removed} files");
    Ok(removed)
}
