//! Saver Module
//!
//! Writes a rendered explanation grid to disk. The output directory is
//! created if missing and the image format follows the file extension,
//! defaulting to PNG when the name has none.

use std::fs;
use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::utils::error::{ExplainError, Result};

/// Write `grid` as an image file named `output_name` inside `output_dir`.
pub fn save_rgb(grid: &RgbImage, output_dir: &Path, output_name: &str) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut path = output_dir.join(output_name);
    if path.extension().is_none() {
        path.set_extension("png");
    }

    grid.save(&path).map_err(|e| {
        ExplainError::Image(format!("failed to write {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), "saved explanation grid");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("output").join("maps");
        let grid = RgbImage::from_pixel(4, 4, Rgb([120, 30, 200]));

        save_rgb(&grid, &nested, "grid.png").unwrap();

        let written = nested.join("grid.png");
        assert!(written.exists());
        let reloaded = image::open(&written).unwrap().to_rgb8();
        assert_eq!(reloaded.get_pixel(2, 2), &Rgb([120, 30, 200]));
    }

    #[test]
    fn test_missing_extension_defaults_to_png() {
        let dir = tempdir().unwrap();
        let grid = RgbImage::new(2, 2);

        save_rgb(&grid, dir.path(), "sensitivity").unwrap();
        assert!(dir.path().join("sensitivity.png").exists());
    }
}
