//! Grid Display Module
//!
//! Arranges a collection of same-shaped images into a single near-square
//! composite, padding unused cells with black tiles.

use image::{imageops, RgbImage};

use crate::utils::error::{ExplainError, Result};

/// Arrange `images` into one composite grid image.
///
/// The layout uses `ceil(sqrt(n))` columns and as many rows as needed;
/// trailing cells stay black. All images must share the same dimensions.
pub fn grid_display(images: &[RgbImage]) -> Result<RgbImage> {
    let first = images.first().ok_or_else(|| {
        ExplainError::InvalidInput("cannot arrange an empty image collection".to_string())
    })?;
    let (tile_width, tile_height) = first.dimensions();
    if tile_width == 0 || tile_height == 0 {
        return Err(ExplainError::InvalidInput(
            "cannot arrange zero-sized images".to_string(),
        ));
    }
    for (index, image) in images.iter().enumerate() {
        if image.dimensions() != (tile_width, tile_height) {
            return Err(ExplainError::InvalidInput(format!(
                "image {} has dimensions {:?}, expected {:?}",
                index,
                image.dimensions(),
                (tile_width, tile_height)
            )));
        }
    }

    let columns = (images.len() as f64).sqrt().ceil() as u32;
    let rows = (images.len() as u32).div_ceil(columns);

    // RgbImage::new zero-fills, which gives the black padding tiles
    let mut grid = RgbImage::new(columns * tile_width, rows * tile_height);
    for (index, image) in images.iter().enumerate() {
        let col = index as u32 % columns;
        let row = index as u32 / columns;
        imageops::replace(
            &mut grid,
            image,
            (col * tile_width) as i64,
            (row * tile_height) as i64,
        );
    }

    Ok(grid)
}
