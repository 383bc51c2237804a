//! Grey-Patch Occlusion Module
//!
//! Replaces a square region of an image with a constant grey value,
//! simulating the removal of information from that region.

use ndarray::{s, Array3};

use crate::GREY_PATCH_VALUE;

/// Returns a copy of `image` with the square region starting at
/// `(top_left_row, top_left_col)` overwritten with [`GREY_PATCH_VALUE`]
/// across all channels.
///
/// Regions that extend past the image boundary are clipped: a boundary
/// patch covers only the in-bounds remainder of the image. A start
/// coordinate at or past the image edge leaves the copy untouched.
pub fn apply_grey_patch(
    image: &Array3<f32>,
    top_left_row: usize,
    top_left_col: usize,
    patch_size: usize,
) -> Array3<f32> {
    let (height, width, _channels) = image.dim();
    let mut patched = image.clone();

    if top_left_row >= height || top_left_col >= width {
        return patched;
    }

    let row_end = (top_left_row + patch_size).min(height);
    let col_end = (top_left_col + patch_size).min(width);
    patched
        .slice_mut(s![top_left_row..row_end, top_left_col..col_end, ..])
        .fill(GREY_PATCH_VALUE);

    patched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_overwrites_region_with_grey() {
        let image = Array3::<f32>::from_elem((4, 4, 3), 100.0);
        let patched = apply_grey_patch(&image, 0, 0, 2);

        for row in 0..4 {
            for col in 0..4 {
                for channel in 0..3 {
                    let expected = if row < 2 && col < 2 {
                        GREY_PATCH_VALUE
                    } else {
                        100.0
                    };
                    assert_eq!(patched[[row, col, channel]], expected);
                }
            }
        }
    }

    #[test]
    fn test_original_image_is_untouched() {
        let image = Array3::<f32>::from_elem((3, 3, 1), 42.0);
        let _patched = apply_grey_patch(&image, 1, 1, 2);
        assert!(image.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_boundary_patch_is_clipped() {
        // 5x5 image, patch 2 starting at (4, 4): only the corner pixel changes
        let image = Array3::<f32>::from_elem((5, 5, 1), 10.0);
        let patched = apply_grey_patch(&image, 4, 4, 2);

        let changed = patched.iter().filter(|&&v| v == GREY_PATCH_VALUE).count();
        assert_eq!(changed, 1);
        assert_eq!(patched[[4, 4, 0]], GREY_PATCH_VALUE);
    }

    #[test]
    fn test_start_past_edge_is_no_op() {
        let image = Array3::<f32>::from_elem((3, 3, 1), 7.0);
        let patched = apply_grey_patch(&image, 3, 0, 2);
        assert_eq!(patched, image);
    }

    #[test]
    fn test_full_image_patch() {
        let image = Array3::<f32>::from_elem((4, 4, 3), 200.0);
        let patched = apply_grey_patch(&image, 0, 0, 4);
        assert!(patched.iter().all(|&v| v == GREY_PATCH_VALUE));
    }
}
