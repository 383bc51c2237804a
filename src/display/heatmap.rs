//! Heatmap Display Module
//!
//! Turns a raw 2D sensitivity map into a colorized RGB overlay on its
//! source image: the map is min-max normalized to the unit interval,
//! mapped through a colormap, and alpha-blended over the image.

use image::RgbImage;
use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::imaging::resize_bilinear;
use crate::utils::error::{ExplainError, Result};
use crate::HEATMAP_IMAGE_WEIGHT;

/// Anchor colors for the viridis colormap, evenly spaced over [0, 1]
const VIRIDIS_ANCHORS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Anchor colors for the magma colormap, evenly spaced over [0, 1]
const MAGMA_ANCHORS: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

/// Colormap used when rendering a sensitivity map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Perceptually uniform purple-to-yellow map (the default)
    #[default]
    Viridis,
    /// Perceptually uniform black-to-light map
    Magma,
    /// Plain intensity ramp
    Grayscale,
}

impl Colormap {
    /// Map a unit-interval value to an RGB color.
    ///
    /// Values outside [0, 1] are clamped.
    pub fn rgb(self, value: f32) -> [u8; 3] {
        let value = value.clamp(0.0, 1.0);
        match self {
            Colormap::Viridis => lerp_anchors(&VIRIDIS_ANCHORS, value),
            Colormap::Magma => lerp_anchors(&MAGMA_ANCHORS, value),
            Colormap::Grayscale => {
                let level = (value * 255.0).round() as u8;
                [level, level, level]
            }
        }
    }
}

/// Linear interpolation between evenly spaced anchor colors
fn lerp_anchors(anchors: &[[u8; 3]; 9], value: f32) -> [u8; 3] {
    let position = value * (anchors.len() - 1) as f32;
    let low = position.floor() as usize;
    let high = (low + 1).min(anchors.len() - 1);
    let frac = position - low as f32;

    let mut color = [0u8; 3];
    for channel in 0..3 {
        let a = anchors[low][channel] as f32;
        let b = anchors[high][channel] as f32;
        color[channel] = (a + (b - a) * frac).round() as u8;
    }
    color
}

/// Min-max normalize `values` into [0, 1] in place.
///
/// A (near-)constant input collapses to all zeros instead of dividing by
/// a vanishing range.
fn normalize_unit_interval(values: &mut [f32], epsilon: f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &value in values.iter() {
        min = min.min(value);
        max = max.max(value);
    }
    let range = max - min;
    if !range.is_finite() || range <= epsilon {
        values.fill(0.0);
        return;
    }
    for value in values.iter_mut() {
        *value = (*value - min) / range;
    }
}

/// Read pixel `(row, col)` of a `(H, W, C)` float image as RGB.
///
/// Single-channel images are replicated across RGB; extra channels
/// beyond the first three are ignored. Values are treated as 0-255.
fn source_rgb(image: &Array3<f32>, row: usize, col: usize) -> Result<[f32; 3]> {
    let channels = image.dim().2;
    match channels {
        0 => Err(ExplainError::Image(
            "cannot render an image with zero channels".to_string(),
        )),
        1 => {
            let v = image[[row, col, 0]];
            Ok([v, v, v])
        }
        _ => Ok([
            image[[row, col, 0]],
            image[[row, col, 1]],
            image[[row, col, 2]],
        ]),
    }
}

/// Render `map` as a colorized heatmap blended over `image`.
///
/// The map is resized to the image's height and width if it is not
/// already full resolution, normalized to [0, 1], colorized with
/// `colormap` and blended with weight [`HEATMAP_IMAGE_WEIGHT`] on the
/// source image.
pub fn heatmap_display(
    map: &Array2<f32>,
    image: &Array3<f32>,
    colormap: Colormap,
) -> Result<RgbImage> {
    let (height, width, _channels) = image.dim();
    if height == 0 || width == 0 {
        return Err(ExplainError::Image(
            "cannot render a heatmap for an empty image".to_string(),
        ));
    }

    let resized;
    let full_res = if map.dim() == (height, width) {
        map
    } else {
        resized = resize_bilinear(map, height, width);
        &resized
    };

    let mut values: Vec<f32> = full_res.iter().copied().collect();
    normalize_unit_interval(&mut values, 1e-6);

    let heat_weight = 1.0 - HEATMAP_IMAGE_WEIGHT;
    let mut output = RgbImage::new(width as u32, height as u32);
    for row in 0..height {
        for col in 0..width {
            let heat = colormap.rgb(values[row * width + col]);
            let src = source_rgb(image, row, col)?;
            let pixel = output.get_pixel_mut(col as u32, row as u32);
            for channel in 0..3 {
                let blended = src[channel].clamp(0.0, 255.0) * HEATMAP_IMAGE_WEIGHT
                    + heat[channel] as f32 * heat_weight;
                pixel[channel] = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_endpoints() {
        assert_eq!(Colormap::Viridis.rgb(0.0), [68, 1, 84]);
        assert_eq!(Colormap::Viridis.rgb(1.0), [253, 231, 37]);
        assert_eq!(Colormap::Grayscale.rgb(0.0), [0, 0, 0]);
        assert_eq!(Colormap::Grayscale.rgb(1.0), [255, 255, 255]);
    }

    #[test]
    fn test_colormap_clamps_out_of_range() {
        assert_eq!(Colormap::Magma.rgb(-1.0), Colormap::Magma.rgb(0.0));
        assert_eq!(Colormap::Magma.rgb(2.0), Colormap::Magma.rgb(1.0));
    }

    #[test]
    fn test_normalize_maps_to_unit_interval() {
        let mut values = vec![2.0, 4.0, 6.0];
        normalize_unit_interval(&mut values, 1e-6);
        assert_eq!(values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_constant_collapses_to_zero() {
        let mut values = vec![0.3; 5];
        normalize_unit_interval(&mut values, 1e-6);
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_overlay_dimensions_match_image() {
        let map = Array2::<f32>::zeros((2, 2));
        let image = Array3::<f32>::from_elem((6, 4, 3), 128.0);
        let overlay = heatmap_display(&map, &image, Colormap::Viridis).unwrap();
        assert_eq!(overlay.dimensions(), (4, 6));
    }

    #[test]
    fn test_single_channel_image_is_replicated() {
        let map = Array2::<f32>::zeros((3, 3));
        let image = Array3::<f32>::from_elem((3, 3, 1), 100.0);
        let overlay = heatmap_display(&map, &image, Colormap::Grayscale).unwrap();

        // constant map normalizes to zero heat, so every pixel is
        // 0.7 * 100 + 0.3 * 0 = 70 on all channels
        let pixel = overlay.get_pixel(1, 1);
        assert_eq!(pixel[0], 70);
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }

    #[test]
    fn test_blend_weights_source_and_heat() {
        // map: one cold and one hot cell, grayscale colormap, black image
        let map = Array2::from_shape_vec((1, 2), vec![0.0, 1.0]).unwrap();
        let image = Array3::<f32>::zeros((1, 2, 3));
        let overlay = heatmap_display(&map, &image, Colormap::Grayscale).unwrap();

        assert_eq!(overlay.get_pixel(0, 0)[0], 0);
        // hot cell: 0.7 * 0 + 0.3 * 255 = 76.5 -> 77
        assert_eq!(overlay.get_pixel(1, 0)[0], 77);
    }

    #[test]
    fn test_zero_channel_image_is_rejected() {
        let map = Array2::<f32>::zeros((2, 2));
        let image = Array3::<f32>::zeros((2, 2, 0));
        let result = heatmap_display(&map, &image, Colormap::Viridis);
        assert!(matches!(result, Err(ExplainError::Image(_))));
    }
}
