//! Bilinear Resize Module
//!
//! Resizes a 2D map to a target shape with half-pixel-centered bilinear
//! interpolation. Sampling is edge-clamped, so every output value is a
//! convex combination of input values and the operation is fully
//! deterministic.

use ndarray::Array2;

/// Resize `map` to `(out_height, out_width)` with bilinear interpolation.
///
/// Source coordinates are clamped to the map bounds, so a 1x1 input
/// broadcasts its single value and a constant input stays constant at
/// any output size. An empty input or target yields an all-zero array.
pub fn resize_bilinear(map: &Array2<f32>, out_height: usize, out_width: usize) -> Array2<f32> {
    let (in_height, in_width) = map.dim();
    let mut out = Array2::<f32>::zeros((out_height, out_width));
    if in_height == 0 || in_width == 0 || out_height == 0 || out_width == 0 {
        return out;
    }

    let scale_y = in_height as f32 / out_height as f32;
    let scale_x = in_width as f32 / out_width as f32;

    for row in 0..out_height {
        let src_y = ((row as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (in_height - 1) as f32);
        let y0 = src_y.floor() as usize;
        let y1 = (y0 + 1).min(in_height - 1);
        let frac_y = src_y - y0 as f32;

        for col in 0..out_width {
            let src_x = ((col as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (in_width - 1) as f32);
            let x0 = src_x.floor() as usize;
            let x1 = (x0 + 1).min(in_width - 1);
            let frac_x = src_x - x0 as f32;

            let top = map[[y0, x0]] * (1.0 - frac_x) + map[[y0, x1]] * frac_x;
            let bottom = map[[y1, x0]] * (1.0 - frac_x) + map[[y1, x1]] * frac_x;
            out[[row, col]] = top * (1.0 - frac_y) + bottom * frac_y;
        }
    }

    out
}
