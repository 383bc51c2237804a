//! Occlusion Sensitivity Module
//!
//! Measures how much a model's confidence for a target class drops when
//! square regions of the input are replaced with grey, producing a
//! sensitivity map that highlights the regions the model relies on.
//!
//! The sweep is fully sequential: one baseline inference on the
//! unmodified image, then one inference per grid cell with that cell's
//! region occluded. Each cell of the map records
//! `baseline - occluded_confidence`, and the low-resolution map is
//! bilinearly upsampled to the image's height and width before being
//! returned.

use std::path::Path;

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array2, Array3};
use tracing::debug;

use crate::display::{grid_display, heatmap_display, Colormap};
use crate::imaging::{apply_grey_patch, resize_bilinear};
use crate::model::Model;
use crate::utils::error::{ExplainError, Result};
use crate::utils::saver::save_rgb;

/// Occlusion-sensitivity explainer for image classification models
#[derive(Debug, Clone, Default)]
pub struct OcclusionSensitivity {
    /// Batch-size hint forwarded to the model; the sweep itself always
    /// submits one image at a time
    pub batch_size: Option<usize>,
}

impl OcclusionSensitivity {
    /// Create an explainer with an optional batch-size hint.
    pub fn new(batch_size: Option<usize>) -> Self {
        Self { batch_size }
    }

    /// Confidence of `model` for `class_index` on a single image.
    fn confidence<M: Model>(
        &self,
        model: &M,
        image: &Array3<f32>,
        class_index: usize,
    ) -> Result<f32> {
        let batch_size = self.batch_size.unwrap_or(1);
        let predictions = model.predict(std::slice::from_ref(image), batch_size)?;
        let scores = predictions
            .first()
            .ok_or_else(|| ExplainError::Model("model returned no predictions".to_string()))?;
        scores.get(class_index).copied().ok_or_else(|| {
            ExplainError::InvalidInput(format!(
                "class index {} out of range for {} classes",
                class_index,
                scores.len()
            ))
        })
    }

    /// Compute the sensitivity map of `image` for `class_index`.
    ///
    /// The map has one cell per `patch_size` x `patch_size` region
    /// (`ceil(H/p)` x `ceil(W/p)` cells; boundary regions are clipped to
    /// the image bounds) and is resized to `(H, W)` before being
    /// returned.
    pub fn sensitivity_map<M: Model>(
        &self,
        model: &M,
        image: &Array3<f32>,
        class_index: usize,
        patch_size: usize,
    ) -> Result<Array2<f32>> {
        if patch_size == 0 {
            return Err(ExplainError::InvalidInput(
                "patch size must be positive".to_string(),
            ));
        }

        let (height, width, _channels) = image.dim();
        let grid_rows = height.div_ceil(patch_size);
        let grid_cols = width.div_ceil(patch_size);
        let mut map = Array2::<f32>::zeros((grid_rows, grid_cols));

        let baseline = self.confidence(model, image, class_index)?;
        debug!(baseline, class_index, patch_size, "computed baseline confidence");

        let progress = ProgressBar::new((grid_rows * grid_cols) as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} patches")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for (row, top) in (0..height).step_by(patch_size).enumerate() {
            for (col, left) in (0..width).step_by(patch_size).enumerate() {
                let occluded = apply_grey_patch(image, top, left, patch_size);
                let confidence = self.confidence(model, &occluded, class_index)?;
                map[[row, col]] = baseline - confidence;
                progress.inc(1);
            }
        }
        progress.finish_and_clear();

        Ok(resize_bilinear(&map, height, width))
    }

    /// Explain a batch of images as one composite heatmap grid.
    ///
    /// Computes the sensitivity map of every image, renders each as a
    /// colorized overlay on its source, and arranges the overlays into a
    /// near-square grid. The grid is returned, not persisted.
    pub fn explain<M: Model>(
        &self,
        images: &[Array3<f32>],
        model: &M,
        class_index: usize,
        patch_size: usize,
        colormap: Colormap,
    ) -> Result<RgbImage> {
        let mut heatmaps = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            debug!(index, total = images.len(), "explaining image");
            let map = self.sensitivity_map(model, image, class_index, patch_size)?;
            heatmaps.push(heatmap_display(&map, image, colormap)?);
        }
        grid_display(&heatmaps)
    }

    /// Save a previously computed grid under `output_dir/output_name`.
    pub fn save(&self, grid: &RgbImage, output_dir: &Path, output_name: &str) -> Result<()> {
        save_rgb(grid, output_dir, output_name)
    }
}
