//! # Occlusion Explain
//!
//! Occlusion-sensitivity saliency maps for image classification models.
//! The explainer occludes square regions of an input image with a
//! constant grey patch, re-runs the model, and records how much the
//! confidence for a target class drops, yielding a heatmap of the
//! regions the model relies on.
//!
//! ## Modules
//!
//! - `model`: the inference contract a classifier must implement
//! - `explain`: the occlusion sweep and batch explanation
//! - `imaging`: grey-patch occlusion and bilinear resizing
//! - `display`: colormaps, heatmap overlays and grid composition
//! - `utils`: errors, logging, and file saving
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ndarray::Array3;
//! use occlusion_explain::{Colormap, Model, OcclusionSensitivity};
//!
//! let explainer = OcclusionSensitivity::default();
//! let map = explainer.sensitivity_map(&model, &image, class_index, 16)?;
//! let grid = explainer.explain(&images, &model, class_index, 16, Colormap::Viridis)?;
//! explainer.save(&grid, "output".as_ref(), "occlusion.png")?;
//! ```

pub mod display;
pub mod explain;
pub mod imaging;
pub mod model;
pub mod utils;

// Re-export commonly used items for convenience
pub use display::{grid_display, heatmap_display, Colormap};
pub use explain::OcclusionSensitivity;
pub use imaging::{apply_grey_patch, resize_bilinear};
pub use model::Model;
pub use utils::error::{ExplainError, Result};
pub use utils::saver::save_rgb;

/// Constant grey value used to occlude a patch, the midpoint of the
/// 0-255 pixel range
pub const GREY_PATCH_VALUE: f32 = 127.5;

/// Weight of the source image when blending the colorized heatmap over
/// it; the heatmap receives the remainder
pub const HEATMAP_IMAGE_WEIGHT: f32 = 0.7;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
