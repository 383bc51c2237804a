//! Display module for rendering sensitivity maps
//!
//! This module provides:
//! - Colormaps for mapping unit-interval scalars to RGB
//! - Heatmap overlays blending a colorized map onto its source image
//! - Grid composition of multiple same-shaped images

pub mod grid;
pub mod heatmap;

pub use grid::grid_display;
pub use heatmap::{heatmap_display, Colormap};
