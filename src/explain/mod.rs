//! Explanation module for occlusion-based attribution
//!
//! This module provides:
//! - Per-image sensitivity-map computation via a grey-patch sweep
//! - Batch explanation producing a composite heatmap grid
//! - Saving of computed grids through the file collaborator

pub mod occlusion;

pub use occlusion::OcclusionSensitivity;
