//! Imaging module for array-level image operations
//!
//! This module provides:
//! - Grey-patch occlusion for masking square image regions
//! - Deterministic bilinear resizing of 2D maps

pub mod patch;
pub mod resize;

pub use patch::apply_grey_patch;
pub use resize::resize_bilinear;
