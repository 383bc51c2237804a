//! Model Contract Module
//!
//! Defines the inference seam between the explainer and a trained
//! classifier. The explainer never inspects the model; it only asks for
//! per-class confidence scores and compares them across occluded inputs.

use ndarray::Array3;

use crate::utils::error::Result;

/// A classifier that can score a batch of images.
///
/// Images are `(H, W, C)` float arrays with pixel values in the 0-255
/// range. For each input image the model returns one vector of per-class
/// confidence scores, indexed by class.
pub trait Model {
    /// Run batched inference on `images`.
    ///
    /// `batch_size` is a hint for how the implementation may group the
    /// inputs internally; the occlusion sweep itself always submits
    /// batches of one image.
    fn predict(&self, images: &[Array3<f32>], batch_size: usize) -> Result<Vec<Vec<f32>>>;
}

impl<M: Model + ?Sized> Model for &M {
    fn predict(&self, images: &[Array3<f32>], batch_size: usize) -> Result<Vec<Vec<f32>>> {
        (**self).predict(images, batch_size)
    }
}
