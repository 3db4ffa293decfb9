//! Target histogram shapes
//!
//! The desired distribution for histogram specification is supplied as
//! an image: the first 256 samples of its first channel, in row-major
//! order, are read as raw bin weights. Shorter planes leave the trailing
//! bins at zero. The weights need not sum to anything in particular;
//! [`crate::rescale_target`] turns them into pixel counts.

use pixremap_core::{Image, NUM_LEVELS};

/// Raw 256-bin target distribution
#[derive(Debug, Clone, PartialEq)]
pub struct TargetShape {
    bins: [f64; NUM_LEVELS],
}

impl Default for TargetShape {
    fn default() -> Self {
        Self {
            bins: [0.0; NUM_LEVELS],
        }
    }
}

impl TargetShape {
    /// Read a shape from the samples of channel 0 of `image`.
    pub fn from_image(image: &Image) -> Self {
        let mut shape = Self::default();
        if let Some(plane) = image.channel(0) {
            for (bin, &v) in shape.bins.iter_mut().zip(plane) {
                *bin = f64::from(v);
            }
        }
        shape
    }

    /// Build a shape from explicit weights.
    ///
    /// At most 256 values are used. Negative and non-finite weights are
    /// stored as zero.
    pub fn from_values(values: &[f64]) -> Self {
        let mut shape = Self::default();
        for (bin, &v) in shape.bins.iter_mut().zip(values) {
            *bin = if v.is_finite() && v > 0.0 { v } else { 0.0 };
        }
        shape
    }

    /// Get the raw bin weights.
    #[inline]
    pub fn bins(&self) -> &[f64; NUM_LEVELS] {
        &self.bins
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// Whether the shape carries no usable weight (sum ≤ 0).
    pub fn is_degenerate(&self) -> bool {
        self.sum() <= 0.0
    }
}
