//! Approximate histogram specification
//!
//! Builds a static 256-entry lookup table by matching cumulative
//! distributions: each source level goes to the target level whose
//! cumulative fraction is closest to its own. Unlike the exact matcher
//! the mapping does not depend on pixel order, but the output histogram
//! only approximates the target.

use crate::TargetShape;
use crate::rescale::{RemainderPolicy, rescale_target};
use pixremap_core::{Histogram, Image, NUM_LEVELS};
use tracing::debug;

/// A 256-entry lookup table mapping input levels to output levels.
pub type Lut = [u8; NUM_LEVELS];

/// Build the CDF-matching table for `source` against `target`.
///
/// `target` must already be rescaled to the pixel count of `source`.
/// A shared pointer `j` only moves forward; for each level it stops at
/// the first target bin whose cumulative fraction reaches the source
/// fraction, then the nearer of `j - 1` and `j` is taken, ties going to
/// `j - 1`. A level for which the pointer is still at 0 maps to 0.
///
/// The table is not forced to be monotonic or injective.
pub fn approx_lut(source: &Histogram, target: &Histogram) -> Lut {
    let n = source.total();
    let inv = if n > 0 { 1.0 / n as f64 } else { 0.0 };

    let mut cin = [0.0f64; NUM_LEVELS];
    let mut run = 0.0;
    for (i, c) in source.iter().enumerate() {
        run += f64::from(c);
        cin[i] = run * inv;
    }

    // Divided rather than multiplied by `inv`; near-ties depend on it.
    let mut ctgt = [0.0f64; NUM_LEVELS];
    run = 0.0;
    for (i, c) in target.iter().enumerate() {
        run += f64::from(c);
        ctgt[i] = if n > 0 { run / n as f64 } else { 0.0 };
    }

    let mut lut = [0u8; NUM_LEVELS];
    let mut j = 0usize;
    for (i, &s) in cin.iter().enumerate() {
        while j < NUM_LEVELS - 1 && ctgt[j] < s {
            j += 1;
        }
        lut[i] = if j == 0 {
            0
        } else {
            let d1 = (ctgt[j] - s).abs();
            let d0 = (ctgt[j - 1] - s).abs();
            if d0 <= d1 { (j - 1) as u8 } else { j as u8 }
        };
    }
    lut
}

/// Remap one plane through the CDF-matching table for `shape`.
pub fn match_channel_approx(src: &[u8], dst: &mut [u8], shape: &TargetShape) {
    debug_assert_eq!(src.len(), dst.len());
    let source = Histogram::from_samples(src);
    let target = rescale_target(shape, src.len() as u32, RemainderPolicy::LastNonZeroBin);
    let lut = approx_lut(&source, &target);
    for (out, &v) in dst.iter_mut().zip(src) {
        *out = lut[v as usize];
    }
}

/// Approximate histogram specification of every channel of `image`.
///
/// # Example
///
/// ```
/// use pixremap_core::Image;
/// use pixremap_histo::match_histogram_approx;
///
/// let image = Image::from_plane(2, 2, vec![0, 0, 1, 1]).unwrap();
/// let target = Image::from_plane(3, 1, vec![1, 2, 1]).unwrap();
/// let out = match_histogram_approx(&image, &target);
/// assert_eq!(out.channel(0).unwrap(), &[0, 0, 2, 2]);
/// ```
pub fn match_histogram_approx(image: &Image, target: &Image) -> Image {
    let shape = TargetShape::from_image(target);
    debug!(
        width = image.width(),
        height = image.height(),
        channels = image.channel_count(),
        degenerate_target = shape.is_degenerate(),
        "approximate histogram matching"
    );

    let mut out = image.create_template();
    for (ch, src) in image.channels().enumerate() {
        if let Some(dst) = out.channel_mut(ch as u32) {
            match_channel_approx(src, dst, &shape);
        }
    }
    out.into()
}
