//! Exact histogram specification
//!
//! Every source level `i` is assigned an inclusive run of target bins
//! `[left[i], right[i]]`, obtained by laying the source histogram over
//! the rescaled target histogram. Pixels are then visited in row-major
//! order; each one takes the lowest bin of its run that still has room,
//! and `left[i]` advances as bins fill up.
//!
//! The result depends on the visiting order. Reordering the pixels of
//! a plane, even with the same multiset of values, can change which
//! pixels land in which bin, so the scan order is part of the contract.

use crate::TargetShape;
use crate::rescale::{RemainderPolicy, rescale_target};
use pixremap_core::{Histogram, Image, NUM_LEVELS};
use tracing::debug;

/// Per-level runs of eligible target bins.
///
/// `left` is scan state: [`IntervalTable::step`] moves it forward as
/// the bins it points at fill up. `right` is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    left: [u8; NUM_LEVELS],
    right: [u8; NUM_LEVELS],
}

impl IntervalTable {
    /// Lay `source` over `target` and record each level's bin run.
    ///
    /// A pointer `r` walks the target bins while a running sum of the
    /// source counts is kept; whenever the sum exceeds `target[r]`, that
    /// bin is consumed and `r` moves on (never past 255).
    pub fn build(source: &Histogram, target: &Histogram) -> Self {
        let mut left = [0u8; NUM_LEVELS];
        let mut right = [0u8; NUM_LEVELS];
        let mut r = 0usize;
        let mut sum: u64 = 0;

        for i in 0..NUM_LEVELS {
            left[i] = r as u8;
            sum += u64::from(source[i]);
            while sum > u64::from(target[r]) && r < NUM_LEVELS - 1 {
                sum -= u64::from(target[r]);
                r += 1;
            }
            right[i] = r as u8;
        }

        Self { left, right }
    }

    /// Current lowest eligible bin for `level`.
    #[inline]
    pub fn left(&self, level: u8) -> u8 {
        self.left[level as usize]
    }

    /// Highest eligible bin for `level`.
    #[inline]
    pub fn right(&self, level: u8) -> u8 {
        self.right[level as usize]
    }

    /// Map one pixel of value `value` and record it in `emitted`.
    ///
    /// If bin `left[value]` is already at its target count, the run
    /// advances by one bin (capped at `right[value]`) and the advance is
    /// kept for later pixels of the same value. A capped bin still
    /// receives the pixel, so the last bin of a run may exceed its
    /// target.
    pub fn step(&mut self, value: u8, target: &Histogram, emitted: &mut Histogram) -> u8 {
        let v = value as usize;
        let mut p = self.left[v] as usize;
        if emitted[p] >= target[p] {
            p = (p + 1).min(self.right[v] as usize);
            self.left[v] = p as u8;
        }
        emitted[p] += 1;
        p as u8
    }
}

/// Remap one plane so its histogram follows `shape`.
///
/// `src` and `dst` must have the same length. Pixels are processed in
/// slice order, which is row-major for image planes.
pub fn match_channel_exact(src: &[u8], dst: &mut [u8], shape: &TargetShape) {
    debug_assert_eq!(src.len(), dst.len());
    let source = Histogram::from_samples(src);
    let total = src.len() as u32;
    let target = rescale_target(shape, total, RemainderPolicy::LastBin);
    let mut table = IntervalTable::build(&source, &target);

    let mut emitted = source;
    emitted.clear();
    for (out, &v) in dst.iter_mut().zip(src) {
        *out = table.step(v, &target, &mut emitted);
    }
}

/// Exact histogram specification of every channel of `image`.
///
/// The target distribution is read from `target` (see
/// [`TargetShape::from_image`]) and rescaled separately for each channel.
///
/// # Example
///
/// ```
/// use pixremap_core::Image;
/// use pixremap_histo::match_histogram_exact;
///
/// let image = Image::from_plane(2, 2, vec![10, 10, 10, 10]).unwrap();
/// // Target: equal weight on levels 0 and 1.
/// let target = Image::from_plane(2, 1, vec![1, 1]).unwrap();
/// let out = match_histogram_exact(&image, &target);
/// assert_eq!(out.channel(0).unwrap(), &[0, 0, 1, 1]);
/// ```
pub fn match_histogram_exact(image: &Image, target: &Image) -> Image {
    let shape = TargetShape::from_image(target);
    debug!(
        width = image.width(),
        height = image.height(),
        channels = image.channel_count(),
        degenerate_target = shape.is_degenerate(),
        "exact histogram matching"
    );

    let mut out = image.create_template();
    for (ch, src) in image.channels().enumerate() {
        if let Some(dst) = out.channel_mut(ch as u32) {
            match_channel_exact(src, dst, &shape);
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_of(counts: &[(usize, u32)]) -> Histogram {
        let mut hist = Histogram::new();
        for &(bin, c) in counts {
            hist[bin] = c;
        }
        hist
    }

    #[test]
    fn test_interval_table_identity() {
        // Source equals target: every level maps onto itself.
        let hist = Histogram::from_samples(&[0, 1, 1, 2, 2, 2]);
        let table = IntervalTable::build(&hist, &hist);
        assert_eq!((table.left(0), table.right(0)), (0, 0));
        assert_eq!((table.left(1), table.right(1)), (0, 1));
        assert_eq!((table.left(2), table.right(2)), (1, 2));
    }

    #[test]
    fn test_interval_table_spreads_one_level() {
        let source = Histogram::from_samples(&[5; 4]);
        let target = target_of(&[(0, 1), (1, 1), (2, 1), (3, 1)]);
        let table = IntervalTable::build(&source, &target);
        assert_eq!((table.left(5), table.right(5)), (0, 3));
        // Levels below 5 are empty and collapse onto bin 0.
        assert_eq!((table.left(4), table.right(4)), (0, 0));
        // Levels above 5 start where 5 ended.
        assert_eq!((table.left(6), table.right(6)), (3, 3));
    }

    #[test]
    fn test_interval_right_never_passes_last_bin() {
        let source = Histogram::from_samples(&[255; 10]);
        let target = target_of(&[(0, 1)]);
        let table = IntervalTable::build(&source, &target);
        assert_eq!(table.right(255), 255);
    }

    #[test]
    fn test_step_advances_and_caps() {
        let source = Histogram::from_samples(&[7; 5]);
        let target = target_of(&[(0, 2), (1, 2), (2, 1)]);
        let mut table = IntervalTable::build(&source, &target);
        assert_eq!((table.left(7), table.right(7)), (0, 2));

        let mut emitted = Histogram::new();
        let outs: Vec<u8> = (0..5)
            .map(|_| table.step(7, &target, &mut emitted))
            .collect();
        assert_eq!(outs, vec![0, 0, 1, 1, 2]);
        assert_eq!(table.left(7), 2);
        // Bin 2 is full but is the end of the run, so it takes the overflow.
        assert_eq!(table.step(7, &target, &mut emitted), 2);
        assert_eq!(emitted[2], 2);
    }

    #[test]
    fn test_match_channel_exact_follows_target() {
        let src: Vec<u8> = (0..16).map(|i| (i * 16) as u8).collect();
        let mut dst = vec![0u8; 16];
        let shape = TargetShape::from_values(&[1.0, 1.0, 1.0, 1.0]);
        match_channel_exact(&src, &mut dst, &shape);
        assert_eq!(dst, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_step_moves_one_bin_at_a_time() {
        // Target [4, 0, 4, 0, 8]: once bin 0 is full, the pixel at level 64
        // advances a single bin and lands in the empty bin 1.
        let src: Vec<u8> = (0..16).map(|i| (i * 16) as u8).collect();
        let mut dst = vec![0u8; 16];
        let shape = TargetShape::from_values(&[1.0, 0.0, 1.0, 0.0, 2.0]);
        match_channel_exact(&src, &mut dst, &shape);
        assert_eq!(dst, vec![0, 0, 0, 0, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 4, 4]);
        assert!(dst.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_match_histogram_exact_all_channels() {
        let a = [0u8, 50, 100, 150];
        let b = [200u8, 200, 200, 200];
        let image = Image::from_planes(2, 2, &[&a, &b]).unwrap();
        let target = Image::from_plane(4, 1, vec![1, 1, 1, 1]).unwrap();
        let out = match_histogram_exact(&image, &target);
        assert!(out.sizes_equal(&image));
        assert_eq!(out.channel(0).unwrap(), &[0, 1, 2, 3]);
        assert_eq!(out.channel(1).unwrap(), &[0, 1, 2, 3]);
    }
}
