//! Histogram generation for image channels
//!
//! A [`Histogram`] is the 256-bin frequency count of one 8-bit plane.
//! Bin `i` holds the number of samples equal to `i`.

use super::Image;
use std::ops::{Index, IndexMut};

/// Number of intensity levels of an 8-bit plane.
pub const NUM_LEVELS: usize = 256;

/// 256-bin integer histogram
///
/// Built from a plane, the counts sum to the number of samples in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; NUM_LEVELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create a histogram with every bin set to zero.
    pub fn new() -> Self {
        Self {
            counts: [0; NUM_LEVELS],
        }
    }

    /// Wrap explicit bin counts.
    pub fn from_counts(counts: [u32; NUM_LEVELS]) -> Self {
        Self { counts }
    }

    /// Count the samples of a plane.
    ///
    /// # Example
    ///
    /// ```
    /// use pixremap_core::Histogram;
    ///
    /// let hist = Histogram::from_samples(&[0, 0, 7, 255]);
    /// assert_eq!(hist[0], 2);
    /// assert_eq!(hist[7], 1);
    /// assert_eq!(hist.total(), 4);
    /// ```
    pub fn from_samples(samples: &[u8]) -> Self {
        let mut counts = [0u32; NUM_LEVELS];
        for &v in samples {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    /// Get the bin counts.
    #[inline]
    pub fn counts(&self) -> &[u32; NUM_LEVELS] {
        &self.counts
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Iterate over the bin counts in level order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied()
    }

    /// Reset every bin to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Number of bins with a nonzero count.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

impl Index<usize> for Histogram {
    type Output = u32;

    #[inline]
    fn index(&self, level: usize) -> &u32 {
        &self.counts[level]
    }
}

impl IndexMut<usize> for Histogram {
    #[inline]
    fn index_mut(&mut self, level: usize) -> &mut u32 {
        &mut self.counts[level]
    }
}

impl Image {
    /// Get the histogram of channel `ch`.
    ///
    /// Returns `None` if the channel does not exist.
    pub fn channel_histogram(&self, ch: u32) -> Option<Histogram> {
        self.channel(ch).map(Histogram::from_samples)
    }
}
