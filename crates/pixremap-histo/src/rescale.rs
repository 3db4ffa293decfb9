//! Rescaling a target shape to an exact pixel total
//!
//! Both matchers need an integer histogram whose bins sum to exactly
//! the number of pixels being remapped. The rounding and overflow rules
//! are shared; where a shortfall lands differs between the exact and
//! approximate matcher and is selected by [`RemainderPolicy`].

use crate::TargetShape;
use pixremap_core::{Histogram, NUM_LEVELS};
use tracing::trace;

/// Bin that absorbs the shortfall when rounded bins sum below the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// Always the last bin (255). Used by the exact matcher.
    LastBin,
    /// The last bin that received a nonzero rounded count, or 255 if none
    /// did. Used by the approximate matcher.
    LastNonZeroBin,
}

/// Convert `shape` into a histogram summing to exactly `total`.
///
/// A shape with sum ≤ 0 is replaced by a flat histogram: every bin gets
/// `total / 256` and the first `total % 256` bins one extra. Otherwise
/// each weight is scaled by `total / sum` and rounded half up. While
/// accumulating, the first bin that pushes the running sum past `total`
/// is cut down to the remainder and every later bin is zeroed. A final
/// shortfall goes to the bin chosen by `policy`.
///
/// # Example
///
/// ```
/// use pixremap_histo::{RemainderPolicy, TargetShape, rescale_target};
///
/// let shape = TargetShape::from_values(&[1.0, 1.0, 2.0]);
/// let hist = rescale_target(&shape, 8, RemainderPolicy::LastBin);
/// assert_eq!((hist[0], hist[1], hist[2]), (2, 2, 4));
/// assert_eq!(hist.total(), 8);
/// ```
pub fn rescale_target(shape: &TargetShape, total: u32, policy: RemainderPolicy) -> Histogram {
    let mut hist = Histogram::new();
    let sum = shape.sum();

    if sum.is_nan() || sum <= 0.0 {
        let base = total / NUM_LEVELS as u32;
        let rem = (total % NUM_LEVELS as u32) as usize;
        for i in 0..NUM_LEVELS {
            hist[i] = base + u32::from(i < rem);
        }
        trace!(total, base, rem, "flat target histogram");
        return hist;
    }

    let scale = f64::from(total) / sum;
    let total = i64::from(total);
    let mut running: i64 = 0;
    let mut last_nonzero = None;

    for (i, &raw) in shape.bins().iter().enumerate() {
        let count = ((raw * scale + 0.5).floor() as i64).max(0);
        if count > 0 {
            last_nonzero = Some(i);
        }
        running += count;
        if running > total {
            let kept = count - (running - total);
            hist[i] = kept as u32;
            trace!(bin = i, kept, "target histogram truncated");
            running = total;
            break;
        }
        hist[i] = count as u32;
    }

    if running < total {
        let idx = match policy {
            RemainderPolicy::LastBin => NUM_LEVELS - 1,
            RemainderPolicy::LastNonZeroBin => last_nonzero.unwrap_or(NUM_LEVELS - 1),
        };
        let shortfall = total - running;
        hist[idx] += shortfall as u32;
        trace!(bin = idx, shortfall, "target histogram shortfall placed");
    }

    hist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_when_sum_is_zero() {
        let shape = TargetShape::default();
        let hist = rescale_target(&shape, 64, RemainderPolicy::LastBin);
        assert_eq!(hist.total(), 64);
        assert!(hist.iter().take(64).all(|c| c == 1));
        assert!(hist.iter().skip(64).all(|c| c == 0));
    }

    #[test]
    fn test_flat_with_base_and_remainder() {
        let shape = TargetShape::default();
        let hist = rescale_target(&shape, 600, RemainderPolicy::LastNonZeroBin);
        // 600 = 2 * 256 + 88
        assert_eq!(hist[0], 3);
        assert_eq!(hist[87], 3);
        assert_eq!(hist[88], 2);
        assert_eq!(hist[255], 2);
        assert_eq!(hist.total(), 600);
    }

    #[test]
    fn test_exact_scaling() {
        let shape = TargetShape::from_values(&[1.0, 3.0]);
        let hist = rescale_target(&shape, 100, RemainderPolicy::LastBin);
        assert_eq!(hist[0], 25);
        assert_eq!(hist[1], 75);
        assert_eq!(hist[255], 0);
    }

    #[test]
    fn test_overflow_truncates_and_zeroes_rest() {
        // Four weights scaled to 0.5 each round up to 1 and overflow at bin 2.
        let shape = TargetShape::from_values(&[1.0, 1.0, 1.0, 1.0]);
        let hist = rescale_target(&shape, 2, RemainderPolicy::LastBin);
        assert_eq!(&hist.counts()[..4], &[1, 1, 0, 0]);
        assert_eq!(hist.total(), 2);

        let shape = TargetShape::from_values(&[1.0, 1.0, 1.0]);
        let hist = rescale_target(&shape, 4, RemainderPolicy::LastBin);
        // 4/3 rounds to 1, three bins sum to 3, shortfall 1 goes to 255
        assert_eq!(&hist.counts()[..3], &[1, 1, 1]);
        assert_eq!(hist[255], 1);
    }

    #[test]
    fn test_rounding_overflow_cuts_bin() {
        // 5 * 0.5 = 2.5 rounds to 3 for both bins: 6 > 5
        let shape = TargetShape::from_values(&[1.0, 1.0]);
        let hist = rescale_target(&shape, 5, RemainderPolicy::LastNonZeroBin);
        assert_eq!(hist[0], 3);
        assert_eq!(hist[1], 2);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_remainder_policies_differ() {
        let shape = TargetShape::from_values(&[1.0, 1.0, 1.0]);
        let last = rescale_target(&shape, 4, RemainderPolicy::LastBin);
        let nonzero = rescale_target(&shape, 4, RemainderPolicy::LastNonZeroBin);
        assert_eq!(last[2], 1);
        assert_eq!(last[255], 1);
        assert_eq!(nonzero[2], 2);
        assert_eq!(nonzero[255], 0);
        assert_eq!(last.total(), nonzero.total());
    }

    #[test]
    fn test_sum_always_matches_total() {
        let shapes = [
            TargetShape::default(),
            TargetShape::from_values(&[1.0; 256]),
            TargetShape::from_values(&[255.0, 0.0, 0.0, 1.0]),
            TargetShape::from_values(&(0..256).map(|i| (i % 13) as f64).collect::<Vec<_>>()),
            TargetShape::from_values(&[0.3, 0.3, 0.3]),
        ];
        for shape in &shapes {
            for total in [0u32, 1, 7, 255, 256, 257, 1000, 65_536] {
                for policy in [RemainderPolicy::LastBin, RemainderPolicy::LastNonZeroBin] {
                    let hist = rescale_target(shape, total, policy);
                    assert_eq!(hist.total(), u64::from(total), "{policy:?} total {total}");
                }
            }
        }
    }
}
