//! pixremap histo - histogram specification
//!
//! Remaps every channel of an image so that its intensity distribution
//! follows a target shape read from another image:
//!
//! - **Target shapes** ([`shape`]): raw 256-bin weights read from a plane
//! - **Rescaling** ([`rescale`]): integer target histogram with an exact
//!   pixel total, shared by both matchers
//! - **Exact matching** ([`exact`]): interval assignment with an
//!   order-dependent, stateful remap
//! - **Approximate matching** ([`approx`]): static CDF-matching lookup table
//!
//! # Example
//!
//! ```
//! use pixremap_core::Image;
//! use pixremap_histo::{MatchMethod, histogram_match};
//!
//! let image = Image::from_plane(4, 1, vec![10, 20, 30, 40]).unwrap();
//! let target = Image::from_plane(2, 2, vec![1, 1, 1, 1]).unwrap();
//! let out = histogram_match(&image, &target, MatchMethod::Exact);
//! assert_eq!(out.channel(0).unwrap(), &[0, 1, 2, 3]);
//! ```

pub mod approx;
pub mod exact;
pub mod rescale;
pub mod shape;

pub use approx::{Lut, approx_lut, match_channel_approx, match_histogram_approx};
pub use exact::{IntervalTable, match_channel_exact, match_histogram_exact};
pub use rescale::{RemainderPolicy, rescale_target};
pub use shape::TargetShape;

use pixremap_core::Image;

/// Histogram specification algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMethod {
    /// Interval assignment; follows the target as closely as an exact
    /// partition of the pixels allows
    #[default]
    Exact,
    /// Nearest-CDF lookup table; cheaper and order-independent
    Approximate,
}

impl MatchMethod {
    /// Select the method from an "approximate" flag.
    pub fn from_approx_flag(approx: bool) -> Self {
        if approx {
            MatchMethod::Approximate
        } else {
            MatchMethod::Exact
        }
    }
}

/// Histogram specification of every channel of `image` against the
/// shape stored in `target`.
pub fn histogram_match(image: &Image, target: &Image, method: MatchMethod) -> Image {
    match method {
        MatchMethod::Exact => match_histogram_exact(image, target),
        MatchMethod::Approximate => match_histogram_approx(image, target),
    }
}
