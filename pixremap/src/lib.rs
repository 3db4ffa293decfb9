//! pixremap - histogram specification and error diffusion for 8-bit planes
//!
//! # Overview
//!
//! pixremap remaps the intensities of multi-channel 8-bit images:
//!
//! - Exact histogram specification (interval assignment)
//! - Approximate histogram specification (CDF-matching lookup table)
//! - Bi-level error diffusion (Floyd-Steinberg, Jarvis-Judice-Ninke),
//!   raster or serpentine, with gamma pre-correction
//!
//! Every channel is processed independently and every operation returns
//! a new image of the input's geometry.
//!
//! # Example
//!
//! ```
//! use pixremap::Image;
//! use pixremap::dither::{DiffusionOptions, error_diffusion};
//! use pixremap::histo::{MatchMethod, histogram_match};
//!
//! let image = Image::from_plane(4, 1, vec![10, 20, 30, 40]).unwrap();
//! let target = Image::from_plane(2, 2, vec![1, 1, 1, 1]).unwrap();
//! let matched = histogram_match(&image, &target, MatchMethod::Exact);
//! assert_eq!(matched.channel(0).unwrap(), &[0, 1, 2, 3]);
//!
//! let dithered = error_diffusion(&image, &DiffusionOptions::default());
//! assert_eq!(dithered.channel(0).unwrap(), &[0, 0, 0, 0]);
//! ```

// Re-export core types
pub use pixremap_core::*;

// Re-export domain crates as modules
pub use pixremap_dither as dither;
pub use pixremap_histo as histo;
