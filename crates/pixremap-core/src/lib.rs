//! pixremap core - image planes and histograms
//!
//! This crate provides the data structures shared by the remapping
//! crates:
//!
//! - [`Image`] / [`ImageMut`] - multi-channel container of 8-bit planes
//!   (immutable / mutable)
//! - [`Histogram`] - 256-bin frequency count of one plane
//! - [`Error`] / [`Result`] - failures of image construction and access

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{Histogram, Image, ImageMut, MAX_LEVEL, NUM_LEVELS};
