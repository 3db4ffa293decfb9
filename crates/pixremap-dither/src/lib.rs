//! pixremap dither - bi-level error diffusion
//!
//! Converts every channel of an image to pure 0 / 255 samples while
//! spreading the quantization error over neighboring pixels:
//!
//! - **Kernels** ([`kernel`]): Floyd-Steinberg and Jarvis-Judice-Ninke
//!   tap tables
//! - **Gamma** ([`gamma`]): per-sample pre-correction table
//! - **Buffer** ([`buffer`]): rolling, padded signed row buffer
//! - **Diffusion** ([`diffuse`]): raster or serpentine scan
//!
//! # Example
//!
//! ```
//! use pixremap_core::Image;
//! use pixremap_dither::{DiffusionMethod, DiffusionOptions, error_diffusion};
//!
//! let image = Image::from_plane(2, 2, vec![200; 4]).unwrap();
//! let options = DiffusionOptions {
//!     method: DiffusionMethod::JarvisJudiceNinke,
//!     serpentine: true,
//!     ..Default::default()
//! };
//! let out = error_diffusion(&image, &options);
//! assert!(out.channel(0).unwrap().iter().all(|&v| v == 0 || v == 255));
//! ```

pub mod buffer;
pub mod diffuse;
pub mod gamma;
pub mod kernel;

pub use buffer::ErrorBuffer;
pub use diffuse::{DiffusionOptions, THRESHOLD, diffuse_channel, error_diffusion};
pub use gamma::{GammaTable, gamma_correct, gamma_table, sanitize_gamma};
pub use kernel::{DiffusionMethod, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, Kernel, Tap};
