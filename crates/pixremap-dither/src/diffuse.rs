//! Bi-level error diffusion
//!
//! Each plane is gamma-corrected into a rolling [`ErrorBuffer`], then
//! scanned row by row. Every working value is thresholded to 0 or 255
//! and the signed residual is spread over the kernel taps, rounded per
//! tap. With serpentine scanning odd rows run right to left and the
//! kernel is mirrored horizontally.

use crate::buffer::ErrorBuffer;
use crate::gamma::{GammaTable, gamma_table, sanitize_gamma};
use crate::kernel::{DiffusionMethod, Kernel};
use pixremap_core::{Image, MAX_LEVEL};
use tracing::debug;

/// Working values below this become 0; the rest become 255.
pub const THRESHOLD: i16 = 128;

/// Options for [`error_diffusion`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionOptions {
    /// Kernel to diffuse with
    pub method: DiffusionMethod,
    /// Alternate scan direction on odd rows
    pub serpentine: bool,
    /// Gamma applied to every sample before diffusion
    /// (non-positive values mean 1.0)
    pub gamma: f64,
}

impl Default for DiffusionOptions {
    fn default() -> Self {
        Self {
            method: DiffusionMethod::FloydSteinberg,
            serpentine: false,
            gamma: 1.0,
        }
    }
}

impl DiffusionOptions {
    /// Build options from the integer method flag, a serpentine flag and
    /// a gamma value.
    pub fn from_flags(method: i32, serpentine: bool, gamma: f64) -> Self {
        Self {
            method: DiffusionMethod::from_flag(method),
            serpentine,
            gamma,
        }
    }
}

#[inline]
fn quantize(value: i16) -> u8 {
    if value < THRESHOLD { 0 } else { MAX_LEVEL }
}

/// Share of `err` sent through a tap of weight `w`, rounded half away
/// from zero.
#[inline]
fn tap_amount(err: i32, weight: f64) -> i16 {
    let share = (f64::from(err) * weight).round();
    share.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Dither one `width` x `height` plane from `src` into `dst`.
///
/// Every written sample is 0 or 255.
pub fn diffuse_channel(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    kernel: &Kernel,
    serpentine: bool,
    table: &GammaTable,
) {
    debug_assert_eq!(src.len(), width * height);
    debug_assert_eq!(dst.len(), width * height);

    let mut buf = ErrorBuffer::new(width, kernel.buffer_rows(), kernel.radius_x);
    let rows = buf.rows();
    for y in 0..rows {
        buf.load_row(y, src, height, table);
    }

    for y in 0..height {
        let reverse = serpentine && y % 2 == 1;
        for i in 0..width {
            let x = if reverse { width - 1 - i } else { i };
            let value = buf.get(y, x);
            let out = quantize(value);
            dst[y * width + x] = out;

            let err = i32::from(value) - i32::from(out);
            if err == 0 {
                continue;
            }
            for tap in kernel.taps {
                let dx = if reverse { -tap.dx } else { tap.dx };
                buf.add(
                    y + tap.dy as usize,
                    x as isize + dx as isize,
                    tap_amount(err, tap.weight),
                );
            }
        }
        buf.load_row(y + rows, src, height, table);
    }
}

/// Error-diffusion dithering of every channel of `image`.
///
/// Returns a new image of the same geometry whose samples are all 0 or
/// 255.
///
/// # Example
///
/// ```
/// use pixremap_core::Image;
/// use pixremap_dither::{DiffusionOptions, error_diffusion};
///
/// let image = Image::from_plane(2, 2, vec![100; 4]).unwrap();
/// let out = error_diffusion(&image, &DiffusionOptions::default());
/// assert_eq!(out.channel(0).unwrap(), &[0, 255, 0, 0]);
/// ```
pub fn error_diffusion(image: &Image, options: &DiffusionOptions) -> Image {
    let gamma = sanitize_gamma(options.gamma);
    let kernel = options.method.kernel();
    let table = gamma_table(gamma);
    let (width, height) = (image.width() as usize, image.height() as usize);
    debug!(
        width,
        height,
        channels = image.channel_count(),
        method = ?options.method,
        serpentine = options.serpentine,
        gamma,
        "error diffusion"
    );

    let mut out = image.create_template();
    for (ch, src) in image.channels().enumerate() {
        if let Some(dst) = out.channel_mut(ch as u32) {
            diffuse_channel(src, dst, width, height, kernel, options.serpentine, &table);
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{FLOYD_STEINBERG, JARVIS_JUDICE_NINKE};

    fn dither(w: u32, h: u32, samples: Vec<u8>, options: DiffusionOptions) -> Vec<u8> {
        let image = Image::from_plane(w, h, samples).unwrap();
        error_diffusion(&image, &options).channel(0).unwrap().to_vec()
    }

    #[test]
    fn test_light_block_goes_white() {
        let out = dither(2, 2, vec![200; 4], DiffusionOptions::default());
        assert_eq!(out, vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_dark_block_error_carries() {
        // 100 -> 0 pushes +44 right, making 144 -> 255
        let out = dither(2, 2, vec![100; 4], DiffusionOptions::default());
        assert_eq!(out, vec![0, 255, 0, 0]);
    }

    #[test]
    fn test_extremes_unchanged() {
        for options in [
            DiffusionOptions::default(),
            DiffusionOptions::from_flags(1, true, 2.2),
        ] {
            assert!(dither(5, 3, vec![0; 15], options).iter().all(|&v| v == 0));
            assert!(dither(5, 3, vec![255; 15], options).iter().all(|&v| v == 255));
        }
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(dither(1, 1, vec![127], DiffusionOptions::default()), vec![0]);
        assert_eq!(dither(1, 1, vec![128], DiffusionOptions::default()), vec![255]);
    }

    #[test]
    fn test_gamma_applied_before_threshold() {
        // 128 -> 64 under gamma 2.0, which falls below the threshold
        let options = DiffusionOptions {
            gamma: 2.0,
            ..Default::default()
        };
        assert_eq!(dither(1, 1, vec![128], options), vec![0]);
        // Non-positive gamma behaves as 1.0
        let options = DiffusionOptions {
            gamma: -1.0,
            ..Default::default()
        };
        assert_eq!(dither(1, 1, vec![128], options), vec![255]);
    }

    #[test]
    fn test_serpentine_mirrors_second_row() {
        // Row 0 is white; row 1 scanned right to left carries error leftward.
        let samples = vec![255, 255, 255, 40, 100, 100];
        let raster = dither(3, 2, samples.clone(), DiffusionOptions::default());
        let serp = dither(
            3,
            2,
            samples,
            DiffusionOptions {
                serpentine: true,
                ..Default::default()
            },
        );
        // Raster: 40 -> 0 (+18), 118 -> 0 (+52), 152 -> 255
        assert_eq!(raster, vec![255, 255, 255, 0, 0, 255]);
        // Serpentine: 100 -> 0 (+44), 144 -> 255 (-49), -9 -> 0
        assert_eq!(serp, vec![255, 255, 255, 0, 255, 0]);
    }

    #[test]
    fn test_flag_selection() {
        assert_eq!(
            DiffusionOptions::from_flags(1, false, 1.0).method,
            DiffusionMethod::JarvisJudiceNinke
        );
        assert_eq!(
            DiffusionOptions::from_flags(3, false, 1.0).method,
            DiffusionMethod::FloydSteinberg
        );
    }

    #[test]
    fn test_diffuse_channel_direct() {
        let table = gamma_table(1.0);
        let src = vec![100u8; 4];
        let mut fs = vec![7u8; 4];
        diffuse_channel(&src, &mut fs, 2, 2, &FLOYD_STEINBERG, false, &table);
        assert_eq!(fs, vec![0, 255, 0, 0]);

        let mut jjn = vec![7u8; 4];
        diffuse_channel(&src, &mut jjn, 2, 2, &JARVIS_JUDICE_NINKE, false, &table);
        assert!(jjn.iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_tap_amount_rounds_half_away() {
        assert_eq!(tap_amount(8, 1.0 / 16.0), 1);
        assert_eq!(tap_amount(-8, 1.0 / 16.0), -1);
        assert_eq!(tap_amount(7, 1.0 / 16.0), 0);
        assert_eq!(tap_amount(100, 7.0 / 16.0), 44);
    }
}
