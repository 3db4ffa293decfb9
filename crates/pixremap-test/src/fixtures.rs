//! Synthetic test images
//!
//! Regression tests run against images generated in memory so results
//! do not depend on any decoder. Each fixture is identified by name.

use crate::error::{TestError, TestResult};
use pixremap_core::Image;

/// Names accepted by [`load_fixture`].
pub const FIXTURE_NAMES: &[&str] = &["ramp64", "checker8", "flat100", "rgb-gradient"];

/// Build a named test image.
///
/// - `ramp64`: 64x64, one channel, horizontal ramp `4 * x`
/// - `checker8`: 8x8, one channel, alternating 40 / 200
/// - `flat100`: 16x16, one channel, every sample 100
/// - `rgb-gradient`: 32x16, three independent gradient channels
pub fn load_fixture(name: &str) -> TestResult<Image> {
    let built = match name {
        "ramp64" => plane(64, 64, |x, _| (4 * x) as u8),
        "checker8" => plane(8, 8, |x, y| if (x + y) % 2 == 0 { 40 } else { 200 }),
        "flat100" => plane(16, 16, |_, _| 100),
        "rgb-gradient" => {
            let (w, h) = (32, 16);
            let r = samples(w, h, |x, _| (8 * x) as u8);
            let g = samples(w, h, |_, y| (16 * y + 8) as u8);
            let b = samples(w, h, |x, y| ((5 * (x + y)) % 256) as u8);
            Image::from_planes(w, h, &[&r, &g, &b])
        }
        _ => {
            return Err(TestError::UnknownFixture {
                name: name.to_string(),
            });
        }
    };
    built.map_err(|source| TestError::Fixture {
        name: name.to_string(),
        source,
    })
}

fn samples(w: u32, h: u32, f: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| f(x, y))
        .collect()
}

fn plane(w: u32, h: u32, f: impl Fn(u32, u32) -> u8) -> pixremap_core::Result<Image> {
    Image::from_plane(w, h, samples(w, h, f))
}
