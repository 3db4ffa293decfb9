//! Gamma pre-correction
//!
//! Samples are remapped with `out = round(255 * (in / 255) ^ gamma)`
//! before they enter the diffusion buffer. The mapping is tabulated
//! once per call.

use pixremap_core::NUM_LEVELS;

/// Gamma-corrected sample values, indexed by input level.
pub type GammaTable = [i16; NUM_LEVELS];

/// Replace a non-positive or non-finite gamma with 1.0 (identity).
#[inline]
pub fn sanitize_gamma(gamma: f64) -> f64 {
    if gamma.is_finite() && gamma > 0.0 {
        gamma
    } else {
        1.0
    }
}

/// Gamma-correct a single sample.
///
/// Rounds half away from zero. A non-positive gamma is treated as 1.0.
pub fn gamma_correct(sample: u8, gamma: f64) -> i16 {
    let gamma = sanitize_gamma(gamma);
    let lin = f64::from(sample) / 255.0;
    (lin.powf(gamma) * 255.0).round() as i16
}

/// Tabulate [`gamma_correct`] for every input level.
pub fn gamma_table(gamma: f64) -> GammaTable {
    let gamma = sanitize_gamma(gamma);
    let mut table = [0i16; NUM_LEVELS];
    for (i, v) in table.iter_mut().enumerate() {
        *v = gamma_correct(i as u8, gamma);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_identity() {
        let table = gamma_table(1.0);
        for (i, &v) in table.iter().enumerate() {
            assert_eq!(v, i as i16, "identity mismatch at {}", i);
        }
    }

    #[test]
    fn test_gamma_nonpositive_is_identity() {
        assert_eq!(gamma_table(0.0), gamma_table(1.0));
        assert_eq!(gamma_table(-2.5), gamma_table(1.0));
        assert_eq!(gamma_table(f64::NAN), gamma_table(1.0));
    }

    #[test]
    fn test_gamma_endpoints_fixed() {
        for gamma in [0.25, 0.5, 2.2, 4.0] {
            let table = gamma_table(gamma);
            assert_eq!(table[0], 0);
            assert_eq!(table[255], 255);
        }
    }

    #[test]
    fn test_gamma_darkens_and_lightens() {
        // gamma > 1 pulls midtones down, gamma < 1 lifts them
        assert_eq!(gamma_correct(128, 2.0), 64);
        assert_eq!(gamma_correct(64, 0.5), 128);
        assert!(gamma_table(2.2)[128] < 128);
        assert!(gamma_table(0.45)[128] > 128);
    }
}
