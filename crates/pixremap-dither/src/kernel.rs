//! Error diffusion kernel definitions.
//!
//! A kernel lists the neighbors that receive a share of the
//! quantization error of the current pixel. Offsets are given for a
//! left-to-right scan; on right-to-left rows the horizontal offset is
//! negated.

/// One error-diffusion tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Horizontal offset (positive = ahead in a left-to-right scan)
    pub dx: i32,
    /// Vertical offset (0 = current row, always non-negative)
    pub dy: i32,
    /// Fraction of the error sent to this neighbor
    pub weight: f64,
}

/// An error-diffusion kernel.
///
/// `radius_x` is the horizontal padding each buffer row needs, and the
/// error buffer keeps `radius_y + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Taps in application order
    pub taps: &'static [Tap],
    /// Largest `|dx|`
    pub radius_x: usize,
    /// Largest `dy`
    pub radius_y: usize,
}

impl Kernel {
    /// Number of rows the rolling error buffer holds.
    #[inline]
    pub fn buffer_rows(&self) -> usize {
        self.radius_y + 1
    }

    /// Sum of all tap weights.
    pub fn weight_sum(&self) -> f64 {
        self.taps.iter().map(|t| t.weight).sum()
    }
}

/// Floyd-Steinberg kernel.
///
/// ```text
///        X   7
///    3   5   1      (/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    taps: &[
        Tap { dx: 1, dy: 0, weight: 7.0 / 16.0 },
        Tap { dx: -1, dy: 1, weight: 3.0 / 16.0 },
        Tap { dx: 0, dy: 1, weight: 5.0 / 16.0 },
        Tap { dx: 1, dy: 1, weight: 1.0 / 16.0 },
    ],
    radius_x: 1,
    radius_y: 1,
};

/// Jarvis-Judice-Ninke kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1  (/48)
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    taps: &[
        Tap { dx: 1, dy: 0, weight: 7.0 / 48.0 },
        Tap { dx: 2, dy: 0, weight: 5.0 / 48.0 },
        Tap { dx: -2, dy: 1, weight: 3.0 / 48.0 },
        Tap { dx: -1, dy: 1, weight: 5.0 / 48.0 },
        Tap { dx: 0, dy: 1, weight: 7.0 / 48.0 },
        Tap { dx: 1, dy: 1, weight: 5.0 / 48.0 },
        Tap { dx: 2, dy: 1, weight: 3.0 / 48.0 },
        Tap { dx: -2, dy: 2, weight: 1.0 / 48.0 },
        Tap { dx: -1, dy: 2, weight: 3.0 / 48.0 },
        Tap { dx: 0, dy: 2, weight: 5.0 / 48.0 },
        Tap { dx: 1, dy: 2, weight: 3.0 / 48.0 },
        Tap { dx: 2, dy: 2, weight: 1.0 / 48.0 },
    ],
    radius_x: 2,
    radius_y: 2,
};

/// Diffusion kernel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffusionMethod {
    /// Floyd-Steinberg, 4 taps over 2 rows (method 0)
    #[default]
    FloydSteinberg,
    /// Jarvis-Judice-Ninke, 12 taps over 3 rows (method 1)
    JarvisJudiceNinke,
}

impl DiffusionMethod {
    /// Select a kernel from an integer method flag.
    ///
    /// 1 selects Jarvis-Judice-Ninke; every other value selects
    /// Floyd-Steinberg.
    pub fn from_flag(method: i32) -> Self {
        match method {
            1 => DiffusionMethod::JarvisJudiceNinke,
            _ => DiffusionMethod::FloydSteinberg,
        }
    }

    /// The tap table for this method.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DiffusionMethod::FloydSteinberg => &FLOYD_STEINBERG,
            DiffusionMethod::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
        }
    }
}
