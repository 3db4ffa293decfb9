//! pixremap-test - Regression test framework for pixremap
//!
//! Tests are organised as numbered checks on a [`RegParams`]; every
//! failing check is recorded and reported by [`RegParams::cleanup`].
//!
//! - **Compare** (default): run every check
//! - **Display**: run every check and also print intermediate results
//!
//! # Usage
//!
//! ```ignore
//! use pixremap_test::{RegParams, load_fixture};
//!
//! let mut rp = RegParams::new("histomatch");
//! let pix = load_fixture("ramp64").unwrap();
//! rp.compare_values(4096.0, pix.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "compare" or "display"
//! - `RUST_LOG`: filter for the `tracing` output of the library crates

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{FIXTURE_NAMES, load_fixture};
pub use params::{RegParams, RegTestMode};
