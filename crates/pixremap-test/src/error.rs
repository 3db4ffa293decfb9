//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// No fixture with this name
    #[error("unknown fixture '{name}'")]
    UnknownFixture { name: String },

    /// Fixture could not be built
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: String,
        #[source]
        source: pixremap_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
