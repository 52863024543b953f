//! Error types for chartscope.

use thiserror::Error;

/// The main error type for chartscope operations.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Chartscope has not been initialized.
    #[error("chartscope not initialized - call chartscope::init() first")]
    NotInitialized,

    /// Chartscope has already been initialized.
    #[error("chartscope already initialized")]
    AlreadyInitialized,

    /// The sample buffer is too short for the declared grid dimensions.
    #[error("sample buffer too short: grid needs {expected} samples, got {actual}")]
    DataShape { expected: usize, actual: usize },

    /// A mesh rebuild failed.
    #[error("mesh build failed: {0}")]
    MeshBuild(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for chartscope operations.
pub type Result<T> = std::result::Result<T, ChartError>;
