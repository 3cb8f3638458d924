//! Error types for semsplit.

/// Errors that can occur while configuring a splitter.
///
/// Splitting itself never fails: every error here is raised before any text
/// is processed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inconsistent length constraints or an unknown boundary preset.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied boundary pattern failed to compile.
    #[error("invalid boundary pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for semsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
