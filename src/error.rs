//! Error types for HTML to Markdown conversion.

use thiserror::Error;

/// Errors returned by the conversion entry points.
///
/// Rendering itself never fails; only turning HTML text into a DOM can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The HTML input could not be parsed into a DOM tree.
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

/// Convenience alias for conversion results.
pub type Result<T> = std::result::Result<T, ConversionError>;
