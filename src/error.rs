//! Error types for the srcset shim

use thiserror::Error;

/// Result type alias for shim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the shim's boundaries.
///
/// The parser and selector themselves are total over their inputs and never
/// return an error; this type covers viewport construction and the document
/// I/O done by callers such as the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid viewport geometry or pixel ratio
    #[error("Invalid viewport: {0}")]
    Viewport(String),

    /// Failed to read or process a document
    #[error("Document error: {0}")]
    Document(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a rewrite plan
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
