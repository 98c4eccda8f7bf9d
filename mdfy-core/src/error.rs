//! Error types for document composition and writing.
use std::io;

use thiserror::Error;

/// Errors surfaced to callers of `mdfy-core`.
///
/// Formatting anomalies (unknown styles, unbalanced brackets, missing image
/// sources and so on) are never reported through this type. They degrade to
/// valid Markdown and are logged instead.
#[derive(Debug, Error)]
pub enum MdfyError {
  /// Table input was neither a mapping nor a list of mappings.
  #[error("Invalid table input: {0}")]
  InvalidTableInput(String),

  /// A table of contents was rendered without any content to scan.
  #[error(
    "No contents provided. Either an explicit snapshot or the surrounding \
     document must be supplied."
  )]
  MissingTocContents,

  /// The requested output encoding label is not known.
  #[error("Unsupported output encoding: {0}")]
  UnsupportedEncoding(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

/// Result type for `mdfy-core` operations.
pub type Result<T> = std::result::Result<T, MdfyError>;
