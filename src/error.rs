//! Error handling types for css-layer-split
//!
//! This module provides the diagnostics raised while scanning a stylesheet
//! and the errors raised while writing the split layers to disk.

use std::path::PathBuf;
use thiserror::Error;

/// Diagnostics produced by the layer scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// A layer opener was found while another layer was still open.
    ///
    /// Scanning stops immediately and no layers are produced.
    #[error("Layer {layer} is improperly nested")]
    Nested { layer: String },

    /// The input ended while a layer was still open.
    ///
    /// The open layer is dropped; everything else is kept.
    #[error("Layer {layer} was not closed properly")]
    Unterminated { layer: String },
}

/// Errors raised while writing layer files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing a layer file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scan operations
pub type SplitResult<T> = Result<T, SplitError>;

impl SplitError {
    /// Create a nesting error for the layer that was open
    pub fn nested(layer: impl Into<String>) -> Self {
        SplitError::Nested {
            layer: layer.into(),
        }
    }

    /// Create an unterminated layer error
    pub fn unterminated(layer: impl Into<String>) -> Self {
        SplitError::Unterminated {
            layer: layer.into(),
        }
    }

    /// Name of the layer the diagnostic refers to.
    pub fn layer(&self) -> &str {
        match self {
            SplitError::Nested { layer } | SplitError::Unterminated { layer } => layer,
        }
    }

    /// Whether the scan was aborted and produced no output.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SplitError::Nested { .. })
    }
}

impl OutputError {
    /// Create a write error for the given file
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::Write {
            path: path.into(),
            source,
        }
    }
}
