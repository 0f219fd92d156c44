/// Structured error types for exercisectl-core.
///
/// Uses `thiserror` so the importer can wrap these without losing the
/// variant. The binary still reports them through `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog parsing and planning
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Source file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// Document is not valid JSON or lacks required fields
    #[error("Malformed catalog input at {context}: {reason}")]
    MalformedInput { context: String, reason: String },

    /// Equipment label outside the normalization table
    #[error("Unknown equipment '{value}' for exercise at index {index}")]
    UnknownEquipment { value: String, index: usize },
}

/// Result type alias for exercisectl-core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a read error for the given path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed input error with context
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown equipment error
    pub fn unknown_equipment(value: impl Into<String>, index: usize) -> Self {
        Self::UnknownEquipment {
            value: value.into(),
            index,
        }
    }

    /// True for errors caused by the source document rather than its contents
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::MalformedInput { .. })
    }
}
