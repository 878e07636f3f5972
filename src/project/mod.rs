//! Import providers — fetching the content of imported schema files.
//!
//! The verifier asks an [`ImportProvider`] for the bytes of every path named
//! by an `import` statement. Two providers ship with the crate:
//! - [`SourceSet`] - Sources held in memory
//! - [`IncludePaths`] - Sources looked up under a list of root directories

mod include_paths;
mod source_set;

pub use include_paths::IncludePaths;
pub use source_set::SourceSet;

use thiserror::Error;

/// Errors an [`ImportProvider`] can report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No source is known for the import path.
    #[error("import not found: {0}")]
    NotFound(String),

    /// The provider returned no content.
    #[error("provider returned no content")]
    Empty,

    /// IO error while reading the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other provider failure.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Create a not-found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a generic provider error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Provides the content of imported schema files.
///
/// Must be deterministic for a given path within one verification. An empty
/// buffer is treated as a failure by the verifier.
pub trait ImportProvider {
    /// Fetch the content of `import_path`.
    fn provide(&self, import_path: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F> ImportProvider for F
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError>,
{
    fn provide(&self, import_path: &str) -> Result<Vec<u8>, FetchError> {
        self(import_path)
    }
}
