//! Import sources looked up on disk.

use std::path::{Path, PathBuf};

use super::{FetchError, ImportProvider};

/// Resolves import paths against an ordered list of include roots.
///
/// The first root containing the file wins, the way `protoc -I` does it.
#[derive(Clone, Debug, Default)]
pub struct IncludePaths {
    roots: Vec<PathBuf>,
}

impl IncludePaths {
    /// Create a provider without any roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Get the include roots in lookup order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the file an import path resolves to.
    pub fn locate(&self, import_path: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(Path::new(import_path)))
            .find(|candidate| candidate.is_file())
    }
}

impl ImportProvider for IncludePaths {
    fn provide(&self, import_path: &str) -> Result<Vec<u8>, FetchError> {
        let path = self
            .locate(import_path)
            .ok_or_else(|| FetchError::not_found(import_path))?;
        tracing::trace!("[IMPORT] '{}' -> {}", import_path, path.display());
        Ok(std::fs::read(&path)?)
    }
}
