//! In-memory import sources.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use smol_str::SmolStr;

use super::{FetchError, ImportProvider};

/// Maps import paths to their source text.
///
/// Thread-safe via internal locking, so one set can back several
/// verifications.
#[derive(Debug, Default)]
pub struct SourceSet {
    sources: RwLock<IndexMap<SmolStr, Arc<str>>>,
}

impl SourceSet {
    /// Create a new empty source set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source for an import path, replacing any previous one.
    pub fn insert(&self, path: impl Into<SmolStr>, source: impl Into<Arc<str>>) {
        self.sources.write().insert(path.into(), source.into());
    }

    /// Builder form of [`SourceSet::insert`].
    pub fn with_source(self, path: impl Into<SmolStr>, source: impl Into<Arc<str>>) -> Self {
        self.insert(path, source);
        self
    }

    /// Remove the source for an import path.
    pub fn remove(&self, path: &str) -> Option<Arc<str>> {
        self.sources.write().shift_remove(path)
    }

    /// Get the source for an import path.
    pub fn source(&self, path: &str) -> Option<Arc<str>> {
        self.sources.read().get(path).cloned()
    }

    /// Check if a source is registered for the path.
    pub fn contains(&self, path: &str) -> bool {
        self.sources.read().contains_key(path)
    }

    /// Registered import paths, in insertion order.
    pub fn paths(&self) -> Vec<SmolStr> {
        self.sources.read().keys().cloned().collect()
    }

    /// Get the number of sources.
    pub fn len(&self) -> usize {
        self.sources.read().len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImportProvider for SourceSet {
    fn provide(&self, import_path: &str) -> Result<Vec<u8>, FetchError> {
        self.source(import_path)
            .map(|source| source.as_bytes().to_vec())
            .ok_or_else(|| FetchError::not_found(import_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_set_basic() {
        let set = SourceSet::new()
            .with_source("a.proto", "package a;")
            .with_source("b.proto", "package b;");

        assert_eq!(set.len(), 2);
        assert!(set.contains("a.proto"));
        assert_eq!(set.source("b.proto").as_deref(), Some("package b;"));
        assert_eq!(set.paths(), vec![SmolStr::new("a.proto"), SmolStr::new("b.proto")]);
    }

    #[test]
    fn test_source_set_replace_and_remove() {
        let set = SourceSet::new();
        set.insert("a.proto", "old");
        set.insert("a.proto", "new");
        assert_eq!(set.len(), 1);
        assert_eq!(set.source("a.proto").as_deref(), Some("new"));

        set.remove("a.proto");
        assert!(set.is_empty());
    }

    #[test]
    fn test_source_set_provide() {
        let set = SourceSet::new().with_source("a.proto", "content");

        assert_eq!(set.provide("a.proto").unwrap(), b"content".to_vec());
        assert!(matches!(
            set.provide("missing.proto"),
            Err(FetchError::NotFound(path)) if path == "missing.proto"
        ));
    }
}
