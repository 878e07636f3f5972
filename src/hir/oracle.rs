//! Symbol oracles — per-package indexes of qualified type names.
//!
//! An [`Oracle`] answers "is `pkg.Outer.Inner` a message / an enum?" for one
//! package. A package may be spread over several physical files, so oracles
//! of the same package are merged into one entry of the [`PackageMap`].
//!
//! # Lifetime
//!
//! The map is built fresh for every verification and dropped at the end.
//! Entries are merged in place through `get_mut`, never copied out and
//! written back.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::syntax::{MessageDef, ProtoFile};

// ============================================================================
// ORACLE
// ============================================================================

/// Index of the qualified message and enum names of one package.
#[derive(Clone, Debug, Default)]
pub struct Oracle {
    /// The package this oracle describes.
    package: SmolStr,
    /// Qualified names of all messages, nested ones included.
    messages: FxHashSet<SmolStr>,
    /// Qualified names of all enums, nested ones included.
    enums: FxHashSet<SmolStr>,
    /// Targets of the extend declarations of the indexed files.
    extends: Vec<SmolStr>,
    /// Imported files that contributed to this oracle.
    sources: Vec<ProtoFile>,
}

impl Oracle {
    /// Index the messages and enums of a file.
    pub fn build(file: &ProtoFile) -> Self {
        let mut oracle = Self {
            package: file.package.clone(),
            extends: file.extends.iter().map(|ext| ext.target.clone()).collect(),
            ..Self::default()
        };
        for msg in &file.messages {
            oracle.collect_message(msg);
        }
        for en in &file.enums {
            oracle.enums.insert(en.qualified_name.clone());
        }
        oracle
    }

    /// Index an imported file and keep it for the main-package merge.
    pub fn from_dependency(file: ProtoFile) -> Self {
        let mut oracle = Self::build(&file);
        oracle.sources.push(file);
        oracle
    }

    fn collect_message(&mut self, msg: &MessageDef) {
        self.messages.insert(msg.qualified_name.clone());
        for nested in &msg.messages {
            self.collect_message(nested);
        }
        for en in &msg.enums {
            self.enums.insert(en.qualified_name.clone());
        }
    }

    /// Merge another oracle of the same package into this one.
    pub fn merge(&mut self, other: Oracle) {
        tracing::trace!(
            "[ORACLE] merging {} messages, {} enums into package '{}'",
            other.messages.len(),
            other.enums.len(),
            self.package
        );
        self.messages.extend(other.messages);
        self.enums.extend(other.enums);
        self.extends.extend(other.extends);
        self.sources.extend(other.sources);
    }

    /// Get the package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Check if a qualified name is a known message.
    pub fn has_message(&self, qualified_name: &str) -> bool {
        self.messages.contains(qualified_name)
    }

    /// Check if a qualified name is a known enum.
    pub fn has_enum(&self, qualified_name: &str) -> bool {
        self.enums.contains(qualified_name)
    }

    /// Check if a qualified name is a known message or enum.
    pub fn has_type(&self, qualified_name: &str) -> bool {
        self.has_message(qualified_name) || self.has_enum(qualified_name)
    }

    /// Get iterator over all message names.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(SmolStr::as_str)
    }

    /// Get iterator over all enum names.
    pub fn enums(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(SmolStr::as_str)
    }

    /// Get the extend targets declared by the indexed files.
    pub fn extends(&self) -> &[SmolStr] {
        &self.extends
    }

    /// Get the imported files that contributed to this oracle.
    pub fn sources(&self) -> &[ProtoFile] {
        &self.sources
    }

    /// Get count of indexed names (messages + enums).
    pub fn len(&self) -> usize {
        self.messages.len() + self.enums.len()
    }

    /// Check if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.enums.is_empty()
    }
}

// ============================================================================
// PACKAGE MAP
// ============================================================================

/// Package name → oracle, in order of first registration.
#[derive(Clone, Debug, Default)]
pub struct PackageMap {
    oracles: IndexMap<SmolStr, Oracle>,
    /// Import paths already indexed.
    loaded: FxHashSet<SmolStr>,
}

impl PackageMap {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an oracle, merging it into an existing entry of the same
    /// package.
    pub fn insert_or_merge(&mut self, oracle: Oracle) -> &mut Oracle {
        match self.oracles.entry(oracle.package.clone()) {
            indexmap::map::Entry::Occupied(entry) => {
                let existing = entry.into_mut();
                existing.merge(oracle);
                existing
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(oracle),
        }
    }

    /// Record an import path as indexed.
    ///
    /// Returns `false` if the path was recorded before.
    pub fn mark_loaded(&mut self, import_path: &str) -> bool {
        self.loaded.insert(SmolStr::new(import_path))
    }

    /// Check if an import path has been indexed.
    pub fn is_loaded(&self, import_path: &str) -> bool {
        self.loaded.contains(import_path)
    }

    /// Get the oracle of a package.
    pub fn get(&self, package: &str) -> Option<&Oracle> {
        self.oracles.get(package)
    }

    /// Get the oracle of a package (mutable).
    pub fn get_mut(&mut self, package: &str) -> Option<&mut Oracle> {
        self.oracles.get_mut(package)
    }

    /// Check if a package is known.
    pub fn contains(&self, package: &str) -> bool {
        self.oracles.contains_key(package)
    }

    /// Names of all known packages except `main_package`, in registration
    /// order.
    pub fn dependency_packages(&self, main_package: &str) -> Vec<SmolStr> {
        self.oracles
            .keys()
            .filter(|pkg| pkg.as_str() != main_package)
            .cloned()
            .collect()
    }

    /// Iterate over all oracles.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Oracle)> {
        self.oracles.iter().map(|(pkg, oracle)| (pkg.as_str(), oracle))
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.oracles.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.oracles.is_empty()
    }
}
