//! # pbverify
//!
//! Semantic validation of parsed protobuf schemas: cross-file symbol
//! resolution, import usage, and name/tag uniqueness.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! hir     → Oracles, dependency resolution, validators, Verifier
//!   ↓
//! project → Import providers (in-memory, include paths)
//!   ↓
//! syntax  → Schema tree + parser boundary
//!   ↓
//! base    → Package qualification of dotted names
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use pbverify::{SourceSet, Verifier};
//!
//! let sources = SourceSet::new().with_source("common.proto", common_text);
//! Verifier::new(&parser).with_provider(&sources).verify(&mut file)?;
//! ```

/// Package qualification of dotted type names
pub mod base;

/// Oracles, dependency resolution and the validators
pub mod hir;

/// Import providers
pub mod project;

/// Schema tree and parser boundary
pub mod syntax;

pub use hir::{PackageMap, Verifier, VerifyError, verify};
pub use project::{FetchError, ImportProvider, IncludePaths, SourceSet};
pub use syntax::{ParseError, ProtoFile, SchemaParser};
