//! The verification pipeline.
//!
//! ```text
//! syntax check
//!   ↓
//! provider check (imports need one)
//!   ↓
//! resolve imports + public imports → PackageMap
//!   ↓
//! main-package self-merge
//!   ↓
//! import usage → field types → rpc types → names → enum constants → tag aliases
//! ```
//!
//! Every step is fail-fast.

use super::dependencies::{check_syntax, merge_main_package, resolve_dependencies};
use super::diagnostics::VerifyError;
use super::imports::check_imports_used;
use super::oracle::PackageMap;
use super::resolve::TypeResolver;
use super::uniqueness::{
    check_enum_constants, check_enum_constants_in_message, check_tag_aliases,
    check_tag_aliases_in_message, check_unique_names, package_scope,
};
use crate::project::ImportProvider;
use crate::syntax::{ProtoFile, SchemaParser};

/// Verifies schema trees.
///
/// # Example
///
/// ```ignore
/// use pbverify::{SourceSet, Verifier};
///
/// let sources = SourceSet::new().with_source("other.proto", other_source);
/// Verifier::new(&parser)
///     .with_provider(&sources)
///     .verify(&mut file)?;
/// ```
#[derive(Clone, Copy)]
pub struct Verifier<'a> {
    parser: &'a dyn SchemaParser,
    provider: Option<&'a dyn ImportProvider>,
}

impl<'a> Verifier<'a> {
    /// Create a verifier without an import provider.
    ///
    /// Files with imports need [`Verifier::with_provider`].
    pub fn new(parser: &'a dyn SchemaParser) -> Self {
        Self {
            parser,
            provider: None,
        }
    }

    /// Set the provider used to fetch imported files.
    pub fn with_provider(mut self, provider: &'a dyn ImportProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Check if an import provider is set.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Verify a file.
    ///
    /// If an import declares the same package as `file`, the declarations of
    /// that import are appended to `file`.
    pub fn verify(&self, file: &mut ProtoFile) -> Result<(), VerifyError> {
        check_syntax(file, "the proto file")?;

        let mut packages = PackageMap::new();
        if file.has_imports() {
            let provider = self.provider.ok_or_else(|| {
                VerifyError::configuration("an import provider is required to verify imports")
            })?;
            resolve_dependencies(provider, self.parser, &file.imports, &mut packages)?;
            resolve_dependencies(provider, self.parser, &file.public_imports, &mut packages)?;
        }

        merge_main_package(file, &mut packages);
        let imported = packages.dependency_packages(&file.package);

        check_imports_used(file, &packages, &imported)?;

        let resolver = TypeResolver::new(file, &packages, &imported);
        resolver.check_fields()?;
        resolver.check_rpcs()?;

        let scope = package_scope(&file.package);
        check_unique_names(&scope, &file.enums, &file.messages)?;

        check_enum_constants(&scope, &file.enums)?;
        for msg in &file.messages {
            check_enum_constants_in_message(msg)?;
        }

        check_tag_aliases(&file.enums)?;
        for msg in &file.messages {
            check_tag_aliases_in_message(msg)?;
        }

        tracing::debug!(
            "[VERIFY] package '{}' ok ({} dependency packages)",
            file.package,
            imported.len()
        );
        Ok(())
    }
}

impl std::fmt::Debug for Verifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("has_provider", &self.has_provider())
            .finish()
    }
}

/// Verify a file with an optional import provider.
///
/// Shorthand for [`Verifier::verify`].
pub fn verify(
    file: &mut ProtoFile,
    provider: Option<&dyn ImportProvider>,
    parser: &dyn SchemaParser,
) -> Result<(), VerifyError> {
    let mut verifier = Verifier::new(parser);
    if let Some(provider) = provider {
        verifier = verifier.with_provider(provider);
    }
    verifier.verify(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{DataType, EnumDef, MessageDef, ParseError};

    fn no_parse(_: &str) -> Result<ProtoFile, ParseError> {
        Err("parser must not be called".into())
    }

    #[test]
    fn test_missing_syntax_comes_first() {
        // Also lacks a provider and has a duplicate; syntax must win
        let mut file = ProtoFile::new("p", "")
            .with_import("a.proto")
            .with_message(MessageDef::new("p.M"))
            .with_message(MessageDef::new("p.M"));

        let err = Verifier::new(&no_parse).verify(&mut file).unwrap_err();
        assert!(matches!(err, VerifyError::MissingSyntax { .. }));
    }

    #[test]
    fn test_imports_without_provider() {
        let mut file = ProtoFile::new("p", "proto3").with_import("a.proto");
        let err = verify(&mut file, None, &no_parse).unwrap_err();
        assert!(matches!(err, VerifyError::Configuration(_)));

        let mut file = ProtoFile::new("p", "proto3").with_public_import("a.proto");
        let err = verify(&mut file, None, &no_parse).unwrap_err();
        assert!(matches!(err, VerifyError::Configuration(_)));
    }

    #[test]
    fn test_no_imports_needs_no_provider() {
        let mut file = ProtoFile::new("p", "proto3")
            .with_enum(EnumDef::new("p.Kind").with_constant("KIND_UNKNOWN", 0))
            .with_message(MessageDef::new("p.M").with_field("kind", DataType::from_name("Kind")));

        assert!(verify(&mut file, None, &no_parse).is_ok());
    }

    #[test]
    fn test_check_order_fields_before_names() {
        let mut file = ProtoFile::new("p", "proto3")
            .with_message(MessageDef::new("p.M").with_field("x", DataType::from_name("Missing")))
            .with_message(MessageDef::new("p.M"));

        let err = verify(&mut file, None, &no_parse).unwrap_err();
        assert!(matches!(err, VerifyError::UndefinedFieldType { .. }));
    }

    #[test]
    fn test_verifier_debug() {
        let verifier = Verifier::new(&no_parse);
        assert!(!verifier.has_provider());
        assert_eq!(format!("{:?}", verifier), "Verifier { has_provider: false }");
    }
}
