//! Diagnostics — verification errors.
//!
//! Every check is fail-fast: the first problem aborts the verification and is
//! returned as a [`VerifyError`]. Messages name the offending field, rpc,
//! service or scope so they can be shown to users as-is.

use thiserror::Error;

use crate::project::FetchError;
use crate::syntax::ParseError;

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes for verification errors.
pub mod codes {
    /// Undefined field type.
    pub const UNDEFINED_FIELD_TYPE: &str = "E0001";
    /// Undefined or non-message RPC type.
    pub const UNDEFINED_RPC_TYPE: &str = "E0002";
    /// Duplicate message or enum name in a scope.
    pub const DUPLICATE_NAME: &str = "E0003";
    /// Duplicate enum constant in a scope.
    pub const DUPLICATE_ENUM_CONSTANT: &str = "E0004";
    /// Reused enum tag without `allow_alias`.
    pub const UNALIASED_DUPLICATE_TAG: &str = "E0005";
    /// Imported package never referenced.
    pub const UNUSED_IMPORT: &str = "E0006";
    /// Missing `syntax` statement.
    pub const MISSING_SYNTAX: &str = "E0007";

    /// Verifier set up without an import provider.
    pub const CONFIGURATION: &str = "C0001";
    /// Import provider failed.
    pub const IMPORT_FETCH: &str = "C0002";
    /// Imported file failed to parse.
    pub const DEPENDENCY_PARSE: &str = "C0003";
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors that abort a verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A file has no `syntax` statement.
    #[error("no syntax specified in {origin}")]
    MissingSyntax { origin: String },

    /// The verifier is not set up for the schema (e.g. imports without a provider).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The import provider could not supply a dependency.
    #[error("unable to provide content of dependency module {path}: {source}")]
    ImportFetch {
        path: String,
        #[source]
        source: FetchError,
    },

    /// A dependency could not be parsed.
    #[error("unable to parse dependency {path}: {source}")]
    DependencyParse {
        path: String,
        #[source]
        source: ParseError,
    },

    /// An imported package is never referenced.
    #[error("imported package {package} is not used")]
    UnusedImport { package: String },

    /// A field refers to a type that is not defined.
    #[error("datatype '{type_name}' referenced in field '{field}' is not defined")]
    UndefinedFieldType { field: String, type_name: String },

    /// An RPC refers to a type that is not defined or is not a message.
    #[error(
        "datatype '{type_name}' referenced in rpc '{rpc}' of service '{service}' is not defined or is not a message type"
    )]
    UndefinedRpcType {
        service: String,
        rpc: String,
        type_name: String,
    },

    /// Two messages/enums share a name within one scope.
    #[error("duplicate name {name} in {scope}")]
    DuplicateName { name: String, scope: String },

    /// Two enum constants share a name within one scope.
    #[error("enum constant {name} is already defined in {scope}")]
    DuplicateEnumConstant { name: String, scope: String },

    /// An enum reuses a tag without `allow_alias`.
    #[error(
        "{constant} is reusing an enum value in {enum_name}. If this is intended, set 'option allow_alias = true;' in the enum"
    )]
    UnaliasedDuplicateTag { constant: String, enum_name: String },
}

impl VerifyError {
    /// Create a missing-syntax error.
    pub fn missing_syntax(origin: impl Into<String>) -> Self {
        Self::MissingSyntax {
            origin: origin.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unused-import error.
    pub fn unused_import(package: impl Into<String>) -> Self {
        Self::UnusedImport {
            package: package.into(),
        }
    }

    /// Create an undefined field type error.
    pub fn undefined_field_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UndefinedFieldType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Create an undefined RPC type error.
    pub fn undefined_rpc_type(
        service: impl Into<String>,
        rpc: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UndefinedRpcType {
            service: service.into(),
            rpc: rpc.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::DuplicateName {
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// Create a duplicate enum constant error.
    pub fn duplicate_enum_constant(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::DuplicateEnumConstant {
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// Create an unaliased duplicate tag error.
    pub fn unaliased_duplicate_tag(
        constant: impl Into<String>,
        enum_name: impl Into<String>,
    ) -> Self {
        Self::UnaliasedDuplicateTag {
            constant: constant.into(),
            enum_name: enum_name.into(),
        }
    }

    /// Get the diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::MissingSyntax { .. } => codes::MISSING_SYNTAX,
            VerifyError::Configuration(_) => codes::CONFIGURATION,
            VerifyError::ImportFetch { .. } => codes::IMPORT_FETCH,
            VerifyError::DependencyParse { .. } => codes::DEPENDENCY_PARSE,
            VerifyError::UnusedImport { .. } => codes::UNUSED_IMPORT,
            VerifyError::UndefinedFieldType { .. } => codes::UNDEFINED_FIELD_TYPE,
            VerifyError::UndefinedRpcType { .. } => codes::UNDEFINED_RPC_TYPE,
            VerifyError::DuplicateName { .. } => codes::DUPLICATE_NAME,
            VerifyError::DuplicateEnumConstant { .. } => codes::DUPLICATE_ENUM_CONSTANT,
            VerifyError::UnaliasedDuplicateTag { .. } => codes::UNALIASED_DUPLICATE_TAG,
        }
    }

    /// Check if this error comes from loading dependencies rather than from
    /// the schema content itself.
    pub fn is_loading_error(&self) -> bool {
        matches!(
            self,
            VerifyError::Configuration(_)
                | VerifyError::ImportFetch { .. }
                | VerifyError::DependencyParse { .. }
        )
    }
}
