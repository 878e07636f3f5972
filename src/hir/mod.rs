//! Semantic model — cross-file symbol resolution and validation.
//!
//! ## Key Data Structures
//!
//! - [`Oracle`] - Qualified message/enum names of one package
//! - [`PackageMap`] - Package name → oracle, built per verification
//! - [`TypeResolver`] - Field and RPC type reference checks
//! - [`Verifier`] - The full pipeline

mod dependencies;
mod diagnostics;
mod imports;
mod oracle;
mod pipeline;
mod resolve;
mod uniqueness;

pub use dependencies::{check_syntax, merge_main_package, resolve_dependencies};
pub use diagnostics::{VerifyError, codes};
pub use imports::{OPTION_CARRIERS, check_imports_used, is_option_carrier};
pub use oracle::{Oracle, PackageMap};
pub use pipeline::{Verifier, verify};
pub use resolve::{FieldRef, TypeResolver, named_fields};
pub use uniqueness::{
    check_enum_constants, check_enum_constants_in_message, check_tag_aliases,
    check_tag_aliases_in_message, check_unique_names, package_scope,
};
