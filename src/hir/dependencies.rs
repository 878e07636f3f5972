//! Dependency resolution — loading imported files into the package map.
//!
//! Only the files named by the schema under verification are loaded; their
//! own imports are not followed.

use smol_str::SmolStr;

use super::diagnostics::VerifyError;
use super::oracle::{Oracle, PackageMap};
use crate::project::{FetchError, ImportProvider};
use crate::syntax::{ParseError, ProtoFile, SchemaParser};

/// Check that a file carries a `syntax` statement.
pub fn check_syntax(file: &ProtoFile, origin: &str) -> Result<(), VerifyError> {
    if file.syntax.is_empty() {
        return Err(VerifyError::missing_syntax(origin));
    }
    Ok(())
}

/// Fetch, parse and index every import path, in order.
///
/// Files declaring a package that is already in `packages` are merged into
/// the existing oracle. A path indexed before (e.g. listed as both a plain and
/// a public import) is loaded only once.
pub fn resolve_dependencies(
    provider: &dyn ImportProvider,
    parser: &dyn SchemaParser,
    import_paths: &[SmolStr],
    packages: &mut PackageMap,
) -> Result<(), VerifyError> {
    for path in import_paths {
        if packages.is_loaded(path) {
            tracing::trace!("[DEPS] '{}' already indexed, skipping", path);
            continue;
        }
        let file = load_dependency(provider, parser, path)?;
        check_syntax(&file, &format!("dependency module {}", path))?;

        let oracle = Oracle::from_dependency(file);
        tracing::debug!(
            "[DEPS] '{}' -> package '{}' ({} names)",
            path,
            oracle.package(),
            oracle.len()
        );
        packages.insert_or_merge(oracle);
        packages.mark_loaded(path);
    }
    Ok(())
}

fn load_dependency(
    provider: &dyn ImportProvider,
    parser: &dyn SchemaParser,
    path: &str,
) -> Result<ProtoFile, VerifyError> {
    let fetch_error = |source: FetchError| VerifyError::ImportFetch {
        path: path.to_string(),
        source,
    };

    let bytes = provider.provide(path).map_err(fetch_error)?;
    if bytes.is_empty() {
        return Err(fetch_error(FetchError::Empty));
    }

    let parse_error = |source: ParseError| VerifyError::DependencyParse {
        path: path.to_string(),
        source,
    };

    let source = String::from_utf8(bytes).map_err(|err| parse_error(err.into()))?;
    parser.parse(&source).map_err(parse_error)
}

/// Register the schema under verification in the package map.
///
/// When an import declares the same package, the package is authored across
/// several files: the names are merged into the existing oracle and the
/// declarations of those files are appended to `file`.
pub fn merge_main_package(file: &mut ProtoFile, packages: &mut PackageMap) {
    let oracle = Oracle::build(file);

    let Some(existing) = packages.get_mut(&file.package) else {
        packages.insert_or_merge(oracle);
        return;
    };

    existing.merge(oracle);
    for source in existing.sources() {
        file.append_declarations(source);
    }
    tracing::debug!(
        "[DEPS] package '{}' spans {} imported file(s), merged into main schema",
        existing.package(),
        existing.sources().len()
    );
}
