//! Import usage — every imported package must be referenced.

use smol_str::SmolStr;

use super::diagnostics::VerifyError;
use super::oracle::PackageMap;
use crate::base::{normalize, package_prefix, resolve_package};
use crate::syntax::{MessageDef, ProtoFile};

/// Types extended to declare custom options.
pub const OPTION_CARRIERS: [&str; 7] = [
    "google.protobuf.FileOptions",
    "google.protobuf.MessageOptions",
    "google.protobuf.FieldOptions",
    "google.protobuf.EnumOptions",
    "google.protobuf.EnumValueOptions",
    "google.protobuf.ServiceOptions",
    "google.protobuf.MethodOptions",
];

/// Check if a type name is one of the well-known option carriers.
pub fn is_option_carrier(name: &str) -> bool {
    OPTION_CARRIERS.contains(&normalize(name))
}

/// Check that every imported package is in use.
///
/// `imported` lists the dependency packages (main package excluded). The
/// first unused one is reported.
pub fn check_imports_used(
    file: &ProtoFile,
    packages: &PackageMap,
    imported: &[SmolStr],
) -> Result<(), VerifyError> {
    // Extending an option carrier or an imported type counts for all imports.
    let extends_broadly = file.extends.iter().any(|ext| {
        is_option_carrier(&ext.target)
            || resolve_package(normalize(&ext.target), imported)
                .import()
                .is_some()
    });
    if extends_broadly {
        return Ok(());
    }

    for pkg in imported {
        if !is_package_used(file, packages, imported, pkg) {
            return Err(VerifyError::unused_import(pkg.as_str()));
        }
    }
    Ok(())
}

fn is_package_used(
    file: &ProtoFile,
    packages: &PackageMap,
    imported: &[SmolStr],
    pkg: &str,
) -> bool {
    if provides_extensions(packages, pkg) {
        return true;
    }

    let rpc_uses = file.services.iter().flat_map(|s| &s.rpcs).any(|rpc| {
        uses_package(&rpc.request, pkg, imported) || uses_package(&rpc.response, pkg, imported)
    });

    rpc_uses || messages_use_package(&file.messages, pkg, imported)
}

/// An imported package defining custom options (or extending another known
/// package) is used by merely being imported.
fn provides_extensions(packages: &PackageMap, pkg: &str) -> bool {
    let Some(oracle) = packages.get(pkg) else {
        return false;
    };
    oracle.extends().iter().any(|target| {
        is_option_carrier(target) || packages.contains(package_prefix(normalize(target)))
    })
}

fn messages_use_package(messages: &[MessageDef], pkg: &str, imported: &[SmolStr]) -> bool {
    messages.iter().any(|msg| {
        msg.fields
            .iter()
            .filter_map(|f| f.ty.named())
            .any(|name| uses_package(name, pkg, imported))
            || messages_use_package(&msg.messages, pkg, imported)
    })
}

/// Check if a dotted type name refers to exactly `pkg`.
fn uses_package(type_name: &str, pkg: &str, imported: &[SmolStr]) -> bool {
    let type_name = normalize(type_name);
    type_name.contains('.') && resolve_package(type_name, imported).import() == Some(pkg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::oracle::Oracle;
    use crate::syntax::{DataType, ServiceDef};

    fn packages_with(deps: &[ProtoFile]) -> (PackageMap, Vec<SmolStr>) {
        let mut packages = PackageMap::new();
        for dep in deps {
            packages.insert_or_merge(Oracle::from_dependency(dep.clone()));
        }
        let imported = packages.dependency_packages("main");
        (packages, imported)
    }

    fn other_dep() -> ProtoFile {
        ProtoFile::new("pkg.other", "proto3").with_message(MessageDef::new("pkg.other.Msg"))
    }

    #[test]
    fn test_unused_import_reported() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_field("id", DataType::from_name("int32")),
        );

        let err = check_imports_used(&file, &packages, &imported).unwrap_err();
        assert!(matches!(err, VerifyError::UnusedImport { ref package } if package == "pkg.other"));
    }

    #[test]
    fn test_field_reference_marks_used() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_message(
                MessageDef::new("main.M.Deep")
                    .with_field("other", DataType::from_name("pkg.other.Msg")),
            ),
        );

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_absolute_field_reference_marks_used() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_field("other", DataType::from_name(".pkg.other.Msg")),
        );

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_map_field_does_not_mark_used() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_field(
                "by_id",
                DataType::map(
                    crate::syntax::ScalarType::String,
                    DataType::from_name("pkg.other.Msg"),
                ),
            ),
        );

        assert!(check_imports_used(&file, &packages, &imported).is_err());
    }

    #[test]
    fn test_rpc_reference_marks_used() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3")
            .with_message(MessageDef::new("main.Req"))
            .with_service(ServiceDef::new("Svc").with_rpc("Call", "Req", "pkg.other.Msg"));

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_option_carrier_extension_marks_all_used() {
        let unrelated = ProtoFile::new("pkg.unrelated", "proto3");
        let (packages, imported) = packages_with(&[other_dep(), unrelated]);
        let file = ProtoFile::new("main", "proto3").with_extend("google.protobuf.MessageOptions");

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_extending_imported_type_marks_all_used() {
        let unrelated = ProtoFile::new("pkg.unrelated", "proto3");
        let (packages, imported) = packages_with(&[other_dep(), unrelated]);
        let file = ProtoFile::new("main", "proto3").with_extend("pkg.other.Msg");

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_custom_options_provider_is_used() {
        let options =
            ProtoFile::new("my.options", "proto2").with_extend("google.protobuf.FieldOptions");
        let (packages, imported) = packages_with(&[options]);
        let file = ProtoFile::new("main", "proto3");

        assert!(check_imports_used(&file, &packages, &imported).is_ok());
    }

    #[test]
    fn test_extending_another_known_package_is_used() {
        let base =
            ProtoFile::new("pkg.base", "proto3").with_message(MessageDef::new("pkg.base.Msg"));
        let ext = ProtoFile::new("pkg.ext", "proto2").with_extend("pkg.base.Msg");
        let (packages, imported) = packages_with(&[base, ext]);

        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_field("base", DataType::from_name("pkg.base.Msg")),
        );
        assert!(check_imports_used(&file, &packages, &imported).is_ok());

        // Nothing referenced: the extending package is still in use
        let bare = ProtoFile::new("main", "proto3");
        let err = check_imports_used(&bare, &packages, &imported).unwrap_err();
        assert!(matches!(err, VerifyError::UnusedImport { ref package } if package == "pkg.base"));
        assert!(is_package_used(&bare, &packages, &imported, "pkg.ext"));
    }

    #[test]
    fn test_extending_unknown_package_is_not_used() {
        let ext = ProtoFile::new("pkg.ext", "proto2").with_extend("pkg.missing.Msg");
        let (packages, imported) = packages_with(&[ext]);
        let file = ProtoFile::new("main", "proto3");

        let err = check_imports_used(&file, &packages, &imported).unwrap_err();
        assert!(matches!(err, VerifyError::UnusedImport { ref package } if package == "pkg.ext"));
    }

    #[test]
    fn test_first_unused_import_wins() {
        let first = ProtoFile::new("pkg.first", "proto3");
        let second = ProtoFile::new("pkg.second", "proto3");
        let (packages, imported) = packages_with(&[first, second]);
        let file = ProtoFile::new("main", "proto3");

        let err = check_imports_used(&file, &packages, &imported).unwrap_err();
        assert_eq!(err.to_string(), "imported package pkg.first is not used");
    }

    #[test]
    fn test_unknown_prefix_does_not_mark_used() {
        let (packages, imported) = packages_with(&[other_dep()]);
        let file = ProtoFile::new("main", "proto3").with_message(
            MessageDef::new("main.M").with_field("x", DataType::from_name("pkg.typo.Msg")),
        );

        assert!(check_imports_used(&file, &packages, &imported).is_err());
    }

    #[test]
    fn test_is_option_carrier() {
        assert!(is_option_carrier("google.protobuf.EnumValueOptions"));
        assert!(is_option_carrier(".google.protobuf.MethodOptions"));
        assert!(!is_option_carrier("google.protobuf.Timestamp"));
    }
}
