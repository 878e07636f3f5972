//! Name and tag uniqueness checks.
//!
//! A scope is either the package or a single message body. Nested messages
//! open a fresh scope of their own.

use rustc_hash::FxHashSet;

use super::diagnostics::VerifyError;
use crate::syntax::{EnumDef, MessageDef};

/// Describe the package scope for error messages.
pub fn package_scope(package: &str) -> String {
    format!("package {}", package)
}

fn message_scope(msg: &MessageDef) -> String {
    format!("message {}", msg.name)
}

/// Check that messages and enums of a scope do not share a name, recursing
/// into every message body.
///
/// Messages and enums share one namespace.
pub fn check_unique_names(
    scope: &str,
    enums: &[EnumDef],
    messages: &[MessageDef],
) -> Result<(), VerifyError> {
    let mut seen = FxHashSet::default();
    let names = enums
        .iter()
        .map(|en| en.name.as_str())
        .chain(messages.iter().map(|msg| msg.name.as_str()));
    for name in names {
        if !seen.insert(name) {
            return Err(VerifyError::duplicate_name(name, scope));
        }
    }

    for msg in messages {
        check_unique_names(&message_scope(msg), &msg.enums, &msg.messages)?;
    }
    Ok(())
}

/// Check that enum constant names are unique across all enums of one scope.
///
/// Does not recurse; see [`check_enum_constants_in_message`].
pub fn check_enum_constants(scope: &str, enums: &[EnumDef]) -> Result<(), VerifyError> {
    let mut seen = FxHashSet::default();
    for constant in enums.iter().flat_map(|en| &en.constants) {
        if !seen.insert(constant.name.as_str()) {
            return Err(VerifyError::duplicate_enum_constant(
                constant.name.as_str(),
                scope,
            ));
        }
    }
    Ok(())
}

/// Check enum constant names in a message and all messages nested in it.
pub fn check_enum_constants_in_message(msg: &MessageDef) -> Result<(), VerifyError> {
    check_enum_constants(&message_scope(msg), &msg.enums)?;
    for nested in &msg.messages {
        check_enum_constants_in_message(nested)?;
    }
    Ok(())
}

/// Check that no enum reuses a tag unless it sets `allow_alias = true`.
pub fn check_tag_aliases(enums: &[EnumDef]) -> Result<(), VerifyError> {
    for en in enums {
        if en.allows_alias() {
            continue;
        }
        let mut tags = FxHashSet::default();
        for constant in &en.constants {
            if !tags.insert(constant.tag) {
                return Err(VerifyError::unaliased_duplicate_tag(
                    constant.name.as_str(),
                    en.name.as_str(),
                ));
            }
        }
    }
    Ok(())
}

/// Check tag aliasing of the enums in a message and all messages nested in it.
pub fn check_tag_aliases_in_message(msg: &MessageDef) -> Result<(), VerifyError> {
    check_tag_aliases(&msg.enums)?;
    for nested in &msg.messages {
        check_tag_aliases_in_message(nested)?;
    }
    Ok(())
}
