//! Type reference resolution for fields and RPCs.
//!
//! # Lookup order
//!
//! For a field type:
//!
//! 1. **Dotted, main package** - qualify with the main package (unless already
//!    qualified) and look in the main oracle: messages, then enums
//! 2. **Dotted, imported package** - look the name up unchanged in that
//!    package's oracle: messages, then enums
//! 3. **Bare name** - nested messages/enums of the owning message first, then
//!    the top-level messages/enums of the file
//!
//! RPC request/response types follow the same branching but only ever match
//! messages, and bare names only see top-level messages.

use smol_str::SmolStr;

use super::diagnostics::VerifyError;
use super::oracle::{Oracle, PackageMap};
use crate::base::{PackageRef, normalize, qualify_in, resolve_package};
use crate::syntax::{EnumDef, FieldDef, MessageDef, ProtoFile};

/// A named-type field together with the message declaring it.
#[derive(Clone, Copy, Debug)]
pub struct FieldRef<'a> {
    pub field: &'a FieldDef,
    /// The referenced type name.
    pub type_name: &'a str,
    pub owner: &'a MessageDef,
}

/// Collect every field of a named type, nested messages included.
pub fn named_fields(messages: &[MessageDef]) -> Vec<FieldRef<'_>> {
    let mut out = Vec::new();
    collect_named_fields(messages, &mut out);
    out
}

fn collect_named_fields<'a>(messages: &'a [MessageDef], out: &mut Vec<FieldRef<'a>>) {
    for msg in messages {
        out.extend(msg.fields.iter().filter_map(|field| {
            field.ty.named().map(|type_name| FieldRef {
                field,
                type_name,
                owner: msg,
            })
        }));
        collect_named_fields(&msg.messages, out);
    }
}

/// What kinds of declarations a reference may resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Namespace {
    MessagesAndEnums,
    MessagesOnly,
}

impl Namespace {
    fn matches(self, oracle: &Oracle, qualified_name: &str) -> bool {
        match self {
            Namespace::MessagesAndEnums => oracle.has_type(qualified_name),
            Namespace::MessagesOnly => oracle.has_message(qualified_name),
        }
    }
}

/// Resolves type references of one file against the package map.
#[derive(Clone, Copy, Debug)]
pub struct TypeResolver<'a> {
    file: &'a ProtoFile,
    packages: &'a PackageMap,
    /// Dependency package names (main package excluded).
    imported: &'a [SmolStr],
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver for `file`.
    pub fn new(file: &'a ProtoFile, packages: &'a PackageMap, imported: &'a [SmolStr]) -> Self {
        Self {
            file,
            packages,
            imported,
        }
    }

    /// Check that every named field type in the file is defined.
    pub fn check_fields(&self) -> Result<(), VerifyError> {
        for field_ref in named_fields(&self.file.messages) {
            self.check_field(&field_ref)?;
        }
        Ok(())
    }

    /// Check that one field type is defined.
    pub fn check_field(&self, field_ref: &FieldRef<'_>) -> Result<(), VerifyError> {
        if self.resolves_field_type(field_ref.type_name, field_ref.owner) {
            return Ok(());
        }
        Err(VerifyError::undefined_field_type(
            field_ref.field.name.as_str(),
            field_ref.type_name,
        ))
    }

    /// Check that every RPC request and response type is a defined message.
    pub fn check_rpcs(&self) -> Result<(), VerifyError> {
        for service in &self.file.services {
            for rpc in &service.rpcs {
                for type_name in [&rpc.request, &rpc.response] {
                    if !self.resolves_rpc_type(type_name) {
                        return Err(VerifyError::undefined_rpc_type(
                            service.name.as_str(),
                            rpc.name.as_str(),
                            type_name.as_str(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Check if a field type resolves from within `owner`.
    pub fn resolves_field_type(&self, type_name: &str, owner: &MessageDef) -> bool {
        let type_name = normalize(type_name);
        if type_name.contains('.') {
            return self.resolves_dotted(type_name, Namespace::MessagesAndEnums);
        }

        // Innermost scope first
        declares_type(type_name, &owner.messages, &owner.enums)
            || declares_type(type_name, &self.file.messages, &self.file.enums)
    }

    /// Check if an RPC type resolves to a message.
    pub fn resolves_rpc_type(&self, type_name: &str) -> bool {
        let type_name = normalize(type_name);
        if type_name.contains('.') {
            return self.resolves_dotted(type_name, Namespace::MessagesOnly);
        }
        declares_message(type_name, &self.file.messages)
    }

    fn resolves_dotted(&self, type_name: &str, namespace: Namespace) -> bool {
        match resolve_package(type_name, self.imported) {
            PackageRef::Main => {
                let main = self.file.package.as_str();
                let qualified = qualify_in(main, type_name);
                self.packages
                    .get(main)
                    .is_some_and(|oracle| namespace.matches(oracle, &qualified))
            }
            // Cross-package references are already fully qualified
            PackageRef::Import(pkg) => self
                .packages
                .get(pkg)
                .is_some_and(|oracle| namespace.matches(oracle, type_name)),
        }
    }
}

fn declares_message(name: &str, messages: &[MessageDef]) -> bool {
    messages.iter().any(|msg| msg.name == name)
}

fn declares_type(name: &str, messages: &[MessageDef], enums: &[EnumDef]) -> bool {
    declares_message(name, messages) || enums.iter().any(|en| en.name == name)
}
