//! A parsed schema file.

use smol_str::SmolStr;

use super::elements::{EnumDef, ExtendDef, MessageDef, OptionDef, ServiceDef};

/// The tree of one parsed `.proto` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProtoFile {
    /// Declared package, empty if there is no `package` statement.
    pub package: SmolStr,
    /// The `syntax = "..."` marker. Must not be empty.
    pub syntax: SmolStr,
    /// `import "path";` statements.
    pub imports: Vec<SmolStr>,
    /// `import public "path";` statements.
    pub public_imports: Vec<SmolStr>,
    pub options: Vec<OptionDef>,
    pub messages: Vec<MessageDef>,
    pub enums: Vec<EnumDef>,
    pub extends: Vec<ExtendDef>,
    pub services: Vec<ServiceDef>,
}

impl ProtoFile {
    /// Create an empty file with a package and syntax marker.
    pub fn new(package: impl Into<SmolStr>, syntax: impl Into<SmolStr>) -> Self {
        Self {
            package: package.into(),
            syntax: syntax.into(),
            ..Self::default()
        }
    }

    /// Add an import.
    pub fn with_import(mut self, path: impl Into<SmolStr>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Add a public import.
    pub fn with_public_import(mut self, path: impl Into<SmolStr>) -> Self {
        self.public_imports.push(path.into());
        self
    }

    /// Add a file-level option.
    pub fn with_option(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.push(OptionDef::new(name, value));
        self
    }

    /// Add a top-level message.
    pub fn with_message(mut self, message: MessageDef) -> Self {
        self.messages.push(message);
        self
    }

    /// Add a top-level enum.
    pub fn with_enum(mut self, en: EnumDef) -> Self {
        self.enums.push(en);
        self
    }

    /// Add an extend declaration.
    pub fn with_extend(mut self, target: impl Into<SmolStr>) -> Self {
        self.extends.push(ExtendDef::new(target));
        self
    }

    /// Add a service.
    pub fn with_service(mut self, service: ServiceDef) -> Self {
        self.services.push(service);
        self
    }

    /// Check if the file declares any import, public or not.
    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty() || !self.public_imports.is_empty()
    }

    /// Append the declarations of another file of the same package.
    ///
    /// Package, syntax and services are left untouched.
    pub fn append_declarations(&mut self, other: &ProtoFile) {
        self.imports.extend(other.imports.iter().cloned());
        self.public_imports.extend(other.public_imports.iter().cloned());
        self.options.extend(other.options.iter().cloned());
        self.messages.extend(other.messages.iter().cloned());
        self.enums.extend(other.enums.iter().cloned());
        self.extends.extend(other.extends.iter().cloned());
    }
}
