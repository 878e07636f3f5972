//! Declarations of a schema tree: messages, fields, enums, services.
//!
//! These are produced by the parser collaborator. Builder methods exist so
//! that trees can also be assembled by hand (embedders, tests).

use smol_str::SmolStr;

use super::types::DataType;

/// Split the simple name off a qualified name.
///
/// "pkg.Outer.Inner" -> "Inner"
fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, name)| name)
}

/// An `option name = value;` statement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionDef {
    pub name: SmolStr,
    /// The option value as written, e.g. `"true"`.
    pub value: SmolStr,
}

impl OptionDef {
    /// Create a new option.
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A message field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    pub name: SmolStr,
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub ty: DataType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub number: i32,
}

impl FieldDef {
    /// Create a new field.
    pub fn new(name: impl Into<SmolStr>, ty: DataType, number: i32) -> Self {
        Self {
            name: name.into(),
            ty,
            number,
        }
    }
}

/// A message declaration, possibly nested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MessageDef {
    /// Simple name, e.g. `Inner`.
    pub name: SmolStr,
    /// Package and enclosing-message qualified name, e.g. `pkg.Outer.Inner`.
    pub qualified_name: SmolStr,
    pub fields: Vec<FieldDef>,
    /// Nested messages.
    pub messages: Vec<MessageDef>,
    /// Nested enums.
    pub enums: Vec<EnumDef>,
    pub options: Vec<OptionDef>,
}

impl MessageDef {
    /// Create a message from its qualified name.
    ///
    /// The simple name is the last dotted segment.
    pub fn new(qualified_name: impl Into<SmolStr>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: SmolStr::new(simple_name(&qualified_name)),
            qualified_name,
            ..Self::default()
        }
    }

    /// Add a field. The field number is its 1-based position.
    pub fn with_field(mut self, name: impl Into<SmolStr>, ty: DataType) -> Self {
        let number = self.fields.len() as i32 + 1;
        self.fields.push(FieldDef::new(name, ty, number));
        self
    }

    /// Add a nested message.
    pub fn with_message(mut self, message: MessageDef) -> Self {
        self.messages.push(message);
        self
    }

    /// Add a nested enum.
    pub fn with_enum(mut self, en: EnumDef) -> Self {
        self.enums.push(en);
        self
    }

    /// Add an option.
    pub fn with_option(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.push(OptionDef::new(name, value));
        self
    }
}

/// A single enum value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumConstant {
    pub name: SmolStr,
    pub tag: i32,
}

/// An enum declaration, possibly nested in a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnumDef {
    pub name: SmolStr,
    pub qualified_name: SmolStr,
    pub constants: Vec<EnumConstant>,
    pub options: Vec<OptionDef>,
}

impl EnumDef {
    /// Create an enum from its qualified name.
    pub fn new(qualified_name: impl Into<SmolStr>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: SmolStr::new(simple_name(&qualified_name)),
            qualified_name,
            ..Self::default()
        }
    }

    /// Add a constant.
    pub fn with_constant(mut self, name: impl Into<SmolStr>, tag: i32) -> Self {
        self.constants.push(EnumConstant {
            name: name.into(),
            tag,
        });
        self
    }

    /// Add an option.
    pub fn with_option(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.push(OptionDef::new(name, value));
        self
    }

    /// Check if `option allow_alias = true;` is set on this enum.
    pub fn allows_alias(&self) -> bool {
        self.options
            .iter()
            .any(|op| op.name == "allow_alias" && op.value == "true")
    }
}

/// A remote procedure call of a service.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct RpcDef {
    pub name: SmolStr,
    /// Request message type reference.
    pub request: SmolStr,
    /// Response message type reference.
    pub response: SmolStr,
}

/// A service declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ServiceDef {
    pub name: SmolStr,
    pub rpcs: Vec<RpcDef>,
}

impl ServiceDef {
    /// Create an empty service.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            rpcs: Vec::new(),
        }
    }

    /// Add an RPC.
    pub fn with_rpc(
        mut self,
        name: impl Into<SmolStr>,
        request: impl Into<SmolStr>,
        response: impl Into<SmolStr>,
    ) -> Self {
        self.rpcs.push(RpcDef {
            name: name.into(),
            request: request.into(),
            response: response.into(),
        });
        self
    }
}

/// An `extend Target { ... }` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendDef {
    /// Fully-qualified name of the extended type.
    pub target: SmolStr,
}

impl ExtendDef {
    /// Create an extension of `target`.
    pub fn new(target: impl Into<SmolStr>) -> Self {
        Self {
            target: target.into(),
        }
    }
}
