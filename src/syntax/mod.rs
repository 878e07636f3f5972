// Schema tree handed to the verifier by the parser
pub mod elements;
pub mod file;
pub mod parser;
pub mod types;

pub use elements::{
    EnumConstant, EnumDef, ExtendDef, FieldDef, MessageDef, OptionDef, RpcDef, ServiceDef,
};
pub use file::ProtoFile;
#[cfg(feature = "interchange")]
pub use parser::JsonSchemaParser;
pub use parser::{ParseError, SchemaParser};
pub use types::{DataType, ScalarType};
