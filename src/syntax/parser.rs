//! Boundary to the schema parser.
//!
//! Tokenizing and parsing `.proto` text lives outside this crate. The
//! verifier only needs something that turns the source of an imported file
//! into a [`ProtoFile`].

use super::file::ProtoFile;

/// Error produced by a [`SchemaParser`].
pub type ParseError = Box<dyn std::error::Error + Send + Sync>;

/// Turns schema source text into a tree.
pub trait SchemaParser {
    /// Parse the source of one schema file.
    fn parse(&self, source: &str) -> Result<ProtoFile, ParseError>;
}

impl<F> SchemaParser for F
where
    F: Fn(&str) -> Result<ProtoFile, ParseError>,
{
    fn parse(&self, source: &str) -> Result<ProtoFile, ParseError> {
        self(source)
    }
}

/// Parser for schema trees exchanged as JSON.
#[cfg(feature = "interchange")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSchemaParser;

#[cfg(feature = "interchange")]
impl SchemaParser for JsonSchemaParser {
    fn parse(&self, source: &str) -> Result<ProtoFile, ParseError> {
        Ok(serde_json::from_str(source)?)
    }
}
