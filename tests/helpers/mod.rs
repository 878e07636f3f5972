//! Shared fixtures for integration tests.
//!
//! Imported files are registered as ready-made trees. The source handed out
//! by the provider is just a key the fixture parser looks up again.

#![allow(dead_code)]

use std::collections::HashMap;

use pbverify::{ParseError, ProtoFile, SchemaParser, SourceSet, Verifier, VerifyError};

const PREFIX: &str = "fixture:";

/// Parser resolving `fixture:<path>` sources to registered trees.
#[derive(Default)]
pub struct FixtureParser {
    files: HashMap<String, ProtoFile>,
}

impl SchemaParser for FixtureParser {
    fn parse(&self, source: &str) -> Result<ProtoFile, ParseError> {
        let key = source
            .strip_prefix(PREFIX)
            .ok_or_else(|| format!("not a fixture: '{}'", source))?;
        self.files
            .get(key)
            .cloned()
            .ok_or_else(|| format!("unknown fixture '{}'", key).into())
    }
}

/// Imported files available to a verification.
#[derive(Default)]
pub struct Fixtures {
    pub parser: FixtureParser,
    pub sources: SourceSet,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `file` importable as `path`.
    pub fn with_file(mut self, path: &str, file: ProtoFile) -> Self {
        self.sources.insert(path, format!("{}{}", PREFIX, path));
        self.parser.files.insert(path.to_string(), file);
        self
    }

    /// Make `path` importable with raw source text the parser rejects.
    pub fn with_raw(self, path: &str, source: &str) -> Self {
        self.sources.insert(path, source);
        self
    }

    /// Verify `file` with these fixtures as import provider.
    pub fn verify(&self, file: &mut ProtoFile) -> Result<(), VerifyError> {
        Verifier::new(&self.parser)
            .with_provider(&self.sources)
            .verify(file)
    }
}
