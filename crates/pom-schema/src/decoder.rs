//! Entry points that turn pom.xml bytes into a [`Project`].

use crate::error::{PomError, Result};
use crate::schema::Mapper;
use crate::types::Project;
use crate::xml;
use serde::Deserialize;
use std::io::Read;

const ROOT_ELEMENT: &str = "project";

/// Decoder settings. Deserializable so callers can embed them in their own
/// configuration files; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecodeOptions {
    /// Strip leading and trailing XML whitespace from scalar values.
    /// Off by default: text fields hold the exact source text.
    pub trim_text: bool,
    /// Maximum element nesting before the document is rejected.
    ///
    /// This is the one case where well-formed XML still fails to decode.
    /// It bounds the recursion used to build, clone and drop the opaque
    /// `configuration` trees. Real POMs stay far below the default.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 1024;

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trim_text: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PomDecoder {
    options: DecodeOptions,
}

impl PomDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a UTF-8 encoded POM document.
    pub fn decode(&self, bytes: &[u8]) -> Result<Project> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| PomError::decode(format!("invalid UTF-8: {e}")))?;
        self.decode_str(content)
    }

    pub fn decode_str(&self, content: &str) -> Result<Project> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let root = xml::parse_document(content, self.options.max_depth)?;

        if root.name != ROOT_ELEMENT {
            return Err(PomError::decode(format!(
                "expected element type <{ROOT_ELEMENT}> but have <{}>",
                root.name
            )));
        }

        let project = Mapper {
            trim_text: self.options.trim_text,
        }
        .project(&root);

        tracing::debug!(
            "Decoded pom.xml: {} dependencies, {} modules, {} profiles",
            project.dependencies.len(),
            project.modules.len(),
            project.profiles.len()
        );

        Ok(project)
    }

    /// Reads the whole stream, then decodes it.
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Project> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.decode(&bytes)
    }
}

/// Decodes with [`DecodeOptions::default`].
pub fn decode(bytes: &[u8]) -> Result<Project> {
    PomDecoder::default().decode(bytes)
}

pub fn decode_str(content: &str) -> Result<Project> {
    PomDecoder::default().decode_str(content)
}

pub fn decode_reader<R: Read>(reader: R) -> Result<Project> {
    PomDecoder::default().decode_reader(reader)
}
