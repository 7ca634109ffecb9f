//! Errors produced while decoding pom.xml documents.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    /// The input is not well-formed XML or is not a `<project>` document.
    #[error("unable to unmarshal pom file: {message}")]
    Decode { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PomError>;

impl PomError {
    pub(crate) fn decode(message: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: message.to_string(),
        }
    }
}
