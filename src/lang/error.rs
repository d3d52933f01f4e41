//! Crate-level error type
//!
//! The scanner itself never fails: "no token" is a normal `None`. Errors only come from the
//! layers around it (reading files, parsing documents, rendering output, loading config).

use std::path::PathBuf;
use thiserror::Error;

pub use crate::lang::formats::FormatError;
pub use crate::lang::parsing::ParseError;
pub use crate::lang::token::UnknownTokenKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    TokenKind(#[from] UnknownTokenKind),
    #[error("configuration error: {0}")]
    Config(#[from] langfile_config::ConfigError),
}
