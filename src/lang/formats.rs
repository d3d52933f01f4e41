//! Output formats
//!
//! Documents can be rendered as tags (see [tag]), JSON or YAML. Token lists (the output
//! of the tokenizer for a single value) render as JSON or YAML records carrying the kind,
//! the span and the covered text, or as one line per token.

pub mod tag;

use crate::lang::parsing::Document;
use crate::lang::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

pub use tag::serialize_document as serialize_tag;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (available: tag, json, yaml)")]
    Unknown(String),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tag,
    Json,
    Yaml,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Tag => "tag",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(Format::Tag),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(FormatError::Unknown(other.to_string())),
        }
    }
}

impl From<langfile_config::OutputFormat> for Format {
    fn from(format: langfile_config::OutputFormat) -> Self {
        match format {
            langfile_config::OutputFormat::Tag => Format::Tag,
            langfile_config::OutputFormat::Json => Format::Json,
            langfile_config::OutputFormat::Yaml => Format::Yaml,
        }
    }
}

/// Render a parsed document.
pub fn render_document(
    doc: &Document,
    format: Format,
    pretty: bool,
) -> Result<String, FormatError> {
    match format {
        Format::Tag => Ok(serialize_tag(doc)),
        Format::Json => to_json(doc, pretty),
        Format::Yaml => Ok(serde_yaml::to_string(doc)?),
    }
}

/// A token with its text, for serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: TokenKind,
    pub span: Range<usize>,
    pub text: &'a str,
}

pub fn token_records<'a>(source: &'a str, tokens: &[Token]) -> Vec<TokenRecord<'a>> {
    tokens
        .iter()
        .map(|token| TokenRecord {
            kind: token.kind,
            span: token.span.clone(),
            text: token.text(source),
        })
        .collect()
}

/// Render tokens scanned from `source`. The tag format prints one token per line.
pub fn render_tokens(
    source: &str,
    tokens: &[Token],
    format: Format,
    pretty: bool,
) -> Result<String, FormatError> {
    let records = token_records(source, tokens);
    match format {
        Format::Tag => Ok(records
            .iter()
            .map(|record| {
                format!(
                    "{} {}..{} {:?}\n",
                    record.kind, record.span.start, record.span.end, record.text
                )
            })
            .collect()),
        Format::Json => to_json(&records, pretty),
        Format::Yaml => Ok(serde_yaml::to_string(&records)?),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, FormatError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
