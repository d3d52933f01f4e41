//! Document tree for `.lang` files
//!
//!     A document is a flat list of lines. Every node keeps the byte range it was parsed
//!     from; token spans inside values are offsets into the whole source as well.

use crate::lang::token::{Token, TokenKind};
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Document {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    Blank { span: Range<usize> },
    Comment(Comment),
    Entry(Entry),
}

/// A `##` comment line, or the text after the tab of an inline comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub span: Range<usize>,
}

/// A `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: Option<Value>,
    pub inline_comment: Option<Comment>,
    pub span: Range<usize>,
}

/// The text between `=` and the end of the value region, with its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Value {
    pub raw: String,
    pub tokens: Vec<Token>,
    pub span: Range<usize>,
}

impl Document {
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.lines.iter().filter_map(|line| match line {
            Line::Comment(comment) => Some(comment),
            _ => None,
        })
    }

    /// First entry with the given key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.key == key)
    }
}

impl Entry {
    /// The raw value text, empty when the entry has no value.
    pub fn value_text(&self) -> &str {
        self.value.as_ref().map(|v| v.raw.as_str()).unwrap_or("")
    }
}

impl Value {
    /// Tokens paired with their text.
    pub fn parts(&self) -> impl Iterator<Item = (TokenKind, &str)> + '_ {
        self.tokens.iter().map(move |token| {
            let start = token.span.start - self.span.start;
            let end = token.span.end - self.span.start;
            (token.kind, self.raw.get(start..end).unwrap_or(""))
        })
    }

    /// Whether the value contains any token of `kind`.
    pub fn has(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|token| token.kind == kind)
    }
}
