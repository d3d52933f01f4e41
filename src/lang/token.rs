//! Token types shared by the scanner, the tokenizer and the document parser.
//!
//!     Values in a `.lang` file are made of five kinds of spans:
//!
//!         - Text: plain message text
//!         - Linebreak: the fixed marker ~LINEBREAK~
//!         - FormatCode: a section sign followed by one style character (§c, §l, ...)
//!         - InputKey: a named placeholder, :_input_<name>:
//!         - FormatSpecifier: printf-style placeholders, %s %2$d %.2f
//!
//!     Tokens only carry their kind and the byte range they cover in the scanned source.
//!     The text is recovered by slicing the source, see [Token::text].
//!
//!     Which kinds the scanner may attempt on a given call is expressed as a
//!     [TokenKindSet], a small bitset supplied fresh by the caller every time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The kind of a scanned token.
///
/// The declaration order matches the external token indices of the grammar, see
/// [TokenKindSet::from_valid_symbols].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Text,
    Linebreak,
    FormatCode,
    InputKey,
    FormatSpecifier,
}

impl TokenKind {
    /// Every kind, in grammar index order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Text,
        TokenKind::Linebreak,
        TokenKind::FormatCode,
        TokenKind::InputKey,
        TokenKind::FormatSpecifier,
    ];

    /// The order in which the scanner attempts kinds. Text is the fallback and goes last.
    pub const PRIORITY: [TokenKind; 5] = [
        TokenKind::Linebreak,
        TokenKind::FormatCode,
        TokenKind::FormatSpecifier,
        TokenKind::InputKey,
        TokenKind::Text,
    ];

    /// Snake case name, as used in the grammar and in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Linebreak => "linebreak",
            TokenKind::FormatCode => "format_code",
            TokenKind::InputKey => "input_key",
            TokenKind::FormatSpecifier => "format_specifier",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a token kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind '{0}' (expected one of: text, linebreak, format_code, input_key, format_specifier)")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A set of token kinds, the "valid symbols" mask handed to the scanner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenKindSet(u8);

impl TokenKindSet {
    pub const fn empty() -> Self {
        TokenKindSet(0)
    }

    pub const fn all() -> Self {
        TokenKindSet(0b1_1111)
    }

    pub fn single(kind: TokenKind) -> Self {
        TokenKindSet(kind.bit())
    }

    /// Build a set from a boolean mask indexed by grammar order
    /// (text, linebreak, format_code, input_key, format_specifier).
    /// Missing trailing entries count as `false`.
    pub fn from_valid_symbols(valid_symbols: &[bool]) -> Self {
        TokenKind::ALL
            .into_iter()
            .zip(valid_symbols)
            .filter(|(_, valid)| **valid)
            .map(|(kind, _)| kind)
            .collect()
    }

    pub fn with(mut self, kind: TokenKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn without(mut self, kind: TokenKind) -> Self {
        self.remove(kind);
        self
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: TokenKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Kinds in the set, in grammar index order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<TokenKind> for TokenKindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = TokenKindSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Debug for TokenKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A scanned token: its kind and the byte range it covers in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Token { kind, span }
    }

    /// The source text covered by this token.
    ///
    /// `source` must be the text the token was scanned from; out of range spans
    /// yield an empty string.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.clone()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
