//! Line structure tokens
//!
//! The outer structure of a `.lang` file only depends on a handful of characters: line
//! terminators, `=` and tabs. Everything else is an opaque chunk which is later sliced
//! back out of the source. Values are not tokenized here; that is the contextual
//! scanner's job once the value region is known.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken {
    #[regex(r"\r?\n")]
    Newline,

    #[token("\0")]
    Nul,

    /// A carriage return not followed by a line feed. Part of the line.
    #[token("\r")]
    CarriageReturn,

    #[token("=")]
    Assign,

    #[token("\t")]
    Tab,

    #[regex(r"[^=\t\r\n\x00]+")]
    Chunk,
}

impl LineToken {
    /// Newline and NUL end a line.
    pub fn is_terminator(self) -> bool {
        matches!(self, LineToken::Newline | LineToken::Nul)
    }
}

/// Lex the whole source into line structure tokens with their byte ranges.
pub fn tokenize(source: &str) -> Vec<(LineToken, Range<usize>)> {
    LineToken::lexer(source)
        .spanned()
        // Every character is covered by some token, so errors cannot occur
        .map(|(token, span)| (token.unwrap_or(LineToken::Chunk), span))
        .collect()
}
