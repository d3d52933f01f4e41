//! Value tokenization
//!
//!     The scanner answers one question at a time. Turning a whole value into tokens is the
//!     job of the grammar driving it, which re-enters the scanner until the value ends. This
//!     module is that driver for standalone use.
//!
//!     When a scan makes no progress the cursor sits on a delimiter that does not start a
//!     special token (the `%` in "50% off", a lone `~`). That character is consumed as a
//!     one-character Text token, which is what the grammar's single-character fallback does.
//!     Every iteration therefore consumes at least one character.
//!
//!     The raw output keeps the scanner's cut points: "50% off" is `50`, `%`, ` off`.
//!     [coalesce_text] merges touching Text tokens into one run.

use crate::lang::scanning::{is_terminator, scan, InputStream, StrStream};
use crate::lang::token::{Token, TokenKind, TokenKindSet};

/// Knobs for driving the scanner over a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Kinds attempted on every scan.
    pub acceptable: TokenKindSet,
    /// Merge touching Text tokens.
    pub coalesce_text: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions {
            acceptable: TokenKindSet::all(),
            coalesce_text: true,
        }
    }
}

impl TokenizeOptions {
    /// Build options from the shared configuration.
    ///
    /// An empty kind list selects every kind.
    pub fn from_config(
        config: &langfile_config::TokenizeConfig,
    ) -> Result<Self, crate::lang::token::UnknownTokenKind> {
        let acceptable = if config.kinds.is_empty() {
            TokenKindSet::all()
        } else {
            config
                .kinds
                .iter()
                .map(|name| name.parse::<TokenKind>())
                .collect::<Result<TokenKindSet, _>>()?
        };
        Ok(TokenizeOptions {
            acceptable,
            coalesce_text: config.coalesce_text,
        })
    }
}

/// Tokenize `text` up to its first terminator, with all kinds enabled and text coalesced.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_options(text, &TokenizeOptions::default())
}

/// Tokenize `text` keeping the scanner's exact cut points.
pub fn tokenize_raw(text: &str) -> Vec<Token> {
    let mut stream = StrStream::new(text);
    tokenize_stream(&mut stream, TokenKindSet::all())
}

pub fn tokenize_with_options(text: &str, options: &TokenizeOptions) -> Vec<Token> {
    let mut stream = StrStream::new(text);
    let tokens = tokenize_stream(&mut stream, options.acceptable);
    if options.coalesce_text {
        coalesce_text(tokens)
    } else {
        tokens
    }
}

/// Drive the scanner from the current stream position until a terminator.
///
/// The stream is left on the terminator (or at end of input).
pub fn tokenize_stream<S: InputStream + ?Sized>(
    stream: &mut S,
    acceptable: TokenKindSet,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    while !is_terminator(stream.lookahead()) {
        match scan(stream, acceptable) {
            Some(token) if !token.is_empty() => tokens.push(token),
            _ => tokens.push(literal_char(stream)),
        }
    }
    tokens
}

/// Consume the current character as a one-character Text token.
pub(crate) fn literal_char<S: InputStream + ?Sized>(stream: &mut S) -> Token {
    let start = stream.position();
    stream.advance();
    Token::new(TokenKind::Text, start..stream.position())
}

/// Merge Text tokens whose spans touch.
pub fn coalesce_text(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match merged.last_mut() {
            Some(last)
                if last.kind == TokenKind::Text
                    && token.kind == TokenKind::Text
                    && last.span.end == token.span.start =>
            {
                last.span.end = token.span.end;
            }
            _ => merged.push(token),
        }
    }
    merged
}
