use super::matchers::{
    at_terminator, attempt, match_format_code, match_format_specifier, match_input_key,
    match_linebreak, match_text,
};
use super::stream::InputStream;
use crate::lang::token::{Token, TokenKind, TokenKindSet};

/// Scan the next token, trying only the kinds in `acceptable`.
///
/// Kinds are attempted in [TokenKind::PRIORITY] order and the first match wins. On
/// success the stream is left just past the token. On `None` the stream is exactly where
/// it was before the call.
pub fn scan<S: InputStream + ?Sized>(stream: &mut S, acceptable: TokenKindSet) -> Option<Token> {
    if at_terminator(stream) {
        return None;
    }

    let start = stream.position();
    for kind in TokenKind::PRIORITY {
        if !acceptable.contains(kind) {
            continue;
        }
        let matched = match kind {
            TokenKind::Linebreak => attempt(stream, match_linebreak),
            TokenKind::FormatCode => attempt(stream, match_format_code),
            TokenKind::FormatSpecifier => attempt(stream, match_format_specifier),
            TokenKind::InputKey => attempt(stream, match_input_key),
            TokenKind::Text => attempt(stream, match_text),
        };
        if matched {
            let token = Token::new(kind, start..stream.position());
            log::trace!("scanned {} at {:?}", token.kind, token.span);
            return Some(token);
        }
    }

    log::trace!("no token at {} for {:?}", start, acceptable);
    None
}

/// The scanner as a value, for hosts that want an object to hold on to.
///
/// It carries no state: every call is independent and only the caller's stream moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Scanner
    }

    pub fn scan<S: InputStream + ?Sized>(
        &self,
        stream: &mut S,
        acceptable: TokenKindSet,
    ) -> Option<Token> {
        scan(stream, acceptable)
    }

    /// Scan with a boolean mask in grammar index order, see
    /// [TokenKindSet::from_valid_symbols].
    pub fn scan_valid_symbols<S: InputStream + ?Sized>(
        &self,
        stream: &mut S,
        valid_symbols: &[bool],
    ) -> Option<Token> {
        scan(stream, TokenKindSet::from_valid_symbols(valid_symbols))
    }
}
