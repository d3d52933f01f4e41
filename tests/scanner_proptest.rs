//! Property-based tests for the contextual scanner
//!
//! Inputs are drawn from an alphabet biased towards the characters the scanner cares
//! about, so that partial markers, stray delimiters and terminators show up often.

use langfile::lang::scanning::{is_delimiter, is_terminator, scan, InputStream, StrStream};
use langfile::lang::token::{TokenKind, TokenKindSet};
use langfile::lang::tokenizing::{coalesce_text, tokenize_raw};
use proptest::prelude::*;

const MARKERS: &[&str] = &[
    "~LINEBREAK~",
    "~LINE",
    ":_input_",
    ":_input_name:",
    "%s",
    "%2$d",
    "%.2f",
    "%",
    ":",
    "~",
    "§",
    "§c",
    "\t",
    "\r",
    "\n",
    "\0",
];

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(MARKERS).prop_map(str::to_string),
        2 => "[a-z0-9 .$_]{1,6}",
        1 => "\\PC{1,3}",
    ]
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

fn kind_set() -> impl Strategy<Value = TokenKindSet> {
    prop::collection::vec(any::<bool>(), 5)
        .prop_map(|mask| TokenKindSet::from_valid_symbols(&mask))
}

proptest! {
    #[test]
    fn failed_scan_does_not_move(input in message(), acceptable in kind_set()) {
        let mut stream = StrStream::new(&input);
        if scan(&mut stream, acceptable).is_none() {
            prop_assert_eq!(stream.position(), 0);
        }
    }

    #[test]
    fn returned_kind_is_acceptable(input in message(), acceptable in kind_set()) {
        let mut stream = StrStream::new(&input);
        if let Some(token) = scan(&mut stream, acceptable) {
            prop_assert!(acceptable.contains(token.kind));
            prop_assert_eq!(token.span.start, 0);
            prop_assert_eq!(token.span.end, stream.position());
        }
    }

    #[test]
    fn text_never_contains_delimiters_or_terminators(input in message()) {
        let mut stream = StrStream::new(&input);
        if let Some(token) = scan(&mut stream, TokenKindSet::single(TokenKind::Text)) {
            let text = token.text(&input);
            prop_assert!(!text.chars().any(|c| is_delimiter(c) || is_terminator(Some(c))));
        }
    }

    #[test]
    fn no_token_crosses_a_terminator(input in message()) {
        let mut stream = StrStream::new(&input);
        while let Some(token) = scan(&mut stream, TokenKindSet::all()) {
            let text = token.text(&input);
            prop_assert!(!text.chars().any(|c| is_terminator(Some(c))));
            if token.is_empty() {
                stream.advance();
            }
        }
    }

    #[test]
    fn tokenizer_covers_input_up_to_first_terminator(input in message()) {
        let tokens = tokenize_raw(&input);
        let end = input
            .char_indices()
            .find(|(_, c)| is_terminator(Some(*c)))
            .map(|(i, _)| i)
            .unwrap_or(input.len());

        let mut position = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, position);
            prop_assert!(!token.is_empty());
            position = token.span.end;
        }
        prop_assert_eq!(position, end);
    }

    #[test]
    fn coalescing_preserves_coverage(input in message()) {
        let raw = tokenize_raw(&input);
        let merged = coalesce_text(raw.clone());
        prop_assert!(merged.len() <= raw.len());
        prop_assert_eq!(merged.first().map(|t| t.span.start), raw.first().map(|t| t.span.start));
        prop_assert_eq!(merged.last().map(|t| t.span.end), raw.last().map(|t| t.span.end));
        for pair in merged.windows(2) {
            prop_assert!(!(pair[0].kind == TokenKind::Text && pair[1].kind == TokenKind::Text));
        }
    }
}
