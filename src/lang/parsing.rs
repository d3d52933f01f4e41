//! Document parser
//!
//!     Parses a `.lang` file into a [Document]. The grammar is line oriented:
//!
//!         source_file    := (line terminator)*
//!         terminator     := "\r"? "\n" | "\0"
//!         line           := ws? (comment | key "=" value? inline_comment?)
//!         comment        := "##" any*
//!         key            := anything but "=", "\r" or a line break
//!         value          := tokens, up to the first tab
//!         inline_comment := "\t" any*
//!
//! The Parsing Pipeline
//!
//!     1. Line tokens: the source is lexed with logos into terminators, `=`, tabs and
//!        opaque chunks. See [line_tokens].
//!     2. Line grouping: tokens are split at terminators into lines.
//!     3. Classification: each line becomes blank, a comment or an entry. For entries the
//!        value region runs from the first `=` to the first tab that follows it, and is
//!        handed to the contextual scanner through [tokenize_stream].
//!
//!     A final line without a terminator is accepted. Lines that are neither blank,
//!     comments nor contain `=` are errors; parsing stops at the first one.

mod document;
pub mod line_tokens;

pub use document::{Comment, Document, Entry, Line, Value};
pub use line_tokens::LineToken;

use crate::lang::scanning::{InputStream, StrStream};
use crate::lang::tokenizing::{coalesce_text, literal_char, tokenize_stream, TokenizeOptions};
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `key=value`, comment or blank line")]
    MissingAssignment { line: usize },
    #[error("line {line}: entry has an empty key")]
    EmptyKey { line: usize },
    #[error("line {line}: carriage return inside a key")]
    CarriageReturnInKey { line: usize },
}

/// Parse with default tokenization options.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    parse_document_with(source, &TokenizeOptions::default())
}

pub fn parse_document_with(
    source: &str,
    options: &TokenizeOptions,
) -> Result<Document, ParseError> {
    let raw_lines = group_lines(line_tokens::tokenize(source), source.len());
    let mut document = Document::default();
    for (index, raw) in raw_lines.iter().enumerate() {
        document
            .lines
            .push(classify_line(source, raw, index + 1, options)?);
    }
    log::debug!(
        "parsed {} lines ({} entries)",
        document.lines.len(),
        document.entries().count()
    );
    Ok(document)
}

/// The tokens of one line, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawLine {
    tokens: Vec<(LineToken, Range<usize>)>,
    span: Range<usize>,
}

fn group_lines(tokens: Vec<(LineToken, Range<usize>)>, source_len: usize) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut line_start = 0;

    for (token, span) in tokens {
        if token.is_terminator() {
            lines.push(RawLine {
                tokens: std::mem::take(&mut current),
                span: line_start..span.start,
            });
            line_start = span.end;
        } else {
            current.push((token, span));
        }
    }

    if !current.is_empty() {
        lines.push(RawLine {
            tokens: current,
            span: line_start..source_len,
        });
    }
    lines
}

fn classify_line(
    source: &str,
    raw: &RawLine,
    line_number: usize,
    options: &TokenizeOptions,
) -> Result<Line, ParseError> {
    let content_start = skip_leading_whitespace(source, raw.span.clone());
    let content = &source[content_start..raw.span.end];

    if content.is_empty() {
        return Ok(Line::Blank {
            span: raw.span.clone(),
        });
    }

    if content.starts_with("##") {
        return Ok(Line::Comment(Comment {
            text: content.to_string(),
            span: content_start..raw.span.end,
        }));
    }

    let assign = raw
        .tokens
        .iter()
        .find(|(token, span)| *token == LineToken::Assign && span.start >= content_start)
        .map(|(_, span)| span.clone())
        .ok_or(ParseError::MissingAssignment { line: line_number })?;

    if assign.start == content_start {
        return Err(ParseError::EmptyKey { line: line_number });
    }

    if raw.tokens.iter().any(|(token, span)| {
        *token == LineToken::CarriageReturn
            && span.start >= content_start
            && span.start < assign.start
    }) {
        return Err(ParseError::CarriageReturnInKey { line: line_number });
    }

    let tab = raw
        .tokens
        .iter()
        .find(|(token, span)| *token == LineToken::Tab && span.start >= assign.end)
        .map(|(_, span)| span.clone());
    let value_end = tab.as_ref().map(|span| span.start).unwrap_or(raw.span.end);

    let value = parse_value(source, assign.end..value_end, options);
    let inline_comment = tab.map(|tab| Comment {
        text: source[tab.end..raw.span.end].to_string(),
        span: tab.start..raw.span.end,
    });

    Ok(Line::Entry(Entry {
        key: source[content_start..assign.start].to_string(),
        value,
        inline_comment,
        span: content_start..raw.span.end,
    }))
}

/// Leading whitespace, stray carriage returns included, is not part of the line.
fn skip_leading_whitespace(source: &str, span: Range<usize>) -> usize {
    let line = &source[span.clone()];
    let trimmed = line.trim_start_matches(char::is_whitespace);
    span.start + (line.len() - trimmed.len())
}

fn parse_value(source: &str, region: Range<usize>, options: &TokenizeOptions) -> Option<Value> {
    if region.is_empty() {
        return None;
    }

    // Bounding the stream makes the end of the region a real end of input
    let mut stream = StrStream::with_position(&source[..region.end], region.start);
    let mut tokens = Vec::new();
    loop {
        tokens.extend(tokenize_stream(&mut stream, options.acceptable));
        if stream.is_eof() {
            break;
        }
        // Only a lone carriage return can stop the scanner inside the region. The grammar
        // still reads it as part of the value.
        tokens.push(literal_char(&mut stream));
    }
    if options.coalesce_text {
        tokens = coalesce_text(tokens);
    }

    Some(Value {
        raw: source[region.clone()].to_string(),
        tokens,
        span: region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::{Token, TokenKind};

    #[test]
    fn groups_lines_at_terminators() {
        let source = "a=1\nb=2\0c=3";
        let lines = group_lines(line_tokens::tokenize(source), source.len());
        let spans: Vec<_> = lines.iter().map(|l| l.span.clone()).collect();
        assert_eq!(spans, vec![0..3, 4..7, 8..11]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let source = "a=1\n";
        let lines = group_lines(line_tokens::tokenize(source), source.len());
        assert_eq!(lines.len(), 1);
        assert!(group_lines(line_tokens::tokenize(""), 0).is_empty());
    }

    #[test]
    fn empty_lines_are_kept() {
        let source = "a=1\n\nb=2\n";
        let lines = group_lines(line_tokens::tokenize(source), source.len());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].span, 4..4);
        assert!(lines[1].tokens.is_empty());
    }

    #[test]
    fn entry_with_tokens() {
        let doc = parse_document("greeting=Hi :_input_name:!\n").expect("parse");
        let entry = doc.get("greeting").expect("entry");
        let value = entry.value.as_ref().expect("value");
        assert_eq!(value.span, 9..26);
        assert_eq!(
            value.tokens,
            vec![
                Token::new(TokenKind::Text, 9..12),
                Token::new(TokenKind::InputKey, 12..25),
                Token::new(TokenKind::Text, 25..26),
            ]
        );
    }

    #[test]
    fn value_stops_at_tab() {
        let doc = parse_document("k=v %s\t## translator note").expect("parse");
        let entry = doc.get("k").expect("entry");
        assert_eq!(entry.value_text(), "v %s");
        let comment = entry.inline_comment.as_ref().expect("comment");
        assert_eq!(comment.text, "## translator note");
        assert_eq!(comment.span, 6..25);
    }

    #[test]
    fn lone_carriage_return_stays_in_value() {
        let doc = parse_document("k=a\rb\n").expect("parse");
        let value = doc.get("k").and_then(|e| e.value.clone()).expect("value");
        assert_eq!(value.raw, "a\rb");
        assert_eq!(value.tokens, vec![Token::new(TokenKind::Text, 2..5)]);
    }

    #[test]
    fn empty_value_is_none() {
        let doc = parse_document("k=\n").expect("parse");
        assert_eq!(doc.get("k").expect("entry").value, None);

        let doc = parse_document("k=\tcomment").expect("parse");
        let entry = doc.get("k").expect("entry");
        assert_eq!(entry.value, None);
        assert_eq!(
            entry.inline_comment.as_ref().map(|c| c.text.as_str()),
            Some("comment")
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_document("a=1\nnot an entry\n"),
            Err(ParseError::MissingAssignment { line: 2 })
        );
        assert_eq!(
            parse_document("## c\n  =value"),
            Err(ParseError::EmptyKey { line: 2 })
        );
    }

    #[test]
    fn carriage_return_in_key_is_rejected() {
        assert_eq!(
            parse_document("a\rb=c\n"),
            Err(ParseError::CarriageReturnInKey { line: 1 })
        );
        // Leading and in-value carriage returns are still fine
        assert!(parse_document("\rk=a\rb\n").is_ok());
    }

    #[test]
    fn any_leading_whitespace_is_skipped() {
        let doc = parse_document("\u{b}k=v\n\u{a0}\u{c}## note\n").expect("parse");
        assert_eq!(doc.get("k").expect("entry").key, "k");
        assert_eq!(doc.comments().count(), 1);
    }
}
