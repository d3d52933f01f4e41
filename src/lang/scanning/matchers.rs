//! Per-kind matchers
//!
//!     Each matcher advances eagerly and reports whether the shape matched. Matchers do not
//!     undo their own progress; the scanner wraps every call in [attempt], which snapshots
//!     the stream position first and resets to it on failure.

use super::stream::InputStream;

const LINEBREAK_MARKER: &str = "~LINEBREAK~";
const INPUT_KEY_MARKER: &str = ":_input_";
pub(crate) const SECTION_SIGN: char = '\u{a7}';

/// End of input, NUL, CR, LF and TAB end every scan. Tabs and line breaks are record
/// separators in the format, so they are treated exactly like end of input.
pub fn is_terminator(ch: Option<char>) -> bool {
    matches!(ch, None | Some('\0' | '\r' | '\n' | '\t'))
}

/// Characters that end a text span because they may start another token.
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, '~' | SECTION_SIGN | ':' | '%')
}

pub(crate) fn at_terminator<S: InputStream + ?Sized>(stream: &S) -> bool {
    is_terminator(stream.lookahead())
}

/// Run `matcher`, restoring the stream position if it fails.
pub(crate) fn attempt<S, F>(stream: &mut S, matcher: F) -> bool
where
    S: InputStream + ?Sized,
    F: FnOnce(&mut S) -> bool,
{
    let snapshot = stream.position();
    if matcher(stream) {
        true
    } else {
        stream.reset(snapshot);
        false
    }
}

fn match_literal<S: InputStream + ?Sized>(stream: &mut S, pattern: &str) -> bool {
    for expected in pattern.chars() {
        if stream.lookahead() != Some(expected) {
            return false;
        }
        stream.advance();
    }
    true
}

fn eat_char<S: InputStream + ?Sized>(stream: &mut S, expected: char) -> bool {
    if stream.lookahead() == Some(expected) {
        stream.advance();
        true
    } else {
        false
    }
}

/// Consume one or more ASCII digits.
fn eat_digits<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    let mut any = false;
    while matches!(stream.lookahead(), Some(ch) if ch.is_ascii_digit()) {
        stream.advance();
        any = true;
    }
    any
}

fn eat_conversion<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    if matches!(stream.lookahead(), Some('s' | 'd' | 'f')) {
        stream.advance();
        true
    } else {
        false
    }
}

pub(crate) fn match_linebreak<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    match_literal(stream, LINEBREAK_MARKER)
}

pub(crate) fn match_format_code<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    if !eat_char(stream, SECTION_SIGN) || at_terminator(stream) {
        return false;
    }
    stream.advance();
    true
}

/// `%s` `%d` `%f`, `%<digits>$s|d|f` or `%.<digits>f`.
pub(crate) fn match_format_specifier<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    if !eat_char(stream, '%') {
        return false;
    }
    match stream.lookahead() {
        Some('s' | 'd' | 'f') => eat_conversion(stream),
        // Digits must be followed by `$`. `%2.5f` is not a specifier here, although
        // scanners sharing the digit loop with the precision form accept it.
        Some(ch) if ch.is_ascii_digit() => {
            eat_digits(stream) && eat_char(stream, '$') && eat_conversion(stream)
        }
        Some('.') => {
            stream.advance();
            eat_digits(stream) && eat_char(stream, 'f')
        }
        _ => false,
    }
}

/// `:_input_`, any run without `:` that stays before a terminator, then `:`.
pub(crate) fn match_input_key<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    if !match_literal(stream, INPUT_KEY_MARKER) {
        return false;
    }
    while !at_terminator(stream) && stream.lookahead() != Some(':') {
        stream.advance();
    }
    eat_char(stream, ':')
}

/// Always matches. Empty at a terminator or when the cursor sits on a delimiter.
pub(crate) fn match_text<S: InputStream + ?Sized>(stream: &mut S) -> bool {
    while let Some(ch) = stream.lookahead() {
        if is_terminator(Some(ch)) || is_delimiter(ch) {
            break;
        }
        stream.advance();
    }
    true
}
