//! Input streams for the scanner
//!
//!     The scanner reads through a forward cursor owned by its caller. Only two reads are
//!     needed: the current character and advancing past it. Matchers probe ahead eagerly,
//!     so streams also expose their position and can be reset to a position they handed
//!     out earlier. The scanner uses this to take a snapshot before each attempt and roll
//!     back when the attempt fails.
//!
//!     Two streams are provided:
//!         - [StrStream]: UTF-8 text, one code point per step.
//!         - [ByteStream]: raw bytes, one byte per step, each byte read as the code point
//!           of the same value. This is how single-byte encoded files are scanned; the
//!           section sign is then the byte 0xA7.
//!
//!     Whole files go through [decode_source]: UTF-8 input is borrowed as is, anything else
//!     is read through a [ByteStream] into text.

use std::borrow::Cow;

/// A forward cursor over characters.
pub trait InputStream {
    /// The current character, or `None` at the end of input.
    fn lookahead(&self) -> Option<char>;

    /// Move past the current character. Does nothing at the end of input.
    fn advance(&mut self);

    /// Current byte offset, used for spans and snapshots.
    fn position(&self) -> usize;

    /// Move back to a position previously returned by [InputStream::position].
    fn reset(&mut self, position: usize);

    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

/// Cursor over a string slice.
#[derive(Debug, Clone)]
pub struct StrStream<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> StrStream<'a> {
    pub fn new(source: &'a str) -> Self {
        StrStream {
            source,
            position: 0,
        }
    }

    /// Start scanning at `position`, keeping offsets relative to the whole source.
    ///
    /// Positions past the end or inside a multi-byte character are clamped back to the
    /// previous character boundary.
    pub fn with_position(source: &'a str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }
        StrStream { source, position }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Text from the cursor to the end of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }
}

impl InputStream for StrStream<'_> {
    fn lookahead(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.lookahead() {
            self.position += ch.len_utf8();
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn reset(&mut self, position: usize) {
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }
}

/// Cursor over raw bytes, one character per byte.
#[derive(Debug, Clone)]
pub struct ByteStream<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteStream { bytes, position: 0 }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl InputStream for ByteStream<'_> {
    fn lookahead(&self) -> Option<char> {
        self.bytes.get(self.position).map(|byte| char::from(*byte))
    }

    fn advance(&mut self) {
        if self.position < self.bytes.len() {
            self.position += 1;
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn reset(&mut self, position: usize) {
        self.position = position.min(self.bytes.len());
    }
}

/// Source text for `bytes`: UTF-8 when valid, otherwise one char per byte.
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            log::debug!(
                "input is not UTF-8 (at byte {}), reading as single-byte text",
                err.valid_up_to()
            );
            let mut stream = ByteStream::new(bytes);
            let mut text = String::with_capacity(bytes.len());
            while let Some(ch) = stream.lookahead() {
                text.push(ch);
                stream.advance();
            }
            Cow::Owned(text)
        }
    }
}
