//! Contextual scanner
//!
//!     The scanner classifies the next span of a value into one token kind. It is
//!     contextual: the caller passes the set of kinds that are legal at this point of the
//!     grammar and only those are attempted. A kind outside the set is never returned and
//!     never consumes input.
//!
//! Matching Order
//!
//!     Kinds are attempted in a fixed priority, first match wins:
//!
//!         1. Linebreak         ~LINEBREAK~ (exact, case-sensitive)
//!         2. FormatCode        § followed by one non-terminator character
//!         3. FormatSpecifier   %s %d %f, %<n>$s|d|f, %.<n>f
//!         4. InputKey          :_input_<anything but ':'>:
//!         5. Text              everything up to a terminator or delimiter
//!
//!     Terminators (end of input, NUL, CR, LF, TAB) end every scan. When the stream already
//!     sits on one, the scanner reports no token and does not move.
//!
//!     Delimiters (`~`, `§`, `:`, `%`) end a Text span even when they do not start a valid
//!     token, e.g. the `%` in "50% off". Scanning from such a delimiter yields an empty
//!     Text token; the caller is expected to consume the character as literal text and
//!     scan again. [tokenize](crate::lang::tokenizing) implements that loop.
//!
//! Speculative Matching
//!
//!     Matchers advance eagerly and only then find out whether the shape matched. Each
//!     attempt is wrapped in a snapshot of the stream position which is restored on
//!     failure, so a failed attempt is never observable by the next one nor by the caller.
//!
//!     The scanner holds no state between calls. [Scanner] exists only as a value for
//!     hosts that want one; [scan] is the whole contract.

mod matchers;
mod scanner;
pub mod stream;

pub use matchers::{is_delimiter, is_terminator};
pub use scanner::{scan, Scanner};
pub use stream::{decode_source, ByteStream, InputStream, StrStream};
