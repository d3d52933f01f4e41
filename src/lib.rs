//! # langfile
//!
//! A contextual scanner and parser for `.lang` localization files.
//!
//! File Layout
//!
//! The crate is organised around the single piece of real design in the format, the
//! contextual token scanner, with the document tooling layered on top of it:
//!
//! src/lang
//!   ├── token        Token kinds, kind sets and spans
//!   ├── scanning     The contextual scanner and its input stream
//!   ├── tokenizing   Drives the scanner across a whole value
//!   ├── parsing      Line-level document parser
//!   └── formats      Tag, JSON and YAML output
//!
//! See [scanning](lang::scanning) for the scanner contract.

pub mod lang;

pub use lang::error::Error;
pub use lang::parsing::{parse_document, Document};
pub use lang::scanning::{scan, InputStream, StrStream};
pub use lang::token::{Token, TokenKind, TokenKindSet};
pub use lang::tokenizing::tokenize;
