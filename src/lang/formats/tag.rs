//! XML-like tag serialization
//!
//! Serializes a document to an XML-like format that directly reflects the tree.
//!
//! ## Format
//!
//! - Line type → tag name
//! - Entry key → `key` attribute
//! - Value tokens → one tag per token, named after the token kind
//! - Leaf text → text content
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <comment>## Menu</comment>
//!   <entry key="menu.play">
//!     <value>
//!       <format_code>§a</format_code>
//!       <text>Play</text>
//!     </value>
//!   </entry>
//! </document>
//! ```

use crate::lang::parsing::{Comment, Document, Entry, Line, Value};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_line(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.push_line(&format!("<{tag}>{}</{tag}>", escape_xml(text)));
    }

    fn visit_line(&mut self, line: &Line) {
        match line {
            Line::Blank { .. } => self.push_line("<blank/>"),
            Line::Comment(comment) => self.visit_comment("comment", comment),
            Line::Entry(entry) => self.visit_entry(entry),
        }
    }

    fn visit_comment(&mut self, tag: &str, comment: &Comment) {
        self.tag_with_text(tag, &comment.text);
    }

    fn visit_entry(&mut self, entry: &Entry) {
        let open = format!("<entry key=\"{}\"", escape_xml(&entry.key));
        if entry.value.is_none() && entry.inline_comment.is_none() {
            self.push_line(&format!("{open}/>"));
            return;
        }

        self.push_line(&format!("{open}>"));
        self.indent_level += 1;
        if let Some(value) = &entry.value {
            self.visit_value(value);
        }
        if let Some(comment) = &entry.inline_comment {
            self.visit_comment("inline-comment", comment);
        }
        self.indent_level -= 1;
        self.push_line("</entry>");
    }

    fn visit_value(&mut self, value: &Value) {
        self.push_line("<value>");
        self.indent_level += 1;
        for (kind, text) in value.parts() {
            self.tag_with_text(kind.name(), text);
        }
        self.indent_level -= 1;
        self.push_line("</value>");
    }
}

/// Serialize a document to tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer {
        output: String::from("<document>\n"),
        indent_level: 1,
    };

    for line in &doc.lines {
        serializer.visit_line(line);
    }

    serializer.output.push_str("</document>");
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
