//! Plain-text sink.
//!
//! Appends literal lines to an owned buffer with fixed indentation
//! conventions: headings two spaces per nesting depth, product labels four
//! spaces, attribute lines eight. Image blocks have no text representation
//! and are skipped; spacers and page breaks both become a blank line.

use anyhow::Result;

use crate::style::StyleRole;

use super::DocumentSink;

/// Accumulates the document in a buffer owned by this instance alone.
#[derive(Debug, Default)]
pub struct TextSink {
    buffer: String,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the sink and returns the finished document.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, indent: usize, text: &str) {
        self.buffer.push_str(&" ".repeat(indent));
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn indent_for(role: StyleRole, depth: usize) -> usize {
        match role {
            StyleRole::ProductLabel => 4,
            StyleRole::Attribute => 8,
            _ => depth * 2,
        }
    }
}

impl DocumentSink for TextSink {
    fn heading(&mut self, text: &str, role: StyleRole, depth: usize) -> Result<()> {
        self.push_line(Self::indent_for(role, depth), text);
        Ok(())
    }

    fn paragraph(&mut self, text: &str, role: StyleRole, depth: usize) -> Result<()> {
        self.push_line(Self::indent_for(role, depth), text);
        Ok(())
    }

    fn fact_table(&mut self, rows: &[(String, String)]) -> Result<()> {
        // Pad "Key:" to a common width so values line up.
        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
        for (key, value) in rows {
            let line = format!("{:<width$} {}", format!("{key}:"), value);
            self.push_line(0, &line);
        }
        Ok(())
    }

    fn image(&mut self, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn spacer(&mut self) -> Result<()> {
        self.buffer.push('\n');
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.buffer.push('\n');
        Ok(())
    }
}
