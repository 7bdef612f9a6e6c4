//! Output sinks: realize the abstract block sequence as concrete artifacts.

pub mod pdf;
pub mod text;

use anyhow::Result;

use crate::render::block::Block;
use crate::style::StyleRole;

/// Capability set a document back-end must provide.
///
/// Sinks own their output state exclusively; one sink instance produces one
/// artifact and is consumed by its finishing call.
pub trait DocumentSink {
    fn begin_document(&mut self) -> Result<()> {
        Ok(())
    }
    fn heading(&mut self, text: &str, role: StyleRole, depth: usize) -> Result<()>;
    fn paragraph(&mut self, text: &str, role: StyleRole, depth: usize) -> Result<()>;
    fn fact_table(&mut self, rows: &[(String, String)]) -> Result<()>;
    fn image(&mut self, data: &[u8]) -> Result<()>;
    fn spacer(&mut self) -> Result<()>;
    fn page_break(&mut self) -> Result<()>;
    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Drives a sink through a block sequence.
///
/// Every sink sees the same calls in the same order for a given sequence,
/// which keeps the artifacts structurally identical.
pub fn emit<S: DocumentSink>(blocks: &[Block], sink: &mut S) -> Result<()> {
    sink.begin_document()?;
    for block in blocks {
        match block {
            Block::Heading { text, role, depth } => sink.heading(text, *role, *depth)?,
            Block::Paragraph { text, role, depth } => sink.paragraph(text, *role, *depth)?,
            Block::FactTable { rows } => sink.fact_table(rows)?,
            Block::Image { data } => sink.image(data)?,
            Block::Spacer => sink.spacer()?,
            Block::PageBreak => sink.page_break()?,
        }
    }
    sink.end_document()
}
