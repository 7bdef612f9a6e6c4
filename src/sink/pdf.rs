//! PDF sink.
//!
//! Cursor-based layout over printpdf op streams: blocks are laid out top to
//! bottom on Letter pages with automatic overflow, page breaks start a new
//! page, and the `"Page <n> of <m>"` footer is stamped onto every page at
//! save time, once the final page count is known. The document is written
//! exactly once by [`PdfSink::save`].

use anyhow::Result;
use printpdf::image::RawImage;
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use std::io::Write;
use tracing::warn;

use crate::style::{style_for, StyleRole, TextStyle};

use super::DocumentSink;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 54.0;
const LINE_FACTOR: f32 = 1.25;
// 6 inches; banner images are scaled down to fit, never up.
const MAX_IMAGE_WIDTH_PT: f32 = 432.0;
const FACT_VALUE_OFFSET_PT: f32 = 90.0;
const FOOTER_SIZE_PT: f32 = 9.0;

pub struct PdfSink {
    document: PdfDocument,
    pages: Vec<Vec<Op>>,
    current: Vec<Op>,
    /// Distance from the top edge to the next line's top, in points.
    cursor_y: f32,
}

impl PdfSink {
    pub fn new(title: &str) -> Self {
        Self {
            document: PdfDocument::new(title),
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: MARGIN_PT,
        }
    }

    /// Pages laid out so far, including the one still being filled.
    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(!self.current.is_empty())
    }

    /// Stamps footers, assembles the pages and writes the document once.
    pub fn save<W: Write>(mut self, writer: &mut W) -> Result<()> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.start_new_page();
        }

        let total = self.pages.len();
        for (i, ops) in self.pages.iter_mut().enumerate() {
            ops.extend(footer_ops(i + 1, total));
        }
        for ops in std::mem::take(&mut self.pages) {
            self.document
                .pages
                .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
        }

        let mut warnings = Vec::new();
        self.document
            .save_writer(writer, &PdfSaveOptions::default(), &mut warnings);
        Ok(())
    }

    fn start_new_page(&mut self) {
        let ops = std::mem::take(&mut self.current);
        self.pages.push(ops);
        self.cursor_y = MARGIN_PT;
    }

    fn ensure_room(&mut self, needed: f32) {
        if !self.current.is_empty() && self.cursor_y + needed > PAGE_HEIGHT_PT - MARGIN_PT {
            self.start_new_page();
        }
    }

    fn write_line(&mut self, text: &str, style: &TextStyle) {
        let line_height = style.size * LINE_FACTOR;
        self.ensure_room(style.space_before + line_height);
        self.cursor_y += style.space_before;

        let font = font_for(style);
        let x = MARGIN_PT + style.indent;
        let y = PAGE_HEIGHT_PT - (self.cursor_y + style.size * 0.8);
        self.current.push(Op::StartTextSection);
        self.current.push(Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Pt(x), Pt(y)),
        });
        self.current.push(Op::SetFontSizeBuiltinFont {
            size: Pt(style.size),
            font,
        });
        self.current.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        });
        self.current.push(Op::EndTextSection);

        self.cursor_y += line_height + style.space_after;
    }
}

impl DocumentSink for PdfSink {
    fn heading(&mut self, text: &str, role: StyleRole, _depth: usize) -> Result<()> {
        self.write_line(text, &style_for(role));
        Ok(())
    }

    fn paragraph(&mut self, text: &str, role: StyleRole, _depth: usize) -> Result<()> {
        self.write_line(text, &style_for(role));
        Ok(())
    }

    fn fact_table(&mut self, rows: &[(String, String)]) -> Result<()> {
        let style = style_for(StyleRole::Body);
        let line_height = style.size * LINE_FACTOR;
        for (key, value) in rows {
            self.ensure_room(line_height);
            let y = PAGE_HEIGHT_PT - (self.cursor_y + style.size * 0.8);
            self.current.push(Op::StartTextSection);
            self.current.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(MARGIN_PT), Pt(y)),
            });
            self.current.push(Op::SetFontSizeBuiltinFont {
                size: Pt(style.size),
                font: BuiltinFont::HelveticaBold,
            });
            self.current.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(format!("{key}:"))],
                font: BuiltinFont::HelveticaBold,
            });
            self.current.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(MARGIN_PT + FACT_VALUE_OFFSET_PT), Pt(y)),
            });
            self.current.push(Op::SetFontSizeBuiltinFont {
                size: Pt(style.size),
                font: BuiltinFont::Helvetica,
            });
            self.current.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(value.clone())],
                font: BuiltinFont::Helvetica,
            });
            self.current.push(Op::EndTextSection);
            self.cursor_y += line_height;
        }
        Ok(())
    }

    fn image(&mut self, data: &[u8]) -> Result<()> {
        let mut warnings = Vec::new();
        let raw = match RawImage::decode_from_bytes(data, &mut warnings) {
            Ok(raw) => raw,
            // A bad image degrades to an absent one; the document goes on.
            Err(e) => {
                warn!(error = %e, "could not decode image, skipping block");
                return Ok(());
            }
        };

        let (source_w, source_h) = (raw.width as f32, raw.height as f32);
        let width = source_w.min(MAX_IMAGE_WIDTH_PT);
        let height = width * source_h / source_w;
        self.ensure_room(height);

        let xobj_id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw));

        let y = PAGE_HEIGHT_PT - (self.cursor_y + height);
        self.current.push(Op::UseXobject {
            id: xobj_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(MARGIN_PT)),
                translate_y: Some(Pt(y)),
                scale_x: Some(width / source_w),
                scale_y: Some(height / source_h),
                rotate: None,
                dpi: Some(72.0),
            },
        });
        self.cursor_y += height;
        Ok(())
    }

    fn spacer(&mut self) -> Result<()> {
        let style = style_for(StyleRole::Body);
        self.cursor_y += style.size * LINE_FACTOR;
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.start_new_page();
        Ok(())
    }
}

fn font_for(style: &TextStyle) -> BuiltinFont {
    if style.bold {
        BuiltinFont::HelveticaBold
    } else {
        BuiltinFont::Helvetica
    }
}

fn footer_ops(page_num: usize, total: usize) -> Vec<Op> {
    let text = format!("Page {page_num} of {total}");
    // Rough Helvetica advance; exact metrics are overkill for a footer.
    let text_width = text.len() as f32 * FOOTER_SIZE_PT * 0.5;
    let x = (PAGE_WIDTH_PT - text_width) / 2.0;
    let y = MARGIN_PT * 0.5;
    vec![
        Op::StartTextSection,
        Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Pt(x), Pt(y)),
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(FOOTER_SIZE_PT),
            font: BuiltinFont::Helvetica,
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text)],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::block::Block;
    use crate::sink::emit;

    fn heading(text: &str) -> Block {
        Block::Heading {
            text: text.into(),
            role: StyleRole::TopHeading,
            depth: 0,
        }
    }

    #[test]
    fn page_break_starts_a_new_page() {
        let blocks = vec![heading("TABLE OF CONTENTS"), Block::PageBreak, heading("DETAILED SECTIONS")];
        let mut sink = PdfSink::new("test");
        emit(&blocks, &mut sink).unwrap();
        assert_eq!(sink.page_count(), 2);
    }

    #[test]
    fn save_produces_a_pdf_even_for_an_empty_sequence() {
        let mut sink = PdfSink::new("empty");
        emit(&[], &mut sink).unwrap();
        let mut out = Vec::new();
        sink.save(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF"));
    }

    #[test]
    fn bad_image_bytes_are_skipped_without_error() {
        let blocks = vec![
            Block::Image {
                data: vec![0xde, 0xad, 0xbe, 0xef],
            },
            heading("TABLE OF CONTENTS"),
        ];
        let mut sink = PdfSink::new("test");
        emit(&blocks, &mut sink).unwrap();
        let mut out = Vec::new();
        sink.save(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF"));
    }

    #[test]
    fn long_documents_overflow_onto_new_pages() {
        let blocks: Vec<Block> = (0..200).map(|i| heading(&format!("Heading {i}"))).collect();
        let mut sink = PdfSink::new("test");
        emit(&blocks, &mut sink).unwrap();
        assert!(sink.page_count() > 1);
    }
}
