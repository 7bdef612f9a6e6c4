use crate::style::StyleRole;

/// One element of the abstract document, in emission order.
///
/// Both sinks consume the same block sequence, so the two artifacts are
/// structurally identical by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        text: String,
        role: StyleRole,
        depth: usize,
    },
    Paragraph {
        text: String,
        role: StyleRole,
        depth: usize,
    },
    /// Fixed key/value rows, e.g. the project metadata table.
    FactTable { rows: Vec<(String, String)> },
    /// Raw encoded image bytes. Sinks that cannot draw images skip it.
    Image { data: Vec<u8> },
    /// One blank line of separation.
    Spacer,
    /// Hard page break in paginated media, blank line otherwise.
    PageBreak,
}
