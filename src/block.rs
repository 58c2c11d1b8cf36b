//! Typed document blocks — the parser's output contract.
//!
//! A block is one unit of structured content handed to the downstream
//! document renderer: the renderer owns pagination, fonts, margins, and page
//! breaks, and consumes blocks strictly in sequence order. Blocks serialise
//! as internally-tagged JSON (`"type": "table"`, `"type": "heading"`, …) so
//! the renderer can dispatch on the tag without a custom decoder.

use serde::{Deserialize, Serialize};

/// One typed unit of structured content in the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Document or book title.
    Title { text: String },

    /// Heading at level 1 (largest) through 4 (smallest).
    Heading { level: u8, text: String },

    /// Body paragraph. Text may carry `<strong>`/`<em>` inline markup.
    Paragraph { text: String },

    /// Bulleted list. Items may carry `<strong>`/`<em>` inline markup.
    List { items: Vec<String> },

    /// Pipe-delimited table.
    ///
    /// `header` is present only when the source carried a dash-delimiter row
    /// separating the header from the data rows; otherwise every accumulated
    /// row is data. Row widths are passed through exactly as parsed, so a
    /// ragged source table stays ragged here.
    Table {
        caption: Option<String>,
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },

    /// Purely visual vertical gap between logical groups, in points.
    Spacer { size: u32 },
}

impl ContentBlock {
    /// Heading constructor; `level` is clamped to the supported 1..=4 range.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level: level.clamp(1, 4),
            text: text.into(),
        }
    }

    /// The block's JSON tag, useful for logging and summary counts.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Title { .. } => "title",
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Spacer { .. } => "spacer",
        }
    }
}
