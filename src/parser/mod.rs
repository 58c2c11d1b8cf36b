//! The block parser: one section's raw generated text → ordered typed blocks.
//!
//! ## Why a line state machine?
//!
//! The generation step is prompted to emit a constrained, line-oriented
//! pseudo-markdown convention (explicit markers such as `Title:` and
//! `> Paragraph:`, pipe tables, `*` bullets), but models drift: markers go
//! missing, tables lose their delimiter row, prose arrives bare. Classifying
//! every line independently, in a fixed priority order, means malformed
//! input degrades into plain paragraphs instead of failing — the parse
//! never returns an error.
//!
//! ```text
//! raw text ──▶ classify ──▶ accumulate ──▶ flush
//! (lines)     (LineClass)   (list/table)   (blocks)
//! ```
//!
//! Lists and tables span multiple lines, so the scan carries a small
//! [`ParserState`]: pending list items, a [`TableBuilder`], the pending
//! table caption, and the previously handled block kind. Blank lines only
//! record a structural break; they never flush a pending list or an open
//! table — accumulation ends when a structurally different line arrives, or
//! at end of input.
//!
//! State is created fresh per call and dropped on return, so independent
//! sections can be parsed concurrently from multiple threads.

mod classify;
mod inline;
mod table;

use crate::block::ContentBlock;
use crate::config::ParseConfig;
use classify::{classify, LineClass};
use inline::format_inline;
use table::{split_cells, TableBuilder};
use tracing::debug;

/// Kind of the previously handled line. Consulted only by the short-line
/// heading heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrevBlock {
    None,
    Heading,
    Paragraph,
    ListItem,
    TableRow,
    TableCaption,
    Table,
    Space,
}

impl PrevBlock {
    /// Kinds after which a short standalone line reads as running prose
    /// rather than an implicit subheading.
    fn continues_prose(self) -> bool {
        matches!(
            self,
            PrevBlock::ListItem | PrevBlock::TableRow | PrevBlock::Heading | PrevBlock::Paragraph
        )
    }
}

/// Scan state for one `parse` invocation.
#[derive(Debug)]
struct ParserState {
    blocks: Vec<ContentBlock>,
    pending_list: Vec<String>,
    table: TableBuilder,
    pending_caption: Option<String>,
    prev: PrevBlock,
}

impl ParserState {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            pending_list: Vec::new(),
            table: TableBuilder::default(),
            pending_caption: None,
            prev: PrevBlock::None,
        }
    }

    /// Emit a block, releasing an unclaimed caption first so it keeps its
    /// position in the sequence.
    fn emit(&mut self, block: ContentBlock) {
        self.release_caption();
        self.blocks.push(block);
    }

    /// A caption never claimed by a table surfaces as a level-4 heading in
    /// its original position.
    fn release_caption(&mut self) {
        if let Some(caption) = self.pending_caption.take() {
            self.blocks.push(ContentBlock::heading(4, caption));
        }
    }

    fn flush_list(&mut self) {
        if !self.pending_list.is_empty() {
            let items = std::mem::take(&mut self.pending_list);
            self.emit(ContentBlock::List { items });
        }
    }

    /// Finalise an open table. The builder claims the pending caption when
    /// it actually produces a block; an empty accumulation leaves the
    /// caption pending for a later table.
    fn close_table(&mut self) {
        if self.table.is_open() {
            if let Some(block) = self.table.finish(&mut self.pending_caption) {
                self.emit(block);
            }
            self.prev = PrevBlock::Table;
        }
    }

    fn into_blocks(mut self) -> Vec<ContentBlock> {
        self.flush_list();
        self.close_table();
        self.release_caption();
        self.blocks
    }
}

/// Parse one section's raw content with the default [`ParseConfig`].
///
/// Never fails; empty input yields an empty sequence. The output holds at
/// most one block per input line.
pub fn parse(content: &str) -> Vec<ContentBlock> {
    parse_with(content, &ParseConfig::default())
}

/// Parse one section's raw content.
///
/// Single left-to-right scan; each line is stripped of trailing whitespace
/// and classified once, in priority order. See the module docs for the
/// accumulation rules.
pub fn parse_with(content: &str, config: &ParseConfig) -> Vec<ContentBlock> {
    let mut st = ParserState::new();

    for raw in content.lines() {
        let line = raw.trim_end();
        match classify(line) {
            LineClass::Blank => {
                st.prev = PrevBlock::Space;
            }

            // Explicit markers short-circuit everything and leave pending
            // lists and open tables untouched.
            LineClass::Title(text) => {
                st.emit(ContentBlock::Title {
                    text: text.to_string(),
                });
                st.prev = PrevBlock::Heading;
            }
            LineClass::MarkedHeading { level, text } => {
                st.emit(ContentBlock::heading(level, text));
                st.prev = PrevBlock::Heading;
            }
            LineClass::MarkedParagraph(text) => {
                st.emit(ContentBlock::Paragraph {
                    text: text.to_string(),
                });
                st.prev = PrevBlock::Paragraph;
            }

            LineClass::TableCaption(caption) => {
                st.flush_list();
                st.close_table();
                st.release_caption();
                st.pending_caption = if caption.is_empty() {
                    None
                } else {
                    Some(caption.to_string())
                };
                st.prev = PrevBlock::TableCaption;
            }

            LineClass::Heading { level, text } => {
                st.emit(ContentBlock::heading(level, text));
                st.prev = PrevBlock::Heading;
            }

            LineClass::TableDelimiter => {
                if !st.table.is_open() {
                    st.flush_list();
                    st.table.begin();
                }
                st.table.mark_separator();
            }
            LineClass::TableRow(row) => {
                if !st.table.is_open() {
                    st.flush_list();
                    st.table.begin();
                }
                st.table.push_row(split_cells(row));
                st.prev = PrevBlock::TableRow;
            }

            LineClass::Bullet(item) => {
                st.close_table();
                st.pending_list.push(format_inline(item));
                st.prev = PrevBlock::ListItem;
            }

            LineClass::Text(text) => {
                st.close_table();
                st.flush_list();
                let formatted = format_inline(text.trim());
                let words = text.split_whitespace().count();
                if !st.prev.continues_prose() && words <= config.heading_word_limit {
                    st.emit(ContentBlock::heading(
                        config.implicit_heading_level,
                        formatted,
                    ));
                    st.prev = PrevBlock::Heading;
                } else {
                    st.emit(ContentBlock::Paragraph { text: formatted });
                    st.prev = PrevBlock::Paragraph;
                }
            }
        }
    }

    let blocks = st.into_blocks();
    debug!("parsed {} content blocks", blocks.len());
    blocks
}
