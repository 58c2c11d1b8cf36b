//! Table assembly: accumulate pipe-delimited rows into a table block.

use crate::block::ContentBlock;

/// True when `line` is a header-delimiter row: at least one dash and nothing
/// but dashes, bars, and whitespace, so both `|---|` and `| --- | --- |`
/// qualify.
pub(crate) fn is_delimiter_row(line: &str) -> bool {
    let mut saw_dash = false;
    for c in line.chars() {
        match c {
            '-' => saw_dash = true,
            '|' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    saw_dash
}

/// Split a table-row line into trimmed cell texts.
///
/// A leading or trailing bar produces an empty boundary fragment that is
/// dropped; empty cells *between* bars are kept, so ragged source rows stay
/// observable downstream.
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut parts: Vec<&str> = trimmed.split('|').collect();
    if trimmed.starts_with('|') && !parts.is_empty() {
        parts.remove(0);
    }
    if trimmed.ends_with('|') && !parts.is_empty() {
        parts.pop();
    }
    parts.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Accumulates the rows of one table and finalises them into a block.
#[derive(Debug, Default)]
pub(crate) struct TableBuilder {
    rows: Vec<Vec<String>>,
    saw_separator: bool,
    open: bool,
}

impl TableBuilder {
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Start a fresh table, discarding any stale state.
    pub(crate) fn begin(&mut self) {
        self.rows.clear();
        self.saw_separator = false;
        self.open = true;
    }

    pub(crate) fn mark_separator(&mut self) {
        self.saw_separator = true;
    }

    /// Append one row. A row that yielded no cells is dropped; the table
    /// stays open either way.
    pub(crate) fn push_row(&mut self, cells: Vec<String>) {
        if !cells.is_empty() {
            self.rows.push(cells);
        }
    }

    /// Close the table and produce its block.
    ///
    /// Returns `None` when nothing accumulated — in that case the pending
    /// caption is left in place for a later table to claim. The first row
    /// becomes the semantic header only when a delimiter row was seen;
    /// otherwise every row is data. Row widths pass through unchanged.
    pub(crate) fn finish(&mut self, caption: &mut Option<String>) -> Option<ContentBlock> {
        self.open = false;
        let saw_separator = std::mem::take(&mut self.saw_separator);
        let mut rows = std::mem::take(&mut self.rows);
        if rows.is_empty() {
            return None;
        }
        let header = if saw_separator {
            Some(rows.remove(0))
        } else {
            None
        };
        Some(ContentBlock::Table {
            caption: caption.take(),
            header,
            rows,
        })
    }
}
