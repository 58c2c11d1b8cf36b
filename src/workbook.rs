//! Workbook document model: the generated book structure and its assembly
//! into one ordered block sequence.
//!
//! The generation step persists its output as a single JSON document — a
//! title, chapters, and per-chapter sections whose `content` field holds the
//! raw pseudo-markdown this crate parses. Field names are camelCase in the
//! JSON (`chapterNumber`, `sectionTitle`, …) and are kept that way on the
//! wire for compatibility with existing workbook files.
//!
//! [`Workbook::assemble`] walks the structure and produces the complete
//! block sequence for the downstream renderer: title, chapter headings,
//! section headings, each section's parsed content, with spacer gaps between
//! the logical groups. Assembly is block-sequence production only —
//! pagination, fonts, and page breaks belong to the renderer.

use crate::block::ContentBlock;
use crate::config::ParseConfig;
use crate::error::Md2BlocksError;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

// Vertical gaps between logical groups, in points.
const TITLE_GAP: u32 = 24;
const CHAPTER_GAP: u32 = 16;
const SECTION_HEADER_GAP: u32 = 8;
const SECTION_TRAILER_GAP: u32 = 12;

/// A complete generated book: title plus ordered chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One chapter: number, title, and ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub chapter_number: u32,
    pub chapter_title: String,
    /// Absent in workbooks saved before section generation ran.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One section: title plus raw generated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_title: String,
    /// Raw pseudo-markdown from the generation step; may be empty when
    /// content generation failed for this section.
    #[serde(default)]
    pub content: String,
}

impl Workbook {
    /// Deserialise a workbook from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, Md2BlocksError> {
        serde_json::from_str(json).map_err(|source| Md2BlocksError::MalformedWorkbook { source })
    }

    /// Load a workbook from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Md2BlocksError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Md2BlocksError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| Md2BlocksError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let workbook: Workbook =
            serde_json::from_str(&raw).map_err(|source| Md2BlocksError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "loaded workbook '{}' from {}",
            workbook.title,
            path.display()
        );
        Ok(workbook)
    }

    /// Assemble the whole workbook into one ordered block sequence.
    ///
    /// Emits the title, then for each chapter a level-1 heading
    /// ("Chapter N: Title"), then for each section a level-2 heading followed
    /// by the section content parsed with [`parser::parse_with`], with
    /// spacers between the groups. Sections are parsed independently, so no
    /// parser state crosses section boundaries.
    pub fn assemble(&self, config: &ParseConfig) -> Vec<ContentBlock> {
        self.assemble_with_stats(config).0
    }

    /// Like [`Workbook::assemble`], also returning summary counts.
    pub fn assemble_with_stats(&self, config: &ParseConfig) -> (Vec<ContentBlock>, AssemblyStats) {
        info!(
            "assembling workbook '{}' ({} chapters)",
            self.title,
            self.chapters.len()
        );

        let mut blocks = Vec::new();
        let mut sections = 0usize;

        blocks.push(ContentBlock::Title {
            text: self.title.clone(),
        });
        blocks.push(ContentBlock::Spacer { size: TITLE_GAP });

        for chapter in &self.chapters {
            blocks.push(ContentBlock::heading(
                1,
                format!("Chapter {}: {}", chapter.chapter_number, chapter.chapter_title),
            ));
            blocks.push(ContentBlock::Spacer { size: CHAPTER_GAP });

            for section in &chapter.sections {
                sections += 1;
                debug!(
                    "parsing chapter {} section '{}'",
                    chapter.chapter_number, section.section_title
                );
                blocks.push(ContentBlock::heading(2, section.section_title.clone()));
                blocks.push(ContentBlock::Spacer {
                    size: SECTION_HEADER_GAP,
                });
                blocks.extend(parser::parse_with(&section.content, config));
                blocks.push(ContentBlock::Spacer {
                    size: SECTION_TRAILER_GAP,
                });
            }
        }

        let mut stats = AssemblyStats::for_blocks(&blocks);
        stats.chapters = self.chapters.len();
        stats.sections = sections;
        (blocks, stats)
    }
}

/// Summary counts over an assembled block sequence.
///
/// `chapters` and `sections` are filled in by
/// [`Workbook::assemble_with_stats`]; [`AssemblyStats::for_blocks`] alone
/// leaves them at zero since a bare block sequence carries no document
/// structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    pub chapters: usize,
    pub sections: usize,
    pub blocks: usize,
    pub titles: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub lists: usize,
    pub tables: usize,
    pub spacers: usize,
}

impl AssemblyStats {
    /// Tally block kinds over a sequence.
    pub fn for_blocks(blocks: &[ContentBlock]) -> Self {
        let mut stats = Self {
            blocks: blocks.len(),
            ..Self::default()
        };
        for block in blocks {
            match block {
                ContentBlock::Title { .. } => stats.titles += 1,
                ContentBlock::Heading { .. } => stats.headings += 1,
                ContentBlock::Paragraph { .. } => stats.paragraphs += 1,
                ContentBlock::List { .. } => stats.lists += 1,
                ContentBlock::Table { .. } => stats.tables += 1,
                ContentBlock::Spacer { .. } => stats.spacers += 1,
            }
        }
        stats
    }
}
