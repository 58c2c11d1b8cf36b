//! # edgequake-md2blocks
//!
//! Parse model-generated pseudo-Markdown into typed document blocks.
//!
//! ## Why this crate?
//!
//! Text-generation models can be prompted to emit a constrained,
//! line-oriented formatting convention — explicit markers such as `Title:`,
//! `Heading 1:` and `> Paragraph:`, pipe-delimited tables, `*` bullets —
//! but they drift: markers go missing, tables lose their delimiter row,
//! plain prose arrives unmarked. Feeding that text straight into a document
//! renderer produces garbage. This crate classifies every line in a fixed
//! priority order and degrades gracefully, so arbitrary generated text
//! always becomes a well-formed sequence of typed blocks the renderer can
//! lay out.
//!
//! ## Pipeline Overview
//!
//! ```text
//! workbook JSON
//!  │
//!  ├─ 1. Load      deserialise title / chapters / sections
//!  ├─ 2. Parse     per-section line scan → typed content blocks
//!  ├─ 3. Assemble  title + chapter/section scaffolding + spacers
//!  └─ 4. Output    block-sequence JSON for the document renderer
//! ```
//!
//! The parser (step 2) is the heart of the crate and is a pure, synchronous
//! function over an in-memory string: no I/O, no suspension points, no
//! shared state. Parsing independent sections from multiple threads is safe.
//! Pagination, fonts, and page breaks are the downstream renderer's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgequake_md2blocks::{parse, ContentBlock};
//!
//! let blocks = parse("Heading 1: Overview\nThis is text.\n");
//! assert!(matches!(&blocks[0], ContentBlock::Heading { level: 1, .. }));
//! assert!(matches!(&blocks[1], ContentBlock::Paragraph { .. }));
//! ```
//!
//! Whole-workbook assembly:
//!
//! ```rust
//! use edgequake_md2blocks::{ParseConfig, Workbook};
//!
//! let workbook = Workbook::from_json_str(
//!     r#"{"title":"My Book","chapters":[]}"#,
//! ).unwrap();
//! let blocks = workbook.assemble(&ParseConfig::default());
//! assert_eq!(blocks[0].kind(), "title");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2blocks` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-md2blocks = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod block;
pub mod config;
pub mod error;
pub mod parser;
pub mod workbook;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use block::ContentBlock;
pub use config::{ParseConfig, ParseConfigBuilder};
pub use error::Md2BlocksError;
pub use parser::{parse, parse_with};
pub use workbook::{AssemblyStats, Chapter, Section, Workbook};
