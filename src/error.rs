//! Error types for the edgequake-md2blocks library.
//!
//! The block parser itself never fails: every line is classified into some
//! block or silently consumed, and malformed input degrades into plain
//! paragraphs. All fallible surface area lives at the edges — loading a
//! workbook from disk, deserialising its JSON, writing output — and is
//! reported through [`Md2BlocksError`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the edgequake-md2blocks library.
#[derive(Debug, Error)]
pub enum Md2BlocksError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Workbook file was not found at the given path.
    #[error("workbook file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Workbook file exists but could not be read.
    #[error("failed to read workbook '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook file was read but did not deserialise into a workbook.
    #[error("workbook '{path}' is not valid workbook JSON: {source}\nExpected the shape {{\"title\": …, \"chapters\": [{{\"chapterNumber\": …, \"chapterTitle\": …, \"sections\": […]}}]}}.")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory JSON string did not deserialise into a workbook.
    #[error("workbook JSON is malformed: {source}")]
    MalformedWorkbook {
        #[source]
        source: serde_json::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
