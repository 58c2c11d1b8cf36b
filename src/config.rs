//! Configuration for the block parser.
//!
//! Every knob lives in [`ParseConfig`], built via its
//! [`ParseConfigBuilder`]. Keeping the knobs in one serialisable struct
//! makes it trivial to share a config across threads, log it alongside a
//! run, and diff two runs to understand why their outputs differ.

use crate::error::Md2BlocksError;
use serde::{Deserialize, Serialize};

/// Configuration for a parse run.
///
/// Built via [`ParseConfig::builder()`] or [`ParseConfig::default()`].
///
/// # Example
/// ```rust
/// use edgequake_md2blocks::ParseConfig;
///
/// let config = ParseConfig::builder()
///     .heading_word_limit(6)
///     .build()
///     .unwrap();
/// assert_eq!(config.heading_word_limit, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Word-count ceiling for the implicit-heading heuristic. Default: 10.
    ///
    /// A line with no explicit marker that follows a structural break (start
    /// of input, blank line, finished table, table caption) and has at most
    /// this many whitespace-separated words is classified as a heading
    /// rather than a paragraph. Generated prose rarely produces standalone
    /// short lines that are not intended as subheadings, so 10 catches the
    /// common "Key Takeaways"-style section labels without swallowing real
    /// one-sentence paragraphs, which almost always run longer.
    pub heading_word_limit: usize,

    /// Heading level assigned by the implicit-heading heuristic. Default: 3.
    ///
    /// Implicit headings sit below the explicit chapter (1) and section (2)
    /// levels, so 3 keeps the document outline consistent when the heuristic
    /// fires inside a section body.
    pub implicit_heading_level: u8,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            heading_word_limit: 10,
            implicit_heading_level: 3,
        }
    }
}

impl ParseConfig {
    /// Create a new builder for `ParseConfig`.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ParseConfig`].
#[derive(Debug)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    pub fn heading_word_limit(mut self, limit: usize) -> Self {
        self.config.heading_word_limit = limit.max(1);
        self
    }

    pub fn implicit_heading_level(mut self, level: u8) -> Self {
        self.config.implicit_heading_level = level.clamp(1, 4);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ParseConfig, Md2BlocksError> {
        let c = &self.config;
        if c.heading_word_limit == 0 {
            return Err(Md2BlocksError::InvalidConfig(
                "heading word limit must be ≥ 1".into(),
            ));
        }
        if !(1..=4).contains(&c.implicit_heading_level) {
            return Err(Md2BlocksError::InvalidConfig(format!(
                "implicit heading level must be 1–4, got {}",
                c.implicit_heading_level
            )));
        }
        Ok(self.config)
    }
}
