//! Line classification: the first stage of the scan.
//!
//! Each line is classified exactly once, independently of its neighbours,
//! by checking the variants below in declaration order — the first match
//! wins. Order is load-bearing: explicit markers short-circuit everything,
//! the `# Table:` caption must be tested before the generic heading pattern
//! (a caption line also matches `^#+\s`), and table-row detection must come
//! before the bullet and plain-text fallbacks (a bullet line containing a
//! bar is a table row).

use once_cell::sync::Lazy;
use regex::Regex;

use super::table::is_delimiter_row;

/// The classified form of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineClass<'a> {
    /// All-whitespace line.
    Blank,
    /// `Title:` marker; payload is the trimmed remainder of the line.
    Title(&'a str),
    /// `Heading 1:` / `Heading 2:` / `Heading 3:` marker.
    MarkedHeading { level: u8, text: &'a str },
    /// `> Paragraph:` marker.
    MarkedParagraph(&'a str),
    /// `# Table:` caption marker.
    TableCaption(&'a str),
    /// Generic `#…` heading; residual markers are stripped from the text.
    Heading { level: u8, text: String },
    /// Dash-only row separating a table header from its data rows.
    TableDelimiter,
    /// Any other line containing a vertical bar.
    TableRow(&'a str),
    /// Optionally indented line starting with `*`; payload is the item text.
    Bullet(&'a str),
    /// Fallback: plain text.
    Text(&'a str),
}

static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());

// Generation models sometimes combine the `#` convention with an explicit
// marker ("## Heading 1: Overview"); the marker is noise inside a heading.
static RE_HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Title:|Heading\s*\d+:)\s*").unwrap());

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\*\s*").unwrap());

/// Classify one line (already stripped of trailing whitespace).
pub(crate) fn classify(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some(rest) = line.strip_prefix("Title:") {
        return LineClass::Title(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("Heading 1:") {
        return LineClass::MarkedHeading {
            level: 1,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("Heading 2:") {
        return LineClass::MarkedHeading {
            level: 2,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("Heading 3:") {
        return LineClass::MarkedHeading {
            level: 3,
            text: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("> Paragraph:") {
        return LineClass::MarkedParagraph(rest.trim());
    }

    if let Some(rest) = line.strip_prefix("# Table:") {
        return LineClass::TableCaption(rest.trim());
    }

    if let Some(caps) = RE_HEADING.captures(line) {
        let level = caps[1].len().min(4) as u8;
        let text = RE_HEADING_MARKER
            .replace(caps[2].trim(), "")
            .into_owned();
        return LineClass::Heading { level, text };
    }

    if line.contains('|') {
        return if is_delimiter_row(line) {
            LineClass::TableDelimiter
        } else {
            LineClass::TableRow(line)
        };
    }

    if let Some(m) = RE_BULLET.find(line) {
        return LineClass::Bullet(line[m.end()..].trim());
    }

    LineClass::Text(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn explicit_markers() {
        assert_eq!(classify("Title: My Book"), LineClass::Title("My Book"));
        assert_eq!(
            classify("Heading 1: Overview"),
            LineClass::MarkedHeading {
                level: 1,
                text: "Overview"
            }
        );
        assert_eq!(
            classify("Heading 3:Details"),
            LineClass::MarkedHeading {
                level: 3,
                text: "Details"
            }
        );
        assert_eq!(
            classify("> Paragraph: Some prose."),
            LineClass::MarkedParagraph("Some prose.")
        );
    }

    #[test]
    fn markers_are_prefix_matches_only() {
        // An indented marker is not a marker.
        assert_eq!(
            classify("  Title: indented"),
            LineClass::Text("  Title: indented")
        );
    }

    #[test]
    fn marker_beats_table_row() {
        assert_eq!(
            classify("Title: Costs | Benefits"),
            LineClass::Title("Costs | Benefits")
        );
    }

    #[test]
    fn caption_beats_generic_heading() {
        assert_eq!(classify("# Table: Scores"), LineClass::TableCaption("Scores"));
        // Without the exact prefix it is an ordinary heading.
        assert_eq!(
            classify("## Table: Scores"),
            LineClass::Heading {
                level: 2,
                text: "Table: Scores".into()
            }
        );
    }

    #[test]
    fn generic_heading_levels_clamp_at_four() {
        assert_eq!(
            classify("# One"),
            LineClass::Heading {
                level: 1,
                text: "One".into()
            }
        );
        assert_eq!(
            classify("###### Deep"),
            LineClass::Heading {
                level: 4,
                text: "Deep".into()
            }
        );
    }

    #[test]
    fn generic_heading_strips_residual_marker() {
        assert_eq!(
            classify("## Heading 1: Overview"),
            LineClass::Heading {
                level: 2,
                text: "Overview".into()
            }
        );
        assert_eq!(
            classify("# Title: My Book"),
            LineClass::Heading {
                level: 1,
                text: "My Book".into()
            }
        );
    }

    #[test]
    fn heading_requires_space_after_hashes() {
        assert_eq!(classify("#NoSpace"), LineClass::Text("#NoSpace"));
    }

    #[test]
    fn heading_beats_table_row() {
        assert_eq!(
            classify("# Costs | Benefits"),
            LineClass::Heading {
                level: 1,
                text: "Costs | Benefits".into()
            }
        );
    }

    #[test]
    fn table_rows_and_delimiters() {
        assert_eq!(
            classify("| Name | Score |"),
            LineClass::TableRow("| Name | Score |")
        );
        assert_eq!(classify("| --- | --- |"), LineClass::TableDelimiter);
        assert_eq!(classify("|---|"), LineClass::TableDelimiter);
    }

    #[test]
    fn table_row_beats_bullet() {
        assert_eq!(
            classify("* item | with bar"),
            LineClass::TableRow("* item | with bar")
        );
    }

    #[test]
    fn bullets() {
        assert_eq!(classify("* one"), LineClass::Bullet("one"));
        assert_eq!(classify("  * indented"), LineClass::Bullet("indented"));
        assert_eq!(classify("*tight"), LineClass::Bullet("tight"));
    }

    #[test]
    fn plain_text_falls_through() {
        assert_eq!(
            classify("Just a sentence."),
            LineClass::Text("Just a sentence.")
        );
    }
}
