//! CLI binary for edgequake-md2blocks.
//!
//! A thin shim over the library crate: loads a workbook JSON file (or one
//! section's raw text with `--raw`), assembles the block sequence, and
//! prints it as JSON for the downstream document renderer.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_md2blocks::{parse_with, AssemblyStats, ParseConfig, Workbook};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Workbook JSON to block JSON (stdout)
  md2blocks final_workbook.json

  # Pretty-printed, written atomically to a file
  md2blocks final_workbook.json --pretty -o blocks.json

  # Parse one section's raw generated text
  md2blocks --raw section.txt

  # Tighten the implicit-heading heuristic
  md2blocks --raw section.txt --heading-word-limit 6

  # Summary counts on stderr alongside the output
  md2blocks final_workbook.json --stats -o blocks.json

ENVIRONMENT VARIABLES:
  RUST_LOG    tracing filter, e.g. RUST_LOG=edgequake_md2blocks=debug

OUTPUT:
  A JSON array of internally-tagged blocks, e.g.
    [{"type":"title","text":"My Book"},
     {"type":"spacer","size":24},
     {"type":"heading","level":1,"text":"Chapter 1: Introduction"}]
"#;

/// Convert generated pseudo-Markdown into typed document blocks.
#[derive(Parser, Debug)]
#[command(
    name = "md2blocks",
    version,
    about = "Convert generated pseudo-Markdown into typed document blocks",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Workbook JSON file (or raw section text with --raw).
    input: PathBuf,

    /// Treat the input as one section's raw text instead of workbook JSON.
    #[arg(long)]
    raw: bool,

    /// Write the block JSON here instead of stdout (atomic write).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print summary counts to stderr.
    #[arg(long)]
    stats: bool,

    /// Word-count ceiling for the implicit-heading heuristic.
    #[arg(long, default_value_t = 10)]
    heading_word_limit: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the block JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config = ParseConfig::builder()
        .heading_word_limit(cli.heading_word_limit)
        .build()?;

    let (blocks, stats) = if cli.raw {
        let text = std::fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read '{}'", cli.input.display()))?;
        let blocks = parse_with(&text, &config);
        let stats = AssemblyStats::for_blocks(&blocks);
        (blocks, stats)
    } else {
        let workbook = Workbook::from_file(&cli.input)?;
        workbook.assemble_with_stats(&config)
    };

    if cli.stats {
        print_stats(&stats, cli.raw);
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&blocks)
    } else {
        serde_json::to_string(&blocks)
    }
    .context("failed to serialise block sequence")?;

    match &cli.output {
        Some(path) => {
            write_atomic(path, &json)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("wrote {} blocks to {}", blocks.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn print_stats(stats: &AssemblyStats, raw: bool) {
    if !raw {
        eprintln!("chapters:   {}", stats.chapters);
        eprintln!("sections:   {}", stats.sections);
    }
    eprintln!("blocks:     {}", stats.blocks);
    eprintln!("  headings:   {}", stats.headings);
    eprintln!("  paragraphs: {}", stats.paragraphs);
    eprintln!("  lists:      {}", stats.lists);
    eprintln!("  tables:     {}", stats.tables);
    eprintln!("  spacers:    {}", stats.spacers);
}

/// Atomic write: write to a temp file in the same directory, then rename,
/// so a crash never leaves a partial output file.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)
}
