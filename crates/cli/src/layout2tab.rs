//! layout2tab - Reconstruct tab-delimited table rows from page layouts
//!
//! A command line tool that reads page layouts (text fragments with bounding
//! boxes, as produced by an external layout extractor) from JSON files and
//! prints the reconstructed rows as tab-delimited text or JSON.

use gridrow_core::error::{GridError, Result};
use gridrow_core::layout::{PageLayout, RowStrategy, TableParams};
use gridrow_core::table::{RowBlock, extract_document_row_blocks, serialize_rows};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Row assembly mode.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Mode {
    /// One cell per fragment, no cross-row column alignment (default)
    #[default]
    Basic,
    /// Align cells to page-wide inferred column intervals
    ColumnExact,
}

impl Mode {
    fn strategy(self) -> RowStrategy {
        match self {
            Mode::Basic => RowStrategy::Basic,
            Mode::ColumnExact => RowStrategy::ColumnExact,
        }
    }
}

/// A command line tool that reconstructs table rows from positioned text
/// fragments and outputs them as tab-delimited text or JSON.
#[derive(Parser, Debug)]
#[command(name = "layout2tab")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to page-layout JSON files ("-" for stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Row assembly mode
    #[arg(short = 'm', long, value_enum, default_value = "basic")]
    mode: Mode,

    /// A comma-separated list of page numbers to process (1-indexed)
    #[arg(short = 'p', long = "page-numbers")]
    page_numbers: Option<String>,

    // === Tolerance overrides ===
    /// Row threshold for basic mode (pinned to the row's first fragment)
    #[arg(long = "row-threshold", default_value = "5.0")]
    row_threshold: f64,

    /// Row threshold for column-exact mode (chained to the previous fragment)
    #[arg(long = "chained-row-threshold", default_value = "8.0")]
    chained_row_threshold: f64,

    /// Column snap tolerance for interval discovery and cell assignment
    #[arg(long = "snap-tolerance", default_value = "5.0")]
    snap_tolerance: f64,

    /// Maximum horizontal gap between column intervals to merge them
    #[arg(long = "merge-gap", default_value = "10.0")]
    merge_gap: f64,

    // === Output options ===
    /// Output file path (default: stdout)
    #[arg(short = 'o', long)]
    outfile: Option<PathBuf>,

    /// Emit a JSON array of {page, cells} objects instead of tab-delimited text
    #[arg(short = 'J', long, action = ArgAction::SetTrue)]
    json: bool,
}

/// JSON form of one reconstructed row.
#[derive(Serialize)]
struct RowRecord<'a> {
    page: u32,
    cells: &'a [String],
}

fn parse_page_numbers(spec: &str) -> Result<Vec<u32>> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| GridError::MalformedLayout(format!("bad page number: {s}")))
        })
        .collect()
}

/// Reads one input file (or stdin for "-") into the page list.
fn read_pages(path: &PathBuf, pages: &mut Vec<PageLayout>) -> Result<()> {
    let data = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let decoded: Vec<PageLayout> = serde_json::from_str(&data)
        .map_err(|e| GridError::MalformedLayout(format!("{}: {e}", path.display())))?;
    pages.extend(decoded);
    Ok(())
}

fn write_output<W: Write>(out: &mut W, blocks: &[RowBlock], json: bool) -> Result<()> {
    if json {
        let records: Vec<RowRecord<'_>> = blocks
            .iter()
            .map(|block| RowRecord {
                page: block.page,
                cells: &block.cells,
            })
            .collect();
        let encoded = serde_json::to_string_pretty(&records)
            .map_err(|e| GridError::Encode(e.to_string()))?;
        writeln!(out, "{encoded}")?;
    } else {
        let rows: Vec<Vec<String>> = blocks.iter().map(|block| block.cells.clone()).collect();
        let serialized = serialize_rows(&rows);
        if !serialized.is_empty() {
            writeln!(out, "{serialized}")?;
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let params = TableParams {
        strategy: args.mode.strategy(),
        pinned_row_threshold: args.row_threshold,
        chained_row_threshold: args.chained_row_threshold,
        column_snap_tolerance: args.snap_tolerance,
        column_merge_gap: args.merge_gap,
    };

    let mut pages: Vec<PageLayout> = Vec::new();
    for path in &args.files {
        read_pages(path, &mut pages)?;
    }

    if let Some(spec) = &args.page_numbers {
        let selected = parse_page_numbers(spec)?;
        pages.retain(|page| selected.contains(&page.number));
    }

    tracing::debug!(pages = pages.len(), ?params.strategy, "reconstructing document");
    let blocks = extract_document_row_blocks(&pages, &params);

    match &args.outfile {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_output(&mut out, &blocks, args.json)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_output(&mut out, &blocks, args.json)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("layout2tab: {err}");
        std::process::exit(1);
    }
}
