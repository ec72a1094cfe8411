//! Table reconstruction pipeline.
//!
//! Rebuilds tabular rows from a page's positioned text fragments: fragments
//! are clustered into visual lines, lines are optionally aligned against
//! page-wide inferred column intervals, and the result is serialized into a
//! tab-delimited form. Pages are independent; document-level entry points
//! fan pages out across a rayon pool and recombine in ascending page order.

mod assemble;
mod columns;
mod rows;
mod serialize;

pub use columns::{ColumnInterval, merge_intervals, resolve_columns};
pub use rows::cluster_rows;
pub use serialize::{serialize_row, serialize_rows};

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::layout::{PageElement, PageLayout, RowStrategy, TableParams, TextFragment};

/// One reconstructed row together with the page it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock {
    pub page: u32,
    pub cells: Vec<String>,
}

/// Reconstructs one page's rows as ordered cell lists.
///
/// Rectangle and line elements are observed but never influence grouping;
/// text fragments whose trimmed text is empty are discarded up front. A page
/// with no usable fragments yields zero rows, which is not an error.
pub fn extract_page_rows(page: &PageLayout, params: &TableParams) -> Vec<Vec<String>> {
    let mut fragments: Vec<&TextFragment> = Vec::new();
    let mut shapes = 0usize;
    for element in &page.elements {
        match element {
            PageElement::Text(fragment) if !fragment.text.trim().is_empty() => {
                fragments.push(fragment);
            }
            PageElement::Text(_) => {}
            PageElement::Rect(_) | PageElement::Line(_) => shapes += 1,
        }
    }
    if fragments.is_empty() {
        return Vec::new();
    }
    debug!(
        page = page.number,
        fragments = fragments.len(),
        shapes,
        "collected page elements"
    );

    let mut rows = rows::cluster_rows(&fragments, params);
    rows::sort_rows_by_x(&mut rows);

    let assembled: Vec<Vec<String>> = match params.strategy {
        RowStrategy::Basic => rows.iter().map(|row| assemble::assemble_basic(row)).collect(),
        RowStrategy::ColumnExact => {
            let intervals = columns::resolve_columns(&rows, params);
            debug!(
                page = page.number,
                columns = intervals.len(),
                "resolved column intervals"
            );
            rows.iter()
                .map(|row| {
                    assemble::assemble_column_exact(row, &intervals, params.column_snap_tolerance)
                })
                .collect()
        }
    };

    let table: Vec<Vec<String>> = assembled
        .into_iter()
        .filter(|cells| !cells.is_empty())
        .collect();
    debug!(page = page.number, rows = table.len(), "reconstructed rows");
    table
}

/// Reconstructs every page and returns rows tagged with their page number.
///
/// Pages are processed in parallel; no state is shared across pages, so the
/// only ordering obligation is the final recombination, which sorts by page
/// number (ties broken by input position).
pub fn extract_document_row_blocks(pages: &[PageLayout], params: &TableParams) -> Vec<RowBlock> {
    let mut per_page: Vec<(usize, u32, Vec<Vec<String>>)> = pages
        .par_iter()
        .enumerate()
        .map(|(idx, page)| (idx, page.number, extract_page_rows(page, params)))
        .collect();
    per_page.sort_by_key(|(idx, number, _)| (*number, *idx));

    per_page
        .into_iter()
        .flat_map(|(_, number, rows)| {
            rows.into_iter().map(move |cells| RowBlock { page: number, cells })
        })
        .collect()
}

/// Reconstructs every page and returns the flat, page-ordered row list.
pub fn extract_document_rows(pages: &[PageLayout], params: &TableParams) -> Vec<Vec<String>> {
    extract_document_row_blocks(pages, params)
        .into_iter()
        .map(|block| block.cells)
        .collect()
}

/// Like [`extract_document_rows`], for fragment sources that yield pages
/// fallibly.
///
/// The first layout-extraction fault aborts the whole document; callers that
/// prefer to skip bad pages filter the iterator before handing it in.
pub fn extract_document_rows_checked<I>(pages: I, params: &TableParams) -> Result<Vec<Vec<String>>>
where
    I: IntoIterator<Item = Result<PageLayout>>,
{
    let pages: Vec<PageLayout> = pages.into_iter().collect::<Result<_>>()?;
    Ok(extract_document_rows(&pages, params))
}
