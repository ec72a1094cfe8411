//! Row clustering: partitioning a page's fragments into visual lines.

use std::cmp::Ordering;

use crate::layout::{RowStrategy, TableParams, TextFragment};

/// Groups a page's fragments into rows by vertical proximity.
///
/// Fragments are sorted by `y0` descending (top of the page first, since y
/// increases upward) and walked once. Under [`RowStrategy::Basic`] a fragment
/// joins the current row when its `y0` is within `pinned_row_threshold` of
/// the row's *first* fragment; under [`RowStrategy::ColumnExact`] the
/// comparison is against the *previous* fragment with
/// `chained_row_threshold`. The chained form lets a long run of fragments
/// drift past the threshold cumulatively and still land in one row; that is
/// deliberate, not a defect.
///
/// Callers must have discarded fragments whose trimmed text is empty. No row
/// in the output is empty and no fragment appears in more than one row.
/// Fragments within a row keep their sort order (by `y0`, not by `x0`).
pub fn cluster_rows<'a>(
    fragments: &[&'a TextFragment],
    params: &TableParams,
) -> Vec<Vec<&'a TextFragment>> {
    let mut sorted: Vec<&TextFragment> = fragments.to_vec();
    sorted.sort_by(|a, b| b.y0.partial_cmp(&a.y0).unwrap_or(Ordering::Equal));

    let threshold = params.row_threshold();
    let chained = params.strategy == RowStrategy::ColumnExact;

    let mut rows: Vec<Vec<&TextFragment>> = Vec::new();
    let mut current: Vec<&TextFragment> = Vec::new();
    for fragment in sorted {
        let reference_y = if chained {
            current.last().map(|f| f.y0)
        } else {
            current.first().map(|f| f.y0)
        };
        match reference_y {
            None => current.push(fragment),
            Some(y) if (fragment.y0 - y).abs() < threshold => current.push(fragment),
            Some(_) => rows.push(std::mem::replace(&mut current, vec![fragment])),
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Sorts each row's fragments left to right.
pub(crate) fn sort_rows_by_x(rows: &mut [Vec<&TextFragment>]) {
    for row in rows {
        row.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal));
    }
}
