//! Row assembly: turning ordered fragments into cleaned cell strings.

use itertools::Itertools;
use tracing::debug;

use crate::layout::TextFragment;
use crate::table::columns::ColumnInterval;

/// Collapses every whitespace run (including embedded newlines) to a single
/// space and trims the ends.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Basic strategy: one cell per fragment, left to right.
///
/// Fragments whose cleaned text is empty contribute no cell; rows may end up
/// with different cell counts.
pub(crate) fn assemble_basic(row: &[&TextFragment]) -> Vec<String> {
    row.iter()
        .map(|fragment| clean_text(&fragment.text))
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Column-exact strategy: map each fragment into its resolved column.
///
/// Each fragment goes to the first interval (left to right) that contains
/// its x-span within the snap tolerance. A second fragment landing in an
/// occupied slot is appended after a single space. A fragment matching no
/// interval is dropped. Empty slots are stripped afterward, so the output is
/// aligned by content order rather than absolute column index.
pub(crate) fn assemble_column_exact(
    row: &[&TextFragment],
    columns: &[ColumnInterval],
    snap: f64,
) -> Vec<String> {
    let mut slots: Vec<String> = vec![String::new(); columns.len()];
    let mut dropped = 0usize;
    for fragment in row {
        let slot = columns
            .iter()
            .position(|column| column.contains_span(fragment.x0, fragment.x1, snap));
        let Some(i) = slot else {
            dropped += 1;
            continue;
        };
        let cell = clean_text(&fragment.text);
        if cell.is_empty() {
            continue;
        }
        if slots[i].is_empty() {
            slots[i] = cell;
        } else {
            slots[i].push(' ');
            slots[i].push_str(&cell);
        }
    }
    if dropped > 0 {
        debug!(dropped, "fragments matched no column interval");
    }
    slots.retain(|cell| !cell.is_empty());
    slots
}
