//! Column boundary inference for the column-exact strategy.

use std::cmp::Ordering;

use crate::layout::{TableParams, TextFragment};

/// An inferred horizontal span representing one visual column of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnInterval {
    pub xmin: f64,
    pub xmax: f64,
}

impl ColumnInterval {
    /// Whether `x0` snaps to this interval within the given tolerance.
    pub(crate) fn accepts_start(&self, x0: f64, snap: f64) -> bool {
        x0 >= self.xmin - snap && x0 <= self.xmax + snap
    }

    /// Whether a fragment spanning `x0..x1` fits this column within the
    /// given tolerance.
    pub(crate) fn contains_span(&self, x0: f64, x1: f64, snap: f64) -> bool {
        x0 >= self.xmin - snap && x1 <= self.xmax + snap
    }
}

/// Infers the page-wide, left-to-right ordered column intervals.
///
/// First-fit discovery: fragments are visited row by row, left to right
/// within each row, and each either extends the first interval whose span
/// its `x0` snaps to or opens a new interval. The result depends on that
/// visitation order by construction, so callers must pass rows already
/// sorted left to right. A final merge pass combines intervals whose gap is
/// within `column_merge_gap`.
pub fn resolve_columns(
    rows: &[Vec<&TextFragment>],
    params: &TableParams,
) -> Vec<ColumnInterval> {
    let snap = params.column_snap_tolerance;
    let mut intervals: Vec<ColumnInterval> = Vec::new();
    for row in rows {
        for fragment in row {
            match intervals
                .iter_mut()
                .find(|interval| interval.accepts_start(fragment.x0, snap))
            {
                Some(interval) => {
                    interval.xmin = interval.xmin.min(fragment.x0);
                    interval.xmax = interval.xmax.max(fragment.x1);
                }
                None => intervals.push(ColumnInterval {
                    xmin: fragment.x0,
                    xmax: fragment.x1,
                }),
            }
        }
    }
    merge_intervals(intervals, params.column_merge_gap)
}

/// Merges intervals whose horizontal gap is within `gap`.
///
/// Sorts by `xmin` ascending and folds left to right. Idempotent: running it
/// on an already-merged list returns the list unchanged.
pub fn merge_intervals(mut intervals: Vec<ColumnInterval>, gap: f64) -> Vec<ColumnInterval> {
    intervals.sort_by(|a, b| a.xmin.partial_cmp(&b.xmin).unwrap_or(Ordering::Equal));

    let mut merged: Vec<ColumnInterval> = Vec::new();
    for interval in intervals {
        match merged.last_mut() {
            Some(prev) if interval.xmin <= prev.xmax + gap => {
                prev.xmax = prev.xmax.max(interval.xmax);
            }
            _ => merged.push(interval),
        }
    }
    merged
}
