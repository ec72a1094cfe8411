//! Reconstruction parameters.
//!
//! Contains TableParams for controlling row clustering and column inference.

use serde::{Deserialize, Serialize};

/// How a row's cells are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowStrategy {
    /// One cell per fragment, in x order. Rows are clustered against the
    /// first fragment of the row (pinned reference).
    #[default]
    Basic,
    /// Cells aligned to page-wide inferred column intervals. Rows are
    /// clustered pairwise against the previous fragment (chained reference),
    /// which tolerates more vertical drift over long rows.
    ColumnExact,
}

/// Parameters for table reconstruction.
///
/// Controls how fragments are grouped into rows and how column intervals are
/// discovered and merged. All comparisons are tolerance-based; the defaults
/// reproduce the behavior of the reference extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableParams {
    /// Cell assembly strategy.
    pub strategy: RowStrategy,

    /// Maximum |y0| distance from a row's first fragment for another
    /// fragment to join that row (Basic strategy).
    pub pinned_row_threshold: f64,

    /// Maximum |y0| distance from the previous fragment for the next
    /// fragment to continue the row (ColumnExact strategy).
    pub chained_row_threshold: f64,

    /// How far outside an interval's span a fragment's x0 may fall and still
    /// snap to that interval, during both discovery and cell assignment.
    pub column_snap_tolerance: f64,

    /// Maximum horizontal gap between two discovered intervals for them to
    /// be merged into one column.
    pub column_merge_gap: f64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            strategy: RowStrategy::Basic,
            pinned_row_threshold: 5.0,
            chained_row_threshold: 8.0,
            column_snap_tolerance: 5.0,
            column_merge_gap: 10.0,
        }
    }
}

impl TableParams {
    /// Creates default parameters for the given strategy.
    pub fn with_strategy(strategy: RowStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Row threshold in effect for the configured strategy.
    pub fn row_threshold(&self) -> f64 {
        match self.strategy {
            RowStrategy::Basic => self.pinned_row_threshold,
            RowStrategy::ColumnExact => self.chained_row_threshold,
        }
    }
}
