//! Canonical tab-delimited serialization of reconstructed rows.
//!
//! The exact token layout is a compatibility contract for downstream
//! consumers that split on the tab character and must be reproduced
//! bit-for-bit: a leading `"\t "`, cells joined with `" \t "`, and a
//! trailing `" \t"`.

use itertools::Itertools;

/// Serializes one row of cells into the canonical tab-delimited line.
pub fn serialize_row(cells: &[String]) -> String {
    format!("\t {} \t", cells.iter().join(" \t "))
}

/// Serializes a whole table, one line per row, newline-joined.
pub fn serialize_rows(rows: &[Vec<String>]) -> String {
    rows.iter().map(|row| serialize_row(row)).join("\n")
}
