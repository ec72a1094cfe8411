//! gridrow - table reconstruction from positioned text fragments.
//!
//! Rebuilds rows and columns from a flat set of text runs with axis-aligned
//! bounding boxes, as produced by a page-layout extraction library. The
//! source format carries no table markup; structure is inferred from
//! geometry alone and serialized into a stable tab-delimited form.

pub mod error;
pub mod layout;
pub mod table;

pub use error::{GridError, Result};
