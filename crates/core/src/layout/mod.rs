//! Page layout input model.
//!
//! Types describing what an external page-layout extractor hands over: text
//! fragments with bounding boxes plus the rectangle/line geometry observed on
//! the page. Coordinates use the PDF convention, origin at the bottom-left
//! with y increasing upward.

mod elements;
pub mod params;

pub use elements::{LineShape, PageElement, PageLayout, RectShape, TextFragment};
pub use params::{RowStrategy, TableParams};
