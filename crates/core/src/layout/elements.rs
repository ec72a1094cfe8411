//! Layout element types.

use serde::{Deserialize, Serialize};

/// A single run of text extracted from a page, with its bounding box.
///
/// Produced once per page by the external fragment source and discarded after
/// that page's rows are built. `page_height` is carried through from the
/// extractor's page record; no reconstruction step consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    #[serde(default)]
    pub page_height: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            y0,
            x1,
            y1,
            page_height: 0.0,
        }
    }
}

/// A rectangle drawn on the page.
///
/// Observed but never used for row or column inference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A straight line segment drawn on the page.
///
/// Observed but never used for row or column inference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Any layout element reported by the fragment source for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageElement {
    #[serde(rename = "text-container")]
    Text(TextFragment),
    #[serde(rename = "rectangle")]
    Rect(RectShape),
    #[serde(rename = "line")]
    Line(LineShape),
}

impl PageElement {
    pub fn is_text(&self) -> bool {
        matches!(self, PageElement::Text(_))
    }
}

/// One page's layout as handed over by the fragment source.
///
/// `number` is the 1-based page number; element order is the extractor's
/// order of appearance and is preserved through reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub number: u32,
    pub height: f64,
    pub elements: Vec<PageElement>,
}

impl PageLayout {
    pub fn new(number: u32, height: f64) -> Self {
        Self {
            number,
            height,
            elements: Vec::new(),
        }
    }

    /// Adds an element to the page.
    pub fn add(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    /// Returns an iterator over contained elements.
    pub fn iter(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter()
    }
}
