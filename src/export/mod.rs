//! Document export
//!
//! Export happens in two steps. [`build_table`] turns a grid into a
//! [`DocumentTable`], one row per grid row and one fill per cell. A
//! [`DocumentEncoder`] then turns that table into a document blob. Encoders
//! are swappable; the default depends on enabled features.

use crate::color::Color;
use crate::grid::GridState;
use crate::Result;

pub mod html;

#[cfg(feature = "docx")]
pub mod docx;

/// Title placed above the exported table unless configured otherwise.
pub const DEFAULT_TITLE: &str = "Off the Hook";

/// A single shaded table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Six uppercase hex digits, no leading `#`
    pub fill: String,
}

impl From<Color> for TableCell {
    fn from(color: Color) -> Self {
        Self { fill: color.fill() }
    }
}

/// Title plus row-major table of fills, ready for an encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTable {
    pub title: String,
    pub rows: Vec<Vec<TableCell>>,
}

impl DocumentTable {
    /// Cell fills in index order.
    pub fn fills(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().flatten().map(|c| c.fill.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}

/// Group a grid's cells into table rows of `cols` cells each.
pub fn build_table(grid: &GridState, title: &str) -> DocumentTable {
    let rows = grid
        .iter_rows()
        .map(|row| row.iter().copied().map(TableCell::from).collect())
        .collect();
    DocumentTable {
        title: title.to_string(),
        rows,
    }
}

/// Backend that renders a [`DocumentTable`] into document bytes.
pub trait DocumentEncoder: Send {
    /// File extension of produced documents, without the dot
    fn extension(&self) -> &'static str;

    /// MIME type of produced documents
    fn mime_type(&self) -> &'static str;

    /// Encode a table into a complete document
    fn encode(&self, table: &DocumentTable) -> Result<Vec<u8>>;
}

/// Create the default encoder.
///
/// Prefers the docx backend when the `docx` feature is enabled (default).
#[cfg(feature = "docx")]
pub fn new_encoder() -> Box<dyn DocumentEncoder> {
    Box::new(docx::DocxEncoder::new())
}

// Fallback when the docx backend is compiled out.
#[cfg(not(feature = "docx"))]
pub fn new_encoder() -> Box<dyn DocumentEncoder> {
    Box::new(html::HtmlEncoder::new())
}
