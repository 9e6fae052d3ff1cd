//! Off the Hook
//!
//! A pixel-grid drawing model: configure a grid of cells, paint and erase
//! them, then export the result as a shaded document table or save it as a
//! JSON design file that loads back into the same grid.
//!
//! # Features
//!
//! - **docx** (default): export through `docx-rs`; without it documents are
//!   exported as HTML tables
//! - **Single source of truth**: [`GridState`] holds every cell color and
//!   the canvas is a projection of it (see [`rendering`])
//! - **Validated loads**: malformed or mismatched design files are rejected
//!   before the current grid is replaced
//!
//! # Example
//!
//! ```
//! use offthehook::{Color, Command, Editor, EditorConfig, Outcome};
//!
//! # fn main() -> offthehook::Result<()> {
//! let mut editor = Editor::new(EditorConfig::default());
//! editor.apply(Command::CreateGrid { rows: 2, cols: 2, cell_size: 20 })?;
//! editor.apply(Command::SelectColor("#ff0000".parse()?))?;
//! editor.apply(Command::PointerDown(0))?;
//! editor.apply(Command::PointerEnter(1))?;
//! editor.apply(Command::PointerUp)?;
//!
//! assert_eq!(editor.grid().unwrap().get(1), Some(Color::Rgb(255, 0, 0)));
//! if let Outcome::Saved(design) = editor.apply(Command::SaveDesign)? {
//!     assert_eq!(design.file_name, "off-the-hook.json");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod design;
pub mod editor;
pub mod export;
pub mod grid;
pub mod script;

// Canvas projection (layout, paint list, raster)
pub mod rendering;

// Async export worker
pub mod async_api;

pub use async_api::Exporter;
pub use color::Color;
pub use design::{DesignFile, LoadMode};
pub use editor::{Artifact, Command, Editor, Gesture, Outcome, Tool};
pub use export::{build_table, DocumentEncoder, DocumentTable, TableCell};
pub use grid::{GridConfig, GridState};

/// Configuration for the editor
///
/// The defaults reproduce the stock tool: a black picker, strict design
/// loading, and downloads named `off-the-hook.*`.
///
/// # Examples
///
/// ```
/// let cfg = offthehook::EditorConfig::default();
/// assert_eq!(cfg.export_file_name, "off-the-hook.docx");
/// ```
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Title paragraph placed above the exported table
    pub document_title: String,
    /// Download name for exported documents
    pub export_file_name: String,
    /// Download name for saved designs
    pub design_file_name: String,
    /// Initial picker color
    pub default_color: Color,
    /// How to treat designs whose color count disagrees with their size
    pub load_mode: LoadMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            document_title: export::DEFAULT_TITLE.to_string(),
            export_file_name: "off-the-hook.docx".to_string(),
            design_file_name: "off-the-hook.json".to_string(),
            default_color: Color::BLACK,
            load_mode: LoadMode::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.document_title, "Off the Hook");
        assert_eq!(config.design_file_name, "off-the-hook.json");
        assert_eq!(config.default_color, Color::Rgb(0, 0, 0));
        assert_eq!(config.load_mode, LoadMode::Strict);
    }
}
