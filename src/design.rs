//! JSON design files
//!
//! A design file is the pretty-printed JSON form of a [`GridState`]:
//!
//! ```json
//! { "rows": 2, "cols": 2, "cellSize": 20, "colors": ["#ff0000", "white", "white", "white"] }
//! ```
//!
//! Loading validates the whole document before a grid is built, so a bad
//! file never replaces a good grid.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::grid::{GridConfig, GridState};

/// How to treat a design whose `colors` length disagrees with its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Reject the design with [`Error::SchemaError`]
    #[default]
    Strict,
    /// Truncate extra colors and pad missing ones with unpainted cells
    Lenient,
}

/// On-disk shape of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u32,
    pub colors: Vec<Color>,
}

/// Dimensions are read signed so negative values surface as schema errors
/// rather than serde range messages.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDesign {
    rows: i64,
    cols: i64,
    cell_size: i64,
    colors: Vec<Color>,
}

impl From<&GridState> for DesignFile {
    fn from(grid: &GridState) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cell_size: grid.cell_size(),
            colors: grid.colors().to_vec(),
        }
    }
}

/// Serialize a grid as a pretty-printed design document.
pub fn save(grid: &GridState) -> Result<String> {
    let json = serde_json::to_string_pretty(&DesignFile::from(grid))?;
    Ok(json)
}

/// Like [`save`], as bytes for a file sink.
pub fn save_bytes(grid: &GridState) -> Result<Vec<u8>> {
    save(grid).map(String::into_bytes)
}

/// Parse and validate a design, building a fresh grid from it.
pub fn load(source: &str, mode: LoadMode) -> Result<GridState> {
    load_bytes(source.as_bytes(), mode)
}

/// Like [`load`], from raw file bytes.
pub fn load_bytes(source: &[u8], mode: LoadMode) -> Result<GridState> {
    let raw: RawDesign = serde_json::from_slice(source)?;

    let config = GridConfig::new(raw.rows, raw.cols, raw.cell_size)
        .map_err(|e| Error::SchemaError(e.to_string()))?;

    let mut colors = raw.colors;
    let expected = config.len();
    if colors.len() != expected {
        match mode {
            LoadMode::Strict => {
                return Err(Error::SchemaError(format!(
                    "expected {} colors for a {}x{} grid, found {}",
                    expected,
                    config.rows,
                    config.cols,
                    colors.len()
                )))
            }
            LoadMode::Lenient => {
                warn!(
                    "design has {} colors for {} cells; resizing",
                    colors.len(),
                    expected
                );
                colors.resize(expected, Color::Unpainted);
            }
        }
    }

    let mut grid = GridState::create(config);
    grid.set_colors(colors)?;
    info!(
        "loaded {}x{} design with {} painted cells",
        grid.rows(),
        grid.cols(),
        grid.painted_count()
    );
    Ok(grid)
}
