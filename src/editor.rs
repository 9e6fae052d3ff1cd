//! Editor controller
//!
//! The [`Editor`] owns all application state: the current grid, the active
//! tool, the picker color and the pointer gesture. Hosts feed it
//! [`Command`]s and act on the returned [`Outcome`]. A failing command never
//! changes state.

use log::{debug, info};

use crate::async_api::Exporter;
use crate::color::Color;
use crate::design::{self, LoadMode};
use crate::error::{Error, Result};
use crate::export::{self, DocumentEncoder, DocumentTable};
use crate::grid::{GridConfig, GridState};
use crate::EditorConfig;

/// What a pointer gesture does to the cells it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Paint,
    Erase,
}

impl Tool {
    pub fn toggled(self) -> Self {
        match self {
            Tool::Paint => Tool::Erase,
            Tool::Erase => Tool::Paint,
        }
    }
}

/// Pointer gesture state: painting lasts from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Painting,
}

/// Everything a host can ask the editor to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the grid with a fresh all-unpainted one
    CreateGrid { rows: i64, cols: i64, cell_size: i64 },
    /// Recreate the grid with the current rows/cols and a new cell size
    SetCellSize(i64),
    /// Set the picker color used by the paint tool
    SelectColor(Color),
    /// Apply the active tool to a cell and start painting
    PointerDown(usize),
    /// Apply the active tool to a cell if painting
    PointerEnter(usize),
    /// Stop painting, wherever the pointer is
    PointerUp,
    /// Paint one cell with the picker color regardless of tool
    PaintCell(usize),
    /// Erase one cell regardless of tool
    EraseCell(usize),
    /// Switch between paint and erase
    ToggleEraser,
    /// Encode the grid as a document
    ExportDocument,
    /// Serialize the grid as a design file
    SaveDesign,
    /// Replace the grid with one read from a design file
    LoadDesign(Vec<u8>),
}

/// Bytes handed to the host for download or writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; hosts should re-render
    Updated,
    /// Nothing changed
    Unchanged,
    /// A document was produced
    Exported(Artifact),
    /// A design file was produced
    Saved(Artifact),
}

pub struct Editor {
    config: EditorConfig,
    grid: Option<GridState>,
    tool: Tool,
    color: Color,
    gesture: Gesture,
    encoder: Box<dyn DocumentEncoder>,
}

impl Editor {
    /// Create an editor using the default document encoder.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_encoder(config, export::new_encoder())
    }

    pub fn with_encoder(config: EditorConfig, encoder: Box<dyn DocumentEncoder>) -> Self {
        Self {
            color: config.default_color,
            config,
            grid: None,
            tool: Tool::default(),
            gesture: Gesture::default(),
            encoder,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> Option<&GridState> {
        self.grid.as_ref()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Dispatch one command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::CreateGrid { rows, cols, cell_size } => {
                self.create_grid(rows, cols, cell_size)
            }
            Command::SetCellSize(cell_size) => {
                let grid = self.grid.as_ref().ok_or(Error::NoGrid)?;
                let (rows, cols) = (grid.rows() as i64, grid.cols() as i64);
                self.create_grid(rows, cols, cell_size)
            }
            Command::SelectColor(color) => {
                self.color = color;
                Ok(Outcome::Unchanged)
            }
            Command::PointerDown(index) => {
                self.apply_tool(index)?;
                self.gesture = Gesture::Painting;
                Ok(Outcome::Updated)
            }
            Command::PointerEnter(index) => {
                if self.gesture == Gesture::Idle {
                    return Ok(Outcome::Unchanged);
                }
                self.apply_tool(index)?;
                Ok(Outcome::Updated)
            }
            Command::PointerUp => {
                self.gesture = Gesture::Idle;
                Ok(Outcome::Unchanged)
            }
            Command::PaintCell(index) => {
                let color = self.color;
                self.grid_mut()?.try_paint(index, color)?;
                Ok(Outcome::Updated)
            }
            Command::EraseCell(index) => {
                self.grid_mut()?.try_paint(index, Color::Unpainted)?;
                Ok(Outcome::Updated)
            }
            Command::ToggleEraser => {
                self.tool = self.tool.toggled();
                debug!("active tool now {:?}", self.tool);
                Ok(Outcome::Unchanged)
            }
            Command::ExportDocument => self.export_document().map(Outcome::Exported),
            Command::SaveDesign => self.save_design().map(Outcome::Saved),
            Command::LoadDesign(bytes) => {
                self.load_design(&bytes)?;
                Ok(Outcome::Updated)
            }
        }
    }

    fn grid_mut(&mut self) -> Result<&mut GridState> {
        self.grid.as_mut().ok_or(Error::NoGrid)
    }

    fn apply_tool(&mut self, index: usize) -> Result<()> {
        let color = match self.tool {
            Tool::Paint => self.color,
            Tool::Erase => Color::Unpainted,
        };
        self.grid_mut()?.try_paint(index, color)
    }

    /// Replace the grid with a fresh one. Invalid dimensions keep the old grid.
    pub fn create_grid(&mut self, rows: i64, cols: i64, cell_size: i64) -> Result<Outcome> {
        let config = GridConfig::new(rows, cols, cell_size)?;
        self.grid = Some(GridState::create(config));
        self.gesture = Gesture::Idle;
        info!("created {}x{} grid", config.rows, config.cols);
        Ok(Outcome::Updated)
    }

    /// Table handed to the document encoder for the current grid.
    pub fn document_table(&self) -> Result<DocumentTable> {
        let grid = self.grid.as_ref().ok_or(Error::NoGrid)?;
        Ok(export::build_table(grid, &self.config.document_title))
    }

    pub fn export_document(&self) -> Result<Artifact> {
        let table = self.document_table()?;
        let bytes = self.encoder.encode(&table)?;
        let file_name = self.export_file_name(self.encoder.extension());
        info!("exported {} ({} bytes)", file_name, bytes.len());
        Ok(Artifact {
            file_name,
            mime_type: self.encoder.mime_type().to_string(),
            bytes,
        })
    }

    /// Like [`Editor::export_document`], encoding on `exporter`'s worker.
    pub async fn export_with(&self, exporter: &Exporter) -> Result<Artifact> {
        let table = self.document_table()?;
        let bytes = exporter.export(table).await?;
        let file_name = self.export_file_name(exporter.extension());
        info!("exported {} ({} bytes)", file_name, bytes.len());
        Ok(Artifact {
            file_name,
            mime_type: exporter.mime_type().to_string(),
            bytes,
        })
    }

    /// Configured export name, with its extension swapped to the encoder's.
    pub fn export_file_name(&self, extension: &str) -> String {
        let name = &self.config.export_file_name;
        let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
        format!("{stem}.{extension}")
    }

    pub fn save_design(&self) -> Result<Artifact> {
        let grid = self.grid.as_ref().ok_or(Error::NoGrid)?;
        Ok(Artifact {
            file_name: self.config.design_file_name.clone(),
            mime_type: "application/json".to_string(),
            bytes: design::save_bytes(grid)?,
        })
    }

    /// Replace the grid from design bytes. On error the previous grid stays.
    pub fn load_design(&mut self, bytes: &[u8]) -> Result<()> {
        let grid = design::load_bytes(bytes, self.config.load_mode)?;
        self.grid = Some(grid);
        self.gesture = Gesture::Idle;
        Ok(())
    }

    pub fn load_mode(&self) -> LoadMode {
        self.config.load_mode
    }
}
