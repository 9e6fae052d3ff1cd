//! Error types for the grid editor

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, exporting or loading a grid
#[derive(Error, Debug)]
pub enum Error {
    /// Non-positive rows, columns or cell size
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Design source is not valid JSON
    #[error("Failed to parse design: {0}")]
    ParseError(String),

    /// Design is valid JSON but structurally wrong
    #[error("Invalid design file: {0}")]
    SchemaError(String),

    /// A host surface addressed a cell the grid does not have
    #[error("Cell index {index} out of range for a grid of {len} cells")]
    CellOutOfRange { index: usize, len: usize },

    /// A command needed a grid but none has been created yet
    #[error("No grid has been created")]
    NoGrid,

    /// Unrecognised color text
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The document encoder failed
    #[error("Document encoding failed: {0}")]
    EncodeError(String),

    /// A command script line could not be understood
    #[error("Script line {line}: {message}")]
    ScriptError { line: usize, message: String },

    /// Host I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // Data errors mean the JSON parsed but did not fit the design shape.
        if err.is_data() {
            Error::SchemaError(err.to_string())
        } else {
            Error::ParseError(err.to_string())
        }
    }
}
