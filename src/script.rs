//! Editor command scripts
//!
//! A script drives the editor the way a pointer and toolbar would, one
//! command per line:
//!
//! ```text
//! create 8 8 20
//! color #ff0000
//! down 0
//! enter 1
//! up
//! eraser
//! paint 5
//! erase 5
//! save heart.json
//! export heart.docx
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. File steps are
//! returned separately because reading and writing files is the host's job.

use std::path::PathBuf;

use crate::editor::Command;
use crate::error::{Error, Result};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Apply a command to the editor
    Apply(Command),
    /// Save the design, to the given path or the configured name
    Save(Option<PathBuf>),
    /// Export the document, to the given path or the configured name
    Export(Option<PathBuf>),
    /// Read a design file and load it
    Load(PathBuf),
}

/// Parse a single line; `Ok(None)` for blanks and comments.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Step>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let err = |message: String| Error::ScriptError { line: line_no, message };
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let int = |i: usize| -> Result<i64> {
        let raw = args
            .get(i)
            .ok_or_else(|| err(format!("`{verb}` expects {} argument(s)", i + 1)))?;
        raw.parse::<i64>()
            .map_err(|_| err(format!("`{raw}` is not a number")))
    };
    let index = |i: usize| -> Result<usize> {
        let n = int(i)?;
        usize::try_from(n).map_err(|_| err(format!("cell index {n} is negative")))
    };
    let expect_args = |n: usize| -> Result<()> {
        if args.len() > n {
            return Err(err(format!("`{verb}` takes {n} argument(s), got {}", args.len())));
        }
        Ok(())
    };

    let step = match verb {
        "create" => {
            expect_args(3)?;
            Step::Apply(Command::CreateGrid {
                rows: int(0)?,
                cols: int(1)?,
                cell_size: int(2)?,
            })
        }
        "cell-size" => {
            expect_args(1)?;
            Step::Apply(Command::SetCellSize(int(0)?))
        }
        "color" => {
            expect_args(1)?;
            let raw = args
                .first()
                .ok_or_else(|| err("`color` expects a color".to_string()))?;
            Step::Apply(Command::SelectColor(raw.parse()?))
        }
        "paint" => {
            expect_args(1)?;
            Step::Apply(Command::PaintCell(index(0)?))
        }
        "erase" => {
            expect_args(1)?;
            Step::Apply(Command::EraseCell(index(0)?))
        }
        "down" => {
            expect_args(1)?;
            Step::Apply(Command::PointerDown(index(0)?))
        }
        "enter" => {
            expect_args(1)?;
            Step::Apply(Command::PointerEnter(index(0)?))
        }
        "up" => {
            expect_args(0)?;
            Step::Apply(Command::PointerUp)
        }
        "eraser" => {
            expect_args(0)?;
            Step::Apply(Command::ToggleEraser)
        }
        "save" => {
            expect_args(1)?;
            Step::Save(args.first().map(PathBuf::from))
        }
        "export" => {
            expect_args(1)?;
            Step::Export(args.first().map(PathBuf::from))
        }
        "load" => {
            expect_args(1)?;
            let path = args
                .first()
                .ok_or_else(|| err("`load` expects a file".to_string()))?;
            Step::Load(PathBuf::from(path))
        }
        other => return Err(err(format!("unknown command `{other}`"))),
    };
    Ok(Some(step))
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if let Some(step) = parse_line(i + 1, line)? {
            steps.push(step);
        }
    }
    Ok(steps)
}
