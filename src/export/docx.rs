//! Word document backend built on `docx-rs`.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Shading, Table, TableCell, TableRow};
use log::debug;

use super::{DocumentEncoder, DocumentTable};
use crate::{Error, Result};

/// Title run size in half-points (16pt)
const TITLE_SIZE: usize = 32;

/// Encodes the table as a title paragraph followed by a shaded table.
#[derive(Debug, Clone, Default)]
pub struct DocxEncoder;

impl DocxEncoder {
    pub fn new() -> Self {
        DocxEncoder
    }

    /// Assemble the document tree without packing it.
    pub fn build(&self, table: &DocumentTable) -> Docx {
        let title = Paragraph::new().add_run(
            Run::new()
                .add_text(table.title.as_str())
                .bold()
                .size(TITLE_SIZE),
        );

        let rows = table
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|cell| {
                        TableCell::new()
                            .add_paragraph(Paragraph::new())
                            .shading(Shading::new().fill(cell.fill.as_str()))
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        Docx::new().add_paragraph(title).add_table(Table::new(rows))
    }
}

impl DocumentEncoder for DocxEncoder {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn encode(&self, table: &DocumentTable) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.build(table)
            .build()
            .pack(&mut buf)
            .map_err(|e| Error::EncodeError(e.to_string()))?;
        let bytes = buf.into_inner();
        debug!(
            "packed {}x{} table into {} docx bytes",
            table.rows.len(),
            table.column_count(),
            bytes.len()
        );
        Ok(bytes)
    }
}
