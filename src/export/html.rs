//! Dependency-free HTML backend.
//!
//! Produces a standalone page with the title as a heading and one
//! `bgcolor`-shaded `<td>` per grid cell. Word processors open it as a
//! document, so it doubles as the fallback when docx support is disabled.

use std::fmt::Write as _;

use super::{DocumentEncoder, DocumentTable};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct HtmlEncoder {
    /// Width and height of each rendered cell in CSS pixels
    pub cell_px: u32,
}

impl HtmlEncoder {
    pub fn new() -> Self {
        Self { cell_px: 16 }
    }
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl DocumentEncoder for HtmlEncoder {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }

    fn encode(&self, table: &DocumentTable) -> Result<Vec<u8>> {
        let title = escape(&table.title);
        let mut out = String::new();
        let fmt_err = |e: std::fmt::Error| Error::EncodeError(e.to_string());

        writeln!(out, "<!DOCTYPE html>").map_err(fmt_err)?;
        writeln!(out, "<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>")
            .map_err(fmt_err)?;
        writeln!(out, "<body>\n<h1>{title}</h1>").map_err(fmt_err)?;
        writeln!(out, "<table style=\"border-collapse: collapse\">").map_err(fmt_err)?;
        for row in &table.rows {
            out.push_str("<tr>");
            for cell in row {
                write!(
                    out,
                    "<td bgcolor=\"#{fill}\" style=\"width:{px}px;height:{px}px;border:1px solid #ccc\"></td>",
                    fill = cell.fill,
                    px = self.cell_px
                )
                .map_err(fmt_err)?;
            }
            out.push_str("</tr>\n");
        }
        writeln!(out, "</table>\n</body>\n</html>").map_err(fmt_err)?;

        Ok(out.into_bytes())
    }
}
