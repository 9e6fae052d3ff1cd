//! Cell color values
//!
//! A cell is either unpainted (the `"white"` sentinel) or carries an RGB
//! color. The text form matches what a browser color picker produces:
//! `#rrggbb` in lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Text form of the unpainted sentinel.
pub const UNPAINTED_NAME: &str = "white";

/// Document fill used for unpainted cells.
pub const UNPAINTED_FILL: &str = "FFFFFF";

/// The color of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Empty cell
    #[default]
    Unpainted,
    /// Painted cell
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);

    /// Whether this is the unpainted sentinel.
    pub fn is_unpainted(&self) -> bool {
        matches!(self, Color::Unpainted)
    }

    /// Six uppercase hex digits for a table cell fill.
    ///
    /// Unpainted cells fill white.
    pub fn fill(&self) -> String {
        match self {
            Color::Unpainted => UNPAINTED_FILL.to_string(),
            Color::Rgb(r, g, b) => format!("{:02X}{:02X}{:02X}", r, g, b),
        }
    }

    /// RGBA bytes as displayed on the canvas.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        match *self {
            Color::Unpainted => (255, 255, 255, 255),
            Color::Rgb(r, g, b) => (r, g, b, 255),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Unpainted => f.write_str(UNPAINTED_NAME),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `white`, `#rrggbb` and `#rgb` (hex digits in either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNPAINTED_NAME) {
            return Ok(Color::Unpainted);
        }

        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #rgb expands each digit: #f0a == #ff00aa
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::Rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
