/// Software rasterizer for the paint list

use sha2::{Digest, Sha256};

use super::layout::canvas_size;
use super::paint::{paint_commands, PaintCommand};
use crate::{Error, GridState, Result};

/// Largest frame buffer `rasterize` will allocate (256 MiB).
pub const MAX_FRAME_BYTES: usize = 256 << 20;

/// An RGBA8 image of the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Allocate a transparent frame, refusing buffers over [`MAX_FRAME_BYTES`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .filter(|&n| n <= MAX_FRAME_BYTES)
            .ok_or_else(|| {
                Error::InvalidConfig(format!("{width}x{height} canvas is too large to rasterize"))
            })?;
        Ok(Self {
            width,
            height,
            rgba: vec![0; len],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some((self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]))
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: (u8, u8, u8, u8)) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        let px = [rgba.0, rgba.1, rgba.2, rgba.3];
        for yy in y..y_end {
            let row = yy as usize * self.width as usize;
            for xx in x..x_end {
                let i = (row + xx as usize) * 4;
                self.rgba[i..i + 4].copy_from_slice(&px);
            }
        }
    }

    /// Hex SHA-256 of the pixel data, for golden comparisons.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.rgba);
        hex::encode(hasher.finalize())
    }
}

pub fn rasterize(grid: &GridState) -> Result<Frame> {
    let (width, height) = canvas_size(grid);
    let mut frame = Frame::new(width, height)?;
    for cmd in paint_commands(grid) {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                frame.fill_rect(x, y, width, height, rgba)
            }
        }
    }
    Ok(frame)
}
