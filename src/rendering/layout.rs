/// Cell placement on the canvas

use crate::GridState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// A cell index coupled with where it sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBox {
    pub index: usize,
    pub rect: Rect,
}

/// Lay cells out row-major, each `cell_size` pixels square, no gaps.
pub fn layout_cells(grid: &GridState) -> Vec<CellBox> {
    let cs = grid.cell_size();
    (0..grid.len())
        .filter_map(|index| {
            let (row, col) = grid.position_of(index)?;
            Some(CellBox {
                index,
                rect: Rect {
                    x: col as u32 * cs,
                    y: row as u32 * cs,
                    width: cs,
                    height: cs,
                },
            })
        })
        .collect()
}

/// Canvas size in pixels as `(width, height)`.
pub fn canvas_size(grid: &GridState) -> (u32, u32) {
    let cs = grid.cell_size();
    (grid.cols() as u32 * cs, grid.rows() as u32 * cs)
}

/// Map a canvas pixel to the cell under it.
pub fn hit_test(grid: &GridState, x: u32, y: u32) -> Option<usize> {
    let cs = grid.cell_size();
    grid.index_of((y / cs) as usize, (x / cs) as usize)
}
