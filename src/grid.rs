//! Grid state model
//!
//! `GridState` is the single source of truth for what the canvas shows:
//! dimensions plus a row-major color per cell (`index = row * cols + col`).
//! Rendering surfaces project from it and never hold color state themselves.

use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 22;

/// Validated grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u32,
}

impl GridConfig {
    /// Validate dimensions as entered by a user.
    ///
    /// Inputs are taken signed so that negative values reach validation
    /// instead of wrapping. The cell count is capped at [`MAX_CELLS`] and the
    /// canvas (`cols * cell_size` by `rows * cell_size`) must fit in `u32`.
    pub fn new(rows: i64, cols: i64, cell_size: i64) -> Result<Self> {
        if rows <= 0 || cols <= 0 || cell_size <= 0 {
            return Err(Error::InvalidConfig(
                "Rows, columns, and cell size must be positive numbers".to_string(),
            ));
        }
        let too_large = |what: &str| Error::InvalidConfig(format!("{what} is too large"));
        let rows = usize::try_from(rows).map_err(|_| too_large("rows"))?;
        let cols = usize::try_from(cols).map_err(|_| too_large("cols"))?;
        let cell_size = u32::try_from(cell_size).map_err(|_| too_large("cell size"))?;
        let cells = rows.checked_mul(cols).ok_or_else(|| too_large("rows * cols"))?;
        if cells > MAX_CELLS {
            return Err(Error::InvalidConfig(format!(
                "{rows}x{cols} grid has more than {MAX_CELLS} cells"
            )));
        }
        for (count, what) in [(cols, "canvas width"), (rows, "canvas height")] {
            u32::try_from(count)
                .ok()
                .and_then(|n| n.checked_mul(cell_size))
                .ok_or_else(|| too_large(what))?;
        }
        Ok(Self { rows, cols, cell_size })
    }

    /// Number of cells described by this configuration.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
}

/// The authoritative grid: dimensions and one color per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cell_size: u32,
    colors: Vec<Color>,
}

impl GridState {
    /// Create an all-unpainted grid.
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Result<Self> {
        let config = GridConfig::new(rows as i64, cols as i64, cell_size as i64)?;
        Ok(Self::create(config))
    }

    /// Create an all-unpainted grid from already validated dimensions.
    pub fn create(config: GridConfig) -> Self {
        debug!(
            "creating {}x{} grid (cell size {}px)",
            config.rows, config.cols, config.cell_size
        );
        Self {
            rows: config.rows,
            cols: config.cols,
            cell_size: config.cell_size,
            colors: vec![Color::Unpainted; config.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.cell_size,
        }
    }

    /// Row-major cell colors; always `rows * cols` long.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.colors.len()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Index of the cell at `(row, col)`, if inside the grid.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// `(row, col)` of a cell index, if inside the grid.
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        self.contains(index).then(|| (index / self.cols, index % self.cols))
    }

    /// Set the color of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell of this grid. Indices come from the
    /// grid's own cells; use [`GridState::try_paint`] for translated input.
    pub fn paint(&mut self, index: usize, color: Color) {
        self.colors[index] = color;
    }

    /// Reset one cell to unpainted. Same bounds contract as [`GridState::paint`].
    pub fn erase(&mut self, index: usize) {
        self.paint(index, Color::Unpainted);
    }

    /// Checked variant of [`GridState::paint`].
    pub fn try_paint(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.len();
        let cell = self
            .colors
            .get_mut(index)
            .ok_or(Error::CellOutOfRange { index, len })?;
        *cell = color;
        Ok(())
    }

    /// Iterate rows as slices of `cols` colors, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.colors.chunks(self.cols)
    }

    pub fn painted_count(&self) -> usize {
        self.colors.iter().filter(|c| !c.is_unpainted()).count()
    }

    /// Replace every color at once.
    ///
    /// The sequence must be exactly `rows * cols` long.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<()> {
        if colors.len() != self.len() {
            return Err(Error::SchemaError(format!(
                "expected {} colors for a {}x{} grid, found {}",
                self.len(),
                self.rows,
                self.cols,
                colors.len()
            )));
        }
        self.colors = colors;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_unpainted() {
        for (r, c, s) in [(1, 1, 1), (2, 3, 10), (16, 9, 25)] {
            let g = GridState::new(r, c, s).unwrap();
            assert_eq!(g.len(), r * c);
            assert!(g.colors().iter().all(Color::is_unpainted));
            assert_eq!(g.cell_size(), s);
        }
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (r, c, s) in [(0, 4, 4), (4, 0, 4), (4, 4, 0), (-1, 4, 4), (4, -2, 4), (4, 4, -20)] {
            assert!(
                matches!(GridConfig::new(r, c, s), Err(Error::InvalidConfig(_))),
                "accepted {r}x{c}@{s}"
            );
        }
        assert!(matches!(GridState::new(0, 1, 1), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        for (r, c, s) in [
            (i64::MAX, i64::MAX, 1),
            (200_000, 200_000, 1),
            (1, MAX_CELLS as i64 + 1, 1),
            (1, 3, 4_000_000_000),
            (3, 1, 4_000_000_000),
            (1, 1, u32::MAX as i64 + 1),
        ] {
            assert!(
                matches!(GridConfig::new(r, c, s), Err(Error::InvalidConfig(_))),
                "accepted {r}x{c}@{s}"
            );
        }
    }

    #[test]
    fn limits_themselves_are_accepted() {
        assert!(GridConfig::new(1, MAX_CELLS as i64, 1).is_ok());
        assert!(GridConfig::new(1, 1, u32::MAX as i64).is_ok());
        assert!(GridConfig::new(2, 2, (u32::MAX / 2) as i64).is_ok());
    }

    #[test]
    fn paint_then_erase_restores_sentinel() {
        let mut g = GridState::new(2, 2, 10).unwrap();
        for i in 0..g.len() {
            g.paint(i, Color::Rgb(10, 20, 30));
            assert_eq!(g.get(i), Some(Color::Rgb(10, 20, 30)));
            g.erase(i);
            assert_eq!(g.get(i), Some(Color::Unpainted));
            g.erase(i);
            assert_eq!(g.get(i), Some(Color::Unpainted));
        }
    }

    #[test]
    #[should_panic]
    fn paint_out_of_range_panics() {
        let mut g = GridState::new(2, 2, 10).unwrap();
        g.paint(4, Color::BLACK);
    }

    #[test]
    fn try_paint_reports_out_of_range() {
        let mut g = GridState::new(2, 2, 10).unwrap();
        let err = g.try_paint(7, Color::BLACK).unwrap_err();
        assert!(matches!(err, Error::CellOutOfRange { index: 7, len: 4 }));
        assert_eq!(g.painted_count(), 0);
    }

    #[test]
    fn index_and_position_are_row_major() {
        let g = GridState::new(3, 4, 5).unwrap();
        assert_eq!(g.index_of(0, 0), Some(0));
        assert_eq!(g.index_of(1, 2), Some(6));
        assert_eq!(g.index_of(2, 3), Some(11));
        assert_eq!(g.index_of(3, 0), None);
        assert_eq!(g.index_of(0, 4), None);
        assert_eq!(g.position_of(6), Some((1, 2)));
        assert_eq!(g.position_of(12), None);
    }

    #[test]
    fn rows_group_by_cols() {
        let mut g = GridState::new(2, 3, 5).unwrap();
        g.paint(4, Color::BLACK);
        let rows: Vec<&[Color]> = g.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1][1], Color::BLACK);
    }

    #[test]
    fn set_colors_checks_length() {
        let mut g = GridState::new(1, 2, 5).unwrap();
        assert!(matches!(
            g.set_colors(vec![Color::BLACK]),
            Err(Error::SchemaError(_))
        ));
        assert_eq!(g.painted_count(), 0);
        g.set_colors(vec![Color::BLACK, Color::Unpainted]).unwrap();
        assert_eq!(g.painted_count(), 1);
    }
}
