/// Display list for the grid canvas

use super::layout::layout_cells;
use crate::GridState;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rgba: (u8, u8, u8, u8),
    },
}

/// One solid rect per cell, in index order. Unpainted cells paint white.
pub fn paint_commands(grid: &GridState) -> Vec<PaintCommand> {
    layout_cells(grid)
        .into_iter()
        .map(|cell| {
            let color = grid.colors()[cell.index];
            PaintCommand::SolidRect {
                x: cell.rect.x,
                y: cell.rect.y,
                width: cell.rect.width,
                height: cell.rect.height,
                rgba: color.rgba(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn painted_cells_carry_their_color() {
        let mut g = GridState::new(1, 2, 4).unwrap();
        g.paint(1, Color::Rgb(255, 0, 0));
        let cmds = paint_commands(&g);
        assert_eq!(cmds.len(), 2);
        let PaintCommand::SolidRect { rgba, .. } = cmds[0].clone();
        assert_eq!(rgba, (255, 255, 255, 255));
        let PaintCommand::SolidRect { x, rgba, .. } = cmds[1].clone();
        assert_eq!(x, 4);
        assert_eq!(rgba, (255, 0, 0, 255));
    }
}
