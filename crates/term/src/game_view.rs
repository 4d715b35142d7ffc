//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, EndReason, MAX_GRID_CELLS};

const PLAY_BG: Rgb = Rgb::new(20, 20, 31);
const HEAD_FG: Rgb = Rgb::new(25, 230, 25);
const BODY_FG: Rgb = Rgb::new(25, 153, 25);
const FOOD_FG: Rgb = Rgb::new(230, 25, 25);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the grid frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        // Validated games never exceed the cap; hand-built snapshots might.
        let grid = Grid::new(snap.grid_cells.min(MAX_GRID_CELLS));
        let grid_px_w = grid.cells().saturating_mul(self.cell_w);
        let grid_px_h = grid.cells().saturating_mul(self.cell_h);
        let frame = Frame {
            x: viewport.width.saturating_sub(grid_px_w.saturating_add(2)) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(grid_px_h.saturating_add(2)) / 2,
                AnchorY::Top => 0,
            },
            w: grid_px_w.saturating_add(2),
            h: grid_px_h.saturating_add(2),
        };

        let border = CellStyle::fg_on(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            grid_px_w,
            grid_px_h,
            ' ',
            CellStyle::fg_on(Rgb::new(60, 60, 75), PLAY_BG),
        );
        self.draw_border(fb, frame, border);

        // Empty-cell dots first, then food and snake on top.
        let dot = CellStyle {
            dim: true,
            ..CellStyle::fg_on(Rgb::new(70, 70, 85), PLAY_BG)
        };
        for cell in grid.cells_row_major() {
            self.fill_cell(fb, &grid, frame, cell, '·', dot);
        }

        let faded = snap.ended;
        if let Some(food) = snap.food {
            self.fill_cell(fb, &grid, frame, food, '●', piece_style(FOOD_FG, faded));
        }
        // Body from tail to head so the head always wins.
        for (i, &cell) in snap.snake.iter().enumerate().rev() {
            let (fg, ch) = if i == 0 { (HEAD_FG, '█') } else { (BODY_FG, '▓') };
            self.fill_cell(fb, &grid, frame, cell, ch, piece_style(fg, faded));
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.ended {
            let headline = match snap.end_reason {
                Some(EndReason::BoardFilled) => "BOARD FILLED",
                _ => "GAME OVER",
            };
            self.draw_overlay_text(fb, frame, 0, headline);
            self.draw_overlay_text(fb, frame, 1, "Press R to Restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        if f.w < 2 || f.h < 2 {
            return;
        }

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        f: Frame,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        let Some((col, row)) = grid.to_view(cell) else {
            return;
        };
        let px = f.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w));
        let py = f.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg_on(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle { dim: true, ..value };

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HEADING", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.heading.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROUND", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.wrapping_add(1), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WASD/arrows", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R restart", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q quit", hint);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, line: u16, text: &str) {
        let y = f.y.saturating_add(f.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg_on(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, y, text, style);
    }
}

fn piece_style(fg: Rgb, faded: bool) -> CellStyle {
    CellStyle {
        fg,
        bg: PLAY_BG,
        bold: !faded,
        dim: faded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            snake: vec![Cell::new(1, 0), Cell::new(0, 0), Cell::new(-1, 0)],
            food: Some(Cell::new(3, 0)),
            heading: Direction::East,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn head_and_food_land_on_expected_columns() {
        // 20 cells * 2 wide + border = 42 columns, 22 rows.
        let fb = GameView::default().render(&snapshot(), Viewport::new(42, 22));

        // Row for gz = 0 is view row 9, +1 for the border.
        let y = 10;
        // Column for gx = 1 is view column 11 → 1 + 11*2.
        assert_eq!(fb.get(23, y).unwrap().ch, '█');
        assert_eq!(fb.get(24, y).unwrap().ch, '█');
        assert_eq!(fb.get(21, y).unwrap().ch, '▓');
        assert_eq!(fb.get(27, y).unwrap().ch, '●');
    }

    #[test]
    fn ended_snapshot_shows_overlay() {
        let mut snap = snapshot();
        snap.ended = true;
        snap.end_reason = Some(EndReason::Wall);
        let fb = GameView::default().render(&snap, Viewport::new(42, 22));

        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(all.contains("GAME OVER"));
        assert!(all.contains("Press R to Restart"));
    }
}
