//! GameView: paints a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as GridCell, EMPTY};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Lays out the board, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        // Boards larger than the terminal are clipped: the frame saturates
        // and only cells that can land on screen are visited.
        let frame_w = frame_span(snap.columns, self.cell_w);
        let frame_h = frame_span(snap.rows, self.cell_h);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;
        let visible_cols = snap.columns.min(usize::from(viewport.width / self.cell_w));
        let visible_rows = snap.rows.min(usize::from(viewport.height / self.cell_h));

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        // Locked cells, with a faint dot on empty ones.
        let dot = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        for row in 0..visible_rows {
            for col in 0..visible_cols {
                let value = snap.cell(row, col);
                let (ch, style) = if value == EMPTY {
                    ('·', dot)
                } else {
                    ('█', block_style(value))
                };
                self.fill_cell(fb, origin_x, origin_y, row, col, ch, style);
            }
        }

        if let Some(active) = &snap.active {
            for (row, col, value) in active.cells() {
                let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
                    continue;
                };
                if row >= visible_rows || col >= visible_cols {
                    continue;
                }
                self.fill_cell(fb, origin_x, origin_y, row, col, '█', block_style(value).bold());
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, origin_y);

        if snap.game_over {
            let mid = origin_y.saturating_add(frame_h.min(viewport.height) / 2);
            let overlay_w = frame_w.min(viewport.width);
            self.draw_centered(fb, origin_x, overlay_w, mid, "GAME OVER");
            self.draw_centered(fb, origin_x, overlay_w, mid.saturating_add(1), "r restart  q quit");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = usize::from(origin_x) + 1 + col * usize::from(self.cell_w);
        let py = usize::from(origin_y) + 1 + row * usize::from(self.cell_h);
        let (Ok(px), Ok(py)) = (u16::try_from(px), u16::try_from(py)) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        let help = CellStyle::new(Rgb::new(120, 120, 130), PANEL_BG);
        for line in ["←/→ move", "↓ drop", "↑ rotate", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
    }
}

/// Terminal cells spanned by `cells` board cells plus the two border
/// columns (or rows), saturating at `u16::MAX`.
fn frame_span(cells: usize, cell_size: u16) -> u16 {
    let span = cells
        .saturating_mul(usize::from(cell_size))
        .saturating_add(2);
    u16::try_from(span).unwrap_or(u16::MAX)
}

/// Colour for a grid colour id
pub fn block_color(value: GridCell) -> Rgb {
    match value {
        1 => Rgb::new(200, 120, 220),
        2 => Rgb::new(100, 220, 120),
        3 => Rgb::new(220, 80, 80),
        4 => Rgb::new(240, 220, 80),
        5 => Rgb::new(80, 120, 220),
        6 => Rgb::new(255, 165, 0),
        7 => Rgb::new(80, 220, 220),
        _ => Rgb::new(160, 160, 160),
    }
}

fn block_style(value: GridCell) -> CellStyle {
    CellStyle::new(block_color(value), BOARD_BG)
}
