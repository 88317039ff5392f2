//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceColor};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Where the playfield frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = snap.cols as u16 * self.cell_w;
        let board_h = snap.rows as u16 * self.cell_h;
        let frame = Frame {
            w: board_w + 2,
            h: board_h + 2,
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_h + 2) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG));
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Locked cells, with a faint dot on empty ones.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for row in 0..snap.rows as usize {
            for col in 0..snap.cols as usize {
                match snap.cell(col, row) {
                    Some(color) => self.draw_block(fb, frame, col as i16, row as i16, color),
                    None => self.fill_board_cell(fb, frame, col as i16, row as i16, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost first so the piece covers it where they overlap.
            if let Some(ghost_row) = snap.ghost_row {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
                for (col, row) in active.cells_at(ghost_row) {
                    self.fill_board_cell(fb, frame, col, row, '░', ghost);
                }
            }
            for (col, row) in active.cells_at(active.row) {
                self.draw_block(fb, frame, col, row, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Idle => self.draw_overlay(fb, frame, &["PRESS ENTER", "TO START"]),
            Phase::GameOver => {
                let mut score = [0u8; 16];
                let score = format_score(snap.score, &mut score);
                self.draw_overlay(fb, frame, &["GAME OVER", score, "ENTER: RESTART"]);
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, y + h - 1, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(x + w - 1, y + 1, 1, h - 2, '│', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, col: i16, row: i16, color: PieceColor) {
        let style = CellStyle::new(Rgb::of_piece(color), PLAY_BG).bold();
        self.fill_board_cell(fb, frame, col, row, '█', style);
    }

    /// Fill one board cell; cells outside the board (e.g. above the top) are skipped.
    fn fill_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, col: i16, row: i16, ch: char, style: CellStyle) {
        let cols = (frame.w - 2) / self.cell_w;
        let rows = (frame.h - 2) / self.cell_h;
        if col < 0 || row < 0 || col as u16 >= cols || row as u16 >= rows {
            return;
        }
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        let n = fb.put_u32(panel_x, y + 1, snap.drop_interval_ms, value);
        fb.put_str(panel_x + n, y + 1, "ms", value.dim());
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        match snap.next {
            Some(next) => {
                for (r, c) in next.shape.cells() {
                    let px = panel_x + c as u16 * self.cell_w;
                    let py = y + r as u16;
                    let style = CellStyle::new(Rgb::of_piece(next.color), PANEL_BG).bold();
                    fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

/// "SCORE <n>" into a stack buffer.
fn format_score(score: u32, buf: &mut [u8; 16]) -> &str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    let _ = write!(cursor, "SCORE {score}");
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("SCORE")
}
