//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against snapshots of the frame.

use crate::core::{shapes, Session};
use crate::term::fb::{FrameBuffer, Style};
use crate::types::{Phase, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

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

const WELL_BG: Rgb = Rgb::new(20, 20, 30);

/// Renders the playfield, the side panel, and phase overlays.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates glyph aspect).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let well_w = (BOARD_WIDTH as u16) * self.cell_w;
        let well_h = BOARD_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Settled cells, then the falling piece on top.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match session.board().get(x, y).flatten() {
                    Some(kind) => self.draw_cell(&mut fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty(&mut fb, start_x, start_y, x, y),
                }
            }
        }
        if let Some(piece) = session.current() {
            for (dx, dy) in piece.shape.filled_cells() {
                self.draw_cell(&mut fb, start_x, start_y, piece.x + dx, piece.y + dy, piece.kind);
            }
        }

        self.draw_side_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        match session.phase() {
            Phase::NotStarted => {
                self.overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            Phase::Paused => self.overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Phase::GameOver => {
                self.overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::fg(Rgb::new(200, 200, 200));
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + y as u16;
        Some((px, py))
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, kind: PieceKind) {
        if let Some((px, py)) = self.cell_origin(start_x, start_y, x, y) {
            let style = Style::fg(shapes::color(kind)).on(WELL_BG).bold();
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8) {
        if let Some((px, py)) = self.cell_origin(start_x, start_y, x, y) {
            let style = Style::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
            fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
            fb.put_char(px, py, '·', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = Style::fg(Rgb::new(220, 220, 220)).bold();
        let value = Style::fg(Rgb::new(200, 200, 200));

        let mut y = start_y + 1;
        for (name, amount) in [
            ("SCORE", session.score()),
            ("LEVEL", session.level()),
            ("LINES", session.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &amount.to_string(), value);
            y += 3;
        }

        // Next piece preview as a mini pattern.
        fb.put_str(panel_x, y, "NEXT", label);
        let next = session.next();
        let shape = shapes::base_shape(next);
        let style = Style::fg(shapes::color(next)).bold();
        for (dx, dy) in shape.filled_cells() {
            let px = panel_x + (dx as u16) * self.cell_w;
            let py = y + 1 + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y + h / 2;
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        let style = Style::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(tx, mid_y, text, style);
    }
}
