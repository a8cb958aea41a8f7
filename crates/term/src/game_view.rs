//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: status line, framed board, control legend, and a
//! message line (pause / game over) when the terminal has a row to spare.
//! The message is also drawn over the middle of the board.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Controls shown under the board.
pub const LEGEND: &str =
    "←/→ move  ↑ rotate  ↓ soft drop  Space hard drop  p pause  +/- delay  q quit";

/// Shown under the legend while paused.
pub const PAUSED_MESSAGE: &str = "PAUSED";

/// Shown under the legend once the game has ended.
pub const GAME_OVER_MESSAGE: &str = "Game over. Press any key...";

const TOO_SMALL_MESSAGE: &str = "Terminal too small";

const BG: Rgb = Rgb::new(30, 30, 40);

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

/// Which kind of mark occupies a board cell in the composed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Empty,
    Locked,
    Ghost,
    Active(PieceKind),
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Width of the bordered board in terminal columns.
    pub fn frame_width(&self) -> u16 {
        (BOARD_WIDTH as u16) * self.cell_w + 2
    }

    /// Rows needed for the status line, the bordered board and the legend.
    pub fn min_height(&self) -> u16 {
        BOARD_HEIGHT as u16 + 4
    }

    /// Render the snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if viewport.width < self.frame_width() || viewport.height < self.min_height() {
            let style = CellStyle::default().bold();
            fb.put_str_centered(viewport.height / 2, TOO_SMALL_MESSAGE, style);
            return;
        }

        let frame_w = self.frame_width();
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let start_x = (viewport.width - frame_w) / 2;
        let board_y = 1;

        self.draw_status(fb, snap);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, board_y, frame_w, frame_h, border);

        let marks = compose(snap);
        for (y, row) in marks.iter().enumerate() {
            for (x, &mark) in row.iter().enumerate() {
                self.draw_mark(fb, start_x, board_y, x as u16, y as u16, mark);
            }
        }

        let legend_y = board_y + frame_h;
        let text = CellStyle::default().dim();
        fb.put_str_centered(legend_y, LEGEND, text);

        let message = if snap.game_over {
            Some(GAME_OVER_MESSAGE)
        } else if snap.paused {
            Some(PAUSED_MESSAGE)
        } else {
            None
        };
        if let Some(message) = message {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            // Over the middle of the board, and again under the legend when there is room.
            fb.put_str_centered(board_y + frame_h / 2, message, style);
            fb.put_str_centered(legend_y + 1, message, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let line = status_line(snap);
        fb.put_str_centered(0, &line, CellStyle::default().bold());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_mark(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, mark: Mark) {
        let (ch, style) = match mark {
            Mark::Empty => (' ', CellStyle::new(Rgb::new(90, 90, 100), BG)),
            Mark::Locked => ('█', CellStyle::new(Rgb::new(170, 170, 180), BG)),
            Mark::Ghost => ('░', CellStyle::new(Rgb::new(140, 140, 140), BG).dim()),
            Mark::Active(kind) => ('█', CellStyle::new(piece_color(kind), BG).bold()),
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

/// "Score: 1200 | Lines: 7 | Delay: 0.35s"
pub fn status_line(snap: &GameSnapshot) -> String {
    format!(
        "Score: {} | Lines: {} | Delay: {:.2}s",
        snap.score,
        snap.lines,
        snap.delay_ms as f64 / 1000.0
    )
}

/// Board occupancy overlaid with the ghost and then the live piece.
///
/// The ghost only marks empty cells; the live piece wins over both.
fn compose(snap: &GameSnapshot) -> [[Mark; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
    let mut marks = [[Mark::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    for (y, row) in snap.board.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v != 0 {
                marks[y][x] = Mark::Locked;
            }
        }
    }

    let Some(active) = snap.active else {
        return marks;
    };

    if let Some(ghost_y) = snap.ghost_y {
        for (x, y) in active.cells_at(ghost_y) {
            if let Some(slot) = slot_mut(&mut marks, x, y) {
                if *slot == Mark::Empty {
                    *slot = Mark::Ghost;
                }
            }
        }
    }

    for (x, y) in active.cells_at(active.y) {
        if let Some(slot) = slot_mut(&mut marks, x, y) {
            *slot = Mark::Active(active.kind);
        }
    }

    marks
}

fn slot_mut(
    marks: &mut [[Mark; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    x: i8,
    y: i8,
) -> Option<&mut Mark> {
    if x < 0 || y < 0 {
        return None;
    }
    marks.get_mut(y as usize)?.get_mut(x as usize)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
