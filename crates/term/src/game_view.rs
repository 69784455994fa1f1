//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, GameStatus};

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

const PANEL_W: u16 = 16;
const PANEL_GAP: u16 = 2;

const BOARD_BG: Style = Style::new(Rgb::new(70, 70, 80), Rgb::new(20, 24, 20));
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0));
const VALUE: Style = Style::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
pub const SNAKE_BODY: Style = Style::new(Rgb::new(60, 180, 75), Rgb::new(20, 24, 20));
pub const SNAKE_HEAD: Style = Style::new(Rgb::new(170, 255, 120), Rgb::new(20, 24, 20)).bold();
pub const FRUIT: Style = Style::new(Rgb::new(230, 60, 60), Rgb::new(20, 24, 20)).bold();
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(140, 20, 20)).bold();

pub const SNAKE_GLYPH: char = '█';
pub const FRUIT_GLYPH: char = '●';

/// Board renderer with a stats panel on the right.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Preferred board cell width in terminal columns.
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

/// Where the board landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub board_size: u16,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        frame_len(self.board_size, self.cell_w)
    }

    pub fn frame_h(&self) -> u16 {
        frame_len(self.board_size, self.cell_h)
    }

    /// Screen position of a board cell, or `None` for off-board cells.
    pub fn cell_origin(&self, cell: Cell) -> Option<(u16, u16)> {
        if !cell.in_bounds(self.board_size) {
            return None;
        }
        let x = (cell.col as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(self.frame_x + 1);
        let y = (cell.row as u16)
            .saturating_mul(self.cell_h)
            .saturating_add(self.frame_y + 1);
        Some((x, y))
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

    /// Smallest viewport `(width, height)` that shows a `board_size` board
    /// with one-column cells and the stats panel.
    pub fn min_viewport(board_size: u16) -> (u16, u16) {
        (
            frame_len(board_size, 1).saturating_add(PANEL_GAP + PANEL_W),
            frame_len(board_size, 1),
        )
    }

    /// Whether a `board_size` board can be drawn in `viewport` without clipping.
    pub fn fits(board_size: u16, viewport: Viewport) -> bool {
        let (w, h) = Self::min_viewport(board_size);
        viewport.width >= w && viewport.height >= h
    }

    /// Pick cell sizes and a position for a board of `board_size` cells.
    ///
    /// Falls back to one column (or row) per cell when the preferred size does
    /// not fit.
    pub fn layout(&self, board_size: u16, viewport: Viewport) -> BoardLayout {
        let fits_w = |cell_w: u16| {
            frame_len(board_size, cell_w).saturating_add(PANEL_GAP + PANEL_W) <= viewport.width
        };
        let cell_w = if fits_w(self.cell_w) { self.cell_w } else { 1 };
        let cell_h = if frame_len(board_size, self.cell_h) <= viewport.height {
            self.cell_h
        } else {
            1
        };

        let frame_w = frame_len(board_size, cell_w);
        let frame_h = frame_len(board_size, cell_h);
        let total_w = frame_w.saturating_add(PANEL_GAP + PANEL_W);
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y,
            cell_w,
            cell_h,
            board_size,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// A viewport too small for the board gets a size notice instead of a
    /// clipped board.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        if !Self::fits(snap.board_size, viewport) {
            draw_too_small(fb, viewport, Self::min_viewport(snap.board_size));
            return;
        }

        let layout = self.layout(snap.board_size, viewport);
        let inner_w = layout.frame_w() - 2;
        let inner_h = layout.frame_h() - 2;

        fb.fill_rect(layout.frame_x + 1, layout.frame_y + 1, inner_w, inner_h, ' ', BOARD_BG);
        draw_border(fb, layout.frame_x, layout.frame_y, layout.frame_w(), layout.frame_h());

        self.paint_cell(fb, &layout, snap.fruit, FRUIT_GLYPH, FRUIT);
        // Tail first so the head wins if cells ever coincide.
        for cell in snap.snake_cells.iter().skip(1).rev() {
            self.paint_cell(fb, &layout, *cell, SNAKE_GLYPH, SNAKE_BODY);
        }
        if !snap.snake_cells.is_empty() {
            self.paint_cell(fb, &layout, snap.head, SNAKE_GLYPH, SNAKE_HEAD);
        }

        self.draw_panel(fb, &layout, snap);

        match snap.status {
            GameStatus::GameOver => {
                draw_banner(fb, &layout, &["GAME OVER", "r restart  q quit"]);
            }
            GameStatus::Idle => draw_banner(fb, &layout, &["READY"]),
            GameStatus::Running => {}
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, cell: Cell, ch: char, style: Style) {
        if let Some((x, y)) = layout.cell_origin(cell) {
            fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ch, style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let x = layout.frame_x + layout.frame_w() + PANEL_GAP;
        let y = layout.frame_y;

        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x, y + 1, snap.score, VALUE);

        fb.put_str(x, y + 3, "LENGTH", LABEL);
        fb.put_u32(x, y + 4, snap.snake_len() as u32, VALUE);

        fb.put_str(x, y + 6, "SPEED", LABEL);
        fb.put_u32(x, y + 7, snap.interval_ms, VALUE);
        let width = snap.interval_ms.checked_ilog10().unwrap_or(0) as u16 + 1;
        fb.put_str(x + width, y + 7, "ms", LABEL);

        fb.put_str(x, y + 9, "STATUS", LABEL);
        fb.put_str(x, y + 10, snap.status.as_str(), VALUE);
    }
}

fn frame_len(board_size: u16, cell: u16) -> u16 {
    board_size.saturating_mul(cell).saturating_add(2)
}

/// "terminal too small" / "need WxH" / "have WxH", centred in the viewport.
fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport, need: (u16, u16)) {
    let top = (viewport.height / 2).saturating_sub(1);
    let title = "terminal too small";
    let title_x = viewport.width.saturating_sub(title.len() as u16) / 2;
    fb.put_str(title_x, top, title, BANNER);

    for (i, (label, (w, h))) in [("need ", need), ("have ", (viewport.width, viewport.height))]
        .into_iter()
        .enumerate()
    {
        let y = top + 1 + i as u16;
        let len = label.len() as u16 + digits(w) + 1 + digits(h);
        let mut x = viewport.width.saturating_sub(len) / 2;
        fb.put_str(x, y, label, LABEL);
        x = x.saturating_add(label.len() as u16);
        fb.put_u32(x, y, w as u32, VALUE);
        x = x.saturating_add(digits(w));
        fb.put_char(x, y, 'x', LABEL);
        fb.put_u32(x.saturating_add(1), y, h as u32, VALUE);
    }
}

fn digits(n: u16) -> u16 {
    n.checked_ilog10().unwrap_or(0) as u16 + 1
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

/// Centered lines over the board; clipped to the frame width.
fn draw_banner(fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[&str]) {
    let inner_w = layout.frame_w().saturating_sub(2);
    let mid_y = layout.frame_y + layout.frame_h() / 2;
    let top = mid_y.saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let text: String = line.chars().take(inner_w as usize).collect();
        let len = text.chars().count() as u16;
        let x = layout.frame_x + 1 + (inner_w - len) / 2;
        fb.put_str(x, top + i as u16, &text, BANNER);
    }
}
