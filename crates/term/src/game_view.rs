//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and the same layout
//! code answers mouse hit-tests so clicks always land on the tile drawn there.

use crate::core::{GameSnapshot, MatchSet};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameOverReason, Phase, Pos};

/// Gap between the board frame and the side panel.
const PANEL_GAP: u16 = 2;
/// Width reserved for the side panel.
const PANEL_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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
pub enum FlashKind {
    /// Tiles cleared by the last swap
    Matched,
    /// The two tiles of a swap that formed no word
    Rejected,
}

/// Short-lived highlight over a set of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub cells: MatchSet,
}

impl Flash {
    pub fn matched(cells: MatchSet) -> Self {
        Self {
            kind: FlashKind::Matched,
            cells,
        }
    }

    pub fn rejected(p: Pos, q: Pos) -> Self {
        Self {
            kind: FlashKind::Rejected,
            cells: [p, q].into_iter().collect(),
        }
    }
}

/// Frontend-only state drawn on top of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub cursor: Option<Pos>,
    pub flash: Option<Flash>,
}

/// Screen placement of the board frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardLayout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl BoardLayout {
    fn inner_x(&self) -> u16 {
        self.x + 1
    }

    fn inner_y(&self) -> u16 {
        self.y + 1
    }
}

/// A lightweight terminal renderer for the word grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves room for a bracket cursor on each side of the letter.
        Self {
            cell_w: 3,
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

    fn layout(&self, size: usize, viewport: Viewport) -> BoardLayout {
        let size = size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;

        let with_panel = frame_w + PANEL_GAP + PANEL_W;
        let x = if viewport.width >= with_panel {
            (viewport.width - with_panel) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let y = viewport.height.saturating_sub(frame_h) / 2;

        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// The board tile under terminal column `x`, row `y`, if any.
    pub fn cell_at(&self, size: usize, viewport: Viewport, x: u16, y: u16) -> Option<Pos> {
        let layout = self.layout(size, viewport);
        let dx = x.checked_sub(layout.inner_x())? / self.cell_w;
        let dy = y.checked_sub(layout.inner_y())? / self.cell_h;
        let pos = Pos::new(dy as usize, dx as usize);
        pos.in_bounds(size).then_some(pos)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        view: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let size = snap.size();
        let layout = self.layout(size, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            layout.inner_x(),
            layout.inner_y(),
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, layout, border);

        for row in 0..size {
            for col in 0..size {
                self.draw_tile(fb, layout, snap, view, Pos::new(row, col));
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if let Phase::GameOver(reason) = snap.phase {
            self.draw_game_over(fb, layout, reason, snap.session.score());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        view: &ViewState,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, view, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;

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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        snap: &GameSnapshot,
        view: &ViewState,
        pos: Pos,
    ) {
        let style = tile_style(snap, view, pos);
        let px = layout.inner_x() + pos.col as u16 * self.cell_w;
        let py = layout.inner_y() + pos.row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let ch = snap.grid.letter(pos).map_or(' ', |l| l.as_char());
        let mid_y = py + self.cell_h / 2;
        fb.put_char(px + self.cell_w / 2, mid_y, ch, style);

        if view.cursor == Some(pos) && self.cell_w >= 3 {
            let bracket = CellStyle {
                fg: Rgb::new(255, 255, 255),
                ..style
            };
            fb.put_char(px, mid_y, '[', bracket);
            fb.put_char(px + self.cell_w - 1, mid_y, ']', bracket);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x + layout.frame_w + PANEL_GAP;
        if panel_x + PANEL_W > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let warn = CellStyle::new(Rgb::new(240, 90, 80), PANEL_BG).bold();
        let session = &snap.session;

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y += 3;

        let secs = session.time_remaining_secs();
        fb.put_str(panel_x, y, "TIME", label);
        let time_style = if secs <= 10 { warn } else { value };
        let end = fb.put_u32(panel_x, y + 1, secs, time_style);
        fb.put_char(end, y + 1, 's', value);
        y += 3;

        fb.put_str(panel_x, y, "HINTS", label);
        let end = fb.put_u32(panel_x, y + 1, session.hints_remaining(), value);
        let end = fb.put_str(end, y + 1, "/", value);
        fb.put_u32(end, y + 1, session.max_hints(), value);
        if session.hint_live() {
            fb.put_str(panel_x + 6, y + 1, "LIVE", warn);
        }
        y += 3;

        fb.put_str(panel_x, y, "WORDS", label);
        fb.put_u32(panel_x, y + 1, snap.possible_moves as u32, value);
        y += 3;

        let help = value.dim();
        for line in ["arrows move", "space select", "? hint", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        reason: GameOverReason,
        score: u32,
    ) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let body = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG);
        let top = (layout.y + layout.frame_h / 2).saturating_sub(2);
        let (x, w) = (layout.x, layout.frame_w);

        fb.put_str_centered(x, top, w, "GAME OVER", title);
        fb.put_str_centered(x, top + 1, w, reason.as_str(), body);

        // "SCORE " plus up to 10 digits, centred as one unit.
        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let score_x = x + w.saturating_sub(6 + digits) / 2;
        let end = fb.put_str(score_x, top + 2, "SCORE ", title);
        fb.put_u32(end, top + 2, score, title);

        fb.put_str_centered(x, top + 3, w, "r: play again  q: quit", body);
    }
}

/// Flash beats selection, selection beats hint.
fn tile_style(snap: &GameSnapshot, view: &ViewState, pos: Pos) -> CellStyle {
    let tile = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(45, 45, 60)).bold();
    let dark = Rgb::new(10, 10, 10);

    if let Some(flash) = view.flash.as_ref().filter(|f| f.cells.contains(&pos)) {
        return match flash.kind {
            FlashKind::Matched => CellStyle::new(dark, Rgb::new(60, 170, 80)).bold(),
            FlashKind::Rejected => {
                CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(190, 60, 60)).bold()
            }
        };
    }
    if snap.selected() == Some(pos) {
        return CellStyle::new(dark, Rgb::new(220, 180, 50)).bold();
    }
    if snap.hint_cell() == Some(pos) {
        return CellStyle::new(dark, Rgb::new(60, 150, 190)).bold();
    }
    if !snap.playable() {
        return tile.dim();
    }
    tile
}
