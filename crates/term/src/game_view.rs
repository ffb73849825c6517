//! GameView: maps a composited [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The screen already holds every glyph of the frame; the view only centres
//! it inside a border and picks a colour for each cell from what the game
//! state says lives there.

use crate::core::{Cell, GameState, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GAME_OVER_TEXT, GRID_HEIGHT, GRID_WIDTH, GROUND_POSITION};

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

const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const SCENE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const HUD: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
const EGG: CellStyle = CellStyle::fg(Rgb::new(255, 250, 235)).bold();
const TRAY: CellStyle = CellStyle::fg(Rgb::new(190, 140, 90));
const GROUND: CellStyle = CellStyle::fg(Rgb::new(100, 200, 110));
const BANNER: CellStyle = CellStyle::fg(Rgb::new(230, 70, 70)).bold();
const PROMPT: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

/// A lightweight terminal renderer for the egg game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the bordered frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render `screen` into an existing framebuffer.
    ///
    /// `prompt`, when given, is centred on the line below the frame.
    pub fn render_into(
        &self,
        state: &GameState,
        screen: &Screen,
        prompt: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let ch = screen.get(x, y).unwrap_or(' ');
                let style = cell_style(state, x, y, ch);
                fb.put_char(start_x + 1 + x as u16, start_y + 1 + y as u16, ch, style);
            }
        }

        if let Some(text) = prompt {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, start_y + frame_h, text, PROMPT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        screen: &Screen,
        prompt: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, screen, prompt, viewport, &mut fb);
        fb
    }
}

fn frame_size() -> (u16, u16) {
    (GRID_WIDTH as u16 + 2, GRID_HEIGHT as u16 + 2)
}

fn cell_style(state: &GameState, x: usize, y: usize, ch: char) -> CellStyle {
    if ch == ' ' {
        return SCENE;
    }
    if y == 0 {
        return HUD;
    }
    if state.game_over() && y == GRID_HEIGHT / 2 {
        let start = GRID_WIDTH / 2 - GAME_OVER_TEXT.chars().count() / 2;
        if (start..start + GAME_OVER_TEXT.chars().count()).contains(&x) {
            return BANNER;
        }
    }
    match state.grid().get(x as i16, y as i16) {
        Some(Cell::Egg(_)) => EGG,
        Some(Cell::Tray) => TRAY,
        _ if y >= GROUND_POSITION.1 => GROUND,
        _ => SCENE,
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}
