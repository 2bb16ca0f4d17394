//! Shared view plumbing: viewport, the `View` trait, and drawing helpers.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Pure mapping from a game state to a framebuffer (no I/O).
pub trait View<G> {
    /// Draw one frame of `game`. Resizes and clears `fb` first.
    fn render_into(&self, game: &G, viewport: Viewport, fb: &mut FrameBuffer);

    /// Draw the end-of-game screen. Defaults to the last frame.
    fn render_summary_into(&self, game: &G, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into(game, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    fn render(&self, game: &G, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }
}

pub(crate) const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
pub(crate) const BANNER: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

/// Box-drawing glyphs for a rectangular border.
pub(crate) struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub(crate) const DOUBLE_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Outline a `w x h` rectangle whose top-left corner is (x, y).
pub(crate) fn draw_border(
    fb: &mut FrameBuffer,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    glyphs: &BorderGlyphs,
    style: CellStyle,
) {
    if w < 2 || h < 2 {
        return;
    }

    for dx in 1..w - 1 {
        fb.set_cell(x + dx, y, glyphs.horizontal, style);
        fb.set_cell(x + dx, y + h - 1, glyphs.horizontal, style);
    }
    for dy in 1..h - 1 {
        fb.set_cell(x, y + dy, glyphs.vertical, style);
        fb.set_cell(x + w - 1, y + dy, glyphs.vertical, style);
    }
    fb.set_cell(x, y, glyphs.top_left, style);
    fb.set_cell(x + w - 1, y, glyphs.top_right, style);
    fb.set_cell(x, y + h - 1, glyphs.bottom_left, style);
    fb.set_cell(x + w - 1, y + h - 1, glyphs.bottom_right, style);
}
