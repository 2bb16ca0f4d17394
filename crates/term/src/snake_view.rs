//! SnakeView: maps `core::SnakeState` into a terminal framebuffer.
//!
//! The playable frame is centred on the terminal with a double-line border
//! drawn just outside it. Snake and apple cells are frame-relative.

use crate::core::{Entity, EntityKind, SnakeState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::view::{draw_border, View, Viewport, BANNER, DOUBLE_BORDER, TEXT};

#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeView;

impl SnakeView {
    /// Terminal (x, y) of the frame's cell (0, 0).
    pub fn frame_origin(state: &SnakeState, viewport: Viewport) -> (i32, i32) {
        let (frame_w, frame_h) = state.frame();
        (
            viewport.width as i32 / 2 - frame_w / 2,
            viewport.height as i32 / 2 - frame_h / 2,
        )
    }

    fn style_for(entity: &Entity) -> CellStyle {
        match entity.kind {
            EntityKind::Apple => CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            _ => CellStyle::fg(Rgb::new(100, 220, 120)),
        }
    }

    /// Draw a frame-relative entity.
    fn draw_entity(fb: &mut FrameBuffer, origin: (i32, i32), entity: &Entity) {
        fb.fill_rect(
            origin.0 + entity.pos.col,
            origin.1 + entity.pos.row,
            entity.width,
            entity.height,
            entity.glyph,
            Self::style_for(entity),
        );
    }
}

impl View<SnakeState> for SnakeView {
    fn render_into(&self, state: &SnakeState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        fb.put_str(0, 0, "Score: ", TEXT);
        fb.put_u32(7, 0, state.score(), TEXT);

        let (x0, y0) = Self::frame_origin(state, viewport);
        let (frame_w, frame_h) = state.frame();
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        draw_border(fb, x0 - 1, y0 - 1, frame_w + 2, frame_h + 2, &DOUBLE_BORDER, border);

        for segment in state.snake().entities() {
            Self::draw_entity(fb, (x0, y0), &segment);
        }
        for (_, entity) in state.entities().iter() {
            Self::draw_entity(fb, (x0, y0), entity);
        }
    }

    fn render_summary_into(&self, state: &SnakeState, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into(state, viewport, fb);

        let mid_x = viewport.width as i32 / 2;
        let mid_y = viewport.height as i32 / 2;
        let score_line = format!("Your score is {}!", state.score());
        fb.put_str_centered(mid_x, mid_y - 1, "Game Over!", BANNER);
        fb.put_str_centered(mid_x, mid_y, &score_line, BANNER);
    }
}
