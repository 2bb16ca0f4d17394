//! PongView: maps `core::PongState` into a terminal framebuffer.
//!
//! Game coordinates are surface coordinates here: row is y, col is x.

use crate::core::{Entity, EntityKind, PongState, Side};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::view::{View, Viewport, TEXT};

#[derive(Debug, Clone, Copy, Default)]
pub struct PongView;

impl PongView {
    fn style_for(entity: &Entity) -> CellStyle {
        match entity.kind {
            EntityKind::Ball => CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            _ => CellStyle::fg(Rgb::new(230, 230, 230)),
        }
    }

    fn draw_entity(fb: &mut FrameBuffer, entity: &Entity) {
        fb.fill_rect(
            entity.pos.col,
            entity.pos.row,
            entity.width,
            entity.height,
            entity.glyph,
            Self::style_for(entity),
        );
    }

    /// "L : R" centred on the top row.
    fn draw_score(fb: &mut FrameBuffer, state: &PongState, viewport: Viewport) {
        let style = TEXT.dim();
        let mid = viewport.width as i32 / 2;
        let left = state.score(Side::Left);

        let left_len = digits(left);
        fb.put_u32(mid - 1 - left_len, 0, left, style);
        fb.set_cell(mid, 0, ':', style);
        fb.put_u32(mid + 2, 0, state.score(Side::Right), style);
    }
}

fn digits(mut n: u32) -> i32 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

impl View<PongState> for PongView {
    fn render_into(&self, state: &PongState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        Self::draw_score(fb, state, viewport);
        for (_, entity) in state.entities().iter() {
            Self::draw_entity(fb, entity);
        }
    }
}
