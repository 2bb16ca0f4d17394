//! Where frames go.
//!
//! The loop only needs a size and a place to present frames. The terminal is
//! one such place; [`HeadlessSurface`] records frames in memory so whole game
//! sessions can run under test without a tty.

use std::collections::VecDeque;

use anyhow::Result;

use crate::input::KeyPoll;
use crate::term::{FrameBuffer, TerminalRenderer};
use crate::types::Key;

pub trait Surface {
    /// Current size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;

    /// Show `fb`. Implementations may leave any content in `fb` afterwards;
    /// views clear it before drawing.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

impl Surface for TerminalRenderer {
    fn size(&self) -> Result<(u16, u16)> {
        TerminalRenderer::size(self)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        TerminalRenderer::present(self, fb)
    }
}

/// In-memory surface that keeps every presented frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    width: u16,
    height: u16,
    frames: Vec<FrameBuffer>,
}

impl HeadlessSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    /// Change the reported size, as a terminal resize would.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }
}

/// Replays a fixed script of per-tick samples; `None` once it runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
}

impl ScriptedKeys {
    pub fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeyPoll for ScriptedKeys {
    fn poll(&mut self) -> Option<Key> {
        self.script.pop_front().flatten()
    }
}
