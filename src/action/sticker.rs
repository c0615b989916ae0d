use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A glyph placed on the canvas. The glyph and size are fixed at creation;
/// the anchor moves while the placing gesture is still active.
#[derive(Clone, Debug)]
pub struct Sticker {
    glyph: String,
    pos: Pos2,
    size: f32,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, pos: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            pos,
            size,
        }
    }

    /// Move the anchor. Only valid while the sticker is the current gesture.
    pub fn reposition(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.glyph, self.pos, self.size, Color32::BLACK);
    }
}
