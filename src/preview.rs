use egui::{Color32, Pos2};

use crate::surface::Surface;
use crate::tool::{STICKER_SIZE, ToolKind, ToolState};

/// Transient rendering of what the active tool would draw at the pointer.
///
/// Never enters the action log: it is rebuilt from the tool state on every
/// pointer move and dropped when the pointer leaves the canvas.
#[derive(Clone, Debug)]
pub struct CursorPreview {
    pos: Pos2,
    appearance: Appearance,
}

#[derive(Clone, Debug)]
enum Appearance {
    /// Unfilled circle of the active marker's thickness, in the color the
    /// next stroke will take.
    MarkerRing { radius: f32, color: Color32 },
    /// The sticker glyph at reduced opacity.
    StickerGhost { glyph: String },
}

impl CursorPreview {
    pub fn for_tool(tools: &ToolState, pos: Pos2) -> Self {
        let appearance = match tools.active() {
            ToolKind::Marker { width } => Appearance::MarkerRing {
                radius: *width,
                color: tools.next_stroke_color(),
            },
            ToolKind::Sticker { glyph } => Appearance::StickerGhost {
                glyph: glyph.clone(),
            },
        };
        Self { pos, appearance }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match &self.appearance {
            Appearance::MarkerRing { radius, color } => {
                surface.circle_outline(self.pos, *radius, *color);
            }
            Appearance::StickerGhost { glyph } => {
                surface.glyph(
                    glyph,
                    self.pos,
                    STICKER_SIZE,
                    Color32::BLACK.gamma_multiply(0.4),
                );
            }
        }
    }
}
