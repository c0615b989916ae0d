use egui::{Align2, Color32, FontId, Pos2};

/// Canvas edge length in logical pixels.
pub const CANVAS_SIZE: u32 = 256;

/// Canvas background, also used behind exported images.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Minimal drawing operations the redraw engine needs from a render target.
///
/// Coordinates are canvas-local (origin top-left, `CANVAS_SIZE` per axis);
/// implementations handle translation to screen space or scaling to raster
/// pixels.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color32);

    /// Draw one stroked line segment.
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    /// Draw glyph text centered at `center` at the given point size.
    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, color: Color32);

    /// Draw an unfilled circle (used by the marker cursor preview).
    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Live surface over an [`egui::Painter`] clipped to the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, color),
        );
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(size),
            color,
        );
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, egui::Stroke::new(1.0, color));
    }
}
