//! Offscreen raster rendering onto a tiny-skia pixmap, used by PNG export.
//!
//! Strokes become stroked two-point paths with round caps; sticker glyphs
//! are outlined with skrifa from egui's embedded default fonts and filled
//! as paths, so no font assets ship with the binary and exported glyphs use
//! the same families as the live canvas.

use egui::{Color32, FontFamily, Pos2};
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::OutlinePen;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke as SkiaStroke, Transform,
};

use crate::surface::Surface;

/// [`Surface`] implementation over a [`Pixmap`], drawing canvas-local
/// coordinates at a fixed supersampling scale.
pub struct PixmapSurface {
    pixmap: Pixmap,
    scale: f32,
    fonts: GlyphFonts,
}

impl PixmapSurface {
    /// Allocate a pixmap of `logical * scale` pixels per axis.
    pub fn new(logical: u32, scale: f32) -> Option<Self> {
        let px = (logical as f32 * scale).round() as u32;
        let pixmap = Pixmap::new(px, px)?;
        Some(Self {
            pixmap,
            scale,
            fonts: GlyphFonts::from_egui_defaults(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn solid_paint(color: Color32) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
        paint.anti_alias = true;
        paint
    }

    fn round_stroke(width: f32) -> SkiaStroke {
        SkiaStroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        }
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self, color: Color32) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            color.r(),
            color.g(),
            color.b(),
            color.a(),
        ));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x * self.scale, from.y * self.scale);
        pb.line_to(to.x * self.scale, to.y * self.scale);
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &Self::solid_paint(color),
            &Self::round_stroke(width * self.scale),
            Transform::identity(),
            None,
        );
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, color: Color32) {
        let px = size * self.scale;
        let sk_size = Size::new(px);
        let location = LocationRef::default();

        // First pass: resolve each char to a font and glyph id and measure
        // the run so it can be centered like the live painter centers text.
        let mut run: Vec<(FontRef<'_>, GlyphId, f32)> = Vec::new();
        let mut total_advance = 0.0f32;
        let mut ascent = 0.0f32;
        let mut descent = 0.0f32;
        for ch in glyph.chars() {
            let Some((font, gid)) = self.fonts.resolve(ch) else {
                continue;
            };
            let metrics = font.metrics(sk_size, location);
            ascent = ascent.max(metrics.ascent);
            descent = descent.min(metrics.descent);
            let advance = GlyphMetrics::new(&font, sk_size, location)
                .advance_width(gid)
                .unwrap_or(px * 0.6);
            run.push((font, gid, total_advance));
            total_advance += advance;
        }
        if run.is_empty() {
            return;
        }

        // Second pass: outline every glyph into one path. Font outlines are
        // Y-up; the pen flips them around the baseline.
        let start_x = center.x * self.scale - total_advance / 2.0;
        let baseline_y = center.y * self.scale + (ascent + descent) / 2.0;
        let mut pen = PathPen {
            builder: PathBuilder::new(),
            origin_x: start_x,
            origin_y: baseline_y,
        };
        for (font, gid, offset) in run {
            pen.origin_x = start_x + offset;
            if let Some(outline) = font.outline_glyphs().get(gid) {
                let _ = outline.draw(sk_size, &mut pen);
            }
        }

        if let Some(path) = pen.builder.finish() {
            self.pixmap.fill_path(
                &path,
                &Self::solid_paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        let mut pb = PathBuilder::new();
        pb.push_circle(center.x * self.scale, center.y * self.scale, radius * self.scale);
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &Self::solid_paint(color),
            &Self::round_stroke(self.scale),
            Transform::identity(),
            None,
        );
    }
}

/// Proportional-family font bytes from egui's embedded defaults, in
/// fallback order.
struct GlyphFonts {
    fonts: Vec<Vec<u8>>,
}

impl GlyphFonts {
    fn from_egui_defaults() -> Self {
        let defs = egui::FontDefinitions::default();
        let order = defs
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();
        let fonts = order
            .iter()
            .filter_map(|name| defs.font_data.get(name))
            .map(|data| data.font.to_vec())
            .collect();
        Self { fonts }
    }

    /// First font in fallback order whose character map covers `ch`.
    fn resolve(&self, ch: char) -> Option<(FontRef<'_>, GlyphId)> {
        for bytes in &self.fonts {
            let Ok(font) = FontRef::new(bytes) else {
                continue;
            };
            if let Some(gid) = font.charmap().map(ch) {
                return Some((font, gid));
            }
        }
        None
    }
}

/// Records a glyph outline into a tiny-skia path, translated to the pen
/// origin and flipped to Y-down.
struct PathPen {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.origin_x + x, self.origin_y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.origin_x + x, self.origin_y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.origin_x + cx0,
            self.origin_y - cy0,
            self.origin_x + x,
            self.origin_y - y,
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.origin_x + cx0,
            self.origin_y - cy0,
            self.origin_x + cx1,
            self.origin_y - cy1,
            self.origin_x + x,
            self.origin_y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
