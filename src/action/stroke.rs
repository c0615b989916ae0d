use egui::{Color32, Pos2};

use crate::surface::Surface;

/// One sample along a stroke.
///
/// Width is recorded per point so a marker change mid-gesture takes effect
/// from the point where it happened, not retroactively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePoint {
    pub pos: Pos2,
    pub width: f32,
}

/// A freehand polyline with a color fixed at creation.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<StrokePoint>,
    color: Color32,
}

impl Stroke {
    /// Start a stroke at the pointer-down position.
    pub fn new(color: Color32, start: Pos2, width: f32) -> Self {
        Self {
            points: vec![StrokePoint { pos: start, width }],
            color,
        }
    }

    /// Append a sample. Only valid while the stroke is the current gesture.
    pub fn extend(&mut self, pos: Pos2, width: f32) {
        self.points.push(StrokePoint { pos, width });
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// A single-sample stroke is visually empty; with two or more samples
    /// this draws a connected polyline. Each segment takes the width of its
    /// destination point.
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        for pair in self.points.windows(2) {
            surface.line(pair[0].pos, pair[1].pos, pair[1].width, self.color);
        }
    }
}
