use egui::{Context, Pos2, Rect};

/// Canvas-local pointer events derived from raw egui input.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    /// Primary button pressed inside the canvas.
    Down { pos: Pos2 },
    /// Pointer moved. `inside` is canvas containment, `held` the primary
    /// button state.
    Moved { pos: Pos2, inside: bool, held: bool },
    /// Primary button released, wherever the pointer is.
    Up,
    /// Pointer entered the canvas.
    Entered { pos: Pos2 },
    /// Pointer left the canvas (or the window).
    Left,
}

/// Turns egui's per-frame pointer state into domain events, synthesizing
/// enter/leave from hover transitions against the canvas rect.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
    last_inside: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
            last_inside: false,
        }
    }

    /// Update the canvas rectangle (it depends on panel layout).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Translate this frame's pointer state into events, in order.
    pub fn poll(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            match input.pointer.hover_pos() {
                Some(pos) => {
                    let inside = self.canvas_rect.contains(pos);
                    let local = self.to_canvas(pos);
                    if inside && !self.last_inside {
                        events.push(PointerEvent::Entered { pos: local });
                    } else if !inside && self.last_inside {
                        events.push(PointerEvent::Left);
                    }
                    if input.pointer.primary_pressed() && inside {
                        events.push(PointerEvent::Down { pos: local });
                    }
                    if self.last_pos != Some(pos) {
                        events.push(PointerEvent::Moved {
                            pos: local,
                            inside,
                            held: input.pointer.primary_down(),
                        });
                    }
                    if input.pointer.primary_released() {
                        events.push(PointerEvent::Up);
                    }
                    self.last_pos = Some(pos);
                    self.last_inside = inside;
                }
                None => {
                    if self.last_inside {
                        events.push(PointerEvent::Left);
                    }
                    // A release can arrive after the pointer left the window;
                    // it still ends the gesture.
                    if input.pointer.primary_released() {
                        events.push(PointerEvent::Up);
                    }
                    self.last_pos = None;
                    self.last_inside = false;
                }
            }
        });
        events
    }
}
