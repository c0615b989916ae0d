use egui::Pos2;

use crate::action::{Action, Sticker, Stroke};
use crate::engine::RedrawEngine;
use crate::history::ActionLog;
use crate::tool::{STICKER_SIZE, THIN_WIDTH, ToolKind, ToolState};

/// `Active` means a pointer-down has committed an action that is still
/// being extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GestureState {
    Idle,
    Active,
}

/// Pointer gesture state machine: Idle → Active on pointer-down,
/// Active → Idle on pointer-up.
///
/// The in-flight action lives at the end of the committed history from the
/// moment it is created; pointer-up freezes it without adding a log entry.
/// A move with no current action is ignored rather than treated as an error.
pub struct GestureController {
    state: GestureState,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == GestureState::Active
    }

    /// Create and commit the action the active tool draws, and enter Active.
    pub fn pointer_down(
        &mut self,
        pos: Pos2,
        tools: &ToolState,
        log: &mut ActionLog,
        engine: &mut RedrawEngine,
    ) {
        if self.state == GestureState::Active {
            return;
        }
        let action = match tools.active() {
            ToolKind::Marker { width } => {
                Action::Stroke(Stroke::new(tools.next_stroke_color(), pos, *width))
            }
            ToolKind::Sticker { glyph } => {
                Action::Sticker(Sticker::new(glyph.clone(), pos, STICKER_SIZE))
            }
        };
        log.commit(action);
        engine.invalidate();
        self.state = GestureState::Active;
    }

    /// Extend or reposition the current action. Ignored when no gesture is
    /// active or the pointer is outside the canvas (the gesture stays
    /// logically active off-canvas but cannot extend).
    pub fn pointer_move(
        &mut self,
        pos: Pos2,
        inside: bool,
        tools: &ToolState,
        log: &mut ActionLog,
        engine: &mut RedrawEngine,
    ) {
        if self.state != GestureState::Active || !inside {
            return;
        }
        let Some(current) = log.current_mut() else {
            return;
        };
        match current {
            Action::Stroke(stroke) => {
                // Width follows the active marker so a mid-gesture tool
                // change takes effect from this point on. A switch to a
                // sticker tool mid-stroke keeps the width in effect.
                let width = match tools.active() {
                    ToolKind::Marker { width } => *width,
                    ToolKind::Sticker { .. } => {
                        stroke.points().last().map_or(THIN_WIDTH, |p| p.width)
                    }
                };
                stroke.extend(pos, width);
            }
            Action::Sticker(sticker) => sticker.reposition(pos),
        }
        engine.invalidate();
    }

    /// Freeze the current action and return to Idle. Finalizes even when the
    /// release happens after the pointer left the canvas.
    pub fn pointer_up(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use crate::tool::THICK_WIDTH;

    fn rig() -> (GestureController, ToolState, ActionLog, RedrawEngine) {
        (
            GestureController::new(),
            ToolState::new(),
            ActionLog::new(),
            RedrawEngine::new(),
        )
    }

    #[test]
    fn move_without_down_is_ignored() {
        let (mut gesture, tools, mut log, mut engine) = rig();
        gesture.pointer_move(pos2(10.0, 10.0), true, &tools, &mut log, &mut engine);
        assert!(log.snapshot().is_empty());
        assert!(!engine.is_dirty());
    }

    #[test]
    fn down_commits_and_move_extends() {
        let (mut gesture, tools, mut log, mut engine) = rig();
        gesture.pointer_down(pos2(1.0, 1.0), &tools, &mut log, &mut engine);
        assert!(gesture.is_active());
        gesture.pointer_move(pos2(2.0, 2.0), true, &tools, &mut log, &mut engine);
        gesture.pointer_move(pos2(3.0, 3.0), true, &tools, &mut log, &mut engine);

        let [Action::Stroke(stroke)] = log.snapshot() else {
            panic!("expected a single stroke");
        };
        assert_eq!(stroke.points().len(), 3);
    }

    #[test]
    fn marker_change_mid_stroke_changes_width_from_that_point() {
        let (mut gesture, mut tools, mut log, mut engine) = rig();
        gesture.pointer_down(pos2(0.0, 0.0), &tools, &mut log, &mut engine);
        gesture.pointer_move(pos2(1.0, 0.0), true, &tools, &mut log, &mut engine);
        tools.select_marker(THICK_WIDTH);
        gesture.pointer_move(pos2(2.0, 0.0), true, &tools, &mut log, &mut engine);

        let [Action::Stroke(stroke)] = log.snapshot() else {
            panic!("expected a single stroke");
        };
        let widths: Vec<f32> = stroke.points().iter().map(|p| p.width).collect();
        assert_eq!(widths, vec![THIN_WIDTH, THIN_WIDTH, THICK_WIDTH]);
    }

    #[test]
    fn pointer_up_off_canvas_finalizes() {
        let (mut gesture, tools, mut log, mut engine) = rig();
        gesture.pointer_down(pos2(1.0, 1.0), &tools, &mut log, &mut engine);
        gesture.pointer_move(pos2(2.0, 2.0), true, &tools, &mut log, &mut engine);
        // Pointer leaves the canvas while pressed: still active, cannot extend.
        gesture.pointer_move(pos2(-5.0, 2.0), false, &tools, &mut log, &mut engine);
        assert!(gesture.is_active());
        // Release arrives off-canvas and ends the gesture.
        gesture.pointer_up();
        assert!(!gesture.is_active());

        let [Action::Stroke(stroke)] = log.snapshot() else {
            panic!("expected a single stroke");
        };
        assert_eq!(stroke.points().len(), 2);

        // Later moves no longer touch the frozen action.
        gesture.pointer_move(pos2(9.0, 9.0), true, &tools, &mut log, &mut engine);
        let [Action::Stroke(stroke)] = log.snapshot() else {
            panic!("expected a single stroke");
        };
        assert_eq!(stroke.points().len(), 2);
    }

    #[test]
    fn sticker_tool_places_and_repositions() {
        let (mut gesture, mut tools, mut log, mut engine) = rig();
        tools.select_sticker("🎃");
        gesture.pointer_down(pos2(10.0, 10.0), &tools, &mut log, &mut engine);
        gesture.pointer_move(pos2(40.0, 50.0), true, &tools, &mut log, &mut engine);
        gesture.pointer_up();

        let [Action::Sticker(sticker)] = log.snapshot() else {
            panic!("expected a single sticker");
        };
        assert_eq!(sticker.glyph(), "🎃");
        assert_eq!(sticker.pos(), pos2(40.0, 50.0));
    }
}
