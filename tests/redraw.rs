use std::cell::Cell;
use std::rc::Rc;

use egui::{Color32, Pos2, pos2};
use sketchpad::{
    Action, ActionLog, BACKGROUND, CursorPreview, RedrawEngine, Sticker, Stroke, Surface,
    ToolState, tool,
};

/// Records draw calls instead of rasterizing, standing in for the GUI.
#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Color32),
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        center: Pos2,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.ops.push(Op::Clear(color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.ops.push(Op::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, _size: f32, _color: Color32) {
        self.ops.push(Op::Glyph {
            glyph: glyph.to_owned(),
            center,
        });
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
        });
    }
}

fn render(engine: &mut RedrawEngine, log: &ActionLog, preview: Option<&CursorPreview>) -> Vec<Op> {
    let mut surface = RecordingSurface::default();
    engine.repaint(&mut surface, log.snapshot(), preview);
    surface.ops
}

#[test]
fn invalidation_bursts_coalesce_into_one_repaint() {
    let mut engine = RedrawEngine::new();
    let notifications = Rc::new(Cell::new(0u32));
    let counter = notifications.clone();
    engine.set_on_dirty(move || counter.set(counter.get() + 1));

    let log = ActionLog::new();
    for _ in 0..10 {
        engine.invalidate();
    }
    // Ten synchronous invalidations: one observer notification.
    assert_eq!(notifications.get(), 1);

    let mut surface = RecordingSurface::default();
    assert!(engine.repaint_if_dirty(&mut surface, log.snapshot(), None));
    assert_eq!(surface.ops, vec![Op::Clear(BACKGROUND)]);

    // Drained: a second repaint request does nothing until invalidated again.
    assert!(!engine.repaint_if_dirty(&mut surface, log.snapshot(), None));
    assert_eq!(surface.ops.len(), 1);

    assert!(engine.invalidate());
    assert_eq!(notifications.get(), 2);
    assert!(engine.repaint_if_dirty(&mut surface, log.snapshot(), None));
}

#[test]
fn single_point_stroke_renders_no_visible_mark() {
    let mut engine = RedrawEngine::new();
    let mut log = ActionLog::new();
    log.commit(Action::Stroke(Stroke::new(Color32::BLACK, pos2(5.0, 5.0), 2.0)));

    let ops = render(&mut engine, &log, None);
    assert_eq!(ops, vec![Op::Clear(BACKGROUND)]);
}

#[test]
fn polyline_visits_every_point_with_destination_widths() {
    let mut engine = RedrawEngine::new();
    let mut log = ActionLog::new();

    let mut stroke = Stroke::new(Color32::BLACK, pos2(0.0, 0.0), 2.0);
    stroke.extend(pos2(10.0, 0.0), 2.0);
    stroke.extend(pos2(20.0, 5.0), 6.0);
    log.commit(Action::Stroke(stroke));

    let ops = render(&mut engine, &log, None);
    assert_eq!(
        ops,
        vec![
            Op::Clear(BACKGROUND),
            Op::Line {
                from: pos2(0.0, 0.0),
                to: pos2(10.0, 0.0),
                width: 2.0,
                color: Color32::BLACK,
            },
            // The width change takes effect at the segment ending on the
            // point where it was recorded, not retroactively.
            Op::Line {
                from: pos2(10.0, 0.0),
                to: pos2(20.0, 5.0),
                width: 6.0,
                color: Color32::BLACK,
            },
        ]
    );
}

#[test]
fn undo_redo_scenario_matches_render_order() {
    let mut engine = RedrawEngine::new();
    let mut log = ActionLog::new();

    let mut stroke = Stroke::new(Color32::BLACK, pos2(0.0, 0.0), 2.0);
    stroke.extend(pos2(10.0, 10.0), 2.0);
    log.commit(Action::Stroke(stroke));
    log.commit(Action::Sticker(Sticker::new("🎃", pos2(8.0, 8.0), 24.0)));

    // Undo: only the stroke remains.
    assert!(log.undo());
    let ops = render(&mut engine, &log, None);
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[1], Op::Line { .. }));

    // Redo: stroke then sticker, sticker drawn last (occludes overlap).
    assert!(log.redo());
    let ops = render(&mut engine, &log, None);
    assert_eq!(ops.len(), 3);
    assert!(matches!(ops[1], Op::Line { .. }));
    assert!(matches!(ops[2], Op::Glyph { .. }));

    // Clear: nothing renders and redo is a no-op.
    log.clear();
    let ops = render(&mut engine, &log, None);
    assert_eq!(ops, vec![Op::Clear(BACKGROUND)]);
    assert!(!log.redo());
}

#[test]
fn undo_then_redo_is_idempotent_on_the_render() {
    let mut engine = RedrawEngine::new();
    let mut log = ActionLog::new();

    let mut stroke = Stroke::new(Color32::BLACK, pos2(0.0, 0.0), 2.0);
    stroke.extend(pos2(30.0, 30.0), 2.0);
    log.commit(Action::Stroke(stroke));
    log.commit(Action::Sticker(Sticker::new("🌟", pos2(50.0, 50.0), 24.0)));

    let before = render(&mut engine, &log, None);
    assert!(log.undo());
    assert!(log.redo());
    let after = render(&mut engine, &log, None);
    assert_eq!(before, after);
}

#[test]
fn preview_renders_last_and_is_never_logged() {
    let mut engine = RedrawEngine::new();
    let mut log = ActionLog::new();

    let mut stroke = Stroke::new(Color32::BLACK, pos2(0.0, 0.0), 2.0);
    stroke.extend(pos2(10.0, 10.0), 2.0);
    log.commit(Action::Stroke(stroke));

    // Fresh tool state: thin marker, first palette color.
    let tools = ToolState::new();
    let preview = CursorPreview::for_tool(&tools, pos2(42.0, 42.0));

    let ops = render(&mut engine, &log, Some(&preview));
    assert_eq!(
        ops.last(),
        Some(&Op::Circle {
            center: pos2(42.0, 42.0),
            radius: tool::THIN_WIDTH,
            color: tool::PALETTE[0],
        })
    );

    // The preview never entered the history.
    assert_eq!(log.snapshot().len(), 1);
    let without_preview = render(&mut engine, &log, None);
    assert_eq!(without_preview.len(), ops.len() - 1);
}

#[test]
fn sticker_preview_is_a_ghost_glyph() {
    let mut engine = RedrawEngine::new();
    let log = ActionLog::new();

    let mut tools = ToolState::new();
    tools.select_sticker("🙂");
    let preview = CursorPreview::for_tool(&tools, pos2(12.0, 34.0));

    let ops = render(&mut engine, &log, Some(&preview));
    assert_eq!(
        ops.last(),
        Some(&Op::Glyph {
            glyph: "🙂".to_owned(),
            center: pos2(12.0, 34.0),
        })
    );
}
