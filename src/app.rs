use egui::{Color32, Sense, Vec2, vec2};
use log::error;

use crate::engine::RedrawEngine;
use crate::export;
use crate::gesture::GestureController;
use crate::history::ActionLog;
use crate::input::{InputHandler, PointerEvent};
use crate::preview::CursorPreview;
use crate::surface::{CANVAS_SIZE, PainterSurface};
use crate::tool::{THICK_WIDTH, THIN_WIDTH, ToolKind, ToolState};

/// The interactive sketchpad: wires pointer input, the tool panel, and the
/// action controls to the log and redraw engine.
pub struct SketchpadApp {
    log: ActionLog,
    engine: RedrawEngine,
    tools: ToolState,
    gesture: GestureController,
    preview: Option<CursorPreview>,
    input: InputHandler,
    show_sticker_prompt: bool,
    sticker_prompt_input: String,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut engine = RedrawEngine::new();
        let ctx = cc.egui_ctx.clone();
        engine.set_on_dirty(move || ctx.request_repaint());

        Self {
            log: ActionLog::new(),
            engine,
            tools: ToolState::new(),
            gesture: GestureController::new(),
            preview: None,
            input: InputHandler::new(egui::Rect::ZERO),
            show_sticker_prompt: false,
            sticker_prompt_input: String::new(),
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        for event in self.input.poll(ctx) {
            match event {
                PointerEvent::Down { pos } => {
                    self.gesture
                        .pointer_down(pos, &self.tools, &mut self.log, &mut self.engine);
                }
                PointerEvent::Moved { pos, inside, held } => {
                    if held {
                        self.gesture.pointer_move(
                            pos,
                            inside,
                            &self.tools,
                            &mut self.log,
                            &mut self.engine,
                        );
                    }
                    if inside {
                        self.preview = Some(CursorPreview::for_tool(&self.tools, pos));
                        self.engine.invalidate();
                    }
                }
                PointerEvent::Up => self.gesture.pointer_up(),
                PointerEvent::Entered { pos } => {
                    self.preview = Some(CursorPreview::for_tool(&self.tools, pos));
                    self.engine.invalidate();
                }
                PointerEvent::Left => {
                    self.preview = None;
                    self.engine.invalidate();
                }
            }
        }
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.separator();

        let is_marker = |tools: &ToolState, w: f32| {
            matches!(tools.active(), ToolKind::Marker { width } if *width == w)
        };
        if ui
            .selectable_label(is_marker(&self.tools, THIN_WIDTH), "✏ Thin marker")
            .clicked()
        {
            self.tools.select_marker(THIN_WIDTH);
            self.engine.invalidate();
        }
        if ui
            .selectable_label(is_marker(&self.tools, THICK_WIDTH), "🖌 Thick marker")
            .clicked()
        {
            self.tools.select_marker(THICK_WIDTH);
            self.engine.invalidate();
        }

        ui.separator();

        let is_sticker = |tools: &ToolState, g: &str| {
            matches!(tools.active(), ToolKind::Sticker { glyph } if glyph == g)
        };
        let mut selected_sticker: Option<String> = None;
        for glyph in self.tools.builtin_stickers() {
            if ui.selectable_label(is_sticker(&self.tools, glyph), glyph).clicked() {
                selected_sticker = Some(glyph.clone());
            }
        }
        if let Some(glyph) = self.tools.custom_sticker() {
            if ui.selectable_label(is_sticker(&self.tools, glyph), glyph).clicked() {
                selected_sticker = Some(glyph.to_owned());
            }
        }
        if let Some(glyph) = selected_sticker {
            self.tools.select_sticker(&glyph);
            self.engine.invalidate();
        }
        if ui.button("Custom sticker…").clicked() {
            self.show_sticker_prompt = true;
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Next color:");
            let (rect, _) = ui.allocate_exact_size(vec2(16.0, 16.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, self.tools.next_stroke_color());
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.log.can_undo(), egui::Button::new("Undo"))
                .clicked()
                && self.log.undo()
            {
                self.engine.invalidate();
            }
            if ui
                .add_enabled(self.log.can_redo(), egui::Button::new("Redo"))
                .clicked()
                && self.log.redo()
            {
                self.engine.invalidate();
            }
        });
        if ui.button("Clear").clicked() {
            self.log.clear();
            self.engine.invalidate();
        }
        if ui.button("Export PNG").clicked() {
            self.export();
        }
    }

    fn export(&self) {
        let dialog = rfd::FileDialog::new()
            .set_file_name("sketch.png")
            .add_filter("PNG Image", &["png"]);
        // Cancelled dialog aborts the export silently.
        let Some(path) = dialog.save_file() else {
            return;
        };
        if let Err(err) = export::export_png(&self.log, &path) {
            error!("export failed: {err}");
        }
    }

    fn sticker_prompt(&mut self, ctx: &egui::Context) {
        if !self.show_sticker_prompt {
            return;
        }
        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Sticker text:");
                ui.text_edit_singleline(&mut self.sticker_prompt_input);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        // Empty input leaves the tool selection and sticker
                        // set unchanged, same as cancelling.
                        let input = self.sticker_prompt_input.clone();
                        if self.tools.set_custom_sticker(&input) {
                            self.engine.invalidate();
                        }
                        self.show_sticker_prompt = false;
                        self.sticker_prompt_input.clear();
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_sticker_prompt = false;
                        self.sticker_prompt_input.clear();
                    }
                });
            });
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tools_panel").show(ctx, |ui| self.tools_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sketchpad");

            let (response, painter) =
                ui.allocate_painter(Vec2::splat(CANVAS_SIZE as f32), Sense::click_and_drag());
            self.input.set_canvas_rect(response.rect);
            self.handle_pointer(ctx);

            // Immediate mode paints every frame; the dirty flag's observer
            // requests frames, so bursts of invalidations stay one repaint.
            let clipped = painter.with_clip_rect(response.rect);
            let mut surface = PainterSurface::new(&clipped, response.rect);
            self.engine
                .repaint(&mut surface, self.log.snapshot(), self.preview.as_ref());

            ui.painter().rect_stroke(
                response.rect,
                0.0,
                egui::Stroke::new(1.0, Color32::GRAY),
            );
        });

        self.sticker_prompt(ctx);
    }
}
