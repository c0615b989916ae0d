#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod engine;
pub mod error;
pub mod export;
pub mod gesture;
pub mod history;
pub mod input;
pub mod preview;
pub mod raster;
pub mod surface;
pub mod tool;

pub use action::{Action, Sticker, Stroke, StrokePoint};
pub use app::SketchpadApp;
pub use engine::RedrawEngine;
pub use error::ExportError;
pub use gesture::GestureController;
pub use history::ActionLog;
pub use input::{InputHandler, PointerEvent};
pub use preview::CursorPreview;
pub use raster::PixmapSurface;
pub use surface::{BACKGROUND, CANVAS_SIZE, PainterSurface, Surface};
pub use tool::{ToolKind, ToolState};
