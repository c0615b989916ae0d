use egui::Color32;

pub const THIN_WIDTH: f32 = 2.0;
pub const THICK_WIDTH: f32 = 6.0;

/// Display size of placed stickers, in logical pixels.
pub const STICKER_SIZE: f32 = 24.0;

/// Stroke colors, cycled one step per tool-button click.
pub const PALETTE: [Color32; 5] = [
    Color32::BLACK,
    Color32::from_rgb(0xc0, 0x39, 0x2b),
    Color32::from_rgb(0x27, 0x6f, 0xbf),
    Color32::from_rgb(0x2e, 0x8b, 0x57),
    Color32::from_rgb(0xd8, 0x7f, 0x0a),
];

/// What kind of action a pointer-down gesture creates.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolKind {
    Marker { width: f32 },
    Sticker { glyph: String },
}

/// Process-wide tool selection: exactly one active tool, the sticker set,
/// and the palette cursor for the next stroke color.
pub struct ToolState {
    active: ToolKind,
    palette_index: usize,
    builtin_stickers: Vec<String>,
    custom_sticker: Option<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self {
            active: ToolKind::Marker { width: THIN_WIDTH },
            palette_index: 0,
            builtin_stickers: vec!["🙂".to_owned(), "🌟".to_owned(), "🎃".to_owned()],
            custom_sticker: None,
        }
    }

    pub fn active(&self) -> &ToolKind {
        &self.active
    }

    /// The color the next committed stroke will take.
    pub fn next_stroke_color(&self) -> Color32 {
        PALETTE[self.palette_index]
    }

    // Rotates on every tool-button click, sticker buttons included, so the
    // "next" color can change several times before a stroke is ever drawn.
    // Matches the source behavior; the preview circle may show a color no
    // stroke ends up using.
    fn rotate_color(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTE.len();
    }

    pub fn select_marker(&mut self, width: f32) {
        self.active = ToolKind::Marker { width };
        self.rotate_color();
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.active = ToolKind::Sticker {
            glyph: glyph.to_owned(),
        };
        self.rotate_color();
    }

    pub fn builtin_stickers(&self) -> &[String] {
        &self.builtin_stickers
    }

    pub fn custom_sticker(&self) -> Option<&str> {
        self.custom_sticker.as_deref()
    }

    /// Seed the custom sticker slot from prompt input and select it.
    ///
    /// Empty or whitespace-only input returns false and leaves the previous
    /// tool selection and sticker set unchanged.
    pub fn set_custom_sticker(&mut self, input: &str) -> bool {
        let glyph = input.trim();
        if glyph.is_empty() {
            return false;
        }
        self.custom_sticker = Some(glyph.to_owned());
        self.select_sticker(glyph);
        true
    }
}
