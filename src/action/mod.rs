mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::{Stroke, StrokePoint};

use crate::surface::Surface;

/// One undoable unit of drawn content.
///
/// A closed variant set: new tools add variants here rather than branching
/// on identity elsewhere. The redraw engine only ever calls [`Action::render`].
#[derive(Clone, Debug)]
pub enum Action {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Action {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Action::Stroke(stroke) => stroke.render(surface),
            Action::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Action::Stroke(_) => "stroke",
            Action::Sticker(_) => "sticker",
        }
    }
}
